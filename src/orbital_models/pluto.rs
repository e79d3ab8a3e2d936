//! # Pluto
//!
//! Closed-form periodic series of Paul Schlyter, fitted for 1885–2099, in two arguments
//! linear in the day number `d`:
//!
//! ```text
//! S = 50.03°  + 0.033459652° d
//! P = 238.95° + 0.003968789° d
//! ```
//!
//! The series give heliocentric longitude, latitude and distance referred to the J2000
//! ecliptic. Velocities are the term-by-term derivatives of the same series. The result is
//! precessed to the ecliptic of date with [`ecliptic_precession`] so that Pluto lives in the
//! same frame as the VSOP87 planets; the velocity picks up the rate of that rotation.
use crate::{
    constants::{DAYS_PER_MILLENNIUM, RADEG},
    coordinates::{PhaseCartesian, PhaseSpherical, Spherical},
    earth_orientation::{ecliptic_precession, ecliptic_precession_rate},
    ephemeris_errors::EphemerisError,
    orbital_models::{DistanceUnit, ModelCache, ModelKind, OrbitalModel},
    time::Instant,
};

const S0: f64 = 50.03;
const S1: f64 = 0.033459652;
const P0: f64 = 238.95;
const P1: f64 = 0.003968789;

/// One coordinate:
/// `base + rate·d + Σₖ (sₖ sin kP + cₖ cos kP) + s' sin(S−P) + c' cos(S−P)`
struct PlutoSeries {
    base: f64,
    rate: f64,
    /// `(sin, cos)` amplitudes of the harmonics of P, k = 1, 2, ...
    harmonics: &'static [(f64, f64)],
    /// `(sin, cos)` amplitudes of the S − P term
    cross: (f64, f64),
}

const LONGITUDE: PlutoSeries = PlutoSeries {
    base: 238.9508,
    rate: 0.00400703,
    harmonics: &[
        (-19.799, 19.848),
        (0.897, -4.956),
        (0.610, 1.211),
        (-0.341, -0.190),
        (0.128, -0.034),
        (-0.038, 0.031),
    ],
    cross: (0.020, -0.010),
};

const LATITUDE: PlutoSeries = PlutoSeries {
    base: -3.9082,
    rate: 0.0,
    harmonics: &[
        (-5.453, -14.975),
        (3.527, 1.673),
        (-1.051, 0.328),
        (0.179, -0.292),
        (0.019, 0.100),
        (-0.031, -0.026),
    ],
    cross: (0.0, 0.011),
};

const DISTANCE: PlutoSeries = PlutoSeries {
    base: 40.72,
    rate: 0.0,
    harmonics: &[(6.68, 6.90), (-1.18, -0.03), (0.15, -0.14)],
    cross: (0.0, 0.0),
};

impl PlutoSeries {
    /// Value and derivative per day; `s` and `p` in radians.
    fn evaluate(&self, d: f64, s: f64, p: f64) -> (f64, f64) {
        let p1 = P1 * RADEG;
        let sp1 = (S1 - P1) * RADEG;

        let mut value = self.base + self.rate * d;
        let mut derivative = self.rate;
        for (k, (a_sin, a_cos)) in self.harmonics.iter().enumerate() {
            let n = (k + 1) as f64;
            let (sin, cos) = (n * p).sin_cos();
            value += a_sin * sin + a_cos * cos;
            derivative += n * p1 * (a_sin * cos - a_cos * sin);
        }

        let (a_sin, a_cos) = self.cross;
        let (sin, cos) = (s - p).sin_cos();
        value += a_sin * sin + a_cos * cos;
        derivative += sp1 * (a_sin * cos - a_cos * sin);

        (value, derivative)
    }
}

/// Heliocentric spherical phase in the J2000 ecliptic: radians, AU and per-day rates.
pub fn pluto_j2000(d: f64) -> PhaseSpherical {
    let s = (S0 + S1 * d) * RADEG;
    let p = (P0 + P1 * d) * RADEG;

    let (lon, dlon) = LONGITUDE.evaluate(d, s, p);
    let (lat, dlat) = LATITUDE.evaluate(d, s, p);
    let (r, dr) = DISTANCE.evaluate(d, s, p);

    PhaseSpherical::new(
        Spherical::new(r, lon * RADEG, lat * RADEG),
        Spherical::new(dr, dlon * RADEG, dlat * RADEG),
    )
}

#[derive(Debug, Default)]
pub struct Pluto {
    cache: ModelCache<PhaseCartesian>,
}

impl Pluto {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrbitalModel for Pluto {
    fn kind(&self) -> ModelKind {
        ModelKind::Heliocentric
    }

    fn distance_unit(&self) -> DistanceUnit {
        DistanceUnit::AstronomicalUnit
    }

    fn compute_spherical(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseSpherical, EphemerisError> {
        Ok(self.compute_cartesian(instant, with_velocity)?.to_spherical())
    }

    fn compute_cartesian(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError> {
        Ok(*self.cache.get_or_compute(instant, with_velocity, || {
            let j2000 = pluto_j2000(instant.day_number()).to_cartesian();
            let t = instant.millennia_since_j2000();
            let precession = ecliptic_precession(t);
            let velocity = if with_velocity {
                precession * j2000.velocity
                    + ecliptic_precession_rate(t) * j2000.position / DAYS_PER_MILLENNIUM
            } else {
                nalgebra::Vector3::zeros()
            };
            PhaseCartesian::new(precession * j2000.position, velocity)
        }))
    }
}

#[cfg(test)]
mod pluto_test {
    use super::*;
    use crate::coordinates::principal_angle;
    use approx::assert_relative_eq;

    #[test]
    fn test_meeus_example_37a() {
        // 1992 October 13.0: l = 232.74071°, b = 14.58782°, r = 29.711111 AU (J2000)
        let d = Instant::from_julian_day(2448908.5).day_number();
        let phase = pluto_j2000(d);

        assert_relative_eq!(
            principal_angle(phase.position.longitude) / RADEG,
            232.74071,
            epsilon = 0.2
        );
        assert_relative_eq!(phase.position.latitude / RADEG, 14.58782, epsilon = 0.2);
        assert_relative_eq!(phase.position.distance, 29.711111, epsilon = 0.1);
    }

    #[test]
    fn test_rates_match_finite_difference() {
        let d = 6000.0;
        let h = 0.5;
        let phase = pluto_j2000(d);
        let ahead = pluto_j2000(d + h).position;
        let behind = pluto_j2000(d - h).position;

        assert_relative_eq!(
            phase.velocity.longitude,
            (ahead.longitude - behind.longitude) / (2.0 * h),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            phase.velocity.latitude,
            (ahead.latitude - behind.latitude) / (2.0 * h),
            epsilon = 1e-10
        );
        assert_relative_eq!(
            phase.velocity.distance,
            (ahead.distance - behind.distance) / (2.0 * h),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_model_is_precessed_to_date() {
        let instant = Instant::from_julian_day(2458239.5);
        let mut pluto = Pluto::new();
        let of_date = pluto.compute_spherical(instant, true).unwrap();
        let j2000 = pluto_j2000(instant.day_number());

        // general precession in longitude ≈ 50.29″ per year, 18.3 years
        let shift = principal_angle(of_date.position.longitude - j2000.position.longitude);
        assert_relative_eq!(shift / RADEG * 3600.0, 50.29 * 18.33, epsilon = 10.0);
        assert_relative_eq!(of_date.position.distance, j2000.position.distance, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_includes_precession_rate() {
        let mut pluto = Pluto::new();
        let t0 = Instant::from_julian_day(2458239.5);
        let h = 0.5;
        let velocity = pluto.compute_cartesian(t0, true).unwrap().velocity;
        let ahead = pluto.compute_cartesian(t0.add_days(h), false).unwrap().position;
        let behind = pluto.compute_cartesian(t0.add_days(-h), false).unwrap().position;
        assert_relative_eq!(velocity, (ahead - behind) / (2.0 * h), epsilon = 1e-9);
    }
}
