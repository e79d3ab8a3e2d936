//! # Lunar model
//!
//! Mean orbital elements of the Moon and of the Sun from Paul Schlyter's
//! "How to compute planetary positions", linear in the day number
//! `d = JD − 2451543.5`, referred to the ecliptic and equinox of date.
//!
//! The unperturbed ellipse is solved with Newton's method, then the largest periodic
//! perturbations are added in spherical coordinates:
//!
//! * 12 terms in longitude (evection, variation, yearly equation, ...),
//! * 5 terms in latitude,
//! * 2 terms in distance (Earth radii).
//!
//! The accuracy is of the order of a few arc minutes.
//!
//! The velocity is **not** the derivative of the position. It is the fixed rate
//! `(0, 2π / 29 d, 0)` in (distance, longitude, latitude): one synodic turn per 29 days
//! along the ecliptic.
use crate::{
    body::Body,
    constants::{DPI, RADEG},
    coordinates::{PhaseCartesian, PhaseSpherical, Spherical},
    ephemeris_errors::EphemerisError,
    orbit_type::{keplerian_element::KeplerianElements, KEPLER_TOLERANCE},
    orbital_models::{DistanceUnit, ModelCache, ModelKind, OrbitalModel},
    time::Instant,
};

/// Longitude rate of the approximate velocity, radians per day
const LONGITUDE_RATE: f64 = DPI / 29.0;

/// Semi-major axis of the Moon in Earth equatorial radii
const MOON_AXIS_EARTH_RADII: f64 = 60.2666;

fn moon_elements_base() -> KeplerianElements {
    KeplerianElements {
        ascending_node_longitude: 125.1228 * RADEG,
        inclination: 5.1454 * RADEG,
        periapsis_argument: 318.0634 * RADEG,
        semi_major_axis: MOON_AXIS_EARTH_RADII * Body::Earth.equatorial_radius(),
        eccentricity: 0.054900,
        mean_anomaly: 115.3654 * RADEG,
    }
}

fn moon_elements_rate() -> KeplerianElements {
    KeplerianElements {
        ascending_node_longitude: -0.0529538083 * RADEG,
        periapsis_argument: 0.1643573223 * RADEG,
        mean_anomaly: 13.0649929509 * RADEG,
        ..Default::default()
    }
}

fn sun_elements_base() -> KeplerianElements {
    KeplerianElements {
        periapsis_argument: 282.9404 * RADEG,
        semi_major_axis: 1.0,
        eccentricity: 0.016709,
        mean_anomaly: 356.0470 * RADEG,
        ..Default::default()
    }
}

fn sun_elements_rate() -> KeplerianElements {
    KeplerianElements {
        periapsis_argument: 4.70935e-5 * RADEG,
        eccentricity: -1.151e-9,
        mean_anomaly: 0.9856002585 * RADEG,
        ..Default::default()
    }
}

/// Mean elements of the Moon and the Sun at day number `d`.
pub fn mean_elements(d: f64) -> (KeplerianElements, KeplerianElements) {
    (
        moon_elements_base().propagate(&moon_elements_rate(), d),
        sun_elements_base().propagate(&sun_elements_rate(), d),
    )
}

/// Periodic corrections `(Δλ, Δβ, Δr)`, radians and Earth radii.
fn perturbations(moon: &KeplerianElements, sun: &KeplerianElements) -> (f64, f64, f64) {
    let mm = moon.mean_anomaly;
    let ms = sun.mean_anomaly;
    // mean elongation and argument of latitude
    let d = moon.mean_longitude() - sun.mean_longitude();
    let f = moon.mean_longitude() - moon.ascending_node_longitude;
    let dd = 2.0 * d;

    let longitude = -1.274 * (mm - dd).sin()
        + 0.658 * dd.sin()
        - 0.186 * ms.sin()
        - 0.059 * (2.0 * mm - dd).sin()
        - 0.057 * (mm - dd + ms).sin()
        + 0.053 * (mm + dd).sin()
        + 0.046 * (dd - ms).sin()
        + 0.041 * (mm - ms).sin()
        - 0.035 * d.sin()
        - 0.031 * (mm + ms).sin()
        - 0.015 * (2.0 * f - dd).sin()
        + 0.011 * (mm - 4.0 * d).sin();

    let latitude = -0.173 * (f - dd).sin()
        - 0.055 * (mm - f - dd).sin()
        - 0.046 * (mm + f - dd).sin()
        + 0.033 * (f + dd).sin()
        + 0.017 * (2.0 * mm + f).sin();

    let distance = -0.58 * (mm - dd).cos() - 0.46 * dd.cos();

    (longitude * RADEG, latitude * RADEG, distance)
}

/// Geocentric Moon, ecliptic of date, meters.
#[derive(Debug, Default)]
pub struct Moon {
    cache: ModelCache<PhaseSpherical>,
}

impl Moon {
    pub fn new() -> Self {
        Self::default()
    }

    fn compute(instant: Instant) -> Result<PhaseSpherical, EphemerisError> {
        let (moon, sun) = mean_elements(instant.day_number());
        let unperturbed = Spherical::from_cartesian(&moon.position(KEPLER_TOLERANCE)?);
        let (dlon, dlat, dr) = perturbations(&moon, &sun);

        let position = Spherical::new(
            unperturbed.distance + dr * Body::Earth.equatorial_radius(),
            unperturbed.longitude + dlon,
            unperturbed.latitude + dlat,
        );
        Ok(PhaseSpherical::new(
            position,
            Spherical::new(0.0, LONGITUDE_RATE, 0.0),
        ))
    }
}

impl OrbitalModel for Moon {
    fn kind(&self) -> ModelKind {
        ModelKind::Geocentric
    }

    fn distance_unit(&self) -> DistanceUnit {
        DistanceUnit::Meter
    }

    /// The velocity flag is ignored: the approximate velocity costs nothing.
    fn compute_spherical(
        &mut self,
        instant: Instant,
        _with_velocity: bool,
    ) -> Result<PhaseSpherical, EphemerisError> {
        self.cache
            .try_get_or_compute(instant, true, || Self::compute(instant))
            .copied()
    }

    fn compute_cartesian(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError> {
        Ok(self.compute_spherical(instant, with_velocity)?.to_cartesian())
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use crate::coordinates::principal_angle;
    use approx::assert_relative_eq;

    fn april_1990() -> Instant {
        Instant::from_gregorian_utc(1990, 4, 19, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_mean_elements() {
        let (moon, sun) = mean_elements(april_1990().day_number());
        assert_relative_eq!(april_1990().day_number(), -3543.0);

        let arcsec = RADEG / 3600.0;
        assert_relative_eq!(
            moon.ascending_node_longitude,
            principal_angle(312.7381 * RADEG),
            epsilon = arcsec
        );
        assert_relative_eq!(moon.inclination, 5.1454 * RADEG, epsilon = arcsec);
        assert_relative_eq!(
            moon.periapsis_argument,
            principal_angle(-264.2546 * RADEG),
            epsilon = arcsec
        );
        assert_relative_eq!(moon.eccentricity, 0.0549, epsilon = 1e-12);
        assert_relative_eq!(
            moon.mean_anomaly,
            principal_angle(-46173.9046 * RADEG),
            epsilon = arcsec
        );

        assert_relative_eq!(sun.eccentricity, 0.016709 + 1.151e-9 * 3543.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position_against_almanac() {
        // Astronomical Almanac: λ = 306.94°, β = −0.55°, Δ = 60.793 Earth radii
        let mut model = Moon::new();
        let phase = model.compute_spherical(april_1990(), false).unwrap();
        let arcmin = RADEG / 60.0;

        assert_relative_eq!(phase.position.longitude, 306.94 * RADEG, epsilon = 1.5 * arcmin);
        assert_relative_eq!(phase.position.latitude, -0.55 * RADEG, epsilon = 3.0 * arcmin);
        assert_relative_eq!(
            phase.position.distance / Body::Earth.equatorial_radius(),
            60.793,
            epsilon = 0.5
        );
    }

    #[test]
    fn test_approximate_velocity() {
        let mut model = Moon::new();
        let phase = model.compute_spherical(april_1990(), true).unwrap();
        assert_eq!(phase.velocity, Spherical::new(0.0, DPI / 29.0, 0.0));

        let cartesian = model.compute_cartesian(april_1990(), true).unwrap();
        assert_relative_eq!(cartesian.position, phase.position.to_cartesian(), epsilon = 1e-6);
        // tangential: perpendicular to the projection of the position on the ecliptic
        let p = cartesian.position;
        let v = cartesian.velocity;
        assert!((p.x * v.x + p.y * v.y).abs() / (p.norm() * v.norm()) < 1e-12);
        assert!(p.x * v.y - p.y * v.x > 0.0);
    }
}
