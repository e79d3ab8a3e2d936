//! # VSOP87 series evaluator
//!
//! Each coordinate of a VSOP87 solution is a polynomial in `t` (Julian millennia since J2000)
//! whose coefficients are Poisson series:
//!
//! ```text
//! X(t) = Σₙ tⁿ · Σₖ Aₖ cos(Bₖ + Cₖ t)
//! ```
//!
//! The evaluator walks the polynomial from the highest degree down (Horner scheme) and carries
//! the analytic time derivative alongside:
//!
//! ```text
//! d/dt [A cos(B + C t)] = −A C sin(B + C t)
//! ```
//!
//! so a single pass yields position and velocity. Results are memoized for the last
//! `(instant, with_velocity)` pair.
//!
//! ## Tables
//!
//! The complete published series are shipped for three versions:
//!
//! * [`vsop87d`]: heliocentric L, B, R on the ecliptic and equinox of date, eight planets,
//! * [`vsop87c`]: heliocentric X, Y, Z on the ecliptic and equinox of date, eight planets,
//! * [`vsop87a`]: heliocentric X, Y, Z on the ecliptic and equinox J2000, Earth and Jupiter,
//! * [`elliptic`]: the main version, elliptic elements a, λ, k, h, q, p on the ecliptic and
//!   equinox J2000, for Mercury, the Earth-Moon barycenter and Jupiter.
//!
//! Element tables are turned into positions by [`Vsop87Elliptic`], through the equinoctial
//! Kepler equation of [`Vsop87Elements::position`].
//!
//! [`Vsop87`] always answers in the ecliptic of date: tables referred to J2000 are rotated with
//! [`ecliptic_precession`] after evaluation. The VSOP87D tables are re-exported at this level
//! since they back the default planet models.
pub mod elliptic;
pub mod vsop87a;
pub mod vsop87c;
pub mod vsop87d;

pub use vsop87d::{EARTH, JUPITER, MARS, MERCURY, NEPTUNE, SATURN, URANUS, VENUS};

use nalgebra::Vector3;

use crate::{
    constants::DAYS_PER_MILLENNIUM,
    coordinates::{principal_angle, PhaseCartesian, PhaseSpherical, Spherical},
    earth_orientation::{ecliptic_precession, ecliptic_precession_rate},
    ephemeris_errors::EphemerisError,
    orbit_type::vsop87_element::Vsop87Elements,
    orbital_models::{DistanceUnit, ModelCache, ModelKind, OrbitalModel},
    time::Instant,
};

/// One term `[A, B, C]` of a Poisson series: `A cos(B + C t)`
pub type Term = [f64; 3];

/// Which variables a table describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variables {
    /// L, B, R: longitude, latitude (radians) and radius (AU)
    Spherical,
    /// X, Y, Z (AU)
    Rectangular,
}

/// Reference frame of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// Ecliptic and equinox of date (VSOP87C, VSOP87D)
    EclipticOfDate,
    /// Ecliptic and equinox J2000 (VSOP87A)
    EclipticJ2000,
}

/// Coefficients of one body: three coordinates, each a list of series by increasing power of t.
#[derive(Debug)]
pub struct Vsop87Table {
    pub variables: Variables,
    pub reference: Reference,
    pub series: [&'static [&'static [Term]]; 3],
}

/// Elliptic elements `(a, λ, k, h, q, p)` of one body, each a list of series by increasing
/// power of t.
#[derive(Debug)]
pub struct EllipticTable {
    pub series: [&'static [&'static [Term]]; 6],
}

/// Value and time derivative of one coordinate, the derivative per millennium.
fn evaluate_coordinate(series: &[&[Term]], t: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;
    for terms in series.iter().rev() {
        let (sum, sum_derivative) = terms.iter().fold((0.0, 0.0), |(c, s), [a, b, freq]| {
            let (sin, cos) = (b + freq * t).sin_cos();
            (c + a * cos, s - a * freq * sin)
        });
        derivative = derivative * t + value + sum_derivative;
        value = value * t + sum;
    }
    (value, derivative)
}

/// Evaluate all three coordinates of a table at `t` Julian millennia.
///
/// Return
/// ------
/// * `(values, derivatives)` where the derivatives are per day
pub fn evaluate(table: &Vsop87Table, t: f64) -> (Vector3<f64>, Vector3<f64>) {
    let mut values = Vector3::zeros();
    let mut derivatives = Vector3::zeros();
    for (i, series) in table.series.iter().enumerate() {
        let (value, derivative) = evaluate_coordinate(series, t);
        values[i] = value;
        derivatives[i] = derivative / DAYS_PER_MILLENNIUM;
    }
    (values, derivatives)
}

/// Elliptic elements of a table at `t` Julian millennia, ecliptic and equinox J2000.
///
/// The mean longitude is reduced to `[0, 2π)`.
pub fn evaluate_elements(table: &EllipticTable, t: f64) -> Vsop87Elements {
    let [a, lambda, k, h, q, p] = table.series.map(|series| evaluate_coordinate(series, t).0);
    Vsop87Elements {
        semi_major_axis: a,
        mean_longitude: principal_angle(lambda),
        h,
        k,
        p,
        q,
    }
}

/// Heliocentric planet model backed by a VSOP87 table.
#[derive(Debug)]
pub struct Vsop87 {
    table: &'static Vsop87Table,
    cache: ModelCache<(Vector3<f64>, Vector3<f64>)>,
}

impl Vsop87 {
    pub fn new(table: &'static Vsop87Table) -> Self {
        Vsop87 {
            table,
            cache: ModelCache::default(),
        }
    }

    pub fn table(&self) -> &'static Vsop87Table {
        self.table
    }

    fn compute(&mut self, instant: Instant, with_velocity: bool) -> (Vector3<f64>, Vector3<f64>) {
        let table = self.table;
        *self.cache.get_or_compute(instant, with_velocity, || {
            let t = instant.millennia_since_j2000();
            let (values, derivatives) = evaluate(table, t);
            let derivatives = if with_velocity {
                derivatives
            } else {
                Vector3::zeros()
            };
            match (table.reference, table.variables) {
                (Reference::EclipticOfDate, _) => (values, derivatives),
                (Reference::EclipticJ2000, variables) => {
                    let phase = match variables {
                        Variables::Rectangular => PhaseCartesian::new(values, derivatives),
                        Variables::Spherical => {
                            Self::phase_spherical(&values, &derivatives).to_cartesian()
                        }
                    };
                    let precession = ecliptic_precession(t);
                    let mut velocity = precession * phase.velocity;
                    if with_velocity {
                        velocity += ecliptic_precession_rate(t) * phase.position
                            / DAYS_PER_MILLENNIUM;
                    }
                    (precession * phase.position, velocity)
                }
            }
        })
    }

    /// Variables of [`Vsop87::compute`]'s output: J2000 tables come out rectangular once precessed.
    fn output_variables(&self) -> Variables {
        match self.table.reference {
            Reference::EclipticOfDate => self.table.variables,
            Reference::EclipticJ2000 => Variables::Rectangular,
        }
    }

    fn phase_spherical(values: &Vector3<f64>, derivatives: &Vector3<f64>) -> PhaseSpherical {
        PhaseSpherical::new(
            Spherical::new(values[2], values[0], values[1]),
            Spherical::new(derivatives[2], derivatives[0], derivatives[1]),
        )
    }
}

impl OrbitalModel for Vsop87 {
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
        let (values, derivatives) = self.compute(instant, with_velocity);
        Ok(match self.output_variables() {
            Variables::Spherical => Self::phase_spherical(&values, &derivatives),
            Variables::Rectangular => PhaseCartesian::new(values, derivatives).to_spherical(),
        })
    }

    fn compute_cartesian(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError> {
        let (values, derivatives) = self.compute(instant, with_velocity);
        Ok(match self.output_variables() {
            Variables::Spherical => Self::phase_spherical(&values, &derivatives).to_cartesian(),
            Variables::Rectangular => PhaseCartesian::new(values, derivatives),
        })
    }
}

/// Half-width of the central difference giving [`Vsop87Elliptic`] velocities, days
const ELLIPTIC_VELOCITY_STEP: f64 = 0.01;

/// Heliocentric planet model built on VSOP87 elliptic elements.
///
/// Each evaluation solves the equinoctial Kepler equation, so it fails when Newton does not
/// converge. Positions are precessed from J2000 to the ecliptic of date; velocities are a central
/// difference of the precessed positions over ±[`ELLIPTIC_VELOCITY_STEP`] days.
#[derive(Debug)]
pub struct Vsop87Elliptic {
    table: &'static EllipticTable,
    cache: ModelCache<PhaseCartesian>,
}

impl Vsop87Elliptic {
    pub fn new(table: &'static EllipticTable) -> Self {
        Vsop87Elliptic {
            table,
            cache: ModelCache::default(),
        }
    }

    /// Elliptic elements at `instant`, ecliptic and equinox J2000
    pub fn elements(&self, instant: Instant) -> Vsop87Elements {
        evaluate_elements(self.table, instant.millennia_since_j2000())
    }

    fn position(table: &EllipticTable, instant: Instant) -> Result<Vector3<f64>, EphemerisError> {
        let t = instant.millennia_since_j2000();
        let j2000 = evaluate_elements(table, t).position()?;
        Ok(ecliptic_precession(t) * j2000)
    }

    fn phase(
        table: &EllipticTable,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError> {
        let position = Self::position(table, instant)?;
        let velocity = if with_velocity {
            let ahead = Self::position(table, instant.add_days(ELLIPTIC_VELOCITY_STEP))?;
            let behind = Self::position(table, instant.add_days(-ELLIPTIC_VELOCITY_STEP))?;
            (ahead - behind) / (2.0 * ELLIPTIC_VELOCITY_STEP)
        } else {
            Vector3::zeros()
        };
        Ok(PhaseCartesian::new(position, velocity))
    }
}

impl OrbitalModel for Vsop87Elliptic {
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
        let table = self.table;
        self.cache
            .try_get_or_compute(instant, with_velocity, || {
                Self::phase(table, instant, with_velocity)
            })
            .copied()
    }
}

#[cfg(test)]
mod vsop87_test {
    use super::*;
    use crate::{constants::DPI, coordinates::principal_angle};
    use approx::assert_relative_eq;

    const ONE_TERM: &[Term] = &[[2.0, 0.5, 3.0]];
    const CONSTANT: &[Term] = &[[1.5, 0.0, 0.0]];

    static SYNTHETIC: Vsop87Table = Vsop87Table {
        variables: Variables::Rectangular,
        reference: Reference::EclipticOfDate,
        series: [&[ONE_TERM], &[CONSTANT, ONE_TERM], &[CONSTANT, CONSTANT, ONE_TERM]],
    };

    #[test]
    fn test_evaluate_synthetic_polynomial() {
        let t = 0.3;
        let (values, derivatives) = evaluate(&SYNTHETIC, t);

        let s = 2.0 * (0.5 + 3.0 * t).cos();
        let ds = -6.0 * (0.5 + 3.0 * t).sin();

        assert_relative_eq!(values[0], s, epsilon = 1e-15);
        assert_relative_eq!(values[1], 1.5 + t * s, epsilon = 1e-15);
        assert_relative_eq!(values[2], 1.5 + 1.5 * t + t * t * s, epsilon = 1e-15);

        assert_relative_eq!(derivatives[0] * DAYS_PER_MILLENNIUM, ds, epsilon = 1e-12);
        assert_relative_eq!(derivatives[1] * DAYS_PER_MILLENNIUM, s + t * ds, epsilon = 1e-12);
        assert_relative_eq!(
            derivatives[2] * DAYS_PER_MILLENNIUM,
            1.5 + 2.0 * t * s + t * t * ds,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rectangular_model_passes_values_through() {
        let mut model = Vsop87::new(&SYNTHETIC);
        let instant = Instant::J2000.add_days(DAYS_PER_MILLENNIUM * 0.3);
        let phase = model.compute_cartesian(instant, true).unwrap();
        let (values, derivatives) = evaluate(&SYNTHETIC, 0.3);
        assert_relative_eq!(phase.position, values, epsilon = 1e-12);
        assert_relative_eq!(phase.velocity, derivatives, epsilon = 1e-12);
    }

    #[test]
    fn test_earth_meeus_example_25b() {
        // JDE 2448908.5 (1992 October 13.0)
        let instant = Instant::from_julian_day(2448908.5);
        let mut earth = Vsop87::new(&EARTH);
        let phase = earth.compute_spherical(instant, false).unwrap();

        assert_relative_eq!(
            principal_angle(phase.position.longitude),
            principal_angle(-43.63484796),
            epsilon = 1e-6
        );
        assert_relative_eq!(phase.position.latitude, -0.00000312, epsilon = 2e-7);
        assert_relative_eq!(phase.position.distance, 0.99760775, epsilon = 1e-6);
    }

    #[test]
    fn test_venus_meeus_example_32a() {
        // JDE 2448976.5 (1992 December 20.0)
        let instant = Instant::from_julian_day(2448976.5);
        let mut venus = Vsop87::new(&VENUS);
        let phase = venus.compute_spherical(instant, false).unwrap();

        assert_relative_eq!(
            principal_angle(phase.position.longitude),
            26.11428_f64.to_radians(),
            epsilon = 1e-6
        );
        assert_relative_eq!(phase.position.latitude, (-2.62070_f64).to_radians(), epsilon = 1e-6);
        assert_relative_eq!(phase.position.distance, 0.724603, epsilon = 1e-6);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let mut mars = Vsop87::new(&MARS);
        let t0 = Instant::from_julian_day(2458239.5);
        let t1 = t0.add_days(0.01);
        let t2 = t0.add_days(-0.01);

        let velocity = mars.compute_cartesian(t0, true).unwrap().velocity;
        let p1 = mars.compute_cartesian(t1, false).unwrap().position;
        let p2 = mars.compute_cartesian(t2, false).unwrap().position;
        let fd = (p1 - p2) / 0.02;

        assert_relative_eq!(velocity, fd, epsilon = 1e-9);
    }

    #[test]
    fn test_j2000_tables_precess_onto_date_tables() {
        for (j2000, of_date) in [
            (&vsop87a::EARTH, &vsop87c::EARTH),
            (&vsop87a::JUPITER, &vsop87c::JUPITER),
        ] {
            let mut precessed = Vsop87::new(j2000);
            let mut direct = Vsop87::new(of_date);
            for jd in [2415020.5, 2451545.0, 2458239.5, 2488070.5] {
                let instant = Instant::from_julian_day(jd);
                let a = precessed.compute_cartesian(instant, true).unwrap();
                let c = direct.compute_cartesian(instant, true).unwrap();
                assert_relative_eq!(a.position, c.position, epsilon = 1e-7);
                assert_relative_eq!(a.velocity, c.velocity, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_rectangular_and_spherical_versions_agree() {
        let instant = Instant::from_julian_day(2458239.5);
        for (spherical, rectangular) in [
            (&vsop87d::MERCURY, &vsop87c::MERCURY),
            (&vsop87d::SATURN, &vsop87c::SATURN),
            (&vsop87d::NEPTUNE, &vsop87c::NEPTUNE),
        ] {
            let d = Vsop87::new(spherical)
                .compute_cartesian(instant, true)
                .unwrap();
            let c = Vsop87::new(rectangular)
                .compute_cartesian(instant, true)
                .unwrap();
            // the published versions are cut at the same amplitude; Neptune differs most (≈3e-7 AU)
            assert_relative_eq!(d.position, c.position, epsilon = 5e-7);
            assert_relative_eq!(d.velocity, c.velocity, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_longitude_rate_of_earth() {
        let mut earth = Vsop87::new(&EARTH);
        let phase = earth.compute_spherical(Instant::J2000, true).unwrap();
        // about one turn per year
        assert_relative_eq!(phase.velocity.longitude, DPI / 365.25, epsilon = 1e-3);
    }

    #[test]
    fn test_cache_is_keyed_on_velocity_flag() {
        let mut venus = Vsop87::new(&VENUS);
        let without = venus.compute_cartesian(Instant::J2000, false).unwrap();
        assert_eq!(without.velocity, Vector3::zeros());
        let with = venus.compute_cartesian(Instant::J2000, true).unwrap();
        assert!(with.velocity.norm() > 0.0);
        assert_eq!(with.position, without.position);
        let again = venus.compute_cartesian(Instant::J2000, true).unwrap();
        assert_eq!(again, with);
    }

    #[test]
    fn test_elliptic_elements_at_j2000() {
        // main version check values for Jupiter, JD 2451545.0
        let elements = evaluate_elements(&elliptic::JUPITER, 0.0);
        assert_relative_eq!(elements.semi_major_axis, 5.2042662908, epsilon = 2e-10);
        assert_relative_eq!(elements.mean_longitude, 0.5999772955, epsilon = 2e-10);
        assert_relative_eq!(elements.k, 0.0469877116, epsilon = 2e-10);
        assert_relative_eq!(elements.h, 0.0130817658, epsilon = 2e-10);
        assert_relative_eq!(elements.q, -0.0020729462, epsilon = 2e-10);
    }

    #[test]
    fn test_elliptic_model_follows_rectangular_series() {
        let instant = Instant::from_julian_day(2458239.5);
        let mut elliptic = Vsop87Elliptic::new(&elliptic::JUPITER);
        let mut rectangular = Vsop87::new(&vsop87c::JUPITER);

        let a = elliptic.compute_cartesian(instant, true).unwrap();
        let c = rectangular.compute_cartesian(instant, true).unwrap();
        assert_relative_eq!(a.position, c.position, epsilon = 1e-6);
        assert_relative_eq!(a.velocity, c.velocity, epsilon = 1e-8);

        let spherical = elliptic.compute_spherical(instant, false).unwrap();
        assert_relative_eq!(spherical.position.distance, a.position.norm(), epsilon = 1e-12);
    }
}
