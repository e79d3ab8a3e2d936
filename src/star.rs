//! Fixed stars.
//!
//! A [`FixedStar`] is a point at infinite distance given by its right ascension and declination
//! on the mean equator and equinox of J2000. Apparent places are obtained by precession
//! ([`prec`]) followed by nutation ([`nutation_matrix`]); proper motion, annual aberration and
//! parallax are neglected.
use nalgebra::Vector3;
use std::fmt;

use crate::{
    constants::Radian,
    conversion::{format_degrees, format_hours, parse_degrees, parse_hours},
    coordinates::Spherical,
    earth_orientation::{nutation_matrix, prec},
    ephemeris_errors::EphemerisError,
    observers::{GeographicLocation, Topos},
    rise_set::{RiseSetTarget, TargetObservation},
    time::Instant,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStar {
    name: String,
    right_ascension: Radian,
    declination: Radian,
}

impl FixedStar {
    /// Arguments
    /// ---------
    /// * `right_ascension`, `declination`: J2000 mean equatorial coordinates (radians)
    pub fn new(name: impl Into<String>, right_ascension: Radian, declination: Radian) -> Self {
        FixedStar {
            name: name.into(),
            right_ascension,
            declination,
        }
    }

    /// Build a star from catalog strings, e.g. `("02 31 49.09", "+89 15 50.8")` for Polaris.
    pub fn from_sexagesimal(
        name: impl Into<String>,
        right_ascension: &str,
        declination: &str,
    ) -> Result<Self, EphemerisError> {
        Ok(Self::new(
            name,
            parse_hours(right_ascension)?,
            parse_degrees(declination)?,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right_ascension(&self) -> Radian {
        self.right_ascension
    }

    pub fn declination(&self) -> Radian {
        self.declination
    }

    fn j2000(&self) -> Vector3<f64> {
        Spherical::new(1.0, self.right_ascension, self.declination).to_cartesian()
    }

    /// Unit vector on the mean equator and equinox of date
    pub fn mean_equatorial(&self, instant: Instant) -> Vector3<f64> {
        prec(instant.mjd()) * self.j2000()
    }

    /// Unit vector on the true equator and equinox of date
    pub fn true_equatorial(&self, instant: Instant) -> Vector3<f64> {
        let tjm = instant.mjd();
        nutation_matrix(tjm) * prec(tjm) * self.j2000()
    }
}

impl fmt::Display for FixedStar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (α = {}, δ = {})",
            self.name,
            format_hours(self.right_ascension),
            format_degrees(self.declination)
        )
    }
}

impl RiseSetTarget for FixedStar {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_fixed(&self) -> bool {
        true
    }

    fn observe(
        &mut self,
        instant: Instant,
        location: &GeographicLocation,
    ) -> Result<TargetObservation, EphemerisError> {
        let apparent = Spherical::from_cartesian(&self.true_equatorial(instant));
        Ok(TargetObservation {
            right_ascension: apparent.longitude,
            declination: apparent.latitude,
            distance: f64::INFINITY,
            radius: 0.0,
            local_sidereal_time: Topos::new(*location, instant).local_true_sidereal_time(),
        })
    }
}

#[cfg(test)]
mod star_test {
    use super::*;
    use crate::constants::{RADEG, RADSEC};
    use approx::assert_relative_eq;

    fn polaris() -> FixedStar {
        FixedStar::from_sexagesimal("Polaris", "02 31 49.09", "+89 15 50.8").unwrap()
    }

    #[test]
    fn test_from_sexagesimal() {
        let star = polaris();
        assert_eq!(star.name(), "Polaris");
        assert_relative_eq!(star.declination() / RADEG, 89.26411111111111, epsilon = 1e-10);
        assert!(matches!(
            FixedStar::from_sexagesimal("bad", "25 00 00", "+00 00 00"),
            Err(EphemerisError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_no_precession_at_j2000() {
        let star = FixedStar::new("test", 1.2, 0.4);
        let mean = Spherical::from_cartesian(&star.mean_equatorial(Instant::J2000));
        assert_relative_eq!(mean.longitude, 1.2, epsilon = 1e-12);
        assert_relative_eq!(mean.latitude, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_precession_of_the_equinox_point() {
        // a star on the J2000 equinox drifts east by about 46″ a year in right ascension
        let star = FixedStar::new("equinox", 0.0, 0.0);
        let later = Instant::J2000.add_days(36525.0);
        let mean = Spherical::from_cartesian(&star.mean_equatorial(later));
        let drift = mean.longitude / RADSEC / 100.0;
        assert!(drift > 45.0 && drift < 47.0, "{drift}");
    }

    #[test]
    fn test_observation() {
        let mut star = polaris();
        let munich = GeographicLocation::from_degrees(11.576, 48.137);
        let observation = star
            .observe(Instant::from_gregorian_utc(2018, 5, 1, 0, 0, 0).unwrap(), &munich)
            .unwrap();
        assert_eq!(observation.distance, f64::INFINITY);
        assert_eq!(observation.apparent_radius(), 0.0);
        // Polaris moved toward the pole since 2000
        assert!(observation.declination > star.declination());
    }
}
