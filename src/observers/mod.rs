//! # Observer & site geometry
//!
//! This module places an observer on the Earth and expresses its geocentric position in the
//! frames used by the [`Position`](crate::position::Position) pipeline.
//!
//! - [`GeographicLocation`] stores longitude and latitude (radians, east and north positive).
//! - [`Topos`] binds a location to an [`Instant`] and derives the local sidereal times, the
//!   observer's geocentric vector in the equatorial and ecliptical frames, and the
//!   equatorial → horizontal matrices.
//!
//! ## Frames & conventions
//!
//! The Earth is a sphere of mean radius [`Body::Earth`]`.mean_radius()`; latitudes are
//! therefore geocentric. The observer's geocentric vector is
//!
//! ```text
//! equatorial = R⊕ · (cos φ cos θ, cos φ sin θ, sin φ),   θ = local sidereal time
//! ecliptical = Rx(−ε) · equatorial
//! ```
//!
//! Mean quantities use the mean sidereal time and the mean obliquity; true quantities use
//! the apparent sidereal time and the true obliquity.
//!
//! The horizontal frame has x to the south, y to the east, z to the zenith
//! (see [`equatorial_to_horizontal`]).
//!
//! ## Units
//!
//! - Angles: **radians**.
//! - Positions: **meters**.
use nalgebra::{Matrix3, Vector3};
use std::fmt;

use crate::{
    body::Body,
    constants::{Degree, Radian, RADEG},
    coordinates::{principal_angle, Spherical},
    earth_orientation::Ecliptic,
    ref_system::{equatorial_to_ecliptic, equatorial_to_horizontal},
    time::Instant,
};

/// Geographic position of an observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeographicLocation {
    /// Longitude east of Greenwich (radians)
    pub longitude: Radian,
    /// Latitude north of the equator (radians)
    pub latitude: Radian,
}

impl GeographicLocation {
    pub fn new(longitude: Radian, latitude: Radian) -> Self {
        GeographicLocation {
            longitude,
            latitude,
        }
    }

    pub fn from_degrees(longitude: Degree, latitude: Degree) -> Self {
        Self::new(longitude * RADEG, latitude * RADEG)
    }

    /// Sign of the hemisphere: `+1` north of the equator (equator included), `−1` south.
    pub fn hemisphere(&self) -> f64 {
        if self.latitude >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl fmt::Display for GeographicLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lon = {:.5}°, lat = {:.5}°)",
            self.longitude / RADEG,
            self.latitude / RADEG
        )
    }
}

/// An observer at one instant.
///
/// Everything is computed once at construction; a `Topos` is a cheap value recreated for
/// each instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topos {
    location: GeographicLocation,
    ecliptic: Ecliptic,
    local_mean_sidereal_time: Radian,
    local_true_sidereal_time: Radian,
}

impl Topos {
    pub fn new(location: GeographicLocation, instant: Instant) -> Self {
        Self::with_ecliptic(location, Ecliptic::new(instant))
    }

    /// Build from an already evaluated [`Ecliptic`] of the same instant.
    pub fn with_ecliptic(location: GeographicLocation, ecliptic: Ecliptic) -> Self {
        Topos {
            location,
            ecliptic,
            local_mean_sidereal_time: principal_angle(
                ecliptic.mean_sidereal_time() + location.longitude,
            ),
            local_true_sidereal_time: principal_angle(
                ecliptic.true_sidereal_time() + location.longitude,
            ),
        }
    }

    pub fn location(&self) -> GeographicLocation {
        self.location
    }

    pub fn instant(&self) -> Instant {
        self.ecliptic.instant()
    }

    pub fn ecliptic(&self) -> &Ecliptic {
        &self.ecliptic
    }

    pub fn local_mean_sidereal_time(&self) -> Radian {
        self.local_mean_sidereal_time
    }

    pub fn local_true_sidereal_time(&self) -> Radian {
        self.local_true_sidereal_time
    }

    fn equatorial(&self, sidereal_time: Radian) -> Vector3<f64> {
        Spherical::new(
            Body::Earth.mean_radius(),
            sidereal_time,
            self.location.latitude,
        )
        .to_cartesian()
    }

    /// Geocentric position of the observer, mean equator of date (meters)
    pub fn mean_equatorial(&self) -> Vector3<f64> {
        self.equatorial(self.local_mean_sidereal_time)
    }

    /// Geocentric position of the observer, true equator of date (meters)
    pub fn true_equatorial(&self) -> Vector3<f64> {
        self.equatorial(self.local_true_sidereal_time)
    }

    /// Geocentric position of the observer, mean ecliptic of date (meters)
    pub fn mean_ecliptical(&self) -> Vector3<f64> {
        equatorial_to_ecliptic(self.ecliptic.mean_obliquity()) * self.mean_equatorial()
    }

    /// Geocentric position of the observer, true ecliptic of date (meters)
    pub fn true_ecliptical(&self) -> Vector3<f64> {
        equatorial_to_ecliptic(self.ecliptic.true_obliquity()) * self.true_equatorial()
    }

    pub fn mean_equatorial_to_horizontal(&self) -> Matrix3<f64> {
        equatorial_to_horizontal(self.local_mean_sidereal_time, self.location.latitude)
    }

    pub fn true_equatorial_to_horizontal(&self) -> Matrix3<f64> {
        equatorial_to_horizontal(self.local_true_sidereal_time, self.location.latitude)
    }
}

#[cfg(test)]
mod observers_test {
    use super::*;
    use approx::assert_relative_eq;

    fn munich() -> GeographicLocation {
        GeographicLocation::from_degrees(11.58198, 48.13513)
    }

    fn may_first() -> Instant {
        Instant::from_gregorian_utc(2018, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_observer_is_on_the_sphere() {
        let topos = Topos::new(munich(), may_first());
        assert_relative_eq!(topos.mean_equatorial().norm(), 6.371e6, epsilon = 1e-6);
        assert_relative_eq!(topos.true_ecliptical().norm(), 6.371e6, epsilon = 1e-6);
        assert_relative_eq!(
            topos.mean_equatorial().z,
            6.371e6 * (48.13513 * RADEG).sin(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_local_sidereal_time() {
        let topos = Topos::new(munich(), may_first());
        let expected = principal_angle(may_first().mean_sidereal_time() + 11.58198 * RADEG);
        assert_relative_eq!(topos.local_mean_sidereal_time(), expected, epsilon = 1e-12);
        // equation of the equinoxes stays below 1.2 s of time
        let diff = topos.local_true_sidereal_time() - topos.local_mean_sidereal_time();
        assert!(diff.abs() < 1.2 / 86400.0 * std::f64::consts::TAU);
    }

    #[test]
    fn test_zenith_is_straight_up() {
        let topos = Topos::new(munich(), may_first());
        let up = topos.mean_equatorial_to_horizontal() * topos.mean_equatorial().normalize();
        assert_relative_eq!(up, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_hemisphere() {
        assert_eq!(munich().hemisphere(), 1.0);
        assert_eq!(GeographicLocation::from_degrees(151.2, -33.85).hemisphere(), -1.0);
        assert_eq!(GeographicLocation::default().hemisphere(), 1.0);
    }
}
