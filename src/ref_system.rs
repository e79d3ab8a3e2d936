//! # Reference frames
//!
//! Principal-axis rotations and the fixed frame changes used by the position pipeline:
//!
//! - ecliptical ↔ equatorial (rotation about X by the obliquity),
//! - equatorial ↔ horizontal (rotation about Z by the local sidereal time, then about Y by
//!   the colatitude).
//!
//! All matrices are **active** rotations: `rotation(a, Axis::Z) * v` turns `v` by `+a`
//! counter-clockwise around Z. A frame change to a frame turned by `+a` is therefore
//! `rotation(-a, axis)`.
//!
//! The horizontal frame produced here has `x` pointing south, `y` east and `z` to the zenith.
//! [`azimuth_altitude`] converts such a vector to an azimuth counted from north through east.
use nalgebra::{Matrix3, Rotation3, Vector3};
use std::f64::consts::FRAC_PI_2;

use crate::{
    constants::Radian,
    coordinates::{principal_angle, Spherical},
};

/// Cartesian axis of a principal rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a rotation matrix around one of the principal axes (X, Y, Z).
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians, counter-clockwise looking down the axis.
/// * `axis`: the principal axis.
///
/// Returns
/// --------
/// * 3×3 orthonormal matrix `R` such that `v' = R · v` is `v` turned by `alpha`.
pub fn rotation(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Ecliptical → equatorial frame for a given obliquity.
pub fn ecliptic_to_equatorial(obliquity: Radian) -> Matrix3<f64> {
    rotation(obliquity, Axis::X)
}

/// Equatorial → ecliptical frame for a given obliquity.
pub fn equatorial_to_ecliptic(obliquity: Radian) -> Matrix3<f64> {
    rotation(-obliquity, Axis::X)
}

/// Equatorial → horizontal (south, east, zenith) frame.
///
/// Arguments
/// ---------
/// * `local_sidereal_time`: local sidereal time (radians)
/// * `latitude`: geographic latitude of the observer (radians)
pub fn equatorial_to_horizontal(local_sidereal_time: Radian, latitude: Radian) -> Matrix3<f64> {
    let colatitude = FRAC_PI_2 - latitude;
    rotation(-colatitude, Axis::Y) * rotation(-local_sidereal_time, Axis::Z)
}

/// Horizontal → equatorial frame, transpose of [`equatorial_to_horizontal`].
pub fn horizontal_to_equatorial(local_sidereal_time: Radian, latitude: Radian) -> Matrix3<f64> {
    equatorial_to_horizontal(local_sidereal_time, latitude).transpose()
}

/// Spherical form of a horizontal (south, east, zenith) vector.
///
/// Return
/// ------
/// * `Spherical` whose `longitude` is the azimuth from north through east in [0, 2π) and whose
///   `latitude` is the altitude above the geometric horizon.
pub fn azimuth_altitude(horizontal: &Vector3<f64>) -> Spherical {
    let spherical = Spherical::from_cartesian(horizontal);
    Spherical {
        longitude: principal_angle(horizontal.y.atan2(-horizontal.x)),
        ..spherical
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::constants::RADEG;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_direction() {
        let v = rotation(FRAC_PI_2, Axis::Z) * Vector3::x();
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-15);

        let v = rotation(FRAC_PI_2, Axis::X) * Vector3::y();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-15);

        let v = rotation(FRAC_PI_2, Axis::Y) * Vector3::z();
        assert_relative_eq!(v, Vector3::x(), epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_equatorial_roundtrip() {
        let eps = 23.44 * RADEG;
        let v = Vector3::new(0.3, -1.7, 0.9);
        let back = equatorial_to_ecliptic(eps) * (ecliptic_to_equatorial(eps) * v);
        assert_relative_eq!(back, v, epsilon = 1e-10);
    }

    #[test]
    fn test_ecliptic_pole_declination() {
        let eps = 23.44 * RADEG;
        let pole = ecliptic_to_equatorial(eps) * Vector3::z();
        let s = Spherical::from_cartesian(&pole);
        assert_relative_eq!(s.latitude, FRAC_PI_2 - eps, epsilon = 1e-12);
        // north ecliptic pole lies at RA 18h
        assert_relative_eq!(s.longitude, 1.5 * std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal_roundtrip() {
        let lst = 1.234;
        let lat = 48.0 * RADEG;
        let v = Vector3::new(-0.2, 0.5, 0.8);
        let back = horizontal_to_equatorial(lst, lat) * (equatorial_to_horizontal(lst, lat) * v);
        assert_relative_eq!(back, v, epsilon = 1e-10);
    }

    #[test]
    fn test_horizontal_axes() {
        let lst = 0.7;
        let lat = 48.0 * RADEG;
        let m = equatorial_to_horizontal(lst, lat);

        // the meridian point at declination = latitude is the zenith
        let zenith = Spherical::new(1.0, lst, lat).to_cartesian();
        assert_relative_eq!(m * zenith, Vector3::z(), epsilon = 1e-12);

        // celestial pole: due north at altitude = latitude
        let pole = azimuth_altitude(&(m * Vector3::z()));
        assert_relative_eq!(pole.latitude, lat, epsilon = 1e-12);
        assert!(pole.longitude < 1e-12 || (pole.longitude - crate::constants::DPI).abs() < 1e-12);

        // equator point at hour angle −6h: due east on the horizon
        let east = Spherical::new(1.0, lst + FRAC_PI_2, 0.0).to_cartesian();
        let east = azimuth_altitude(&(m * east));
        assert_relative_eq!(east.longitude, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(east.latitude, 0.0, epsilon = 1e-12);
    }
}
