//! # Coordinate value types
//!
//! Cartesian vectors are plain [`nalgebra::Vector3<f64>`]. This module adds the spherical
//! counterpart, the phase (position + velocity) pairs carried by orbital models, the
//! conversions between them and a few angle helpers used across the crate.
//!
//! Units are those of the holder: the orbital models work in AU or meters with
//! velocities per day, the [`SolarSystem`](crate::solar_system::SolarSystem) snapshot works
//! in meters and meters per second.
//!
//! ## Stereographic projection
//!
//! The rise/set solver reasons about the circle traced by a target on the celestial sphere
//! and the horizon circle. Both are projected onto the equatorial plane from the celestial
//! pole of the observer's hemisphere, where circles stay circles:
//!
//! ```text
//! project(x) = cos x / (1 − c·sin x),   c = ±1
//! ```
//!
//! See [`stereographic_projection`].
use nalgebra::Vector3;
use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
};

use crate::constants::{Radian, DPI, RADEG};

/// Map an angle into [0, 2π)
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Map an angle into (−π, π]
pub fn centered_angle(a: Radian) -> Radian {
    let a = principal_angle(a);
    if a > PI {
        a - DPI
    } else {
        a
    }
}

/// Spherical coordinates: distance, longitude and latitude (radians).
///
/// For equatorial frames the longitude is the right ascension and the latitude the
/// declination; for the horizontal frame they are the azimuth and the altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub distance: f64,
    pub longitude: Radian,
    pub latitude: Radian,
}

impl Spherical {
    pub fn new(distance: f64, longitude: Radian, latitude: Radian) -> Self {
        Spherical {
            distance,
            longitude,
            latitude,
        }
    }

    /// Canonical form of the same point.
    ///
    /// * distance ≥ 0 (a negative distance points the other way),
    /// * latitude in [−π/2, π/2] (a reflected latitude moves the longitude by π),
    /// * longitude in [0, 2π).
    pub fn standardize(&self) -> Spherical {
        let mut distance = self.distance;
        let mut longitude = self.longitude;
        let mut latitude = self.latitude;

        if distance < 0.0 {
            distance = -distance;
            longitude += PI;
            latitude = -latitude;
        }

        latitude = centered_angle(latitude);
        if latitude > FRAC_PI_2 {
            latitude = PI - latitude;
            longitude += PI;
        } else if latitude < -FRAC_PI_2 {
            latitude = -PI - latitude;
            longitude += PI;
        }

        Spherical {
            distance,
            longitude: principal_angle(longitude),
            latitude,
        }
    }

    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        Vector3::new(
            self.distance * cos_lat * cos_lon,
            self.distance * cos_lat * sin_lon,
            self.distance * sin_lat,
        )
    }

    /// Convert a Cartesian vector. The origin maps to the zero spherical value.
    pub fn from_cartesian(v: &Vector3<f64>) -> Spherical {
        let distance = v.norm();
        if distance == 0.0 {
            return Spherical::default();
        }
        let longitude = principal_angle(v.y.atan2(v.x));
        let latitude = (v.z / distance).clamp(-1.0, 1.0).asin();
        Spherical {
            distance,
            longitude,
            latitude,
        }
    }
}

impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r = {:.6e}, lon = {:.6}°, lat = {:.6}°)",
            self.distance,
            self.longitude / RADEG,
            self.latitude / RADEG
        )
    }
}

/// Cartesian position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseCartesian {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl PhaseCartesian {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        PhaseCartesian { position, velocity }
    }

    pub fn scale(&self, position_factor: f64, velocity_factor: f64) -> Self {
        PhaseCartesian {
            position: self.position * position_factor,
            velocity: self.velocity * velocity_factor,
        }
    }

    /// Spherical coordinates with their time derivatives.
    ///
    /// The rates are undefined on the polar axis; there the longitude and latitude
    /// rates are reported as zero.
    pub fn to_spherical(&self) -> PhaseSpherical {
        let p = &self.position;
        let v = &self.velocity;
        let position = Spherical::from_cartesian(p);

        let rho2 = p.x * p.x + p.y * p.y;
        let r = position.distance;
        if r == 0.0 || rho2 == 0.0 {
            let dr = if r == 0.0 { 0.0 } else { p.dot(v) / r };
            return PhaseSpherical::new(position, Spherical::new(dr, 0.0, 0.0));
        }

        let rho = rho2.sqrt();
        let dr = p.dot(v) / r;
        let dlon = (p.x * v.y - p.y * v.x) / rho2;
        let dlat = (v.z * rho2 - p.z * (p.x * v.x + p.y * v.y)) / (r * r * rho);

        PhaseSpherical::new(position, Spherical::new(dr, dlon, dlat))
    }
}

impl std::ops::Add for PhaseCartesian {
    type Output = PhaseCartesian;

    fn add(self, rhs: PhaseCartesian) -> PhaseCartesian {
        PhaseCartesian::new(self.position + rhs.position, self.velocity + rhs.velocity)
    }
}

impl std::ops::Sub for PhaseCartesian {
    type Output = PhaseCartesian;

    fn sub(self, rhs: PhaseCartesian) -> PhaseCartesian {
        PhaseCartesian::new(self.position - rhs.position, self.velocity - rhs.velocity)
    }
}

impl std::ops::Neg for PhaseCartesian {
    type Output = PhaseCartesian;

    fn neg(self) -> PhaseCartesian {
        PhaseCartesian::new(-self.position, -self.velocity)
    }
}

/// Spherical position and its time derivative (`velocity.distance` is dr/dt,
/// `velocity.longitude` is dλ/dt, `velocity.latitude` is dβ/dt).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseSpherical {
    pub position: Spherical,
    pub velocity: Spherical,
}

impl PhaseSpherical {
    pub fn new(position: Spherical, velocity: Spherical) -> Self {
        PhaseSpherical { position, velocity }
    }

    /// Cartesian position and velocity, using the chain rule on
    /// `(r cosβ cosλ, r cosβ sinλ, r sinβ)`.
    pub fn to_cartesian(&self) -> PhaseCartesian {
        let Spherical {
            distance: r,
            longitude: lon,
            latitude: lat,
        } = self.position;
        let Spherical {
            distance: dr,
            longitude: dlon,
            latitude: dlat,
        } = self.velocity;

        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();

        let position = self.position.to_cartesian();
        let velocity = Vector3::new(
            dr * cos_lat * cos_lon - r * sin_lat * dlat * cos_lon - r * cos_lat * sin_lon * dlon,
            dr * cos_lat * sin_lon - r * sin_lat * dlat * sin_lon + r * cos_lat * cos_lon * dlon,
            dr * sin_lat + r * cos_lat * dlat,
        );

        PhaseCartesian::new(position, velocity)
    }
}

/// Correct a relative phase for the light travel time (first order).
///
/// ```text
/// x_corr = x − (‖x‖ / c) · v
/// ```
///
/// Arguments
/// ---------
/// * `phase`: position and velocity of the target relative to the observer
/// * `light_speed`: speed of light in the units of `phase` (length / velocity time unit)
///
/// Return
/// ------
/// * the corrected phase, velocity unchanged
pub fn correct_aberration(phase: &PhaseCartesian, light_speed: f64) -> PhaseCartesian {
    let dt = phase.position.norm() / light_speed;
    PhaseCartesian::new(phase.position - dt * phase.velocity, phase.velocity)
}

/// Signed angle from `a` to `b` seen from above the XY plane: `atan2((a × b)·ẑ, a·b)`.
///
/// The z component of the cross product carries the sign, the dot product uses all three
/// components.
pub fn signed_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> Radian {
    (a.x * b.y - a.y * b.x).atan2(a.dot(b))
}

/// Stereographic projection of a point at spherical latitude `x` onto the equatorial plane,
/// as a signed distance from the projection center.
///
/// `pole_sign` is `+1` for a projection from the north pole (northern observers)
/// and `−1` for a projection from the south pole. The projection pole itself maps to
/// infinity. Latitudes beyond ±π/2 describe points carried over the pole along a meridian
/// and map to negative distances.
pub fn stereographic_projection(x: Radian, pole_sign: f64) -> f64 {
    let denominator = 1.0 - pole_sign * x.sin();
    if denominator == 0.0 {
        f64::INFINITY
    } else {
        x.cos() / denominator
    }
}

#[cfg(test)]
mod coordinates_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_principal_and_centered_angle() {
        assert_relative_eq!(principal_angle(-0.5), DPI - 0.5);
        assert_relative_eq!(principal_angle(DPI + 0.25), 0.25, epsilon = 1e-15);
        assert_relative_eq!(centered_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(centered_angle(PI), PI);
    }

    #[test]
    fn test_standardize_negative_distance() {
        let s = Spherical::new(-2.0, 0.5, 0.3).standardize();
        assert_relative_eq!(s.distance, 2.0);
        assert_relative_eq!(s.longitude, 0.5 + PI, epsilon = 1e-15);
        assert_relative_eq!(s.latitude, -0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_standardize_reflected_latitude() {
        let original = Spherical::new(1.0, 0.2, 2.0);
        let s = original.standardize();
        assert!(s.latitude <= FRAC_PI_2 && s.latitude >= -FRAC_PI_2);
        assert!(s.longitude >= 0.0 && s.longitude < DPI);
        let a = original.to_cartesian();
        let b = s.to_cartesian();
        assert_relative_eq!(a, b, epsilon = 1e-14);
    }

    #[test]
    fn test_cartesian_spherical_roundtrip() {
        let v = Vector3::new(-1.2, 3.4, -0.7);
        let s = Spherical::from_cartesian(&v);
        assert_relative_eq!(s.to_cartesian(), v, epsilon = 1e-14);
        assert!(s.longitude >= 0.0 && s.longitude < DPI);
        assert_eq!(Spherical::from_cartesian(&Vector3::zeros()), Spherical::default());
    }

    #[test]
    fn test_phase_roundtrip() {
        let phase = PhaseCartesian::new(
            Vector3::new(1.0, 2.0, 0.5),
            Vector3::new(-0.01, 0.02, 0.003),
        );
        let back = phase.to_spherical().to_cartesian();
        assert_relative_eq!(back.position, phase.position, epsilon = 1e-14);
        assert_relative_eq!(back.velocity, phase.velocity, epsilon = 1e-14);
    }

    #[test]
    fn test_spherical_velocity_matches_finite_difference() {
        let phase = PhaseSpherical::new(
            Spherical::new(1.5, 0.7, -0.2),
            Spherical::new(0.01, 0.03, -0.004),
        );
        let h = 1e-6;
        let shifted = Spherical::new(
            1.5 + 0.01 * h,
            0.7 + 0.03 * h,
            -0.2 - 0.004 * h,
        );
        let fd = (shifted.to_cartesian() - phase.position.to_cartesian()) / h;
        assert_relative_eq!(phase.to_cartesian().velocity, fd, epsilon = 1e-6);
    }

    #[test]
    fn test_aberration() {
        let phase = PhaseCartesian::new(Vector3::new(10.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let corrected = correct_aberration(&phase, 100.0);
        assert_relative_eq!(corrected.position, Vector3::new(10.0, -0.1, 0.0));
        assert_eq!(corrected.velocity, phase.velocity);
    }

    #[test]
    fn test_signed_angle() {
        let a = Vector3::x();
        assert_relative_eq!(signed_angle(&a, &Vector3::y()), FRAC_PI_2);
        assert_relative_eq!(signed_angle(&a, &-Vector3::y()), -FRAC_PI_2);
        assert_relative_eq!(signed_angle(&a, &a), 0.0);
    }

    #[test]
    fn test_stereographic_projection() {
        assert_relative_eq!(stereographic_projection(0.0, 1.0), 1.0);
        assert_eq!(stereographic_projection(FRAC_PI_2, 1.0), f64::INFINITY);
        assert_relative_eq!(stereographic_projection(-FRAC_PI_2, 1.0), 0.0, epsilon = 1e-15);
        // tan(π/4 + x/2)
        let x: f64 = 0.4;
        assert_relative_eq!(
            stereographic_projection(x, 1.0),
            (PI / 4.0 + x / 2.0).tan(),
            epsilon = 1e-12
        );
    }
}
