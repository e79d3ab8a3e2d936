//! # VSOP87 elliptic elements
//!
//! The elliptic variables of the VSOP87 theory:
//!
//! ```text
//! a                 semi-major axis
//! λ                 mean longitude
//! h = e·sin ϖ       k = e·cos ϖ          (ϖ = Ω + ω)
//! p = sin(i/2)·sin Ω q = sin(i/2)·cos Ω
//! ```
//!
//! Positions are computed directly from these variables through the equinoctial Kepler
//! equation, without passing through the singular classical angles.
use nalgebra::Vector3;

use crate::{
    ephemeris_errors::EphemerisError, kepler::eccentric_longitude,
    orbit_type::keplerian_element::KeplerianElements,
};

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Vsop87Elements {
    pub semi_major_axis: f64,
    pub mean_longitude: f64,
    pub h: f64,
    pub k: f64,
    pub p: f64,
    pub q: f64,
}

impl Vsop87Elements {
    /// Position in the reference frame of the elements, in the unit of `semi_major_axis`.
    ///
    /// Return
    /// ------
    /// * the position, or a root-finding error when the equinoctial Kepler equation does not
    ///   converge
    pub fn position(&self) -> Result<Vector3<f64>, EphemerisError> {
        let (h, k) = (self.h, self.k);
        let a = self.semi_major_axis;

        let f = eccentric_longitude(self.mean_longitude, h, k)?;
        let (sin_f, cos_f) = f.sin_cos();

        let beta = 1. / (1. + (1. - h * h - k * k).sqrt());
        let beta_hk = beta * h * k;

        let xe = a * ((1. - beta * h * h) * cos_f + beta_hk * sin_f - k);
        let ye = a * ((1. - beta * k * k) * sin_f + beta_hk * cos_f - h);

        // tan(i/2) components from the sin(i/2) ones
        let cos_half_incl = (1. - self.p * self.p - self.q * self.q).max(0.0).sqrt();
        let tp = self.p / cos_half_incl;
        let tq = self.q / cos_half_incl;

        let inv_u = 1.0 / (1. + tp * tp + tq * tq);
        let common = 2. * tp * tq * inv_u;

        let f_vector = Vector3::new((1. - tp * tp + tq * tq) * inv_u, common, -2. * tp * inv_u);
        let g_vector = Vector3::new(common, (1. + tp * tp - tq * tq) * inv_u, 2. * tq * inv_u);

        Ok(xe * f_vector + ye * g_vector)
    }

    pub fn eccentricity(&self) -> f64 {
        (self.h * self.h + self.k * self.k).sqrt()
    }

    pub fn inclination(&self) -> f64 {
        2.0 * (self.p * self.p + self.q * self.q).sqrt().min(1.0).asin()
    }
}

impl From<&KeplerianElements> for Vsop87Elements {
    fn from(k: &KeplerianElements) -> Self {
        let varpi = k.ascending_node_longitude + k.periapsis_argument;
        let sin_half_incl = (0.5 * k.inclination).sin();
        Vsop87Elements {
            semi_major_axis: k.semi_major_axis,
            mean_longitude: k.mean_longitude(),
            h: k.eccentricity * varpi.sin(),
            k: k.eccentricity * varpi.cos(),
            p: sin_half_incl * k.ascending_node_longitude.sin(),
            q: sin_half_incl * k.ascending_node_longitude.cos(),
        }
    }
}

impl From<KeplerianElements> for Vsop87Elements {
    fn from(k: KeplerianElements) -> Self {
        (&k).into()
    }
}

#[cfg(test)]
mod vsop87_element_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_keplerian() {
        let kepler = KeplerianElements {
            ascending_node_longitude: 0.5,
            inclination: 0.2,
            periapsis_argument: 1.0,
            semi_major_axis: 5.2,
            eccentricity: 0.048,
            mean_anomaly: 0.3,
        };
        let v = Vsop87Elements::from(&kepler);
        assert_relative_eq!(v.mean_longitude, 1.8);
        assert_relative_eq!(v.eccentricity(), 0.048, epsilon = 1e-15);
        assert_relative_eq!(v.inclination(), 0.2, epsilon = 1e-15);
        assert_relative_eq!(v.h, 0.048 * 1.5_f64.sin());
        assert_relative_eq!(v.q, 0.1_f64.sin() * 0.5_f64.cos());
    }

    #[test]
    fn test_circular_equatorial_orbit() {
        let v = Vsop87Elements {
            semi_major_axis: 1.0,
            mean_longitude: 0.7,
            ..Default::default()
        };
        let p = v.position().unwrap();
        assert_relative_eq!(p, Vector3::new(0.7_f64.cos(), 0.7_f64.sin(), 0.0), epsilon = 1e-14);
    }

    #[test]
    fn test_position_is_above_plane_after_node() {
        // a quarter turn after the ascending node the body is at maximum height sin(i)
        let kepler = KeplerianElements {
            ascending_node_longitude: 0.3,
            inclination: 0.4,
            periapsis_argument: 0.0,
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            mean_anomaly: std::f64::consts::FRAC_PI_2,
        };
        let p = Vsop87Elements::from(&kepler).position().unwrap();
        assert_relative_eq!(p.z, 0.4_f64.sin(), epsilon = 1e-12);
    }
}
