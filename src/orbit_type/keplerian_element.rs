//! # Keplerian orbital elements
//!
//! The six classical elements are:
//!
//! 1. **Ω** – Longitude of ascending node (radians)
//! 2. **i** – Inclination to the reference plane (radians)
//! 3. **ω** – Argument of periapsis (radians)
//! 4. **a** – Semi-major axis (any length unit)
//! 5. **e** – Eccentricity (unitless, 0 ≤ e < 1)
//! 6. **M** – Mean anomaly (radians)
//!
//! Mean element theories (the Moon model uses Schlyter's) give each element as
//! `base + rate · t`; [`KeplerianElements::propagate`] evaluates such a pair and keeps every
//! angle in `[0, 2π)`.
//!
//! ## Degeneracies
//!
//! - **Circular orbits (`e → 0`)**: periapsis argument ω becomes undefined.
//! - **Equatorial orbits (`i → 0`)**: ascending node Ω becomes undefined.
//!
//! The [`Vsop87Elements`] form avoids both.
use nalgebra::Vector3;
use std::{fmt, ops::Add};

use crate::{
    coordinates::principal_angle, ephemeris_errors::EphemerisError, kepler::eccentric_anomaly,
    orbit_type::vsop87_element::Vsop87Elements,
};

/// Keplerian orbital elements (mean or osculating, two-body).
#[derive(Debug, PartialEq, Clone, Default)]
pub struct KeplerianElements {
    pub ascending_node_longitude: f64,
    pub inclination: f64,
    pub periapsis_argument: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: f64,
}

impl KeplerianElements {
    /// Mean longitude λ = Ω + ω + M
    pub fn mean_longitude(&self) -> f64 {
        self.ascending_node_longitude + self.periapsis_argument + self.mean_anomaly
    }

    /// Same elements with every angle reduced to `[0, 2π)`.
    pub fn standardized(&self) -> Self {
        KeplerianElements {
            ascending_node_longitude: principal_angle(self.ascending_node_longitude),
            inclination: principal_angle(self.inclination),
            periapsis_argument: principal_angle(self.periapsis_argument),
            mean_anomaly: principal_angle(self.mean_anomaly),
            ..self.clone()
        }
    }

    /// Elements at time `t` for a linear theory `self + rate · t`.
    ///
    /// Arguments
    /// ---------
    /// * `rate`: element rates per unit of `t`
    /// * `t`: elapsed time
    pub fn propagate(&self, rate: &KeplerianElements, t: f64) -> KeplerianElements {
        self.clone() + rate.scaled(t)
    }

    fn scaled(&self, factor: f64) -> KeplerianElements {
        KeplerianElements {
            ascending_node_longitude: self.ascending_node_longitude * factor,
            inclination: self.inclination * factor,
            periapsis_argument: self.periapsis_argument * factor,
            semi_major_axis: self.semi_major_axis * factor,
            eccentricity: self.eccentricity * factor,
            mean_anomaly: self.mean_anomaly * factor,
        }
    }

    /// Position in the reference frame of the elements.
    ///
    /// Kepler's equation is solved for the eccentric anomaly; the position in the orbital plane
    /// (x toward the periapsis) is then turned by ω, tilted by i and turned by Ω.
    ///
    /// Arguments
    /// ---------
    /// * `tolerance`: Newton stopping criterion for the eccentric anomaly (radians)
    ///
    /// Return
    /// ------
    /// * Cartesian position, in the unit of `semi_major_axis`, or the root-finding error of
    ///   Kepler's equation
    pub fn position(&self, tolerance: f64) -> Result<Vector3<f64>, EphemerisError> {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let u = eccentric_anomaly(self.mean_anomaly, e, tolerance)?;

        let xv = a * (u.cos() - e);
        let yv = a * ((1.0 - e * e).sqrt() * u.sin());

        let (sin_w, cos_w) = self.periapsis_argument.sin_cos();
        let xw = xv * cos_w - yv * sin_w;
        let yw = xv * sin_w + yv * cos_w;

        let (sin_node, cos_node) = self.ascending_node_longitude.sin_cos();
        let (sin_i, cos_i) = self.inclination.sin_cos();
        Ok(Vector3::new(
            cos_node * xw - sin_node * yw * cos_i,
            sin_node * xw + cos_node * yw * cos_i,
            yw * sin_i,
        ))
    }
}

impl Add for KeplerianElements {
    type Output = KeplerianElements;

    /// Element-wise sum, angles reduced to `[0, 2π)`.
    fn add(self, rhs: KeplerianElements) -> KeplerianElements {
        KeplerianElements {
            ascending_node_longitude: self.ascending_node_longitude + rhs.ascending_node_longitude,
            inclination: self.inclination + rhs.inclination,
            periapsis_argument: self.periapsis_argument + rhs.periapsis_argument,
            semi_major_axis: self.semi_major_axis + rhs.semi_major_axis,
            eccentricity: self.eccentricity + rhs.eccentricity,
            mean_anomaly: self.mean_anomaly + rhs.mean_anomaly,
        }
        .standardized()
    }
}

impl From<&Vsop87Elements> for KeplerianElements {
    /// Classical elements from the VSOP87 form `(a, λ, h, k, p, q)` with
    /// `p = sin(i/2)·sin Ω` and `q = sin(i/2)·cos Ω`.
    ///
    /// Undefined angles (Ω for i = 0, ϖ for e = 0) are set to zero.
    fn from(v: &Vsop87Elements) -> Self {
        let eps = 1.0e-12;

        let ecc = (v.h * v.h + v.k * v.k).sqrt();
        let varpi = if ecc < eps { 0.0 } else { v.h.atan2(v.k) };

        let sin_half_incl = (v.p * v.p + v.q * v.q).sqrt();
        let node = if sin_half_incl < eps {
            0.0
        } else {
            v.p.atan2(v.q)
        };

        KeplerianElements {
            ascending_node_longitude: principal_angle(node),
            inclination: 2.0 * sin_half_incl.min(1.0).asin(),
            periapsis_argument: principal_angle(varpi - node),
            semi_major_axis: v.semi_major_axis,
            eccentricity: ecc,
            mean_anomaly: principal_angle(v.mean_longitude - varpi),
        }
    }
}

impl From<Vsop87Elements> for KeplerianElements {
    fn from(v: Vsop87Elements) -> Self {
        (&v).into()
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude.to_degrees()
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination.to_degrees()
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument.to_degrees()
        )?;
        writeln!(f, "  a   (semi-major axis)       = {:.6}", self.semi_major_axis)?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6} rad ({:.6}°)",
            self.mean_anomaly,
            self.mean_anomaly.to_degrees()
        )
    }
}

#[cfg(test)]
mod keplerian_element_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_relative_eq;

    fn sample() -> KeplerianElements {
        KeplerianElements {
            ascending_node_longitude: 0.0079559790,
            inclination: 0.2026738329,
            periapsis_argument: 1.2451951388,
            semi_major_axis: 1.8017360713,
            eccentricity: 0.2835591457,
            mean_anomaly: 0.4405458902,
        }
    }

    #[test]
    fn test_propagate_standardizes_angles() {
        let base = sample();
        let rate = KeplerianElements {
            ascending_node_longitude: -0.1,
            mean_anomaly: 1.0,
            ..Default::default()
        };
        let later = base.propagate(&rate, 10.0);
        assert_relative_eq!(later.ascending_node_longitude, principal_angle(0.0079559790 - 1.0));
        assert_relative_eq!(later.mean_anomaly, principal_angle(10.4405458902), epsilon = 1e-12);
        assert!(later.mean_anomaly < DPI);
        assert_eq!(later.semi_major_axis, base.semi_major_axis);
    }

    #[test]
    fn test_position_at_periapsis() {
        let elements = KeplerianElements {
            semi_major_axis: 2.0,
            eccentricity: 0.5,
            ..Default::default()
        };
        assert_relative_eq!(
            elements.position(1e-15).unwrap(),
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_position_radius_matches_kepler() {
        let elements = sample();
        let r = elements.position(1e-15).unwrap().norm();
        let u = eccentric_anomaly(elements.mean_anomaly, elements.eccentricity, 1e-15).unwrap();
        let expected = elements.semi_major_axis * (1.0 - elements.eccentricity * u.cos());
        assert_relative_eq!(r, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_position_propagates_kepler_failure() {
        let elements = KeplerianElements {
            mean_anomaly: f64::NAN,
            ..sample()
        };
        assert!(matches!(
            elements.position(1e-15),
            Err(EphemerisError::RootFindingError(_))
        ));
    }

    #[test]
    fn test_same_position_as_vsop87_form() {
        let kepler = sample();
        let classical = kepler.position(1e-15).unwrap();
        let equinoctial = Vsop87Elements::from(&kepler).position().unwrap();
        assert_relative_eq!(classical, equinoctial, epsilon = 1e-12);
    }

    #[test]
    fn test_vsop87_roundtrip() {
        let kepler = sample();
        let vsop: Vsop87Elements = (&kepler).into();
        let back: KeplerianElements = vsop.into();
        assert_relative_eq!(
            back.ascending_node_longitude,
            kepler.ascending_node_longitude,
            epsilon = 1e-12
        );
        assert_relative_eq!(back.inclination, kepler.inclination, epsilon = 1e-12);
        assert_relative_eq!(back.periapsis_argument, kepler.periapsis_argument, epsilon = 1e-12);
        assert_relative_eq!(back.eccentricity, kepler.eccentricity, epsilon = 1e-12);
        assert_relative_eq!(back.mean_anomaly, kepler.mean_anomaly, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("Keplerian Elements"));
        assert!(text.contains("e   (eccentricity)          = 0.283559"));
    }
}
