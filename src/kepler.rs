//! # Kepler's equation
//!
//! Two forms are solved here:
//!
//! - classical: `E − e·sin E = M` for the eccentric anomaly `E` ([`eccentric_anomaly`]),
//! - equinoctial: `F − k·sin F + h·cos F = λ` for the eccentric longitude `F`
//!   ([`eccentric_longitude`]), which stays regular for vanishing eccentricity.
use roots::{find_root_newton_raphson, SimpleConvergency};
use std::f64::consts::PI;

use crate::{constants::Radian, coordinates::principal_angle, ephemeris_errors::EphemerisError};

/// Newton iterations allowed for [`eccentric_anomaly`]
const KEPLER_MAX_ITERATIONS: usize = 50;

/// Solve `E − e·sin E = M` with Newton-Raphson.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M (radians)
/// * `eccentricity`: e, with 0 ≤ e < 1
/// * `tolerance`: convergence threshold on the residual and the step (radians)
///
/// Return
/// ------
/// * E in radians, on the same turn as `mean_anomaly`, or
///   [`EphemerisError::RootFindingError`] when Newton does not converge within
///   `KEPLER_MAX_ITERATIONS` steps
pub fn eccentric_anomaly(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
) -> Result<Radian, EphemerisError> {
    let f = |u: f64| -> f64 { u - eccentricity * u.sin() - mean_anomaly };
    let df = |u: f64| -> f64 { 1.0 - eccentricity * u.cos() };

    // start from π within the turn of M for highly eccentric orbits
    let start = if eccentricity > 0.8 {
        mean_anomaly - principal_angle(mean_anomaly) + PI
    } else {
        mean_anomaly
    };

    let mut convergency = SimpleConvergency {
        eps: tolerance,
        max_iter: KEPLER_MAX_ITERATIONS,
    };

    Ok(find_root_newton_raphson(start, &f, &df, &mut convergency)?)
}

/// Solve the equinoctial Kepler equation `F − k·sin F + h·cos F = λ` with
/// Newton-Raphson.
///
/// Arguments
/// ---------
/// * `mean_longitude`: λ (radians)
/// * `h`, `k`: e·sin ϖ and e·cos ϖ
///
/// Return
/// ------
/// * the eccentric longitude F, or [`EphemerisError::RootFindingError`] if Newton does not
///   converge
pub fn eccentric_longitude(
    mean_longitude: Radian,
    h: f64,
    k: f64,
) -> Result<Radian, EphemerisError> {
    let f = |fval: f64| -> f64 { fval - k * fval.sin() + h * fval.cos() - mean_longitude };
    let df = |fval: f64| -> f64 { 1.0 - k * fval.cos() - h * fval.sin() };

    let mut convergency = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 30,
    };

    Ok(find_root_newton_raphson(mean_longitude, &f, &df, &mut convergency)?)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eccentric_anomaly_residual() {
        for &e in &[0.0, 0.0167, 0.0549, 0.25, 0.5, 0.7, 0.9, 0.97] {
            for i in 0..24 {
                let m = -3.0 + 0.3 * i as f64;
                let u = eccentric_anomaly(m, e, 1e-15).unwrap();
                assert!(
                    (u - e * u.sin() - m).abs() < 1e-12,
                    "residual too large for e = {e}, M = {m}"
                );
            }
        }
    }

    #[test]
    fn test_eccentric_anomaly_circular() {
        assert_eq!(eccentric_anomaly(1.234, 0.0, 1e-15).unwrap(), 1.234);
    }

    #[test]
    fn test_eccentric_anomaly_reports_non_convergence() {
        // a zero tolerance is never met, the iteration cap is
        assert_eq!(
            eccentric_anomaly(2.0, 0.5, 0.0),
            Err(EphemerisError::RootFindingError(roots::SearchError::NoConvergency))
        );
        assert!(eccentric_anomaly(f64::NAN, 0.5, 1e-12).is_err());
    }

    #[test]
    fn test_eccentric_anomaly_meeus_example() {
        // Meeus, example 30.a: e = 0.1, M = 5°, E = 5.554589°
        let u = eccentric_anomaly(5.0_f64.to_radians(), 0.1, 1e-15).unwrap();
        assert_relative_eq!(u.to_degrees(), 5.554589, epsilon = 1e-6);
    }

    #[test]
    fn test_eccentric_longitude_matches_classical_form() {
        let e: f64 = 0.2;
        let varpi: f64 = 1.1;
        let m: f64 = 2.3;
        let (h, k) = (e * varpi.sin(), e * varpi.cos());

        let f = eccentric_longitude(m + varpi, h, k).unwrap();
        let u = eccentric_anomaly(m, e, 1e-15).unwrap();
        assert_relative_eq!(f, u + varpi, epsilon = 1e-12);
    }
}
