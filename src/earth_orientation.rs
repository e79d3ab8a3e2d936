//! # Earth orientation
//!
//! Time-dependent orientation of the equator and the ecliptic:
//!
//! - [`obleq`]: mean obliquity of the ecliptic,
//! - [`nutn80`]: IAU 1980 nutation in longitude and obliquity,
//! - [`equequ`]: equation of the equinoxes,
//! - [`prec`]: IAU 1976 precession of the mean equator (fixed stars),
//! - [`ecliptic_precession`]: VSOP87 precession of the ecliptic from J2000 to the date, and
//!   its rate [`ecliptic_precession_rate`],
//! - [`Ecliptic`]: every frame matrix of one instant bundled together.
//!
//! Functions taking `tjm` expect a Modified Julian Date; [`Ecliptic`] takes an [`Instant`].
use nalgebra::Matrix3;

use crate::{
    constants::{ArcSec, Radian, DAYS_PER_CENTURY, DPI, RADEG, RADSEC, T2000},
    ref_system::{rotation, Axis},
    time::Instant,
};

/// Evaluate a polynomial given by its coefficients of increasing degree (Horner scheme).
pub(crate) fn horner(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Derivative in `t` of the polynomial evaluated by [`horner`].
pub(crate) fn horner_derivative(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .fold(0.0, |acc, (n, c)| acc * t + n as f64 * c)
}

/// Compute the mean obliquity of the ecliptic at a given epoch.
///
/// The obliquity ε is the angle between the Earth's equator and the ecliptic plane,
/// evaluated as a cubic polynomial in Julian centuries since J2000
/// (Astronomical Almanac 1984):
///
/// ```text
/// ε(T) = 23.4392911111° − 0.0130041667° T − 1.638888e-7° T² + 5.036111e-7° T³
/// ```
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// # See also
/// * [`rotation`] – builds the ecliptic ↔ equator rotation from this angle
pub fn obleq(tjm: f64) -> Radian {
    const OBLIQUITY: [f64; 4] = [23.4392911111, -1.30041667e-2, -1.638888e-7, 5.036111e-7];

    let t = (tjm - T2000) / DAYS_PER_CENTURY;

    horner(&OBLIQUITY, t) * RADEG
}

/// Delaunay arguments (l, l′, F, D, Ω) in arcseconds, as polynomials in Julian centuries
/// since J2000 (Meeus, ch. 22).
const DELAUNAY_ARGUMENTS: [[f64; 5]; 5] = [
    [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.0002447],
    [1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
    [1072260.703692, 1602961601.209, -6.3706, 0.006593, -0.00003169],
    [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
];

/// IAU 1980 nutation series, one row per term:
/// multipliers of (l, l′, F, D, Ω), then `Δψ = (S₀ + S₁ T) sin`, `Δε = (C₀ + C₁ T) cos`
/// in units of 0.0001″.
#[rustfmt::skip]
const NUTATION_SERIES: [[f64; 9]; 106] = [
    [0.0, 0.0, 0.0, 0.0, 1.0, -171996.0, -174.2, 92025.0, 8.9],
    [0.0, 0.0, 2.0, -2.0, 2.0, -13187.0, -1.6, 5736.0, -3.1],
    [0.0, 0.0, 2.0, 0.0, 2.0, -2274.0, -0.2, 977.0, -0.5],
    [0.0, 0.0, 0.0, 0.0, 2.0, 2062.0, 0.2, -895.0, 0.5],
    [0.0, 1.0, 0.0, 0.0, 0.0, 1426.0, -3.4, 54.0, -0.1],
    [1.0, 0.0, 0.0, 0.0, 0.0, 712.0, 0.1, -7.0, 0.0],
    [0.0, 1.0, 2.0, -2.0, 2.0, -517.0, 1.2, 224.0, -0.6],
    [0.0, 0.0, 2.0, 0.0, 1.0, -386.0, -0.4, 200.0, 0.0],
    [1.0, 0.0, 2.0, 0.0, 2.0, -301.0, 0.0, 129.0, -0.1],
    [0.0, -1.0, 2.0, -2.0, 2.0, 217.0, -0.5, -95.0, 0.3],
    [1.0, 0.0, 0.0, -2.0, 0.0, -158.0, 0.0, -1.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, 1.0, 129.0, 0.1, -70.0, 0.0],
    [-1.0, 0.0, 2.0, 0.0, 2.0, 123.0, 0.0, -53.0, 0.0],
    [0.0, 0.0, 0.0, 2.0, 0.0, 63.0, 0.0, -2.0, 0.0],
    [1.0, 0.0, 0.0, 0.0, 1.0, 63.0, 0.1, -33.0, 0.0],
    [-1.0, 0.0, 2.0, 2.0, 2.0, -59.0, 0.0, 26.0, 0.0],
    [-1.0, 0.0, 0.0, 0.0, 1.0, -58.0, -0.1, 32.0, 0.0],
    [1.0, 0.0, 2.0, 0.0, 1.0, -51.0, 0.0, 27.0, 0.0],
    [2.0, 0.0, 0.0, -2.0, 0.0, 48.0, 0.0, 1.0, 0.0],
    [-2.0, 0.0, 2.0, 0.0, 1.0, 46.0, 0.0, -24.0, 0.0],
    [0.0, 0.0, 2.0, 2.0, 2.0, -38.0, 0.0, 16.0, 0.0],
    [2.0, 0.0, 2.0, 0.0, 2.0, -31.0, 0.0, 13.0, 0.0],
    [2.0, 0.0, 0.0, 0.0, 0.0, 29.0, 0.0, -1.0, 0.0],
    [1.0, 0.0, 2.0, -2.0, 2.0, 29.0, 0.0, -12.0, 0.0],
    [0.0, 0.0, 2.0, 0.0, 0.0, 26.0, 0.0, -1.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, 0.0, -22.0, 0.0, 0.0, 0.0],
    [-1.0, 0.0, 2.0, 0.0, 1.0, 21.0, 0.0, -10.0, 0.0],
    [0.0, 2.0, 0.0, 0.0, 0.0, 17.0, -0.1, 0.0, 0.0],
    [0.0, 2.0, 2.0, -2.0, 2.0, -16.0, 0.1, 7.0, 0.0],
    [-1.0, 0.0, 0.0, 2.0, 1.0, 16.0, 0.0, -8.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 1.0, -15.0, 0.0, 9.0, 0.0],
    [1.0, 0.0, 0.0, -2.0, 1.0, -13.0, 0.0, 7.0, 0.0],
    [0.0, -1.0, 0.0, 0.0, 1.0, -12.0, 0.0, 6.0, 0.0],
    [2.0, 0.0, -2.0, 0.0, 0.0, 11.0, 0.0, 0.0, 0.0],
    [-1.0, 0.0, 2.0, 2.0, 1.0, -10.0, 0.0, 5.0, 0.0],
    [1.0, 0.0, 2.0, 2.0, 2.0, -8.0, 0.0, 3.0, 0.0],
    [1.0, 1.0, 0.0, -2.0, 0.0, -7.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 2.0, 0.0, 2.0, 7.0, 0.0, -3.0, 0.0],
    [0.0, -1.0, 2.0, 0.0, 2.0, -7.0, 0.0, 3.0, 0.0],
    [0.0, 0.0, 2.0, 2.0, 1.0, -7.0, 0.0, 3.0, 0.0],
    [-2.0, 0.0, 0.0, 2.0, 1.0, -6.0, 0.0, 3.0, 0.0],
    [1.0, 0.0, 0.0, 2.0, 0.0, 6.0, 0.0, 0.0, 0.0],
    [2.0, 0.0, 2.0, -2.0, 2.0, 6.0, 0.0, -3.0, 0.0],
    [0.0, 0.0, 0.0, 2.0, 1.0, -6.0, 0.0, 3.0, 0.0],
    [1.0, 0.0, 2.0, -2.0, 1.0, 6.0, 0.0, -3.0, 0.0],
    [0.0, -1.0, 2.0, -2.0, 1.0, -5.0, 0.0, 3.0, 0.0],
    [0.0, 0.0, 0.0, -2.0, 1.0, -5.0, 0.0, 3.0, 0.0],
    [1.0, -1.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0],
    [2.0, 0.0, 2.0, 0.0, 1.0, -5.0, 0.0, 3.0, 0.0],
    [2.0, 0.0, 0.0, -2.0, 1.0, 4.0, 0.0, -2.0, 0.0],
    [0.0, 1.0, 2.0, -2.0, 1.0, 4.0, 0.0, -2.0, 0.0],
    [1.0, 0.0, 0.0, -1.0, 0.0, -4.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, -2.0, 0.0, -4.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, -2.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, -4.0, 0.0, 0.0, 0.0],
    [-2.0, 0.0, 2.0, 0.0, 2.0, -3.0, 0.0, 1.0, 0.0],
    [1.0, -1.0, 0.0, -1.0, 0.0, -3.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0],
    [1.0, -1.0, 2.0, 0.0, 2.0, -3.0, 0.0, 1.0, 0.0],
    [-1.0, -1.0, 2.0, 2.0, 2.0, -3.0, 0.0, 1.0, 0.0],
    [3.0, 0.0, 2.0, 0.0, 2.0, -3.0, 0.0, 1.0, 0.0],
    [0.0, -1.0, 2.0, 2.0, 2.0, -3.0, 0.0, 1.0, 0.0],
    [0.0, -2.0, 2.0, -2.0, 1.0, -2.0, 0.0, 1.0, 0.0],
    [-2.0, 0.0, 0.0, 0.0, 1.0, -2.0, 0.0, 1.0, 0.0],
    [1.0, 1.0, 2.0, 0.0, 2.0, 2.0, 0.0, -1.0, 0.0],
    [-1.0, 0.0, 2.0, -2.0, 1.0, -2.0, 0.0, 1.0, 0.0],
    [2.0, 0.0, 0.0, 0.0, 1.0, 2.0, 0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0, 2.0, -2.0, 0.0, 1.0, 0.0],
    [3.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, 1.0, 2.0, 2.0, 0.0, -1.0, 0.0],
    [-1.0, 0.0, 2.0, 4.0, 2.0, -2.0, 0.0, 1.0, 0.0],
    [2.0, 0.0, -2.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [2.0, 1.0, 0.0, -2.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, -2.0, 2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, -2.0, 2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 2.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0, 0.0, 2.0, 1.0, 0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0, -4.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [-2.0, 0.0, 2.0, 2.0, 2.0, 1.0, 0.0, -1.0, 0.0],
    [2.0, 0.0, 0.0, -4.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 2.0, -2.0, 2.0, 1.0, 0.0, -1.0, 0.0],
    [1.0, 0.0, 2.0, 2.0, 1.0, -1.0, 0.0, 1.0, 0.0],
    [-2.0, 0.0, 2.0, 4.0, 2.0, -1.0, 0.0, 1.0, 0.0],
    [-1.0, 0.0, 4.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, -1.0, 0.0, -2.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [2.0, 0.0, 2.0, -2.0, 1.0, 1.0, 0.0, -1.0, 0.0],
    [2.0, 0.0, 2.0, 2.0, 2.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 2.0, 1.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 4.0, -2.0, 2.0, 1.0, 0.0, 0.0, 0.0],
    [3.0, 0.0, 2.0, -2.0, 2.0, 1.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 2.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 2.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [-1.0, -1.0, 0.0, 2.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, -2.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, -1.0, 2.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, -2.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, -1.0, 2.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0, -2.0, 1.0, -1.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, -2.0, 2.0, 0.0, -1.0, 0.0, 0.0, 0.0],
    [2.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, 4.0, 2.0, -1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
];

/// Nutation in longitude and obliquity, IAU 1980 (Wahr) model.
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date.
///
/// Returns
/// --------
/// * `(Δψ, Δε)` in arcseconds: the periodic shift of the equinox along the ecliptic and of
///   the obliquity.
///
/// # See also
/// * [`nutation_matrix`] – rotation built from these angles
pub fn nutn80(tjm: f64) -> (ArcSec, ArcSec) {
    let t = (tjm - T2000) / DAYS_PER_CENTURY;
    let arguments = DELAUNAY_ARGUMENTS.map(|coefficients| horner(&coefficients, t) * RADSEC);

    let (dpsi, deps) = NUTATION_SERIES
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), term| {
            let angle: f64 = term[..5]
                .iter()
                .zip(arguments.iter())
                .map(|(k, a)| k * a)
                .sum();
            let (sin, cos) = angle.sin_cos();
            (
                dpsi + (term[5] + term[6] * t) * sin,
                deps + (term[7] + term[8] * t) * cos,
            )
        });

    (dpsi * 1e-4, deps * 1e-4)
}

/// Nutation matrix: mean equator and equinox of date → true equator and equinox of date.
///
/// ```text
/// N = Rx(ε + Δε) · Rz(Δψ) · Rx(−ε)
/// ```
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date.
///
/// Returns
/// --------
/// * `N` such that `x_true = N · x_mean`.
pub fn nutation_matrix(tjm: f64) -> Matrix3<f64> {
    let epsm = obleq(tjm);
    let (dpsi, deps) = nutn80(tjm);
    let epst = epsm + deps * RADSEC;

    rotation(epst, Axis::X) * rotation(dpsi * RADSEC, Axis::Z) * rotation(-epsm, Axis::X)
}

/// Compute the equation of the equinoxes in radians.
///
/// Difference between apparent and mean sidereal time due to the nutation of the Earth's
/// rotation axis:
///
/// ```text
/// Eq_eq = Δψ · cos(ε)
/// ```
///
/// # Arguments
/// * `tjm` - Modified Julian Date
///
/// # See also
/// * [`obleq`] – mean obliquity of the ecliptic
/// * [`nutn80`] – nutation angles Δψ and Δε
pub fn equequ(tjm: f64) -> Radian {
    let oblm = obleq(tjm);
    let (dpsi, _deps) = nutn80(tjm);

    RADSEC * dpsi * oblm.cos()
}

/// Precession matrix from the J2000 mean equator to the mean equator and equinox of date
/// (IAU 1976).
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date of the target equinox.
///
/// Returns
/// --------
/// * `P` such that `x_mean(tjm) = P · x_J2000`
///
/// Method
/// ------
/// ```text
/// P = Rz(z) · Ry(−θ) · Rz(ζ)
/// ζ(T) = (0.6406161 + 0.0000839·T + 0.0000050·T²) · T  [deg]
/// θ(T) = (0.5567530 − 0.0001185·T − 0.0000116·T²) · T  [deg]
/// z(T) = (0.6406161 + 0.0003041·T + 0.0000051·T²) · T  [deg]
/// ```
pub fn prec(tjm: f64) -> Matrix3<f64> {
    const ZETA: [f64; 4] = [0.0, 0.6406161, 0.0000839, 0.0000050];
    const THETA: [f64; 4] = [0.0, 0.5567530, -0.0001185, -0.0000116];
    const Z: [f64; 4] = [0.0, 0.6406161, 0.0003041, 0.0000051];

    let t = (tjm - T2000) / DAYS_PER_CENTURY;

    let zeta = horner(&ZETA, t) * RADEG;
    let theta = horner(&THETA, t) * RADEG;
    let z = horner(&Z, t) * RADEG;

    rotation(z, Axis::Z) * rotation(-theta, Axis::Y) * rotation(zeta, Axis::Z)
}

// -------------------------------------------------------------------------------------------------
// VSOP87 precession of the ecliptic (Bretagnon & Francou 1988), polynomials in Julian
// millennia, coefficients scaled by 1e-12
// -------------------------------------------------------------------------------------------------

const S11: [f64; 7] = [0.0, 0.0, -538867722.0, -270670.0, 1138205.0, 8604.0, -813.0];
const C11: [f64; 7] = [1e12, 0.0, -20728.0, -19147.0, -149390.0, -34.0, 617.0];
const S12: [f64; 7] = [-1e12, 0.0, 2575043.0, -56157.0, 140001.0, 383.0, -613.0];
const C12: [f64; 7] = [0.0, 0.0, -539329768.0, -479046.0, 1144883.0, 8884.0, -830.0];
const S13: [f64; 7] = [0.0, 2269380040.0, -24745348.0, -2422542.0, 78247.0, -468.0, 134.0];
const C13: [f64; 7] = [0.0, -203607820.0, -94040878.0, 2307025.0, 37729.0, -4862.0, 25.0];
const A31: [f64; 7] = [0.0, 203607820.0, 94040878.0, -1083606.0, -50218.0, 929.0, 11.0];
const A32: [f64; 7] = [0.0, 2269380040.0, -24745348.0, -2532307.0, 27473.0, 643.0, -1.0];
const A33: [f64; 7] = [1e12, 0.0, -2595771.0, 37009.0, 1236.0, -13.0, 0.0];

/// Precession matrix from the J2000 ecliptic and equinox to the ecliptic and equinox of date.
///
/// Arguments
/// ---------
/// * `t`: Julian millennia since J2000.
///
/// Returns
/// --------
/// * `M` such that `x_date = M · x_J2000`, both in ecliptic coordinates.
pub fn ecliptic_precession(t: f64) -> Matrix3<f64> {
    let p = |coefficients: &[f64; 7]| horner(coefficients, t) * 1e-12;

    let (s11, c11) = (p(&S11), p(&C11));
    let (s12, c12) = (p(&S12), p(&C12));
    let (s13, c13) = (p(&S13), p(&C13));

    let (sin_xi, cos_xi) = (0.243817483530 * t).sin_cos();

    Matrix3::new(
        s11 * sin_xi + c11 * cos_xi,
        s12 * sin_xi + c12 * cos_xi,
        s13 * sin_xi + c13 * cos_xi,
        c11 * sin_xi - s11 * cos_xi,
        c12 * sin_xi - s12 * cos_xi,
        c13 * sin_xi - s13 * cos_xi,
        p(&A31),
        p(&A32),
        p(&A33),
    )
}

/// Time derivative of [`ecliptic_precession`], per Julian millennium.
pub fn ecliptic_precession_rate(t: f64) -> Matrix3<f64> {
    let p = |coefficients: &[f64; 7]| horner(coefficients, t) * 1e-12;
    let dp = |coefficients: &[f64; 7]| horner_derivative(coefficients, t) * 1e-12;

    let rows =
        [(&S11, &C11), (&S12, &C12), (&S13, &C13)].map(|(s, c)| (p(s), p(c), dp(s), dp(c)));

    let rate = 0.243817483530;
    let (sin_xi, cos_xi) = (rate * t).sin_cos();

    let first = |(s, c, ds, dc): (f64, f64, f64, f64)| {
        ds * sin_xi + dc * cos_xi + rate * (s * cos_xi - c * sin_xi)
    };
    let second = |(s, c, ds, dc): (f64, f64, f64, f64)| {
        dc * sin_xi - ds * cos_xi + rate * (c * cos_xi + s * sin_xi)
    };

    Matrix3::new(
        first(rows[0]),
        first(rows[1]),
        first(rows[2]),
        second(rows[0]),
        second(rows[1]),
        second(rows[2]),
        dp(&A31),
        dp(&A32),
        dp(&A33),
    )
}

/// Orientation of the ecliptic and the equator at one instant.
///
/// Obliquity and nutation are evaluated once in [`Ecliptic::new`]; the frame matrices are
/// built on demand from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    instant: Instant,
    mean_obliquity: Radian,
    nutation_in_longitude: Radian,
    nutation_in_obliquity: Radian,
}

impl Ecliptic {
    pub fn new(instant: Instant) -> Self {
        let tjm = instant.mjd();
        let (dpsi, deps) = nutn80(tjm);
        Ecliptic {
            instant,
            mean_obliquity: obleq(tjm),
            nutation_in_longitude: dpsi * RADSEC,
            nutation_in_obliquity: deps * RADSEC,
        }
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn mean_obliquity(&self) -> Radian {
        self.mean_obliquity
    }

    pub fn true_obliquity(&self) -> Radian {
        self.mean_obliquity + self.nutation_in_obliquity
    }

    pub fn nutation_in_longitude(&self) -> Radian {
        self.nutation_in_longitude
    }

    pub fn nutation_in_obliquity(&self) -> Radian {
        self.nutation_in_obliquity
    }

    /// Nutation in right ascension, Δψ·cos(ε + Δε)
    pub fn nutation_in_right_ascension(&self) -> Radian {
        self.nutation_in_longitude * self.true_obliquity().cos()
    }

    pub fn mean_sidereal_time(&self) -> Radian {
        self.instant.mean_sidereal_time()
    }

    pub fn true_sidereal_time(&self) -> Radian {
        (self.instant.mean_sidereal_time() + self.nutation_in_right_ascension()).rem_euclid(DPI)
    }

    pub fn ecl_to_mean_equ(&self) -> Matrix3<f64> {
        rotation(self.mean_obliquity, Axis::X)
    }

    pub fn mean_equ_to_ecl(&self) -> Matrix3<f64> {
        rotation(-self.mean_obliquity, Axis::X)
    }

    pub fn mean_ecl_to_true_ecl(&self) -> Matrix3<f64> {
        rotation(self.nutation_in_longitude, Axis::Z)
    }

    pub fn mean_ecl_to_true_equ(&self) -> Matrix3<f64> {
        rotation(self.true_obliquity(), Axis::X) * self.mean_ecl_to_true_ecl()
    }

    pub fn true_equ_to_mean_ecl(&self) -> Matrix3<f64> {
        self.mean_ecl_to_true_equ().transpose()
    }

    /// J2000 ecliptic → ecliptic of date, see [`ecliptic_precession`].
    pub fn ecl_j2000_to_ecl_of_date(&self) -> Matrix3<f64> {
        ecliptic_precession(self.instant.millennia_since_j2000())
    }

    pub fn ecl_j2000_to_mean_equ(&self) -> Matrix3<f64> {
        self.ecl_to_mean_equ() * self.ecl_j2000_to_ecl_of_date()
    }

    pub fn ecl_j2000_to_true_equ(&self) -> Matrix3<f64> {
        self.mean_ecl_to_true_equ() * self.ecl_j2000_to_ecl_of_date()
    }
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use crate::coordinates::Spherical;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn instant(year: i32, month: u8, day: u8, hour: u8) -> Instant {
        Instant::from_gregorian_utc(year, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_obliquity() {
        let obl = obleq(T2000);
        assert_relative_eq!(obl, 0.40909280422232897, epsilon = 1e-12);
    }

    #[test]
    fn test_obliquity_over_millennia() {
        let obliquity = |year| Ecliptic::new(instant(year, 1, 1, 12)).mean_obliquity();
        assert_relative_eq!(obliquity(2000), 23.44 * RADEG, epsilon = 1e-3);
        assert_relative_eq!(obliquity(2016), 23.43721 * RADEG, epsilon = 1e-3);
        assert_relative_eq!(obliquity(3000), 23.31 * RADEG, epsilon = 1e-3);
    }

    #[test]
    fn test_nutn80() {
        let (dpsi, deps) = nutn80(T2000);
        assert_relative_eq!(dpsi, -13.923357970683194, epsilon = 1e-9);
        assert_relative_eq!(deps, -5.773810091429688, epsilon = 1e-9);
    }

    #[test]
    fn test_nutation_meeus_example() {
        // Meeus, Astronomical Algorithms, example 22.a: 1987 April 10, 0h
        let (dpsi, deps) = nutn80(instant(1987, 4, 10, 0).mjd());
        assert_relative_eq!(dpsi, -3.788, epsilon = 0.02);
        assert_relative_eq!(deps, 9.443, epsilon = 0.02);
    }

    #[test]
    fn test_nutation_matrix() {
        let rnut = nutation_matrix(T2000);
        let ref_rnut = Matrix3::new(
            0.9999999977217079,
            6.19323109890795e-5,
            2.6850942970991024e-5,
            -6.193306258211379e-5,
            0.9999999976903892,
            2.799138089948361e-5,
            -2.6849209338068913e-5,
            -2.7993043796858963e-5,
            0.9999999992477547,
        );
        assert_relative_eq!(rnut, ref_rnut, epsilon = 1e-9);
    }

    #[test]
    fn test_equequ_at_j2000() {
        let eqeq = equequ(T2000);
        let expected_rad = RADSEC * (-13.923357970683194) * (obleq(T2000).cos());
        assert_relative_eq!(eqeq, expected_rad, epsilon = 1e-13);
        assert!((eqeq / RADSEC).abs() < 30.0);
    }

    #[test]
    fn test_prec_moves_equinox_eastward() {
        // one century after J2000, the J2000 equinox sits at RA ≈ +1.28°, Dec ≈ +0.56°
        let p = prec(T2000 + DAYS_PER_CENTURY);
        let s = Spherical::from_cartesian(&(p * Vector3::x()));
        assert_relative_eq!(s.longitude, 1.2812 * RADEG, epsilon = 2e-3 * RADEG);
        assert_relative_eq!(s.latitude, 0.5567 * RADEG, epsilon = 2e-3 * RADEG);
        assert_relative_eq!(p.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ecliptic_precession() {
        assert_relative_eq!(ecliptic_precession(0.0), Matrix3::identity(), epsilon = 1e-15);

        // after one century the J2000 equinox moves by ≈ 1.397° in ecliptic longitude
        let m = ecliptic_precession(0.1);
        let s = Spherical::from_cartesian(&(m * Vector3::x()));
        assert_relative_eq!(s.longitude, 1.3970 * RADEG, epsilon = 2e-3 * RADEG);
        assert!(s.latitude.abs() < 1e-4);

        let orthogonality = m * m.transpose();
        assert_relative_eq!(orthogonality, Matrix3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_precession_rate_matches_finite_difference() {
        let (t, h) = (0.25, 1e-6);
        let fd = (ecliptic_precession(t + h) - ecliptic_precession(t - h)) / (2.0 * h);
        assert_relative_eq!(ecliptic_precession_rate(t), fd, epsilon = 1e-9);
    }

    #[test]
    fn test_horner_derivative() {
        // 1 + 2t + 3t² → 2 + 6t
        assert_relative_eq!(horner_derivative(&[1.0, 2.0, 3.0], 0.5), 5.0, epsilon = 1e-15);
        assert_eq!(horner_derivative(&[4.0], 2.0), 0.0);
    }

    #[test]
    fn test_ecliptic_frames_roundtrip() {
        let ecliptic = Ecliptic::new(instant(2018, 5, 1, 0));
        let v = Vector3::new(0.4, -0.2, 0.9);
        let back = ecliptic.mean_equ_to_ecl() * (ecliptic.ecl_to_mean_equ() * v);
        assert_relative_eq!(back, v, epsilon = 1e-10);
        let back = ecliptic.true_equ_to_mean_ecl() * (ecliptic.mean_ecl_to_true_equ() * v);
        assert_relative_eq!(back, v, epsilon = 1e-10);
    }

    #[test]
    fn test_true_sidereal_time() {
        let t = instant(2018, 5, 1, 0);
        let ecliptic = Ecliptic::new(t);
        let diff = ecliptic.true_sidereal_time() - t.true_sidereal_time();
        assert!(diff.abs() < 1e-8);
    }
}
