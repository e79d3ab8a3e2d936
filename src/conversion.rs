//! Sexagesimal angle parsing and formatting.
//!
//! Star catalogs give right ascensions as `HH MM SS.SS` and declinations as `±DD MM SS.S`.
//! Fields are separated by whitespace or colons; the sign, when present, is carried by the
//! first field and applies to the whole angle.
use crate::{
    constants::{Radian, RADEG, RADH},
    coordinates::principal_angle,
    ephemeris_errors::EphemerisError,
};

/// Split `±A B C` into a sign and the value `A + B/60 + C/3600`.
///
/// Minutes and seconds must lie in [0, 60); only the first field may be signed.
fn parse_sexagesimal(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let units: f64 = parts[0].trim_start_matches(&['-', '+'][..]).parse().ok()?;
    let minutes: f64 = parts[1].parse().ok()?;
    let seconds: f64 = parts[2].parse().ok()?;

    let in_range = |v: f64| (0.0..60.0).contains(&v);
    if !units.is_finite() || units < 0.0 || !in_range(minutes) || !in_range(seconds) {
        return None;
    }

    Some(sign * (units + minutes / 60.0 + seconds / 3600.0))
}

/// Parse a right ascension written `HH MM SS.SS` into radians.
///
/// Return
/// ------
/// * the angle in [0, 2π), or [`EphemerisError::InvalidAngle`] when the string is malformed or
///   the hours fall outside [0, 24)
pub fn parse_hours(text: &str) -> Result<Radian, EphemerisError> {
    match parse_sexagesimal(text) {
        Some(hours) if (0.0..24.0).contains(&hours) => Ok(hours * RADH),
        _ => Err(EphemerisError::InvalidAngle(text.to_string())),
    }
}

/// Parse a declination written `±DD MM SS.S` into radians.
///
/// Return
/// ------
/// * the angle in [−π/2, π/2], or [`EphemerisError::InvalidAngle`] when the string is malformed
///   or the value exceeds 90°
pub fn parse_degrees(text: &str) -> Result<Radian, EphemerisError> {
    match parse_sexagesimal(text) {
        Some(degrees) if degrees.abs() <= 90.0 => Ok(degrees * RADEG),
        _ => Err(EphemerisError::InvalidAngle(text.to_string())),
    }
}

fn split_sexagesimal(value: f64, decimals: usize) -> (u32, u32, f64) {
    let scale = 10f64.powi(decimals as i32);
    let total = (value * 3600.0 * scale).round() / scale;
    let units = (total / 3600.0).floor();
    let minutes = ((total - units * 3600.0) / 60.0).floor();
    let seconds = total - units * 3600.0 - minutes * 60.0;
    (units as u32, minutes as u32, seconds)
}

/// Format an angle as hours `HHh MMm SS.SSs`.
pub fn format_hours(angle: Radian) -> String {
    let (h, m, s) = split_sexagesimal(principal_angle(angle) / RADH, 2);
    format!("{h:02}h {m:02}m {s:05.2}s")
}

/// Format an angle as signed degrees `±DD° MM′ SS.S″`.
pub fn format_degrees(angle: Radian) -> String {
    let sign = if angle < 0.0 { '-' } else { '+' };
    let (d, m, s) = split_sexagesimal(angle.abs() / RADEG, 1);
    format!("{sign}{d:02}° {m:02}′ {s:04.1}″")
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_hours() {
        assert_relative_eq!(
            parse_hours("22 52 23.37").unwrap() / RADEG,
            343.097375,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            parse_hours("06:45:08.917").unwrap() / RADEG,
            101.28715416666667,
            epsilon = 1e-9
        );
        assert!(matches!(
            parse_hours("1 2 3.4.5"),
            Err(EphemerisError::InvalidAngle(_))
        ));
        assert!(parse_hours("1 2").is_err());
        assert!(parse_hours("24 00 00").is_err());
        assert!(parse_hours("12 61 00").is_err());
    }

    #[test]
    fn test_parse_degrees() {
        assert_relative_eq!(
            parse_degrees("-00 30 14.2").unwrap() / RADEG,
            -0.5039444444444444,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_degrees("+89 15 50.8").unwrap() / RADEG,
            89.26411111111111,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_degrees("-16 42 58.02").unwrap() / RADEG,
            -16.716116666666668,
            epsilon = 1e-12
        );
        assert!(parse_degrees("91 00 00").is_err());
        assert!(parse_degrees("89 15").is_err());
        assert!(parse_degrees("ab 15 00").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_hours(343.097375 * RADEG), "22h 52m 23.37s");
        assert_eq!(format_hours(-15.0 * RADEG), "23h 00m 00.00s");
        assert_eq!(format_degrees(-0.5039444444444444 * RADEG), "-00° 30′ 14.2″");
        assert_eq!(format_degrees(89.26411111111111 * RADEG), "+89° 15′ 50.8″");
    }
}
