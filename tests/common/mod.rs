#![allow(dead_code)]

use ephemeris::{observers::GeographicLocation, time::Instant};

pub const MILLIS_PER_MINUTE: i64 = 60_000;

pub fn munich() -> GeographicLocation {
    GeographicLocation::from_degrees(11.58198, 48.13513)
}

pub fn svolvaer() -> GeographicLocation {
    GeographicLocation::from_degrees(14.561583, 68.234764)
}

pub fn sydney() -> GeographicLocation {
    GeographicLocation::from_degrees(151.2, -33.85)
}

pub fn vancouver() -> GeographicLocation {
    GeographicLocation::from_degrees(-123.12244, 49.28098)
}

/// Wall-clock time at a fixed UTC offset, e.g. `local(2018, 5, 1, 5, 56, 2)` for 05:56 CEST.
pub fn local(year: i32, month: u8, day: u8, hour: u8, minute: u8, offset_hours: i64) -> Instant {
    Instant::from_gregorian_utc(year, month, day, hour, minute, 0)
        .unwrap()
        .add_millis(-offset_hours * 3_600_000)
}

pub fn assert_instant_close(actual: Instant, expected: Instant, tolerance_ms: i64) {
    let difference = actual.millis_since(expected);
    assert!(
        difference.abs() <= tolerance_ms,
        "expected {expected}, got {actual} ({} s off)",
        difference as f64 / 1000.0
    );
}
