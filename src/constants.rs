//! # Constants and type definitions
//!
//! Physical constants, unit conversion factors and the angle/distance aliases shared by every
//! module of the crate.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, speed of light, sidereal rate)
//! - Unit conversions (degrees ↔ radians, days ↔ milliseconds)
//! - Reference epochs (J2000 in JD, MJD and Unix milliseconds)
//! - Type aliases documenting units in signatures

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of milliseconds in a Julian day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Astronomical Unit in meters (IAU 2012)
pub const AU: Meter = 149_597_870_700.0;

/// Speed of light in m/s
pub const VLIGHT: f64 = 299_792_458.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: MJD = 51544.5;

/// Unix milliseconds of J2000.0
pub const MILLIS_J2000: i64 = 946_728_000_000;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Julian Date of 1999-12-31 0h, origin of the day number used by the Moon and Pluto series
pub const JD_DAY_ZERO: f64 = 2_451_543.5;

/// Ratio of the mean solar day to the sidereal day
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// Length of a sidereal day in milliseconds
pub const MILLIS_PER_SIDEREAL_DAY: f64 = MILLIS_PER_DAY as f64 / SIDEREAL_RATE;

/// Sidereal milliseconds needed for the sky to turn by one radian
pub const SIDEREAL_MILLIS_PER_RADIAN: f64 = MILLIS_PER_SIDEREAL_DAY / DPI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Apparent radius of the solar disk plus refraction at the horizon, in degrees (−34′)
pub const OPTICAL_HORIZON: Degree = -34.0 / 60.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Milliseconds since the Unix epoch
pub type Millis = i64;
