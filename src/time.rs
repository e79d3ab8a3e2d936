//! # Time handling
//!
//! [`Instant`] is the single time type of the crate: a count of milliseconds since the Unix
//! epoch, mapped linearly onto the Julian Date. No ΔT is applied, the dynamical time used by
//! the orbital series is taken equal to UT.
//!
//! Calendar conversions (Gregorian dates, ISO strings, display) go through
//! [`hifitime::Epoch`].
//!
//! ## See also
//!
//! - [`gmst`] – mean sidereal time at Greenwich
//! - [`Instant::true_sidereal_time`] – apparent sidereal time, corrected for nutation
use hifitime::Epoch;
use std::{fmt, str::FromStr};

use crate::{
    constants::{
        Millis, Radian, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DPI, JDTOMJD, JD_DAY_ZERO,
        JD_J2000, JD_UNIX_EPOCH, MILLIS_J2000, MILLIS_PER_DAY, MJD, T2000,
    },
    earth_orientation::equequ,
    ephemeris_errors::EphemerisError,
};

/// A point in time, in milliseconds since 1970-01-01T00:00:00 UTC.
///
/// The mapping to the Julian Date is `JD = 2440587.5 + ms / 86 400 000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(Millis);

impl Instant {
    /// J2000.0, 2000-01-01T12:00:00
    pub const J2000: Instant = Instant(MILLIS_J2000);

    pub const fn from_millis(millis: Millis) -> Self {
        Instant(millis)
    }

    pub const fn millis(&self) -> Millis {
        self.0
    }

    /// Build an instant from a Julian Date, rounded to the millisecond.
    pub fn from_julian_day(jd: f64) -> Self {
        Instant(((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY as f64).round() as Millis)
    }

    /// Build an instant from a UTC Gregorian calendar date.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: calendar date
    /// * `hour`, `minute`, `second`: time of day in UTC
    ///
    /// Return
    /// ------
    /// * the instant, or [`EphemerisError::InvalidDate`] when the tuple is not a valid date
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, EphemerisError> {
        let epoch = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)?;
        Ok(Self::from(epoch))
    }

    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_unix_milliseconds(self.0 as f64)
    }

    /// Julian Date
    pub fn julian_day(&self) -> f64 {
        JD_UNIX_EPOCH + self.0 as f64 / MILLIS_PER_DAY as f64
    }

    /// Modified Julian Date
    pub fn mjd(&self) -> MJD {
        self.julian_day() - JDTOMJD
    }

    /// Days elapsed since J2000.0
    pub fn days_since_j2000(&self) -> f64 {
        (self.0 - MILLIS_J2000) as f64 / MILLIS_PER_DAY as f64
    }

    /// Julian centuries elapsed since J2000.0
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// Julian millennia elapsed since J2000.0, the time argument of the VSOP87 series
    pub fn millennia_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_MILLENNIUM
    }

    /// Day number counted from 1999-12-31 0h, the time argument of the Moon and Pluto series.
    pub fn day_number(&self) -> f64 {
        self.julian_day() - JD_DAY_ZERO
    }

    pub fn add_millis(&self, millis: Millis) -> Self {
        Instant(self.0 + millis)
    }

    pub fn add_days(&self, days: f64) -> Self {
        Instant(self.0 + (days * MILLIS_PER_DAY as f64).round() as Millis)
    }

    /// Signed number of milliseconds from `other` to `self`
    pub fn millis_since(&self, other: Instant) -> Millis {
        self.0 - other.0
    }

    /// Greenwich mean sidereal time, radians in [0, 2π)
    pub fn mean_sidereal_time(&self) -> Radian {
        gmst(self.mjd())
    }

    /// Greenwich apparent sidereal time, radians in [0, 2π)
    pub fn true_sidereal_time(&self) -> Radian {
        (gmst(self.mjd()) + equequ(self.mjd())).rem_euclid(DPI)
    }
}

impl From<Epoch> for Instant {
    fn from(epoch: Epoch) -> Self {
        Instant(epoch.to_unix_milliseconds().round() as Millis)
    }
}

impl FromStr for Instant {
    type Err = EphemerisError;

    /// Parse any date format understood by [`hifitime::Epoch`], e.g. `2018-05-01T03:56:00 UTC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Instant::from(Epoch::from_str(s)?))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date.
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / DAYS_PER_CENTURY;

    // GMST at 0h, seconds to radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / 86400.0;

    let h = (tjm - itjm) * DPI;
    (gmst0 + h * RAP).rem_euclid(DPI)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_j2000_mapping() {
        assert_eq!(Instant::J2000.julian_day(), JD_J2000);
        assert_eq!(Instant::J2000.mjd(), T2000);
        assert_eq!(Instant::J2000.days_since_j2000(), 0.0);
        assert_eq!(Instant::J2000.day_number(), 1.5);
        assert_eq!(Instant::from_julian_day(JD_J2000), Instant::J2000);
    }

    #[test]
    fn test_unix_epoch() {
        let t = Instant::from_millis(0);
        assert_eq!(t.julian_day(), JD_UNIX_EPOCH);
    }

    #[test]
    fn test_centuries_and_millennia() {
        let t = Instant::J2000.add_days(36525.0);
        assert_relative_eq!(t.centuries_since_j2000(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.millennia_since_j2000(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_from_gregorian() {
        let t = Instant::from_gregorian_utc(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(t, Instant::J2000);

        let t = Instant::from_gregorian_utc(2018, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(t.millis(), 1_525_132_800_000);

        assert!(Instant::from_gregorian_utc(2018, 13, 1, 0, 0, 0).is_err());
    }

    #[test]
    fn test_from_str() {
        let t: Instant = "2018-05-01T00:00:00 UTC".parse().unwrap();
        assert_eq!(t.millis(), 1_525_132_800_000);
        assert!("not a date".parse::<Instant>().is_err());
    }

    #[test]
    fn test_ordering_and_offsets() {
        let a = Instant::from_millis(1_000);
        let b = a.add_millis(500);
        assert!(b > a);
        assert_eq!(b.millis_since(a), 500);
        assert_eq!(a.millis_since(b), -500);
    }

    #[test]
    fn test_gmst() {
        let tut = 57028.478514610404;
        let res_gmst = gmst(tut);
        assert_relative_eq!(res_gmst, 4.851925725092499, epsilon = 1e-12);

        let res_gmst = gmst(T2000);
        assert_relative_eq!(res_gmst, 4.894961212789145, epsilon = 1e-12);
    }

    #[test]
    fn test_sidereal_time_advances_faster_than_solar() {
        let t0 = Instant::J2000;
        let t1 = t0.add_days(1.0);
        let delta = (t1.mean_sidereal_time() - t0.mean_sidereal_time()).rem_euclid(DPI);
        assert_relative_eq!(delta, DPI * (RAP_CHECK - 1.0), epsilon = 1e-6);
    }

    const RAP_CHECK: f64 = 1.00273790934;

    #[test]
    fn test_true_sidereal_time_close_to_mean() {
        let t = Instant::from_millis(1_525_132_800_000);
        let diff = t.true_sidereal_time() - t.mean_sidereal_time();
        assert!(diff.abs() < 1e-4);
    }
}
