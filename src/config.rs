//! # Configuration
//!
//! [`EphemerisConfig`] gathers the knobs of the [`SolarSystem`](crate::solar_system::SolarSystem)
//! and of the rise/set search. Defaults are suitable for everyday use; the
//! [`EphemerisConfigBuilder`] validates custom values.
//!
//! Defaults
//! -----------------
//! * `parallel`: true (bodies evaluated on the rayon pool)
//! * `aberration`: true (first-order light-time correction)
//! * `rise_set.precision_ms`: 10 000 ms
//! * `rise_set.max_iterations`: 12
//! * `rise_set.max_day_steps`: 400
//! * `rise_set.optical_horizon_deg`: −34′
use crate::{
    constants::{Degree, Millis, OPTICAL_HORIZON},
    ephemeris_errors::EphemerisError,
};

/// Parameters of the rise/set/transit search.
#[derive(Debug, Clone, PartialEq)]
pub struct RiseSetConfig {
    /// Stop when two successive guesses are closer than this (milliseconds).
    pub precision_ms: Millis,
    /// Fixed-point iterations before falling back to day stepping.
    pub max_iterations: usize,
    /// Upper bound on the number of whole days scanned by the fallback.
    pub max_day_steps: usize,
    /// Altitude of the horizon for a point-like target (degrees, refraction included).
    pub optical_horizon_deg: Degree,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        RiseSetConfig {
            precision_ms: 10_000,
            max_iterations: 12,
            max_day_steps: 400,
            optical_horizon_deg: OPTICAL_HORIZON,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisConfig {
    pub parallel: bool,
    pub aberration: bool,
    pub rise_set: RiseSetConfig,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        EphemerisConfig {
            parallel: true,
            aberration: true,
            rise_set: RiseSetConfig::default(),
        }
    }
}

impl EphemerisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent builder starting from the defaults.
    ///
    /// ```rust
    /// use ephemeris::config::EphemerisConfig;
    ///
    /// let config = EphemerisConfig::builder()
    ///     .parallel(false)
    ///     .precision_ms(1_000)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.rise_set.precision_ms, 1_000);
    /// ```
    pub fn builder() -> EphemerisConfigBuilder {
        EphemerisConfigBuilder::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EphemerisConfigBuilder {
    config: EphemerisConfig,
}

impl EphemerisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, v: bool) -> Self {
        self.config.parallel = v;
        self
    }
    pub fn aberration(mut self, v: bool) -> Self {
        self.config.aberration = v;
        self
    }
    pub fn precision_ms(mut self, v: Millis) -> Self {
        self.config.rise_set.precision_ms = v;
        self
    }
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.config.rise_set.max_iterations = v;
        self
    }
    pub fn max_day_steps(mut self, v: usize) -> Self {
        self.config.rise_set.max_day_steps = v;
        self
    }
    pub fn optical_horizon_deg(mut self, v: Degree) -> Self {
        self.config.rise_set.optical_horizon_deg = v;
        self
    }

    /// Validate and return the configuration.
    ///
    /// Validation rules
    /// -----------------
    /// * `precision_ms > 0`
    /// * `max_iterations ≥ 1`
    /// * `optical_horizon_deg` finite and within (−90°, 90°)
    pub fn build(self) -> Result<EphemerisConfig, EphemerisError> {
        let r = &self.config.rise_set;
        if r.precision_ms <= 0 {
            return Err(EphemerisError::InvalidConfig(
                "precision_ms must be > 0".into(),
            ));
        }
        if r.max_iterations == 0 {
            return Err(EphemerisError::InvalidConfig(
                "max_iterations must be >= 1".into(),
            ));
        }
        if !(r.optical_horizon_deg.is_finite() && r.optical_horizon_deg.abs() < 90.0) {
            return Err(EphemerisError::InvalidConfig(
                "optical_horizon_deg must lie in (-90, 90)".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EphemerisConfig::default();
        assert!(config.parallel);
        assert!(config.aberration);
        assert_eq!(config.rise_set.precision_ms, 10_000);
        assert_eq!(config.rise_set.max_iterations, 12);
        assert_eq!(config.rise_set.optical_horizon_deg, -34.0 / 60.0);
        assert_eq!(EphemerisConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(matches!(
            EphemerisConfig::builder().precision_ms(0).build(),
            Err(EphemerisError::InvalidConfig(_))
        ));
        assert!(matches!(
            EphemerisConfig::builder().max_iterations(0).build(),
            Err(EphemerisError::InvalidConfig(_))
        ));
        assert!(matches!(
            EphemerisConfig::builder().optical_horizon_deg(f64::NAN).build(),
            Err(EphemerisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = EphemerisConfig::builder()
            .aberration(false)
            .max_day_steps(10)
            .build()
            .unwrap();
        assert!(!config.aberration);
        assert_eq!(config.rise_set.max_day_steps, 10);
    }
}
