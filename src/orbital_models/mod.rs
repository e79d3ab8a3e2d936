//! # Orbital models
//!
//! An orbital model maps an [`Instant`] to the position and velocity of one body:
//!
//! | Model | Center | Unit | Method |
//! |---|---|---|---|
//! | [`vsop87::Vsop87`] | Sun | AU | VSOP87 Poisson series (D, C or A tables) |
//! | [`vsop87::Vsop87Elliptic`] | Sun | AU | VSOP87 elliptic elements + equinoctial Kepler |
//! | [`moon::Moon`] | Earth | m | mean elements + perturbation terms |
//! | [`pluto::Pluto`] | Sun | AU | closed-form periodic series |
//! | [`sun::Sun`] | Sun | AU | identically zero |
//!
//! Positions are referred to the mean ecliptic and equinox of date. Velocities are expressed
//! in distance unit per day; the [`SolarSystem`](crate::solar_system::SolarSystem) rescales
//! everything to meters and meters per second.
//!
//! Models own a [`ModelCache`]: asking twice for the same instant and velocity flag returns the
//! stored value without recomputation. Evaluation is fallible for the models solving Kepler's
//! equation; a failed evaluation leaves the cache untouched.
pub mod moon;
pub mod pluto;
pub mod sun;
pub mod vsop87;

use crate::{
    constants::{Meter, AU},
    coordinates::{PhaseCartesian, PhaseSpherical},
    ephemeris_errors::EphemerisError,
    time::Instant,
};

/// Center of the coordinates produced by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Heliocentric,
    Geocentric,
}

/// Distance unit of the coordinates produced by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    AstronomicalUnit,
    Meter,
}

impl DistanceUnit {
    pub fn in_meters(&self) -> Meter {
        match self {
            DistanceUnit::AstronomicalUnit => AU,
            DistanceUnit::Meter => 1.0,
        }
    }
}

/// Time → phase evaluator for one body.
///
/// Velocities are in [`OrbitalModel::distance_unit`] per day. When `with_velocity` is `false` a
/// model may leave the velocity at zero.
pub trait OrbitalModel: Send + std::fmt::Debug {
    fn kind(&self) -> ModelKind;

    fn distance_unit(&self) -> DistanceUnit;

    fn compute_spherical(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseSpherical, EphemerisError>;

    fn compute_cartesian(
        &mut self,
        instant: Instant,
        with_velocity: bool,
    ) -> Result<PhaseCartesian, EphemerisError>;
}

/// Last computed value of a model, keyed by instant and velocity flag.
#[derive(Debug, Clone, Default)]
pub struct ModelCache<T> {
    entry: Option<(Instant, bool, T)>,
}

impl<T> ModelCache<T> {
    /// Return the cached value for `(instant, with_velocity)`, computing and storing it first
    /// when the key differs from the last one.
    pub fn get_or_compute<F>(&mut self, instant: Instant, with_velocity: bool, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        let hit = matches!(&self.entry, Some((i, v, _)) if *i == instant && *v == with_velocity);
        if !hit {
            self.entry = None;
        }
        let (_, _, value) = self
            .entry
            .get_or_insert_with(|| (instant, with_velocity, compute()));
        value
    }

    /// Fallible form of [`ModelCache::get_or_compute`]: an error is returned as is and nothing
    /// is stored.
    pub fn try_get_or_compute<F, E>(
        &mut self,
        instant: Instant,
        with_velocity: bool,
        compute: F,
    ) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let entry = match self.entry.take() {
            Some(entry) if entry.0 == instant && entry.1 == with_velocity => entry,
            previous => match compute() {
                Ok(value) => (instant, with_velocity, value),
                Err(err) => {
                    self.entry = previous;
                    return Err(err);
                }
            },
        };
        let (_, _, value) = self.entry.insert(entry);
        Ok(value)
    }
}

#[cfg(test)]
mod orbital_models_test {
    use super::*;

    #[test]
    fn test_cache_recomputes_only_on_key_change() {
        let mut cache = ModelCache::default();
        let mut calls = 0;

        let t = Instant::J2000;
        assert_eq!(*cache.get_or_compute(t, true, || { calls += 1; 1 }), 1);
        assert_eq!(*cache.get_or_compute(t, true, || { calls += 1; 2 }), 1);
        assert_eq!(calls, 1);

        assert_eq!(*cache.get_or_compute(t, false, || { calls += 1; 3 }), 3);
        assert_eq!(*cache.get_or_compute(t.add_millis(1), false, || { calls += 1; 4 }), 4);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_failed_computation_keeps_previous_entry() {
        let mut cache = ModelCache::default();
        let t = Instant::J2000;
        assert_eq!(cache.try_get_or_compute(t, true, || Ok::<_, ()>(1)), Ok(&1));

        let later = t.add_millis(1);
        assert_eq!(cache.try_get_or_compute(later, true, || Err::<i32, _>(())), Err(()));
        assert_eq!(cache.try_get_or_compute(t, true, || Ok::<_, ()>(9)), Ok(&1));
        // the failed key is not cached, the next call recomputes
        assert_eq!(cache.try_get_or_compute(later, true, || Ok::<_, ()>(2)), Ok(&2));
        assert_eq!(cache.try_get_or_compute(later, true, || Ok::<_, ()>(3)), Ok(&2));
    }

    #[test]
    fn test_distance_units() {
        assert_eq!(DistanceUnit::Meter.in_meters(), 1.0);
        assert_eq!(DistanceUnit::AstronomicalUnit.in_meters(), AU);
    }
}
