//! # Solar system snapshot
//!
//! [`SolarSystem`] owns one [`OrbitalModel`] per registered [`Body`] and keeps, for the last
//! computed instant, the heliocentric and geocentric phase of every body in the mean ecliptic
//! of date, in meters and meters per second.
//!
//! ## Computation
//!
//! [`SolarSystem::compute`] evaluates the Earth first, then every body independently, fanned
//! out on the rayon thread pool (or sequentially, see [`EphemerisConfig::parallel`]):
//!
//! ```text
//! heliocentric model:  helio = model(t)           geo = aberr(helio − earth)
//! geocentric model:    helio = model(t) + earth   geo = aberr(model(t))
//! Sun:                 helio = 0                  geo = aberr(−earth)
//!
//! aberr(p, v) = (p − v·|p|/c, v)
//! ```
//!
//! Each body writes only its own slot, so the fan-out needs no synchronization beyond the
//! final join. Models memoize their last result: recomputing an unchanged instant leaves the
//! snapshot bit-identical.
//!
//! ## Queries
//!
//! * raw phases: [`SolarSystem::heliocentric`], [`SolarSystem::geocentric`],
//! * per-observer views: [`SolarSystem::ephemerides`] → [`Position`],
//! * derived quantities: distance ranking, retrograde flag, angular velocity, phase,
//!   illuminated fraction, elongation and the equation of time.
//!
//! Querying a body without a registered model returns [`EphemerisError::UnknownBody`].
use log::{debug, trace};
use nalgebra::Vector3;
use rayon::prelude::*;

use crate::{
    body::Body,
    config::EphemerisConfig,
    constants::{Meter, Radian, RADEG, SECONDS_PER_DAY, VLIGHT},
    coordinates::{centered_angle, correct_aberration, PhaseCartesian, Spherical},
    earth_orientation::{horner, Ecliptic},
    ephemeris_errors::EphemerisError,
    observers::{GeographicLocation, Topos},
    orbital_models::{ModelKind, OrbitalModel},
    position::{elongation, illuminated_fraction, is_retrograde, phase_angle, Position},
    time::Instant,
};

/// Mean longitude of the Sun (degrees), polynomial in Julian millennia (Meeus 28.2)
const SUN_MEAN_LONGITUDE: [f64; 6] = [
    280.4664567,
    360007.6982779,
    0.03032028,
    1.0 / 49931.0,
    -1.0 / 15300.0,
    -1.0 / 2000000.0,
];

/// Aberration and FK5 offset applied to the mean longitude in the equation of time (degrees)
const EQUATION_OF_TIME_OFFSET: f64 = 0.0057183;

#[derive(Debug)]
struct BodySlot {
    body: Body,
    model: Box<dyn OrbitalModel>,
    heliocentric: PhaseCartesian,
    geocentric: PhaseCartesian,
}

impl BodySlot {
    fn new(body: Body, model: Box<dyn OrbitalModel>) -> Self {
        BodySlot {
            body,
            model,
            heliocentric: PhaseCartesian::default(),
            geocentric: PhaseCartesian::default(),
        }
    }

    /// Model output in meters and meters per second
    fn evaluate(&mut self, instant: Instant) -> Result<PhaseCartesian, EphemerisError> {
        let unit = self.model.distance_unit().in_meters();
        Ok(self
            .model
            .compute_cartesian(instant, true)?
            .scale(unit, unit / SECONDS_PER_DAY))
    }

    fn update(
        &mut self,
        instant: Instant,
        earth: &PhaseCartesian,
        aberration: bool,
    ) -> Result<(), EphemerisError> {
        let phase = self.evaluate(instant)?;
        let geometric = match self.model.kind() {
            ModelKind::Heliocentric => {
                self.heliocentric = phase;
                phase - *earth
            }
            ModelKind::Geocentric => {
                self.heliocentric = phase + *earth;
                phase
            }
        };
        self.geocentric = apparent(&geometric, aberration);
        Ok(())
    }
}

fn apparent(geometric: &PhaseCartesian, aberration: bool) -> PhaseCartesian {
    if aberration {
        correct_aberration(geometric, VLIGHT)
    } else {
        *geometric
    }
}

#[derive(Debug)]
pub struct SolarSystem {
    slots: Vec<BodySlot>,
    index: [Option<usize>; Body::ALL.len()],
    earth: usize,
    sun_geocentric: PhaseCartesian,
    instant: Option<Instant>,
    ecliptic: Ecliptic,
    config: EphemerisConfig,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarSystem {
    /// All eleven bodies with their default models and the default configuration.
    pub fn new() -> Self {
        Self::with_config(EphemerisConfig::default())
    }

    pub fn with_config(config: EphemerisConfig) -> Self {
        let slots = Body::ALL
            .iter()
            .map(|body| BodySlot::new(*body, body.default_model()))
            .collect();
        Self::from_slots(slots, config)
    }

    /// All eleven bodies, the planets evaluated from the rectangular VSOP87C series instead of
    /// the spherical VSOP87D ones.
    pub fn with_rectangular_series(config: EphemerisConfig) -> Self {
        let slots = Body::ALL
            .iter()
            .map(|body| BodySlot::new(*body, body.rectangular_model()))
            .collect();
        Self::from_slots(slots, config)
    }

    /// Build from an explicit set of models.
    ///
    /// Return
    /// ------
    /// * [`EphemerisError::UnknownBody`] with [`Body::Earth`] when no Earth model is given: every
    ///   geocentric quantity depends on it.
    pub fn from_models(
        models: Vec<(Body, Box<dyn OrbitalModel>)>,
        config: EphemerisConfig,
    ) -> Result<Self, EphemerisError> {
        if !models.iter().any(|(body, _)| *body == Body::Earth) {
            return Err(EphemerisError::UnknownBody(Body::Earth));
        }
        let slots = models
            .into_iter()
            .map(|(body, model)| BodySlot::new(body, model))
            .collect();
        Ok(Self::from_slots(slots, config))
    }

    fn from_slots(mut slots: Vec<BodySlot>, config: EphemerisConfig) -> Self {
        slots.sort_by_key(|slot| slot.body);
        slots.dedup_by_key(|slot| slot.body);

        let mut index = [None; Body::ALL.len()];
        for (i, slot) in slots.iter().enumerate() {
            index[slot.body.index()] = Some(i);
        }
        let earth = index[Body::Earth.index()].unwrap_or_default();

        SolarSystem {
            slots,
            index,
            earth,
            sun_geocentric: PhaseCartesian::default(),
            instant: None,
            ecliptic: Ecliptic::new(Instant::J2000),
            config,
        }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Instant of the current snapshot, `None` before the first computation
    pub fn instant(&self) -> Option<Instant> {
        self.instant
    }

    pub fn ecliptic(&self) -> &Ecliptic {
        &self.ecliptic
    }

    /// Bodies with a registered model, in [`Body::ALL`] order
    pub fn bodies(&self) -> Vec<Body> {
        self.slots.iter().map(|slot| slot.body).collect()
    }

    fn prepare(&mut self, instant: Instant) -> Result<PhaseCartesian, EphemerisError> {
        let aberration = self.config.aberration;
        let earth_slot = &mut self.slots[self.earth];
        let earth = earth_slot.evaluate(instant)?;

        self.sun_geocentric = apparent(&-earth, aberration);
        if self.instant != Some(instant) {
            self.ecliptic = Ecliptic::new(instant);
        }
        self.instant = Some(instant);
        Ok(earth)
    }

    /// Recompute every body at `instant`.
    ///
    /// Return
    /// ------
    /// * the first model error met; the snapshot is then only partially updated
    pub fn compute(&mut self, instant: Instant) -> Result<(), EphemerisError> {
        let earth = self.prepare(instant)?;
        let aberration = self.config.aberration;

        if self.config.parallel {
            self.slots
                .par_iter_mut()
                .try_for_each(|slot| slot.update(instant, &earth, aberration))?;
        } else {
            self.slots
                .iter_mut()
                .try_for_each(|slot| slot.update(instant, &earth, aberration))?;
        }

        debug!(
            "solar system computed at {} ({} bodies)",
            instant,
            self.slots.len()
        );
        for slot in &self.slots {
            trace!(
                "{}: geocentric distance {:.6e} m",
                slot.body,
                slot.geocentric.position.norm()
            );
        }
        Ok(())
    }

    /// Recompute the Earth, the Sun and one body at `instant`.
    pub fn compute_single(&mut self, instant: Instant, body: Body) -> Result<(), EphemerisError> {
        let slot = self.slot_index(body)?;
        let earth = self.prepare(instant)?;
        let aberration = self.config.aberration;

        let mut targets = vec![self.earth, slot];
        if let Some(sun) = self.index[Body::Sun.index()] {
            targets.push(sun);
        }
        targets.dedup();
        for i in targets {
            self.slots[i].update(instant, &earth, aberration)?;
        }
        trace!("{} computed at {}", body, instant);
        Ok(())
    }

    fn slot_index(&self, body: Body) -> Result<usize, EphemerisError> {
        self.index[body.index()].ok_or(EphemerisError::UnknownBody(body))
    }

    fn slot(&self, body: Body) -> Result<&BodySlot, EphemerisError> {
        Ok(&self.slots[self.slot_index(body)?])
    }

    /// Heliocentric phase, mean ecliptic of date (m, m/s)
    pub fn heliocentric(&self, body: Body) -> Result<PhaseCartesian, EphemerisError> {
        Ok(self.slot(body)?.heliocentric)
    }

    /// Apparent geocentric phase, mean ecliptic of date (m, m/s)
    pub fn geocentric(&self, body: Body) -> Result<PhaseCartesian, EphemerisError> {
        Ok(self.slot(body)?.geocentric)
    }

    /// Apparent geocentric position of the Sun, always available once computed
    pub fn sun_geocentric(&self) -> Vector3<f64> {
        self.sun_geocentric.position
    }

    pub fn geocentric_distance(&self, body: Body) -> Result<Meter, EphemerisError> {
        Ok(self.slot(body)?.geocentric.position.norm())
    }

    /// Registered bodies other than the Earth, nearest first.
    pub fn bodies_by_distance(&self) -> Vec<Body> {
        let mut bodies: Vec<(Body, Meter)> = self
            .slots
            .iter()
            .filter(|slot| slot.body != Body::Earth)
            .map(|slot| (slot.body, slot.geocentric.position.norm()))
            .collect();
        bodies.sort_by(|a, b| a.1.total_cmp(&b.1));
        bodies.into_iter().map(|(body, _)| body).collect()
    }

    /// Per-observer view of one body at the snapshot instant.
    pub fn ephemerides(
        &self,
        body: Body,
        location: GeographicLocation,
    ) -> Result<Position, EphemerisError> {
        let slot = self.slot(body)?;
        Ok(Position::new(
            body,
            slot.heliocentric,
            slot.geocentric,
            self.sun_geocentric.position,
            Topos::with_ecliptic(location, self.ecliptic),
        ))
    }

    pub fn is_retrograde(&self, body: Body) -> Result<bool, EphemerisError> {
        Ok(is_retrograde(&self.slot(body)?.geocentric))
    }

    /// Rate of change of the geocentric ecliptic longitude (radians per second)
    pub fn angular_velocity(&self, body: Body) -> Result<f64, EphemerisError> {
        let geocentric = self.slot(body)?.geocentric;
        let p = geocentric.position;
        let v = geocentric.velocity;
        Ok((p.x * v.y - p.y * v.x) / (p.x * p.x + p.y * p.y))
    }

    pub fn illuminated_fraction(&self, body: Body) -> Result<f64, EphemerisError> {
        let slot = self.slot(body)?;
        Ok(illuminated_fraction(
            &slot.heliocentric.position,
            &slot.geocentric.position,
        ))
    }

    pub fn phase_angle(&self, body: Body) -> Result<Radian, EphemerisError> {
        let slot = self.slot(body)?;
        Ok(phase_angle(
            &slot.heliocentric.position,
            &slot.geocentric.position,
        ))
    }

    /// Geocentric elongation from the Sun, positive east of the Sun
    pub fn elongation(&self, body: Body) -> Result<Radian, EphemerisError> {
        Ok(elongation(
            &self.slot(body)?.geocentric.position,
            &self.sun_geocentric.position,
        ))
    }

    /// Apparent minus mean solar time at the snapshot instant (radians of hour angle).
    ///
    /// ```text
    /// E = L₀ − 0.0057183° − α + Δψ·cos ε
    /// ```
    ///
    /// with L₀ the Sun's mean longitude, α the apparent right ascension of the Sun and ε the
    /// true obliquity. Multiply by 720/π to get minutes of time.
    pub fn equation_of_time(&self) -> Radian {
        let ecliptic = &self.ecliptic;
        let tau = ecliptic.instant().millennia_since_j2000();
        let mean_longitude = horner(&SUN_MEAN_LONGITUDE, tau) * RADEG;

        let equatorial = ecliptic.mean_ecl_to_true_equ() * self.sun_geocentric.position;
        let right_ascension = Spherical::from_cartesian(&equatorial).longitude;

        centered_angle(
            mean_longitude - EQUATION_OF_TIME_OFFSET * RADEG - right_ascension
                + ecliptic.nutation_in_right_ascension(),
        )
    }
}

#[cfg(test)]
mod solar_system_test {
    use super::*;
    use crate::{
        constants::AU,
        orbital_models::{sun::Sun, vsop87::{Vsop87, EARTH}},
    };
    use approx::assert_relative_eq;

    fn may_first() -> Instant {
        Instant::from_gregorian_utc(2018, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        let first: Vec<_> = Body::ALL
            .iter()
            .map(|b| solar_system.geocentric(*b).unwrap())
            .collect();
        solar_system.compute(may_first()).unwrap();
        let second: Vec<_> = Body::ALL
            .iter()
            .map(|b| solar_system.geocentric(*b).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let mut parallel = SolarSystem::new();
        let mut sequential =
            SolarSystem::with_config(EphemerisConfig::builder().parallel(false).build().unwrap());
        parallel.compute(may_first()).unwrap();
        sequential.compute(may_first()).unwrap();
        for body in Body::ALL {
            assert_eq!(
                parallel.heliocentric(body).unwrap(),
                sequential.heliocentric(body).unwrap()
            );
        }
    }

    #[test]
    fn test_center_rules() {
        let mut solar_system =
            SolarSystem::with_config(EphemerisConfig::builder().aberration(false).build().unwrap());
        solar_system.compute(may_first()).unwrap();
        let earth = solar_system.heliocentric(Body::Earth).unwrap();

        assert_eq!(solar_system.geocentric(Body::Earth).unwrap().position, Vector3::zeros());
        assert_eq!(solar_system.heliocentric(Body::Sun).unwrap().position, Vector3::zeros());
        assert_eq!(solar_system.geocentric(Body::Sun).unwrap().position, -earth.position);

        let mars = solar_system.heliocentric(Body::Mars).unwrap();
        assert_relative_eq!(
            solar_system.geocentric(Body::Mars).unwrap().position,
            mars.position - earth.position,
            epsilon = 1e-3
        );

        let moon = solar_system.geocentric(Body::Moon).unwrap();
        assert_relative_eq!(
            solar_system.heliocentric(Body::Moon).unwrap().position,
            moon.position + earth.position,
            epsilon = 1e-3
        );
        assert!(moon.position.norm() > 3.5e8 && moon.position.norm() < 4.1e8);
    }

    #[test]
    fn test_units() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        let earth = solar_system.heliocentric(Body::Earth).unwrap();
        assert_relative_eq!(earth.position.norm() / AU, 1.0, epsilon = 0.02);
        // orbital speed ≈ 29.8 km/s
        assert_relative_eq!(earth.velocity.norm(), 29_800.0, epsilon = 600.0);
    }

    #[test]
    fn test_aberration_shifts_sun_by_twenty_arcseconds() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        let apparent = solar_system.sun_geocentric();
        let geometric = -solar_system.heliocentric(Body::Earth).unwrap().position;
        let angle = apparent.angle(&geometric) / RADEG * 3600.0;
        assert_relative_eq!(angle, 20.5, epsilon = 0.5);
    }

    #[test]
    fn test_unknown_body() {
        let models: Vec<(Body, Box<dyn OrbitalModel>)> = vec![
            (Body::Earth, Box::new(Vsop87::new(&EARTH))),
            (Body::Sun, Box::new(Sun)),
        ];
        let mut solar_system =
            SolarSystem::from_models(models, EphemerisConfig::default()).unwrap();
        solar_system.compute(may_first()).unwrap();
        assert_eq!(
            solar_system.geocentric(Body::Mars),
            Err(EphemerisError::UnknownBody(Body::Mars))
        );
        assert_eq!(
            solar_system.compute_single(may_first(), Body::Venus),
            Err(EphemerisError::UnknownBody(Body::Venus))
        );
        assert!(solar_system.geocentric(Body::Sun).is_ok());

        let without_earth: Vec<(Body, Box<dyn OrbitalModel>)> = vec![(Body::Sun, Box::new(Sun))];
        assert!(matches!(
            SolarSystem::from_models(without_earth, EphemerisConfig::default()),
            Err(EphemerisError::UnknownBody(Body::Earth))
        ));
    }

    #[test]
    fn test_compute_single_matches_compute() {
        let mut full = SolarSystem::new();
        let mut single = SolarSystem::new();
        full.compute(may_first()).unwrap();
        single.compute_single(may_first(), Body::Jupiter).unwrap();
        assert_eq!(full.geocentric(Body::Jupiter), single.geocentric(Body::Jupiter));
        assert_eq!(full.sun_geocentric(), single.sun_geocentric());
    }

    #[test]
    fn test_bodies_by_distance() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        let ranking = solar_system.bodies_by_distance();
        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0], Body::Moon);
        assert_eq!(*ranking.last().unwrap(), Body::Pluto);
        assert!(!ranking.contains(&Body::Earth));
    }

    #[test]
    fn test_retrograde_matches_angular_velocity() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        for body in Body::ALL.iter().filter(|b| **b != Body::Earth) {
            let retrograde = solar_system.is_retrograde(*body).unwrap();
            let rate = solar_system.angular_velocity(*body).unwrap();
            assert_eq!(retrograde, rate < 0.0, "{body}");
        }
        // the Sun never moves backwards
        assert!(!solar_system.is_retrograde(Body::Sun).unwrap());
    }

    #[test]
    fn test_illuminated_fraction_bounds() {
        let mut solar_system = SolarSystem::new();
        solar_system.compute(may_first()).unwrap();
        for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Moon, Body::Jupiter] {
            let k = solar_system.illuminated_fraction(body).unwrap();
            assert!((0.0..=1.0).contains(&k));
            let phase = solar_system.phase_angle(body).unwrap();
            assert_relative_eq!(k, (1.0 + phase.cos()) / 2.0, epsilon = 1e-12);
        }
        // outer planets always appear nearly full
        assert!(solar_system.illuminated_fraction(Body::Saturn).unwrap() > 0.99);
    }

    #[test]
    fn test_rectangular_series_match_spherical_series() {
        let config = EphemerisConfig::builder().parallel(false).build().unwrap();
        let mut spherical = SolarSystem::with_config(config.clone());
        let mut rectangular = SolarSystem::with_rectangular_series(config);
        spherical.compute(may_first()).unwrap();
        rectangular.compute(may_first()).unwrap();
        for body in Body::ALL {
            // C and D series agree to a few 1e-7 AU
            assert_relative_eq!(
                rectangular.geocentric(body).unwrap().position,
                spherical.geocentric(body).unwrap().position,
                epsilon = 1e-6 * AU
            );
        }
    }

    #[test]
    fn test_model_error_is_propagated() {
        #[derive(Debug)]
        struct Failing;

        impl OrbitalModel for Failing {
            fn kind(&self) -> ModelKind {
                ModelKind::Heliocentric
            }

            fn distance_unit(&self) -> crate::orbital_models::DistanceUnit {
                crate::orbital_models::DistanceUnit::AstronomicalUnit
            }

            fn compute_spherical(
                &mut self,
                _instant: Instant,
                _with_velocity: bool,
            ) -> Result<crate::coordinates::PhaseSpherical, EphemerisError> {
                Err(roots::SearchError::NoConvergency.into())
            }

            fn compute_cartesian(
                &mut self,
                _instant: Instant,
                _with_velocity: bool,
            ) -> Result<PhaseCartesian, EphemerisError> {
                Err(roots::SearchError::NoConvergency.into())
            }
        }

        let models: Vec<(Body, Box<dyn OrbitalModel>)> = vec![
            (Body::Earth, Box::new(Vsop87::new(&EARTH))),
            (Body::Mars, Box::new(Failing)),
        ];
        let mut solar_system =
            SolarSystem::from_models(models, EphemerisConfig::default()).unwrap();
        assert_eq!(
            solar_system.compute(may_first()),
            Err(EphemerisError::RootFindingError(roots::SearchError::NoConvergency))
        );
        assert_eq!(
            solar_system.compute_single(may_first(), Body::Mars),
            Err(EphemerisError::RootFindingError(roots::SearchError::NoConvergency))
        );
    }

    #[test]
    fn test_equation_of_time_meeus_example_28b() {
        // 1992 October 13.0: E = 13m 42.6s
        let mut solar_system = SolarSystem::new();
        solar_system.compute(Instant::from_julian_day(2448908.5)).unwrap();
        let minutes = solar_system.equation_of_time() * 720.0 / std::f64::consts::PI;
        assert_relative_eq!(minutes, 13.0 + 42.6 / 60.0, epsilon = 0.01);
    }
}
