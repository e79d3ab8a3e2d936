//! # Rise, set and transit search
//!
//! [`RiseSetCalculator`] finds the next (or previous) instant at which a target crosses the
//! observer's horizon or meridian.
//!
//! ## Method
//!
//! The search is a fixed-point iteration on the hour angle `H = LST − α`:
//!
//! 1. observe the target at the current guess (right ascension, declination, distance),
//! 2. compute the hour angle `H₀` at which a circle of that declination meets the horizon,
//! 3. move the guess by `(±H₀ − H)` converted to sidereal milliseconds
//!    (`−H₀` for a rise, `0` for a transit, `+H₀` for a set),
//! 4. keep the guess on the requested side of the start, one sidereal day at a time,
//! 5. stop when two successive guesses differ by less than
//!    [`RiseSetConfig::precision_ms`].
//!
//! `H₀` is obtained in the stereographic projection of the celestial sphere from the pole of the
//! observer's hemisphere: the horizon and the diurnal circle of the target both project to
//! circles, and their intersection gives the hour angle directly (see
//! [`hour_angle_at_horizon`]). Where the projected horizon degenerates into a line (latitude
//! equal to the horizon altitude) the cosine rule of the spherical triangle takes over.
//!
//! The horizon is virtual: the optical horizon (refraction included) lowered by the apparent
//! radius of the target, so rise and set refer to the upper limb.
//!
//! ## States
//!
//! ```text
//!   Searching ──converged──▶ Converged(t)
//!       │
//!       ├── no crossing, fixed target ──────▶ Failed(Circumpolar)
//!       ├── no crossing, moving target ──┬─▶ day stepping ──▶ Searching
//!       └── iteration budget exhausted ──┘        └── exhausted ──▶ Failed(Circumpolar)
//!                                                                   or Failed(NotConverged)
//! ```
//!
//! Day stepping scans whole sidereal days in the search direction until the event is
//! feasible again, bisects an (infeasible, feasible) step down to
//! [`RiseSetConfig::precision_ms`] and restarts the iteration from there. This finds, for
//! example, the first sunrise after the polar night. One budget of
//! [`RiseSetConfig::max_day_steps`] is shared by all scans of a search; when it runs out the
//! failure names the reason of the last scan.
mod target;

pub use target::{BodyTarget, RiseSetTarget, TargetObservation};

use log::{debug, trace, warn};
use std::{f64::consts::FRAC_PI_2, fmt};

use crate::{
    body::Body,
    config::RiseSetConfig,
    constants::{
        Millis, Radian, MILLIS_PER_SIDEREAL_DAY, RADEG, SIDEREAL_MILLIS_PER_RADIAN,
    },
    coordinates::{centered_angle, stereographic_projection},
    ephemeris_errors::EphemerisError,
    observers::GeographicLocation,
    solar_system::SolarSystem,
    time::Instant,
};

/// Projected horizon centers beyond this distance lose the hour angle to cancellation
const MAX_PROJECTED_CENTER: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Rise,
    Transit,
    Set,
}

impl EventType {
    /// Side of the meridian where the event happens: east (−1), on it (0), west (+1)
    pub fn signum(&self) -> f64 {
        match self {
            EventType::Rise => -1.0,
            EventType::Transit => 0.0,
            EventType::Set => 1.0,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Rise => "rise",
            EventType::Transit => "transit",
            EventType::Set => "set",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn sign(&self) -> Millis {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The target stays above or below the horizon
    Circumpolar,
    /// The iteration kept moving by more than the requested precision
    NotConverged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Converged(Instant),
    Failed(FailureKind),
}

/// Hour angle at which a diurnal circle of declination `declination` crosses the horizon of
/// altitude `horizon` seen from `location`.
///
/// Both circles are projected stereographically from the pole of the observer's hemisphere.
/// The horizon, a small circle of radius `90° − h` around the zenith, projects to a circle
/// centered on the meridian at signed distance `d` with radius `r_h`; the diurnal circle
/// projects to a circle of radius `r_o` around the origin. The intersection satisfies
///
/// ```text
/// cos H₀ = (r_o² + d² − r_h²) / (2 · r_o · d)
/// ```
///
/// When the horizon passes through the projection pole (latitude equal to the horizon
/// altitude, e.g. an equator observer with a zero horizon) its image is a line, and close to
/// that its center runs off to infinity. There `H₀` comes from the cosine rule
///
/// ```text
/// cos H₀ = (sin h − sin φ sin δ) / (cos φ cos δ)
/// ```
///
/// Return
/// ------
/// * `H₀` in [0, π], or `None` when the circles do not intersect.
pub fn hour_angle_at_horizon(
    location: &GeographicLocation,
    declination: Radian,
    horizon: Radian,
) -> Option<Radian> {
    let latitude = location.latitude;
    let pole = location.hemisphere();
    let zenith_distance = FRAC_PI_2 - horizon;

    let far = stereographic_projection(latitude + zenith_distance, pole);
    let near = stereographic_projection(latitude - zenith_distance, pole);
    let center = (far + near) / 2.0;
    if !far.is_finite() || !near.is_finite() || center.abs() > MAX_PROJECTED_CENTER {
        return cosine_rule_hour_angle(latitude, declination, horizon);
    }
    let radius = (far - near).abs() / 2.0;
    let orbit = stereographic_projection(declination, pole);

    let cos_hour_angle =
        (orbit * orbit + center * center - radius * radius) / (2.0 * orbit * center);
    acos_within_range(cos_hour_angle)
}

fn cosine_rule_hour_angle(
    latitude: Radian,
    declination: Radian,
    horizon: Radian,
) -> Option<Radian> {
    let cos_hour_angle = (horizon.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());
    acos_within_range(cos_hour_angle)
}

fn acos_within_range(cos_hour_angle: f64) -> Option<Radian> {
    if cos_hour_angle.is_finite() && cos_hour_angle.abs() <= 1.0 {
        Some(cos_hour_angle.acos())
    } else {
        None
    }
}

/// Whether a target at `declination` meets the horizon (for a transit, the meridian) at all.
pub fn is_crossing(
    event: EventType,
    latitude: Radian,
    declination: Radian,
    horizon: Radian,
) -> bool {
    let always_above = (latitude + declination).abs() >= FRAC_PI_2 + horizon;
    let always_below = (latitude - declination).abs() >= FRAC_PI_2 - horizon;
    event == EventType::Transit || !(always_above || always_below)
}

enum Step {
    Moved(Instant),
    Infeasible,
}

enum Iteration {
    Converged(Instant),
    NotConverged(Instant),
    Infeasible(Instant),
}

/// Iterative rise/set/transit solver for one target and one observer.
///
/// ```rust,no_run
/// use ephemeris::{
///     body::Body,
///     observers::GeographicLocation,
///     rise_set::{Direction, EventType, RiseSetCalculator},
///     solar_system::SolarSystem,
///     time::Instant,
/// };
///
/// let mut solar_system = SolarSystem::new();
/// let munich = GeographicLocation::from_degrees(11.58198, 48.13513);
/// let start = Instant::from_gregorian_utc(2018, 5, 1, 0, 0, 0).unwrap();
///
/// let mut sun = RiseSetCalculator::for_body(&mut solar_system, Body::Sun, munich);
/// let sunrise = sun.solve(EventType::Rise, Direction::Forward, start).unwrap();
/// println!("sunrise: {sunrise}");
/// ```
#[derive(Debug)]
pub struct RiseSetCalculator<T: RiseSetTarget> {
    target: T,
    location: GeographicLocation,
    config: RiseSetConfig,
    event: EventType,
    direction: Direction,
    start: Instant,
    state: SearchState,
    iterations: usize,
}

impl<'a> RiseSetCalculator<BodyTarget<'a>> {
    /// Calculator for a solar-system body, using the rise/set settings of the solar system.
    pub fn for_body(
        solar_system: &'a mut SolarSystem,
        body: Body,
        location: GeographicLocation,
    ) -> Self {
        let config = solar_system.config().rise_set.clone();
        Self::new(BodyTarget::new(solar_system, body), location, config)
    }
}

impl<T: RiseSetTarget> RiseSetCalculator<T> {
    pub fn new(target: T, location: GeographicLocation, config: RiseSetConfig) -> Self {
        RiseSetCalculator {
            target,
            location,
            config,
            event: EventType::Rise,
            direction: Direction::Forward,
            start: Instant::J2000,
            state: SearchState::Searching,
            iterations: 0,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn location(&self) -> GeographicLocation {
        self.location
    }

    pub fn config(&self) -> &RiseSetConfig {
        &self.config
    }

    /// State reached by the last search
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Observations spent by the last search
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run a complete search and return its final state.
    ///
    /// Arguments
    /// ---------
    /// * `event`: rise, transit or set
    /// * `direction`: look for the first event after `start` or the last one before it
    /// * `start`: origin of the search
    ///
    /// Return
    /// ------
    /// * [`SearchState::Converged`] or [`SearchState::Failed`]; errors from the target (for
    ///   example a body without orbital model) are propagated.
    pub fn search(
        &mut self,
        event: EventType,
        direction: Direction,
        start: Instant,
    ) -> Result<SearchState, EphemerisError> {
        self.event = event;
        self.direction = direction;
        self.start = start;
        self.state = SearchState::Searching;
        self.iterations = 0;

        let mut origin = start;
        let mut day_steps = self.config.max_day_steps;
        loop {
            let (from, feasible, failure) = match self.iterate(origin)? {
                Iteration::Converged(instant) => {
                    return Ok(self.finish(SearchState::Converged(instant)));
                }
                Iteration::NotConverged(last) => (last, true, FailureKind::NotConverged),
                Iteration::Infeasible(at) => {
                    if self.target.is_fixed() {
                        return Ok(self.finish(SearchState::Failed(FailureKind::Circumpolar)));
                    }
                    (at, false, FailureKind::Circumpolar)
                }
            };
            match self.scan_for_crossing(from, feasible, failure, &mut day_steps)? {
                Some(found) => origin = found,
                None => return Ok(self.finish(SearchState::Failed(failure))),
            }
        }
    }

    /// Like [`RiseSetCalculator::search`], with failures turned into errors.
    ///
    /// Return
    /// ------
    /// * the event instant,
    /// * [`EphemerisError::Circumpolar`] when the target never crosses the horizon,
    /// * [`EphemerisError::NotConverged`] when the iteration budget ran out and day stepping
    ///   found no other start.
    pub fn solve(
        &mut self,
        event: EventType,
        direction: Direction,
        start: Instant,
    ) -> Result<Instant, EphemerisError> {
        match self.search(event, direction, start)? {
            SearchState::Converged(instant) => Ok(instant),
            SearchState::Failed(FailureKind::Circumpolar) => Err(EphemerisError::Circumpolar {
                body: self.target.name(),
                event,
            }),
            SearchState::Failed(FailureKind::NotConverged) | SearchState::Searching => {
                Err(EphemerisError::NotConverged {
                    iterations: self.iterations,
                })
            }
        }
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        debug!(
            "{} {} {} from {}: {:?} after {} observations",
            self.target.name(),
            self.event,
            self.direction,
            self.start,
            state,
            self.iterations
        );
        self.state = state;
        state
    }

    /// Altitude of the horizon for the target's upper limb
    fn virtual_horizon(&self, apparent_radius: Radian) -> Radian {
        self.config.optical_horizon_deg * RADEG - apparent_radius
    }

    fn is_feasible(&mut self, instant: Instant) -> Result<bool, EphemerisError> {
        self.iterations += 1;
        let observation = self.target.observe(instant, &self.location)?;
        let horizon = self.virtual_horizon(observation.apparent_radius());
        Ok(is_crossing(
            self.event,
            self.location.latitude,
            observation.declination,
            horizon,
        ))
    }

    fn step(&mut self, current: Instant) -> Result<Step, EphemerisError> {
        self.iterations += 1;
        let observation = self.target.observe(current, &self.location)?;
        let latitude = self.location.latitude;
        let horizon = self.virtual_horizon(observation.apparent_radius());

        if !is_crossing(self.event, latitude, observation.declination, horizon) {
            return Ok(Step::Infeasible);
        }
        let target_hour_angle = match self.event {
            EventType::Transit => 0.0,
            event => match hour_angle_at_horizon(&self.location, observation.declination, horizon)
            {
                Some(h0) => event.signum() * h0,
                None => return Ok(Step::Infeasible),
            },
        };

        let delta = centered_angle(target_hour_angle - observation.hour_angle());
        let mut next = current.add_millis((delta * SIDEREAL_MILLIS_PER_RADIAN).round() as Millis);

        let sidereal_day = MILLIS_PER_SIDEREAL_DAY.round() as Millis;
        match self.direction {
            Direction::Forward if next < self.start => next = next.add_millis(sidereal_day),
            Direction::Backward if next > self.start => next = next.add_millis(-sidereal_day),
            _ => {}
        }
        Ok(Step::Moved(next))
    }

    fn iterate(&mut self, origin: Instant) -> Result<Iteration, EphemerisError> {
        let mut current = origin;
        for _ in 0..self.config.max_iterations {
            match self.step(current)? {
                Step::Infeasible => return Ok(Iteration::Infeasible(current)),
                Step::Moved(next) => {
                    let moved = next.millis_since(current).abs();
                    trace!(
                        "{} {}: {} → {} ({} ms)",
                        self.target.name(),
                        self.event,
                        current,
                        next,
                        moved
                    );
                    current = next;
                    if moved < self.config.precision_ms {
                        return Ok(Iteration::Converged(current));
                    }
                }
            }
        }
        Ok(Iteration::NotConverged(current))
    }

    /// Step whole sidereal days from `from` until the event is feasible, spending `budget`.
    /// A feasible day following an infeasible one is narrowed down to its first feasible
    /// instant.
    fn scan_for_crossing(
        &mut self,
        from: Instant,
        from_feasible: bool,
        reason: FailureKind,
        budget: &mut usize,
    ) -> Result<Option<Instant>, EphemerisError> {
        warn!(
            "{} {} from {}: {:?}, stepping days {} ({} left)",
            self.target.name(),
            self.event,
            from,
            reason,
            self.direction,
            budget
        );
        let step = self.direction.sign() * MILLIS_PER_SIDEREAL_DAY.round() as Millis;

        let (mut previous, mut previous_feasible) = (from, from_feasible);
        while *budget > 0 {
            *budget -= 1;
            let sample = previous.add_millis(step);
            if self.is_feasible(sample)? {
                if previous_feasible {
                    return Ok(Some(sample));
                }
                return self.bisect(previous, sample).map(Some);
            }
            previous = sample;
            previous_feasible = false;
        }
        Ok(None)
    }

    /// Shrink an (infeasible, feasible) bracket down to the search precision
    fn bisect(
        &mut self,
        mut infeasible: Instant,
        mut feasible: Instant,
    ) -> Result<Instant, EphemerisError> {
        while feasible.millis_since(infeasible).abs() > self.config.precision_ms {
            let middle = infeasible.add_millis(feasible.millis_since(infeasible) / 2);
            if self.is_feasible(middle)? {
                feasible = middle;
            } else {
                infeasible = middle;
            }
        }
        Ok(feasible)
    }
}

#[cfg(test)]
mod rise_set_test {
    use super::*;
    use approx::assert_relative_eq;

    fn classical_hour_angle(latitude: f64, declination: f64, horizon: f64) -> f64 {
        let cos_hour_angle = (horizon.sin() - latitude.sin() * declination.sin())
            / (latitude.cos() * declination.cos());
        cos_hour_angle.acos()
    }

    fn at_latitude(latitude: Radian) -> GeographicLocation {
        GeographicLocation::new(0.0, latitude)
    }

    #[test]
    fn test_hour_angle_matches_classical_formula() {
        let cases = [
            (48.1, 15.0, -0.83),
            (-33.85, 15.0, -0.83),
            (-33.85, -40.0, -0.83),
            (68.2, -20.0, -0.83),
            (0.0, 10.0, -0.5),
            (49.0, -16.7, -0.57),
            (-10.0, -60.0, 0.5),
        ];
        for (latitude, declination, horizon) in cases {
            let (latitude, declination, horizon) =
                (latitude * RADEG, declination * RADEG, horizon * RADEG);
            assert_relative_eq!(
                hour_angle_at_horizon(&at_latitude(latitude), declination, horizon).unwrap(),
                classical_hour_angle(latitude, declination, horizon),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_circumpolar_has_no_hour_angle() {
        let latitude = 48.137 * RADEG;
        let horizon = -34.0 / 60.0 * RADEG;
        // Polaris
        assert!(!is_crossing(EventType::Rise, latitude, 89.26 * RADEG, horizon));
        assert!(is_crossing(EventType::Transit, latitude, 89.26 * RADEG, horizon));
        // never rises
        assert!(!is_crossing(EventType::Set, latitude, -60.0 * RADEG, horizon));
        assert!(hour_angle_at_horizon(&at_latitude(latitude), -60.0 * RADEG, horizon).is_none());
        // Sirius
        assert!(is_crossing(EventType::Set, latitude, -16.7 * RADEG, horizon));
    }

    #[test]
    fn test_equator_with_zero_horizon() {
        // the horizon goes through the projection pole
        for declination in [10.0, -30.0, 0.0, 60.0] {
            for latitude in [0.0, 1e-9, -1e-9] {
                let h0 = hour_angle_at_horizon(&at_latitude(latitude), declination * RADEG, 0.0);
                assert_relative_eq!(h0.unwrap(), FRAC_PI_2, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_horizon_through_projection_pole() {
        let cases = [
            (1e-7, 25.0, 0.0),
            (0.5, 20.0, 0.5),
            (-0.5, -20.0, 0.5),
            (-1e-7, 40.0, 0.0),
            (0.83, -15.0, 0.83),
        ];
        for (latitude, declination, horizon) in cases {
            let (latitude, declination, horizon) =
                (latitude * RADEG, declination * RADEG, horizon * RADEG);
            assert_relative_eq!(
                hour_angle_at_horizon(&at_latitude(latitude), declination, horizon).unwrap(),
                classical_hour_angle(latitude, declination, horizon),
                epsilon = 1e-9
            );
        }
        // never rises
        let location = at_latitude(0.5 * RADEG);
        assert!(hour_angle_at_horizon(&location, -89.8 * RADEG, 0.5 * RADEG).is_none());
        assert!(!is_crossing(EventType::Rise, location.latitude, -89.8 * RADEG, 0.5 * RADEG));
    }

    /// A point on the celestial equator turning at exactly the sidereal rate.
    struct EquatorPoint {
        right_ascension: f64,
        declination: f64,
    }

    impl RiseSetTarget for EquatorPoint {
        fn name(&self) -> String {
            "point".into()
        }
        fn is_fixed(&self) -> bool {
            true
        }
        fn observe(
            &mut self,
            instant: Instant,
            location: &GeographicLocation,
        ) -> Result<TargetObservation, EphemerisError> {
            Ok(TargetObservation {
                right_ascension: self.right_ascension,
                declination: self.declination,
                distance: f64::INFINITY,
                radius: 0.0,
                local_sidereal_time: instant.true_sidereal_time() + location.longitude,
            })
        }
    }

    fn calculator(declination: f64) -> RiseSetCalculator<EquatorPoint> {
        RiseSetCalculator::new(
            EquatorPoint {
                right_ascension: 1.0,
                declination,
            },
            GeographicLocation::from_degrees(0.0, 45.0),
            RiseSetConfig {
                precision_ms: 1_000,
                ..RiseSetConfig::default()
            },
        )
    }

    #[test]
    fn test_events_are_ordered_and_half_a_day_apart() {
        let start = Instant::from_gregorian_utc(2020, 3, 1, 0, 0, 0).unwrap();
        let mut calculator = calculator(0.0);

        let rise = calculator.solve(EventType::Rise, Direction::Forward, start).unwrap();
        let transit = calculator.solve(EventType::Transit, Direction::Forward, rise).unwrap();
        let set = calculator.solve(EventType::Set, Direction::Forward, transit).unwrap();

        assert!(start <= rise && rise < transit && transit < set);
        // the horizon dip lengthens the arc slightly beyond 12 sidereal hours
        let arc = set.millis_since(rise) as f64 / MILLIS_PER_SIDEREAL_DAY;
        assert!(arc > 0.5 && arc < 0.51, "{arc}");
        assert_eq!(calculator.state(), SearchState::Converged(set));
    }

    #[test]
    fn test_backward_search_stays_before_start() {
        let start = Instant::from_gregorian_utc(2020, 3, 1, 0, 0, 0).unwrap();
        let mut calculator = calculator(0.3);

        let forward = calculator.solve(EventType::Set, Direction::Forward, start).unwrap();
        let backward = calculator.solve(EventType::Set, Direction::Backward, start).unwrap();
        assert!(backward <= start && start <= forward);
        let gap = forward.millis_since(backward) as f64;
        assert_relative_eq!(gap, MILLIS_PER_SIDEREAL_DAY, epsilon = 5_000.0);
    }

    #[test]
    fn test_fixed_target_fails_immediately() {
        let start = Instant::from_gregorian_utc(2020, 3, 1, 0, 0, 0).unwrap();
        let mut calculator = calculator(80.0 * RADEG);

        assert_eq!(
            calculator.search(EventType::Rise, Direction::Forward, start),
            Ok(SearchState::Failed(FailureKind::Circumpolar))
        );
        assert_eq!(calculator.iterations(), 1);
        assert_eq!(
            calculator.solve(EventType::Set, Direction::Forward, start),
            Err(EphemerisError::Circumpolar {
                body: "point".into(),
                event: EventType::Set
            })
        );
        // the meridian is always crossed
        assert!(calculator
            .solve(EventType::Transit, Direction::Forward, start)
            .is_ok());
    }

    #[test]
    fn test_iteration_cap_falls_back_to_day_steps() {
        let start = Instant::from_gregorian_utc(2020, 3, 1, 0, 0, 0).unwrap();
        let reference = calculator(0.3)
            .solve(EventType::Rise, Direction::Forward, start)
            .unwrap();

        let capped_config = RiseSetConfig {
            precision_ms: 1_000,
            max_iterations: 1,
            ..RiseSetConfig::default()
        };
        let point = || EquatorPoint {
            right_ascension: 1.0,
            declination: 0.3,
        };
        let location = GeographicLocation::from_degrees(0.0, 45.0);

        // one step per attempt: the day scan hands the iteration the next sidereal day
        let mut capped = RiseSetCalculator::new(point(), location, capped_config.clone());
        let found = capped.solve(EventType::Rise, Direction::Forward, start).unwrap();
        let offset = found.millis_since(reference) - MILLIS_PER_SIDEREAL_DAY.round() as Millis;
        assert!(offset.abs() < 2_000, "{offset}");

        let mut stuck = RiseSetCalculator::new(
            point(),
            location,
            RiseSetConfig {
                max_day_steps: 0,
                ..capped_config
            },
        );
        assert_eq!(
            stuck.search(EventType::Rise, Direction::Forward, start),
            Ok(SearchState::Failed(FailureKind::NotConverged))
        );
        assert_eq!(
            stuck.solve(EventType::Rise, Direction::Forward, start),
            Err(EphemerisError::NotConverged { iterations: 1 })
        );
    }

    /// Declination growing through the never-rises limit of a 45° observer at `threshold`.
    struct RisingDeclination {
        threshold: Instant,
        limit: Radian,
    }

    /// Radians per millisecond, about 5° a day
    const DRIFT: f64 = 1e-9;

    impl RiseSetTarget for RisingDeclination {
        fn name(&self) -> String {
            "drifting".into()
        }
        fn is_fixed(&self) -> bool {
            false
        }
        fn observe(
            &mut self,
            instant: Instant,
            location: &GeographicLocation,
        ) -> Result<TargetObservation, EphemerisError> {
            Ok(TargetObservation {
                right_ascension: 0.0,
                declination: self.limit + DRIFT * instant.millis_since(self.threshold) as f64,
                distance: f64::INFINITY,
                radius: 0.0,
                local_sidereal_time: instant.true_sidereal_time() + location.longitude,
            })
        }
    }

    fn drifting_calculator(threshold: Instant) -> RiseSetCalculator<RisingDeclination> {
        let config = RiseSetConfig {
            precision_ms: 1_000,
            ..RiseSetConfig::default()
        };
        let location = GeographicLocation::from_degrees(0.0, 45.0);
        let limit = location.latitude - FRAC_PI_2 + config.optical_horizon_deg * RADEG;
        RiseSetCalculator::new(RisingDeclination { threshold, limit }, location, config)
    }

    #[test]
    fn test_bisection_reaches_search_precision() {
        let threshold = Instant::from_gregorian_utc(2020, 3, 1, 7, 0, 0).unwrap();
        let day = MILLIS_PER_SIDEREAL_DAY.round() as Millis;
        let mut calculator = drifting_calculator(threshold);

        let found = calculator
            .bisect(threshold.add_millis(-day), threshold.add_millis(day))
            .unwrap();
        let offset = found.millis_since(threshold);
        assert!((-1..=1_000).contains(&offset), "{offset}");
    }

    #[test]
    fn test_day_scan_spends_shared_budget() {
        let threshold = Instant::from_gregorian_utc(2020, 3, 1, 7, 0, 0).unwrap();
        let day = MILLIS_PER_SIDEREAL_DAY.round() as Millis;
        let from = threshold.add_millis(-5 * day / 2);
        let mut calculator = drifting_calculator(threshold);

        // samples at −1.5, −0.5 and +0.5 days
        let mut budget = 10;
        let found = calculator
            .scan_for_crossing(from, false, FailureKind::Circumpolar, &mut budget)
            .unwrap()
            .unwrap();
        assert_eq!(budget, 7);
        let offset = found.millis_since(threshold);
        assert!((-1..=1_000).contains(&offset), "{offset}");

        let mut budget = 2;
        assert_eq!(
            calculator.scan_for_crossing(from, false, FailureKind::Circumpolar, &mut budget),
            Ok(None)
        );
        assert_eq!(budget, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(EventType::Rise.to_string(), "rise");
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
