mod common;

use ephemeris::{
    body::Body,
    config::EphemerisConfig,
    ephemeris_errors::EphemerisError,
    observers::GeographicLocation,
    rise_set::{Direction, EventType, FailureKind, RiseSetCalculator, SearchState},
    solar_system::SolarSystem,
    time::Instant,
};

use crate::common::{
    assert_instant_close, local, munich, svolvaer, sydney, vancouver, MILLIS_PER_MINUTE,
};

/// Reference times are rounded to the minute
const TOLERANCE_MS: i64 = 60_000;
/// Required agreement for the Munich reference day
const MUNICH_TOLERANCE_MS: i64 = 30_000;

fn sun_event(
    location: GeographicLocation,
    start: Instant,
    direction: Direction,
    event: EventType,
) -> Result<Instant, EphemerisError> {
    let mut solar_system = SolarSystem::new();
    RiseSetCalculator::for_body(&mut solar_system, Body::Sun, location).solve(
        event,
        direction,
        start,
    )
}

fn check(
    location: GeographicLocation,
    start: Instant,
    direction: Direction,
    event: EventType,
    expected: Instant,
) {
    let found = sun_event(location, start, direction, event).unwrap();
    assert_instant_close(found, expected, TOLERANCE_MS);
}

#[test]
fn test_munich() {
    use Direction::*;
    use EventType::*;

    // timeanddate.com, CEST
    let cases = [
        ((2018, 5, 2), Backward, Rise, (2018, 5, 1, 5, 56)),
        ((2018, 5, 2), Backward, Set, (2018, 5, 1, 20, 27)),
        ((2018, 5, 15), Forward, Rise, (2018, 5, 15, 5, 35)),
        ((2018, 5, 15), Forward, Set, (2018, 5, 15, 20, 46)),
        ((2018, 5, 31), Forward, Rise, (2018, 5, 31, 5, 19)),
        ((2018, 6, 1), Backward, Set, (2018, 5, 31, 21, 5)),
    ];
    for ((y, m, d), direction, event, (ey, em, ed, eh, emin)) in cases {
        check(
            munich(),
            local(y, m, d, 0, 0, 2),
            direction,
            event,
            local(ey, em, ed, eh, emin, 2),
        );
    }
}

#[test]
fn test_munich_reference_day() {
    // timeanddate.com, 2018-05-01 CEST
    let start = local(2018, 5, 1, 0, 0, 2);
    let rise = sun_event(munich(), start, Direction::Forward, EventType::Rise).unwrap();
    assert_instant_close(rise, local(2018, 5, 1, 5, 56, 2), MUNICH_TOLERANCE_MS);
    let set = sun_event(munich(), start, Direction::Forward, EventType::Set).unwrap();
    assert_instant_close(set, local(2018, 5, 1, 20, 27, 2), MUNICH_TOLERANCE_MS);
}

#[test]
fn test_sydney() {
    let start = local(2018, 5, 1, 0, 0, 10);
    check(
        sydney(),
        start,
        Direction::Forward,
        EventType::Rise,
        local(2018, 5, 1, 6, 29, 10),
    );
    check(
        sydney(),
        start,
        Direction::Forward,
        EventType::Set,
        local(2018, 5, 1, 17, 15, 10),
    );
    check(
        sydney(),
        local(2018, 5, 2, 0, 0, 10),
        Direction::Backward,
        EventType::Set,
        local(2018, 5, 1, 17, 15, 10),
    );
}

#[test]
fn test_vancouver() {
    let start = local(2018, 5, 1, 0, 0, -7);
    check(
        vancouver(),
        start,
        Direction::Forward,
        EventType::Rise,
        local(2018, 5, 1, 5, 51, -7),
    );
    check(
        vancouver(),
        start,
        Direction::Forward,
        EventType::Set,
        local(2018, 5, 1, 20, 29, -7),
    );
    check(
        vancouver(),
        local(2018, 5, 2, 0, 0, -7),
        Direction::Backward,
        EventType::Rise,
        local(2018, 5, 1, 5, 51, -7),
    );
}

#[test]
fn test_transit_lies_between_rise_and_set() {
    let start = local(2018, 5, 1, 0, 0, 2);
    let rise = sun_event(munich(), start, Direction::Forward, EventType::Rise).unwrap();
    let transit = sun_event(munich(), start, Direction::Forward, EventType::Transit).unwrap();
    let set = sun_event(munich(), start, Direction::Forward, EventType::Set).unwrap();

    assert!(rise < transit && transit < set);
    // solar noon ≈ 12:00 − λ/15° − E, with E ≈ +3 min in early May
    assert_instant_close(transit, local(2018, 5, 1, 13, 10, 2), 3 * MILLIS_PER_MINUTE);
    // rise and set are nearly symmetric about the transit
    let morning = transit.millis_since(rise);
    let afternoon = set.millis_since(transit);
    assert!((morning - afternoon).abs() < 2 * MILLIS_PER_MINUTE);
}

#[test]
fn test_first_sunrise_after_polar_night() {
    // timeanddate.com: no sunrise between 2017-12-07 and 2018-01-05 11:59 CET
    let found = sun_event(
        svolvaer(),
        local(2017, 12, 7, 0, 0, 1),
        Direction::Forward,
        EventType::Rise,
    )
    .unwrap();
    assert!(found > local(2018, 1, 3, 0, 0, 1), "{found}");
    assert!(found < local(2018, 1, 7, 0, 0, 1), "{found}");
}

#[test]
fn test_first_sunset_after_midnight_sun() {
    // timeanddate.com: the Sun stays up from 2018-05-25 01:14 to 2018-07-19 00:53 CEST
    let found = sun_event(
        svolvaer(),
        local(2018, 5, 25, 1, 0, 2),
        Direction::Forward,
        EventType::Set,
    )
    .unwrap();
    assert!(found > local(2018, 7, 17, 0, 0, 2), "{found}");
    assert!(found < local(2018, 7, 21, 0, 0, 2), "{found}");
}

#[test]
fn test_polar_night_exhausts_day_steps() {
    let config = EphemerisConfig::builder().max_day_steps(5).build().unwrap();
    let mut solar_system = SolarSystem::with_config(config);
    let mut calculator = RiseSetCalculator::for_body(&mut solar_system, Body::Sun, svolvaer());

    let start = local(2017, 12, 15, 0, 0, 1);
    assert_eq!(
        calculator.search(EventType::Rise, Direction::Forward, start),
        Ok(SearchState::Failed(FailureKind::Circumpolar))
    );
    assert_eq!(
        calculator.solve(EventType::Set, Direction::Backward, start),
        Err(EphemerisError::Circumpolar {
            body: "Sun".into(),
            event: EventType::Set
        })
    );
}

#[test]
fn test_unknown_body_is_reported() {
    use ephemeris::orbital_models::{
        vsop87::{Vsop87, EARTH},
        OrbitalModel,
    };

    let models: Vec<(Body, Box<dyn OrbitalModel>)> =
        vec![(Body::Earth, Box::new(Vsop87::new(&EARTH)))];
    let mut solar_system = SolarSystem::from_models(models, EphemerisConfig::default()).unwrap();
    let mut calculator = RiseSetCalculator::for_body(&mut solar_system, Body::Mars, munich());
    assert_eq!(
        calculator.solve(EventType::Rise, Direction::Forward, Instant::J2000),
        Err(EphemerisError::UnknownBody(Body::Mars))
    );
}
