mod common;

use ephemeris::{
    body::Body,
    rise_set::{Direction, EventType, RiseSetCalculator},
    solar_system::SolarSystem,
};

use crate::common::{assert_instant_close, local, munich};

/// The Moon series is good to a few arcminutes, a few tens of seconds in time.
const TOLERANCE_MS: i64 = 120_000;

#[test]
fn test_moon_munich() {
    use Direction::*;
    use EventType::*;

    // timeanddate.com, CEST
    let cases = [
        ((2018, 5, 1), Forward, Set, (2018, 5, 1, 7, 5)),
        ((2018, 5, 1), Forward, Rise, (2018, 5, 1, 21, 56)),
        ((2018, 5, 2), Backward, Set, (2018, 5, 1, 7, 5)),
        ((2018, 5, 2), Backward, Rise, (2018, 5, 1, 21, 56)),
        ((2018, 5, 4), Backward, Rise, (2018, 5, 3, 23, 55)),
        ((2018, 5, 4), Forward, Set, (2018, 5, 4, 8, 57)),
        ((2018, 5, 4), Forward, Rise, (2018, 5, 5, 0, 46)),
        ((2018, 5, 18), Forward, Rise, (2018, 5, 18, 8, 14)),
    ];

    let mut solar_system = SolarSystem::new();
    for ((y, m, d), direction, event, (ey, em, ed, eh, emin)) in cases {
        let mut calculator = RiseSetCalculator::for_body(&mut solar_system, Body::Moon, munich());
        let found = calculator
            .solve(event, direction, local(y, m, d, 0, 0, 2))
            .unwrap();
        assert_instant_close(found, local(ey, em, ed, eh, emin, 2), TOLERANCE_MS);
    }
}

#[test]
fn test_moon_rises_later_every_day() {
    let mut solar_system = SolarSystem::new();
    let mut calculator = RiseSetCalculator::for_body(&mut solar_system, Body::Moon, munich());

    let first = calculator
        .solve(EventType::Transit, Direction::Forward, local(2018, 5, 10, 0, 0, 2))
        .unwrap();
    let second = calculator
        .solve(EventType::Transit, Direction::Forward, first.add_millis(3_600_000))
        .unwrap();
    // a lunar day lasts about 24 h 50 min
    let lunar_day = second.millis_since(first) as f64 / 3_600_000.0;
    assert!(lunar_day > 24.4 && lunar_day < 25.3, "{lunar_day}");
}
