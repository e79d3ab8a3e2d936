mod common;

use ephemeris::{
    config::{EphemerisConfig, RiseSetConfig},
    constants::{MILLIS_PER_SIDEREAL_DAY, RADEG},
    ephemeris_errors::EphemerisError,
    observers::GeographicLocation,
    rise_set::{Direction, EventType, FailureKind, RiseSetCalculator, SearchState},
    star::FixedStar,
    time::Instant,
};

use crate::common::{assert_instant_close, local};

fn munich() -> GeographicLocation {
    GeographicLocation::from_degrees(11.576, 48.137)
}

fn calculator(star: FixedStar) -> RiseSetCalculator<FixedStar> {
    RiseSetCalculator::new(star, munich(), RiseSetConfig::default())
}

fn polaris() -> FixedStar {
    FixedStar::from_sexagesimal("Polaris", "02 31 49.09", "+89 15 50.8").unwrap()
}

fn sirius() -> FixedStar {
    FixedStar::from_sexagesimal("Sirius", "06 45 08.917", "-16 42 58.02").unwrap()
}

#[test]
fn test_polaris_never_rises_nor_sets() {
    let mut polaris = calculator(polaris());
    let start = Instant::from_millis(0);

    for event in [EventType::Rise, EventType::Set] {
        assert_eq!(
            polaris.solve(event, Direction::Forward, start),
            Err(EphemerisError::Circumpolar {
                body: "Polaris".into(),
                event
            })
        );
        assert_eq!(
            polaris.state(),
            SearchState::Failed(FailureKind::Circumpolar)
        );
    }

    // but it still crosses the meridian
    assert!(polaris
        .solve(EventType::Transit, Direction::Forward, start)
        .is_ok());
}

#[test]
fn test_sirius_set() {
    let mut sirius = calculator(sirius());
    let found = sirius
        .solve(
            EventType::Set,
            Direction::Forward,
            local(2018, 5, 7, 12, 0, 2),
        )
        .unwrap();
    assert_instant_close(found, local(2018, 5, 7, 21, 43, 2), 60_000);
}

#[test]
fn test_sirius_rise() {
    let mut sirius = calculator(sirius());
    let found = sirius
        .solve(
            EventType::Rise,
            Direction::Forward,
            local(2018, 5, 8, 0, 0, 2),
        )
        .unwrap();
    assert_instant_close(found, local(2018, 5, 8, 12, 10, 2), 60_000);
}

#[test]
fn test_star_day_is_sidereal() {
    let mut sirius = calculator(sirius());
    let start = local(2018, 5, 8, 0, 0, 2);
    let first = sirius
        .solve(EventType::Transit, Direction::Forward, start)
        .unwrap();
    let previous = sirius
        .solve(EventType::Transit, Direction::Backward, start)
        .unwrap();
    let day = first.millis_since(previous);
    // 23 h 56 min 4 s
    assert!((day - 86_164_091).abs() < 2_000, "{day}");
}

#[test]
fn test_equator_observer_with_zero_horizon() {
    // the horizon runs through both celestial poles: every star is up for half a sidereal day
    let config = EphemerisConfig::builder()
        .optical_horizon_deg(0.0)
        .precision_ms(1_000)
        .build()
        .unwrap()
        .rise_set;
    let start = local(2018, 5, 8, 0, 0, 0);
    let quarter_day = MILLIS_PER_SIDEREAL_DAY / 4.0;

    for latitude in [0.0, 1e-9] {
        let star = FixedStar::new("Equator star", 1.0, 10.0 * RADEG);
        let location = GeographicLocation::new(0.0, latitude);
        let mut calculator = RiseSetCalculator::new(star, location, config.clone());

        let rise = calculator
            .solve(EventType::Rise, Direction::Forward, start)
            .unwrap();
        let transit = calculator
            .solve(EventType::Transit, Direction::Forward, rise)
            .unwrap();
        let set = calculator
            .solve(EventType::Set, Direction::Forward, transit)
            .unwrap();

        assert!(start <= rise && rise < transit && transit < set);
        let morning = transit.millis_since(rise) as f64;
        let afternoon = set.millis_since(transit) as f64;
        assert!((morning - quarter_day).abs() < 2_000.0, "{morning}");
        assert!((afternoon - quarter_day).abs() < 2_000.0, "{afternoon}");
    }
}
