mod common;

use approx::assert_relative_eq;
use ephemeris::{
    body::Body,
    config::EphemerisConfig,
    coordinates::Spherical,
    kepler::eccentric_anomaly,
    observers::Topos,
    position::{Center, Equinox, Frame},
    ref_system::{
        ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
        horizontal_to_equatorial,
    },
    solar_system::SolarSystem,
    time::Instant,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::munich;

/// Random instant between 1950 and 2050
fn random_instant(rng: &mut StdRng) -> Instant {
    Instant::from_julian_day(rng.random_range(2_433_282.5..2_469_807.5))
}

#[test]
fn test_frame_round_trips() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let v = Spherical::new(
            1.0,
            rng.random_range(0.0..std::f64::consts::TAU),
            rng.random_range(-1.5..1.5),
        )
        .to_cartesian();
        let obliquity = rng.random_range(0.40..0.42);
        let lst = rng.random_range(0.0..std::f64::consts::TAU);
        let latitude = rng.random_range(-1.5..1.5);

        let back = equatorial_to_ecliptic(obliquity) * ecliptic_to_equatorial(obliquity) * v;
        assert_relative_eq!(back, v, epsilon = 1e-10);

        let back =
            horizontal_to_equatorial(lst, latitude) * equatorial_to_horizontal(lst, latitude) * v;
        assert_relative_eq!(back, v, epsilon = 1e-10);
    }
}

#[test]
fn test_kepler_residual() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let e = rng.random_range(0.0..0.99);
        let m = rng.random_range(0.0..std::f64::consts::TAU);
        let u = eccentric_anomaly(m, e, 1e-15).unwrap();
        assert!((u - e * u.sin() - m).abs() < 1e-12, "e = {e}, M = {m}");
    }
}

#[test]
fn test_retrograde_flag_matches_angular_momentum() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut solar_system = SolarSystem::new();
    let mut seen_retrograde = false;

    for _ in 0..40 {
        solar_system.compute(random_instant(&mut rng)).unwrap();
        for body in Body::ALL.into_iter().filter(|b| *b != Body::Earth) {
            let phase = solar_system.geocentric(body).unwrap();
            let lz = phase.position.cross(&phase.velocity).z;
            assert_eq!(solar_system.is_retrograde(body).unwrap(), lz < 0.0);
            seen_retrograde |= lz < 0.0;
        }
    }
    // outer planets spend about 40 % of the time retrograde
    assert!(seen_retrograde);
}

#[test]
fn test_recompute_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut solar_system = SolarSystem::new();
    for _ in 0..5 {
        let instant = random_instant(&mut rng);
        solar_system.compute(instant).unwrap();
        let before: Vec<_> = Body::ALL
            .iter()
            .map(|b| {
                solar_system
                    .ephemerides(*b, munich())
                    .unwrap()
                    .cartesian(Frame::Horizontal, Center::Topocentric, Equinox::True)
            })
            .collect();
        solar_system.compute(instant).unwrap();
        let after: Vec<_> = Body::ALL
            .iter()
            .map(|b| {
                solar_system
                    .ephemerides(*b, munich())
                    .unwrap()
                    .cartesian(Frame::Horizontal, Center::Topocentric, Equinox::True)
            })
            .collect();
        assert_eq!(before, after);
    }
}

#[test]
fn test_sequential_and_parallel_agree() {
    let config = EphemerisConfig::builder().parallel(false).build().unwrap();
    let mut sequential = SolarSystem::with_config(config);
    let mut parallel = SolarSystem::new();

    let instant = Instant::from_gregorian_utc(2024, 4, 8, 18, 0, 0).unwrap();
    sequential.compute(instant).unwrap();
    parallel.compute(instant).unwrap();
    for body in Body::ALL {
        assert_eq!(sequential.geocentric(body), parallel.geocentric(body));
    }
}

#[test]
fn test_total_solar_eclipse_alignment() {
    // 2024-04-08 18:18 UTC: maximum of the total eclipse over North America
    let instant = Instant::from_gregorian_utc(2024, 4, 8, 18, 18, 0).unwrap();
    let mut solar_system = SolarSystem::new();
    solar_system.compute(instant).unwrap();

    let moon = solar_system.geocentric(Body::Moon).unwrap().position;
    let sun = solar_system.sun_geocentric();
    // geocentric separation stays below the lunar parallax (~1°) plus model error
    assert!(moon.angle(&sun).to_degrees() < 1.5);
    // new Moon: almost nothing lit
    assert!(solar_system.illuminated_fraction(Body::Moon).unwrap() < 0.01);
}

#[test]
fn test_horizontal_altitude_of_the_sun_at_noon() {
    // Munich, 2018-06-21 transit: altitude ≈ 90° − 48.135° + 23.44°
    let instant = Instant::from_gregorian_utc(2018, 6, 21, 11, 15, 0).unwrap();
    let mut solar_system = SolarSystem::new();
    solar_system.compute(instant).unwrap();

    let position = solar_system.ephemerides(Body::Sun, munich()).unwrap();
    let horizontal = position.spherical(Frame::Horizontal, Center::Topocentric, Equinox::True);
    assert_relative_eq!(horizontal.latitude.to_degrees(), 65.3, epsilon = 0.2);
    // due south
    assert_relative_eq!(horizontal.longitude.to_degrees(), 180.0, epsilon = 2.0);
    assert_eq!(position.topos().instant(), Topos::new(munich(), instant).instant());
}
