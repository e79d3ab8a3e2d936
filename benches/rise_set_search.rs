use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ephemeris::{
    body::Body,
    config::RiseSetConfig,
    observers::GeographicLocation,
    rise_set::{Direction, EventType, RiseSetCalculator},
    solar_system::SolarSystem,
    star::FixedStar,
    time::Instant,
};

/// Random start during 2018
#[inline]
fn rand_start(rng: &mut StdRng) -> Instant {
    let jan_first = Instant::from_gregorian_utc(2018, 1, 1, 0, 0, 0).unwrap();
    jan_first.add_days(rng.random_range(0.0..365.0))
}

fn munich() -> GeographicLocation {
    GeographicLocation::from_degrees(11.58198, 48.13513)
}

fn bench_bodies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let mut solar_system = SolarSystem::new();

    for body in [Body::Sun, Body::Moon, Body::Mars] {
        c.bench_function(&format!("rise_set_search/{body:?}_rise"), |b| {
            b.iter_batched(
                || rand_start(&mut rng),
                |start| {
                    let mut calculator =
                        RiseSetCalculator::for_body(&mut solar_system, body, munich());
                    let found = calculator.solve(EventType::Rise, Direction::Forward, start);
                    black_box(found.ok());
                },
                BatchSize::SmallInput,
            )
        });
    }
}

/// Polar night at Svolvær: the search has to step over days before converging
fn bench_polar_night(c: &mut Criterion) {
    let mut solar_system = SolarSystem::new();
    let svolvaer = GeographicLocation::from_degrees(14.561583, 68.234764);
    let start = Instant::from_gregorian_utc(2017, 12, 7, 0, 0, 0).unwrap();

    c.bench_function("rise_set_search/polar_night_sunrise", |b| {
        b.iter(|| {
            let mut calculator =
                RiseSetCalculator::for_body(&mut solar_system, Body::Sun, svolvaer);
            black_box(
                calculator
                    .solve(EventType::Rise, Direction::Forward, black_box(start))
                    .ok(),
            );
        })
    });
}

fn bench_star(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let sirius = FixedStar::from_sexagesimal("Sirius", "06 45 08.92", "-16 42 58.0").unwrap();

    c.bench_function("rise_set_search/sirius_set", |b| {
        b.iter_batched(
            || rand_start(&mut rng),
            |start| {
                let mut calculator =
                    RiseSetCalculator::new(sirius.clone(), munich(), RiseSetConfig::default());
                let found = calculator.solve(EventType::Set, Direction::Forward, start);
                black_box(found.ok());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_bodies, bench_polar_night, bench_star
);
criterion_main!(benches);
