use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ephemeris::{
    config::EphemerisConfig,
    orbital_models::vsop87::{evaluate, vsop87c, EARTH, NEPTUNE},
    solar_system::SolarSystem,
    time::Instant,
};

/// Julian millennia since J2000 covering 1900..2100
#[inline]
fn rand_millennia(rng: &mut StdRng) -> f64 {
    rng.random_range(-0.1..0.1)
}

fn bench_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 1_000usize;

    for (name, table) in [
        ("earth", &EARTH),
        ("neptune", &NEPTUNE),
        ("earth_rectangular", &vsop87c::EARTH),
    ] {
        c.bench_function(&format!("vsop87_evaluation/{name}"), |b| {
            b.iter_batched(
                || (0..samples).map(|_| rand_millennia(&mut rng)).collect::<Vec<_>>(),
                |times| {
                    for t in times {
                        black_box(evaluate(table, black_box(t)));
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

fn bench_solar_system(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    for parallel in [false, true] {
        let config = EphemerisConfig::builder()
            .parallel(parallel)
            .build()
            .unwrap();
        let mut solar_system = SolarSystem::with_config(config);
        let label = if parallel { "parallel" } else { "sequential" };

        c.bench_function(&format!("vsop87_evaluation/solar_system_{label}"), |b| {
            b.iter_batched(
                || Instant::J2000.add_days(rng.random_range(-36525.0..36525.0)),
                |instant| {
                    solar_system.compute(black_box(instant)).unwrap();
                    black_box(solar_system.sun_geocentric());
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_series, bench_solar_system
);
criterion_main!(benches);
