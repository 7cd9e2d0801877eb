//! Benchmark: full composite evaluation for one location

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use georisk_scorer::{FloodReading, IndicatorReadings, RiskScorer};

fn bench_evaluate(c: &mut Criterion) {
    let scorer = RiskScorer::new().unwrap();
    let readings = IndicatorReadings {
        vegetation: Some(0.40),
        drought: Some(3.5),
        flood: Some(FloodReading {
            last_hour_mm: 6.0,
            sum_3h_mm: Some(20.0),
            sum_24h_mm: 10.0,
        }),
    };

    c.bench_function("evaluate_composite", |b| {
        b.iter(|| {
            scorer
                .evaluate(black_box("Darmstadt, Deutschland"), black_box(&readings))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
