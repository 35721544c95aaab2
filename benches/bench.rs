// Criterion benchmarks for Mover Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mover_match::core::{haversine_km, Coordinate};

fn bench_haversine_distance(c: &mut Criterion) {
    let nairobi = Coordinate::new(-1.2921, 36.8219).unwrap();
    let mombasa = Coordinate::new(-4.0435, 39.6682).unwrap();

    c.bench_function("haversine_km", |b| {
        b.iter(|| haversine_km(black_box(&nairobi), black_box(&mombasa)));
    });
}

fn bench_point_codec(c: &mut Criterion) {
    let nairobi = Coordinate::new(-1.2921, 36.8219).unwrap();
    let text = nairobi.to_point_text();

    c.bench_function("format_point", |b| {
        b.iter(|| black_box(&nairobi).to_point_text());
    });

    c.bench_function("parse_point", |b| {
        b.iter(|| Coordinate::parse_point(black_box(&text)).unwrap());
    });
}

fn bench_distance_fanout(c: &mut Criterion) {
    let origin = Coordinate::new(-1.2921, 36.8219).unwrap();

    let mut group = c.benchmark_group("distance_fanout");
    for size in [100usize, 1_000, 10_000] {
        let candidates: Vec<Coordinate> = (0..size)
            .map(|i| {
                Coordinate::new(
                    -1.2921 + (i as f64 * 0.0001) % 0.5,
                    36.8219 + (i as f64 * 0.00007) % 0.5,
                )
                .unwrap()
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, cs| {
            b.iter(|| {
                cs.iter()
                    .map(|candidate| haversine_km(black_box(&origin), candidate))
                    .sum::<f64>()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_point_codec,
    bench_distance_fanout
);
criterion_main!(benches);
