// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use photo_extent::{compute_extent, compute_extent_and_aspect_ratio, Angle, Point};
use std::hint::black_box;

/// A grid of photographs a few hundred meters across, like one afternoon's walk.
fn walk(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let step = i as f64;
            let latitude = Angle::new(48.0, 51.0, (step * 0.37) % 60.0).unwrap();
            let minutes = 20.0 + (step / 60.0).floor() % 2.0;
            let longitude = Angle::new(2.0, minutes, (step * 0.53) % 60.0).unwrap();
            Point::new(format!("IMG_{i:05}.jpg"), latitude, longitude).unwrap()
        })
        .collect()
}

fn extent_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("extent");

    for count in [10, 1_000, 100_000] {
        let points = walk(count);

        group.bench_with_input(BenchmarkId::new("find_extremes", count), &points, |b, points| {
            b.iter(|| {
                let _ = black_box(compute_extent(points).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("aspect_ratio", count), &points, |b, points| {
            b.iter(|| {
                let _ = black_box(compute_extent_and_aspect_ratio(points).unwrap().1);
            });
        });
    }

    group.finish();
}

fn subtraction_benchmark(c: &mut Criterion) {
    let a = Angle::new(48.0, 52.0, 0.0).unwrap();
    let b = Angle::new(48.0, 51.0, 59.5).unwrap();

    c.bench_function("absolute_difference_with_borrow", |bench| {
        bench.iter(|| black_box(&a).absolute_difference(black_box(&b)).unwrap());
    });
}

criterion_group!(benches, extent_benchmark, subtraction_benchmark);
criterion_main!(benches);
