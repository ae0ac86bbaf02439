// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use twod_tree::Tree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Point::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ));
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000_usize, 10_000] {
        let pts = gen_random_points(n, 1_000.0);
        group.bench_function(format!("balanced_{n}"), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(Tree::from_points(&pts)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let pts = gen_random_points(10_000, 1_000.0);
    let tree = Tree::from_points(&pts);
    let mut group = c.benchmark_group("queries");

    group.bench_function("range_small", |b| {
        b.iter(|| {
            black_box(tree.range_search(
                black_box(Point::new(400.0, 400.0)),
                black_box(Point::new(450.0, 450.0)),
            ))
        });
    });

    group.bench_function("range_full", |b| {
        b.iter(|| {
            black_box(tree.range_search(
                black_box(Point::new(0.0, 0.0)),
                black_box(Point::new(1_000.0, 1_000.0)),
            ))
        });
    });

    group.bench_function("nearest_r50", |b| {
        b.iter(|| {
            black_box(tree.nearest_neighbors(black_box(Point::new(500.0, 500.0)), 50.0, None))
        });
    });

    group.bench_function("nearest_r50_top10", |b| {
        b.iter(|| {
            black_box(tree.nearest_neighbors(black_box(Point::new(500.0, 500.0)), 50.0, Some(10)))
        });
    });

    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let pts = gen_random_points(10_000, 1_000.0);
    let mut group = c.benchmark_group("mutation");

    group.bench_function("insert_remove_cycle", |b| {
        b.iter_batched(
            || Tree::from_points(&pts),
            |mut tree| {
                let p = Point::new(123.456, 654.321);
                tree.insert(p);
                tree.remove(p);
                black_box(tree)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_mutation);
criterion_main!(benches);
