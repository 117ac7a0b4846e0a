// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use midcut_tree::{Region, SearchOptions, Tree};

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

const CANVAS: Rect = Rect::new(0.0, 0.0, 1024.0, 1024.0);

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            Point::new(
                CANVAS.x0 + rng.next_f64() * CANVAS.width(),
                CANVAS.y0 + rng.next_f64() * CANVAS.height(),
            )
        })
        .collect()
}

/// Points gathered into a few tight clusters; the skewed distribution
/// deepens the midpoint-split tree.
fn gen_clustered_points(count: usize, clusters: usize, spread: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    // Keep cluster centers inset so the spread stays inside the canvas.
    let centers: Vec<Point> = (0..clusters)
        .map(|_| {
            Point::new(
                CANVAS.x0 + spread + rng.next_f64() * (CANVAS.width() - 2.0 * spread),
                CANVAS.y0 + spread + rng.next_f64() * (CANVAS.height() - 2.0 * spread),
            )
        })
        .collect();
    (0..count)
        .map(|i| {
            let c = centers[i % clusters];
            Point::new(
                c.x + (rng.next_f64() - 0.5) * spread,
                c.y + (rng.next_f64() - 0.5) * spread,
            )
        })
        .collect()
}

fn build_tree(points: &[Point]) -> Tree {
    Tree::build(Region::from_rect(CANVAS), points.iter().copied())
        .expect("bench points are distinct and in-canvas")
}

fn scan_nearest(points: &[Point], query: Point) -> f64 {
    points
        .iter()
        .map(|p| p.distance(query))
        .fold(f64::INFINITY, f64::min)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[100_usize, 1_000, 10_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(build_tree(&pts)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[100_usize, 1_000, 10_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D_DEAD_BEEF);
        let tree = build_tree(&points);
        let queries = gen_uniform_points(256, 0x0123_4567_89AB_CDEF);

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_uniform_{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(tree.nearest(black_box(q)).unwrap());
                }
            });
        });
        group.bench_function(format!("scan_uniform_{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(scan_nearest(&points, black_box(q)));
                }
            });
        });
    }

    // Clustered input: deeper trees, less effective pruning.
    let points = gen_clustered_points(10_000, 8, 24.0, 0xFEED_FACE_0BAD_F00D);
    let tree = build_tree(&points);
    let queries = gen_uniform_points(256, 0x0123_4567_89AB_CDEF);
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("tree_clustered_10000", |b| {
        b.iter(|| {
            for &q in &queries {
                black_box(tree.nearest(black_box(q)).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_prune_effect(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune_effect");
    let points = gen_uniform_points(10_000, 0xCAFE_F00D_DEAD_BEEF);
    let tree = build_tree(&points);
    let queries = gen_uniform_points(64, 0x0123_4567_89AB_CDEF);
    let no_prune = SearchOptions { prune_far: false };

    group.bench_function("pruned", |b| {
        b.iter(|| {
            for &q in &queries {
                black_box(tree.nearest(black_box(q)).unwrap());
            }
        });
    });
    group.bench_function("full_traversal", |b| {
        b.iter(|| {
            for &q in &queries {
                black_box(
                    tree.nearest_with(black_box(q), no_prune, &mut midcut_tree::NoObserver)
                        .unwrap(),
                );
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest, bench_prune_effect);
criterion_main!(benches);
