// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traced search.
//!
//! Wire the `tracing`-backed observer into insertion and search. Set
//! `RUST_LOG=debug` (or `trace` for per-node visits) to see the events.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p midcut_demos --example traced_search`

use kurbo::{Point, Rect};
use midcut_probe::Trace;
use midcut_tree::{Region, Tree};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let canvas = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    let points = [
        Point::new(20.0, 30.0),
        Point::new(70.0, 15.0),
        Point::new(45.0, 80.0),
        Point::new(25.0, 28.0),
        Point::new(90.0, 90.0),
    ];

    let mut tree = Tree::new(canvas);
    let mut obs = Trace;
    for p in points {
        tree.insert_observed(p, &mut obs).expect("points are distinct and in-canvas");
    }

    let query = Point::new(22.0, 29.0);
    let hit = tree.nearest_observed(query, &mut obs).expect("tree is non-empty");
    println!("nearest to {query:?}: {:?} at distance {:.4}", hit.point, hit.distance);
}
