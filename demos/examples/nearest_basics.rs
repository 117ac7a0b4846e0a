// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor basics.
//!
//! Build a small tree over a canvas, insert a handful of points, and query.
//!
//! Run:
//! - `cargo run -p midcut_demos --example nearest_basics`

use kurbo::{Point, Rect};
use midcut_tree::{Region, Tree};

fn main() {
    // The canvas spans x in [0, 7], y in [-4, 3].
    let canvas = Region::from_rect(Rect::new(0.0, -4.0, 7.0, 3.0));
    let points = [
        Point::new(1.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(5.0, 2.0),
        Point::new(5.0, -2.0),
    ];
    let tree = Tree::build(canvas, points).expect("points are distinct and in-canvas");
    println!("tree holds {} points over {:?}", tree.len(), tree.canvas().rect());

    let query = Point::new(1.2, 0.9);
    let hit = tree.nearest(query).expect("tree is non-empty");
    println!("nearest to {query:?}: {:?} at distance {:.4}", hit.point, hit.distance);
    assert_eq!(hit.point, Point::new(1.0, 1.0), "expected the top-left cluster point");
}
