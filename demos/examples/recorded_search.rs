// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded search.
//!
//! Run a nearest-neighbor query with a [`Recorder`] attached and print the
//! visit/prune trail, then compare against an unpruned full traversal.
//!
//! Run:
//! - `cargo run -p midcut_demos --example recorded_search`

use kurbo::{Point, Rect};
use midcut_probe::{Event, Recorder};
use midcut_tree::{Region, SearchOptions, Tree};

fn main() {
    let canvas = Region::from_rect(Rect::new(0.0, 0.0, 64.0, 64.0));
    let points = [
        Point::new(8.0, 8.0),
        Point::new(12.0, 6.0),
        Point::new(9.0, 14.0),
        Point::new(50.0, 52.0),
        Point::new(55.0, 48.0),
        Point::new(60.0, 10.0),
        Point::new(6.0, 58.0),
    ];
    let tree = Tree::build(canvas, points).expect("points are distinct and in-canvas");

    let query = Point::new(10.0, 9.0);
    let mut rec = Recorder::new();
    let hit = tree.nearest_observed(query, &mut rec).expect("tree is non-empty");
    println!("nearest to {query:?}: {:?} at distance {:.4}", hit.point, hit.distance);

    println!("\nsearch trail:");
    for event in rec.events() {
        match event {
            Event::NodeEntered { node } => {
                let indent = "  ".repeat(node.depth);
                match node.point {
                    Some(p) => println!("{indent}visit leaf {p:?}"),
                    None => println!("{indent}descend into {:?}", node.region),
                }
            }
            Event::BoundChecked {
                accepted,
                lower_bound,
                current_best,
                ..
            } => {
                let verdict = if *accepted { "descend" } else { "prune" };
                println!("    bound {lower_bound:.4} vs best {current_best:.4} -> {verdict}");
            }
            Event::BestUpdated {
                accepted: true,
                candidate,
                new_distance,
                ..
            } => {
                println!("    new best {candidate:?} at {new_distance:.4}");
            }
            _ => {}
        }
    }

    println!(
        "\nvisited {} nodes, pruned {} branches",
        rec.nodes_entered(),
        rec.branches_pruned()
    );

    // The same query without pruning touches every node and agrees exactly.
    let mut full = Recorder::new();
    let unpruned = tree
        .nearest_with(query, SearchOptions { prune_far: false }, &mut full)
        .expect("tree is non-empty");
    assert_eq!(unpruned.distance, hit.distance, "pruning must not change the result");
    println!(
        "full traversal visits {} nodes for the same answer",
        full.nodes_entered()
    );
}
