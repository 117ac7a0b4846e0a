// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=midcut_tree --heading-base-level=0

//! Midcut Tree: a midpoint-cut 2D kd-tree with observed nearest-neighbor search.
//!
//! Midcut Tree is a reusable building block for spatial lookups over a bounded canvas.
//!
//! - Insert points one at a time; each occupied leaf splits its region at the
//!   geometric midpoint of the depth-derived axis (x at even depths, y at odd).
//! - Query the nearest stored point with branch-and-bound pruning: the search
//!   descends the near half first, then visits the far half only when the
//!   closest point of its region could still beat the best distance found.
//! - Hook an [`Observer`] into insertion and search to drive visualizers,
//!   debug overlays, or trace collection without coupling the core to any
//!   rendering capability.
//!
//! Splits are always midpoint-driven, never data-median-driven, and leaves
//! hold at most one point. That keeps the partition geometry independent of
//! insertion order: order shapes the tree, but never query results. Skewed
//! inputs can therefore degrade depth toward O(N); this is a deliberate
//! property of the structure, not an oversight.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use midcut_tree::{Region, Tree};
//!
//! // A canvas spanning x in [0, 7], y in [-4, 3].
//! let canvas = Region::from_rect(Rect::new(0.0, -4.0, 7.0, 3.0));
//! let points = [
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, -1.0),
//!     Point::new(5.0, 2.0),
//!     Point::new(5.0, -2.0),
//! ];
//! let tree = Tree::build(canvas, points).unwrap();
//!
//! let hit = tree.nearest(Point::new(1.2, 0.9)).unwrap();
//! assert_eq!(hit.point, Point::new(1.0, 1.0));
//! assert!((hit.distance - 0.05_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! Queries take `&Tree` and own their search state, so a built tree can
//! serve concurrent queries; insertion requires `&mut Tree`, which the
//! borrow checker keeps exclusive.
//!
//! ## Contract errors
//!
//! The tree fails fast on programming-contract violations instead of
//! recovering: querying an empty tree, inserting a point outside the
//! canvas, or inserting an exact duplicate (coincident points cannot be
//! separated by any midpoint split) all return a [`TreeError`].
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use midcut_tree::{Region, Tree, TreeError};
//!
//! let canvas = Region::from_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
//! let mut tree = Tree::new(canvas);
//! assert_eq!(tree.nearest(Point::new(1.0, 1.0)), Err(TreeError::EmptyTree));
//!
//! tree.insert(Point::new(2.0, 2.0)).unwrap();
//! assert_eq!(
//!     tree.insert(Point::new(2.0, 2.0)),
//!     Err(TreeError::DuplicatePoint { x: 2.0, y: 2.0 })
//! );
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are finite `f64` (no NaNs). Distances are Euclidean via
//! [`kurbo::Point::distance`].

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod interval;
pub mod node;
pub mod observe;
pub mod region;
pub mod tree;

pub use error::TreeError;
pub use interval::Interval;
pub use node::Node;
pub use observe::{NoObserver, Observer, Side};
pub use region::{Axis, Region};
pub use tree::{Nearest, SearchOptions, Tree};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};

    // Minimal observer checking the enter/exit bracket balance.
    #[derive(Default)]
    struct Balance {
        entered: usize,
        exited: usize,
        inserted: usize,
    }

    impl Observer for Balance {
        fn on_point_inserted(&mut self, _node: &Node) {
            self.inserted += 1;
        }
        fn on_node_entered(&mut self, _node: &Node) {
            self.entered += 1;
        }
        fn on_node_exited(&mut self, _node: &Node) {
            self.exited += 1;
        }
    }

    #[test]
    fn observed_insert_and_search_round_trip() {
        let canvas = Region::from_rect(Rect::new(0.0, -4.0, 7.0, 3.0));
        let mut tree = Tree::new(canvas);
        let mut obs = Balance::default();
        for p in [
            Point::new(1.0, 1.0),
            Point::new(1.0, -1.0),
            Point::new(5.0, 2.0),
            Point::new(5.0, -2.0),
        ] {
            tree.insert_observed(p, &mut obs).unwrap();
        }
        // The first point fills the root; the root's conversion re-slots it
        // into a new leaf, so four insertions create four leaves.
        assert_eq!(obs.inserted, 4);

        let hit = tree.nearest_observed(Point::new(1.2, 0.9), &mut obs).unwrap();
        assert_eq!(hit.point, Point::new(1.0, 1.0));
        assert_eq!(obs.entered, obs.exited);
        assert!(obs.entered >= 1);
    }

    #[test]
    fn canvas_round_trips_through_rect() {
        let rect = Rect::new(0.0, -4.0, 7.0, 3.0);
        let tree = Tree::new(Region::from_rect(rect));
        assert_eq!(tree.canvas().rect(), rect);
    }
}
