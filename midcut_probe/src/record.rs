// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording observer: collect hook invocations as owned events.
//!
//! ## Usage
//!
//! 1) Build a [`Recorder`], optionally restricted by an
//!    [`EventMask`](crate::EventMask).
//! 2) Pass it to `insert_observed` / `nearest_observed`.
//! 3) Read back the [`Event`](crate::Event) log, or use the counters to
//!    assert on search behavior (visits, prunes, best updates).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use midcut_tree::{Region, Tree};
//! use midcut_probe::Recorder;
//!
//! let canvas = Region::from_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
//! let points = [Point::new(1.0, 1.0), Point::new(6.0, 6.0)];
//! let tree = Tree::build(canvas, points).unwrap();
//!
//! let mut rec = Recorder::new();
//! let hit = tree.nearest_observed(Point::new(1.5, 1.5), &mut rec).unwrap();
//! assert_eq!(hit.point, Point::new(1.0, 1.0));
//! assert_eq!(rec.nodes_entered(), rec.nodes_exited());
//! ```

use alloc::vec::Vec;

use kurbo::Point;
use midcut_tree::{Node, Observer, Side};

use crate::events::{Event, EventMask, NodeSnapshot};

/// An [`Observer`] that keeps an owned log of hook invocations.
///
/// Events are appended in hook order and filtered by the mask at record
/// time; a masked-out hook costs one branch and no allocation.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    mask: EventMask,
    events: Vec<Event>,
}

impl Recorder {
    /// A recorder keeping every event kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder keeping only the event kinds in `mask`.
    pub fn with_mask(mask: EventMask) -> Self {
        Self {
            mask,
            events: Vec::new(),
        }
    }

    /// The recorded events, in hook order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all recorded events, keeping the mask.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Count of nodes the search entered.
    pub fn nodes_entered(&self) -> usize {
        self.count(|e| matches!(e, Event::NodeEntered { .. }))
    }

    /// Count of nodes the search exited.
    pub fn nodes_exited(&self) -> usize {
        self.count(|e| matches!(e, Event::NodeExited { .. }))
    }

    /// Count of far branches that were bound-checked.
    pub fn bounds_checked(&self) -> usize {
        self.count(|e| matches!(e, Event::BoundChecked { .. }))
    }

    /// Count of far branches the bound check pruned away.
    pub fn branches_pruned(&self) -> usize {
        self.count(|e| matches!(e, Event::BoundChecked { accepted: false, .. }))
    }

    /// Count of comparisons that improved the best distance.
    pub fn best_updates(&self) -> usize {
        self.count(|e| matches!(e, Event::BestUpdated { accepted: true, .. }))
    }

    fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }

    fn push(&mut self, event: Event) {
        if self.mask.contains(event.mask_bit()) {
            self.events.push(event);
        }
    }
}

impl Observer for Recorder {
    fn on_point_inserted(&mut self, node: &Node) {
        self.push(Event::PointInserted {
            node: NodeSnapshot::of(node),
        });
    }

    fn on_node_entered(&mut self, node: &Node) {
        self.push(Event::NodeEntered {
            node: NodeSnapshot::of(node),
        });
    }

    fn on_node_exited(&mut self, node: &Node) {
        self.push(Event::NodeExited {
            node: NodeSnapshot::of(node),
        });
    }

    fn on_branch_empty(&mut self, node: &Node, side: Side) {
        self.push(Event::BranchEmpty {
            node: NodeSnapshot::of(node),
            side,
        });
    }

    fn on_bound_checked(
        &mut self,
        far: &Node,
        closest: Point,
        query: Point,
        accepted: bool,
        current_best: f64,
        lower_bound: f64,
    ) {
        self.push(Event::BoundChecked {
            far: NodeSnapshot::of(far),
            closest,
            query,
            accepted,
            current_best,
            lower_bound,
        });
    }

    fn on_best_updated(
        &mut self,
        old_best: f64,
        new_distance: f64,
        candidate: Point,
        query: Point,
        accepted: bool,
    ) {
        self.push(Event::BestUpdated {
            old_best,
            new_distance,
            candidate,
            query,
            accepted,
        });
    }
}
