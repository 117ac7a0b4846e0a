// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned event snapshots of tree hook invocations, and the mask that
//! selects them.

use kurbo::{Point, Rect};
use midcut_tree::{Node, Side};

bitflags::bitflags! {
    /// Selects which hook invocations a [`Recorder`](crate::Recorder) keeps.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// New terminal nodes created during insertion.
        const POINT_INSERTED = 0b0000_0001;
        /// Search entering a node.
        const NODE_ENTERED   = 0b0000_0010;
        /// Search leaving a node.
        const NODE_EXITED    = 0b0000_0100;
        /// Missing near/far branches.
        const BRANCH_EMPTY   = 0b0000_1000;
        /// Far-branch prune decisions.
        const BOUND_CHECKED  = 0b0001_0000;
        /// Best-distance comparisons at terminals.
        const BEST_UPDATED   = 0b0010_0000;
    }
}

impl Default for EventMask {
    fn default() -> Self {
        Self::all()
    }
}

/// An owned snapshot of one node at the moment a hook fired.
///
/// Hooks hand nodes out by reference; snapshots copy the data a
/// presentation layer needs so events can outlive the borrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSnapshot {
    /// Depth below the root.
    pub depth: usize,
    /// The node's region as a kurbo rectangle.
    pub region: Rect,
    /// The stored point, for terminals holding one.
    pub point: Option<Point>,
    /// Whether the node was a terminal.
    pub terminal: bool,
    /// Which side of the parent's split the node occupies.
    pub side: Side,
}

impl NodeSnapshot {
    /// Snapshot a node.
    pub fn of(node: &Node) -> Self {
        Self {
            depth: node.depth(),
            region: node.region().rect(),
            point: node.point(),
            terminal: node.is_terminal(),
            side: node.entered_from(),
        }
    }
}

/// One recorded hook invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A new terminal node was created holding a point.
    PointInserted {
        /// The created node.
        node: NodeSnapshot,
    },
    /// The search entered a node.
    NodeEntered {
        /// The visited node.
        node: NodeSnapshot,
    },
    /// The search finished with a node and its children.
    NodeExited {
        /// The visited node.
        node: NodeSnapshot,
    },
    /// An expected child branch does not exist.
    BranchEmpty {
        /// The internal node with the empty slot.
        node: NodeSnapshot,
        /// The missing side.
        side: Side,
    },
    /// A far-branch prune decision.
    BoundChecked {
        /// The far child under consideration.
        far: NodeSnapshot,
        /// Boundary point of the far region nearest to the query.
        closest: Point,
        /// The query point.
        query: Point,
        /// Whether the search descended into the far child.
        accepted: bool,
        /// Best distance at the time of the check.
        current_best: f64,
        /// Lower bound on any distance inside the far region.
        lower_bound: f64,
    },
    /// A terminal's distance was compared against the best so far.
    BestUpdated {
        /// Best distance before the comparison.
        old_best: f64,
        /// The candidate's distance to the query.
        new_distance: f64,
        /// The candidate point.
        candidate: Point,
        /// The query point.
        query: Point,
        /// Whether the candidate became the new best.
        accepted: bool,
    },
}

impl Event {
    /// The mask bit this event belongs to.
    pub const fn mask_bit(&self) -> EventMask {
        match self {
            Self::PointInserted { .. } => EventMask::POINT_INSERTED,
            Self::NodeEntered { .. } => EventMask::NODE_ENTERED,
            Self::NodeExited { .. } => EventMask::NODE_EXITED,
            Self::BranchEmpty { .. } => EventMask::BRANCH_EMPTY,
            Self::BoundChecked { .. } => EventMask::BOUND_CHECKED,
            Self::BestUpdated { .. } => EventMask::BEST_UPDATED,
        }
    }
}
