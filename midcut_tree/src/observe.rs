// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks the tree invokes at defined points during insertion and search.
//!
//! Presentation layers (debug overlays, visualizers, trace collectors)
//! implement [`Observer`] to mirror the tree's progress without the core
//! depending on any rendering capability. Every method defaults to a no-op,
//! so a headless build pays nothing; [`NoObserver`] is the canonical no-op.
//!
//! The `midcut_probe` crate provides ready-made implementations: an event
//! recorder and a `tracing`-backed logger.

use kurbo::Point;

use crate::node::Node;

/// Which side of a split a child occupies, relative to its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The low half of the split axis.
    Left,
    /// The high half of the split axis.
    Right,
}

impl Side {
    pub(crate) const fn from_take_right(take_right: bool) -> Self {
        if take_right { Self::Right } else { Self::Left }
    }
}

/// Callbacks invoked while the tree inserts points and searches for
/// nearest neighbors.
///
/// Hooks receive the node they concern by reference; implementations read
/// whatever they need ([`Node::depth`], [`Node::region`], [`Node::point`])
/// and must not retain the reference. During a search, `on_node_entered`
/// and `on_node_exited` bracket each visited node exactly once.
pub trait Observer {
    /// A new terminal node was created holding a point.
    ///
    /// Filling the empty root with the very first point does not create a
    /// node and therefore does not fire this hook.
    fn on_point_inserted(&mut self, node: &Node) {
        let _ = node;
    }

    /// The search entered a node.
    fn on_node_entered(&mut self, node: &Node) {
        let _ = node;
    }

    /// The search is done with a node and all of its children.
    fn on_node_exited(&mut self, node: &Node) {
        let _ = node;
    }

    /// An internal node's child slot on `side` was expected by the descent
    /// but does not exist.
    fn on_branch_empty(&mut self, node: &Node, side: Side) {
        let _ = (node, side);
    }

    /// The far-branch prune decision for `far` and its inputs.
    ///
    /// `closest` is the boundary point of `far`'s region nearest to the
    /// query, `lower_bound` its distance to the query, and `accepted`
    /// whether the search went on to descend into `far`.
    fn on_bound_checked(
        &mut self,
        far: &Node,
        closest: Point,
        query: Point,
        accepted: bool,
        current_best: f64,
        lower_bound: f64,
    ) {
        let _ = (far, closest, query, accepted, current_best, lower_bound);
    }

    /// A terminal's distance was compared against the best found so far,
    /// whether or not it improved it (`accepted`).
    fn on_best_updated(
        &mut self,
        old_best: f64,
        new_distance: f64,
        candidate: Point,
        query: Point,
        accepted: bool,
    ) {
        let _ = (old_best, new_distance, candidate, query, accepted);
    }
}

/// The headless observer: every hook is a no-op.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl Observer for NoObserver {}
