// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured-logging observer backed by `tracing`.
//!
//! Node visits log at `TRACE`; prune decisions and best-distance updates
//! log at `DEBUG`. Install whatever subscriber fits the host application;
//! without one the hooks are nearly free.

use kurbo::Point;
use midcut_tree::{Node, Observer, Side};
use tracing::{debug, trace};

/// An [`Observer`] that logs every hook as a `tracing` event.
#[derive(Copy, Clone, Debug, Default)]
pub struct Trace;

impl Observer for Trace {
    fn on_point_inserted(&mut self, node: &Node) {
        debug!(
            depth = node.depth(),
            point = ?node.point(),
            "new leaf"
        );
    }

    fn on_node_entered(&mut self, node: &Node) {
        trace!(
            depth = node.depth(),
            terminal = node.is_terminal(),
            "enter node"
        );
    }

    fn on_node_exited(&mut self, node: &Node) {
        trace!(depth = node.depth(), "exit node");
    }

    fn on_branch_empty(&mut self, node: &Node, side: Side) {
        trace!(depth = node.depth(), side = ?side, "branch empty");
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
        debug!(
            depth = far.depth(),
            closest = ?closest,
            query = ?query,
            lower_bound,
            current_best,
            accepted,
            "far bound checked"
        );
    }

    fn on_best_updated(
        &mut self,
        old_best: f64,
        new_distance: f64,
        candidate: Point,
        query: Point,
        accepted: bool,
    ) {
        debug!(
            candidate = ?candidate,
            query = ?query,
            new_distance,
            old_best,
            accepted,
            "best distance compared"
        );
    }
}
