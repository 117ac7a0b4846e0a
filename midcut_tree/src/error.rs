// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tree construction and queries.

use thiserror::Error;

/// Errors surfaced by insertion and nearest-neighbor queries.
///
/// Every variant is a programming-contract violation, surfaced fail-fast at
/// the call that detects it; none are retryable or recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TreeError {
    /// [`Region::closest_point`](crate::Region::closest_point) was called
    /// with a point inside the region, where "closest point" degenerates.
    #[error("closest-point query for ({x}, {y}) inside the region")]
    QueryInsideRegion {
        /// X coordinate of the offending point.
        x: f64,
        /// Y coordinate of the offending point.
        y: f64,
    },

    /// A terminal node was visited by a search while holding no point.
    /// Only reachable by descending into a tree before any insertion.
    #[error("terminal node holds no point")]
    EmptyLeaf,

    /// A nearest-neighbor query was issued before any point was inserted.
    #[error("nearest-neighbor query on an empty tree")]
    EmptyTree,

    /// The inserted point exactly equals one already stored. Coincident
    /// points cannot be separated by any midpoint split, so insertion would
    /// recurse without bound; the tree refuses them instead of silently
    /// deduplicating.
    #[error("point ({x}, {y}) is already stored")]
    DuplicatePoint {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },

    /// Insertion descended past the maximum depth. Happens only for
    /// near-coincident points that f64 midpoint chains can no longer
    /// separate.
    #[error("insertion descended past depth {depth}")]
    DepthExceeded {
        /// Depth at which the descent was cut off.
        depth: usize,
    },

    /// The inserted point lies outside the canvas region. Every stored
    /// point must lie inside its node's region or the search lower bound
    /// becomes unsound.
    #[error("point ({x}, {y}) lies outside the canvas")]
    OutsideCanvas {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },
}
