// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree driver: construction, insertion, and nearest-neighbor queries.

use kurbo::Point;

use crate::error::TreeError;
use crate::node::Node;
use crate::observe::{NoObserver, Observer};
use crate::region::Region;

/// Options controlling a nearest-neighbor search.
///
/// Used by [`Tree::nearest_with`]; the plain [`Tree::nearest`] runs with
/// defaults.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    /// If true (the default), skip far branches whose region lower bound
    /// cannot beat the current best distance. Disabling turns the search
    /// into a full traversal with identical results; pruning is an
    /// optimization, never an approximation.
    pub prune_far: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { prune_far: true }
    }
}

/// Result of a nearest-neighbor query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// The closest stored point.
    pub point: Point,
    /// Euclidean distance from the query to `point`.
    pub distance: f64,
}

/// Per-query search state, created by [`Tree::nearest`] and threaded
/// through the descent by mutable reference.
///
/// Owning the best distance here, rather than on the tree, is what lets
/// queries take `&Tree` and run concurrently.
pub(crate) struct Search {
    pub(crate) query: Point,
    pub(crate) best_distance: f64,
    pub(crate) best_point: Option<Point>,
    pub(crate) prune_far: bool,
}

/// A midpoint-cut kd-tree over a fixed canvas region.
///
/// Points are inserted one at a time; each internal node halves its region
/// at the geometric midpoint of the depth-derived split axis (x at even
/// depths, y at odd). Insertion order shapes the tree but never changes
/// what [`Tree::nearest`] returns.
#[derive(Debug)]
pub struct Tree {
    root: Node,
    len: usize,
}

impl Tree {
    /// Create an empty tree over `canvas`.
    pub const fn new(canvas: Region) -> Self {
        Self {
            root: Node::root(canvas),
            len: 0,
        }
    }

    /// Build a tree over `canvas` by inserting `points` in sequence order.
    pub fn build(
        canvas: Region,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Self, TreeError> {
        let mut tree = Self::new(canvas);
        for p in points {
            tree.insert(p)?;
        }
        Ok(tree)
    }

    /// Number of stored points.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been inserted yet.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The canvas region the root partitions.
    pub const fn canvas(&self) -> Region {
        self.root.region()
    }

    /// The root node, for structural inspection.
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Insert one point.
    ///
    /// Fails with [`TreeError::OutsideCanvas`] for points outside the
    /// canvas, [`TreeError::DuplicatePoint`] for exact duplicates, and
    /// [`TreeError::DepthExceeded`] for near-coincident points no midpoint
    /// chain can separate. A failed insertion never stores the point and
    /// never loses a previously stored one.
    pub fn insert(&mut self, point: Point) -> Result<(), TreeError> {
        self.insert_observed(point, &mut NoObserver)
    }

    /// Insert one point, reporting newly created terminal nodes to
    /// `observer`.
    pub fn insert_observed(
        &mut self,
        point: Point,
        observer: &mut impl Observer,
    ) -> Result<(), TreeError> {
        if !self.canvas().contains(point) {
            return Err(TreeError::OutsideCanvas {
                x: point.x,
                y: point.y,
            });
        }
        self.root.insert(point, observer)?;
        self.len += 1;
        Ok(())
    }

    /// The stored point nearest to `query`, with its Euclidean distance.
    ///
    /// Fails with [`TreeError::EmptyTree`] when no point was ever
    /// inserted. Takes `&self`: each call owns its search state, so
    /// concurrent queries on one tree are safe.
    pub fn nearest(&self, query: Point) -> Result<Nearest, TreeError> {
        self.nearest_with(query, SearchOptions::default(), &mut NoObserver)
    }

    /// [`Tree::nearest`], reporting the descent to `observer`.
    pub fn nearest_observed(
        &self,
        query: Point,
        observer: &mut impl Observer,
    ) -> Result<Nearest, TreeError> {
        self.nearest_with(query, SearchOptions::default(), observer)
    }

    /// Full-form nearest-neighbor query with options and an observer.
    pub fn nearest_with(
        &self,
        query: Point,
        options: SearchOptions,
        observer: &mut impl Observer,
    ) -> Result<Nearest, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let mut search = Search {
            query,
            best_distance: f64::INFINITY,
            best_point: None,
            prune_far: options.prune_far,
        };
        self.root.find_closest(&mut search, observer)?;
        let Some(point) = search.best_point else {
            // A non-empty tree always visits at least one terminal.
            return Err(TreeError::EmptyLeaf);
        };
        Ok(Nearest {
            point,
            distance: search.best_distance,
        })
    }
}
