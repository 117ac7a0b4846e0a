// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial partition cells: recursive insertion and branch-and-bound descent.

use alloc::boxed::Box;
use kurbo::Point;

use crate::error::TreeError;
use crate::observe::{Observer, Side};
use crate::region::{Axis, Region};
use crate::tree::Search;

/// Depth cap for insertion. 64 halvings per axis exhaust the resolving
/// power of an f64 midpoint chain; descending past this depth means the
/// splits can no longer separate the colliding points.
pub(crate) const MAX_DEPTH: usize = 128;

/// One spatial partition cell.
///
/// A node is either a terminal holding at most one point, or an internal
/// node whose up-to-two children halve its region along the depth-derived
/// split axis. Children are exclusively owned; the structure is a strict
/// tree. A node's region always equals the intersection of the half-space
/// cuts of its ancestor chain.
#[derive(Debug)]
pub struct Node {
    depth: usize,
    region: Region,
    terminal: bool,
    point: Option<Point>,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    entered_from_right: bool,
}

impl Node {
    /// The empty root over the full canvas.
    pub(crate) const fn root(canvas: Region) -> Self {
        Self {
            depth: 0,
            region: canvas,
            terminal: true,
            point: None,
            left: None,
            right: None,
            entered_from_right: false,
        }
    }

    const fn leaf(depth: usize, region: Region, entered_from_right: bool, point: Point) -> Self {
        Self {
            depth,
            region,
            terminal: true,
            point: Some(point),
            left: None,
            right: None,
            entered_from_right,
        }
    }

    /// Depth below the root (the root is depth 0).
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The axis-aligned region this node partitions.
    pub const fn region(&self) -> Region {
        self.region
    }

    /// The stored point, if this node is a terminal holding one.
    pub const fn point(&self) -> Option<Point> {
        self.point
    }

    /// Whether this node is a terminal (holds at most one point, no
    /// children) rather than an internal split.
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Which side of the parent's split this node occupies. Presentation
    /// data only; the root reports `Left`.
    pub const fn entered_from(&self) -> Side {
        Side::from_take_right(self.entered_from_right)
    }

    /// The axis an internal node splits along, derived from depth alone.
    pub const fn split_axis(&self) -> Axis {
        Axis::from_depth(self.depth)
    }

    /// Left child (the low half of the split axis), if present.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Right child (the high half of the split axis), if present.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Insert `point` into the subtree rooted here.
    ///
    /// A terminal with room stores the point; an occupied terminal converts
    /// to an internal node in place, re-slotting its held point one level
    /// down before the incoming point descends. A failed insertion never
    /// loses a previously stored point, though [`TreeError::DepthExceeded`]
    /// can leave the colliding chain deepened.
    pub(crate) fn insert(
        &mut self,
        point: Point,
        observer: &mut dyn Observer,
    ) -> Result<(), TreeError> {
        if self.depth >= MAX_DEPTH {
            return Err(TreeError::DepthExceeded { depth: self.depth });
        }
        if self.terminal {
            let Some(existing) = self.point else {
                self.point = Some(point);
                return Ok(());
            };
            if existing == point {
                return Err(TreeError::DuplicatePoint {
                    x: point.x,
                    y: point.y,
                });
            }
            // Convert to an internal node; the held point transfers down
            // into a child leaf consistent with the new split.
            self.terminal = false;
            self.point = None;
            self.insert(existing, observer)?;
        }
        let axis = self.split_axis();
        let (region, take_right) = self.region.sub_region_including_point(point, axis);
        let slot = if take_right {
            &mut self.right
        } else {
            &mut self.left
        };
        match slot {
            Some(child) => child.insert(point, observer),
            None => {
                let child = Box::new(Self::leaf(self.depth + 1, region, take_right, point));
                observer.on_point_inserted(&child);
                *slot = Some(child);
                Ok(())
            }
        }
    }

    /// Branch-and-bound descent for the search context's query point.
    ///
    /// Visits the near child first so the best distance shrinks early, then
    /// the far child only when its region's lower bound could still beat
    /// the current best. Order matters for efficiency, not correctness: the
    /// prune test always reads the best distance current at check time.
    pub(crate) fn find_closest(
        &self,
        search: &mut Search,
        observer: &mut dyn Observer,
    ) -> Result<(), TreeError> {
        observer.on_node_entered(self);
        if self.terminal {
            let Some(point) = self.point else {
                return Err(TreeError::EmptyLeaf);
            };
            let distance = point.distance(search.query);
            let accepted = distance < search.best_distance;
            observer.on_best_updated(search.best_distance, distance, point, search.query, accepted);
            if accepted {
                search.best_distance = distance;
                search.best_point = Some(point);
            }
            observer.on_node_exited(self);
            return Ok(());
        }

        // Which side of this node's split the query falls on. Probing a
        // copy mirrors `cut_from_point` without touching the region.
        let axis = self.split_axis();
        let mut probe = self.region.interval(axis);
        let take_right = probe.cut_from_point(axis.coord(search.query));

        let (near, far) = if take_right {
            (self.right.as_deref(), self.left.as_deref())
        } else {
            (self.left.as_deref(), self.right.as_deref())
        };

        match near {
            Some(child) => child.find_closest(search, observer)?,
            None => observer.on_branch_empty(self, Side::from_take_right(take_right)),
        }
        match far {
            Some(child) => {
                if child.admit_far(search, observer)? {
                    child.find_closest(search, observer)?;
                }
            }
            None => observer.on_branch_empty(self, Side::from_take_right(!take_right)),
        }

        observer.on_node_exited(self);
        Ok(())
    }

    /// Lower-bound test for a far-side child: can its region still contain
    /// a point closer to the query than the best found so far?
    fn admit_far(
        &self,
        search: &mut Search,
        observer: &mut dyn Observer,
    ) -> Result<bool, TreeError> {
        // A query exactly on the split boundary is contained in both
        // halves; containment means a zero lower bound, so the subtree is
        // never pruned.
        let (closest, lower_bound) = if self.region.contains(search.query) {
            (search.query, 0.0)
        } else {
            let closest = self.region.closest_point(search.query)?;
            (closest, closest.distance(search.query))
        };
        let accepted = !search.prune_far || lower_bound < search.best_distance;
        observer.on_bound_checked(
            self,
            closest,
            search.query,
            accepted,
            search.best_distance,
            lower_bound,
        );
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::tree::Tree;

    fn canvas() -> Region {
        Region::new(Interval::new(0.0, 8.0), Interval::new(0.0, 8.0))
    }

    #[test]
    fn first_point_stays_in_the_root() {
        let mut tree = Tree::new(canvas());
        tree.insert(Point::new(1.0, 1.0)).unwrap();
        let root = tree.root();
        assert!(root.is_terminal());
        assert_eq!(root.point(), Some(Point::new(1.0, 1.0)));
        assert!(root.left().is_none() && root.right().is_none());
    }

    #[test]
    fn second_point_converts_the_root_in_place() {
        let mut tree = Tree::new(canvas());
        tree.insert(Point::new(1.0, 1.0)).unwrap();
        tree.insert(Point::new(6.0, 1.0)).unwrap();
        let root = tree.root();
        assert!(!root.is_terminal());
        assert_eq!(root.point(), None);
        // Root splits on x: 1.0 goes left of midpoint 4, 6.0 right.
        let left = root.left().expect("left leaf");
        let right = root.right().expect("right leaf");
        assert_eq!(left.point(), Some(Point::new(1.0, 1.0)));
        assert_eq!(right.point(), Some(Point::new(6.0, 1.0)));
        assert_eq!(left.depth(), 1);
        assert_eq!(left.entered_from(), Side::Left);
        assert_eq!(right.entered_from(), Side::Right);
    }

    #[test]
    fn child_regions_are_the_parent_halves() {
        let mut tree = Tree::new(canvas());
        tree.insert(Point::new(1.0, 1.0)).unwrap();
        tree.insert(Point::new(6.0, 1.0)).unwrap();
        let root = tree.root();
        let left = root.left().unwrap();
        let right = root.right().unwrap();
        assert_eq!(
            left.region(),
            Region::new(Interval::new(0.0, 4.0), Interval::new(0.0, 8.0))
        );
        assert_eq!(
            right.region(),
            Region::new(Interval::new(4.0, 8.0), Interval::new(0.0, 8.0))
        );
    }

    // Every node's region must equal the intersection of its ancestors'
    // cuts, recomputed independently from the root.
    #[test]
    fn region_invariant_holds_after_many_insertions() {
        fn check(node: &Node, expected: Region) {
            assert_eq!(node.region(), expected, "region drifted from ancestry");
            let axis = node.split_axis();
            if let Some(left) = node.left() {
                check(left, expected.sub_region(false, axis));
            }
            if let Some(right) = node.right() {
                check(right, expected.sub_region(true, axis));
            }
        }

        let points = [
            (1.0, 1.0),
            (6.5, 2.0),
            (3.0, 7.0),
            (2.2, 2.9),
            (5.1, 5.2),
            (0.4, 6.6),
            (7.9, 0.1),
            (4.5, 4.4),
        ];
        let mut tree = Tree::new(canvas());
        for (x, y) in points {
            tree.insert(Point::new(x, y)).unwrap();
        }
        check(tree.root(), canvas());
    }

    #[test]
    fn duplicate_insertion_fails_without_mutating() {
        let mut tree = Tree::new(canvas());
        tree.insert(Point::new(2.0, 3.0)).unwrap();
        tree.insert(Point::new(5.0, 5.0)).unwrap();
        let err = tree.insert(Point::new(2.0, 3.0)).unwrap_err();
        assert_eq!(err, TreeError::DuplicatePoint { x: 2.0, y: 3.0 });
        assert_eq!(tree.len(), 2);
        // The duplicate's target leaf is untouched.
        assert_eq!(tree.nearest(Point::new(2.0, 3.0)).unwrap().distance, 0.0);
    }

    #[test]
    fn near_coincident_points_hit_the_depth_cap() {
        // A canvas this wide needs ~70 x-cuts before any split midpoint can
        // land between two points one ulp apart near 1.0, which is past the
        // cap of 64 cuts per axis.
        let side = 2.0_f64.powi(70);
        let wide = Region::new(Interval::new(0.0, side), Interval::new(0.0, side));
        let mut tree = Tree::new(wide);
        let base = Point::new(1.0, 1.0);
        let nudged = Point::new(f64::from_bits(1.0_f64.to_bits() + 1), 1.0);
        tree.insert(base).unwrap();
        assert!(matches!(
            tree.insert(nudged),
            Err(TreeError::DepthExceeded { .. })
        ));
        // The originally stored point survives the failed insertion.
        assert_eq!(tree.nearest(base).unwrap().point, base);
    }
}
