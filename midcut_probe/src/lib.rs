// Copyright 2025 the Midcut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=midcut_probe --heading-base-level=0

//! Midcut Probe: observer toolkit for midcut trees.
//!
//! ## Overview
//!
//! The core tree reports its progress through the
//! [`Observer`](midcut_tree::Observer) hooks but implements no observer
//! itself. This crate supplies the implementations a presentation or debug
//! layer usually wants:
//!
//! - [`Recorder`]: collects hook invocations as owned [`Event`] snapshots,
//!   filtered by an [`EventMask`], with counters for visits, prunes, and
//!   best-distance updates.
//! - `Trace` (behind the `tracing` feature): logs every hook as a
//!   structured `tracing` event.
//!
//! Events carry plain copies of node data ([`NodeSnapshot`]) rather than
//! borrows, so a log can be inspected long after the search returned.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use midcut_tree::{Region, Tree};
//! use midcut_probe::{EventMask, Recorder};
//!
//! let canvas = Region::from_rect(Rect::new(0.0, 0.0, 8.0, 8.0));
//! let tree = Tree::build(
//!     canvas,
//!     [Point::new(1.0, 1.0), Point::new(6.0, 6.0), Point::new(6.5, 1.0)],
//! )
//! .unwrap();
//!
//! let mut rec = Recorder::with_mask(EventMask::BOUND_CHECKED | EventMask::BEST_UPDATED);
//! let hit = tree.nearest_observed(Point::new(1.3, 1.2), &mut rec).unwrap();
//! assert_eq!(hit.point, Point::new(1.0, 1.0));
//! assert!(rec.bounds_checked() > 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod events;
pub mod record;
#[cfg(feature = "tracing")]
pub mod trace;

pub use events::{Event, EventMask, NodeSnapshot};
pub use record::Recorder;
#[cfg(feature = "tracing")]
pub use trace::Trace;
