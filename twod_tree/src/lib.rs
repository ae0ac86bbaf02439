// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Twod Tree: a Kurbo-native 2-d tree (a kd-tree specialized to two axes).
//!
//! Twod Tree is a reusable building block for planar point queries.
//!
//! - Balanced bulk construction from a point collection (duplicates collapse).
//! - Point insertion and removal, with subtree repair on delete.
//! - Inclusive axis-aligned range queries ([`Tree::range_search`]).
//! - Radius-bounded nearest-neighbor queries with an optional result cap
//!   ([`Tree::nearest_neighbors`]), under a configurable distance function.
//!
//! Points are [`kurbo::Point`]s and the tree treats them as exact values:
//! two points are the same entry iff both coordinates compare equal.
//! A [`PointSet`] mirrors the tree's contents so duplicate insertions and
//! membership checks never need a traversal.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use twod_tree::Tree;
//!
//! let mut tree = Tree::from_points(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 3.0),
//!     Point::new(-1.0, 1.0),
//! ]);
//! tree.insert(Point::new(4.0, 4.0));
//!
//! // Inclusive rectangle, corners in either order.
//! let hits = tree.range_search(Point::new(2.5, 3.5), Point::new(0.0, 0.0));
//! assert_eq!(hits.len(), 2); // (0,0) on the boundary, and (2,3)
//!
//! // Everything within distance 3 of (1,1), closest first.
//! let near = tree.nearest_neighbors(Point::new(1.0, 1.0), 3.0, None);
//! assert_eq!(near.len(), 3);
//! assert_eq!(near[0], Point::new(0.0, 0.0));
//! ```
//!
//! # Shape and mutation
//!
//! The initial build is balanced (height `⌈log₂(n+1)⌉`). Insertions and
//! removals never rebalance, so long adversarial mutation sequences can
//! degrade the shape toward a list; queries stay correct, only their cost
//! grows. [`Tree::height`] exposes the current shape. Removal finds a
//! replacement by scanning a whole subtree for an axis minimum, so deletes
//! are O(subtree) in the worst case. These are standard kd-tree trade-offs.
//!
//! # Float semantics
//!
//! This crate assumes no NaNs and no infinities in point coordinates. Debug
//! builds assert; release builds do not validate.
//!
//! # Concurrency
//!
//! Operations are synchronous and single-threaded; the tree defines no
//! internal locking. Callers sharing a tree across threads must serialize
//! mutations relative to each other and to queries.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod point_set;
mod query;
mod tree;
mod types;

pub use point_set::PointSet;
pub use tree::Tree;
pub use types::{DistanceFn, squared_euclidean};
