// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types: node handles, split axes, and distance functions.

use kurbo::Point;

/// Identifier for a node slot in the tree arena.
///
/// A plain index rather than a generational handle: node ids never leave the
/// crate, so a stale id cannot be observed from outside.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node ids are intentionally 32-bit; a tree cannot outgrow them in practice."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Splitting axis of a tree level.
///
/// Levels alternate by depth parity, starting with x at the root.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    /// Split on the x-coordinate (even depths).
    X,
    /// Split on the y-coordinate (odd depths).
    Y,
}

impl Axis {
    /// The axis a node at `depth` splits on.
    pub(crate) const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// The coordinate of `p` along this axis.
    #[inline]
    pub(crate) fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Project `p` onto the axis-aligned splitting line through `through`.
    ///
    /// The result is the closest point to `p` (under any monotone axis-wise
    /// distance) that lies on the line, so its distance to `p` lower-bounds
    /// the distance to anything on the far side of the split.
    #[inline]
    pub(crate) fn axial_point(self, p: Point, through: Point) -> Point {
        match self {
            Self::X => Point::new(through.x, p.y),
            Self::Y => Point::new(p.x, through.y),
        }
    }
}

/// Distance function used by nearest-neighbor queries.
///
/// Implementations should return a *squared* magnitude: query radii are
/// squared before comparison, so the default of [`squared_euclidean`] makes
/// results match ordinary Euclidean distance.
pub type DistanceFn = fn(Point, Point) -> f64;

/// Squared Euclidean distance between two points, the default [`DistanceFn`].
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}
