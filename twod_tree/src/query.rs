// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query engine: inclusive range search and radius-bounded nearest-neighbor
//! search, both explicit-stack traversals with axis-aware pruning.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::tree::Tree;
use crate::types::{Axis, NodeId};

/// Inclusive containment; `Rect::from_points` guarantees `x0 <= x1`, `y0 <= y1`.
fn contains_inclusive(rect: &Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

const fn rect_min(rect: &Rect, axis: Axis) -> f64 {
    match axis {
        Axis::X => rect.x0,
        Axis::Y => rect.y0,
    }
}

const fn rect_max(rect: &Rect, axis: Axis) -> f64 {
    match axis {
        Axis::X => rect.x1,
        Axis::Y => rect.y1,
    }
}

impl Tree {
    /// All stored points inside the axis-aligned rectangle with opposite
    /// corners `corner1` and `corner2`, boundary included.
    ///
    /// Corners may be given in either order. The result has set semantics
    /// (no duplicates) and arbitrary order.
    pub fn range_search(&self, corner1: Point, corner2: Point) -> Vec<Point> {
        let rect = Rect::from_points(corner1, corner2);
        let mut out = Vec::new();
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            let axis = node.axis();
            if contains_inclusive(&rect, node.point) {
                out.push(node.point);
            }
            // Left holds coordinates <= the split, right holds >=; a branch
            // can only contain hits if the rectangle reaches its side.
            let split = axis.coord(node.point);
            if let Some(left) = node.left
                && rect_min(&rect, axis) <= split
            {
                stack.push(left);
            }
            if let Some(right) = node.right
                && rect_max(&rect, axis) >= split
            {
                stack.push(right);
            }
        }
        out
    }

    /// All stored points within `radius` of `center` under the tree's
    /// distance function, ascending by distance, truncated to `limit` results
    /// when one is given.
    ///
    /// The distance function returns squared magnitudes, so candidates are
    /// compared against `radius * radius`; with the default squared-Euclidean
    /// function the radius is an ordinary Euclidean distance.
    pub fn nearest_neighbors(
        &self,
        center: Point,
        radius: f64,
        limit: Option<usize>,
    ) -> Vec<Point> {
        let max_distance = radius * radius;
        let distance = self.distance_fn;
        let mut found: Vec<(f64, Point)> = Vec::new();
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            let axis = node.axis();

            let d = distance(center, node.point);
            if d <= max_distance {
                found.push((d, node.point));
            }

            // Always descend toward the query's side of the split. The far
            // side can still hold a candidate whenever the splitting line
            // itself is within the radius.
            let query = axis.coord(center);
            let split = axis.coord(node.point);
            let crosses = distance(center, axis.axial_point(center, node.point)) <= max_distance;
            if let Some(left) = node.left
                && (query <= split || crosses)
            {
                stack.push(left);
            }
            if let Some(right) = node.right
                && (query >= split || crosses)
            {
                stack.push(right);
            }
        }

        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(limit) = limit {
            found.truncate(limit);
        }
        found.into_iter().map(|(_, p)| p).collect()
    }
}
