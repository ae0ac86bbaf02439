// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena storage, balanced construction, mutation.

use alloc::vec::Vec;
use kurbo::Point;
use smallvec::SmallVec;

use crate::point_set::PointSet;
use crate::types::{Axis, DistanceFn, NodeId, squared_euclidean};

/// One tree node. Children are owned slots; the parent link is a non-owning
/// index used only when splicing a node out during removal.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    /// The axis this node splits on (depth parity).
    pub(crate) const fn axis(&self) -> Axis {
        Axis::at_depth(self.depth)
    }
}

/// A 2-d tree over [`Point`]s.
///
/// The tree behaves as a set: duplicate insertions (by exact coordinate
/// equality) are ignored. At a node of depth `d`, points are partitioned by
/// the coordinate of axis `d mod 2`; ties may legally sit on either side of
/// a split.
///
/// Bulk construction via [`from_points`][Self::from_points] yields a balanced
/// tree of height `⌈log₂(n+1)⌉`. Later insertions and removals do **not**
/// rebalance, so adversarial mutation sequences can degrade the shape toward
/// a list; queries stay correct, only their cost grows. [`height`][Self::height]
/// exposes the current shape.
///
/// Coordinates are assumed finite (no NaNs). Debug builds assert this.
#[derive(Clone)]
pub struct Tree {
    /// Node slots; freed slots are recycled through `free_list`.
    nodes: Vec<Option<Node>>,
    free_list: Vec<usize>,
    pub(crate) root: Option<NodeId>,
    /// Mirrors the set of points reachable from `root`.
    members: PointSet,
    pub(crate) distance_fn: DistanceFn,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("slots", &total)
            .field("free_list", &self.free_list.len())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Create an empty tree with the default squared-Euclidean distance.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            members: PointSet::new(),
            distance_fn: squared_euclidean,
        }
    }

    /// Build a balanced tree from a collection of points.
    ///
    /// Duplicate points collapse to their first occurrence. The build sorts
    /// each subset by the level's axis and promotes the lower median, so the
    /// initial height is `⌈log₂(n+1)⌉`.
    pub fn from_points(points: &[Point]) -> Self {
        Self::from_points_with_distance(points, squared_euclidean)
    }

    /// Build a balanced tree using a custom distance function for
    /// nearest-neighbor queries.
    ///
    /// The function should return a squared magnitude; see
    /// [`DistanceFn`].
    pub fn from_points_with_distance(points: &[Point], distance_fn: DistanceFn) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(points.len()),
            free_list: Vec::new(),
            root: None,
            members: PointSet::new(),
            distance_fn,
        };
        let mut unique = Vec::with_capacity(points.len());
        for &p in points {
            debug_assert!(p.is_finite(), "tree points must have finite coordinates");
            if tree.members.insert(p) {
                unique.push(p);
            }
        }
        tree.root = tree.build_subtree(&mut unique, 0, None);
        tree
    }

    fn build_subtree(
        &mut self,
        points: &mut [Point],
        depth: usize,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        if points.is_empty() {
            return None;
        }
        let axis = Axis::at_depth(depth);
        // Stable sort: ties keep their original relative order, which makes
        // the median choice among equal coordinates deterministic.
        points.sort_by(|a, b| axis.coord(*a).total_cmp(&axis.coord(*b)));
        let median = (points.len() - 1) / 2;

        let id = self.alloc_node(points[median], depth, parent);
        let (before, rest) = points.split_at_mut(median);
        let left = self.build_subtree(before, depth + 1, Some(id));
        let right = self.build_subtree(&mut rest[1..], depth + 1, Some(id));
        let node = self.node_mut(id);
        node.left = left;
        node.right = right;
        Some(id)
    }

    /// Insert a point. Returns `false` (and leaves the tree unchanged) if a
    /// point with exactly these coordinates is already present.
    ///
    /// Insertion descends like a binary-search-tree insert with an
    /// alternating axis and never rebalances.
    pub fn insert(&mut self, point: Point) -> bool {
        debug_assert!(point.is_finite(), "tree points must have finite coordinates");
        if !self.members.insert(point) {
            return false;
        }
        let Some(mut cur) = self.root else {
            self.root = Some(self.alloc_node(point, 0, None));
            return true;
        };
        loop {
            let node = self.node(cur);
            let axis = node.axis();
            let depth = node.depth;
            let go_left = axis.coord(point) <= axis.coord(node.point);
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(next) => cur = next,
                None => {
                    let leaf = self.alloc_node(point, depth + 1, Some(cur));
                    let node = self.node_mut(cur);
                    if go_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return true;
                }
            }
        }
    }

    /// Remove a point. Returns `false` (no-op) if it is not present.
    ///
    /// Removing the point held by the root clears the entire tree, children
    /// and all. Otherwise the node is spliced out: its point is replaced by
    /// the axis-minimum of a subtree and that donor node is removed
    /// recursively, so the split invariant holds afterwards.
    pub fn remove(&mut self, point: Point) -> bool {
        let Some(found) = self.find_node(self.root, point) else {
            return false;
        };
        if Some(found) == self.root {
            self.clear();
            return true;
        }
        self.remove_node(found);
        self.members.remove(point);
        true
    }

    fn remove_node(&mut self, id: NodeId) {
        let node = self.node(id);
        let axis = node.axis();
        let (left, right) = (node.left, node.right);

        let donor = if let Some(right) = right {
            self.find_min(right, axis)
        } else if let Some(left) = left {
            // Promoting the left minimum leaves every remaining point of that
            // subtree at or above it on this axis, so the subtree must move
            // to the right slot to keep the split invariant.
            let node = self.node_mut(id);
            node.right = node.left.take();
            self.find_min(left, axis)
        } else {
            self.detach_leaf(id);
            return;
        };

        let donor_point = self.node(donor).point;
        self.node_mut(id).point = donor_point;
        // Each recursion strictly descends into a smaller subtree.
        self.remove_node(donor);
    }

    fn detach_leaf(&mut self, id: NodeId) {
        let parent = self
            .node(id)
            .parent
            .expect("tree invariant violated: non-root leaf without parent");
        let parent_node = self.node_mut(parent);
        if parent_node.left == Some(id) {
            parent_node.left = None;
        } else {
            parent_node.right = None;
        }
        self.free_node(id);
    }

    /// Locate the node holding `point`, descending by axis comparison.
    ///
    /// Equal coordinates may sit on either side of a split, so both branches
    /// are explored on a tie (left first, which keeps the result
    /// deterministic).
    fn find_node(&self, from: Option<NodeId>, point: Point) -> Option<NodeId> {
        let id = from?;
        let node = self.node(id);
        if node.point == point {
            return Some(id);
        }
        let axis = node.axis();
        let (candidate, split) = (axis.coord(point), axis.coord(node.point));
        if candidate <= split
            && let Some(hit) = self.find_node(node.left, point)
        {
            return Some(hit);
        }
        if candidate >= split {
            return self.find_node(node.right, point);
        }
        None
    }

    /// The node with minimum coordinate along `axis` in `subtree`.
    ///
    /// This scans the whole subtree: ordering along `axis` only holds at
    /// levels whose split axis matches, so the minimum can sit anywhere.
    fn find_min(&self, subtree: NodeId, axis: Axis) -> NodeId {
        let mut best = subtree;
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        stack.push(subtree);
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Some(left) = node.left {
                stack.push(left);
            }
            if let Some(right) = node.right {
                stack.push(right);
            }
            if axis.coord(node.point) < axis.coord(self.node(best).point) {
                best = id;
            }
        }
        best
    }

    /// Whether a point with exactly these coordinates is present.
    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(point)
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.root = None;
        self.members.clear();
    }

    /// Iterate over the stored points, in arbitrary order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().flatten().map(|n| n.point)
    }

    /// Longest root-to-leaf path, counted in nodes (0 for an empty tree).
    ///
    /// The initial balanced build gives `⌈log₂(n+1)⌉`; repeated mutation can
    /// grow this toward `n` since the tree never rebalances.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = self.node(id);
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id.idx())
            .expect("tree invariant violated: id references out-of-bounds slot")
            .as_ref()
            .expect("tree invariant violated: id references vacant slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.idx())
            .expect("tree invariant violated: id references out-of-bounds slot")
            .as_mut()
            .expect("tree invariant violated: id references vacant slot")
    }

    fn alloc_node(&mut self, point: Point, depth: usize, parent: Option<NodeId>) -> NodeId {
        let node = Node {
            point,
            depth,
            parent,
            left: None,
            right: None,
        };
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            NodeId::new(idx)
        } else {
            self.nodes.push(Some(node));
            NodeId::new(self.nodes.len() - 1)
        }
    }

    fn free_node(&mut self, id: NodeId) {
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }
}
