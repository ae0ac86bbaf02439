// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact-value membership set for points.

use hashbrown::HashSet;
use kurbo::Point;

/// A set of points keyed on exact coordinate values.
///
/// The tree keeps one of these mirroring its contents, both to collapse
/// duplicate insertions and to answer [`contains`][Self::contains] without a
/// traversal. Keys are the raw bit patterns of the coordinate pair, with
/// negative zero collapsed onto zero so membership agrees with `f64`
/// equality (`-0.0 == 0.0`).
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    keys: HashSet<PointKey>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct PointKey(u64, u64);

impl PointKey {
    fn new(p: Point) -> Self {
        Self(canonical_bits(p.x), canonical_bits(p.y))
    }

    fn point(self) -> Point {
        Point::new(f64::from_bits(self.0), f64::from_bits(self.1))
    }
}

fn canonical_bits(v: f64) -> u64 {
    // `-0.0 == 0.0` under f64 comparison; collapse both onto one key.
    if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }
}

impl PointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        self.keys.insert(PointKey::new(p))
    }

    /// Remove a point. Returns `false` if it was not present.
    pub fn remove(&mut self, p: Point) -> bool {
        self.keys.remove(&PointKey::new(p))
    }

    /// Whether the set holds a point with exactly these coordinates.
    pub fn contains(&self, p: Point) -> bool {
        self.keys.contains(&PointKey::new(p))
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Iterate over the points in the set, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.keys.iter().map(|k| k.point())
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}
