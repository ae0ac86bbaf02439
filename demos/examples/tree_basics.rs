// Copyright 2025 the Twod Tree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2-d tree basics.
//!
//! Build a small tree, run a range and a nearest-neighbor query, then mutate.
//!
//! Run:
//! - `cargo run -p twod_tree_demos --example tree_basics`

use kurbo::Point;
use twod_tree::Tree;

fn main() {
    let points = [
        Point::new(5.5, 0.0),
        Point::new(1.0, 5.0),
        Point::new(5.0, 4.0),
        Point::new(3.0, 1.0),
        Point::new(1.0, 8.0),
        Point::new(3.0, 4.0),
        Point::new(3.0, 2.0),
        Point::new(0.0, 2.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 3.0),
        Point::new(4.0, 6.0),
        Point::new(0.0, 9.0),
        Point::new(1.0, 6.0),
        Point::new(4.0, 5.0),
        Point::new(2.0, 9.0),
    ];

    let mut tree = Tree::from_points(&points);
    println!("built: {tree:?}");

    let in_box = tree.range_search(Point::new(0.0, 6.5), Point::new(2.0, 2.5));
    println!("points in [0,2] x [2.5,6.5]: {in_box:?}");

    let near = tree.nearest_neighbors(Point::new(1.0, 4.0), 5.0, Some(4));
    println!("4 closest within distance 5 of (1,4): {near:?}");

    tree.insert(Point::new(-1.0, 1.0));
    tree.remove(Point::new(0.0, 2.0));
    let near = tree.nearest_neighbors(Point::new(0.5, -0.5), 3.2, Some(2));
    println!("after mutation, 2 closest to (0.5,-0.5): {near:?}");
}
