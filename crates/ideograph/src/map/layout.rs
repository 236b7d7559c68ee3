//! Radial placement for newly created child nodes
//!
//! The circle around a parent is divided into a fixed number of sectors;
//! each successive child of the same parent takes the next sector at a
//! fixed radius. Placement is a pure function of the parent position and
//! the parent's current child count: it never inspects the rest of the
//! graph and performs no collision avoidance. Once every sector is taken,
//! further children wrap around and reuse earlier angles; siblings beyond
//! the sector count therefore overlap, which is the defined behavior of
//! the fixed-sector scheme.

use std::f64::consts::PI;

use crate::core::Point;

/// Number of fixed sectors around a parent
pub const SECTOR_COUNT: usize = 8;

/// Distance from parent to child, in diagram-space units (zoom-independent)
pub const PLACEMENT_RADIUS: f64 = 150.0;

/// Compute the position of a parent's next child
///
/// `existing_children` is the number of children the parent already has;
/// the new child is placed in sector `existing_children + 1`.
pub fn place(parent: Point, existing_children: usize) -> Point {
    let angle = (existing_children as f64 + 1.0) * (2.0 * PI / SECTOR_COUNT as f64);

    Point::new(
        parent.x + PLACEMENT_RADIUS * angle.cos(),
        parent.y + PLACEMENT_RADIUS * angle.sin(),
    )
}
