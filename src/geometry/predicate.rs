//! Line/tunnel intersection test.
//!
//! For each corner `(x, y)` the signed vertical offset `y − a·x − k` is
//! positive above the line and negative below it. A line misses a convex
//! quadrilateral exactly when all four offsets share a strict sign.
//!
//! The comparison is exact: no epsilon is applied, and a corner lying on
//! the line (offset `0.0`) counts as a hit. Introducing a tolerance would
//! change which tunnels are counted near the boundary.

use crate::model::{Line, Point, Rectangle};

/// A shape described by four corners in a consistent convex winding order.
///
/// The predicate only needs the corners, so solvers work with any type
/// that can produce them.
pub trait Quad {
    fn corners(&self) -> [Point; 4];
}

impl Quad for Rectangle {
    #[inline]
    fn corners(&self) -> [Point; 4] {
        self.corners
    }
}

impl Quad for [Point; 4] {
    #[inline]
    fn corners(&self) -> [Point; 4] {
        *self
    }
}

impl<Q: Quad + ?Sized> Quad for &Q {
    #[inline]
    fn corners(&self) -> [Point; 4] {
        (**self).corners()
    }
}

/// Returns `true` if `y = a·x + k` touches the boundary or interior of `shape`.
///
/// # Complexity
/// O(1)
#[inline]
pub fn intersects<Q: Quad + ?Sized>(shape: &Q, a: f64, k: f64) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in shape.corners() {
        let s = p.y - a * p.x - k;
        min = min.min(s);
        max = max.max(s);
    }
    min <= 0.0 && max >= 0.0
}

/// [`intersects`] for a [`Line`].
#[inline]
pub fn line_intersects<Q: Quad + ?Sized>(shape: &Q, line: Line) -> bool {
    intersects(shape, line.a, line.k)
}

/// Number of shapes crossed by `y = a·x + k` (the fitness `Z`).
///
/// # Complexity
/// O(n)
pub fn fitness<Q: Quad>(shapes: &[Q], a: f64, k: f64) -> usize {
    shapes.iter().filter(|s| intersects(*s, a, k)).count()
}
