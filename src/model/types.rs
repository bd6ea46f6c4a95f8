//! Instance and result records shared by both solvers.

use std::fmt;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A tunnel: a convex quadrilateral with an instance-unique id.
///
/// Corners are stored in a consistent winding order (bottom-left,
/// bottom-right, top-right, top-left for axis-aligned tunnels). Nothing
/// downstream relies on the sides being axis-aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub id: u32,
    pub corners: [Point; 4],
}

impl Rectangle {
    pub fn new(id: u32, corners: [Point; 4]) -> Self {
        Self { id, corners }
    }

    /// Builds an axis-aligned tunnel from its extreme coordinates.
    pub fn axis_aligned(id: u32, x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::new(
            id,
            [
                Point::new(x_min, y_min),
                Point::new(x_max, y_min),
                Point::new(x_max, y_max),
                Point::new(x_min, y_max),
            ],
        )
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1, p2, p3] = &self.corners;
        writeln!(
            f,
            "id={:>2} | ({:.2}, {:.2}) ({:.2}, {:.2})",
            self.id, p0.x, p0.y, p1.x, p1.y
        )?;
        write!(
            f,
            "{:9}({:.2}, {:.2}) ({:.2}, {:.2})",
            "", p2.x, p2.y, p3.x, p3.y
        )
    }
}

/// A non-vertical line `y = a·x + k`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Slope.
    pub a: f64,
    /// Intercept.
    pub k: f64,
}

impl Line {
    pub const fn new(a: f64, k: f64) -> Self {
        Self { a, k }
    }

    /// The line through two points, or `None` when they share an x
    /// coordinate (vertical lines are not representable).
    pub fn through(p: Point, q: Point) -> Option<Self> {
        if p.x == q.x {
            return None;
        }
        let a = (q.y - p.y) / (q.x - p.x);
        Some(Self::new(a, p.y - a * p.x))
    }
}

/// The best line known to a solver and the number of tunnels it crosses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Best {
    pub a: f64,
    pub k: f64,
    /// Fitness: how many tunnels the line intersects.
    pub z: usize,
}

impl Best {
    /// The result reported when no candidate line exists.
    pub const EMPTY: Best = Best {
        a: 0.0,
        k: 0.0,
        z: 0,
    };

    pub fn new(line: Line, z: usize) -> Self {
        Self {
            a: line.a,
            k: line.k,
            z,
        }
    }

    /// `(a, k, Z)` as a tuple.
    pub fn into_tuple(self) -> (f64, f64, usize) {
        (self.a, self.k, self.z)
    }
}
