//! Geometric predicate shared by the solvers.
//!
//! - [`Quad`]: anything with four ordered convex corners
//! - [`intersects`]: exact sign test of a line against a [`Quad`]
//! - [`fitness`]: how many shapes a line crosses

mod predicate;

pub use predicate::{fitness, intersects, line_intersects, Quad};
