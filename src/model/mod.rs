//! Problem instances and solver results.
//!
//! - [`Point`], [`Rectangle`]: the tunnels supplied by callers
//! - [`Line`]: a candidate `y = a·x + k`
//! - [`Best`]: the `(a, k, Z)` record every solver returns
//! - [`random_instance`]: seeded generator of axis-aligned tunnels

mod generator;
mod types;

pub use generator::{random_instance, InstanceConfig};
pub use types::{Best, Line, Point, Rectangle};
