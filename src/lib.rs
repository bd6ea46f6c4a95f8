//! Finding the straight line that crosses the most tunnels.
//!
//! A tunnel is a convex quadrilateral in the plane (usually an
//! axis-aligned rectangle). Given a set of them, the solvers search for a
//! non-vertical line `y = a·x + k` that intersects as many as possible.
//!
//! - **Partial Enumeration (PE)**: scores every line through one corner of
//!   each of two distinct tunnels, under a timeout and a pair budget.
//! - **Genetic Algorithm (GA)**: evolves a population of `(a, k)` pairs
//!   with halving tournaments, extrapolation crossover and perturbation
//!   mutation, stopping on a generation or stagnation limit.
//!
//! Both solvers share the exact sign-based predicate in [`geometry`] and
//! return a [`Best`](model::Best) record `(a, k, Z)`.
//!
//! # Example
//!
//! ```
//! use tunnel_line::enumeration;
//! use tunnel_line::ga::{GaParams, GeneticAlgorithm};
//! use tunnel_line::model::{random_instance, InstanceConfig};
//!
//! let tunnels = random_instance(8, &InstanceConfig::default(), Some(1));
//!
//! let (_, _, z_pe) = enumeration::solve(&tunnels, 1.0, None).unwrap();
//! let best = GeneticAlgorithm::new(&tunnels, GaParams::default().with_seed(7))
//!     .unwrap()
//!     .run();
//! assert!(z_pe <= 8 && best.z <= 8);
//! ```
//!
//! Both solvers are single-threaded and deterministic: PE always, GA for a
//! given seed.

pub mod enumeration;
pub mod error;
pub mod ga;
pub mod geometry;
pub mod model;
pub mod random;

pub use error::ConfigError;
