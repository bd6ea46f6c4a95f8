//! Partial enumeration (PE).
//!
//! A bounded brute-force search: every line through one corner of each of
//! two distinct tunnels is scored against all tunnels, and the best one
//! seen before the budget runs out is returned.
//!
//! # Key Types
//!
//! - [`PeConfig`]: timeout and vertex-pair budget
//! - [`PeRunner`]: executes the enumeration
//! - [`PeResult`]: best line plus pair count, runtime and [`StopReason`]
//! - [`solve`]: tuple-returning shorthand

mod config;
mod runner;

pub use config::PeConfig;
pub use runner::{solve, PeResult, PeRunner, StopReason};
