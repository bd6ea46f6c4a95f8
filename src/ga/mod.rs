//! Genetic Algorithm (GA).
//!
//! Evolves a population of lines `(a, k)` towards the one that crosses the
//! most tunnels. The loop itself is generic over [`GaProblem`]; the line
//! search is [`LineProblem`], wrapped by the [`GeneticAlgorithm`] facade.
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution carrying its fitness
//! - [`GaProblem`]: initialization, evaluation, crossover and mutation
//!
//! # Key Types
//!
//! - [`GaParams`]: population size, budgets, operator settings, seed
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual plus run statistics
//! - [`HalvingTournament`]: two parents per shuffle, one from each half
//!
//! # Submodules
//!
//! - [`operators`]: extrapolation crossover and uniform perturbation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::GaParams;
pub use problem::{GeneticAlgorithm, LineIndividual, LineProblem, INTERCEPT_RANGE, SLOPE_RANGE};
pub use runner::{GaResult, GaRunner};
pub use selection::HalvingTournament;
pub use types::{Fitness, GaProblem, Individual};
