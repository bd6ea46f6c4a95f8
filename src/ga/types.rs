//! Core trait definitions for the GA.
//!
//! [`Individual`] and [`GaProblem`] separate the evolutionary loop in
//! [`GaRunner`](super::GaRunner) from what is being evolved.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Higher fitness is better (maximization). Built-in implementations
/// exist for `usize` (hit counts) and `f64`.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {}

impl Fitness for usize {}
impl Fitness for f64 {}

/// A candidate solution carrying its own fitness.
///
/// The runner calls [`GaProblem::evaluate`] once per new individual and
/// stores the value via [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the stored fitness.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to draw a random individual
/// 2. **Evaluation**: how to score one
/// 3. **Crossover**: how two parents produce one child
/// 4. **Mutation**: how a child is perturbed
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Higher is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones `parent2`.
    fn crossover<R: Rng>(
        &self,
        _parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent2.clone()
    }

    /// Mutates a child in place.
    ///
    /// Called for every child; any mutation probability is the problem's
    /// own concern. The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation.
    ///
    /// Receives the 1-based generation number, the best-ever fitness and
    /// the population that just replaced the previous one. The default
    /// implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
        _population: &[Self::Individual],
    ) {
    }
}
