//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the whole run:
//! initialization → (selection → crossover → mutation → replacement) × G.
//!
//! Each generation is rebuilt from scratch; nothing from the previous
//! population survives into it. The best individual ever seen is kept as a
//! separate owned copy and is what the run returns.

use super::config::GaParams;
use super::selection::HalvingTournament;
use super::types::{GaProblem, Individual};
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because the stagnation limit was reached.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after initialization and after each generation.
    pub fitness_history: Vec<I::Fitness>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let params = GaParams::default().with_seed(42);
/// let result = GaRunner::run(&problem, &params);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// # Panics
    /// Panics if the parameters are invalid (call [`GaParams::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, params: &GaParams) -> GaResult<P::Individual> {
        Self::run_with_cancel(problem, params, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is only checked between generations; a generation that has
    /// started always completes.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        params: &GaParams,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult<P::Individual> {
        params.validate().expect("invalid GaParams");

        let mut rng = create_rng(params.seed);
        let m = params.population_size;

        // 1. Initialize and evaluate
        let mut population: Vec<P::Individual> = (0..m)
            .map(|_| {
                let mut ind = problem.create_individual(&mut rng);
                ind.set_fitness(problem.evaluate(&ind));
                ind
            })
            .collect();

        // 2. Track best-ever separately from the population
        let mut best = find_best(&population).clone();
        let mut fitness_history = vec![best.fitness()];

        log::debug!(
            "ga start: m={}, G={}, g={}, initial best {:?}",
            m,
            params.max_generations,
            params.stagnation_limit,
            best.fitness()
        );

        let mut tournament = HalvingTournament::new(m);
        let mut generation = 0usize;
        let mut stagnation = 0usize;
        let mut cancelled = false;

        // 3. Evolutionary loop
        while generation < params.max_generations && stagnation < params.stagnation_limit {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            let mut next_gen = Vec::with_capacity(m);
            while next_gen.len() < m {
                let (p1, p2) = tournament.select(&population, &mut rng);
                let mut child = problem.crossover(&population[p1], &population[p2], &mut rng);
                problem.mutate(&mut child, &mut rng);
                child.set_fitness(problem.evaluate(&child));
                next_gen.push(child);
            }
            population = next_gen;

            let gen_best = find_best(&population);
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
            }
            generation += 1;
            fitness_history.push(best.fitness());

            log::trace!(
                "generation {generation}: generation best {:?}, best-ever {:?}, stagnation {stagnation}",
                gen_best.fitness(),
                best.fitness()
            );

            problem.on_generation(generation, best.fitness(), &population);
        }

        let stagnated = !cancelled && stagnation >= params.stagnation_limit;
        log::debug!(
            "ga finished after {generation} generations (stagnated: {stagnated}, cancelled: {cancelled}), best {:?}",
            best.fitness()
        );

        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: generation,
            stagnated,
            cancelled,
            fitness_history,
        }
    }
}

/// The fittest individual; the earliest one wins ties.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() > best.fitness() {
            best = ind;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
