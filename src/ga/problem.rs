//! The line search expressed as a [`GaProblem`].

use super::config::GaParams;
use super::operators::{extrapolation_crossover, uniform_perturbation};
use super::runner::{GaResult, GaRunner};
use super::types::{GaProblem, Individual};
use crate::error::ConfigError;
use crate::geometry::{fitness, Quad};
use crate::model::{Best, Line};
use crate::random::uniform;
use rand::Rng;

/// Range of initial slopes.
///
/// The initial population is drawn from fixed ranges; instances far from
/// the origin or much larger than ~100 units should be rescaled by the
/// caller first.
pub const SLOPE_RANGE: (f64, f64) = (-5.0, 5.0);

/// Range of initial intercepts.
pub const INTERCEPT_RANGE: (f64, f64) = (-100.0, 100.0);

/// A candidate line with its hit count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIndividual {
    pub line: Line,
    pub hits: usize,
}

impl LineIndividual {
    pub fn new(line: Line) -> Self {
        Self { line, hits: 0 }
    }

    pub fn to_best(&self) -> Best {
        Best::new(self.line, self.hits)
    }
}

impl Individual for LineIndividual {
    type Fitness = usize;

    fn fitness(&self) -> usize {
        self.hits
    }

    fn set_fitness(&mut self, fitness: usize) {
        self.hits = fitness;
    }
}

/// Evolves lines `(a, k)` to cross as many shapes as possible.
#[derive(Debug, Clone)]
pub struct LineProblem<'a, Q: Quad> {
    shapes: &'a [Q],
    crossover_factor: f64,
    slope_step: f64,
    intercept_step: f64,
    mutation_probability: f64,
}

impl<'a, Q: Quad> LineProblem<'a, Q> {
    /// Takes the operator settings from `params`.
    pub fn new(shapes: &'a [Q], params: &GaParams) -> Self {
        Self {
            shapes,
            crossover_factor: params.crossover_factor,
            slope_step: params.slope_step,
            intercept_step: params.intercept_step,
            mutation_probability: params.mutation_probability,
        }
    }
}

impl<Q: Quad> GaProblem for LineProblem<'_, Q> {
    type Individual = LineIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> LineIndividual {
        let a = uniform(rng, SLOPE_RANGE.0, SLOPE_RANGE.1);
        let k = uniform(rng, INTERCEPT_RANGE.0, INTERCEPT_RANGE.1);
        LineIndividual::new(Line::new(a, k))
    }

    fn evaluate(&self, ind: &LineIndividual) -> usize {
        fitness(self.shapes, ind.line.a, ind.line.k)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &LineIndividual,
        parent2: &LineIndividual,
        rng: &mut R,
    ) -> LineIndividual {
        let (l1, l2) = (parent1.line, parent2.line);
        let a = extrapolation_crossover(l1.a, l2.a, self.crossover_factor, rng);
        let k = extrapolation_crossover(l1.k, l2.k, self.crossover_factor, rng);
        LineIndividual::new(Line::new(a, k))
    }

    fn mutate<R: Rng>(&self, ind: &mut LineIndividual, rng: &mut R) {
        let p = self.mutation_probability;
        ind.line.a = uniform_perturbation(ind.line.a, self.slope_step, p, rng);
        ind.line.k = uniform_perturbation(ind.line.k, self.intercept_step, p, rng);
    }
}

/// Genetic algorithm over a fixed set of shapes.
///
/// The seed is fixed when the solver is built (drawn at random if
/// `params.seed` is `None`), so every [`run`](Self::run) of one solver
/// replays the same evolution.
///
/// ```
/// use tunnel_line::ga::{GaParams, GeneticAlgorithm};
/// use tunnel_line::model::{random_instance, InstanceConfig};
///
/// let tunnels = random_instance(6, &InstanceConfig::default(), Some(2));
/// let params = GaParams::default().with_seed(123);
/// let ga = GeneticAlgorithm::new(&tunnels, params).unwrap();
/// let best = ga.run();
/// assert!(best.z <= 6);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<'a, Q: Quad> {
    problem: LineProblem<'a, Q>,
    params: GaParams,
}

impl<'a, Q: Quad> GeneticAlgorithm<'a, Q> {
    /// Validates `params` and fixes the seed.
    pub fn new(shapes: &'a [Q], mut params: GaParams) -> Result<Self, ConfigError> {
        params.validate()?;
        params.seed = Some(params.seed.unwrap_or_else(rand::random));
        Ok(Self {
            problem: LineProblem::new(shapes, &params),
            params,
        })
    }

    /// The seed every run of this solver uses.
    pub fn seed(&self) -> u64 {
        self.params.seed.unwrap_or_default()
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// Runs the GA and returns the best line ever seen.
    pub fn run(&self) -> Best {
        self.run_detailed().best.to_best()
    }

    /// Runs the GA and returns the full result with its statistics.
    pub fn run_detailed(&self) -> GaResult<LineIndividual> {
        GaRunner::run(&self.problem, &self.params)
    }
}
