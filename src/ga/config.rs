//! GA parameters.
//!
//! [`GaParams`] holds everything that controls one evolutionary run.

use crate::error::{non_negative, probability, ConfigError};

/// Parameters of the line-search genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tunnel_line::ga::GaParams;
///
/// let params = GaParams::default();
/// assert_eq!(params.population_size, 50);
/// assert_eq!(params.max_generations, 100);
/// assert_eq!(params.stagnation_limit, 15);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tunnel_line::ga::GaParams;
///
/// let params = GaParams::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_stagnation_limit(10)
///     .with_seed(123);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaParams {
    /// Number of candidates per generation (`m`). Must be at least 2.
    pub population_size: usize,

    /// Maximum number of generations (`G`).
    ///
    /// With 0 the initial population's best is returned.
    pub max_generations: usize,

    /// Per-gene mutation probability (`p`), in `[0, 1]`.
    pub mutation_probability: f64,

    /// Generations without improvement before stopping (`g`).
    ///
    /// With 0 the run stops before the first generation.
    pub stagnation_limit: usize,

    /// Crossover extrapolation factor (`k_off`).
    ///
    /// A child's gene is drawn around the second parent's value, within
    /// `factor` times the distance between the parents.
    pub crossover_factor: f64,

    /// Mutation step bound for the slope (`d_a`).
    pub slope_step: f64,

    /// Mutation step bound for the intercept (`d_k`).
    pub intercept_step: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_probability: 0.2,
            stagnation_limit: 15,
            crossover_factor: 0.3,
            slope_step: 0.5,
            intercept_step: 1.0,
            seed: None,
        }
    }
}

impl GaParams {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the crossover extrapolation factor.
    pub fn with_crossover_factor(mut self, factor: f64) -> Self {
        self.crossover_factor = factor;
        self
    }

    /// Sets the slope and intercept mutation step bounds.
    pub fn with_mutation_steps(mut self, slope: f64, intercept: f64) -> Self {
        self.slope_step = slope;
        self.intercept_step = intercept;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        probability("mutation_probability", self.mutation_probability)?;
        non_negative("crossover_factor", self.crossover_factor)?;
        non_negative("slope_step", self.slope_step)?;
        non_negative("intercept_step", self.intercept_step)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GaParams::default();
        assert_eq!(params.population_size, 50);
        assert_eq!(params.max_generations, 100);
        assert!((params.mutation_probability - 0.2).abs() < 1e-12);
        assert_eq!(params.stagnation_limit, 15);
        assert!((params.crossover_factor - 0.3).abs() < 1e-12);
        assert!((params.slope_step - 0.5).abs() < 1e-12);
        assert!((params.intercept_step - 1.0).abs() < 1e-12);
        assert!(params.seed.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let params = GaParams::default()
            .with_population_size(30)
            .with_max_generations(50)
            .with_mutation_probability(0.1)
            .with_stagnation_limit(10)
            .with_crossover_factor(0.5)
            .with_mutation_steps(0.25, 2.0)
            .with_seed(123);

        assert_eq!(params.population_size, 30);
        assert_eq!(params.max_generations, 50);
        assert!((params.mutation_probability - 0.1).abs() < 1e-12);
        assert_eq!(params.stagnation_limit, 10);
        assert!((params.crossover_factor - 0.5).abs() < 1e-12);
        assert!((params.slope_step - 0.25).abs() < 1e-12);
        assert!((params.intercept_step - 2.0).abs() < 1e-12);
        assert_eq!(params.seed, Some(123));
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let params = GaParams::default().with_population_size(n);
            assert_eq!(params.validate(), Err(ConfigError::PopulationTooSmall(n)));
        }
        assert!(GaParams::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_probability() {
        assert!(GaParams::default()
            .with_mutation_probability(-0.1)
            .validate()
            .is_err());
        assert!(GaParams::default()
            .with_mutation_probability(1.1)
            .validate()
            .is_err());
        assert!(GaParams::default()
            .with_mutation_probability(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_negative_steps() {
        assert!(GaParams::default()
            .with_crossover_factor(-0.3)
            .validate()
            .is_err());
        assert!(GaParams::default()
            .with_mutation_steps(-1.0, 1.0)
            .validate()
            .is_err());
        assert!(GaParams::default()
            .with_mutation_steps(0.5, f64::NAN)
            .validate()
            .is_err());
        assert!(GaParams::default()
            .with_mutation_steps(0.0, 0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_limits_are_valid() {
        let params = GaParams::default()
            .with_max_generations(0)
            .with_stagnation_limit(0);
        assert!(params.validate().is_ok());
    }
}
