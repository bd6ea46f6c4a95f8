//! Configuration errors shared by both solvers.

/// A solver configuration that cannot be run.
///
/// Raised before a run starts; solvers never fail once a valid
/// configuration has been accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    #[error("timeout must be non-negative, got {0} s")]
    InvalidTimeout(f64),
}

/// Checks that `value` is a finite, non-negative real.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeParameter { name, value })
    }
}

/// Checks that `value` is a probability.
pub(crate) fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
