//! Partial enumeration budgets.

use crate::error::ConfigError;
use std::time::Duration;

/// Budgets for the partial enumeration solver.
///
/// Both limits are soft: when either is hit the solver stops and returns
/// the best line found so far.
///
/// ```
/// use tunnel_line::enumeration::PeConfig;
///
/// let config = PeConfig::default()
///     .with_timeout_secs(0.8)
///     .with_max_pairs(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeConfig {
    /// Wall-clock budget in seconds. `f64::INFINITY` disables it.
    pub timeout_secs: f64,

    /// Maximum number of vertex pairs to evaluate. `None` means no limit.
    pub max_pairs: Option<usize>,
}

impl Default for PeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5.0,
            max_pairs: None,
        }
    }
}

impl PeConfig {
    /// Sets the wall-clock budget in seconds.
    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Removes the wall-clock budget.
    pub fn without_timeout(mut self) -> Self {
        self.timeout_secs = f64::INFINITY;
        self
    }

    /// Sets the vertex-pair budget.
    pub fn with_max_pairs(mut self, n: usize) -> Self {
        self.max_pairs = Some(n);
        self
    }

    /// The timeout as a [`Duration`], or `None` when unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.timeout_secs).ok()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs.is_nan() || self.timeout_secs < 0.0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }
}
