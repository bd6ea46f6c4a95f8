//! Partial enumeration over vertex-pair lines.
//!
//! Every candidate passes through one corner of each of two distinct
//! tunnels. Pairs are visited in a fixed order (tunnel pairs in input
//! order, then the first tunnel's corners, then the second's), so a run is
//! deterministic unless the timeout interrupts it.

use super::config::PeConfig;
use crate::error::ConfigError;
use crate::geometry::{fitness, Quad};
use crate::model::{Best, Line};
use std::time::Instant;

/// Why an enumeration run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every vertex pair was checked.
    Exhausted,
    /// The vertex-pair budget was used up.
    PairLimit,
    /// The wall-clock budget ran out.
    Timeout,
    /// Fewer than two tunnels; no candidate line exists.
    TooFewShapes,
}

/// Result of a partial enumeration run.
#[derive(Debug, Clone, PartialEq)]
pub struct PeResult {
    /// Best line found, or [`Best::EMPTY`] if no candidate was evaluated.
    pub best: Best,

    /// Vertex pairs checked, vertical ones included.
    pub pairs_checked: usize,

    /// Wall-clock time spent in the run, in milliseconds.
    pub runtime_ms: f64,

    pub stop_reason: StopReason,
}

/// Executes partial enumeration.
///
/// # Usage
///
/// ```
/// use tunnel_line::enumeration::{PeConfig, PeRunner};
/// use tunnel_line::model::Rectangle;
///
/// let tunnels = vec![
///     Rectangle::axis_aligned(1, 0.0, 0.0, 1.0, 1.0),
///     Rectangle::axis_aligned(2, 3.0, 0.0, 4.0, 1.0),
/// ];
/// let result = PeRunner::run(&tunnels, &PeConfig::default());
/// assert_eq!(result.best.z, 2);
/// ```
pub struct PeRunner;

impl PeRunner {
    /// Runs the enumeration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`PeConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<Q: Quad>(shapes: &[Q], config: &PeConfig) -> PeResult {
        config.validate().expect("invalid PeConfig");

        let start = Instant::now();
        let finish = |best: Option<Best>, pairs_checked: usize, stop_reason: StopReason| {
            let result = PeResult {
                best: best.unwrap_or(Best::EMPTY),
                pairs_checked,
                runtime_ms: start.elapsed().as_secs_f64() * 1e3,
                stop_reason,
            };
            log::debug!(
                "partial enumeration stopped ({:?}): z={} after {} pairs in {:.3} ms",
                result.stop_reason,
                result.best.z,
                result.pairs_checked,
                result.runtime_ms
            );
            result
        };

        if shapes.len() < 2 {
            return finish(None, 0, StopReason::TooFewShapes);
        }

        log::debug!(
            "partial enumeration over {} shapes (timeout {} s, max_pairs {:?})",
            shapes.len(),
            config.timeout_secs,
            config.max_pairs
        );

        let timeout = config.timeout();
        let corners: Vec<_> = shapes.iter().map(Q::corners).collect();
        let mut best: Option<Best> = None;
        let mut checked = 0usize;

        for (i, first) in corners.iter().enumerate() {
            for second in &corners[i + 1..] {
                for &v1 in first {
                    for &v2 in second {
                        if config.max_pairs.is_some_and(|max| checked >= max) {
                            return finish(best, checked, StopReason::PairLimit);
                        }
                        if timeout.is_some_and(|t| start.elapsed() > t) {
                            return finish(best, checked, StopReason::Timeout);
                        }
                        checked += 1;

                        let Some(line) = Line::through(v1, v2) else {
                            continue;
                        };
                        let z = fitness(shapes, line.a, line.k);

                        // strict comparison: the first line reaching a score keeps it
                        if best.is_none_or(|b| z > b.z) {
                            log::trace!("pair {checked}: z={z} for a={}, k={}", line.a, line.k);
                            best = Some(Best::new(line, z));
                        }
                    }
                }
            }
        }

        finish(best, checked, StopReason::Exhausted)
    }
}

/// Partial enumeration with a timeout in seconds and an optional pair limit.
///
/// Returns `(a, k, Z)`; fewer than two shapes yields `(0.0, 0.0, 0)`.
/// Use [`PeRunner::run`] to also observe the pair count and runtime.
pub fn solve<Q: Quad>(
    shapes: &[Q],
    timeout_secs: f64,
    max_pairs: Option<usize>,
) -> Result<(f64, f64, usize), ConfigError> {
    let config = PeConfig {
        timeout_secs,
        max_pairs,
    };
    config.validate()?;
    Ok(PeRunner::run(shapes, &config).best.into_tuple())
}
