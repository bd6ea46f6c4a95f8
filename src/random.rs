//! Seeded random sources.
//!
//! Every solver owns exactly one generator created here, so a run is
//! reproducible from its seed alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates the generator for one run.
///
/// `None` draws a fresh seed from the thread-local source once; all later
/// draws still come from the returned generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Draws uniformly between `a` and `b`, in either order.
///
/// A degenerate interval (`a == b`) returns `a`. Non-finite bounds give a
/// non-finite result instead of a panic.
pub fn uniform<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo + (hi - lo) * rng.random::<f64>()
}
