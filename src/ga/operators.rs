//! Real-valued genetic operators.
//!
//! # Crossover
//!
//! - [`extrapolation_crossover`]: draws around the second parent, scaled by
//!   the distance to the first. Unlike blending, the child may land outside
//!   the segment between the parents.
//!
//! # Mutation
//!
//! - [`uniform_perturbation`]: with a given probability, shifts a gene by a
//!   uniform offset in `[-step, step]`.

use crate::random::uniform;
use rand::Rng;

/// Directional extrapolation crossover for one gene.
///
/// The child is drawn uniformly between `x2 − (x2 − x1)·factor` and
/// `x2 + (x2 − x1)·factor`. When `x2 < x1` the two bounds swap roles; the
/// draw is taken between the smaller and the larger one either way.
///
/// # Complexity
/// O(1)
pub fn extrapolation_crossover<R: Rng>(x1: f64, x2: f64, factor: f64, rng: &mut R) -> f64 {
    let spread = (x2 - x1) * factor;
    uniform(rng, x2 - spread, x2 + spread)
}

/// Uniform perturbation mutation for one gene.
///
/// With probability `probability` returns `x` plus a uniform offset in
/// `[-step, step]`; otherwise returns `x` unchanged.
///
/// # Panics
/// Panics if `probability` is outside `[0, 1]`.
pub fn uniform_perturbation<R: Rng>(x: f64, step: f64, probability: f64, rng: &mut R) -> f64 {
    if rng.random_bool(probability) {
        x + uniform(rng, -step, step)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_crossover_bounds_ascending() {
        let mut rng = create_rng(Some(42));
        for _ in 0..1000 {
            // x1 = 0, x2 = 10, factor 0.3 → [7, 13]
            let c = extrapolation_crossover(0.0, 10.0, 0.3, &mut rng);
            assert!((7.0..=13.0).contains(&c), "child {c}");
        }
    }

    #[test]
    fn test_crossover_bounds_descending() {
        let mut rng = create_rng(Some(42));
        for _ in 0..1000 {
            // x1 = 10, x2 = 0, factor 0.3 → bounds 3 and -3
            let c = extrapolation_crossover(10.0, 0.0, 0.3, &mut rng);
            assert!((-3.0..=3.0).contains(&c), "child {c}");
        }
    }

    #[test]
    fn test_crossover_can_leave_segment() {
        let mut rng = create_rng(Some(1));
        let outside = (0..1000)
            .map(|_| extrapolation_crossover(0.0, 1.0, 0.5, &mut rng))
            .filter(|&c| c > 1.0)
            .count();
        assert!(outside > 0, "extrapolation should overshoot the second parent");
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = create_rng(Some(1));
        assert_eq!(extrapolation_crossover(2.5, 2.5, 0.3, &mut rng), 2.5);
    }

    #[test]
    fn test_crossover_zero_factor() {
        let mut rng = create_rng(Some(1));
        assert_eq!(extrapolation_crossover(-4.0, 6.0, 0.0, &mut rng), 6.0);
    }

    #[test]
    fn test_perturbation_never() {
        let mut rng = create_rng(Some(1));
        for _ in 0..100 {
            assert_eq!(uniform_perturbation(3.0, 1.0, 0.0, &mut rng), 3.0);
        }
    }

    #[test]
    fn test_perturbation_always() {
        let mut rng = create_rng(Some(1));
        let mut changed = 0;
        for _ in 0..1000 {
            let x = uniform_perturbation(3.0, 0.5, 1.0, &mut rng);
            assert!((2.5..=3.5).contains(&x));
            if x != 3.0 {
                changed += 1;
            }
        }
        assert!(changed > 990);
    }

    #[test]
    fn test_perturbation_rate() {
        let mut rng = create_rng(Some(8));
        let n = 10_000;
        let changed = (0..n)
            .filter(|_| uniform_perturbation(0.0, 1.0, 0.2, &mut rng) != 0.0)
            .count();
        let rate = changed as f64 / n as f64;
        assert!((0.17..0.23).contains(&rate), "rate {rate}");
    }
}
