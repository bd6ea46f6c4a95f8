//! Halving tournament selection.
//!
//! One call shuffles the population, splits it into two halves of
//! `⌊n/2⌋` individuals and returns the fittest of each half. With an odd
//! population the individual left over after the split sits out that call.

use super::types::Individual;
use rand::seq::SliceRandom;
use rand::Rng;

/// Reusable state for repeated tournaments over populations of one size.
#[derive(Debug, Clone)]
pub struct HalvingTournament {
    order: Vec<usize>,
}

impl HalvingTournament {
    pub fn new(population_size: usize) -> Self {
        Self {
            order: (0..population_size).collect(),
        }
    }

    /// Returns the indices of two parents, one from each half.
    ///
    /// Every call draws a fresh shuffle. Ties within a half go to the
    /// individual that comes first in the shuffled order.
    ///
    /// # Panics
    /// Panics if `population` has fewer than 2 individuals.
    pub fn select<I: Individual, R: Rng>(&mut self, population: &[I], rng: &mut R) -> (usize, usize) {
        let n = population.len();
        assert!(n >= 2, "halving tournament needs at least 2 individuals");

        if self.order.len() != n {
            self.order = (0..n).collect();
        }
        self.order.shuffle(rng);

        let half = n / 2;
        let left = fittest(population, &self.order[..half]);
        let right = fittest(population, &self.order[half..2 * half]);
        (left, right)
    }
}

/// Index of the fittest individual among `candidates` (first wins on ties).
fn fittest<I: Individual>(population: &[I], candidates: &[usize]) -> usize {
    let mut best = candidates[0];
    for &idx in &candidates[1..] {
        if population[idx].fitness() > population[best].fitness() {
            best = idx;
        }
    }
    best
}
