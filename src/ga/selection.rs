//! Parent selection strategies.
//!
//! Selection determines which states are chosen as parents for crossover.
//! Different strategies provide different selection pressure. Both built-in
//! strategies sample with replacement.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::rngs::StdRng;
use rand::Rng;

use super::types::Selection;
use crate::error::{Error, Result};
use crate::random::rng_from;
use crate::state::State;

/// Fitness-proportionate (roulette wheel) selection.
///
/// The probability of drawing a state is proportional to its value, so
/// values must be non-negative and larger values are preferred. If every
/// value is zero the draw is uniform.
///
/// **Warning**: Susceptible to super-individual dominance when
/// value variance is high.
///
/// # Complexity
/// O(n) per draw after an O(n) setup per generation.
#[derive(Debug, Clone)]
pub struct RouletteSelection {
    rng: StdRng,
}

impl RouletteSelection {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from(seed),
        }
    }
}

impl<C: Clone> Selection<C> for RouletteSelection {
    /// # Panics
    /// Panics if `n > 0` and `population` is empty, or if a value is
    /// negative or not finite.
    fn select(&mut self, n: usize, population: &[State<C>]) -> Vec<State<C>> {
        if n == 0 {
            return Vec::new();
        }
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        assert!(
            population.iter().all(|s| s.value.is_finite() && s.value >= 0.0),
            "roulette weights must be finite and non-negative"
        );

        // Weights are relative to the largest one so the sum stays finite.
        let max = population.iter().fold(0.0_f64, |max, s| max.max(s.value));
        let mut cumulative = Vec::with_capacity(population.len());
        let mut total = 0.0;
        for state in population {
            if max > 0.0 {
                total += state.value / max;
            }
            cumulative.push(total);
        }

        (0..n)
            .map(|_| {
                let idx = if total > 0.0 {
                    let threshold = self.rng.random_range(0.0..total);
                    // First bucket whose upper bound exceeds the threshold;
                    // zero-weight states own empty buckets and are skipped.
                    cumulative
                        .partition_point(|&bound| bound <= threshold)
                        .min(population.len() - 1)
                } else {
                    self.rng.random_range(0..population.len())
                };
                population[idx].clone()
            })
            .collect()
    }
}

/// Tournament selection: pick `size` states at random, keep the best.
///
/// Higher `size` = stronger selection pressure.
/// - 2: light pressure (good for diversity)
/// - 3-5: moderate pressure (typical default)
/// - more than 5: strong pressure (risk of premature convergence)
///
/// "Best" is decided by the comparator, usually the run's tracker comparator.
///
/// # Complexity
/// O(size) per draw
#[derive(Debug, Clone)]
pub struct TournamentSelection<F> {
    size: usize,
    better: F,
    rng: StdRng,
}

impl<F> TournamentSelection<F> {
    /// `size` must be at least 1.
    pub fn new(size: usize, better: F, seed: Option<u64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("tournament size", "must be at least 1"));
        }
        Ok(Self {
            size,
            better,
            rng: rng_from(seed),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<C, F> Selection<C> for TournamentSelection<F>
where
    C: Clone,
    F: Fn(&State<C>, &State<C>) -> bool,
{
    /// # Panics
    /// Panics if `n > 0` and `population` is empty.
    fn select(&mut self, n: usize, population: &[State<C>]) -> Vec<State<C>> {
        if n == 0 {
            return Vec::new();
        }
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let len = population.len();
        (0..n)
            .map(|_| {
                let mut best_idx = self.rng.random_range(0..len);
                for _ in 1..self.size {
                    let idx = self.rng.random_range(0..len);
                    if (self.better)(&population[idx], &population[best_idx]) {
                        best_idx = idx;
                    }
                }
                population[best_idx].clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{maximize, minimize, Comparator};

    fn make_population(values: &[f64]) -> Vec<State<usize>> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| State::new(i, v))
            .collect()
    }

    fn counts<S: Selection<usize>>(selection: &mut S, population: &[State<usize>]) -> Vec<u32> {
        let mut counts = vec![0u32; population.len()];
        for parent in selection.select(10_000, population) {
            counts[parent.config] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut selection = TournamentSelection::new(4, minimize as Comparator<usize>, Some(42)).unwrap();

        // With tournament size = population size, best should be selected
        // most often (though not always due to with-replacement sampling)
        let counts = counts(&mut selection, &pop);
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut selection = TournamentSelection::new(1, maximize as Comparator<usize>, Some(42)).unwrap();

        let counts = counts(&mut selection, &pop);
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_rejects_zero_size() {
        assert!(TournamentSelection::new(0, maximize as Comparator<usize>, None).is_err());
    }

    #[test]
    fn test_roulette_is_proportional() {
        let pop = make_population(&[1.0, 0.0, 3.0, 6.0]);
        let mut selection = RouletteSelection::new(Some(42));

        let counts = counts(&mut selection, &pop);
        assert_eq!(counts[1], 0, "zero weight must never be drawn: {counts:?}");
        assert!(counts[3] > counts[2] && counts[2] > counts[0], "{counts:?}");
        assert!((5500..6500).contains(&counts[3]), "{counts:?}");
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let pop = make_population(&[0.0; 4]);
        let mut selection = RouletteSelection::new(Some(7));

        let counts = counts(&mut selection, &pop);
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_huge_weights() {
        let pop = make_population(&[f64::MAX, f64::MAX, 0.0]);
        let mut selection = RouletteSelection::new(Some(3));

        let counts = counts(&mut selection, &pop);
        assert_eq!(counts[2], 0, "{counts:?}");
        assert!(counts[0] > 4000 && counts[1] > 4000, "{counts:?}");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut tournament = TournamentSelection::new(3, maximize as Comparator<usize>, Some(42)).unwrap();
        let mut roulette = RouletteSelection::new(Some(42));

        assert!(tournament.select(5, &pop).iter().all(|s| s.config == 0));
        assert!(roulette.select(5, &pop).iter().all(|s| s.config == 0));
    }

    #[test]
    fn test_zero_request_on_empty_population() {
        let pop: Vec<State<usize>> = Vec::new();
        assert!(RouletteSelection::new(None).select(0, &pop).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<State<usize>> = Vec::new();
        TournamentSelection::new(3, maximize as Comparator<usize>, Some(42))
            .unwrap()
            .select(1, &pop);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_roulette_rejects_negative_values() {
        let pop = make_population(&[1.0, -2.0]);
        RouletteSelection::new(Some(1)).select(1, &pop);
    }
}
