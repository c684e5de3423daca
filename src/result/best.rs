//! Single-best result tracker.

use super::Tracker;
use crate::state::{Comparator, State};

/// Keeps the best state ever offered.
///
/// Starts from a caller-supplied seed state; a candidate replaces the current
/// best only if it is strictly better, so ties keep the earlier state.
///
/// # Examples
///
/// ```
/// use u_search::result::{BestResult, Tracker};
/// use u_search::state::{maximize, State};
///
/// let mut result = BestResult::new(State::new(0, 0.0), maximize);
/// result.update(State::new(3, 3.0));
/// result.update(State::new(1, 1.0));
/// assert_eq!(result.get().config, 3);
/// ```
#[derive(Debug, Clone)]
pub struct BestResult<C, F = Comparator<C>> {
    best: State<C>,
    better: F,
}

impl<C, F> BestResult<C, F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    /// Creates a tracker seeded with `init`.
    pub fn new(init: State<C>, better: F) -> Self {
        Self { best: init, better }
    }

    /// Borrows the current best state.
    pub fn best(&self) -> &State<C> {
        &self.best
    }

    /// Consumes the tracker, returning the best state.
    pub fn into_inner(self) -> State<C> {
        self.best
    }
}

impl<C, F> Tracker<C> for BestResult<C, F>
where
    C: Clone,
    F: Fn(&State<C>, &State<C>) -> bool,
{
    type Output = State<C>;

    fn update(&mut self, candidate: State<C>) {
        if (self.better)(&candidate, &self.best) {
            self.best = candidate;
        }
    }

    fn get(&self) -> State<C> {
        self.best.clone()
    }

    fn compare(&self, lhs: &State<C>, rhs: &State<C>) -> bool {
        (self.better)(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{maximize, minimize};
    use proptest::prelude::*;

    #[test]
    fn test_keeps_seed_without_better_candidate() {
        let mut result = BestResult::new(State::new("seed", 10.0), maximize);
        result.update(State::new("worse", 5.0));
        result.update(State::new("equal", 10.0));
        assert_eq!(result.get(), State::new("seed", 10.0));
    }

    #[test]
    fn test_ties_keep_earlier() {
        let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);
        result.update(State::new(1, 7.0));
        result.update(State::new(2, 7.0));
        assert_eq!(result.best().config, 1);
    }

    #[test]
    fn test_minimization() {
        let mut result = BestResult::new(State::new(0, f64::INFINITY), minimize);
        for x in [5, 3, 9, 1, 4] {
            result.update(State::new(x, f64::from(x)));
        }
        assert_eq!(result.into_inner().config, 1);
    }

    #[test]
    fn test_compare_delegates() {
        let result = BestResult::new(State::new((), 0.0), minimize);
        assert!(result.compare(&State::new((), 1.0), &State::new((), 2.0)));
        assert!(!result.compare(&State::new((), 2.0), &State::new((), 1.0)));
    }

    proptest! {
        #[test]
        fn test_best_is_order_independent(values in prop::collection::vec(-1000i32..1000, 1..50)) {
            let expected = values.iter().copied().max().unwrap();

            let mut forward = BestResult::new(State::new(i32::MIN, f64::NEG_INFINITY), maximize);
            let mut backward = BestResult::new(State::new(i32::MIN, f64::NEG_INFINITY), maximize);
            for &v in &values {
                forward.update(State::new(v, f64::from(v)));
            }
            for &v in values.iter().rev() {
                backward.update(State::new(v, f64::from(v)));
            }

            prop_assert_eq!(forward.get().value, f64::from(expected));
            prop_assert_eq!(backward.get().value, f64::from(expected));
        }
    }
}
