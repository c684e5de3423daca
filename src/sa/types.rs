//! Policy traits for Simulated Annealing.

use super::runner::SimulatedAnnealing;
use crate::state::State;

/// Proposes a candidate configuration near the current one.
///
/// Implemented for every `FnMut(&C) -> C` closure.
pub trait Neighbor<C> {
    fn neighbor(&mut self, origin: &C) -> C;
}

impl<C, F> Neighbor<C> for F
where
    F: FnMut(&C) -> C,
{
    fn neighbor(&mut self, origin: &C) -> C {
        self(origin)
    }
}

/// Measures how much worse a candidate is than the current state.
///
/// Called only for candidates that are not better than the current state.
/// The result must be non-negative; the acceptance probability
/// `exp(-diff / T)` of a negative difference exceeds one and aborts the run.
///
/// Implemented for every `FnMut(&State<C>, &State<C>) -> f64` closure taking
/// `(current, candidate)`. For a maximization this is typically
/// `current.value - candidate.value`.
pub trait Appraiser<C> {
    fn appraise(&mut self, current: &State<C>, candidate: &State<C>) -> f64;
}

impl<C, F> Appraiser<C> for F
where
    F: FnMut(&State<C>, &State<C>) -> f64,
{
    fn appraise(&mut self, current: &State<C>, candidate: &State<C>) -> f64 {
        self(current, candidate)
    }
}

/// The policies driving one annealing run.
#[derive(Debug, Clone)]
pub struct Annealing<N, A, K, E> {
    pub neighbor: N,
    pub appraiser: A,
    pub cooler: K,
    pub equilibrium: E,
}

impl<N, A, K, E> Annealing<N, A, K, E> {
    pub fn new(neighbor: N, appraiser: A, cooler: K, equilibrium: E) -> Self {
        Self {
            neighbor,
            appraiser,
            cooler,
            equilibrium,
        }
    }
}

/// Progress hooks of a Simulated Annealing run.
///
/// Every hook defaults to a no-op.
#[allow(unused_variables)]
pub trait Observer<C> {
    /// Called once, after the initial state has been evaluated.
    fn started(&mut self, sa: &SimulatedAnnealing<C>) {}

    /// A candidate better than the current state became current.
    fn better_accepted(&mut self, sa: &SimulatedAnnealing<C>) {}

    /// A worse candidate became current with the given probability.
    fn worse_accepted(&mut self, sa: &SimulatedAnnealing<C>, probability: f64) {}

    /// The temperature has been lowered at the end of a step.
    fn cooled(&mut self, sa: &SimulatedAnnealing<C>) {}

    /// Called once, after the last step.
    fn finished(&mut self, sa: &SimulatedAnnealing<C>) {}
}
