//! Policy traits for Tabu Search.

use super::runner::TabuSearch;
use crate::error::{Error, Result};
use crate::state::State;

/// Proposes a neighbor of a configuration together with the move that
/// leads to it.
///
/// Implemented for every `FnMut(&C) -> (C, M)` closure.
pub trait Neighbor<C, M> {
    fn neighbor(&mut self, origin: &C) -> (C, M);
}

impl<C, M, F> Neighbor<C, M> for F
where
    F: FnMut(&C) -> (C, M),
{
    fn neighbor(&mut self, origin: &C) -> (C, M) {
        self(origin)
    }
}

/// Number of neighbors sampled per iteration, the first one included.
///
/// Implemented for every `FnMut(&TabuSearch<C>) -> usize` closure.
pub trait NeighborhoodSizer<C> {
    fn size(&mut self, tabu: &TabuSearch<C>) -> usize;
}

impl<C, F> NeighborhoodSizer<C> for F
where
    F: FnMut(&TabuSearch<C>) -> usize,
{
    fn size(&mut self, tabu: &TabuSearch<C>) -> usize {
        self(tabu)
    }
}

/// Samples the same number of neighbors every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedNeighborhood {
    size: usize,
}

impl FixedNeighborhood {
    /// `size` must be at least 1.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("neighborhood size", "must be at least 1"));
        }
        Ok(Self { size })
    }

    pub fn samples(&self) -> usize {
        self.size
    }
}

impl<C> NeighborhoodSizer<C> for FixedNeighborhood {
    fn size(&mut self, _: &TabuSearch<C>) -> usize {
        self.size
    }
}

/// Lets a candidate through regardless of its tabu status.
///
/// Implemented for every `FnMut(&State<C>, &TabuSearch<C>) -> bool` closure.
pub trait Aspiration<C> {
    fn aspire(&mut self, candidate: &State<C>, tabu: &TabuSearch<C>) -> bool;
}

impl<C, F> Aspiration<C> for F
where
    F: FnMut(&State<C>, &TabuSearch<C>) -> bool,
{
    fn aspire(&mut self, candidate: &State<C>, tabu: &TabuSearch<C>) -> bool {
        self(candidate, tabu)
    }
}

/// Aspires candidates strictly better than the best state found so far.
#[derive(Debug, Clone, Copy)]
pub struct ImprovesBest<F> {
    better: F,
}

impl<F> ImprovesBest<F> {
    /// `better` should be the comparator of the run's result tracker.
    pub fn new(better: F) -> Self {
        Self { better }
    }
}

impl<C, F> Aspiration<C> for ImprovesBest<F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    fn aspire(&mut self, candidate: &State<C>, tabu: &TabuSearch<C>) -> bool {
        tabu.best_state()
            .is_some_and(|best| (self.better)(candidate, best))
    }
}

/// The policies driving one tabu run.
#[derive(Debug, Clone)]
pub struct Exploration<N, S, M, A, T> {
    pub neighbor: N,
    pub neighborhood: S,
    pub memory: M,
    pub aspiration: A,
    pub termination: T,
}

impl<N, S, M, A, T> Exploration<N, S, M, A, T> {
    pub fn new(neighbor: N, neighborhood: S, memory: M, aspiration: A, termination: T) -> Self {
        Self {
            neighbor,
            neighborhood,
            memory,
            aspiration,
            termination,
        }
    }
}

/// Progress hooks of a Tabu Search run.
///
/// Every hook defaults to a no-op.
#[allow(unused_variables)]
pub trait Observer<C> {
    fn started(&mut self, tabu: &TabuSearch<C>) {}

    /// Called after every iteration with the number of moves currently tabu.
    fn iteration_passed(&mut self, tabu: &TabuSearch<C>, memory_len: usize) {}

    fn finished(&mut self, tabu: &TabuSearch<C>) {}
}
