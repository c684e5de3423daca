//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] orchestrates the complete evolutionary process:
//! evaluation → selection → matchmaking → crossover → mutation → replacement → repeat.

use std::fmt::Debug;

use tracing::{debug, trace};

use super::types::{
    Crossover, Matchmaker, Mutation, Observer, Pipeline, Replacement, Selection, Sizer,
};
use crate::error::Result;
use crate::result::Tracker;
use crate::state::{evaluate, Objective, State};
use crate::termination::{Iterative, Termination};

/// Population-based optimizer over an opaque configuration type.
///
/// The initial population is evaluated but never offered to the result
/// tracker. After every replacement, each state of the new population that
/// satisfies the constraints is offered to it.
///
/// The run stops when the termination predicate fires or when a generation
/// leaves the population empty.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<C> {
    iteration: usize,
    population: Vec<State<C>>,
}

impl<C> Default for GeneticAlgorithm<C> {
    fn default() -> Self {
        Self {
            iteration: 0,
            population: Vec::new(),
        }
    }
}

impl<C> GeneticAlgorithm<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed generations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The current population.
    pub fn population(&self) -> &[State<C>] {
        &self.population
    }

    /// Consumes the optimizer, returning the last population.
    pub fn into_population(self) -> Vec<State<C>> {
        self.population
    }
}

impl<C: Clone + Debug> GeneticAlgorithm<C> {
    /// Evolves `init` until the termination predicate fires or the
    /// population dies out.
    ///
    /// Fails with the first objective failure; the tracker keeps whatever it
    /// had reached.
    #[allow(clippy::too_many_arguments)]
    pub fn run<R, Q, O, Z, S, X, K, U, E, T, const P: usize>(
        &mut self,
        init: &[C],
        result: &mut R,
        constraints: Q,
        objective: O,
        mut pipeline: Pipeline<Z, S, X, K, U, E, T>,
        observers: &mut [&mut dyn Observer<C>],
    ) -> Result<()>
    where
        R: Tracker<C>,
        Q: Fn(&State<C>) -> bool,
        O: Objective<C>,
        Z: Sizer,
        S: Selection<C>,
        X: Matchmaker<C, P>,
        K: Crossover<C, P>,
        U: Mutation<C>,
        E: Replacement<C>,
        T: Termination<Self>,
    {
        self.iteration = 0;
        self.population = init
            .iter()
            .map(|config| evaluate(&objective, config))
            .collect::<Result<_>>()?;

        debug!(population = self.population.len(), "genetic algorithm started");
        for observer in observers.iter_mut() {
            observer.started(self);
        }

        while !self.population.is_empty() && !pipeline.termination.should_stop(self) {
            let select_n = pipeline.sizer.size(self.population.len());
            let mut parents = pipeline.selection.select(select_n, &self.population);

            let mut children = Vec::new();
            for group in pipeline.matchmaker.groups(&mut parents) {
                for child in pipeline.crossover.crossover(group) {
                    let child = pipeline.mutation.mutate(child);
                    children.push(evaluate(&objective, &child)?);
                }
            }

            trace!(
                iteration = self.iteration,
                parents = parents.len(),
                children = children.len(),
                "generation bred"
            );
            self.population = pipeline.replacement.replace(parents, children);
            for state in self.population.iter().filter(|s| constraints(s)) {
                result.update(state.clone());
            }
            self.iteration += 1;

            for observer in observers.iter_mut() {
                observer.population_updated(self);
            }
        }

        debug!(
            generations = self.iteration,
            population = self.population.len(),
            "genetic algorithm finished"
        );
        for observer in observers.iter_mut() {
            observer.finished(self);
        }
        Ok(())
    }
}

impl<C> Iterative for GeneticAlgorithm<C> {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
