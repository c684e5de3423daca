//! Tabu Search execution engine.
//!
//! Each iteration draws neighbors of the current configuration, as many as
//! the neighborhood sizer asks for. The first sample is kept no matter what. A later sample
//! displaces the kept one when its move is not tabu and it is strictly
//! better, or when the aspiration criterion accepts it regardless of the
//! memory. The kept sample becomes the new current state, and the best
//! state if it beats it. Only then is the memory aged by one iteration,
//! after which the move just taken is armed with a fresh tenure, so a move
//! stays tabu for exactly its tenure in iterations.
//!
//! The search never stops on its own; the termination predicate decides.
//!
//! See Glover, "Tabu Search" (ORSA Journal on Computing, 1989 and 1990).

use std::fmt::Debug;

use tracing::{debug, trace};

use super::memory::Memory;
use super::types::{Aspiration, Exploration, Neighbor, NeighborhoodSizer, Observer};
use crate::error::Result;
use crate::result::Tracker;
use crate::state::{evaluate, Objective, State};
use crate::termination::{Iterative, Termination};

/// Tabu Search over an opaque configuration type.
///
/// The first neighbor sampled in an iteration is taken unconditionally. Each
/// further sample from the same origin replaces it if its move is not tabu
/// and it is strictly better, or if the aspiration accepts it. The move taken
/// is remembered whether it was tabu or not.
///
/// The best state follows every improvement regardless of the constraints;
/// only feasible improvements are offered to the result tracker.
#[derive(Debug, Clone)]
pub struct TabuSearch<C> {
    iteration: usize,
    current: Option<State<C>>,
    best: Option<State<C>>,
}

impl<C> Default for TabuSearch<C> {
    fn default() -> Self {
        Self {
            iteration: 0,
            current: None,
            best: None,
        }
    }
}

impl<C> TabuSearch<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The state the search currently sits on; `None` before the first run.
    pub fn current_state(&self) -> Option<&State<C>> {
        self.current.as_ref()
    }

    /// Best state visited; `None` before the first run.
    pub fn best_state(&self) -> Option<&State<C>> {
        self.best.as_ref()
    }

    fn trajectory(&self) -> (&State<C>, &State<C>) {
        match (&self.current, &self.best) {
            (Some(current), Some(best)) => (current, best),
            _ => unreachable!("states are set when the run starts"),
        }
    }
}

impl<C: Clone + Debug> TabuSearch<C> {
    /// Runs the search from `init` until the termination predicate fires.
    ///
    /// Fails with the first objective failure; the optimizer and the tracker
    /// keep whatever they had reached.
    #[allow(clippy::too_many_arguments)]
    pub fn run<R, P, O, MV, N, S, M, A, T>(
        &mut self,
        init: C,
        result: &mut R,
        constraints: P,
        objective: O,
        mut exploration: Exploration<N, S, M, A, T>,
        observers: &mut [&mut dyn Observer<C>],
    ) -> Result<()>
    where
        R: Tracker<C>,
        P: Fn(&State<C>) -> bool,
        O: Objective<C>,
        N: Neighbor<C, MV>,
        S: NeighborhoodSizer<C>,
        M: Memory<MV>,
        A: Aspiration<C>,
        T: Termination<Self>,
    {
        let init = evaluate(&objective, &init)?;
        self.iteration = 0;
        self.best = Some(init.clone());
        self.current = Some(init);

        debug!("tabu search started");
        for observer in observers.iter_mut() {
            observer.started(self);
        }

        while !exploration.termination.should_stop(self) {
            let extra = exploration.neighborhood.size(self).saturating_sub(1);
            let (origin, _) = self.trajectory();

            let (next, mut taken) = exploration.neighbor.neighbor(&origin.config);
            let mut chosen = evaluate(&objective, &next)?;

            for _ in 0..extra {
                let (next, mv) = exploration.neighbor.neighbor(&origin.config);
                let candidate = evaluate(&objective, &next)?;

                let admissible =
                    !exploration.memory.contains(&mv) && result.compare(&candidate, &chosen);
                if admissible || exploration.aspiration.aspire(&candidate, self) {
                    chosen = candidate;
                    taken = mv;
                }
            }

            let (_, best) = self.trajectory();
            if result.compare(&chosen, best) {
                trace!(iteration = self.iteration, value = chosen.value, "new best state");
                self.best = Some(chosen.clone());
                if constraints(&chosen) {
                    result.update(chosen.clone());
                }
            }
            self.current = Some(chosen);

            exploration.memory.forget();
            exploration.memory.remember(&taken);
            self.iteration += 1;

            let memory_len = exploration.memory.len();
            for observer in observers.iter_mut() {
                observer.iteration_passed(self, memory_len);
            }
        }

        let (current, best) = self.trajectory();
        debug!(
            iterations = self.iteration,
            current = current.value,
            best = best.value,
            "tabu search finished"
        );
        for observer in observers.iter_mut() {
            observer.finished(self);
        }
        Ok(())
    }
}

impl<C> Iterative for TabuSearch<C> {
    fn iteration(&self) -> usize {
        self.iteration
    }
}
