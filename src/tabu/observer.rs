//! Built-in Tabu Search observers.

use tracing::info;

use super::runner::TabuSearch;
use super::types::Observer;

/// Snapshot taken after one iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub current_value: f64,
    pub best_value: f64,
    /// Moves tabu at the end of the iteration.
    pub memory_len: usize,
}

/// Records one [`Progress`] entry per iteration.
#[derive(Debug, Clone, Default)]
pub struct ProgressCollector {
    progress: Vec<Progress>,
}

impl ProgressCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &[Progress] {
        &self.progress
    }

    pub fn into_inner(self) -> Vec<Progress> {
        self.progress
    }
}

impl<C> Observer<C> for ProgressCollector {
    fn started(&mut self, _: &TabuSearch<C>) {
        self.progress.clear();
    }

    fn iteration_passed(&mut self, tabu: &TabuSearch<C>, memory_len: usize) {
        self.progress.push(Progress {
            current_value: tabu.current_state().map_or(f64::NAN, |s| s.value),
            best_value: tabu.best_state().map_or(f64::NAN, |s| s.value),
            memory_len,
        });
    }
}

/// Emits an `info` event every `every` iterations.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReporter {
    every: usize,
}

impl ProgressReporter {
    /// `every` of 0 is treated as 1.
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<C> Observer<C> for ProgressReporter {
    fn started(&mut self, tabu: &TabuSearch<C>) {
        info!(
            init = tabu.current_state().map_or(f64::NAN, |s| s.value),
            "tabu: started"
        );
    }

    fn iteration_passed(&mut self, tabu: &TabuSearch<C>, memory_len: usize) {
        if tabu.iteration() % self.every != 0 {
            return;
        }
        info!(
            it = tabu.iteration(),
            current = tabu.current_state().map_or(f64::NAN, |s| s.value),
            best = tabu.best_state().map_or(f64::NAN, |s| s.value),
            tabu = memory_len,
            "tabu: iteration passed"
        );
    }

    fn finished(&mut self, tabu: &TabuSearch<C>) {
        info!(
            iterations = tabu.iteration(),
            best = tabu.best_state().map_or(f64::NAN, |s| s.value),
            "tabu: finished"
        );
    }
}
