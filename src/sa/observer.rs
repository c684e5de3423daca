//! Built-in SA observers.

use tracing::info;

use super::runner::SimulatedAnnealing;
use super::types::Observer;

/// Snapshot taken at the end of one temperature step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Temperature after cooling.
    pub temperature: f64,
    pub current_value: f64,
    pub best_value: f64,
    /// Better candidates accepted during the step.
    pub better_accepted: usize,
    /// Worse candidates accepted during the step.
    pub worse_accepted: usize,
    /// Mean acceptance probability of the worse candidates accepted during
    /// the step, `0.0` if there were none.
    pub mean_worse_probability: f64,
}

/// Records one [`Progress`] entry per temperature step.
#[derive(Debug, Clone, Default)]
pub struct ProgressCollector {
    progress: Vec<Progress>,
    better: usize,
    worse: usize,
    probability_sum: f64,
}

impl ProgressCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of the last run, oldest first.
    pub fn get(&self) -> &[Progress] {
        &self.progress
    }

    pub fn into_inner(self) -> Vec<Progress> {
        self.progress
    }

    fn reset_counters(&mut self) {
        self.better = 0;
        self.worse = 0;
        self.probability_sum = 0.0;
    }
}

impl<C> Observer<C> for ProgressCollector {
    fn started(&mut self, _: &SimulatedAnnealing<C>) {
        self.progress.clear();
        self.reset_counters();
    }

    fn better_accepted(&mut self, _: &SimulatedAnnealing<C>) {
        self.better += 1;
    }

    fn worse_accepted(&mut self, _: &SimulatedAnnealing<C>, probability: f64) {
        self.worse += 1;
        self.probability_sum += probability;
    }

    fn cooled(&mut self, sa: &SimulatedAnnealing<C>) {
        let mean_worse_probability = if self.worse == 0 {
            0.0
        } else {
            self.probability_sum / self.worse as f64
        };
        self.progress.push(Progress {
            temperature: sa.temperature(),
            current_value: sa.current_state().map_or(f64::NAN, |s| s.value),
            best_value: sa.best_state().map_or(f64::NAN, |s| s.value),
            better_accepted: self.better,
            worse_accepted: self.worse,
            mean_worse_probability,
        });
        self.reset_counters();
    }
}

/// Emits an `info` event per temperature step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressReporter;

impl<C> Observer<C> for ProgressReporter {
    fn started(&mut self, sa: &SimulatedAnnealing<C>) {
        info!(
            start_temperature = sa.start_temperature(),
            min_temperature = sa.min_temperature(),
            "sa: started"
        );
    }

    fn cooled(&mut self, sa: &SimulatedAnnealing<C>) {
        info!(
            it = sa.iteration(),
            temperature = sa.temperature(),
            current = sa.current_state().map_or(f64::NAN, |s| s.value),
            best = sa.best_state().map_or(f64::NAN, |s| s.value),
            "sa: cooled"
        );
    }

    fn finished(&mut self, sa: &SimulatedAnnealing<C>) {
        info!(
            temperature = sa.temperature(),
            best = sa.best_state().map_or(f64::NAN, |s| s.value),
            "sa: finished"
        );
    }
}
