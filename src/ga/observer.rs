//! Built-in GA observers.

use tracing::info;

use super::runner::GeneticAlgorithm;
use super::types::Observer;
use crate::state::State;

/// Snapshot of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Completed generations, this one included.
    pub iteration: usize,
    pub population_size: usize,
    /// `NaN` for an empty population.
    pub mean_value: f64,
    /// Value of the best state according to the collector's comparator,
    /// `NaN` for an empty population.
    pub best_value: f64,
}

/// Mean value and best value of a population.
fn summarize<C, F>(population: &[State<C>], better: &F) -> (f64, f64)
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    let Some(first) = population.first() else {
        return (f64::NAN, f64::NAN);
    };
    let mut sum = 0.0;
    let mut best = first;
    for state in population {
        sum += state.value;
        if better(state, best) {
            best = state;
        }
    }
    (sum / population.len() as f64, best.value)
}

/// Records one [`Progress`] entry per generation.
#[derive(Debug, Clone)]
pub struct ProgressCollector<F> {
    better: F,
    progress: Vec<Progress>,
}

impl<F> ProgressCollector<F> {
    /// `better` should be the comparator of the run's result tracker.
    pub fn new(better: F) -> Self {
        Self {
            better,
            progress: Vec::new(),
        }
    }

    pub fn get(&self) -> &[Progress] {
        &self.progress
    }

    pub fn into_inner(self) -> Vec<Progress> {
        self.progress
    }
}

impl<C, F> Observer<C> for ProgressCollector<F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    fn started(&mut self, _: &GeneticAlgorithm<C>) {
        self.progress.clear();
    }

    fn population_updated(&mut self, ga: &GeneticAlgorithm<C>) {
        let (mean_value, best_value) = summarize(ga.population(), &self.better);
        self.progress.push(Progress {
            iteration: ga.iteration(),
            population_size: ga.population().len(),
            mean_value,
            best_value,
        });
    }
}

/// Emits an `info` event per generation.
#[derive(Debug, Clone)]
pub struct ProgressReporter<F> {
    better: F,
}

impl<F> ProgressReporter<F> {
    pub fn new(better: F) -> Self {
        Self { better }
    }
}

impl<C, F> Observer<C> for ProgressReporter<F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    fn started(&mut self, ga: &GeneticAlgorithm<C>) {
        info!(population = ga.population().len(), "ga: started");
    }

    fn population_updated(&mut self, ga: &GeneticAlgorithm<C>) {
        let (mean, best) = summarize(ga.population(), &self.better);
        info!(
            it = ga.iteration(),
            population = ga.population().len(),
            mean,
            best,
            "ga: population updated"
        );
    }

    fn finished(&mut self, ga: &GeneticAlgorithm<C>) {
        info!(generations = ga.iteration(), "ga: finished");
    }
}
