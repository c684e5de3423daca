//! SA execution loop.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use super::cooler::{Cooler, Temperature};
use super::equilibrium::Equilibrium;
use super::types::{Annealing, Appraiser, Neighbor, Observer};
use crate::error::Result;
use crate::random::rng_from;
use crate::result::Tracker;
use crate::state::{evaluate, Objective, State};
use crate::termination::Iterative;

/// Simulated Annealing over an opaque configuration type.
///
/// Each temperature step runs the number of trials the equilibrium asks
/// for. A trial proposes a neighbor of the current configuration; a better
/// candidate is always accepted, a worse one with probability
/// `exp(-diff / T)` where `diff` comes from the appraiser. After the trials
/// the cooler lowers the temperature. The run ends once the temperature is
/// at or below the minimum.
///
/// Every better candidate that satisfies the constraints is offered to the
/// result tracker. The best state is replaced only by such a candidate that
/// also beats it.
pub struct SimulatedAnnealing<C> {
    config: SaConfig,
    temperature: f64,
    iteration: usize,
    current: Option<State<C>>,
    best: Option<State<C>>,
    rng: StdRng,
}

impl<C> SimulatedAnnealing<C> {
    /// Creates an optimizer, rejecting an invalid configuration.
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            temperature: config.start_temperature,
            iteration: 0,
            current: None,
            best: None,
            rng: rng_from(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    pub fn start_temperature(&self) -> f64 {
        self.config.start_temperature
    }

    pub fn min_temperature(&self) -> f64 {
        self.config.min_temperature
    }

    /// Completed temperature steps.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The state the search currently sits on; `None` before the first run.
    pub fn current_state(&self) -> Option<&State<C>> {
        self.current.as_ref()
    }

    /// Best feasible state accepted so far, or the initial state if none
    /// was; `None` before the first run.
    pub fn best_state(&self) -> Option<&State<C>> {
        self.best.as_ref()
    }

    fn snapshot(&self) -> Temperature {
        Temperature {
            current: self.temperature,
            start: self.config.start_temperature,
            min: self.config.min_temperature,
            step: self.iteration,
        }
    }

    fn trajectory(&self) -> (&State<C>, &State<C>) {
        match (&self.current, &self.best) {
            (Some(current), Some(best)) => (current, best),
            _ => unreachable!("states are set when the run starts"),
        }
    }
}

impl<C: Clone + Debug> SimulatedAnnealing<C> {
    /// Runs the search from `init` until the temperature reaches the minimum.
    ///
    /// Fails with the first objective failure; the optimizer and the tracker
    /// keep whatever they had reached.
    ///
    /// # Panics
    /// Panics if the appraiser yields an acceptance probability outside
    /// `[0, 1]`.
    #[allow(clippy::too_many_arguments)]
    pub fn run<R, P, O, N, A, K, E>(
        &mut self,
        init: C,
        result: &mut R,
        constraints: P,
        objective: O,
        mut annealing: Annealing<N, A, K, E>,
        observers: &mut [&mut dyn Observer<C>],
    ) -> Result<()>
    where
        R: Tracker<C>,
        P: Fn(&State<C>) -> bool,
        O: Objective<C>,
        N: Neighbor<C>,
        A: Appraiser<C>,
        K: Cooler,
        E: Equilibrium,
    {
        let init = evaluate(&objective, &init)?;
        self.temperature = self.config.start_temperature;
        self.iteration = 0;
        self.best = Some(init.clone());
        self.current = Some(init);

        debug!(
            start_temperature = self.config.start_temperature,
            min_temperature = self.config.min_temperature,
            "simulated annealing started"
        );
        for observer in observers.iter_mut() {
            observer.started(self);
        }

        while self.temperature > self.config.min_temperature {
            let trials = annealing.equilibrium.trials(&self.snapshot());

            for _ in 0..trials {
                let (current, _) = self.trajectory();
                let proposal = annealing.neighbor.neighbor(&current.config);
                let candidate = evaluate(&objective, &proposal)?;

                if result.compare(&candidate, current) {
                    self.current = Some(candidate);
                    for observer in observers.iter_mut() {
                        observer.better_accepted(self);
                    }

                    let (current, best) = self.trajectory();
                    if constraints(current) {
                        let accepted = current.clone();
                        if result.compare(&accepted, best) {
                            trace!(value = accepted.value, "new best state");
                            self.best = Some(accepted.clone());
                        }
                        result.update(accepted);
                    }
                } else {
                    let diff = annealing.appraiser.appraise(current, &candidate);
                    let probability = (-diff / self.temperature).exp();
                    assert!(
                        (0.0..=1.0).contains(&probability),
                        "acceptance probability {probability} outside [0, 1] (difference {diff}, temperature {})",
                        self.temperature
                    );

                    if self.rng.random::<f64>() < probability {
                        trace!(value = candidate.value, probability, "worse state accepted");
                        self.current = Some(candidate);
                        for observer in observers.iter_mut() {
                            observer.worse_accepted(self, probability);
                        }
                    }
                }
            }

            self.iteration += 1;
            self.temperature = annealing.cooler.cool(&self.snapshot());
            for observer in observers.iter_mut() {
                observer.cooled(self);
            }
        }

        let (current, best) = self.trajectory();
        debug!(
            iterations = self.iteration,
            temperature = self.temperature,
            current = current.value,
            best = best.value,
            "simulated annealing finished"
        );
        for observer in observers.iter_mut() {
            observer.finished(self);
        }
        Ok(())
    }
}

impl<C> Iterative for SimulatedAnnealing<C> {
    fn iteration(&self) -> usize {
        self.iteration
    }
}

impl<C: Debug> Debug for SimulatedAnnealing<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedAnnealing")
            .field("config", &self.config)
            .field("temperature", &self.temperature)
            .field("iteration", &self.iteration)
            .field("current", &self.current)
            .field("best", &self.best)
            .finish_non_exhaustive()
    }
}
