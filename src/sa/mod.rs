//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The loop itself is fixed; what varies is pluggable through
//! [`Annealing`]: the [`Neighbor`] proposal, the [`Appraiser`] measuring how
//! much worse a candidate is, the [`Cooler`] schedule and the
//! [`Equilibrium`] deciding how many trials run per temperature.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod cooler;
mod equilibrium;
mod observer;
mod runner;
mod types;

pub use config::SaConfig;
pub use cooler::{
    BasicCooler, Cooler, ExponentialCooler, LinearCooler, LogarithmicCooler, Temperature,
};
pub use equilibrium::{Equilibrium, FixedEquilibrium, TemperatureEquilibrium};
pub use observer::{Progress, ProgressCollector, ProgressReporter};
pub use runner::SimulatedAnnealing;
pub use types::{Annealing, Appraiser, Neighbor, Observer};
