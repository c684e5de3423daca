//! Domain-agnostic combinatorial optimization engine.
//!
//! Explores a space of caller-defined configurations to maximize or minimize
//! a caller-supplied objective, subject to caller-supplied constraints,
//! while a result tracker keeps the best (or best N) states found.
//!
//! - **Brute force**: evaluates a whole (lazily enumerated) search space on
//!   a worker pool.
//! - **Genetic Algorithm (GA)**: population-based evolutionary optimization
//!   with pluggable sizing, selection, matchmaking, crossover, mutation and
//!   replacement.
//! - **Simulated Annealing (SA)**: single-solution trajectory optimization
//!   with pluggable cooling schedules and equilibria.
//! - **Tabu Search (TS)**: single-solution trajectory optimization using
//!   short-term memory (tabu list) to escape local optima.
//!
//! # Architecture
//!
//! The optimizers never look inside a configuration. A configuration only
//! meets the engine through a [`state::State`], the pair of the
//! configuration and its objective value, and "better" is always decided by
//! the comparator of the [`result::Tracker`] in use. Every policy is a trait
//! implemented by the built-in types and by plain closures.
//!
//! GA, SA and Tabu Search run synchronously on the caller's thread. Brute
//! force is the only parallel algorithm.

pub mod brute_force;
pub mod error;
pub mod ga;
pub mod random;
pub mod result;
pub mod sa;
pub mod space;
pub mod state;
pub mod tabu;
pub mod termination;

pub use error::{Error, Result};
