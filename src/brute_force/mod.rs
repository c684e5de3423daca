//! Parallel brute-force search.
//!
//! Exhaustively evaluates a lazily produced, finite search space on a rayon
//! worker pool and feeds every feasible state to a result tracker.

mod config;
mod runner;

pub use config::BruteForceConfig;
pub use runner::{BruteForce, BruteForceStats};
