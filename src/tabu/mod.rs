//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses memory structures
//! (the tabu list) to forbid recently taken moves, preventing cycling
//! and encouraging exploration of new regions of the search space.
//!
//! Each iteration samples a neighborhood of the current configuration. A
//! [`Neighbor`] returns the move along with the configuration it leads to;
//! the [`Memory`] keeps those moves tabu for a [`Tenure`], and the
//! [`Aspiration`] can override the ban for exceptional candidates.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod memory;
mod observer;
mod runner;
mod tenure;
mod types;

pub use memory::{FlagMemory, IntRangeMemory, Memory, MoveMemory};
pub use observer::{Progress, ProgressCollector, ProgressReporter};
pub use runner::TabuSearch;
pub use tenure::{FixedTenure, Tenure};
pub use types::{
    Aspiration, Exploration, FixedNeighborhood, ImprovesBest, Neighbor, NeighborhoodSizer,
    Observer,
};
