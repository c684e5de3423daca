//! Genetic Algorithm (GA).
//!
//! A population-based optimizer over caller-defined configurations. The
//! generation loop is fixed; what varies is pluggable through a
//! [`Pipeline`] of policies: a [`Sizer`], a [`Selection`], a [`Matchmaker`]
//! grouping parents into tuples of `P`, a [`Crossover`], a [`Mutation`] and a
//! [`Replacement`].
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//! use u_search::ga::{
//!     BasicSizer, ElitismReplacement, GeneticAlgorithm, Pipeline, RandomMatchmaker,
//!     TournamentSelection,
//! };
//! use u_search::result::{BestResult, Tracker};
//! use u_search::state::{maximize, Comparator, State};
//! use u_search::termination::IterationTermination;
//!
//! let init: Vec<i32> = (0..20).collect();
//! let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);
//! let better = maximize as Comparator<i32>;
//!
//! GeneticAlgorithm::new()
//!     .run(
//!         &init,
//!         &mut result,
//!         |_: &State<i32>| true,
//!         |x: &i32| Ok::<_, Infallible>(State::new(*x, -f64::from((x - 42).abs()))),
//!         Pipeline::new(
//!             BasicSizer::new(1.0).unwrap(),
//!             TournamentSelection::new(3, better, Some(1)).unwrap(),
//!             RandomMatchmaker::<2>::new(Some(2)).unwrap(),
//!             |[a, b]: [i32; 2]| [a + b, a.max(b)],
//!             |child: i32| child,
//!             ElitismReplacement::new(0.2, better).unwrap(),
//!             IterationTermination::new(20),
//!         ),
//!         &mut [],
//!     )
//!     .unwrap();
//!
//! assert!(result.get().value > -10.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod observer;
mod operators;
mod runner;
mod selection;
mod types;

pub use observer::{Progress, ProgressCollector, ProgressReporter};
pub use operators::{
    BasicSizer, ElitismReplacement, EnBlockReplacement, RandomGroups, RandomMatchmaker,
};
pub use runner::GeneticAlgorithm;
pub use selection::{RouletteSelection, TournamentSelection};
pub use types::{Crossover, Matchmaker, Mutation, Observer, Pipeline, Replacement, Selection, Sizer};
