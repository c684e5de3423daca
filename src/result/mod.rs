//! Result trackers.
//!
//! A tracker accumulates the states an optimizer offers it and keeps the
//! best ones under a caller-supplied comparator. The optimizers also borrow
//! the tracker's comparator to decide whether one state beats another, so
//! the tracker is the single place where "better" is defined for a run.
//!
//! - [`BestResult`]: keeps the single best state.
//! - [`TopResult`]: keeps the best `n` states, backed by a [`BoundedHeap`].

mod best;
mod heap;
mod top;

pub use best::BestResult;
pub use heap::BoundedHeap;
pub use top::TopResult;

use crate::state::State;

/// Accumulates observed states and exposes the best ones.
pub trait Tracker<C> {
    /// Snapshot type returned by [`get`](Tracker::get).
    type Output;

    /// Offers a candidate to the tracker.
    fn update(&mut self, candidate: State<C>);

    /// Returns a snapshot of the retained state(s).
    fn get(&self) -> Self::Output;

    /// Returns `true` if `lhs` is strictly better than `rhs`.
    fn compare(&self, lhs: &State<C>, rhs: &State<C>) -> bool;
}
