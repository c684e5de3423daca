//! Top-N result tracker.

use super::{BoundedHeap, Tracker};
use crate::state::{Comparator, State};

/// Keeps the best `n` states ever offered, sorted best to worst on
/// [`get`](Tracker::get).
///
/// A candidate enters a full tracker only if it is strictly better than the
/// worst retained state. With `n == 0` nothing is retained.
///
/// # Examples
///
/// ```
/// use u_search::result::{TopResult, Tracker};
/// use u_search::state::{minimize, State};
///
/// let mut result: TopResult<i32, _> = TopResult::new(2, minimize);
/// for x in [4, 2, 8, 1] {
///     result.update(State::new(x, f64::from(x)));
/// }
/// let best: Vec<i32> = result.get().into_iter().map(|s| s.config).collect();
/// assert_eq!(best, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TopResult<C, F = Comparator<C>> {
    heap: BoundedHeap<State<C>, F>,
}

impl<C, F> TopResult<C, F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    /// Creates a tracker retaining the best `n` states.
    pub fn new(n: usize, better: F) -> Self {
        Self {
            heap: BoundedHeap::new(n, better),
        }
    }

    /// Number of states the tracker retains at most.
    pub fn n_best(&self) -> usize {
        self.heap.limit()
    }

    /// Number of states currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no state has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<C, F> Tracker<C> for TopResult<C, F>
where
    C: Clone,
    F: Fn(&State<C>, &State<C>) -> bool,
{
    type Output = Vec<State<C>>;

    fn update(&mut self, candidate: State<C>) {
        self.heap.push(candidate);
    }

    fn get(&self) -> Vec<State<C>> {
        self.heap.sorted()
    }

    fn compare(&self, lhs: &State<C>, rhs: &State<C>) -> bool {
        self.heap.is_better(lhs, rhs)
    }
}
