//! Search-space building blocks.
//!
//! - [`IntRange`]: an inclusive, stepped integer range. It is both an
//!   enumerable search space for brute force and the domain of
//!   [`IntNeighbor`].
//! - [`product`]: cartesian product of two spaces, nested-loop order.
//! - [`IntNeighbor`]: random neighbor within a change span of an origin,
//!   wrapping around the ends of the range.

use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{Error, Result};
use crate::random::rng_from;

/// Inclusive integer range `from, from + step, ..., to`.
///
/// The step may be negative for a descending range, but it must point from
/// `from` towards `to` and must land exactly on `to`.
///
/// # Examples
///
/// ```
/// use u_search::space::IntRange;
///
/// let periods = IntRange::new(30, 10, -10).unwrap();
/// assert_eq!(periods.iter().collect::<Vec<_>>(), vec![30, 20, 10]);
/// assert_eq!(periods.value_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    from: i32,
    to: i32,
    step: i32,
}

impl IntRange {
    /// Creates a validated range.
    pub fn new(from: i32, to: i32, step: i32) -> Result<Self> {
        if step == 0 {
            return Err(Error::invalid("step", "must be non-zero"));
        }
        let span = i64::from(to) - i64::from(from);
        if span != 0 && (span > 0) != (step > 0) {
            return Err(Error::invalid(
                "step",
                format!("{step} does not lead from {from} to {to}"),
            ));
        }
        if span % i64::from(step) != 0 {
            return Err(Error::invalid(
                "step",
                format!("{step} does not land on {to} when starting from {from}"),
            ));
        }
        Ok(Self { from, to, step })
    }

    pub fn from(&self) -> i32 {
        self.from
    }

    pub fn to(&self) -> i32 {
        self.to
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Smallest value of the range.
    pub fn min(&self) -> i32 {
        self.from.min(self.to)
    }

    /// Largest value of the range.
    pub fn max(&self) -> i32 {
        self.from.max(self.to)
    }

    /// Number of values in the range (always at least one).
    pub fn value_count(&self) -> usize {
        let span = (i64::from(self.to) - i64::from(self.from)).unsigned_abs();
        (span / u64::from(self.step.unsigned_abs())) as usize + 1
    }

    /// Position of `value` in iteration order, if it belongs to the range.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        let offset = i64::from(value) - i64::from(self.from);
        let step = i64::from(self.step);
        if offset % step != 0 {
            return None;
        }
        let idx = offset / step;
        (idx >= 0 && (idx as usize) < self.value_count()).then_some(idx as usize)
    }

    /// Value at position `idx` in iteration order.
    pub fn value_at(&self, idx: usize) -> Option<i32> {
        (idx < self.value_count()).then(|| self.nth(idx))
    }

    /// `idx` must be below `value_count`, which keeps the result in range.
    fn nth(&self, idx: usize) -> i32 {
        let value = i64::from(self.from) + idx as i64 * i64::from(self.step);
        value as i32
    }

    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// Iterates the range from `from` to `to`.
    pub fn iter(&self) -> Values {
        Values {
            range: *self,
            next: 0,
            count: self.value_count(),
        }
    }
}

impl IntoIterator for IntRange {
    type Item = i32;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.iter()
    }
}

impl IntoIterator for &IntRange {
    type Item = i32;
    type IntoIter = Values;

    fn into_iter(self) -> Values {
        self.iter()
    }
}

/// Iterator over the values of an [`IntRange`].
#[derive(Debug, Clone)]
pub struct Values {
    range: IntRange,
    next: usize,
    count: usize,
}

impl Iterator for Values {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.next >= self.count {
            return None;
        }
        let value = self.range.value_at(self.next);
        self.next += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Values {}

/// Cartesian product of two spaces, `a` in the outer loop.
///
/// ```
/// use u_search::space::{product, IntRange};
///
/// let fast = IntRange::new(1, 2, 1).unwrap();
/// let slow = IntRange::new(10, 20, 10).unwrap();
/// let pairs: Vec<_> = product(fast, slow).collect();
/// assert_eq!(pairs, vec![(1, 10), (1, 20), (2, 10), (2, 20)]);
/// ```
pub fn product<A, B>(a: A, b: B) -> impl Iterator<Item = (A::Item, B::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::IntoIter: Clone,
{
    let b = b.into_iter();
    a.into_iter()
        .flat_map(move |x| b.clone().map(move |y| (x.clone(), y)))
}

/// Draws random values of an [`IntRange`], either anywhere in the range or
/// within `span` steps of an origin.
///
/// Offsets that run past either end wrap around to the other end, so every
/// value of the range has the same number of neighbors. The origin itself is
/// never returned.
#[derive(Debug, Clone)]
pub struct IntNeighbor {
    range: IntRange,
    span: usize,
    rng: StdRng,
}

impl IntNeighbor {
    /// Creates a neighbor generator.
    ///
    /// `span` must lie in `[1, value_count / 2]`.
    pub fn new(range: IntRange, span: usize, seed: Option<u64>) -> Result<Self> {
        let max_span = range.value_count() / 2;
        if span == 0 || span > max_span {
            return Err(Error::invalid(
                "span",
                format!("must be in [1, {max_span}], got {span}"),
            ));
        }
        Ok(Self {
            range,
            span,
            rng: rng_from(seed),
        })
    }

    pub fn range(&self) -> &IntRange {
        &self.range
    }

    pub fn span(&self) -> usize {
        self.span
    }

    /// Uniformly random value of the range.
    pub fn sample(&mut self) -> i32 {
        let idx = self.rng.random_range(0..self.range.value_count());
        self.range.nth(idx)
    }

    /// Random value at most `span` steps away from `origin`.
    ///
    /// # Panics
    /// Panics if `origin` does not belong to the range.
    pub fn next_from(&mut self, origin: i32) -> i32 {
        let idx = self
            .range
            .index_of(origin)
            .unwrap_or_else(|| panic!("origin {origin} is outside {:?}", self.range));
        let span = self.span as i64;
        let count = self.range.value_count() as i64;

        // Offsets in [-span, -1] and [1, span].
        let draw = self.rng.random_range(0..2 * span);
        let offset = if draw < span { draw - span } else { draw - span + 1 };
        let next = (idx as i64 + offset).rem_euclid(count);
        self.range.nth(next as usize)
    }
}

impl crate::sa::Neighbor<i32> for IntNeighbor {
    fn neighbor(&mut self, origin: &i32) -> i32 {
        self.next_from(*origin)
    }
}

/// The move is the value that was moved to.
impl crate::tabu::Neighbor<i32, i32> for IntNeighbor {
    fn neighbor(&mut self, origin: &i32) -> (i32, i32) {
        let next = self.next_from(*origin);
        (next, next)
    }
}
