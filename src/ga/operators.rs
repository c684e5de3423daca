//! Built-in sizing, matchmaking and replacement policies.
//!
//! Crossover and mutation are problem specific and always supplied by the
//! caller, usually as closures.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::types::{Matchmaker, Replacement, Sizer};
use crate::error::{Error, Result};
use crate::random::rng_from;
use crate::state::State;

// ============================================================================
// Sizer
// ============================================================================

/// Selects `floor(growth * population)` parents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicSizer {
    growth: f64,
}

impl BasicSizer {
    /// `growth` must be finite and positive.
    pub fn new(growth: f64) -> Result<Self> {
        if !growth.is_finite() || growth <= 0.0 {
            return Err(Error::invalid(
                "growth",
                format!("must be finite and positive, got {growth}"),
            ));
        }
        Ok(Self { growth })
    }

    pub fn growth(&self) -> f64 {
        self.growth
    }
}

impl Sizer for BasicSizer {
    fn size(&mut self, population: usize) -> usize {
        (self.growth * population as f64) as usize
    }
}

// ============================================================================
// Matchmaker
// ============================================================================

/// Shuffles the parents and deals them into groups of `P`.
///
/// Fewer than `P` parents produce no group. Otherwise `ceil(len / P)` groups
/// are produced; when `len` is not a multiple of `P` the last group takes the
/// leftover parents and fills its remaining slots from the group before it.
#[derive(Debug, Clone)]
pub struct RandomMatchmaker<const P: usize> {
    rng: StdRng,
}

impl<const P: usize> RandomMatchmaker<P> {
    /// Fails if `P` is zero.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        if P == 0 {
            return Err(Error::invalid("group size", "must be at least 1"));
        }
        Ok(Self {
            rng: rng_from(seed),
        })
    }
}

impl<C: Clone, const P: usize> Matchmaker<C, P> for RandomMatchmaker<P> {
    type Groups<'a>
        = RandomGroups<'a, C, P>
    where
        Self: 'a,
        C: 'a;

    fn groups<'a>(&'a mut self, parents: &'a mut [State<C>]) -> RandomGroups<'a, C, P> {
        parents.shuffle(&mut self.rng);
        let count = if parents.len() < P {
            0
        } else {
            parents.len().div_ceil(P)
        };
        RandomGroups {
            parents,
            next: 0,
            count,
        }
    }
}

/// Iterator returned by [`RandomMatchmaker`].
#[derive(Debug)]
pub struct RandomGroups<'a, C, const P: usize> {
    parents: &'a [State<C>],
    next: usize,
    count: usize,
}

impl<C: Clone, const P: usize> Iterator for RandomGroups<'_, C, P> {
    type Item = [C; P];

    fn next(&mut self) -> Option<[C; P]> {
        if self.next == self.count {
            return None;
        }
        let start = self.next * P;
        let leftover = self.parents.len() - start;
        self.next += 1;

        Some(std::array::from_fn(|slot| {
            let idx = if slot < leftover {
                start + slot
            } else {
                start - P + slot
            };
            self.parents[idx].config.clone()
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<C: Clone, const P: usize> ExactSizeIterator for RandomGroups<'_, C, P> {}

impl<C: Clone, const P: usize> FusedIterator for RandomGroups<'_, C, P> {}

// ============================================================================
// Replacement
// ============================================================================

/// The children replace the whole population.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnBlockReplacement;

impl<C> Replacement<C> for EnBlockReplacement {
    fn replace(&mut self, _: Vec<State<C>>, children: Vec<State<C>>) -> Vec<State<C>> {
        children
    }
}

/// Keeps the `floor(ratio * parents)` best parents, followed by every child.
#[derive(Debug, Clone, Copy)]
pub struct ElitismReplacement<F> {
    ratio: f64,
    better: F,
}

impl<F> ElitismReplacement<F> {
    /// `ratio` must lie in `[0, 1]`; `better` should be the comparator of
    /// the run's result tracker.
    pub fn new(ratio: f64, better: F) -> Result<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::invalid(
                "elite ratio",
                format!("must be in [0, 1], got {ratio}"),
            ));
        }
        Ok(Self { ratio, better })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl<C, F> Replacement<C> for ElitismReplacement<F>
where
    F: Fn(&State<C>, &State<C>) -> bool,
{
    fn replace(&mut self, mut parents: Vec<State<C>>, children: Vec<State<C>>) -> Vec<State<C>> {
        let elites = (self.ratio * parents.len() as f64) as usize;
        parents.sort_by(|lhs, rhs| {
            if (self.better)(lhs, rhs) {
                Ordering::Less
            } else if (self.better)(rhs, lhs) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        parents.truncate(elites);
        parents.extend(children);
        parents
    }
}
