//! Tabu memories.
//!
//! A memory maps moves to a remaining-tenure counter. A move is tabu while
//! its counter is non-zero; [`forget`](Memory::forget) decrements every
//! counter and evicts the ones reaching zero, and
//! [`remember`](Memory::remember) (re)arms a move's counter from the tenure
//! policy.
//!
//! Configurations made of several independent parts usually move along one
//! part at a time. Describe the move as an enum with one variant per part and
//! compose a memory per variant with an exhaustive `match`:
//!
//! ```
//! use u_search::space::IntRange;
//! use u_search::tabu::{FixedTenure, FlagMemory, IntRangeMemory, Memory};
//!
//! enum Move {
//!     Period(i32),
//!     Indicator,
//! }
//!
//! struct StrategyMemory {
//!     period: IntRangeMemory,
//!     indicator: FlagMemory,
//! }
//!
//! impl Memory<Move> for StrategyMemory {
//!     fn contains(&self, mv: &Move) -> bool {
//!         match mv {
//!             Move::Period(p) => self.period.contains(p),
//!             Move::Indicator => self.indicator.contains(&()),
//!         }
//!     }
//!
//!     fn remember(&mut self, mv: &Move) {
//!         match mv {
//!             Move::Period(p) => self.period.remember(p),
//!             Move::Indicator => self.indicator.remember(&()),
//!         }
//!     }
//!
//!     fn forget(&mut self) {
//!         Memory::<i32>::forget(&mut self.period);
//!         Memory::<()>::forget(&mut self.indicator);
//!     }
//!
//!     fn len(&self) -> usize {
//!         Memory::<i32>::len(&self.period) + Memory::<()>::len(&self.indicator)
//!     }
//! }
//!
//! let tenure = FixedTenure::new(2).unwrap();
//! let mut memory = StrategyMemory {
//!     period: IntRangeMemory::new(IntRange::new(5, 50, 5).unwrap(), tenure).unwrap(),
//!     indicator: FlagMemory::new(tenure),
//! };
//! memory.remember(&Move::Period(20));
//! assert!(memory.contains(&Move::Period(20)));
//! assert!(!memory.contains(&Move::Indicator));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::tenure::{FixedTenure, Tenure};
use crate::error::{Error, Result};
use crate::space::IntRange;

/// Remembers recently taken moves.
pub trait Memory<M> {
    /// Returns `true` if `mv` is currently tabu.
    fn contains(&self, mv: &M) -> bool;

    /// Makes `mv` tabu for the next tenure iterations.
    fn remember(&mut self, mv: &M);

    /// Ages every remembered move by one iteration.
    fn forget(&mut self);

    /// Number of moves currently tabu.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense counters over the values of an [`IntRange`]; the move is the value
/// moved to.
///
/// One counter is allocated per value, so the range may hold at most
/// [`MAX_VALUES`](Self::MAX_VALUES) values. Wider ranges can use a
/// [`MoveMemory<i32>`] instead.
#[derive(Debug, Clone)]
pub struct IntRangeMemory<T = FixedTenure> {
    range: IntRange,
    tenure: T,
    counters: Vec<usize>,
    len: usize,
}

impl<T: Tenure> IntRangeMemory<T> {
    pub const MAX_VALUES: usize = 1 << 24;

    pub fn new(range: IntRange, tenure: T) -> Result<Self> {
        let count = range.value_count();
        if count > Self::MAX_VALUES {
            return Err(Error::invalid(
                "range",
                format!("{count} values exceed the limit of {}", Self::MAX_VALUES),
            ));
        }
        Ok(Self {
            counters: vec![0; count],
            range,
            tenure,
            len: 0,
        })
    }

    pub fn range(&self) -> &IntRange {
        &self.range
    }

    pub fn tenure(&self) -> &T {
        &self.tenure
    }
}

impl<T: Tenure> Memory<i32> for IntRangeMemory<T> {
    /// Values outside the range are never tabu.
    fn contains(&self, mv: &i32) -> bool {
        self.range
            .index_of(*mv)
            .is_some_and(|idx| self.counters[idx] > 0)
    }

    /// # Panics
    /// Panics if `mv` does not belong to the range.
    fn remember(&mut self, mv: &i32) {
        let idx = self
            .range
            .index_of(*mv)
            .unwrap_or_else(|| panic!("move {mv} is outside {:?}", self.range));
        let was_tabu = self.counters[idx] > 0;
        self.counters[idx] = self.tenure.tenure();
        match (was_tabu, self.counters[idx] > 0) {
            (false, true) => self.len += 1,
            (true, false) => self.len -= 1,
            _ => {}
        }
    }

    fn forget(&mut self) {
        for counter in self.counters.iter_mut().filter(|c| **c > 0) {
            *counter -= 1;
            if *counter == 0 {
                self.len -= 1;
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Hash map keyed by the move itself, for moves such as arrays or tuples.
#[derive(Debug, Clone)]
pub struct MoveMemory<M, T = FixedTenure> {
    tenure: T,
    moves: HashMap<M, usize>,
}

impl<M, T> MoveMemory<M, T>
where
    M: Eq + Hash,
    T: Tenure,
{
    pub fn new(tenure: T) -> Self {
        Self {
            tenure,
            moves: HashMap::new(),
        }
    }

    pub fn tenure(&self) -> &T {
        &self.tenure
    }

    /// Remaining tenure of `mv`, `0` if it is not tabu.
    pub fn remaining(&self, mv: &M) -> usize {
        self.moves.get(mv).copied().unwrap_or(0)
    }
}

impl<M, T> Memory<M> for MoveMemory<M, T>
where
    M: Clone + Eq + Hash,
    T: Tenure,
{
    fn contains(&self, mv: &M) -> bool {
        self.moves.contains_key(mv)
    }

    fn remember(&mut self, mv: &M) {
        match self.tenure.tenure() {
            0 => {
                self.moves.remove(mv);
            }
            tenure => {
                self.moves.insert(mv.clone(), tenure);
            }
        }
    }

    fn forget(&mut self) {
        self.moves.retain(|_, remaining| {
            *remaining -= 1;
            *remaining > 0
        });
    }

    fn len(&self) -> usize {
        self.moves.len()
    }
}

/// A single counter for categorical moves: any remembered move makes every
/// move of this kind tabu.
#[derive(Debug, Clone)]
pub struct FlagMemory<T = FixedTenure> {
    tenure: T,
    remaining: usize,
}

impl<T: Tenure> FlagMemory<T> {
    pub fn new(tenure: T) -> Self {
        Self {
            tenure,
            remaining: 0,
        }
    }

    pub fn tenure(&self) -> &T {
        &self.tenure
    }
}

impl<M, T: Tenure> Memory<M> for FlagMemory<T> {
    fn contains(&self, _: &M) -> bool {
        self.remaining > 0
    }

    fn remember(&mut self, _: &M) {
        self.remaining = self.tenure.tenure();
    }

    fn forget(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn len(&self) -> usize {
        usize::from(self.remaining > 0)
    }
}
