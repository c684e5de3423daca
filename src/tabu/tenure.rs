//! Tabu tenure policies.

use crate::error::{Error, Result};

/// Number of iterations a freshly remembered move stays tabu.
///
/// Implemented for every `FnMut() -> usize` closure.
pub trait Tenure {
    fn tenure(&mut self) -> usize;
}

impl<F> Tenure for F
where
    F: FnMut() -> usize,
{
    fn tenure(&mut self) -> usize {
        self()
    }
}

/// The same tenure for every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedTenure {
    iterations: usize,
}

impl FixedTenure {
    /// `iterations` must be at least 1.
    pub fn new(iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::invalid("tenure", "must be at least 1"));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl Default for FixedTenure {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}

impl Tenure for FixedTenure {
    fn tenure(&mut self) -> usize {
        self.iterations
    }
}
