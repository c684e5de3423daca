//! Number of neighbor trials per temperature step.

use super::cooler::Temperature;
use crate::error::{Error, Result};

/// Decides how many trials to run at the current temperature.
///
/// Implemented for every `FnMut(&Temperature) -> usize` closure.
pub trait Equilibrium {
    fn trials(&mut self, temperature: &Temperature) -> usize;
}

impl<F> Equilibrium for F
where
    F: FnMut(&Temperature) -> usize,
{
    fn trials(&mut self, temperature: &Temperature) -> usize {
        self(temperature)
    }
}

/// Same number of trials at every temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedEquilibrium {
    trials: usize,
}

impl FixedEquilibrium {
    /// `trials` must be at least 1.
    pub fn new(trials: usize) -> Result<Self> {
        if trials == 0 {
            return Err(Error::invalid("trials", "must be at least 1"));
        }
        Ok(Self { trials })
    }

    pub fn trials_count(&self) -> usize {
        self.trials
    }
}

impl Equilibrium for FixedEquilibrium {
    fn trials(&mut self, _: &Temperature) -> usize {
        self.trials
    }
}

/// `floor(multiplier * T)` trials, so hot steps explore more.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureEquilibrium {
    multiplier: f64,
}

impl TemperatureEquilibrium {
    /// `multiplier` must be positive.
    pub fn new(multiplier: f64) -> Result<Self> {
        if !(multiplier > 0.0) || !multiplier.is_finite() {
            return Err(Error::invalid(
                "multiplier",
                format!("must be positive, got {multiplier}"),
            ));
        }
        Ok(Self { multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Equilibrium for TemperatureEquilibrium {
    fn trials(&mut self, temperature: &Temperature) -> usize {
        (self.multiplier * temperature.current).floor().max(0.0) as usize
    }
}
