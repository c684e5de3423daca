//! Cooling schedules.
//!
//! A cooler maps the temperature snapshot taken after a step to the
//! temperature of the next step. Schedules defined relative to the start
//! temperature use the number of completed steps `k >= 1`:
//!
//! | Cooler | Next temperature |
//! |---|---|
//! | [`LinearCooler`] | `T - d` |
//! | [`ExponentialCooler`] | `T0 * decay^k` |
//! | [`LogarithmicCooler`] | `T0 / (1 + decay * ln(1 + k))` |
//! | [`BasicCooler`] | `T0 / (1 + ln(1 + k))` |

use crate::error::{Error, Result};

/// Temperature snapshot handed to coolers and equilibria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    /// Current temperature.
    pub current: f64,
    /// Start temperature of the run.
    pub start: f64,
    /// Minimum temperature of the run.
    pub min: f64,
    /// Completed temperature steps.
    pub step: usize,
}

/// Computes the next temperature.
///
/// Implemented for every `FnMut(&Temperature) -> f64` closure.
pub trait Cooler {
    fn cool(&mut self, temperature: &Temperature) -> f64;
}

impl<F> Cooler for F
where
    F: FnMut(&Temperature) -> f64,
{
    fn cool(&mut self, temperature: &Temperature) -> f64 {
        self(temperature)
    }
}

/// Subtracts a fixed decrement every step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearCooler {
    decrement: f64,
}

impl LinearCooler {
    /// `decrement` must be positive.
    pub fn new(decrement: f64) -> Result<Self> {
        if !(decrement > 0.0) || !decrement.is_finite() {
            return Err(Error::invalid(
                "decrement",
                format!("must be positive, got {decrement}"),
            ));
        }
        Ok(Self { decrement })
    }

    pub fn decrement(&self) -> f64 {
        self.decrement
    }
}

impl Cooler for LinearCooler {
    fn cool(&mut self, temperature: &Temperature) -> f64 {
        temperature.current - self.decrement
    }
}

/// Exponential multiplicative cooling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialCooler {
    decay: f64,
}

impl ExponentialCooler {
    /// `decay` must lie in `(0.8, 1.0]`.
    ///
    /// A decay of exactly `1.0` keeps the start temperature forever, so the
    /// run never reaches the minimum.
    pub fn new(decay: f64) -> Result<Self> {
        if !(decay > 0.8 && decay <= 1.0) {
            return Err(Error::invalid(
                "decay",
                format!("must be in (0.8, 1.0], got {decay}"),
            ));
        }
        Ok(Self { decay })
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl Cooler for ExponentialCooler {
    fn cool(&mut self, temperature: &Temperature) -> f64 {
        temperature.start * self.decay.powi(temperature.step as i32)
    }
}

/// Logarithmic multiplicative cooling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogarithmicCooler {
    decay: f64,
}

impl LogarithmicCooler {
    /// `decay` must be greater than `1.0`.
    pub fn new(decay: f64) -> Result<Self> {
        if !(decay > 1.0) || !decay.is_finite() {
            return Err(Error::invalid(
                "decay",
                format!("must be greater than 1.0, got {decay}"),
            ));
        }
        Ok(Self { decay })
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl Cooler for LogarithmicCooler {
    fn cool(&mut self, temperature: &Temperature) -> f64 {
        temperature.start / (1.0 + self.decay * (1.0 + temperature.step as f64).ln())
    }
}

/// Logarithmic cooling without a tunable decay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicCooler;

impl Cooler for BasicCooler {
    fn cool(&mut self, temperature: &Temperature) -> f64 {
        temperature.start / (1.0 + (1.0 + temperature.step as f64).ln())
    }
}
