//! SA configuration.

use crate::error::{Error, Result};

/// Configuration for [`SimulatedAnnealing`](super::SimulatedAnnealing).
///
/// # Examples
///
/// ```
/// use u_search::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_start_temperature(94.0)
///     .with_min_temperature(12.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Temperature of the first step.
    pub start_temperature: f64,

    /// The run stops once the temperature falls to or below this value.
    pub min_temperature: f64,

    /// Seed of the acceptance draws.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            start_temperature: 100.0,
            min_temperature: 1.0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_temperature > 0.0) {
            return Err(Error::invalid(
                "min_temperature",
                format!("must be positive, got {}", self.min_temperature),
            ));
        }
        if !(self.start_temperature > self.min_temperature) || !self.start_temperature.is_finite() {
            return Err(Error::invalid(
                "start_temperature",
                format!(
                    "must be finite and greater than min_temperature {}, got {}",
                    self.min_temperature, self.start_temperature
                ),
            ));
        }
        Ok(())
    }
}
