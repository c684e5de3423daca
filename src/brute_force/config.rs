//! Brute-force configuration.

use crate::error::{Error, Result};

/// Configuration for [`BruteForce`](super::BruteForce).
///
/// # Examples
///
/// ```
/// use u_search::brute_force::BruteForceConfig;
///
/// let config = BruteForceConfig::default().with_workers(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceConfig {
    /// Number of worker threads. `None` uses rayon's default (one per core).
    pub workers: Option<usize>,
}

impl BruteForceConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(Error::invalid("workers", "must be at least 1"));
        }
        Ok(())
    }
}
