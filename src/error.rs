//! Error types shared by all optimizers.
//!
//! Two kinds of failure are recoverable and surface as [`Error`]:
//!
//! - **Invalid arguments**: out-of-range hyperparameters rejected by a
//!   constructor or a `validate()` call. The optimizer is never created.
//! - **Evaluation failures**: the caller's objective function failed for
//!   one configuration. The original error is kept as the
//!   [`source`](std::error::Error::source) and the failing configuration is
//!   recorded in the message.
//!
//! Contract violations by policies (e.g. an appraiser producing an
//! acceptance probability outside `[0, 1]`) are programming errors and
//! panic instead.

/// Boxed error produced by a caller-supplied objective function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the optimizers in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hyperparameter is out of its valid range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the valid range.
        reason: String,
    },

    /// The objective function failed for a configuration.
    #[error("evaluation failed for configuration {config}")]
    Evaluation {
        /// `Debug` rendering of the configuration being evaluated.
        config: String,
        /// The error returned by the objective function.
        #[source]
        source: BoxError,
    },

    /// The brute-force worker pool could not be created.
    #[error("failed to build worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("market data missing")]
    struct MissingData;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid("min_temperature", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "invalid argument `min_temperature`: must be positive, got -1"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_evaluation_keeps_cause() {
        let err = Error::Evaluation {
            config: "(3, 7)".into(),
            source: Box::new(MissingData),
        };
        assert_eq!(err.to_string(), "evaluation failed for configuration (3, 7)");
        let cause = err.source().expect("cause must be kept");
        assert_eq!(cause.to_string(), "market data missing");
    }
}
