//! Evaluated configurations and the contracts around them.
//!
//! A [`State`] pairs a caller-defined configuration with the scalar quality
//! computed by the caller's [`Objective`]. The optimizers never look inside
//! the configuration and never compare raw values themselves: "better" is
//! decided by a comparator supplied through the result tracker, so the same
//! engine maximizes or minimizes.

use std::fmt::Debug;

use crate::error::{BoxError, Error, Result};

/// A configuration together with its evaluated quality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State<C> {
    /// The evaluated configuration.
    pub config: C,
    /// Quality of `config` as computed by the objective function.
    pub value: f64,
}

impl<C> State<C> {
    /// Creates a state from a configuration and its value.
    pub fn new(config: C, value: f64) -> Self {
        Self { config, value }
    }
}

/// Comparator returning `true` if the first state is strictly better.
///
/// Must be a strict weak ordering; the top-N tracker relies on it for its
/// heap invariant.
pub type Comparator<C> = fn(&State<C>, &State<C>) -> bool;

/// Higher value is better.
pub fn maximize<C>(lhs: &State<C>, rhs: &State<C>) -> bool {
    lhs.value > rhs.value
}

/// Lower value is better.
pub fn minimize<C>(lhs: &State<C>, rhs: &State<C>) -> bool {
    lhs.value < rhs.value
}

/// The caller's objective function: computes the [`State`] of a configuration.
///
/// Implemented for every `Fn(&C) -> Result<State<C>, E>` closure, so an
/// infallible objective is written as
///
/// ```
/// use std::convert::Infallible;
/// use u_search::state::{Objective, State};
///
/// let objective = |x: &i32| Ok::<_, Infallible>(State::new(*x, f64::from(*x)));
/// assert_eq!(objective.evaluate(&4).unwrap().value, 4.0);
/// ```
///
/// Brute-force search calls the objective from several workers at once, so
/// it must not share mutable state between invocations.
pub trait Objective<C> {
    /// Error returned when a configuration cannot be evaluated.
    type Error: Into<BoxError>;

    /// Evaluates `config`.
    fn evaluate(&self, config: &C) -> std::result::Result<State<C>, Self::Error>;
}

impl<C, F, E> Objective<C> for F
where
    F: Fn(&C) -> std::result::Result<State<C>, E>,
    E: Into<BoxError>,
{
    type Error = E;

    fn evaluate(&self, config: &C) -> std::result::Result<State<C>, E> {
        self(config)
    }
}

/// Evaluates `config`, attaching the configuration to any failure.
pub(crate) fn evaluate<C, O>(objective: &O, config: &C) -> Result<State<C>>
where
    C: Debug,
    O: Objective<C> + ?Sized,
{
    objective.evaluate(config).map_err(|source| Error::Evaluation {
        config: format!("{config:?}"),
        source: source.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::error::Error as _;

    #[test]
    fn test_comparators() {
        let low = State::new('a', 1.0);
        let high = State::new('b', 2.0);
        assert!(maximize(&high, &low));
        assert!(!maximize(&low, &high));
        assert!(minimize(&low, &high));
        assert!(!minimize(&low, &low));
        assert!(!maximize(&low, &low));
    }

    #[test]
    fn test_evaluate_ok() {
        let objective = |x: &i32| Ok::<_, Infallible>(State::new(*x, f64::from(*x) * 2.0));
        let state = evaluate(&objective, &21).unwrap();
        assert_eq!(state, State::new(21, 42.0));
    }

    #[test]
    fn test_evaluate_wraps_failure() {
        let objective = |x: &i32| -> std::result::Result<State<i32>, String> {
            Err(format!("no candles for period {x}"))
        };
        let err = evaluate(&objective, &14).unwrap_err();
        assert_eq!(err.to_string(), "evaluation failed for configuration 14");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("no candles for period 14".to_string())
        );
    }
}
