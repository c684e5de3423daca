//! Termination predicates for the iterative optimizers.
//!
//! A predicate is consulted once per loop iteration, before the iteration
//! starts, so a run always stops on an iteration boundary.

/// Optimizers exposing a completed-iteration counter.
pub trait Iterative {
    /// Number of completed iterations.
    fn iteration(&self) -> usize;
}

/// Decides whether an optimizer should stop.
///
/// Implemented for every `FnMut(&O) -> bool` closure.
pub trait Termination<O: ?Sized> {
    /// Returns `true` to stop before the next iteration.
    fn should_stop(&mut self, optimizer: &O) -> bool;
}

impl<O: ?Sized, F> Termination<O> for F
where
    F: FnMut(&O) -> bool,
{
    fn should_stop(&mut self, optimizer: &O) -> bool {
        self(optimizer)
    }
}

/// Stops once the optimizer has completed `max` iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationTermination {
    max: usize,
}

impl IterationTermination {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl<O: Iterative + ?Sized> Termination<O> for IterationTermination {
    fn should_stop(&mut self, optimizer: &O) -> bool {
        optimizer.iteration() >= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(usize);

    impl Iterative for Counter {
        fn iteration(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_iteration_termination() {
        let mut term = IterationTermination::new(3);
        assert!(!term.should_stop(&Counter(0)));
        assert!(!term.should_stop(&Counter(2)));
        assert!(term.should_stop(&Counter(3)));
        assert!(term.should_stop(&Counter(4)));
    }

    #[test]
    fn test_closure_termination() {
        let mut calls = 0;
        let mut term = |c: &Counter| {
            calls += 1;
            c.0 > 1
        };
        assert!(!term.should_stop(&Counter(1)));
        assert!(term.should_stop(&Counter(2)));
        drop(term);
        assert_eq!(calls, 2);
    }
}
