//! Parallel exhaustive search.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rayon::iter::{ParallelBridge, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use super::config::BruteForceConfig;
use crate::error::{Error, Result};
use crate::result::Tracker;
use crate::state::{evaluate, Objective, State};

/// Counters of a finished brute-force run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BruteForceStats {
    /// Configurations the objective was called on.
    pub evaluated: usize,

    /// Evaluated states that passed the constraints and were offered to the
    /// tracker.
    pub accepted: usize,
}

/// Evaluates every configuration of a search space on a worker pool.
///
/// Evaluations run concurrently and complete in no particular order; the
/// tracker is the only shared mutable object and is updated under a lock.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use u_search::brute_force::{BruteForce, BruteForceConfig};
/// use u_search::result::{BestResult, Tracker};
/// use u_search::state::{maximize, State};
///
/// let search = BruteForce::new(BruteForceConfig::default().with_workers(2)).unwrap();
/// let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);
///
/// search
///     .run(
///         &mut result,
///         |_: &State<i32>| true,
///         |x: &i32| Ok::<_, Infallible>(State::new(*x, f64::from(*x))),
///         1..=10,
///     )
///     .unwrap();
///
/// assert_eq!(result.get().config, 10);
/// ```
pub struct BruteForce {
    pool: ThreadPool,
}

impl BruteForce {
    /// Creates the worker pool.
    pub fn new(config: BruteForceConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.unwrap_or(0))
            .thread_name(|i| format!("brute-force-{i}"))
            .build()?;
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Evaluates every configuration of `space`, offering each state that
    /// satisfies `constraints` to `result`.
    ///
    /// If an evaluation fails, configurations not yet started are skipped,
    /// evaluations already in flight finish, and the first failure is
    /// returned. States accepted before the failure stay in `result`.
    pub fn run<C, R, P, O, S>(
        &self,
        result: &mut R,
        constraints: P,
        objective: O,
        space: S,
    ) -> Result<BruteForceStats>
    where
        C: Debug + Send,
        R: Tracker<C> + Send,
        P: Fn(&State<C>) -> bool + Sync,
        O: Objective<C> + Sync,
        S: IntoIterator<Item = C>,
        S::IntoIter: Send,
    {
        debug!(workers = self.workers(), "brute force started");

        let tracker = Mutex::new(result);
        let first_error: Mutex<Option<Error>> = Mutex::new(None);
        let failed = AtomicBool::new(false);
        let evaluated = AtomicUsize::new(0);
        let accepted = AtomicUsize::new(0);

        let space = space.into_iter();
        self.pool.install(|| {
            space.par_bridge().for_each(|config| {
                if failed.load(Ordering::Acquire) {
                    return;
                }
                match evaluate(&objective, &config) {
                    Ok(state) => {
                        evaluated.fetch_add(1, Ordering::Relaxed);
                        if constraints(&state) {
                            accepted.fetch_add(1, Ordering::Relaxed);
                            tracker
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .update(state);
                        }
                    }
                    Err(err) => {
                        evaluated.fetch_add(1, Ordering::Relaxed);
                        failed.store(true, Ordering::Release);
                        let mut slot = first_error
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner);
                        if slot.is_none() {
                            *slot = Some(err);
                        } else {
                            warn!(error = %err, "discarding evaluation failure after the first one");
                        }
                    }
                }
            });
        });

        let stats = BruteForceStats {
            evaluated: evaluated.into_inner(),
            accepted: accepted.into_inner(),
        };

        if let Some(err) = first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
        {
            debug!(evaluated = stats.evaluated, error = %err, "brute force failed");
            return Err(err);
        }

        debug!(
            evaluated = stats.evaluated,
            accepted = stats.accepted,
            "brute force finished"
        );
        Ok(stats)
    }
}

impl Debug for BruteForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BruteForce")
            .field("workers", &self.workers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{BestResult, TopResult};
    use crate::space::{product, IntRange};
    use crate::state::{maximize, minimize};
    use std::convert::Infallible;
    use std::error::Error as _;
    use std::time::{Duration, Instant};

    fn identity(x: &i32) -> std::result::Result<State<i32>, Infallible> {
        Ok(State::new(*x, f64::from(*x)))
    }

    fn search(workers: usize) -> BruteForce {
        BruteForce::new(BruteForceConfig::default().with_workers(workers)).unwrap()
    }

    #[test]
    fn test_maximize_independent_of_workers() {
        for workers in [1, 4] {
            let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);
            let stats = search(workers)
                .run(&mut result, |_: &State<i32>| true, identity, 1..=10)
                .unwrap();
            assert_eq!(result.get(), State::new(10, 10.0), "workers = {workers}");
            assert_eq!(stats.evaluated, 10);
            assert_eq!(stats.accepted, 10);
        }
    }

    #[test]
    fn test_minimize_independent_of_workers() {
        for workers in [1, 4] {
            let mut result = BestResult::new(State::new(0, f64::INFINITY), minimize);
            search(workers)
                .run(&mut result, |_: &State<i32>| true, identity, 1..=10)
                .unwrap();
            assert_eq!(result.get(), State::new(1, 1.0), "workers = {workers}");
        }
    }

    #[test]
    fn test_rejecting_constraints_visit_everything() {
        let visited = AtomicUsize::new(0);
        let objective = |x: &i32| {
            visited.fetch_add(1, Ordering::SeqCst);
            identity(x)
        };
        let seed = State::new(-1, -1.0);
        let mut result = BestResult::new(seed.clone(), maximize);

        let stats = search(3)
            .run(&mut result, |_: &State<i32>| false, objective, 1..=10)
            .unwrap();

        assert_eq!(result.get(), seed);
        assert_eq!(visited.load(Ordering::SeqCst), 10);
        assert_eq!(stats.accepted, 0);
    }

    #[test]
    fn test_empty_space_is_noop() {
        let seed = State::new(7, 7.0);
        let mut result = BestResult::new(seed.clone(), maximize);
        let stats = search(2)
            .run(&mut result, |_: &State<i32>| true, identity, std::iter::empty())
            .unwrap();
        assert_eq!(result.get(), seed);
        assert_eq!(stats, BruteForceStats::default());
    }

    #[test]
    fn test_top_n_over_product_space() {
        let fast = IntRange::new(5, 25, 5).unwrap();
        let slow = IntRange::new(30, 90, 20).unwrap();
        let objective = |&(f, s): &(i32, i32)| {
            Ok::<_, Infallible>(State::new((f, s), -f64::from((s - 3 * f).abs())))
        };
        let mut result = TopResult::new(3, maximize);

        let stats = search(4)
            .run(
                &mut result,
                |s: &State<(i32, i32)>| s.config.0 < s.config.1,
                objective,
                product(fast, slow),
            )
            .unwrap();

        assert_eq!(stats.evaluated, 5 * 4);
        let best = result.get();
        assert_eq!(best.len(), 3);
        assert_eq!(best[0].value, 0.0);
        assert!(best.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_failure_is_surfaced_with_context() {
        let objective = |x: &i32| -> std::result::Result<State<i32>, String> {
            if *x == 13 {
                Err("unlucky".to_string())
            } else {
                Ok(State::new(*x, f64::from(*x)))
            }
        };
        let mut result = BestResult::new(State::new(0, f64::NEG_INFINITY), maximize);

        let err = search(4)
            .run(&mut result, |_: &State<i32>| true, objective, 1..=20)
            .unwrap_err();

        assert_eq!(err.to_string(), "evaluation failed for configuration 13");
        assert_eq!(err.source().map(|e| e.to_string()), Some("unlucky".into()));
    }

    /// Spins until `ready` holds, giving up after a few seconds.
    fn wait_until(ready: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !ready() {
            if Instant::now() > deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        true
    }

    #[test]
    fn test_failure_lets_running_siblings_finish() {
        let started = AtomicUsize::new(0);
        let failed = AtomicBool::new(false);
        let overlapped = AtomicBool::new(false);
        let objective = |x: &i32| -> std::result::Result<State<i32>, String> {
            if *x == 4 {
                overlapped.store(
                    wait_until(|| started.load(Ordering::SeqCst) == 3),
                    Ordering::SeqCst,
                );
                failed.store(true, Ordering::SeqCst);
                Err("boom".to_string())
            } else {
                started.fetch_add(1, Ordering::SeqCst);
                wait_until(|| failed.load(Ordering::SeqCst));
                Ok(State::new(*x, f64::from(*x)))
            }
        };
        let mut result = TopResult::new(10, maximize);

        let err = search(4)
            .run(&mut result, |_: &State<i32>| true, objective, 1..=4)
            .unwrap_err();

        assert!(overlapped.load(Ordering::SeqCst));
        assert!(matches!(err, Error::Evaluation { ref config, .. } if config == "4"));
        let kept: Vec<i32> = result.get().iter().map(|s| s.config).collect();
        assert_eq!(kept, vec![3, 2, 1]);
    }

    #[test]
    fn test_only_first_failure_is_returned() {
        let objective = |x: &i32| -> std::result::Result<State<i32>, String> {
            Err(format!("broken {x}"))
        };
        let mut result = BestResult::new(State::new(0, 0.0), maximize);

        let err = search(1)
            .run(&mut result, |_: &State<i32>| true, objective, 1..=5)
            .unwrap_err();

        assert!(err
            .to_string()
            .starts_with("evaluation failed for configuration "));
        assert_eq!(result.get(), State::new(0, 0.0));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = BruteForce::new(BruteForceConfig::default().with_workers(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "workers", .. }));
    }
}
