/*!
 * Contention Harness
 *
 * Races N workers over one padded shared state and reports what survived.
 * Divergence between expected and actual totals is a reported measurement,
 * never an error: it is exactly the symptom a broken lock exists to show.
 */

use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use crate::bench::config::BenchConfig;
use crate::bench::state::SharedState;
use crate::bench::worker::run_worker;
use crate::sync::benaphore::Benaphore;
use crate::sync::config::Algorithm;
use crate::sync::hybrid::HybridMutex;
use crate::sync::mutex::BlockingMutex;
use crate::sync::traits::LockStrategy;

/// Outcome of one contention run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    /// Name of the lock that was raced.
    pub lock: &'static str,
    /// Worker threads spawned.
    pub threads: usize,
    /// Increments demanded of each worker.
    pub target_increments: u64,
    /// `threads * target_increments`.
    pub expected: u64,
    /// What the shared total actually held after every join.
    pub actual: u64,
    /// Wall time from first spawn to last join.
    pub elapsed: Duration,
    /// Acquisitions that fell back to a blocking wait.
    pub contended_waits: u64,
}

impl BenchReport {
    /// True when no update was lost.
    pub fn is_consistent(&self) -> bool {
        self.expected == self.actual
    }
}

/// Run the configured contention test to completion.
pub fn run(config: &BenchConfig) -> BenchReport {
    match config.algorithm {
        Algorithm::Mutex => run_with(BlockingMutex::new(), config.threads, config.increments),
        Algorithm::Benaphore => run_with(Benaphore::new(), config.threads, config.increments),
        Algorithm::Hybrid => run_with(HybridMutex::new(), config.threads, config.increments),
    }
}

/// Race `threads` workers over one shared state guarded by `lock`.
///
/// Monomorphized per lock type so the measured loop carries no dispatch.
/// Returns only after every worker has terminated; a panicking worker is
/// resumed on the harness thread rather than silently dropped. The command
/// surface always arrives here through a validated `BenchConfig`; callers
/// taking this entry directly own their own thread-count sanity.
pub fn run_with<L: LockStrategy>(lock: L, threads: usize, increments: u64) -> BenchReport {
    let name = lock.name();
    let span = info_span!("contention_run", lock = name, threads);
    let _guard = span.enter();

    let mut state = SharedState::new(lock, increments);
    let start = Instant::now();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|_| scope.spawn(|| run_worker(&state)))
            .collect();

        // Nothing is read until every worker is done.
        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });

    let elapsed = start.elapsed();
    let contended_waits = state.lock().contended_waits();
    let expected = threads as u64 * increments;
    let actual = state.total();

    info!(
        expected,
        actual,
        elapsed_ms = elapsed.as_millis() as u64,
        contended_waits,
        "contention run complete"
    );
    let consistent = expected == actual;
    debug!(consistent, "totals compared");

    BenchReport {
        lock: name,
        threads,
        target_increments: increments,
        expected,
        actual,
        elapsed,
        contended_waits,
    }
}
