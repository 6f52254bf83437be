/*!
 * Worker Loop
 * The unit of concurrent execution the harness races
 */

use tracing::trace;

use crate::bench::state::SharedState;
use crate::sync::traits::LockStrategy;

/// Hammer the shared total: lock, add one, unlock, `target_increments`
/// times.
///
/// The worker owns nothing but its loop counter; everything interesting
/// lives in the shared state. Kept free of per-iteration bookkeeping so the
/// measured loop is the lock protocol and the increment, nothing else.
pub fn run_worker<L: LockStrategy>(state: &SharedState<L>) {
    let lock = state.lock();
    let target = state.target_increments();
    trace!(target_increments = target, "worker starting");

    for _ in 0..target {
        lock.lock();
        // SAFETY: the lock is held from the line above until the unlock
        // below, which is exactly the window of this write.
        unsafe { state.increment_total() };
        lock.unlock();
    }

    trace!("worker finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{Benaphore, BlockingMutex, HybridMutex};

    #[test]
    fn test_single_worker_hits_target_exactly() {
        let mut state = SharedState::new(Benaphore::new(), 10_000);
        run_worker(&state);
        assert_eq!(state.total(), 10_000);
    }

    #[test]
    fn test_zero_target_is_a_no_op() {
        let mut state = SharedState::new(BlockingMutex::new(), 0);
        run_worker(&state);
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn test_sequential_workers_accumulate() {
        let mut state = SharedState::new(HybridMutex::new(), 2_500);
        run_worker(&state);
        run_worker(&state);
        assert_eq!(state.total(), 5_000);
    }
}
