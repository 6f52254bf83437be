/*!
 * Hybrid Mutex
 *
 * Benaphore with a bounded spin phase. The critical sections this crate
 * races are a single increment, so a contended lock is usually free again
 * within a few scheduler yields; a short optimistic CAS loop often saves
 * the whole park/unpark round trip.
 *
 * # Protocol
 *
 * Acquisition attempts `count: 0 -> 1` up to `spin_limit` times, yielding
 * after each failure. Once the budget is exhausted it enters the benaphore
 * protocol: increment, and park when the previous value shows a conflict.
 * Release is exactly the benaphore release. A spinner never observes the
 * counter at zero while sleepers exist without those sleepers having been
 * signaled, because sleepers are only ever counted in.
 */

use std::sync::atomic::{AtomicI32, Ordering};
use std::thread;

use crate::check_invariant;
use crate::core::limits::DEFAULT_SPIN_LIMIT;
use crate::sync::semaphore::Semaphore;
use crate::sync::traits::LockStrategy;

/// Spin-then-block lock.
pub struct HybridMutex {
    /// Threads inside or waiting; 0 when free.
    count: AtomicI32,
    /// Zero-permit semaphore backing the blocking phase.
    sema: Semaphore,
    /// CAS attempts before giving up and parking.
    spin_limit: u32,
}

impl HybridMutex {
    /// Create an unlocked hybrid mutex with the default spin budget.
    pub const fn new() -> Self {
        Self::with_spin_limit(DEFAULT_SPIN_LIMIT)
    }

    /// Create with a custom spin budget. A budget of zero degrades to a
    /// plain benaphore.
    pub const fn with_spin_limit(spin_limit: u32) -> Self {
        Self {
            count: AtomicI32::new(0),
            sema: Semaphore::new(0),
            spin_limit,
        }
    }

    /// The configured spin budget.
    #[inline]
    pub fn spin_limit(&self) -> u32 {
        self.spin_limit
    }
}

impl Default for HybridMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStrategy for HybridMutex {
    #[inline]
    fn lock(&self) {
        for _ in 0..self.spin_limit {
            // Strong CAS: each failure costs a yield anyway, so spurious
            // failures would only burn budget.
            if self
                .count
                .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return;
            }
            thread::yield_now();
        }

        // Budget exhausted: count ourselves in and park like a benaphore.
        let previous = self.count.fetch_add(1, Ordering::AcqRel);
        check_invariant!(previous >= 0, "hybrid mutex counter went negative");
        if previous > 0 {
            self.sema.wait();
        }
    }

    #[inline]
    fn unlock(&self) {
        let previous = self.count.fetch_sub(1, Ordering::AcqRel);
        check_invariant!(previous >= 1, "hybrid mutex released while not held");
        if previous > 1 {
            self.sema.signal();
        }
    }

    fn contended_waits(&self) -> u64 {
        self.sema.waits()
    }

    fn name(&self) -> &'static str {
        "mutex2"
    }
}
