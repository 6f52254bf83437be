/*!
 * Benaphore
 *
 * Atomic-counter lock that only touches its semaphore under contention.
 *
 * # Protocol
 *
 * `count` tracks the number of threads holding or waiting for the lock.
 * Acquisition increments it: a previous value of zero means the lock was
 * free and the incrementer owns it with no kernel involvement; anything
 * higher means another thread is ahead, and the incrementer sleeps on the
 * semaphore. Release decrements: a previous value above one means at least
 * one thread is parked (or about to park), and exactly one permit is posted.
 *
 * # Performance
 *
 * Uncontended lock and unlock are one RMW atomic each. The semaphore, and
 * with it the parking lot, is reached only when the counter proves a
 * conflict.
 */

use std::sync::atomic::{AtomicI32, Ordering};

use crate::check_invariant;
use crate::sync::semaphore::Semaphore;
use crate::sync::traits::LockStrategy;

/// Semaphore-backed lock with an uncontended fast path.
pub struct Benaphore {
    /// Threads inside or waiting; 0 when free.
    count: AtomicI32,
    /// Zero-permit semaphore; touched only under contention.
    sema: Semaphore,
}

impl Benaphore {
    /// Create an unlocked benaphore.
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
            sema: Semaphore::new(0),
        }
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> i32 {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for Benaphore {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStrategy for Benaphore {
    #[inline]
    fn lock(&self) {
        let previous = self.count.fetch_add(1, Ordering::AcqRel);
        check_invariant!(previous >= 0, "benaphore counter went negative");
        if previous > 0 {
            // Someone holds or waits; sleep until an unlock posts a permit.
            self.sema.wait();
        }
    }

    #[inline]
    fn unlock(&self) {
        let previous = self.count.fetch_sub(1, Ordering::AcqRel);
        check_invariant!(previous >= 1, "benaphore released while not held");
        if previous > 1 {
            self.sema.signal();
        }
    }

    fn contended_waits(&self) -> u64 {
        self.sema.waits()
    }

    fn name(&self) -> &'static str {
        "benaphore"
    }
}
