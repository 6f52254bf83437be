/*!
 * Blocking Mutex
 *
 * Baseline primitive: the platform's adaptive blocking mutex with nothing
 * layered on top. The benaphore and hybrid mutex are measured against this.
 */

use parking_lot::lock_api::RawMutex as _;
use parking_lot::RawMutex;

use crate::check_invariant;
use crate::sync::traits::LockStrategy;

/// Baseline blocking lock over `parking_lot::RawMutex`.
///
/// Every acquisition goes straight at the native primitive, so this variant
/// carries whatever fast path the platform mutex has and no more.
pub struct BlockingMutex {
    raw: RawMutex,
}

impl BlockingMutex {
    /// Create an unlocked mutex.
    pub const fn new() -> Self {
        Self {
            raw: RawMutex::INIT,
        }
    }
}

impl Default for BlockingMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStrategy for BlockingMutex {
    #[inline]
    fn lock(&self) {
        self.raw.lock();
    }

    #[inline]
    fn unlock(&self) {
        check_invariant!(
            self.raw.is_locked(),
            "blocking mutex released while not held"
        );
        // SAFETY: the LockStrategy contract requires the caller to hold the
        // lock; checked builds verify the mutex is at least locked.
        unsafe { self.raw.unlock() }
    }

    fn name(&self) -> &'static str {
        "mutex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_lock_unlock_cycles() {
        let lock = BlockingMutex::new();
        for _ in 0..100 {
            lock.lock();
            lock.unlock();
        }
    }

    #[test]
    fn test_holder_excludes_contender() {
        let lock = Arc::new(BlockingMutex::new());
        let entered = Arc::new(AtomicBool::new(false));

        lock.lock();

        let contender = {
            let lock = Arc::clone(&lock);
            let entered = Arc::clone(&entered);
            thread::spawn(move || {
                lock.lock();
                entered.store(true, Ordering::SeqCst);
                lock.unlock();
            })
        };

        thread::sleep(Duration::from_millis(100));
        assert!(!entered.load(Ordering::SeqCst));

        lock.unlock();
        contender.join().unwrap();
        assert!(entered.load(Ordering::SeqCst));
    }

    #[test]
    fn test_reports_no_contended_waits() {
        // The raw mutex hides its slow path, so the diagnostic stays zero.
        let lock = BlockingMutex::new();
        lock.lock();
        lock.unlock();
        assert_eq!(lock.contended_waits(), 0);
        assert_eq!(lock.name(), "mutex");
    }
}
