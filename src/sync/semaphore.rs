/*!
 * Counting Semaphore
 *
 * Slow-path blocking primitive for the benaphore-family locks, built on
 * parking_lot_core's global parking lot (futex-backed on Linux).
 *
 * # Design
 *
 * Permits live in a single atomic word and waiters park on that word's
 * address. A permit posted while nobody waits is banked: the next `wait()`
 * consumes it without parking. Wakeup order across waiters is unspecified;
 * the locks built on top only need "some waiter proceeds".
 *
 * # Performance
 *
 * The permit grab is a CAS loop with no syscall. Parking is entered only
 * after a failed grab, and `signal()` pays for an unpark attempt even when
 * the queue is empty, which is why the locks above keep the semaphore off
 * their uncontended paths entirely.
 */

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use parking_lot_core::{park, unpark_one, ParkToken, UnparkToken};

use crate::check_invariant;

/// Counting semaphore with indefinite (non-timeout) waits.
pub struct Semaphore {
    /// Available permits; never negative.
    permits: AtomicU32,
    /// Total `wait()` calls (diagnostics).
    waits: AtomicU64,
    /// Total `signal()` calls (diagnostics).
    signals: AtomicU64,
}

impl Semaphore {
    /// Create a semaphore with `permits` immediately available.
    pub const fn new(permits: u32) -> Self {
        Self {
            permits: AtomicU32::new(permits),
            waits: AtomicU64::new(0),
            signals: AtomicU64::new(0),
        }
    }

    /// Parking key: the permit word's address, stable for the life of `self`.
    #[inline]
    fn park_key(&self) -> usize {
        &self.permits as *const AtomicU32 as usize
    }

    /// Block until a permit can be taken.
    pub fn wait(&self) {
        self.waits.fetch_add(1, Ordering::Relaxed);

        loop {
            let available = self.permits.load(Ordering::Relaxed);
            if available > 0 {
                // Acquire pairs with the Release in `signal`, publishing the
                // signaler's prior writes to this thread.
                if self
                    .permits
                    .compare_exchange_weak(
                        available,
                        available - 1,
                        Ordering::Acquire,
                        Ordering::Relaxed,
                    )
                    .is_ok()
                {
                    return;
                }
                continue;
            }

            // SAFETY: the parked address is owned by `self`, which outlives
            // this shared borrow, and none of the callbacks reenter the
            // parking lot.
            let _ = unsafe {
                park(
                    self.park_key(),
                    || self.permits.load(Ordering::Relaxed) == 0,
                    || {},
                    |_, _| {},
                    ParkToken(0),
                    None,
                )
            };
            // Unparked, or the validation raced a fresh permit: retry the
            // grab. A barging thread may still win, in which case we park
            // again on the next pass.
        }
    }

    /// Make one permit available and wake one parked waiter, if any.
    pub fn signal(&self) {
        self.signals.fetch_add(1, Ordering::Relaxed);

        let previous = self.permits.fetch_add(1, Ordering::Release);
        check_invariant!(previous < u32::MAX, "semaphore permit count overflowed");

        // SAFETY: same key discipline as `wait`; the callback does not
        // reenter the parking lot.
        let _ = unsafe { unpark_one(self.park_key(), |_| UnparkToken(0)) };
    }

    /// Number of `wait()` calls so far.
    #[inline]
    pub fn waits(&self) -> u64 {
        self.waits.load(Ordering::Relaxed)
    }

    /// Number of `signal()` calls so far.
    #[inline]
    pub fn signals(&self) -> u64 {
        self.signals.load(Ordering::Relaxed)
    }
}
