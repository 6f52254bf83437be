/*!
 * Padded Shared State
 *
 * The racing surface for the contention harness: the per-thread target, the
 * lock under test, and the shared total, laid out so the lock's internal
 * state and the hammered counter never share a cache line.
 *
 * # Design
 *
 * `total` is deliberately a plain integer behind an `UnsafeCell`. A broken
 * lock must be able to lose updates; an atomic counter would hide exactly
 * the failure this harness exists to surface.
 */

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};

use crate::sync::traits::LockStrategy;

/// Pads and aligns a value to a cache-line boundary.
///
/// The alignment also rounds the size up to whole lines, so a wrapped value
/// starts on a fresh line and shares its last one with nothing.
#[repr(C, align(64))]
pub struct CacheAligned<T> {
    value: T,
}

impl<T> CacheAligned<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Deref for CacheAligned<T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for CacheAligned<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Shared state for one contention run.
#[repr(C)]
pub struct SharedState<L> {
    /// Increments each worker must perform; immutable after construction.
    target_increments: u64,
    /// The lock under test, on its own cache line.
    lock: CacheAligned<L>,
    /// The racing counter, likewise isolated.
    total: CacheAligned<UnsafeCell<u64>>,
}

// SAFETY: `total` is the only field that is not Sync on its own. The worker
// protocol only writes it between `lock()` and `unlock()` on the contained
// lock, and the final read requires `&mut self`.
unsafe impl<L: LockStrategy> Sync for SharedState<L> {}

impl<L: LockStrategy> SharedState<L> {
    /// Wrap a lock and a per-thread target into a padded racing surface.
    pub fn new(lock: L, target_increments: u64) -> Self {
        Self {
            target_increments,
            lock: CacheAligned::new(lock),
            total: CacheAligned::new(UnsafeCell::new(0)),
        }
    }

    /// Increments each worker must perform.
    #[inline(always)]
    pub fn target_increments(&self) -> u64 {
        self.target_increments
    }

    /// The lock workers contend on.
    #[inline(always)]
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Add one to the shared total.
    ///
    /// # Safety
    ///
    /// The caller must hold `self.lock()`. Nothing else orders this write;
    /// calling it unlocked is the data race the harness measures for.
    #[inline(always)]
    pub unsafe fn increment_total(&self) {
        *self.total.get() += 1;
    }

    /// Read the final total.
    ///
    /// Takes `&mut self`, which proves every worker borrow has ended.
    pub fn total(&mut self) -> u64 {
        *self.total.get_mut()
    }
}
