/*!
 * Lock Capability Trait
 *
 * Core abstraction implemented by every mutual-exclusion primitive in this
 * crate. The harness is generic over it, so each lock is measured through
 * a monomorphized loop with no dispatch in the hot path.
 */

/// A blocking mutual-exclusion primitive.
///
/// Implementations guarantee:
/// - **Exclusion**: at most one thread is between a `lock()` return and the
///   matching `unlock()` at any instant.
/// - **Visibility**: acquisition has acquire semantics and release has
///   release semantics, so the next holder observes every write the previous
///   holder made inside the critical section without extra fences.
///
/// Callers must pair each `lock()` with exactly one `unlock()` on the same
/// thread. Unlocking without holding the lock is a protocol violation;
/// builds with the `checks` feature abort on the detectable cases.
pub trait LockStrategy: Send + Sync {
    /// Block until the calling thread owns the lock.
    fn lock(&self);

    /// Release ownership, waking one waiter if any are blocked.
    fn unlock(&self);

    /// How many acquisitions fell back to a blocking wait.
    ///
    /// Diagnostics only. Primitives that cannot observe their slow path
    /// report zero.
    fn contended_waits(&self) -> u64 {
        0
    }

    /// Short name for reports and logs.
    fn name(&self) -> &'static str;
}
