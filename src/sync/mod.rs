/*!
 * Mutual-Exclusion Primitives
 *
 * Three interchangeable locks of increasing sophistication:
 * - `BlockingMutex`: the native blocking mutex, no custom fast path
 * - `Benaphore`: atomic-counter fast path, semaphore slow path
 * - `HybridMutex`: bounded spin phase, then the benaphore protocol
 *
 * # Architecture
 *
 * All three implement the `LockStrategy` capability trait and the harness
 * is monomorphized over it, so the measured loop never pays for dispatch.
 * The benaphore family shares the `Semaphore` built on parking_lot_core.
 *
 * # Memory Ordering
 *
 * Counter transitions are acquire-and-release RMW operations: an acquiring
 * thread observes every write the previous holder published, with no
 * separate fences on the fast path.
 */

pub mod benaphore;
pub mod config;
pub mod hybrid;
pub mod mutex;
pub mod semaphore;
pub mod traits;

// Re-export for convenience
pub use benaphore::Benaphore;
pub use config::Algorithm;
pub use hybrid::HybridMutex;
pub use mutex::BlockingMutex;
pub use semaphore::Semaphore;
pub use traits::LockStrategy;
