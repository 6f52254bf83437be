/*!
 * lockbench Library
 *
 * Three mutual-exclusion primitives raced over a shared counter: a baseline
 * blocking mutex, a benaphore, and a spin-then-block hybrid. The harness
 * reports expected versus observed totals so a broken protocol shows up as
 * lost updates rather than a crash.
 */

pub mod bench;
pub mod core;
pub mod sync;
pub mod trace;

// Re-exports
pub use crate::bench::{run, run_with, BenchConfig, BenchReport, CacheAligned, SharedState};
pub use crate::core::errors::ConfigError;
pub use crate::core::limits::{DEFAULT_INCREMENTS, DEFAULT_SPIN_LIMIT, MAX_THREADS, MIN_THREADS};
pub use crate::sync::{Algorithm, Benaphore, BlockingMutex, HybridMutex, LockStrategy, Semaphore};
pub use crate::trace::init_tracing;
