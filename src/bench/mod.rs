/*!
 * Contention Harness
 *
 * Everything on the measurement side of the crate: validated run
 * configuration, the padded shared state workers race over, the worker
 * loop itself, and the harness that spawns, joins, and reports.
 */

pub mod config;
pub mod harness;
pub mod state;
pub mod worker;

// Re-export for convenience
pub use config::BenchConfig;
pub use harness::{run, run_with, BenchReport};
pub use state::{CacheAligned, SharedState};
pub use worker::run_worker;
