/*!
 * Run Configuration
 * Validated parameters for one contention run
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_INCREMENTS, MAX_THREADS, MIN_THREADS};
use crate::sync::config::Algorithm;

/// A validated benchmark configuration.
///
/// Construction through `new` is the only place thread counts are range
/// checked; holding a `BenchConfig` means the run parameters are legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub algorithm: Algorithm,
    pub threads: usize,
    pub increments: u64,
}

impl BenchConfig {
    /// Build a configuration, rejecting out-of-range thread counts.
    pub fn new(algorithm: Algorithm, threads: usize) -> Result<Self, ConfigError> {
        if !(MIN_THREADS..=MAX_THREADS).contains(&threads) {
            return Err(ConfigError::ThreadCountOutOfRange(threads));
        }
        Ok(Self {
            algorithm,
            threads,
            increments: DEFAULT_INCREMENTS,
        })
    }

    /// Replace the per-thread increment target.
    ///
    /// The command surface always runs the default; tests and benches use
    /// small targets to keep wall time sane.
    #[must_use]
    pub fn with_increments(mut self, increments: u64) -> Self {
        self.increments = increments;
        self
    }

    /// The total every correct lock must produce.
    pub fn expected_total(&self) -> u64 {
        self.threads as u64 * self.increments
    }
}
