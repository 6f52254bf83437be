/*!
 * Core Module
 * Cross-cutting machinery: limits, error types, invariant checks
 */

pub mod checks;
pub mod errors;
pub mod limits;

// Re-export for convenience
pub use errors::ConfigError;
