/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use thiserror::Error;

/// Configuration and usage errors
///
/// Every variant is rejected before any worker thread is spawned; the binary
/// maps them all to exit code 1. A lost update is not an error at this layer,
/// it is a reported measurement.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("expected exactly two arguments: <algorithm> <thread-count>")]
    #[diagnostic(
        code(lockbench::config::usage),
        help("Run as `lockbench <mutex|benaphore|mutex2> <threads>`.")
    )]
    WrongArgumentCount,

    #[error("unknown algorithm `{0}`")]
    #[diagnostic(
        code(lockbench::config::unknown_algorithm),
        help("Valid algorithms are `mutex`, `benaphore`, and `mutex2`.")
    )]
    UnknownAlgorithm(String),

    #[error("thread count `{0}` is not a number")]
    #[diagnostic(
        code(lockbench::config::thread_count_parse),
        help("Pass an integer between 1 and 32.")
    )]
    InvalidThreadCount(String),

    #[error("thread count {0} is out of range (supported: 1 to 32)")]
    #[diagnostic(
        code(lockbench::config::thread_count_range),
        help("The harness races between 1 and 32 worker threads.")
    )]
    ThreadCountOutOfRange(usize),
}

/// Result type for configuration parsing
pub type Result<T> = std::result::Result<T, ConfigError>;
