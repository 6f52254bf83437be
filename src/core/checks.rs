/*!
 * Invariant Checks
 *
 * Compile-time switchable protocol assertions for the lock primitives.
 * Enabled through the `checks` feature (on by default); an unchecked build
 * keeps the hot paths free of the extra branches.
 */

/// Whether invariant checks were compiled in.
pub const CHECKS_ENABLED: bool = cfg!(feature = "checks");

/// Abort with a diagnostic naming the violated condition and its location.
///
/// Reserved for lock-protocol violations. Usage errors and measured
/// divergence are ordinary control flow and never come through here.
#[cold]
#[inline(never)]
pub fn invariant_failed(condition: &str, file: &str, line: u32) -> ! {
    eprintln!("Failure: {condition} ({file}:{line})");
    std::process::abort();
}

/// Check a lock-protocol invariant, aborting the process on violation.
///
/// The condition must be a pure read: when the `checks` feature is off the
/// whole statement folds away and the unchecked hot path remains.
#[macro_export]
macro_rules! check_invariant {
    ($cond:expr, $what:expr $(,)?) => {
        if $crate::core::checks::CHECKS_ENABLED && !($cond) {
            $crate::core::checks::invariant_failed($what, file!(), line!());
        }
    };
    ($cond:expr $(,)?) => {
        $crate::check_invariant!($cond, stringify!($cond))
    };
}
