/*!
 * Structured Tracing
 * tracing-subscriber setup for the benchmark binary
 *
 * The report contract owns stdout and stderr, so the subscriber writes to
 * stderr and stays quiet below `warn` unless `RUST_LOG` opts in.
 */

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize structured tracing for the binary.
///
/// Environment variables:
/// - `RUST_LOG`: filter directives (default: `warn`, keeping report lines clean)
/// - `LOCKBENCH_LOG_JSON`: set to `1` or `true` for JSON events
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("LOCKBENCH_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
    }
}
