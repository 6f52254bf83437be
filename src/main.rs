/*!
 * lockbench - Main Entry Point
 *
 * `lockbench <algorithm> <thread-count>` races the selected lock over a
 * shared counter and prints the expected and observed totals. Announcement
 * lines go to stdout, the expected/actual report to stderr, and the exit
 * code only reflects usage errors: a lost update is the operator's verdict
 * to make, not the harness's.
 */

use std::env;
use std::process;

use lockbench::{init_tracing, Algorithm, BenchConfig, ConfigError};

fn main() {
    // Initialize structured tracing
    init_tracing();

    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lockbench: {err}");
            eprintln!("usage: lockbench <mutex|benaphore|mutex2> <thread-count>");
            process::exit(1);
        }
    };

    println!("Running {} with {} threads", config.algorithm, config.threads);
    println!("Increments in each thread: {}", config.increments);

    let report = lockbench::run(&config);

    eprintln!("expected: {}", report.expected);
    eprintln!("actual:   {}", report.actual);
}

/// Parse `<algorithm> <thread-count>` into a validated configuration.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<BenchConfig, ConfigError> {
    let algorithm = args.next().ok_or(ConfigError::WrongArgumentCount)?;
    let threads = args.next().ok_or(ConfigError::WrongArgumentCount)?;
    if args.next().is_some() {
        return Err(ConfigError::WrongArgumentCount);
    }

    let algorithm: Algorithm = algorithm.parse()?;
    let threads: usize = match threads.parse() {
        Ok(count) => count,
        Err(_) => return Err(ConfigError::InvalidThreadCount(threads)),
    };

    BenchConfig::new(algorithm, threads)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(values: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        values.iter().map(|value| value.to_string())
    }

    #[test]
    fn test_valid_arguments_build_a_config() {
        let config = parse_args(args(&["benaphore", "4"])).unwrap();
        assert_eq!(config.algorithm, Algorithm::Benaphore);
        assert_eq!(config.threads, 4);
        assert_eq!(config.expected_total(), 80_000_000);
    }

    #[test]
    fn test_missing_and_extra_arguments_rejected() {
        assert_eq!(
            parse_args(args(&[])),
            Err(ConfigError::WrongArgumentCount)
        );
        assert_eq!(
            parse_args(args(&["mutex"])),
            Err(ConfigError::WrongArgumentCount)
        );
        assert_eq!(
            parse_args(args(&["mutex", "2", "extra"])),
            Err(ConfigError::WrongArgumentCount)
        );
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert_eq!(
            parse_args(args(&["futex", "2"])),
            Err(ConfigError::UnknownAlgorithm("futex".into()))
        );
    }

    #[test]
    fn test_unparsable_thread_count_rejected() {
        assert_eq!(
            parse_args(args(&["mutex2", "four"])),
            Err(ConfigError::InvalidThreadCount("four".into()))
        );
        assert_eq!(
            parse_args(args(&["mutex2", "-1"])),
            Err(ConfigError::InvalidThreadCount("-1".into()))
        );
    }

    #[test]
    fn test_out_of_range_thread_count_rejected() {
        assert_eq!(
            parse_args(args(&["mutex", "0"])),
            Err(ConfigError::ThreadCountOutOfRange(0))
        );
        assert_eq!(
            parse_args(args(&["mutex", "33"])),
            Err(ConfigError::ThreadCountOutOfRange(33))
        );
    }
}
