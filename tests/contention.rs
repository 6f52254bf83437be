/*!
 * Contention Integration Tests
 *
 * The central property: no lock variant loses an update, for any worker
 * count the harness accepts. Targets are kept small so the suite stays
 * fast; the full-scale run is available behind `--ignored`.
 */

use lockbench::{run, Algorithm, BenchConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serial_test::serial;

fn config(algorithm: Algorithm, threads: usize, increments: u64) -> BenchConfig {
    BenchConfig::new(algorithm, threads)
        .expect("thread count in range")
        .with_increments(increments)
}

#[test]
#[serial]
fn test_no_lost_updates_across_all_algorithms() {
    for algorithm in Algorithm::ALL {
        for threads in [2, 4, 8] {
            let report = run(&config(algorithm, threads, 20_000));
            assert_eq!(
                report.actual, report.expected,
                "{algorithm} lost updates with {threads} threads"
            );
        }
    }
}

#[test]
#[serial]
fn test_single_thread_matches_target_exactly() {
    for algorithm in Algorithm::ALL {
        let report = run(&config(algorithm, 1, 50_000));
        assert_eq!(report.expected, 50_000);
        assert_eq!(report.actual, 50_000);
        assert_eq!(report.contended_waits, 0);
    }
}

#[test]
#[serial]
fn test_maximum_thread_count_is_exercised() {
    let report = run(&config(Algorithm::Hybrid, 32, 2_000));
    assert_eq!(report.threads, 32);
    assert_eq!(report.actual, 64_000);
}

#[test]
fn test_canonical_four_thread_benaphore_expectation() {
    // `benaphore 4` at the default target must demand 80 million.
    let config = BenchConfig::new(Algorithm::Benaphore, 4).expect("4 threads is in range");
    assert_eq!(config.expected_total(), 80_000_000);
}

#[test]
#[serial]
fn test_repeated_runs_report_identically() {
    let config = config(Algorithm::Benaphore, 4, 10_000);

    let first = run(&config);
    let second = run(&config);

    assert_eq!(first.expected, second.expected);
    assert_eq!(first.actual, second.actual);
    assert!(first.is_consistent());
    assert!(second.is_consistent());
}

#[test]
#[serial]
#[ignore = "full-scale run, minutes of wall time"]
fn test_full_scale_four_thread_benaphore() {
    let config = BenchConfig::new(Algorithm::Benaphore, 4).expect("4 threads is in range");
    let report = run(&config);
    assert_eq!(report.expected, 80_000_000);
    assert_eq!(report.actual, 80_000_000);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    #[serial]
    fn test_arbitrary_small_races_never_lose_updates(
        threads in 1usize..=4,
        increments in 1u64..=2_000,
        algorithm_index in 0usize..3,
    ) {
        let algorithm = Algorithm::ALL[algorithm_index];
        let report = run(&config(algorithm, threads, increments));
        prop_assert_eq!(report.actual, report.expected);
    }
}
