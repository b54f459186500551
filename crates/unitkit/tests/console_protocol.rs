//! End-to-end suites rendered through the console sink

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use unitkit::{ConsoleSink, Suite};

type BufferSuite = Suite<ConsoleSink<termcolor::Buffer>>;

fn buffer_suite() -> BufferSuite {
    Suite::new(ConsoleSink::buffer())
}

fn output(suite: &BufferSuite) -> String {
    suite.sink().contents()
}

#[test]
fn test_failing_suite_output() {
    let mut suite = buffer_suite();
    suite.start_suite("S");
    suite.run_test(
        |s| {
            assert!(s.assert_equal(2, 2));
            assert!(!s.assert_equal(2, 3));
            s.test_failed("t1");
        },
        "t1",
    );
    let summary = suite.end_suite();

    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        output(&suite),
        "\n[Start Suite] S\n\n[Start Test] t1\n2 does not equal 3\n[FAIL] t1\n\n[End Test] t1\n\nPassed: 0\nFailed: 1\n\n"
    );
}

#[test]
fn test_mixed_suite_snapshot() {
    let mut suite = buffer_suite();
    suite.start_suite("arithmetic");
    suite.run_test(
        |s| {
            s.test_description("ordering");
            let ok = s.assert_greater(5, 3) & s.assert_greater(3, 5);
            if ok {
                s.test_passed("ordering");
            } else {
                s.test_failed("ordering");
            }
        },
        "ordering",
    );
    suite.run_test(
        |s| {
            s.test_description("bounds");
            let ok = s.assert_less_equal(4, 4) & s.assert_greater_equal(i64::MIN, i64::MIN);
            if ok {
                s.test_passed("bounds");
            } else {
                s.test_failed("bounds");
            }
        },
        "bounds",
    );
    suite.end_suite();

    assert_snapshot!("mixed_suite", output(&suite));
}

#[test]
fn test_greater_scenario() {
    let mut suite = buffer_suite();
    assert!(suite.assert_greater(5, 3));
    assert_eq!(output(&suite), "");
    assert!(!suite.assert_greater(3, 5));
    assert_eq!(output(&suite), "3 not greater than 5\n");
}

#[rstest]
#[case::equal(Suite::assert_equal, 1, 2, "1 does not equal 2\n")]
#[case::not_equal(Suite::assert_not_equal, 7, 7, "7 equals 7\n")]
#[case::less(Suite::assert_less, 3, 3, "3 not less than 3\n")]
#[case::less_equal(Suite::assert_less_equal, 4, 3, "4 not less than or equal to 3\n")]
#[case::greater(Suite::assert_greater, -1, 0, "-1 not greater than 0\n")]
#[case::greater_equal(Suite::assert_greater_equal, -2, 9, "-2 not greater or equal to 9\n")]
fn test_failure_phrases(
    #[case] assertion: fn(&mut BufferSuite, i64, i64) -> bool,
    #[case] a: i64,
    #[case] b: i64,
    #[case] expected: &str,
) {
    let mut suite = buffer_suite();
    assert!(!assertion(&mut suite, a, b));
    assert_eq!(output(&suite), expected);
}

#[test]
fn test_null_checks_never_print() {
    let suite = buffer_suite();
    let value = 1u8;
    assert!(!suite.assert_is_null(Some(&value)));
    assert!(!suite.assert_is_not_null::<u8>(None));
    assert_eq!(output(&suite), "");
}

#[test]
fn test_end_suite_reports_counts_since_start() {
    let mut suite = buffer_suite();
    suite.start_suite("old");
    suite.test_failed("stale");
    suite.end_suite();

    suite.start_suite("new");
    suite.test_passed("a");
    suite.test_passed("b");
    suite.test_failed("c");
    let summary = suite.end_suite();

    assert_eq!((summary.passed, summary.failed), (2, 1));
    assert!(output(&suite).ends_with("\nPassed: 2\nFailed: 1\n\n"));
}
