//! Free-function API over the thread-local suite
//!
//! Every test runs on its own thread, so each sees a fresh suite.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use unitkit::global::{self, *};
use unitkit::{Event, MemorySink};

fn recording() -> Rc<RefCell<MemorySink>> {
    let sink = Rc::new(RefCell::new(MemorySink::new()));
    install_sink(sink.clone());
    sink
}

thread_local! {
    static ORDER: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(step: &'static str) {
    ORDER.with(|o| o.borrow_mut().push(step));
}

fn empty_test() {
    record("test");
}

#[test]
fn test_hooks_run_in_order_once_each() {
    let _sink = recording();
    start_suite("hooks");
    set_before_func(|| record("setup"));
    set_after_func(|| record("takedown"));

    run_test(empty_test, "empty");

    ORDER.with(|o| assert_eq!(*o.borrow(), vec!["setup", "test", "takedown"]));
}

#[test]
fn test_default_hooks_are_noops() {
    let sink = recording();
    start_suite("defaults");
    run_test(|| {}, "nothing");
    end_suite();

    let events = sink.borrow().events().to_vec();
    assert_eq!(
        events,
        vec![
            Event::SuiteStarted {
                label: "defaults".into()
            },
            Event::TestStarted {
                name: "nothing".into()
            },
            Event::TestEnded {
                name: "nothing".into()
            },
            Event::SuiteEnded {
                passed: 0,
                failed: 0
            },
        ]
    );
}

#[test]
fn test_tests_may_call_back_into_the_api() {
    let _sink = recording();
    start_suite("reentrant");
    set_before_func(|| test_description("from setup"));

    run_test(
        || {
            if assert_less(1, 2) && assert_is_not_null(Some(&3)) {
                test_passed("inside");
            } else {
                test_failed("inside");
            }
        },
        "callback",
    );

    let summary = end_suite();
    assert_eq!((summary.passed, summary.failed, summary.tests), (1, 0, 1));
}

#[test]
fn test_counts_match_calls_since_start() {
    let _sink = recording();
    start_suite("first");
    test_passed("a");
    test_failed("b");

    start_suite("second");
    test_passed("c");
    test_passed("d");
    test_failed("e");

    assert_eq!(tally().passed, 2);
    assert_eq!(tally().failed, 1);
    assert_eq!(end_suite().exit_code(), 1);
}

#[test]
fn test_integer_failure_is_recorded() {
    let sink = recording();
    assert!(!assert_equal(2, 3));
    assert!(assert_greater_equal(3u8, 3u8));

    assert_eq!(
        sink.borrow().count(|e| e.is_failure()),
        1,
        "only the false assertion emits a diagnostic"
    );
}

#[test]
fn test_cmp_forms() {
    let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
    assert!(assert_equal_cmp("abc", "xyz", &by_len));
    assert!(assert_not_equal_cmp("a", "ab", &by_len));
    assert!(assert_less_cmp("a", "ab", &by_len));
    assert!(assert_less_equal_cmp("ab", "ab", &by_len));
    assert!(assert_greater_cmp("abc", "a", &by_len));
    assert!(assert_greater_equal_cmp("abc", "abc", &by_len));
    assert!(assert_is_null::<str>(None));
}

#[test]
fn test_replace_suite_returns_previous_state() {
    let _sink = recording();
    start_suite("old");
    test_failed("x");

    let old = global::replace_suite(Box::new(MemorySink::new()));
    assert_eq!(old.failed(), 1);
    assert_eq!(summary().failed, 0);
}
