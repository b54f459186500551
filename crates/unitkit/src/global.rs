//! Flat free-function API over a thread-local suite
//!
//! For test programs written as a list of plain `fn()` tests:
//!
//! ```no_run
//! use unitkit::global::*;
//!
//! fn adds() {
//!     if assert_equal(1 + 1, 2) {
//!         test_passed("adds");
//!     } else {
//!         test_failed("adds");
//!     }
//! }
//!
//! start_suite("math");
//! run_test(adds, "adds");
//! let summary = end_suite();
//! std::process::exit(summary.exit_code());
//! ```
//!
//! Each thread has its own suite, reporting to standard error until
//! [`install_sink`] says otherwise. Hooks and test functions run without
//! the suite borrowed, so they may call back into this module.

use crate::cmp::Comparator;
use crate::report::{ConsoleSink, ReportSink};
use crate::suite::{DynSuite, Summary, Suite, Tally};
use std::cell::RefCell;
use unitkit_config::ColorMode;

thread_local! {
    static SUITE: RefCell<DynSuite> = RefCell::new(Suite::new(Box::new(ConsoleSink::stderr(ColorMode::Auto))));
}

fn with_suite<R>(f: impl FnOnce(&mut DynSuite) -> R) -> R {
    SUITE.with(|suite| f(&mut suite.borrow_mut()))
}

/// Replace this thread's sink; counters and hooks are kept
pub fn install_sink(sink: impl ReportSink + 'static) {
    with_suite(|s| *s.sink_mut() = Box::new(sink));
}

/// Swap in a fresh suite reporting to `sink` and return the old one
pub fn replace_suite(sink: Box<dyn ReportSink>) -> DynSuite {
    with_suite(|s| std::mem::replace(s, Suite::new(sink)))
}

/// Reset the thread's counters and print the suite banner
pub fn start_suite(label: &str) {
    with_suite(|s| s.start_suite(label));
}

/// Print the final counts; see [`Suite::end_suite`]
pub fn end_suite() -> Summary {
    with_suite(|s| s.end_suite())
}

/// Number the next test case and announce it
pub fn test_description(label: &str) {
    with_suite(|s| s.test_description(label));
}

/// Record a pass
pub fn test_passed(label: &str) {
    with_suite(|s| s.test_passed(label));
}

/// Record a failure
pub fn test_failed(label: &str) {
    with_suite(|s| s.test_failed(label));
}

/// Setup hook for later `run_test` calls
pub fn set_before_func(hook: impl FnMut() + 'static) {
    with_suite(|s| s.set_before_func(hook));
}

/// Takedown hook for later `run_test` calls
pub fn set_after_func(hook: impl FnMut() + 'static) {
    with_suite(|s| s.set_after_func(hook));
}

/// Run `test` between the current setup and takedown hooks
pub fn run_test(test: impl FnOnce(), label: &str) {
    let (previous, mut hooks) = with_suite(|s| {
        let previous = s.begin_test(label);
        (previous, s.checkout_hooks())
    });
    hooks.run_before();
    test();
    hooks.run_after();
    with_suite(|s| {
        s.restore_hooks(hooks);
        s.finish_test(label, previous);
    });
}

/// Counters accumulated since the last `start_suite`
pub fn tally() -> Tally {
    with_suite(|s| s.tally())
}

/// Counts so far, without ending the suite
pub fn summary() -> Summary {
    with_suite(|s| s.summary())
}

/// True iff `a == b`; prints a diagnostic otherwise
pub fn assert_equal(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_equal(a, b))
}

/// True iff `a != b`; prints a diagnostic otherwise
pub fn assert_not_equal(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_not_equal(a, b))
}

/// True iff `a < b`
pub fn assert_less(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_less(a, b))
}

/// True iff `a <= b`
pub fn assert_less_equal(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_less_equal(a, b))
}

/// True iff `a > b`
pub fn assert_greater(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_greater(a, b))
}

/// True iff `a >= b`
pub fn assert_greater_equal(a: impl Into<i64>, b: impl Into<i64>) -> bool {
    let (a, b) = (a.into(), b.into());
    with_suite(|s| s.assert_greater_equal(a, b))
}

// The comparator forms need no suite state

/// Silent equality under `cmp`
pub fn assert_equal_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::equal_by(a, b, cmp)
}

/// Silent inequality under `cmp`
pub fn assert_not_equal_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::not_equal_by(a, b, cmp)
}

/// True iff `a` sorts before `b` under `cmp`
pub fn assert_less_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::less_by(a, b, cmp)
}

/// True iff `a` does not sort after `b` under `cmp`
pub fn assert_less_equal_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::less_or_equal_by(a, b, cmp)
}

/// True iff `a` sorts after `b` under `cmp`
pub fn assert_greater_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::greater_by(a, b, cmp)
}

/// True iff `a` does not sort before `b` under `cmp`
pub fn assert_greater_equal_cmp<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    crate::assert::greater_or_equal_by(a, b, cmp)
}

/// True iff `value` is absent
pub fn assert_is_null<T: ?Sized>(value: Option<&T>) -> bool {
    crate::assert::is_null(value)
}

/// True iff `value` is present
pub fn assert_is_not_null<T: ?Sized>(value: Option<&T>) -> bool {
    crate::assert::is_not_null(value)
}
