//! Suite runner: counters, hooks, and the test lifecycle
//!
//! A [`Suite`] is the whole harness state for one suite run: the pass/fail
//! and test-number counters, the setup/takedown hooks, and the sink that
//! receives every banner. Nothing here can fail or abort; misuse such as
//! running a test before `start_suite` is logged through `tracing` and the
//! call proceeds anyway.
//!
//! ```
//! use unitkit::{MemorySink, Suite};
//!
//! let mut suite = Suite::new(MemorySink::new());
//! suite.start_suite("arithmetic");
//! suite.run_test(
//!     |s| {
//!         let ok = s.assert_equal(2 + 2, 4);
//!         if ok {
//!             s.test_passed("addition");
//!         } else {
//!             s.test_failed("addition");
//!         }
//!     },
//!     "addition",
//! );
//! let summary = suite.end_suite();
//! assert!(summary.all_passed());
//! ```

use crate::assert::{self, Check};
use crate::cmp::{int_cmp, Comparator};
use crate::report::{sink_from_config, ConsoleSink, Event, ReportSink};
use serde::Serialize;
use std::fmt;
use unitkit_config::Config;

/// Setup or takedown procedure run around every test
pub type Hook = Box<dyn FnMut()>;

/// A suite whose sink was chosen at runtime
pub type DynSuite = Suite<Box<dyn ReportSink>>;

/// Where the suite is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteState {
    /// No suite started, or the last one ended
    #[default]
    Idle,
    /// Between `start_suite` and `end_suite`, outside any test
    SuiteActive,
    /// Inside `run_test`
    TestActive,
}

/// Counters accumulated since the last `start_suite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub passed: u32,
    pub failed: u32,
    pub test_number: u32,
}

/// Aggregate result handed back by `end_suite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub passed: u32,
    pub failed: u32,
    /// Number of `test_description` calls
    pub tests: u32,
}

impl Summary {
    /// True when no `test_failed` was recorded
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Conventional process exit status for this result
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

impl From<Tally> for Summary {
    fn from(tally: Tally) -> Self {
        Summary {
            passed: tally.passed,
            failed: tally.failed,
            tests: tally.test_number,
        }
    }
}

fn noop() -> Hook {
    Box::new(|| {})
}

/// Hooks lent out to a running test
///
/// While checked out the suite's slots are empty; a hook installed during
/// the test fills its slot and wins over the lent one on return.
pub(crate) struct CheckedOutHooks {
    before: Option<Hook>,
    after: Option<Hook>,
}

impl CheckedOutHooks {
    pub(crate) fn run_before(&mut self) {
        if let Some(hook) = self.before.as_mut() {
            hook();
        }
    }

    pub(crate) fn run_after(&mut self) {
        if let Some(hook) = self.after.as_mut() {
            hook();
        }
    }
}

/// Harness state for one suite run
pub struct Suite<S: ReportSink = ConsoleSink> {
    sink: S,
    tally: Tally,
    state: SuiteState,
    before: Option<Hook>,
    after: Option<Hook>,
}

impl Default for Suite<ConsoleSink> {
    fn default() -> Self {
        Self::new(ConsoleSink::default())
    }
}

impl DynSuite {
    /// Build a suite reporting the way `config` asks
    pub fn from_config(config: &Config) -> Self {
        Suite::new(sink_from_config(config))
    }
}

impl<S: ReportSink> Suite<S> {
    /// Create an idle suite reporting to `sink`, with no-op hooks
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            tally: Tally::default(),
            state: SuiteState::Idle,
            before: Some(noop()),
            after: Some(noop()),
        }
    }

    // ========================================================================
    // Reporting entry points (the only counter mutators)
    // ========================================================================

    /// Begin a suite: reset every counter and print the suite banner
    pub fn start_suite(&mut self, label: &str) {
        match self.state {
            SuiteState::Idle => {}
            SuiteState::SuiteActive => {
                tracing::warn!(label, "start_suite while a suite is active; counters reset")
            }
            SuiteState::TestActive => {
                tracing::warn!(label, "start_suite called from inside a test")
            }
        }
        self.tally = Tally::default();
        if self.state == SuiteState::Idle {
            self.state = SuiteState::SuiteActive;
        }
        self.sink.emit(&Event::SuiteStarted {
            label: label.to_string(),
        });
    }

    /// End the suite and print the final counts
    ///
    /// Counters are left as they are; the next `start_suite` resets them.
    pub fn end_suite(&mut self) -> Summary {
        match self.state {
            SuiteState::Idle => tracing::warn!("end_suite called with no active suite"),
            SuiteState::TestActive => tracing::warn!("end_suite called from inside a test"),
            SuiteState::SuiteActive => {}
        }
        self.sink.emit(&Event::SuiteEnded {
            passed: self.tally.passed,
            failed: self.tally.failed,
        });
        if self.state == SuiteState::SuiteActive {
            self.state = SuiteState::Idle;
        }
        self.summary()
    }

    /// Bump the test counter and print a banner naming the test case
    pub fn test_description(&mut self, label: &str) {
        self.warn_if_idle("test_description");
        self.tally.test_number = self.tally.test_number.wrapping_add(1);
        self.sink.emit(&Event::TestDescribed {
            number: self.tally.test_number,
            label: label.to_string(),
        });
    }

    /// Print a pass banner and count it
    pub fn test_passed(&mut self, label: &str) {
        self.warn_if_idle("test_passed");
        self.sink.emit(&Event::TestPassed {
            label: label.to_string(),
        });
        self.tally.passed = self.tally.passed.wrapping_add(1);
    }

    /// Print a fail banner and count it
    pub fn test_failed(&mut self, label: &str) {
        self.warn_if_idle("test_failed");
        self.sink.emit(&Event::TestFailed {
            label: label.to_string(),
        });
        self.tally.failed = self.tally.failed.wrapping_add(1);
    }

    fn warn_if_idle(&self, operation: &'static str) {
        if self.state == SuiteState::Idle {
            tracing::warn!(operation, "called before start_suite");
        }
    }

    // ========================================================================
    // Hooks and test execution
    // ========================================================================

    /// Replace the setup hook for every later `run_test`
    pub fn set_before_func(&mut self, hook: impl FnMut() + 'static) {
        tracing::debug!("setup hook replaced");
        self.before = Some(Box::new(hook));
    }

    /// Replace the takedown hook for every later `run_test`
    pub fn set_after_func(&mut self, hook: impl FnMut() + 'static) {
        tracing::debug!("takedown hook replaced");
        self.after = Some(Box::new(hook));
    }

    /// Run one test bracketed by the current setup and takedown hooks
    ///
    /// Prints the start banner, runs setup, `test`, takedown (each exactly
    /// once, unconditionally), then prints the end banner. The test reports
    /// its own outcome through the assertions and `test_passed`/`test_failed`.
    pub fn run_test<F>(&mut self, test: F, label: &str)
    where
        F: FnOnce(&mut Self),
    {
        let previous = self.begin_test(label);
        let mut hooks = self.checkout_hooks();
        hooks.run_before();
        test(self);
        hooks.run_after();
        self.restore_hooks(hooks);
        self.finish_test(label, previous);
    }

    pub(crate) fn begin_test(&mut self, label: &str) -> SuiteState {
        let previous = self.state;
        match previous {
            SuiteState::Idle => tracing::warn!(label, "run_test called before start_suite"),
            SuiteState::TestActive => tracing::warn!(label, "run_test nested inside another test"),
            SuiteState::SuiteActive => {}
        }
        self.sink.emit(&Event::TestStarted {
            name: label.to_string(),
        });
        self.state = SuiteState::TestActive;
        previous
    }

    pub(crate) fn finish_test(&mut self, label: &str, previous: SuiteState) {
        self.state = previous;
        self.sink.emit(&Event::TestEnded {
            name: label.to_string(),
        });
    }

    pub(crate) fn checkout_hooks(&mut self) -> CheckedOutHooks {
        CheckedOutHooks {
            before: self.before.take(),
            after: self.after.take(),
        }
    }

    pub(crate) fn restore_hooks(&mut self, hooks: CheckedOutHooks) {
        if self.before.is_none() {
            self.before = hooks.before;
        }
        if self.after.is_none() {
            self.after = hooks.after;
        }
    }

    // ========================================================================
    // Integer assertions (print a diagnostic on failure)
    // ========================================================================

    /// True iff `a == b`; otherwise prints "`a` does not equal `b`"
    pub fn assert_equal(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::Equal, a.into(), b.into())
    }

    /// True iff `a != b`; otherwise prints "`a` equals `b`"
    pub fn assert_not_equal(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::NotEqual, a.into(), b.into())
    }

    /// True iff `a < b`
    pub fn assert_less(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::Less, a.into(), b.into())
    }

    /// True iff `a <= b`
    pub fn assert_less_equal(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::LessOrEqual, a.into(), b.into())
    }

    /// True iff `a > b`
    pub fn assert_greater(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::Greater, a.into(), b.into())
    }

    /// True iff `a >= b`
    pub fn assert_greater_equal(&mut self, a: impl Into<i64>, b: impl Into<i64>) -> bool {
        self.check_int(Check::GreaterOrEqual, a.into(), b.into())
    }

    fn check_int(&mut self, check: Check, lhs: i64, rhs: i64) -> bool {
        let held = check.evaluate(&lhs, &rhs, &int_cmp);
        if !held {
            self.sink.emit(&Event::AssertionFailed { lhs, rhs, check });
        }
        held
    }

    // ========================================================================
    // Generic assertions (silent: opaque values have no printable form)
    // ========================================================================

    /// True iff `cmp` orders `a` and `b` as equal
    pub fn assert_equal_by<T: ?Sized>(&self, a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
        assert::equal_by(a, b, cmp)
    }

    /// Negation of [`assert_equal_by`](Self::assert_equal_by)
    pub fn assert_not_equal_by<T: ?Sized>(&self, a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
        assert::not_equal_by(a, b, cmp)
    }

    /// True iff `a` sorts strictly before `b`
    pub fn assert_less_by<T: ?Sized>(&self, a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
        assert::less_by(a, b, cmp)
    }

    /// True iff `a` does not sort after `b`
    pub fn assert_less_equal_by<T: ?Sized>(
        &self,
        a: &T,
        b: &T,
        cmp: &impl Comparator<T>,
    ) -> bool {
        assert::less_or_equal_by(a, b, cmp)
    }

    /// True iff `a` sorts strictly after `b`
    pub fn assert_greater_by<T: ?Sized>(&self, a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
        assert::greater_by(a, b, cmp)
    }

    /// True iff `a` does not sort before `b`
    pub fn assert_greater_equal_by<T: ?Sized>(
        &self,
        a: &T,
        b: &T,
        cmp: &impl Comparator<T>,
    ) -> bool {
        assert::greater_or_equal_by(a, b, cmp)
    }

    /// True iff `value` is absent; never prints
    pub fn assert_is_null<T: ?Sized>(&self, value: Option<&T>) -> bool {
        assert::is_null(value)
    }

    /// True iff `value` is present; never prints
    pub fn assert_is_not_null<T: ?Sized>(&self, value: Option<&T>) -> bool {
        assert::is_not_null(value)
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Snapshot of all three counters
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Tests passed since the last `start_suite`
    pub fn passed(&self) -> u32 {
        self.tally.passed
    }

    /// Tests failed since the last `start_suite`
    pub fn failed(&self) -> u32 {
        self.tally.failed
    }

    /// Number of the most recent `test_description`
    pub fn test_number(&self) -> u32 {
        self.tally.test_number
    }

    /// Current lifecycle state
    pub fn state(&self) -> SuiteState {
        self.state
    }

    /// Counts so far, without ending the suite
    pub fn summary(&self) -> Summary {
        self.tally.into()
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear the suite down and keep its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
