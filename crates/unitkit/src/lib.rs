//! unitkit - a minimal unit-testing harness
//!
//! This library provides:
//! - Assertion predicates over integers or any type with a comparator
//! - A suite runner with pass/fail/test counters and setup/takedown hooks
//! - Colored console banners, or JSON lines, or `tracing` events
//!
//! There is no discovery and no parallelism: a test program calls
//! [`Suite::start_suite`], runs each test with [`Suite::run_test`], and
//! reads the [`Summary`] returned by [`Suite::end_suite`] to pick its exit
//! status. The [`global`] module offers the same operations as free
//! functions over a thread-local suite.

/// unitkit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assert;
pub mod cmp;
pub mod global;
pub mod report;
pub mod suite;

pub use assert::Check;
pub use cmp::{int_cmp, three_way, Comparator, ThreeWay};
pub use report::{
    init_tracing, ConsoleSink, Event, JsonSink, MemorySink, ReportSink, TracingSink,
};
pub use suite::{DynSuite, Hook, Suite, SuiteState, Summary, Tally};
pub use unitkit_config as config;
