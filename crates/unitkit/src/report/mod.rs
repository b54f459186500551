//! Reporter: the events a suite emits and the sinks that render them
//!
//! The suite never formats output itself. It builds an [`Event`] for every
//! banner or diagnostic and hands it to a [`ReportSink`]; swapping the sink
//! changes the output target without touching assertion logic.

pub mod console;
pub mod json;
pub mod memory;
pub mod tracing_sink;

pub use console::{color_choice, ConsoleSink};
pub use json::JsonSink;
pub use memory::MemorySink;
pub use tracing_sink::{init_tracing, TracingSink};

use crate::assert::Check;
use serde::Serialize;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use termcolor::{ColorChoice, StandardStream};
use unitkit_config::{Config, OutputFormat, OutputStream, ResolvedOutput};

/// Something worth reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// `start_suite` was called
    SuiteStarted { label: String },
    /// `end_suite` was called; counts since the last `start_suite`
    SuiteEnded { passed: u32, failed: u32 },
    /// `test_description` was called; `number` is the new test counter
    TestDescribed { number: u32, label: String },
    /// `test_passed` was called
    TestPassed { label: String },
    /// `test_failed` was called
    TestFailed { label: String },
    /// `run_test` is about to run the setup hook
    TestStarted { name: String },
    /// `run_test` finished the takedown hook
    TestEnded { name: String },
    /// An integer assertion did not hold
    AssertionFailed { lhs: i64, rhs: i64, check: Check },
}

impl Event {
    /// Whether this event marks something that went wrong
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::TestFailed { .. } | Event::AssertionFailed { .. }
        )
    }
}

/// Destination for reporter events
///
/// Emitting never fails from the caller's point of view; a sink that
/// cannot write drops the event.
pub trait ReportSink {
    fn emit(&mut self, event: &Event);
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, event: &Event) {
        (**self).emit(event);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, event: &Event) {
        (**self).emit(event);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Rc<RefCell<S>> {
    fn emit(&mut self, event: &Event) {
        self.borrow_mut().emit(event);
    }
}

/// Which sink a resolved output configuration selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Colored banners on a standard stream
    Console {
        stream: OutputStream,
        color: ColorChoice,
    },
    /// One JSON object per line on a standard stream
    Json { stream: OutputStream },
    /// `tracing` events; the installed subscriber decides where they go
    Tracing,
}

impl SinkKind {
    /// Pick the sink for `output`
    pub fn select(output: &ResolvedOutput) -> Self {
        match output.format {
            OutputFormat::Console => SinkKind::Console {
                stream: output.stream,
                color: color_choice(output.color),
            },
            OutputFormat::Json => SinkKind::Json {
                stream: output.stream,
            },
            OutputFormat::Tracing => SinkKind::Tracing,
        }
    }

    /// Open the selected sink on the process streams
    pub fn build(self) -> Box<dyn ReportSink> {
        match self {
            SinkKind::Console { stream, color } => {
                let stream = match stream {
                    OutputStream::Stderr => StandardStream::stderr(color),
                    OutputStream::Stdout => StandardStream::stdout(color),
                };
                Box::new(ConsoleSink::from_writer(stream))
            }
            SinkKind::Json { stream } => match stream {
                OutputStream::Stderr => Box::new(JsonSink::new(io::stderr())),
                OutputStream::Stdout => Box::new(JsonSink::new(io::stdout())),
            },
            SinkKind::Tracing => Box::new(TracingSink::new()),
        }
    }
}

/// Build the sink a resolved configuration asks for
pub fn sink_from_config(config: &Config) -> Box<dyn ReportSink> {
    let kind = SinkKind::select(&config.output);
    tracing::debug!(?kind, "selecting report sink");
    kind.build()
}
