//! Sink that forwards events to `tracing`

use crate::report::{Event, ReportSink};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize a tracing subscriber for unitkit output.
///
/// Safe to call multiple times. Nothing is installed unless RUST_LOG is set,
/// e.g. `RUST_LOG=unitkit=info` to see suite events or `unitkit=debug` for
/// internal decisions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Emits every event under the `unitkit` target
///
/// Lifecycle events are logged at info, failures at warn.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Sink logging through whatever subscriber is installed
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for TracingSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::SuiteStarted { label } => {
                tracing::info!(target: "unitkit", %label, "suite started")
            }
            Event::SuiteEnded { passed, failed } => {
                tracing::info!(target: "unitkit", passed, failed, "suite ended")
            }
            Event::TestDescribed { number, label } => {
                tracing::info!(target: "unitkit", number, %label, "test described")
            }
            Event::TestPassed { label } => {
                tracing::info!(target: "unitkit", %label, "test passed")
            }
            Event::TestFailed { label } => {
                tracing::warn!(target: "unitkit", %label, "test failed")
            }
            Event::TestStarted { name } => {
                tracing::info!(target: "unitkit", %name, "test started")
            }
            Event::TestEnded { name } => {
                tracing::info!(target: "unitkit", %name, "test ended")
            }
            Event::AssertionFailed { lhs, rhs, check } => tracing::warn!(
                target: "unitkit",
                lhs,
                rhs,
                %check,
                "{} {} {}",
                lhs,
                check.failure_phrase(),
                rhs
            ),
        }
    }
}

/// In-process capture of `tracing` events, for asserting on what a sink logs
#[cfg(test)]
pub(crate) mod capture {
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Captured {
        pub target: String,
        pub level: Level,
        pub message: String,
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(Captured {
                target: meta.target().to_string(),
                level: *meta.level(),
                message: visitor.0,
            });
        }
    }

    /// Run `f` with a capturing subscriber as the thread default
    pub(crate) fn capture(f: impl FnOnce()) -> Vec<Captured> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(events.clone()));
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap().clone();
        captured
    }

    /// Only the events logged under the `unitkit` target
    pub(crate) fn unitkit_events(f: impl FnOnce()) -> Vec<Captured> {
        capture(f)
            .into_iter()
            .filter(|event| event.target == "unitkit")
            .collect()
    }
}
