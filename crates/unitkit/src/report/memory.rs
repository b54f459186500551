//! In-memory sink that records every event

use crate::report::{Event, ReportSink};

/// Keeps events in emission order
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<Event>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events matching `pred`
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
