//! JSON-lines sink: one serialized [`Event`] per line

use crate::report::{Event, ReportSink};
use std::io::{self, Write};

pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &Event) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, event: &Event) {
        let _ = self.write_event(event);
    }
}
