//! Color-aware console sink
//!
//! Renders reporter events as the banner protocol test programs read on
//! their terminal. Respects the NO_COLOR environment variable and
//! auto-detects terminal capabilities.

use crate::report::{Event, ReportSink};
use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unitkit_config::ColorMode;

/// Resolve a color mode to a termcolor ColorChoice
pub fn color_choice(mode: ColorMode) -> ColorChoice {
    // Always respect NO_COLOR (https://no-color.org)
    if std::env::var("NO_COLOR").is_ok() {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => ColorChoice::Auto,
    }
}

/// Sink that writes colored banners to a terminal stream or buffer
pub struct ConsoleSink<W: WriteColor = StandardStream> {
    out: W,
}

impl ConsoleSink<StandardStream> {
    /// Console sink on standard error
    pub fn stderr(mode: ColorMode) -> Self {
        Self::from_writer(StandardStream::stderr(color_choice(mode)))
    }

    /// Console sink on standard output
    pub fn stdout(mode: ColorMode) -> Self {
        Self::from_writer(StandardStream::stdout(color_choice(mode)))
    }
}

impl ConsoleSink<Buffer> {
    /// Plain (no color) in-memory sink, for tests
    pub fn buffer() -> Self {
        Self::from_writer(Buffer::no_color())
    }

    /// In-memory sink that keeps ANSI escapes
    pub fn ansi_buffer() -> Self {
        Self::from_writer(Buffer::ansi())
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.out.as_slice()).into_owned()
    }
}

impl Default for ConsoleSink<StandardStream> {
    fn default() -> Self {
        Self::stderr(ColorMode::Auto)
    }
}

impl<W: WriteColor> ConsoleSink<W> {
    /// Wrap any color-capable writer
    pub fn from_writer(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Recover the underlying writer
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Render one event
    pub fn write_event(&mut self, event: &Event) -> io::Result<()> {
        let w = &mut self.out;
        match event {
            Event::SuiteStarted { label } => {
                writeln!(w)?;
                write_colored(w, Color::Yellow, &format!("[Start Suite] {}", label))?;
                writeln!(w)?;
            }
            Event::SuiteEnded { passed, failed } => {
                writeln!(w)?;
                write_colored(w, Color::Green, &format!("Passed: {}", passed))?;
                writeln!(w)?;
                write_colored(w, Color::Red, &format!("Failed: {}", failed))?;
                writeln!(w)?;
                writeln!(w)?;
            }
            Event::TestDescribed { number, label } => {
                writeln!(w)?;
                write_colored(w, Color::Yellow, &format!("[Test {}] {}", number, label))?;
                writeln!(w)?;
            }
            Event::TestPassed { label } => {
                write_colored(w, Color::Green, "[PASS]")?;
                write_colored(w, Color::White, &format!(" {}", label))?;
                writeln!(w)?;
            }
            Event::TestFailed { label } => {
                write_colored(w, Color::Red, "[FAIL]")?;
                write_colored(w, Color::White, &format!(" {}", label))?;
                writeln!(w)?;
            }
            Event::TestStarted { name } => {
                writeln!(w)?;
                write_colored(w, Color::Blue, &format!("[Start Test] {}", name))?;
                writeln!(w)?;
            }
            Event::TestEnded { name } => {
                writeln!(w)?;
                write_colored(w, Color::Blue, &format!("[End Test] {}", name))?;
                writeln!(w)?;
            }
            Event::AssertionFailed { lhs, rhs, check } => {
                let line = format!("{} {} {}", lhs, check.failure_phrase(), rhs);
                write_colored(w, Color::Red, &line)?;
                writeln!(w)?;
            }
        }
        // Output is unbuffered from the caller's perspective
        w.flush()
    }
}

fn write_colored(w: &mut impl WriteColor, color: Color, text: &str) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(w, "{}", text)?;
    w.reset()
}

impl<W: WriteColor> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, event: &Event) {
        let _ = self.write_event(event);
    }
}
