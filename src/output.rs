//! Injectable output sink for user-facing results.
//!
//! The pipeline and the browse/search actions report results through a
//! [`ReportSink`] instead of printing directly, so the logic stays
//! output-format-agnostic and testable without capturing stdout. Logging
//! via `tracing` is separate and unaffected.

/// Destination for user-facing result lines.
pub trait ReportSink {
    /// Write one line of output.
    fn line(&mut self, text: &str);
}

/// Sink that prints each line to stdout.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Sink that collects lines in memory, for asserting on output in tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl ReportSink for BufferSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
