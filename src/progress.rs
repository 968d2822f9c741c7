//! Textual progress reporting for long scans.

use std::io::Write;

/// Optional textual progress sink for the distance scan.
///
/// A scan emits a newline when it starts, a carriage-return-prefixed
/// percentage line as each search column completes, and a trailing newline at
/// completion, so the percentage overwrites itself on a terminal. Percentages
/// are monotonically non-decreasing and the last update reports 100%.
///
/// Write failures are ignored: the sink observes a scan but never affects its
/// result, and an absent sink emits nothing.
pub struct ProgressSink<'a> {
    out: Option<&'a mut dyn Write>,
}

impl<'a> ProgressSink<'a> {
    /// Wraps an optional writer.
    pub fn new(out: Option<&'a mut dyn Write>) -> Self {
        Self { out }
    }

    /// Creates a sink that reports nothing.
    pub fn none() -> Self {
        Self { out: None }
    }

    pub(crate) fn begin(&mut self) {
        if let Some(out) = self.out.as_deref_mut() {
            let _ = writeln!(out);
        }
    }

    pub(crate) fn column_done(&mut self, done: usize, total: usize) {
        if let Some(out) = self.out.as_deref_mut() {
            let pct = done as f64 / total as f64 * 100.0;
            let _ = write!(out, "\r{pct:.2}% complete");
        }
    }

    pub(crate) fn finish(&mut self) {
        if let Some(out) = self.out.as_deref_mut() {
            let _ = writeln!(out);
        }
    }
}
