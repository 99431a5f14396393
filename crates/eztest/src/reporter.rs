//! Test reporter - render the human-readable run report

use crate::expect::{Mismatch, MismatchKind};
use crate::info::{TestCaseInfo, Verdict};
use crate::runner::RunSummary;
use crate::HarnessResult;
use colored::*;
use std::fmt;
use std::io::{self, Write};

/// Rule printed after every case report
pub const TESTS_SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Sink for everything a suite run prints.
///
/// Test cases and the runner talk to the report only through this trait, so the
/// same suite can print to the console, a file or an in-memory buffer.
pub trait Report {
    /// A case is about to run its body
    fn case_started(&mut self, name: &str);

    /// An expectation inside the running case did not hold
    fn expectation_failed(&mut self, mismatch: &Mismatch);

    /// A case finished and its record is final
    fn case_finished(&mut self, name: &str, info: &TestCaseInfo);

    /// All cases finished
    fn summary(&mut self, summary: &RunSummary);
}

/// Plain-text reporter writing one line per event
pub struct ConsoleReporter<W: Write> {
    out: W,
    /// Colorize the verdict word
    color: bool,
    /// First write error; later writes are skipped once set
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter without color
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            error: None,
        }
    }

    /// Enable or disable colored verdicts
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Flush the sink and hand it back, or the first write error seen
    pub fn finish(mut self) -> HarnessResult<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(err);
        }
    }

    fn verdict_word(&self, verdict: Verdict) -> String {
        let word = verdict.to_string();
        if !self.color {
            return word;
        }
        match verdict {
            Verdict::Pass => word.green().bold().to_string(),
            Verdict::Fail => word.red().bold().to_string(),
        }
    }
}

impl<W: Write> Report for ConsoleReporter<W> {
    fn case_started(&mut self, name: &str) {
        self.line(format_args!("Executing test '{}'...", name));
    }

    fn expectation_failed(&mut self, mismatch: &Mismatch) {
        let text = mismatch_line(mismatch);
        self.line(format_args!("{}", text));
    }

    fn case_finished(&mut self, _name: &str, info: &TestCaseInfo) {
        let word = self.verdict_word(info.verdict);
        self.line(format_args!(
            "{} ({}/{})",
            word,
            info.passed_expectations(),
            info.total_expectations
        ));
        self.line(format_args!("{}", TESTS_SEPARATOR));
    }

    fn summary(&mut self, summary: &RunSummary) {
        self.line(format_args!(
            "Executed tests: {} ({} passed, {} failed).",
            summary.total, summary.passed, summary.failed
        ));
    }
}

/// Render a machine word as `decimal(0xhex)`
fn word(value: u64) -> String {
    format!("{}(0x{:x})", value as i64, value)
}

fn byte(value: Option<u8>) -> String {
    match value {
        Some(b) => format!("0x{:02x}", b),
        None => "<none>".to_string(),
    }
}

/// Diagnostic line for a failed expectation
pub(crate) fn mismatch_line(mismatch: &Mismatch) -> String {
    match mismatch.kind {
        MismatchKind::Word { actual, expected } => format!(
            "Failed expectation. Line: {}. actual: {} expected: {}",
            mismatch.line,
            word(actual),
            word(expected)
        ),
        MismatchKind::Buffer {
            offset,
            actual,
            expected,
        } => format!(
            "Failed buffer expectation. Line: {}. first mismatch at byte {}: actual: {} expected: {}",
            mismatch.line,
            offset,
            byte(actual),
            byte(expected)
        ),
    }
}
