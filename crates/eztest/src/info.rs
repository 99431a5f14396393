//! Per-case result record

use std::fmt;

/// Pass/fail outcome of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// No expectation failed and the case was not forced to fail
    #[default]
    Pass,
    /// At least one expectation failed, or the case was forced to fail
    Fail,
}

impl Verdict {
    /// Check if this verdict is a pass
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Check if this verdict is a failure
    pub fn is_fail(self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASSED"),
            Verdict::Fail => write!(f, "FAILED"),
        }
    }
}

/// Counters and verdict produced by a single test case run.
///
/// The runner hands a fresh record to every case; the case fills it in when it
/// finishes, either by falling off the end of its body or by a forced failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestCaseInfo {
    /// Number of expectations evaluated
    pub total_expectations: usize,
    /// Number of expectations that did not hold, never above `total_expectations`
    pub failed_expectations: usize,
    /// Case outcome
    pub verdict: Verdict,
}

impl TestCaseInfo {
    /// Create an empty record: no expectations, verdict `Pass`
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expectations that held
    pub fn passed_expectations(&self) -> usize {
        self.total_expectations - self.failed_expectations
    }
}
