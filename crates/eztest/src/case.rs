//! Test case lifecycle
//!
//! A test case is a plain function taking its output record and the report
//! sink. `test_case!` writes that function; its body runs inside [`execute`],
//! which supplies the prologue (fresh counters, start announcement) and both
//! epilogues (normal fall-through and forced failure).

use crate::expect::Expectations;
use crate::info::{TestCaseInfo, Verdict};
use crate::reporter::Report;
use std::fmt;

/// Signature of a declared test case
pub type TestFn = fn(&mut TestCaseInfo, &mut dyn Report);

/// Token returned from a body to end it early; see `force_fail_test!`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedFailure {
    pub file: &'static str,
    pub line: u32,
}

/// What a test body evaluates to
pub type CaseResult = Result<(), ForcedFailure>;

/// How a case left its running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseState {
    /// The body ran to its end; the verdict is whatever the expectations produced
    FinalizedNormal,
    /// The body was cut short by a forced failure; the verdict is always `Fail`
    FinalizedForced,
}

/// A named handle to a declared test case
#[derive(Clone, Copy)]
pub struct TestCase {
    name: &'static str,
    run: TestFn,
}

impl TestCase {
    pub const fn new(name: &'static str, run: TestFn) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the case once, filling `out`
    pub fn invoke(&self, out: &mut TestCaseInfo, report: &mut dyn Report) {
        (self.run)(out, report)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Run one test body between the case prologue and epilogue.
///
/// The record in `out` is only written once the body has returned, whichever
/// way it returned.
pub fn execute<F>(
    name: &str,
    out: &mut TestCaseInfo,
    report: &mut dyn Report,
    body: F,
) -> CaseState
where
    F: FnOnce(&mut Expectations<'_>) -> CaseResult,
{
    report.case_started(name);
    tracing::debug!(case = name, "case started");

    let mut expectations = Expectations::new(report);
    let state = match body(&mut expectations) {
        Ok(()) => CaseState::FinalizedNormal,
        Err(forced) => {
            tracing::debug!(case = name, line = forced.line, "case forced to fail");
            CaseState::FinalizedForced
        }
    };

    let mut info = expectations.into_info();
    if state == CaseState::FinalizedForced {
        info.verdict = Verdict::Fail;
    }
    *out = info;

    tracing::debug!(
        case = name,
        total = info.total_expectations,
        failed = info.failed_expectations,
        verdict = %info.verdict,
        "case finished"
    );
    state
}
