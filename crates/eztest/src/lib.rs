//! eztest: a small, sequential unit-test harness
//!
//! Provides everything needed to turn a binary into a test suite:
//! - Test case declaration (`test_case!`)
//! - Soft assertions that count and report but never abort (`Expectations`)
//! - Forced failure that ends a case early (`force_fail_test!`)
//! - An ordered suite runner that prints a per-case report and a summary line
//!   and turns the number of failed cases into the process exit status (`run_tests!`)
//!
//! # Example
//!
//! ```no_run
//! use eztest::{run_tests, test_case};
//!
//! fn sum(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! test_case!(fn sum_test(t) {
//!     t.expect(sum(2, 2), 4);
//! });
//!
//! test_case!(fn mul_test(t) {
//!     t.expect_zero(10 * 0);
//! });
//!
//! run_tests!(main, sum_test, mul_test);
//! ```
//!
//! Cases run in the order given to `run_tests!`, one at a time.

pub mod case;
pub mod config;
pub mod expect;
pub mod info;
mod macros;
pub mod reporter;
pub mod runner;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Faults of the harness itself, as opposed to test outcomes
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("A test suite needs at least one test case")]
    EmptySuite,

    #[error("Failed to write test report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to open report file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

// Re-export main types
pub use case::{CaseResult, CaseState, ForcedFailure, TestCase, TestFn};
pub use config::Config;
pub use expect::{ExpectWord, Expectations, Mismatch, MismatchKind};
pub use info::{TestCaseInfo, Verdict};
pub use reporter::{ConsoleReporter, Report, TESTS_SEPARATOR};
pub use runner::{CaseRecord, RunSummary, Suite};
