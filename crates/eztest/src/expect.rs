//! Assertion engine - soft expectations evaluated inside a test case body
//!
//! Every expectation bumps the case's evaluated counter. A failing one bumps
//! the failed counter, flips the verdict to `Fail` and reports a diagnostic,
//! then lets the body carry on, so one run can surface several independent
//! failures. Only `force_fail` ends a case early.
//!
//! # API
//!
//! - `expect(value, expected)`: word equality
//! - `expect_zero(value)`: same as `expect(value == 0, true)`
//! - `expect_not_zero(value)`: same as `expect(value == 0, false)`
//! - `expect_buf(value, expected, size)`: first `size` bytes equal
//! - `force_fail()`: used through `force_fail_test!`

use crate::case::ForcedFailure;
use crate::info::{TestCaseInfo, Verdict};
use crate::reporter::Report;
use std::panic::Location;

// ============================================================================
// Machine words
// ============================================================================

/// Values that `expect` compares as a single 64-bit machine word.
///
/// Comparison is identity of the word: signed integers are sign-extended,
/// pointers compare by address. Floating-point and aggregate values have no
/// word form and are rejected at compile time.
pub trait ExpectWord {
    /// The word this value compares as
    fn to_word(&self) -> u64;
}

macro_rules! impl_signed_word {
    ($($ty:ty),*) => {
        $(impl ExpectWord for $ty {
            fn to_word(&self) -> u64 {
                *self as i64 as u64
            }
        })*
    };
}

macro_rules! impl_unsigned_word {
    ($($ty:ty),*) => {
        $(impl ExpectWord for $ty {
            fn to_word(&self) -> u64 {
                *self as u64
            }
        })*
    };
}

impl_signed_word!(i8, i16, i32, i64, isize);
impl_unsigned_word!(u8, u16, u32, u64, usize, bool, char);

impl<T> ExpectWord for *const T {
    fn to_word(&self) -> u64 {
        *self as usize as u64
    }
}

impl<T> ExpectWord for *mut T {
    fn to_word(&self) -> u64 {
        *self as usize as u64
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// What a failed expectation saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// `expect` and its zero/non-zero forms
    Word { actual: u64, expected: u64 },
    /// `expect_buf`; a side is `None` when its region ended before `offset`
    Buffer {
        offset: usize,
        actual: Option<u8>,
        expected: Option<u8>,
    },
}

/// A failed expectation and where it was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub file: &'static str,
    pub line: u32,
    pub kind: MismatchKind,
}

// ============================================================================
// Expectations
// ============================================================================

/// Running counters of one test case invocation.
///
/// Created fresh by the case prologue and consumed by its epilogue, so nothing
/// carries over from one case to the next.
pub struct Expectations<'r> {
    info: TestCaseInfo,
    report: &'r mut dyn Report,
}

impl<'r> Expectations<'r> {
    pub(crate) fn new(report: &'r mut dyn Report) -> Self {
        Self {
            info: TestCaseInfo::new(),
            report,
        }
    }

    /// Counters accumulated so far
    pub fn info(&self) -> &TestCaseInfo {
        &self.info
    }

    pub(crate) fn into_info(self) -> TestCaseInfo {
        self.info
    }

    /// Expect `value` and `expected` to be the same machine word.
    ///
    /// Returns whether the expectation held.
    #[track_caller]
    pub fn expect<A, E>(&mut self, value: A, expected: E) -> bool
    where
        A: ExpectWord,
        E: ExpectWord,
    {
        let location = Location::caller();
        let actual = value.to_word();
        let expected = expected.to_word();
        let held = actual == expected;

        self.info.total_expectations += 1;
        tracing::trace!(line = location.line(), held, "expect");

        if !held {
            self.fail(Mismatch {
                file: location.file(),
                line: location.line(),
                kind: MismatchKind::Word { actual, expected },
            });
        }
        held
    }

    /// Expect `value` to be zero
    #[track_caller]
    pub fn expect_zero<T: ExpectWord>(&mut self, value: T) -> bool {
        self.expect(value.to_word() == 0, true)
    }

    /// Expect `value` to be non-zero
    #[track_caller]
    pub fn expect_not_zero<T: ExpectWord>(&mut self, value: T) -> bool {
        self.expect(value.to_word() == 0, false)
    }

    /// Expect the first `size` bytes of both regions to be equal.
    ///
    /// Counts as one expectation whatever the size. Scanning stops at the
    /// first differing byte; a region shorter than `size` differs where it
    /// ends. `size == 0` always holds.
    #[track_caller]
    pub fn expect_buf<A, E>(&mut self, value: A, expected: E, size: usize) -> bool
    where
        A: AsRef<[u8]>,
        E: AsRef<[u8]>,
    {
        let location = Location::caller();
        let (value, expected) = (value.as_ref(), expected.as_ref());

        self.info.total_expectations += 1;

        let first_diff = (0..size).find_map(|offset| {
            let (a, e) = (value.get(offset).copied(), expected.get(offset).copied());
            match (a, e) {
                (Some(a), Some(e)) if a == e => None,
                _ => Some(MismatchKind::Buffer {
                    offset,
                    actual: a,
                    expected: e,
                }),
            }
        });
        tracing::trace!(line = location.line(), size, held = first_diff.is_none(), "expect_buf");

        match first_diff {
            None => true,
            Some(kind) => {
                self.fail(Mismatch {
                    file: location.file(),
                    line: location.line(),
                    kind,
                });
                false
            }
        }
    }

    /// Mark the case failed and produce the token that ends its body.
    ///
    /// Use through `force_fail_test!`, which returns the token from the body.
    #[track_caller]
    pub fn force_fail(&mut self) -> ForcedFailure {
        let location = Location::caller();
        self.info.verdict = Verdict::Fail;
        tracing::debug!(line = location.line(), "forced failure");
        ForcedFailure {
            file: location.file(),
            line: location.line(),
        }
    }

    fn fail(&mut self, mismatch: Mismatch) {
        self.info.failed_expectations += 1;
        self.info.verdict = Verdict::Fail;
        self.report.expectation_failed(&mismatch);
    }
}
