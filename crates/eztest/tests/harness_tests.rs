//! Harness behaviour through the declaration macros
//!
//! Tests the complete path a suite author sees:
//! - Case declaration and the per-case record
//! - Soft assertions, forced failure and buffer checks
//! - Report text and the aggregate outcome

use eztest::{
    force_fail_test, test_case, ConsoleReporter, RunSummary, Suite, TestCase, Verdict,
    TESTS_SEPARATOR,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Declared cases
// ============================================================================

test_case!(fn adds_up(t) {
    t.expect(2 + 2, 4);
});

test_case!(fn five_is_not_six(t) {
    t.expect(5, 6);
});

test_case!(fn first_fails_second_passes(t) {
    t.expect(1, 0);
    t.expect(1, 1);
});

test_case!(fn forced_before_any(t) {
    force_fail_test!(t);
});

test_case!(fn forced_after_checks(t) {
    t.expect(1, 1);
    t.expect(2, 3);
    force_fail_test!(t);
    t.expect(9, 9);
});

test_case!(fn nothing_checked(_t) {});

test_case!(fn zero_checks(t) {
    t.expect_zero(10 * 0);
    t.expect_not_zero(3);
    t.expect_zero(1);
});

test_case!(fn buffers(t) {
    let a = [1u8, 2, 3];
    t.expect_buf(a, [1u8, 2, 3], 3);
    t.expect_buf(a, [9u8], 0);
    t.expect_buf(b"abc", b"abd", 3);
});

test_case!(fn conditional_force(t) {
    let parsed: Option<u32> = None;
    match parsed {
        Some(v) => {
            t.expect(v, 1);
        }
        None => force_fail_test!(t),
    }
});

// ============================================================================
// Helpers
// ============================================================================

fn run(cases: Vec<TestCase>) -> (RunSummary, String) {
    let suite = Suite::new("main", cases).unwrap();
    let mut reporter = ConsoleReporter::new(Vec::new());
    let summary = suite.run(&mut reporter);
    let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
    (summary, out)
}

fn run_one(case: TestCase) -> (RunSummary, String) {
    run(vec![case])
}

// ============================================================================
// Per-case scenarios
// ============================================================================

#[rstest]
#[case::adds_up(TestCase::new("adds_up", adds_up), 1, 0, Verdict::Pass, "PASSED (1/1)")]
#[case::mismatch(TestCase::new("five_is_not_six", five_is_not_six), 1, 1, Verdict::Fail, "FAILED (0/1)")]
#[case::first_of_two(
    TestCase::new("first_fails_second_passes", first_fails_second_passes),
    2,
    1,
    Verdict::Fail,
    "FAILED (1/2)"
)]
#[case::forced_first(TestCase::new("forced_before_any", forced_before_any), 0, 0, Verdict::Fail, "FAILED (0/0)")]
#[case::forced_later(TestCase::new("forced_after_checks", forced_after_checks), 2, 1, Verdict::Fail, "FAILED (1/2)")]
#[case::vacuous(TestCase::new("nothing_checked", nothing_checked), 0, 0, Verdict::Pass, "PASSED (0/0)")]
#[case::zero_forms(TestCase::new("zero_checks", zero_checks), 3, 1, Verdict::Fail, "FAILED (2/3)")]
#[case::buffers(TestCase::new("buffers", buffers), 3, 1, Verdict::Fail, "FAILED (2/3)")]
#[case::conditional(TestCase::new("conditional_force", conditional_force), 0, 0, Verdict::Fail, "FAILED (0/0)")]
fn test_case_record(
    #[case] case: TestCase,
    #[case] total: usize,
    #[case] failed: usize,
    #[case] verdict: Verdict,
    #[case] verdict_line: &str,
) {
    let (summary, out) = run_one(case);
    let info = summary.cases[0].info;

    assert_eq!(info.total_expectations, total);
    assert_eq!(info.failed_expectations, failed);
    assert_eq!(info.verdict, verdict);
    assert!(info.failed_expectations <= info.total_expectations);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("Executing test '{}'...", case.name()));
    assert!(lines.contains(&verdict_line), "missing {verdict_line:?} in:\n{out}");
}

#[test]
fn test_mismatch_diagnostic_shows_both_values() {
    let (_, out) = run_one(TestCase::new("five_is_not_six", five_is_not_six));
    let diagnostic = out.lines().nth(1).unwrap();

    assert!(diagnostic.starts_with("Failed expectation. Line: "));
    assert!(diagnostic.ends_with(". actual: 5(0x5) expected: 6(0x6)"));
}

#[test]
fn test_zero_forms_report_boolean_words() {
    let (_, out) = run_one(TestCase::new("zero_checks", zero_checks));
    let diagnostics: Vec<_> = out.lines().filter(|l| l.starts_with("Failed")).collect();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].ends_with("actual: 0(0x0) expected: 1(0x1)"));
}

#[test]
fn test_buffer_diagnostic_names_first_mismatch() {
    let (_, out) = run_one(TestCase::new("buffers", buffers));

    assert!(out.contains("first mismatch at byte 2: actual: 0x63 expected: 0x64"));
}

#[test]
fn test_forced_failure_skips_remaining_checks() {
    let (_, out) = run_one(TestCase::new("forced_after_checks", forced_after_checks));
    let diagnostics = out.lines().filter(|l| l.starts_with("Failed")).count();

    // only `expect(2, 3)` ran and failed; `expect(9, 9)` never ran
    assert_eq!(diagnostics, 1);
}

// ============================================================================
// Suite behaviour
// ============================================================================

#[test]
fn test_start_announcements_follow_declaration_order() {
    let (_, out) = run(vec![
        TestCase::new("nothing_checked", nothing_checked),
        TestCase::new("adds_up", adds_up),
        TestCase::new("zero_checks", zero_checks),
    ]);
    let starts: Vec<_> = out
        .lines()
        .filter(|l| l.starts_with("Executing test"))
        .collect();

    assert_eq!(
        starts,
        vec![
            "Executing test 'nothing_checked'...",
            "Executing test 'adds_up'...",
            "Executing test 'zero_checks'...",
        ]
    );
}

#[test]
fn test_outcome_is_failed_case_count() {
    let (summary, out) = run(vec![
        TestCase::new("adds_up", adds_up),
        TestCase::new("five_is_not_six", five_is_not_six),
        TestCase::new("nothing_checked", nothing_checked),
    ]);

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.exit_status(), 1);
    assert!(out.ends_with("Executed tests: 3 (2 passed, 1 failed).\n"));
}

#[test]
fn test_every_case_followed_by_separator() {
    let (_, out) = run(vec![
        TestCase::new("adds_up", adds_up),
        TestCase::new("forced_before_any", forced_before_any),
    ]);
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.iter().filter(|l| **l == TESTS_SEPARATOR).count(), 2);
    assert_eq!(lines[2], TESTS_SEPARATOR);
    assert_eq!(lines[5], TESTS_SEPARATOR);
}

#[test]
fn test_all_passing_suite_succeeds() {
    let (summary, _) = run(vec![
        TestCase::new("adds_up", adds_up),
        TestCase::new("nothing_checked", nothing_checked),
    ]);

    assert!(summary.is_success());
    assert_eq!(summary.exit_status(), 0);
}

#[test]
fn test_full_report() {
    let (_, out) = run(vec![
        TestCase::new("adds_up", adds_up),
        TestCase::new("forced_before_any", forced_before_any),
        TestCase::new("nothing_checked", nothing_checked),
    ]);

    insta::assert_snapshot!(out, @r"
Executing test 'adds_up'...
PASSED (1/1)
--------------------------------------------------------------------------------
Executing test 'forced_before_any'...
FAILED (0/0)
--------------------------------------------------------------------------------
Executing test 'nothing_checked'...
PASSED (0/0)
--------------------------------------------------------------------------------
Executed tests: 3 (2 passed, 1 failed).
");
}
