//! Test runner - execute a suite in declaration order

use crate::case::TestCase;
use crate::config::Config;
use crate::info::TestCaseInfo;
use crate::reporter::{ConsoleReporter, Report};
use crate::{HarnessError, HarnessResult};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Outcome of one case in a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRecord {
    /// Case name
    pub name: &'static str,
    /// Record the case filled in
    pub info: TestCaseInfo,
}

/// Aggregate of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases executed
    pub total: usize,
    /// Cases with verdict `Pass`
    pub passed: usize,
    /// Cases with verdict `Fail`; this is the run's outcome
    pub failed: usize,
    /// Per-case records in execution order
    pub cases: Vec<CaseRecord>,
}

impl RunSummary {
    /// Tally per-case records
    pub fn from_records(cases: Vec<CaseRecord>) -> Self {
        let failed = cases.iter().filter(|c| c.info.verdict.is_fail()).count();
        Self {
            total: cases.len(),
            passed: cases.len() - failed,
            failed,
            cases,
        }
    }

    /// Check if every case passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: the failed-case count, saturated at 255 so a
    /// failing run never reads as success
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.failed).unwrap_or(u8::MAX)
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// An ordered, non-empty list of test cases
#[derive(Debug, Clone)]
pub struct Suite {
    name: &'static str,
    cases: Vec<TestCase>,
}

impl Suite {
    /// Assemble a suite; cases run in the order given
    pub fn new(name: &'static str, cases: Vec<TestCase>) -> HarnessResult<Self> {
        if cases.is_empty() {
            return Err(HarnessError::EmptySuite);
        }
        Ok(Self { name, cases })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Always false; an empty suite cannot be assembled
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every case once, in order, then report the summary
    #[tracing::instrument(skip_all, fields(suite = self.name, cases = self.cases.len()))]
    pub fn run(&self, report: &mut dyn Report) -> RunSummary {
        let mut records = Vec::with_capacity(self.cases.len());

        for case in &self.cases {
            let mut info = TestCaseInfo::new();
            case.invoke(&mut info, report);
            report.case_finished(case.name(), &info);
            records.push(CaseRecord {
                name: case.name(),
                info,
            });
        }

        let summary = RunSummary::from_records(records);
        report.summary(&summary);
        tracing::debug!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "suite finished"
        );
        summary
    }

    /// Run with a report built from `config`: a file when `output` is set,
    /// stdout otherwise
    pub fn run_with_config(&self, config: &Config) -> HarnessResult<RunSummary> {
        match &config.output {
            Some(path) => {
                let file = File::create(path).map_err(|source| HarnessError::OutputFile {
                    path: path.clone(),
                    source,
                })?;
                let mut reporter = ConsoleReporter::new(BufWriter::new(file));
                let summary = self.run(&mut reporter);
                reporter.finish()?;
                Ok(summary)
            }
            None => {
                let stdout = io::stdout();
                let color = config.use_color(stdout.is_terminal());
                let mut reporter = ConsoleReporter::new(stdout.lock()).with_color(color);
                let summary = self.run(&mut reporter);
                reporter.finish()?;
                Ok(summary)
            }
        }
    }
}

/// Install the stderr log subscriber; a subscriber set up earlier wins
fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();
}

/// Body of the entry point generated by `run_tests!`
pub fn run_main(name: &'static str, cases: Vec<TestCase>) -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    let result = Suite::new(name, cases).and_then(|suite| suite.run_with_config(&config));
    match result {
        Ok(summary) => summary.exit_code(),
        Err(err) => {
            eprintln!("eztest: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::execute;
    use crate::expect::tests::Recorder;
    use crate::info::Verdict;

    fn passing(out: &mut TestCaseInfo, report: &mut dyn Report) {
        execute("passing", out, report, |t| {
            t.expect(2 + 2, 4);
            Ok(())
        });
    }

    fn failing(out: &mut TestCaseInfo, report: &mut dyn Report) {
        execute("failing", out, report, |t| {
            t.expect(5, 6);
            Ok(())
        });
    }

    fn empty(out: &mut TestCaseInfo, report: &mut dyn Report) {
        execute("empty", out, report, |_| Ok(()));
    }

    fn summary_with_failures(failed: usize) -> RunSummary {
        let fail = CaseRecord {
            name: "f",
            info: TestCaseInfo {
                total_expectations: 1,
                failed_expectations: 1,
                verdict: Verdict::Fail,
            },
        };
        RunSummary::from_records(vec![fail; failed])
    }

    #[test]
    fn test_empty_suite_rejected() {
        let err = Suite::new("main", Vec::new()).unwrap_err();
        assert!(matches!(err, HarnessError::EmptySuite));
    }

    #[test]
    fn test_runs_in_declaration_order() {
        let suite = Suite::new(
            "main",
            vec![
                TestCase::new("failing", failing),
                TestCase::new("passing", passing),
                TestCase::new("empty", empty),
            ],
        )
        .unwrap();
        let mut recorder = Recorder::default();

        let summary = suite.run(&mut recorder);

        assert_eq!(recorder.started, vec!["failing", "passing", "empty"]);
        let names: Vec<_> = summary.cases.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["failing", "passing", "empty"]);
        assert_eq!(recorder.finished.len(), 3);
        assert_eq!(recorder.summaries, 1);
    }

    #[test]
    fn test_outcome_counts_failed_cases() {
        let suite = Suite::new(
            "main",
            vec![
                TestCase::new("passing", passing),
                TestCase::new("failing", failing),
                TestCase::new("empty", empty),
            ],
        )
        .unwrap();
        let mut recorder = Recorder::default();

        let summary = suite.run(&mut recorder);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_status(), 1);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_same_case_twice_gets_fresh_records() {
        let suite = Suite::new(
            "main",
            vec![
                TestCase::new("failing", failing),
                TestCase::new("failing", failing),
            ],
        )
        .unwrap();
        let mut recorder = Recorder::default();

        let summary = suite.run(&mut recorder);

        for record in &summary.cases {
            assert_eq!(record.info.total_expectations, 1);
            assert_eq!(record.info.failed_expectations, 1);
        }
    }

    #[test]
    fn test_exit_status_saturates() {
        assert_eq!(summary_with_failures(0).exit_status(), 0);
        assert_eq!(summary_with_failures(3).exit_status(), 3);
        assert_eq!(summary_with_failures(255).exit_status(), 255);
        assert_eq!(summary_with_failures(256).exit_status(), 255);
        assert_eq!(summary_with_failures(300).failed, 300);
    }
}
