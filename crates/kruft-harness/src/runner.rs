//! Test execution engine.

use std::io::Write;
use std::time::Instant;

use crate::diff;
use crate::execute::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogLevel, Outcome, StreamKind};
use crate::suite::TestRun;
use crate::verify::VerificationResult;

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run every case of `fixture_set`, reporting progress to `run` and,
    /// when given, one structured log entry per case to `log`.
    pub fn run<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        run: &mut TestRun<W>,
        mut log: Option<&mut LogEmitter>,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let suite_start = Instant::now();
        run.begin_suite(&fixture_set.family, fixture_set.cases.len())?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let result = if case.skip {
                run.skip(&case.name)?;
                skipped(case)
            } else {
                run.start(&case.name)?;
                let started = Instant::now();
                let result = execute_case(case);
                let elapsed = started.elapsed();
                match &result.diff {
                    None => run.pass(&case.name, elapsed)?,
                    Some(diff) => run.fail(&case.name, diff, elapsed)?,
                }
                if let Some(log) = log.as_deref_mut() {
                    let latency = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
                    self.log_case(log, &fixture_set.family, case, &result, latency)?;
                }
                result
            };
            results.push(result);
        }

        run.end_suite(
            &fixture_set.family,
            fixture_set.cases.len(),
            suite_start.elapsed(),
        )?;
        Ok(results)
    }

    fn log_case(
        &self,
        log: &mut LogEmitter,
        family: &str,
        case: &FixtureCase,
        result: &VerificationResult,
        latency_ns: u64,
    ) -> std::io::Result<()> {
        let (level, outcome) = if result.passed {
            (LogLevel::Debug, Outcome::Pass)
        } else if result.actual.starts_with("error:") {
            (LogLevel::Error, Outcome::Error)
        } else {
            (LogLevel::Warn, Outcome::Fail)
        };
        let mut entry = log
            .entry(level, "case_result")
            .with_stream(StreamKind::Conformance)
            .with_gate(self.campaign.as_str())
            .with_api(family, case.function.as_str())
            .with_outcome(outcome)
            .with_latency_ns(latency_ns);
        if !result.passed {
            entry = entry.with_details(serde_json::json!({
                "case": case.name,
                "expected": result.expected,
                "actual": result.actual,
            }));
        }
        log.emit_entry(entry).map(drop)
    }
}

fn skipped(case: &FixtureCase) -> VerificationResult {
    VerificationResult {
        case_name: case.name.clone(),
        function: case.function.clone(),
        passed: false,
        skipped: true,
        expected: case.expected_output.clone(),
        actual: String::new(),
        diff: None,
    }
}

fn execute_case(case: &FixtureCase) -> VerificationResult {
    let actual = match execute_fixture_case(&case.function, &case.inputs) {
        Ok(output) => output,
        Err(err) => format!("error:{err}"),
    };
    let passed = actual == case.expected_output;
    let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
    VerificationResult {
        case_name: case.name.clone(),
        function: case.function.clone(),
        passed,
        skipped: false,
        expected: case.expected_output.clone(),
        actual,
        diff,
    }
}
