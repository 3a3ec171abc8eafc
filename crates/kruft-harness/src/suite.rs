//! Test-run context with gtest-style progress output.
//!
//! A [`TestRun`] owns everything a run accumulates: the writer progress goes
//! to, and the names of passed, failed and skipped cases. Callers create one
//! per run and pass it down explicitly; nothing is kept in process globals,
//! so independent runs (including concurrent ones in tests) never interfere.

use std::io::Write;
use std::time::Duration;

const RULE: &str = "[----------]";

/// Totals reported when a run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTotals {
    pub suites: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunTotals {
    /// Returns true when no case failed.
    #[must_use]
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Progress and results of one harness run.
pub struct TestRun<W: Write> {
    out: W,
    suites: usize,
    passed: Vec<String>,
    failed: Vec<String>,
    skipped: Vec<String>,
}

impl<W: Write> TestRun<W> {
    /// Starts a run that reports to `out`.
    pub fn new(mut out: W) -> std::io::Result<Self> {
        writeln!(out, "{RULE} Global test environment set-up.")?;
        Ok(Self {
            out,
            suites: 0,
            passed: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
        })
    }

    pub fn begin_suite(&mut self, name: &str, count: usize) -> std::io::Result<()> {
        self.suites += 1;
        writeln!(self.out, "{RULE} {count} tests from {name}")
    }

    pub fn end_suite(&mut self, name: &str, count: usize, elapsed: Duration) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{RULE} {count} tests from {name} ({} ms total)\n",
            elapsed.as_millis()
        )
    }

    pub fn start(&mut self, case: &str) -> std::io::Result<()> {
        writeln!(self.out, "[ RUN      ] {case}")
    }

    pub fn pass(&mut self, case: &str, elapsed: Duration) -> std::io::Result<()> {
        self.passed.push(case.to_string());
        writeln!(self.out, "[       OK ] {case} ({} ms)", elapsed.as_millis())
    }

    /// Records a failure; `detail` is printed before the status line.
    pub fn fail(&mut self, case: &str, detail: &str, elapsed: Duration) -> std::io::Result<()> {
        self.failed.push(case.to_string());
        writeln!(self.out, "{case}: error: {}\n", detail.trim_end())?;
        writeln!(self.out, "[  FAILED  ] {case} ({} ms)", elapsed.as_millis())
    }

    pub fn skip(&mut self, case: &str) -> std::io::Result<()> {
        self.skipped.push(case.to_string());
        writeln!(self.out, "[  SKIPPED ] {case} (0 ms)")
    }

    #[must_use]
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    #[must_use]
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Prints the closing summary and returns the totals with the writer.
    pub fn finish(mut self, elapsed: Duration) -> std::io::Result<(RunTotals, W)> {
        let totals = RunTotals {
            suites: self.suites,
            passed: self.passed.len(),
            failed: self.failed.len(),
            skipped: self.skipped.len(),
        };

        writeln!(self.out, "{RULE} Global test environment tear-down.")?;
        writeln!(
            self.out,
            "[==========] {} tests from {} test suites ran. ({} ms total)",
            totals.passed + totals.failed,
            totals.suites,
            elapsed.as_millis()
        )?;
        writeln!(self.out, "[  PASSED  ] {} tests.", totals.passed)?;
        if !self.skipped.is_empty() {
            writeln!(self.out, "[  SKIPPED ] {} tests, listed below:", totals.skipped)?;
            for name in &self.skipped {
                writeln!(self.out, "[  SKIPPED ] {name}")?;
            }
        }
        if !self.failed.is_empty() {
            writeln!(self.out, "[  FAILED  ] {} tests, listed below:", totals.failed)?;
            for name in &self.failed {
                writeln!(self.out, "[  FAILED  ] {name}")?;
            }
        }
        self.out.flush()?;
        Ok((totals, self.out))
    }
}
