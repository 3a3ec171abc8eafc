//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Function exercised by the case.
    pub function: String,
    /// Whether the case passed. Skipped cases are never passed.
    pub passed: bool,
    /// Whether the case was skipped without executing.
    #[serde(default)]
    pub skipped: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output, or `error:<message>` when execution failed.
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let skipped = results.iter().filter(|r| r.skipped).count();
        Self {
            total,
            passed,
            failed: total - passed - skipped,
            skipped,
            results,
        }
    }

    /// Returns true if no executed case failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
