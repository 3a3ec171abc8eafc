//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// Digest of a fixture file that took part in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureDigest {
    pub path: String,
    pub family: String,
    pub cases: usize,
    pub sha256: String,
}

/// A conformance report for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    pub run_id: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    pub fixtures: Vec<FixtureDigest>,
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Run: {}\n", self.run_id));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n", self.summary.failed));
        out.push_str(&format!("- Skipped: {}\n\n", self.summary.skipped));

        out.push_str("## Fixtures\n\n");
        out.push_str("| File | Family | Cases | SHA-256 |\n");
        out.push_str("|------|--------|-------|---------|\n");
        for f in &self.fixtures {
            out.push_str(&format!(
                "| {} | {} | {} | `{}` |\n",
                f.path, f.family, f.cases, f.sha256
            ));
        }

        out.push_str("\n## Cases\n\n");
        out.push_str("| Case | Function | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.skipped {
                "SKIP"
            } else if r.passed {
                "PASS"
            } else {
                "FAIL"
            };
            out.push_str(&format!("| {} | {} | {} |\n", r.case_name, r.function, status));
        }

        let failures: Vec<_> = self
            .summary
            .results
            .iter()
            .filter_map(|r| r.diff.as_ref().map(|d| (r, d)))
            .collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for (r, diff) in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n{diff}```\n", r.case_name));
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
