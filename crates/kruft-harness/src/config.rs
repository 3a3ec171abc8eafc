//! Harness configuration.
//!
//! Settings are read from the environment and can be overridden by CLI flags:
//! - `KRUFT_LOG_LEVEL`: minimum structured-log level (`trace`..`error`,
//!   case-insensitive; unrecognized values fall back to `info`).
//! - `KRUFT_FIXTURE_DIR`: directory of fixture JSON files.
//! - `KRUFT_RUN_ID`: run identifier used as the trace-id prefix.

use std::path::PathBuf;

use crate::structured_log::LogLevel;

pub const ENV_LOG_LEVEL: &str = "KRUFT_LOG_LEVEL";
pub const ENV_FIXTURE_DIR: &str = "KRUFT_FIXTURE_DIR";
pub const ENV_RUN_ID: &str = "KRUFT_RUN_ID";

/// Fixture directory used when nothing else is configured.
pub const DEFAULT_FIXTURE_DIR: &str = "tests/conformance/fixtures";

/// Resolved harness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub log_level: LogLevel,
    pub fixture_dir: PathBuf,
    pub run_id: String,
}

impl HarnessConfig {
    /// Resolve from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_level: non_empty(ENV_LOG_LEVEL)
                .map(|v| LogLevel::from_str_loose(&v))
                .unwrap_or_default(),
            fixture_dir: non_empty(ENV_FIXTURE_DIR)
                .map_or_else(|| PathBuf::from(DEFAULT_FIXTURE_DIR), PathBuf::from),
            run_id: non_empty(ENV_RUN_ID).unwrap_or_else(default_run_id),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("run-{secs}")
}
