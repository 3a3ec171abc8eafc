//! Conformance testing harness for kruft.
//!
//! This crate provides:
//! - Fixtures: JSON case files describing a call and its rendered result
//! - Execution: drives `kruft-core` with guarded destination buffers
//! - Runner: executes fixture sets inside an explicit [`TestRun`] context
//! - Structured logging: JSONL run logs with schema validation
//! - Reports: markdown and JSON conformance reports with fixture digests

#![forbid(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod suite;
pub mod verify;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::{ConformanceReport, FixtureDigest};
pub use runner::TestRunner;
pub use suite::{RunTotals, TestRun};
pub use verify::{VerificationResult, VerificationSummary};
