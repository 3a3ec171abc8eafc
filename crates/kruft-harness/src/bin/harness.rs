//! CLI entrypoint for the kruft conformance harness.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use kruft_harness::config::HarnessConfig;
use kruft_harness::execute::FUNCTIONS;
use kruft_harness::fixtures::{FixtureSet, fixture_paths};
use kruft_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogLevel, Outcome, StreamKind, now_utc, sha256_hex,
    validate_log_file,
};
use kruft_harness::{ConformanceReport, FixtureDigest, TestRun, TestRunner, VerificationSummary};

/// Conformance tooling for kruft.
#[derive(Debug, Parser)]
#[command(name = "kruft-harness")]
#[command(about = "Conformance testing harness for kruft")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the implementation against fixture files.
    Verify {
        /// Directory containing fixture JSON files (defaults to `KRUFT_FIXTURE_DIR`).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown); a JSON twin is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Run identifier (defaults to `KRUFT_RUN_ID`).
        #[arg(long)]
        run_id: Option<String>,
        /// Minimum log level (defaults to `KRUFT_LOG_LEVEL`).
        #[arg(long)]
        log_level: Option<String>,
    },
    /// Validate a structured JSONL log against the schema.
    ValidateLog {
        /// Path to the JSONL file.
        #[arg(long)]
        path: PathBuf,
    },
    /// List the functions fixtures can exercise.
    Functions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            run_id,
            log_level,
        } => {
            let mut config = HarnessConfig::from_env();
            if let Some(dir) = fixture {
                config.fixture_dir = dir;
            }
            if let Some(id) = run_id {
                config.run_id = id;
            }
            if let Some(level) = log_level {
                config.log_level = LogLevel::from_str_loose(&level);
            }
            verify(&config, report, log)?;
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {} lines in {}: {} errors",
                lines,
                path.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err(format!("{} log validation errors", errors.len()).into());
            }
        }
        Command::Functions => {
            for function in FUNCTIONS {
                println!("{function}");
            }
        }
    }

    Ok(())
}

fn verify(
    config: &HarnessConfig,
    report: Option<PathBuf>,
    log_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "Verifying against fixtures in {}",
        config.fixture_dir.display()
    );
    let started = Instant::now();

    let mut fixtures = Vec::new();
    for path in fixture_paths(&config.fixture_dir)? {
        let body = std::fs::read(&path)?;
        let set = FixtureSet::from_file(&path)?;
        fixtures.push((path, sha256_hex(&body), set));
    }

    let mut log = match &log_path {
        Some(path) => Some(
            LogEmitter::to_file(path, &config.run_id, "verify")?.with_min_level(config.log_level),
        ),
        None => None,
    };
    if let Some(log) = log.as_mut() {
        let entry = log
            .entry(LogLevel::Info, "run_start")
            .with_stream(StreamKind::Conformance)
            .with_details(serde_json::json!({ "fixture_files": fixtures.len() }));
        log.emit_entry(entry)?;
    }

    let runner = TestRunner::new("fixture_verify");
    let mut run = TestRun::new(std::io::stderr())?;
    let mut results = Vec::new();
    for (_, _, set) in &fixtures {
        results.extend(runner.run(set, &mut run, log.as_mut())?);
    }
    let (totals, _) = run.finish(started.elapsed())?;

    let summary = VerificationSummary::from_results(results);
    let report_doc = ConformanceReport {
        title: String::from("kruft Conformance Report"),
        run_id: config.run_id.clone(),
        timestamp: now_utc(),
        fixtures: fixtures
            .iter()
            .map(|(path, sha256, set)| FixtureDigest {
                path: path.display().to_string(),
                family: set.family.clone(),
                cases: set.cases.len(),
                sha256: sha256.clone(),
            })
            .collect(),
        summary,
    };

    let mut artifacts = ArtifactIndex::new(&config.run_id);
    for f in &report_doc.fixtures {
        artifacts.add(f.path.as_str(), "fixture", f.sha256.as_str());
    }
    if let Some(report_path) = &report {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(report_path, report_doc.to_markdown())?;
        let json_path = report_path.with_extension("json");
        std::fs::write(&json_path, report_doc.to_json())?;
        artifacts.add_file(report_path, "report")?;
        artifacts.add_file(&json_path, "report")?;
        let index_path = report_path.with_extension("artifacts.json");
        std::fs::write(&index_path, artifacts.to_json()?)?;
    }

    if let Some(mut log) = log {
        let outcome = if totals.success() {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let entry = log
            .entry(LogLevel::Info, "run_end")
            .with_stream(StreamKind::Conformance)
            .with_outcome(outcome)
            .with_duration_ms(duration_ms)
            .with_artifacts(artifacts.artifacts.iter().map(|a| a.path.clone()).collect())
            .with_details(serde_json::json!({
                "passed": totals.passed,
                "failed": totals.failed,
                "skipped": totals.skipped,
            }));
        log.emit_entry(entry)?;
        log.flush()?;
    }

    eprintln!(
        "Verification complete: total={}, passed={}, failed={}, skipped={}",
        report_doc.summary.total,
        report_doc.summary.passed,
        report_doc.summary.failed,
        report_doc.summary.skipped
    );

    if !report_doc.summary.all_passed() {
        return Err("Conformance verification failed".into());
    }
    Ok(())
}
