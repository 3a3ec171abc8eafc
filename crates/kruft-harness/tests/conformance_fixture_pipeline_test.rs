//! Integration tests for the conformance fixture pipeline: the checked-in
//! fixtures load, cover every executor function, and pass end to end both
//! in-process and through the `harness` binary.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use kruft_harness::execute::FUNCTIONS;
use kruft_harness::fixtures::{FixtureSet, fixture_paths};
use kruft_harness::structured_log::validate_log_file;
use kruft_harness::{TestRun, TestRunner, VerificationSummary};

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_dir() -> PathBuf {
    repo_root().join("tests/conformance/fixtures")
}

fn load_all() -> Vec<FixtureSet> {
    fixture_paths(&fixture_dir())
        .expect("fixture directory is populated")
        .iter()
        .map(|path| {
            FixtureSet::from_file(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
        })
        .collect()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kruft-pipeline-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn fixtures_have_unique_names_and_known_functions() {
    let mut names = BTreeSet::new();
    for set in load_all() {
        assert_eq!(set.version, "v1", "{}", set.family);
        assert!(!set.cases.is_empty(), "{} has no cases", set.family);
        for case in &set.cases {
            assert!(
                names.insert(case.name.clone()),
                "duplicate case name {}",
                case.name
            );
            assert!(
                FUNCTIONS.contains(&case.function.as_str()),
                "{} uses unknown function {}",
                case.name,
                case.function
            );
        }
    }
}

#[test]
fn every_function_has_fixture_coverage() {
    let covered: BTreeSet<String> = load_all()
        .into_iter()
        .flat_map(|set| set.cases.into_iter().map(|case| case.function))
        .collect();
    for function in FUNCTIONS {
        assert!(covered.contains(*function), "no fixture exercises {function}");
    }
}

#[test]
fn checked_in_fixtures_pass() {
    let runner = TestRunner::new("pipeline");
    let mut run = TestRun::new(Vec::new()).unwrap();
    let mut results = Vec::new();
    for set in load_all() {
        results.extend(runner.run(&set, &mut run, None).unwrap());
    }

    let summary = VerificationSummary::from_results(results);
    let failures: Vec<_> = summary
        .results
        .iter()
        .filter(|r| !r.passed && !r.skipped)
        .map(|r| format!("{}: {}", r.case_name, r.diff.as_deref().unwrap_or("")))
        .collect();
    assert!(failures.is_empty(), "failing fixtures:\n{}", failures.join("\n"));
    assert!(summary.total > 0);

    let (totals, out) = run.finish(std::time::Duration::ZERO).unwrap();
    assert!(totals.success());
    assert_eq!(totals.suites, 5);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[       OK ] strscpy_truncates_long_source"));
}

#[test]
fn no_case_clobbers_its_guard_byte() {
    for set in load_all() {
        for case in &set.cases {
            assert!(
                !case.expected_output.contains("guard=clobbered"),
                "{} expects an out-of-bounds write",
                case.name
            );
        }
    }
}

#[test]
fn harness_binary_lists_functions() {
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .arg("functions")
        .output()
        .expect("failed to run harness");
    assert!(output.status.success());
    let listed: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(listed, FUNCTIONS);
}

#[test]
fn harness_binary_verifies_and_writes_valid_log() {
    let dir = scratch_dir("verify");
    let report = dir.join("report.md");
    let log = dir.join("run.jsonl");

    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["verify", "--fixture"])
        .arg(fixture_dir())
        .arg("--report")
        .arg(&report)
        .arg("--log")
        .arg(&log)
        .args(["--run-id", "pipeline-test", "--log-level", "debug"])
        .env_remove("KRUFT_FIXTURE_DIR")
        .output()
        .expect("failed to run harness");
    assert!(
        output.status.success(),
        "harness verify failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let md = std::fs::read_to_string(&report).unwrap();
    assert!(md.contains("- Failed: 0"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report.with_extension("json")).unwrap())
            .unwrap();
    assert_eq!(json["run_id"], "pipeline-test");
    assert_eq!(json["fixtures"].as_array().unwrap().len(), 5);
    assert!(report.with_extension("artifacts.json").exists());

    let (lines, errors) = validate_log_file(&log).unwrap();
    assert!(errors.is_empty(), "log errors: {errors:?}");
    assert!(lines > 2);
    let first = std::fs::read_to_string(&log).unwrap();
    assert!(first.starts_with("{\"timestamp\""));
    assert!(first.contains("\"trace_id\":\"pipeline-test::verify::001\""));

    let validate = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["validate-log", "--path"])
        .arg(&log)
        .output()
        .expect("failed to run harness");
    assert!(validate.status.success());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn harness_binary_fails_on_empty_fixture_dir() {
    let dir = scratch_dir("empty");
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["verify", "--fixture"])
        .arg(&dir)
        .output()
        .expect("failed to run harness");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NoFixtures"));
    std::fs::remove_dir_all(&dir).ok();
}
