//! Integration tests for `devdoctor check`.

use std::fs;
use std::time::Instant;

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::devdoctor_cmd;

#[test]
fn test_check_help_shows_flags() {
    let dir = TempDir::new().unwrap();
    devdoctor_cmd(&dir)
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--probes"))
        .stdout(predicate::str::contains("--concurrency"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_failing_probes_are_recorded_not_raised() {
    let dir = TempDir::new().unwrap();
    // Nothing listens on the discard port, and the command does not exist.
    fs::write(
        dir.path().join("probes.yaml"),
        r#"
probes:
  - name: redis
    category: services
    type: tcp
    host: 127.0.0.1
    port: 9
  - name: bogus
    category: tools
    type: command
    program: devdoctor-nonexistent-cmd
"#,
    )
    .unwrap();

    let output = devdoctor_cmd(&dir)
        .args(["check", "--probes", "probes.yaml", "--json"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["summary"]["total"], 2);
    assert_eq!(report["summary"]["healthy"], 0);

    let checks = report["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    for check in checks {
        assert!(!check["detail"].as_str().unwrap().is_empty());
    }
    assert_eq!(checks[0]["name"], "redis");
    assert_eq!(checks[1]["name"], "bogus");
}

#[test]
fn test_probe_timeout_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("probes.yaml"),
        r#"
probes:
  - name: hang
    type: command
    program: sleep
    args: ["30"]
    timeout_secs: 1
"#,
    )
    .unwrap();

    let start = Instant::now();
    let output = devdoctor_cmd(&dir)
        .args(["check", "--probes", "probes.yaml", "--json"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stdout
        .clone();

    assert!(
        start.elapsed().as_secs() < 5,
        "probe hung past its timeout: {:?}",
        start.elapsed()
    );

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["checks"][0]["status"], "timeout");
}

#[test]
fn test_report_lists_probes_in_submission_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("probes.yaml"),
        r#"
probes:
  - name: gamma
    type: command
    program: "true"
  - name: alpha
    type: command
    program: "true"
  - name: beta
    type: command
    program: "true"
"#,
    )
    .unwrap();

    let output = devdoctor_cmd(&dir)
        .args(["check", "--probes", "probes.yaml", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = report["checks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["gamma", "alpha", "beta"]);
    assert_eq!(report["summary"]["health_percent"], 100.0);
}

#[test]
fn test_json_report_artifact_written() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("probes.yaml"),
        r#"
probes:
  - name: echo
    type: command
    program: "true"
"#,
    )
    .unwrap();

    devdoctor_cmd(&dir)
        .args([
            "check",
            "--probes",
            "probes.yaml",
            "--report",
            "out/health.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let written = fs::read_to_string(dir.path().join("out/health.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(report["summary"]["total"], 1);
    assert!(report["run_id"].is_string());
}

#[test]
fn test_missing_probe_file_is_setup_failure() {
    let dir = TempDir::new().unwrap();
    devdoctor_cmd(&dir)
        .args(["check", "--probes", "no-such-file.yaml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_missing_dev_root_config_is_setup_failure() {
    let dir = TempDir::new().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("devdoctor").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DEVDOCTOR_DEV_ROOT")
        .arg("check")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}
