//! CLI smoke tests for the neuronorm binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn neuronorm() -> Command {
    Command::cargo_bin("neuronorm").expect("binary should build")
}

#[test]
fn list_shows_all_batteries() {
    neuronorm()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("RAVLT"))
        .stdout(predicate::str::contains("TDE"));
}

#[test]
fn list_filters_by_age() {
    neuronorm()
        .args(["list", "--age", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BPA2"))
        .stdout(predicate::str::contains("MPC"));
}

#[test]
fn info_unknown_code_fails() {
    neuronorm()
        .args(["info", "WXYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown test code"));
}

#[test]
fn score_emits_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("administration.json");
    std::fs::write(
        &input,
        r#"{
            "test": "FAS",
            "idade": 34.0,
            "escolaridade": "superior",
            "letra_f": 15,
            "letra_a": 14,
            "letra_s": 14
        }"#,
    )
    .unwrap();

    neuronorm()
        .args(["score", input.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_fas\": 43"))
        .stdout(predicate::str::contains("\"percentil\": 48"));
}

#[test]
fn score_writes_envelope_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("administration.json");
    let out = dir.path().join("report.json");
    std::fs::write(
        &input,
        r#"{"test": "MPC", "idade": 7.0, "acertos": 23}"#,
    )
    .unwrap();

    neuronorm()
        .args([
            "score",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"escore_padrao\": 104"));
}
