//! Integration tests for the legible binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn legible() -> Command {
    let mut cmd = Command::cargo_bin("legible").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    legible()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_analyze_text_format() {
    legible()
        .args(["analyze", "-q", "-i"])
        .arg(fixture("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("english-sample.txt"))
        .stdout(predicate::str::contains("  Sentences:              2\n"))
        .stdout(predicate::str::contains("  Words:                  10\n"))
        .stdout(predicate::str::contains("  Unique words:           8\n"))
        .stdout(predicate::str::contains("  Syllables:              11\n"))
        .stdout(predicate::str::contains("  Flesch reading ease:    108.70\n"))
        .stdout(predicate::str::contains("  Flesch-Kincaid grade:   -0.66\n"))
        .stdout(predicate::str::contains(
            "    The cat sat on the mat. The dog ran away!\n",
        ));
}

#[test]
fn test_analyze_json_format() {
    let value = json_stdout(
        legible()
            .args(["analyze", "-q", "-f", "json", "-i"])
            .arg(fixture("english-sample.txt")),
    );

    let report = &value[0]["report"];
    assert_eq!(report["statistics"]["sentence_count"], 2);
    assert_eq!(report["statistics"]["word_count"], 10);
    assert_eq!(report["statistics"]["unique_word_count"], 8);
    assert_eq!(report["statistics"]["average_word_length"], 3.0);
    assert_eq!(report["readability"]["flesch_reading_ease"], 108.7);
    assert_eq!(report["readability"]["flesch_kincaid_grade"], -0.66);
    assert_eq!(
        report["grammar_correction"],
        "The cat sat on the mat. The dog ran away!"
    );
}

#[test]
fn test_analyze_markdown_format() {
    legible()
        .args(["analyze", "-q", "-f", "markdown", "-i"])
        .arg(fixture("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("### Statistics"))
        .stdout(predicate::str::contains("| Sentences | 2 |"))
        .stdout(predicate::str::contains("| Flesch-Kincaid Grade | -0.66 |"))
        .stdout(predicate::str::contains("*Inputs analyzed: 1, failed: 0*"));
}

#[test]
fn test_analyze_stdin() {
    let value = json_stdout(
        legible()
            .args(["analyze", "-q", "-f", "json", "-i", "-"])
            .write_stdin("Hello world. This is a test."),
    );
    assert_eq!(value[0]["source"], "<stdin>");
    assert_eq!(value[0]["report"]["statistics"]["sentence_count"], 2);
}

#[test]
fn test_analyze_without_inputs_reads_stdin() {
    let value = json_stdout(
        legible()
            .args(["analyze", "-q", "-f", "json"])
            .write_stdin("One sentence here."),
    );
    assert_eq!(value[0]["source"], "<stdin>");
}

#[test]
fn test_analyze_inline_text_with_correction() {
    let value = json_stdout(legible().args(["analyze", "-q", "-f", "json", "-t", "Teh cat sat."]));
    assert_eq!(value[0]["source"], "<text>");
    assert_eq!(value[0]["report"]["grammar_correction"], "The cat sat.");
}

#[test]
fn test_analyze_no_correction() {
    let value = json_stdout(legible().args([
        "analyze",
        "-q",
        "-f",
        "json",
        "--no-correction",
        "-t",
        "Teh cat sat.",
    ]));
    assert_eq!(value[0]["report"]["grammar_correction"], "Teh cat sat.");
}

#[test]
fn test_analyze_glob_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), "Second file here.").unwrap();
    fs::write(dir.path().join("a.txt"), "First file. Two sentences.").unwrap();

    let value = json_stdout(
        legible()
            .args(["analyze", "-q", "-f", "json", "-i"])
            .arg(dir.path().join("*.txt")),
    );

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["source"].as_str().unwrap().ends_with("a.txt"));
    assert_eq!(entries[0]["report"]["statistics"]["sentence_count"], 2);
    assert!(entries[1]["source"].as_str().unwrap().ends_with("b.txt"));
}

#[test]
fn test_analyze_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.md");

    legible()
        .args(["analyze", "-q", "-f", "markdown", "-o"])
        .arg(&out)
        .arg("-i")
        .arg(fixture("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(out).unwrap();
    assert!(content.contains("| Words | 10 |"));
}

#[test]
fn test_analyze_no_words_fails_after_reporting() {
    legible()
        .args(["analyze", "-q", "-i"])
        .arg(fixture("punctuation-only.txt"))
        .arg("-i")
        .arg(fixture("english-sample.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("No words found"))
        .stdout(predicate::str::contains("  Sentences:              2\n"))
        .stderr(predicate::str::contains(
            "1 of 2 input(s) could not be analyzed",
        ));
}

#[test]
fn test_analyze_missing_file() {
    legible()
        .args(["analyze", "-q", "-i", "/nonexistent/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_analyze_with_config_file() {
    let output = legible()
        .args(["analyze", "-q", "-t", "Teh cat sat.", "-c"])
        .arg(fixture("config.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "compact JSON expected");
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["report"]["grammar_correction"], "Teh cat sat.");
}

#[test]
fn test_analyze_missing_config_file() {
    legible()
        .args(["analyze", "-q", "-t", "Hi.", "-c", "/nonexistent/legible.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_analyze_with_rules_file() {
    // "Dr" is an abbreviation in the fixture rules
    let value = json_stdout(
        legible()
            .args(["analyze", "-q", "-f", "json", "--no-correction", "-t"])
            .arg("Dr. Smith arrived. He sat.")
            .arg("-r")
            .arg(fixture("valid-rules.toml")),
    );
    assert_eq!(value[0]["report"]["statistics"]["sentence_count"], 2);
}

#[test]
fn test_validate_valid_rules() {
    legible()
        .args(["validate", "-r"])
        .arg(fixture("valid-rules.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Rules are valid!"))
        .stdout(predicate::str::contains("Language code: en-min"))
        .stdout(predicate::str::contains("Abbreviations: 3"))
        .stdout(predicate::str::contains("Sentence starters: 3"));
}

#[test]
fn test_validate_invalid_rules() {
    legible()
        .args(["validate", "-r"])
        .arg(fixture("invalid-rules.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Rules are invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}
