//! Integration tests for top-level CLI behavior.

use std::path::PathBuf;
use std::process::{Command, Output};

const DEFAULT_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn genid() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genid"));
    for key in ["GENID_LENGTH", "GENID_COUNT", "GENID_ADD", "GENID_REMOVE", "GENID_RECORD"] {
        cmd.env_remove(key);
    }
    cmd
}

fn run_genid(args: &[&str]) -> Output {
    genid().args(args).output().expect("failed to run genid binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generate_prints_ten_alphanumerics_by_default() {
    let output = run_genid(&["generate"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 10);
    assert!(lines[0].chars().all(|c| DEFAULT_CHARS.contains(c)));
}

#[test]
fn generate_clamps_short_lengths() {
    let output = run_genid(&["generate", "-n", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0].len(), 5);
}

#[test]
fn generate_count_and_json() {
    let output = run_genid(&["generate", "--length", "12", "--count", "3", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["length"], 12);
    let ids = report["ids"].as_array().unwrap();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| id.as_str().unwrap().len() == 12));
}

#[test]
fn generate_with_only_custom_characters() {
    let output = run_genid(&["generate", "-n", "8", "--add", "#$", "--remove", DEFAULT_CHARS]);
    assert!(output.status.success());
    let id = &stdout_lines(&output)[0];
    assert_eq!(id.chars().count(), 8);
    assert!(id.chars().all(|c| c == '#' || c == '$'));
}

#[test]
fn removing_everything_falls_back_to_default() {
    let output = run_genid(&["alphabet", "--remove", DEFAULT_CHARS]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![DEFAULT_CHARS.to_string()]);
}

#[test]
fn alphabet_json_reports_size() {
    let output = run_genid(&["alphabet", "--add", "@", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["size"], 63);
    assert!(report["alphabet"].as_str().unwrap().ends_with('@'));
}

#[test]
fn environment_supplies_defaults() {
    let output = genid()
        .args(["generate"])
        .env("GENID_LENGTH", "7")
        .env("GENID_COUNT", "2")
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.len() == 7));
}

#[test]
fn flags_override_environment() {
    let output = genid().args(["generate", "-n", "6"]).env("GENID_LENGTH", "20").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output)[0].len(), 6);
}

#[test]
fn invalid_environment_value_fails() {
    let output = genid().args(["generate"]).env("GENID_LENGTH", "long").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("GENID_LENGTH"));
}

#[test]
fn config_file_is_applied() {
    let dir = temp_dir("genid_cli_config_test");
    let path = dir.join("genid.yaml");
    std::fs::write(&path, "length: 9\ncount: 2\nadd: \"~\"\n").unwrap();

    let output = run_genid(&["--config", path.to_str().unwrap(), "generate"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.len() == 9));

    let output = run_genid(&["alphabet", "--config", path.to_str().unwrap()]);
    assert!(stdout_lines(&output)[0].ends_with('~'));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_config_file_fails() {
    let dir = temp_dir("genid_cli_bad_config_test");
    let path = dir.join("genid.yaml");
    std::fs::write(&path, "colour: blue\n").unwrap();

    let output = run_genid(&["--config", path.to_str().unwrap(), "generate"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to parse config file"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn help_prints_usage() {
    let output = run_genid(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("alphabet"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_genid(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("unrecognized subcommand"));
}
