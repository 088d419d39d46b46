//! Exit-code tests for the `text-enhancer` binary.
//!
//! None of these reach the network: each run fails before a request is made.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_text-enhancer"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run text-enhancer")
}

fn write_input(dir: &TempDir, words: usize) -> String {
    let path = dir.path().join("input.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    let text = vec!["lorem"; words].join(" ");
    writeln!(file, "{text}").unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_input_file_exits_with_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&dir, &["--input", "does-not-exist.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] NotFoundError: Input file not found"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_error_prefix_is_plain_when_stderr_is_piped() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_text-enhancer"))
        .args(["--input", "does-not-exist.txt"])
        .current_dir(dir.path())
        .env("CLICOLOR_FORCE", "1")
        .output()
        .expect("failed to run text-enhancer");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\n[ERROR] NotFoundError: "));
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn test_empty_input_path_uses_default_passage() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&dir, &["--input", ""]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] ConfigurationError: "));
    assert!(!stderr.contains("NotFoundError"));
}

#[test]
fn test_short_input_exits_with_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 12);
    let output = run_cli(&dir, &["--input", &input]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] ValidationError: Input text is too short (12 words)"));
}

#[test]
fn test_missing_api_key_exits_with_configuration_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 45);
    let output = run_cli(&dir, &["--input", &input, "--tone", "sarcastic"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERROR] ConfigurationError: Missing API key"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_default_passage_needs_api_key() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ConfigurationError"));
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&dir, &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--tone"));
    assert!(stdout.contains("--model"));
}
