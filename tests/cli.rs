//! Exit status and output of the `sparsemat` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const SQUARE_A: &str = "rows=2\ncols=2\n(0,0,5)\n(1,1,3)\n";
const SQUARE_B: &str = "rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n";

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn sparsemat(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sparsemat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_add_succeeds_and_writes_result() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.txt", SQUARE_A);
    let b = write_input(&dir, "b.txt", SQUARE_B);
    let out = dir.path().join("result.txt");

    let output = sparsemat(&[Path::new("add"), a.as_path(), b.as_path(), out.as_path()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Performing operation: 2x2 add 2x2"));
    assert!(stdout.contains("Operation \"add\" completed successfully"));
    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "rows=2\ncols=2\n(0, 0, 6)\n(0, 1, 2)\n(1, 1, 3)\n"
    );
}

#[test]
fn test_dimension_mismatch_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.txt", "rows=2\ncols=3\n");
    let b = write_input(&dir, "b.txt", "rows=2\ncols=3\n");
    let out = dir.path().join("result.txt");

    let output = sparsemat(&[Path::new("multiply"), a.as_path(), b.as_path(), out.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Invalid dimensions for multiplication"));
    assert!(!out.exists());
}

#[test]
fn test_unreadable_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let b = write_input(&dir, "b.txt", SQUARE_B);
    let out = dir.path().join("result.txt");

    let output = sparsemat(&[Path::new("add"), missing.as_path(), b.as_path(), out.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read matrix file"));
    assert!(stderr(&output).contains("missing.txt"));
}

#[test]
fn test_unknown_operation_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.txt", SQUARE_A);
    let b = write_input(&dir, "b.txt", SQUARE_B);
    let out = dir.path().join("result.txt");

    let output = sparsemat(&[Path::new("divide"), a.as_path(), b.as_path(), out.as_path()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid operation \"divide\""));
}

#[test]
fn test_missing_arguments_is_a_usage_error() {
    let output = sparsemat(&[Path::new("add")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!output.status.success());
}
