use std::process::{Command, Output};

use tempfile::TempDir;

fn harmonogram(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harmonogram"))
        .args(args)
        .env_remove("HARMONOGRAM_ROOT")
        .env_remove("HARMONOGRAM_SEED")
        .env("RUST_LOG", "off")
        .output()
        .expect("run harmonogram binary")
}

#[test]
fn duplicate_months_exit_non_zero_with_message() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();
    let output = harmonogram(&["-m", "maj", "maj", "-d", "pn", "wt", "--root", root, "--quiet"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Months must be distinct"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("maj").exists());
}

#[test]
fn unclosed_range_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();
    let output = harmonogram(&["-m", "maj", "-d", "sr-pn", "-c", "--root", root, "--quiet"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sr-pn"), "stderr: {stderr}");
}

#[test]
fn create_then_read_reports_files_and_total() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let created = harmonogram(&["-m", "maj", "-d", "pn-wt", "-t", "w", "-c", "--root", root, "--quiet"]);
    assert!(created.status.success());
    let stdout = String::from_utf8_lossy(&created.stdout);
    assert_eq!(stdout.lines().filter(|line| line.starts_with("Wrote ")).count(), 2);
    assert!(dir.path().join("maj/poniedzialek/wieczorem/Dane.csv").is_file());
    assert!(dir.path().join("maj/wtorek/rano/Dane.csv").is_file());

    let read = harmonogram(&["-m", "maj", "-d", "pn-wt", "-t", "w", "--root", root, "--quiet"]);
    assert!(read.status.success());
    let stdout = String::from_utf8_lossy(&read.stdout);
    assert!(stdout.contains("Total duration: "), "stdout: {stdout}");
}
