// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! End-to-end tests for the veritime-collect-times binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_veritime-collect-times"))
        .args(args)
        .current_dir(dir)
        .env_remove("VERITIME_SNAPSHOT_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run veritime-collect-times")
}

fn write_fixture(root: &Path) {
    let proofs = root.join("proofs");
    fs::create_dir_all(proofs.join("sub")).unwrap();
    fs::write(
        proofs.join("a.vfst"),
        "Verified x (100 milliseconds)\nVerified y (50 milliseconds)\n",
    )
    .unwrap();
    fs::write(proofs.join("sub/b.vfsti"), "nothing verified here\n").unwrap();
    fs::write(proofs.join("notes.txt"), "Verified z (999 milliseconds)\n").unwrap();
}

#[test]
fn test_collect_prints_table_and_stores_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let output = run_in(dir.path(), &["--dir", "proofs", "--label", "base"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("| a.vfst "), "missing a.vfst row:\n{stdout}");
    assert!(stdout.contains("| b.vfsti "), "missing b.vfsti row:\n{stdout}");
    assert!(stdout.contains("no data"));
    assert!(!stdout.contains("notes.txt"));
    assert!(
        stdout.lines().any(|l| l.starts_with("| Total") && l.contains(" 150 ")),
        "total should be 150:\n{stdout}"
    );

    let json = fs::read_to_string(dir.path().join("times.base.json")).unwrap();
    assert!(json.contains("\"proofs/a.vfst\": 150"));
    assert!(json.contains("\"proofs/sub/b.vfsti\": null"));
}

#[test]
fn test_second_collect_with_same_label_warns_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    assert!(run_in(dir.path(), &["-d", "proofs", "-l", "base"]).status.success());
    let snapshot = dir.path().join("times.base.json");
    let before = fs::read_to_string(&snapshot).unwrap();

    fs::write(dir.path().join("proofs/a.vfst"), "Verified x (1 milliseconds)\n").unwrap();
    let output = run_in(dir.path(), &["-d", "proofs", "-l", "base"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found existing snapshot"), "expected warning, got:\n{stderr}");
    assert_eq!(fs::read_to_string(&snapshot).unwrap(), before);
}

#[test]
fn test_snapshot_dir_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::create_dir(dir.path().join("snaps")).unwrap();

    let output = run_in(dir.path(), &["-d", "proofs", "-l", "x", "--snapshot-dir", "snaps"]);
    assert!(output.status.success());
    assert!(dir.path().join("snaps/times.x.json").is_file());
    assert!(!dir.path().join("times.x.json").exists());
}

#[test]
fn test_compare_two_collected_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    assert!(run_in(dir.path(), &["-d", "proofs", "-l", "before"]).status.success());

    fs::write(
        dir.path().join("proofs/a.vfst"),
        "Verified x (150 milliseconds)\nVerified y (50 milliseconds)\n",
    )
    .unwrap();
    assert!(run_in(dir.path(), &["-d", "proofs", "-l", "after"]).status.success());

    let output = run_in(
        dir.path(),
        &["--t1", "times.after.json", "--t2", "times.before.json"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let a_row = stdout
        .lines()
        .find(|l| l.starts_with("| a.vfst "))
        .unwrap_or_else(|| panic!("missing a.vfst row:\n{stdout}"));
    let cells: Vec<&str> = a_row.split('|').map(str::trim).collect();
    assert_eq!(cells[1..6], ["a.vfst", "200", "50", "25.0", "proofs/a.vfst"]);

    let b_row = stdout.lines().find(|l| l.starts_with("| b.vfsti ")).unwrap();
    assert_eq!(b_row.matches("n/a").count(), 2);
    assert!(!stdout.contains("Total"));
}

#[test]
fn test_insufficient_arguments_prints_hint() {
    let dir = tempfile::tempdir().unwrap();
    for args in [&[][..], &["--dir", "proofs"][..], &["--t1", "x.json"][..]] {
        let output = run_in(dir.path(), args);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Invalid or insufficient arguments supplied"));
    }
}

#[test]
fn test_missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--t1", "times.a.json", "--t2", "times.b.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("times.a.json"), "error should name the file:\n{stderr}");
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-d", "nope", "-l", "x"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("times.x.json").exists());
}
