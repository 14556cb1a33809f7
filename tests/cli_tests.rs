use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ignsync() -> Command {
    Command::cargo_bin("ignsync").unwrap()
}

fn setup_trees() -> (TempDir, TempDir) {
    let python = TempDir::new().unwrap();
    let ignition = TempDir::new().unwrap();
    fs::create_dir_all(ignition.path().join("ignition/script-python")).unwrap();
    (python, ignition)
}

fn write_file(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn roots_args(cmd: &mut Command, python: &TempDir, ignition: &TempDir) {
    cmd.arg("--python-root")
        .arg(python.path())
        .arg("--ignition-root")
        .arg(ignition.path());
}

#[test]
fn test_help_output() {
    ignsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python to Ignition Module Sync Tool"))
        .stdout(predicate::str::contains("list-python"))
        .stdout(predicate::str::contains("list-ignition"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    ignsync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_list_python() {
    let (python, ignition) = setup_trees();
    write_file(python.path(), "a.py", "x = 1");
    write_file(python.path(), "pkg/b.py", "y = 2");

    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("list-python")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("pkg/b.py"));
}

#[test]
fn test_compare_reports_partition() {
    let (python, ignition) = setup_trees();
    write_file(python.path(), "a.py", "x = 1");
    write_file(
        ignition.path(),
        "ignition/script-python/old/resource.json",
        "",
    );
    write_file(
        ignition.path(),
        "ignition/script-python/old/code.py",
        "legacy",
    );

    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing in Ignition: 1"))
        .stdout(predicate::str::contains("Missing in Python:   1"))
        .stdout(predicate::str::contains("old.py"));
}

#[test]
fn test_sync_materializes_modules_and_is_idempotent() {
    let (python, ignition) = setup_trees();
    write_file(python.path(), "a.py", "x = 1");
    write_file(python.path(), "b/c.py", "z = 3");

    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Synchronized: 2"));

    let scripts = ignition.path().join("ignition/script-python");
    assert_eq!(
        fs::read_to_string(scripts.join("a/code.py")).unwrap(),
        "x = 1"
    );
    assert!(scripts.join("a/resource.json").exists());
    assert!(scripts.join("b/c/resource.json").exists());

    // Second run finds nothing to do
    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to synchronize"));
}

#[test]
fn test_sync_overwrites_drifted_content() {
    let (python, ignition) = setup_trees();
    write_file(python.path(), "a.py", "x=1");
    write_file(ignition.path(), "ignition/script-python/a/code.py", "x=2");
    write_file(
        ignition.path(),
        "ignition/script-python/a/resource.json",
        "",
    );

    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Differing content:   1"))
        .stdout(predicate::str::contains("Synchronized: 1"));

    assert_eq!(
        fs::read_to_string(ignition.path().join("ignition/script-python/a/code.py")).unwrap(),
        "x=1"
    );
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let (python, ignition) = setup_trees();
    write_file(python.path(), "a.py", "x = 1");

    let mut cmd = ignsync();
    roots_args(&mut cmd, &python, &ignition);
    cmd.arg("--dry-run")
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"));

    assert!(!ignition
        .path()
        .join("ignition/script-python/a")
        .exists());
}

#[test]
fn test_missing_python_root_fails() {
    let (_python, ignition) = setup_trees();

    ignsync()
        .arg("--python-root")
        .arg("/nonexistent/python")
        .arg("--ignition-root")
        .arg(ignition.path())
        .arg("compare")
        .assert()
        .failure();
}

#[test]
fn test_config_init_and_check() {
    let tmp = TempDir::new().unwrap();

    ignsync()
        .current_dir(tmp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote ignsync.yaml"));

    // Starter config points at placeholder paths, so check fails cleanly
    ignsync()
        .current_dir(tmp.path())
        .arg("--config")
        .arg(tmp.path().join("ignsync.yaml"))
        .args(["config", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
