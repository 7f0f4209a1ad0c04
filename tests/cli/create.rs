use super::support::Fixture;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Create and delete command tests
// ============================================================================

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| {
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_create_opens_editor() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["create", "jq", "--editor", "touch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(fixture.ex_path().join("jq").exists());
}

#[test]
fn test_create_uses_editor_variable() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .env("KB_EDITOR", "touch")
        .args(["create", "jq"])
        .assert()
        .success();
    assert!(fixture.ex_path().join("jq").exists());
}

#[test]
fn test_create_existing_exit_code_3() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["create", "tar", "--editor", "touch"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_create_without_editor_is_usage_error() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["create", "jq"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no editor configured"));
}

#[test]
fn test_create_invalid_name_exit_code_2() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["create", "../escape", "--editor", "touch"])
        .assert()
        .code(2);
    assert!(!fixture.kb_path().join("escape").exists());
}

#[test]
fn test_create_then_delete_leaves_examples_unchanged() {
    let fixture = Fixture::new();
    let before = snapshot(&fixture.ex_path());

    fixture
        .kb()
        .args(["create", "jq", "--editor", "touch"])
        .assert()
        .success();
    fixture.kb().args(["delete", "jq"]).assert().success();

    assert_eq!(snapshot(&fixture.ex_path()), before);
}

#[test]
fn test_delete_missing_exit_code_3() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["delete", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_delete_json() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--format", "json", "delete", "rsync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"deleted\""));
    assert!(!fixture.ex_path().join("rsync").exists());
}
