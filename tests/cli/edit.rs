use super::support::Fixture;
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Edit command tests
// ============================================================================

#[test]
fn test_edit_local_example() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["edit", "tar", "--editor", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edited"));
}

#[test]
fn test_edit_note_by_full_path() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["edit", "--editor", "true"])
        .arg(fixture.kb_path().join("todo.md"))
        .assert()
        .success();
}

#[test]
fn test_edit_missing_exit_code_3() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["edit", "nope", "--editor", "true"])
        .assert()
        .code(3);
}

#[test]
fn test_edit_fetched_page_needs_create() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["edit", "curl", "--editor", "true"])
        .assert()
        .code(3);

    fixture
        .kb()
        .args(["edit", "curl", "--create", "--editor", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied"));

    let copy = fs::read_to_string(fixture.ex_path().join("curl")).unwrap();
    assert_eq!(copy, "# curl\ncurl -O url\n");
}

#[test]
fn test_edit_create_missing() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--format", "json", "edit", "jq", "--create", "--editor", "touch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"action\": \"created\""));
    assert!(fixture.ex_path().join("jq").exists());
}

#[test]
fn test_edit_editor_spawn_failure() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["edit", "tar", "--editor", "definitely-not-an-editor-kb"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open editor"));
}
