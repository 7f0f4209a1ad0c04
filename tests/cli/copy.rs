use super::support::Fixture;
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Copy command tests
// ============================================================================

#[test]
fn test_copy_file() {
    let fixture = Fixture::new();
    let dst = fixture.ex_path().join("todo");

    fixture
        .kb()
        .arg("copy")
        .arg(fixture.kb_path().join("todo.md"))
        .arg(&dst)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dst).unwrap(), "# todo\nbuy milk\n");
}

#[test]
fn test_copy_failure_names_both_paths() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .arg("copy")
        .arg(fixture.kb_path().join("missing.md"))
        .arg(fixture.kb_path().join("other.md"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.md"))
        .stderr(predicate::str::contains("other.md"));
}
