use super::support::{kb, Fixture};
use predicates::prelude::*;

// ============================================================================
// Root resolution errors
// ============================================================================

#[test]
fn test_missing_ex_path_exit_code_3() {
    let fixture = Fixture::new();
    kb().env("KB_PATH", fixture.kb_path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("KB_EX_PATH"));
}

#[test]
fn test_missing_kb_path_exit_code_3() {
    let fixture = Fixture::new();
    kb().env("KB_EX_PATH", fixture.ex_path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("KB_PATH"));
}

#[test]
fn test_nonexistent_root_exit_code_3() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .env("KB_EX_PATH", fixture.kb_path().join("missing"))
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("existing directory"));
}

#[test]
fn test_examples_root_is_not_created() {
    let fixture = Fixture::new();
    let missing = fixture.kb_path().join("missing");
    fixture
        .kb()
        .env("KB_EX_PATH", &missing)
        .arg("list")
        .assert()
        .code(3);
    assert!(!missing.exists());
}

#[test]
fn test_config_error_json_envelope() {
    kb().args(["--format", "json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"configuration\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_path_flags_override_environment() {
    let fixture = Fixture::new();
    let other = Fixture::new();
    other.write("ex/jq", "jq .\n");

    fixture
        .kb()
        .arg("--ex-path")
        .arg(other.ex_path())
        .arg("--kb-path")
        .arg(other.kb_path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("jq"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    kb().args(["--quiet", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
