use super::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_config"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--log-level", "warn", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_config").not());
}

#[test]
fn test_kb_log_env_overrides_flags() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .env("KB_LOG", "kb_core=debug")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("list_resources"));
}

#[test]
fn test_log_json() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--log-json", "--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"resolve_config\""));
}

#[test]
fn test_verbose_does_not_touch_stdout() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve_config").not());
}
