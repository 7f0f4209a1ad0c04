use super::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_groups_matching_lines() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["search", "term"])
        .assert()
        .success()
        .stdout("*****rsync*****:\n  beta term gamma\n\n");
}

#[test]
fn test_search_all_scopes() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["search", "term", "--scope", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*****html.md*****:\n  <p>term</p>\n"))
        .stdout(predicate::str::contains("*****rsync*****:"))
        .stdout(predicate::str::contains("diagram").not());
}

#[test]
fn test_search_web_only_with_flag() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["search", "curl -O"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    fixture
        .kb()
        .args(["search", "curl -O", "--web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*****curl*****:\n  curl -O url\n"));
}

#[test]
fn test_search_is_case_sensitive() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["search", "TERM"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_json() {
    let fixture = Fixture::new();
    let output = fixture
        .kb()
        .args(["--format", "json", "search", "term"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["name"], "rsync");
    assert_eq!(json[0]["lines"], serde_json::json!(["beta term gamma"]));
}

#[test]
fn test_search_records() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--format", "records", "search", "term"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=search scope=examples resources=1 lines=1"))
        .stdout(predicate::str::contains("L text=\"beta term gamma\""));
}
