use super::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// Dirs command tests
// ============================================================================

#[test]
fn test_dirs_lists_visible_directories() {
    let fixture = Fixture::new();
    let output = fixture.kb().arg("dirs").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let kb = fixture.kb_path().display().to_string();
    assert_eq!(
        lines,
        vec![
            kb.clone(),
            fixture.kb_path().join("dev").display().to_string(),
            fixture.ex_path().display().to_string(),
        ]
    );
}

#[test]
fn test_dirs_annotate() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["dirs", "--annotate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" (KB_PATH)"))
        .stdout(predicate::str::contains(" (KB_EX_PATH)"))
        .stdout(predicate::str::contains(".web").not());
}
