use super::support::Fixture;
use predicates::prelude::*;

// ============================================================================
// List command tests
// ============================================================================

fn stdout_lines(fixture: &Fixture, args: &[&str]) -> Vec<String> {
    let output = fixture.kb().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

fn names(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.split_whitespace().next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_examples_by_default() {
    let fixture = Fixture::new();
    let lines = stdout_lines(&fixture, &["list"]);
    assert_eq!(names(&lines), vec!["rsync", "tar"]);
}

#[test]
fn test_list_examples_with_web() {
    let fixture = Fixture::new();
    let lines = stdout_lines(&fixture, &["list", "--web"]);
    assert_eq!(names(&lines), vec!["curl", "rsync", "tar", "tar"]);
}

#[test]
fn test_list_notes_only_md_and_txt_outside_examples() {
    let fixture = Fixture::new();
    fixture.write("ex/notes.md", "not a note\n");

    let lines = stdout_lines(&fixture, &["list", "--scope", "notes", "--web"]);
    assert_eq!(names(&lines), vec!["html.md", "readme.txt", "todo.md"]);
}

#[test]
fn test_list_all() {
    let fixture = Fixture::new();
    let lines = stdout_lines(&fixture, &["list", "--scope", "all"]);
    assert_eq!(
        names(&lines),
        vec!["diagram.png", "html.md", "readme.txt", "rsync", "tar", "todo.md"]
    );
}

#[test]
fn test_list_order_is_case_insensitive() {
    let fixture = Fixture::new();
    fixture.write("ex/Scp", "scp a b\n");

    let lines = stdout_lines(&fixture, &["list"]);
    assert_eq!(names(&lines), vec!["rsync", "Scp", "tar"]);
}

#[test]
fn test_list_row_layout() {
    let fixture = Fixture::new();
    let lines = stdout_lines(&fixture, &["list"]);
    let path = fixture.ex_path().join("rsync");
    assert_eq!(lines[0], format!("{:<45} {}", "rsync", path.display()));
}

#[test]
fn test_list_json() {
    let fixture = Fixture::new();
    let output = fixture.kb().args(["--format", "json", "list"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "rsync");
    assert!(entries[0]["path"].as_str().unwrap().ends_with("rsync"));
}

#[test]
fn test_list_records() {
    let fixture = Fixture::new();
    fixture
        .kb()
        .args(["--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H kb=1 records=1 mode=list scope=examples web=false resources=2",
        ))
        .stdout(predicate::str::contains("R name=\"tar\""));
}

#[test]
fn test_list_empty_is_not_an_error() {
    let fixture = Fixture::new();
    let empty = fixture.kb_path().join("empty");
    std::fs::create_dir(&empty).unwrap();

    fixture
        .kb()
        .env("KB_EX_PATH", &empty)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No resources found"));
}
