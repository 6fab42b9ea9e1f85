//! CSV question import: local validation gate.
//!
//! A malformed bank must be rejected line by line before any bytes reach
//! the server, so every test here runs with no server at all. The fixtures
//! in acadex-testing pin the line numbers these assertions rely on.

use acadex_testing::{TestWorld, assertions, fixtures};
use anyhow::Result;

#[test]
fn test_import_rejects_bad_values_without_uploading() -> Result<()> {
    // Given: a bank with a bad answer on line 2 and bad points on line 3
    let world = TestWorld::new();
    world.write_file("questions.csv", fixtures::QUESTIONS_BAD_VALUES);

    // When: importing with --dry-run
    let result = world.run(&[
        "quiz",
        "import",
        "quiz-1",
        "questions.csv",
        "--dry-run",
        "--format",
        "json",
    ])?;

    // Then: the command fails but still prints the full report
    assert!(!result.success(), "Bad CSV must fail the import");
    assert!(
        result.stderr().contains("2 issue(s)"),
        "Unexpected stderr: {}",
        result.stderr()
    );
    assert!(result.stderr().contains("nothing was uploaded"));

    let json = result.json()?;
    assertions::assert_badge_level(&json, "error")?;
    assertions::assert_issue_count(&json, 2)?;
    assertions::assert_suggests(&json, "nothing was uploaded")?;

    let issues = json["content"]["issues"].as_array().unwrap();
    assert_eq!(issues[0]["line"], 2);
    assert_eq!(issues[0]["field"], "answer");
    assert_eq!(issues[1]["line"], 3);
    assert_eq!(issues[1]["field"], "points");

    assert_eq!(json["content"]["rows"], 2);
    assert_eq!(json["content"]["dry_run"], true);
    // Local validation failed, so no server round trip happened.
    assert!(json["content"]["server_report"].is_null());

    Ok(())
}

#[test]
fn test_import_reports_missing_columns_on_header_line() -> Result<()> {
    let world = TestWorld::new();
    world.write_file("questions.csv", fixtures::QUESTIONS_MISSING_COLUMNS);

    let result = world.run(&[
        "quiz",
        "import",
        "quiz-1",
        "questions.csv",
        "--format",
        "json",
    ])?;

    assert!(!result.success());
    let json = result.json()?;
    assertions::assert_badge_level(&json, "error")?;
    // option_a through option_d are all absent.
    assertions::assert_issue_count(&json, 4)?;

    let issues = json["content"]["issues"].as_array().unwrap();
    for issue in issues {
        assert_eq!(issue["line"], 1, "header issues sit on line 1: {:?}", issue);
        assert_eq!(issue["message"], "missing column");
    }
    let fields: Vec<&str> = issues
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["option_a", "option_b", "option_c", "option_d"]);

    Ok(())
}

#[test]
fn test_import_empty_bank_is_an_error() -> Result<()> {
    let world = TestWorld::new();
    world.write_file("questions.csv", fixtures::QUESTIONS_EMPTY);

    let result = world.run(&[
        "quiz",
        "import",
        "quiz-1",
        "questions.csv",
        "--format",
        "json",
    ])?;

    assert!(!result.success(), "A header-only file has nothing to import");
    let json = result.json()?;
    assertions::assert_issue_count(&json, 1)?;

    let issue = &json["content"]["issues"][0];
    assert_eq!(issue["field"], "file");
    assert_eq!(issue["message"], "no question rows");
    assert_eq!(json["content"]["rows"], 0);

    Ok(())
}

#[test]
fn test_import_missing_file_fails_cleanly() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["quiz", "import", "quiz-1", "does-not-exist.csv"])?;

    assert!(!result.success());
    assert!(
        result.stderr().starts_with("Error:"),
        "Unexpected stderr: {}",
        result.stderr()
    );
    // No report was printed; the file could not even be opened.
    assert!(result.stdout().is_empty());

    Ok(())
}
