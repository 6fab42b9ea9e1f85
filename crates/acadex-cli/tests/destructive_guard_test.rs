//! Guard rails in front of destructive and ambiguous commands.
//!
//! Deletes refuse to run without --yes, and edits with nothing to edit
//! fail fast. All of these bail before any client is even constructed.

use acadex_testing::TestWorld;
use anyhow::Result;

#[test]
fn test_quiz_delete_requires_yes() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["quiz", "delete", "quiz-9"])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains("refusing to delete quiz quiz-9"),
        "Unexpected stderr: {}",
        result.stderr()
    );
    assert!(result.stderr().contains("--yes"));

    Ok(())
}

#[test]
fn test_user_delete_requires_yes() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["user", "delete", "member-4"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("refusing to delete account member-4"));

    Ok(())
}

#[test]
fn test_tutorial_delete_requires_yes() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["tutorial", "delete", "tut-2"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("refusing to delete tutorial tut-2"));

    Ok(())
}

#[test]
fn test_quiz_update_with_no_fields_fails_fast() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["quiz", "update", "quiz-9"])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains("nothing to update"),
        "Unexpected stderr: {}",
        result.stderr()
    );

    Ok(())
}

#[test]
fn test_quiz_create_requires_subject_or_path() -> Result<()> {
    let world = TestWorld::new();

    // Neither --subject nor --path: rejected by the argument group.
    let result = world.run(&["quiz", "create", "Midterm Revision"])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains("--subject <SUBJECT>|--path <PATH>"),
        "Unexpected stderr: {}",
        result.stderr()
    );

    Ok(())
}

#[test]
fn test_tutorial_scope_flags_are_exclusive() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "tutorial", "list", "--subject", "sub-1", "--course", "course-1",
    ])?;

    assert!(!result.success());
    assert!(
        result.stderr().contains("cannot be used with"),
        "Unexpected stderr: {}",
        result.stderr()
    );

    Ok(())
}
