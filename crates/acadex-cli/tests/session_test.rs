//! Stored-session lifecycle, exercised without any server.
//!
//! Login itself needs a backend, but everything around the credentials
//! file (logout, the signed-out error paths) is local filesystem work.

use acadex_client::Session;
use acadex_testing::{TestWorld, assertions};
use anyhow::Result;

#[test]
fn test_logout_without_session_is_informational() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["logout", "--format", "json"])?;

    // Logging out twice should not be an error, just a shrug.
    assert!(result.success(), "Logout should succeed: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_badge_level(&json, "info")?;
    assert!(
        json["content"]["message"]
            .as_str()
            .unwrap()
            .contains("nothing to remove")
    );

    Ok(())
}

#[test]
fn test_logout_clears_stored_session() -> Result<()> {
    // Given: a planted session token
    let world = TestWorld::new().with_session("tok-123", "amaka");
    assert!(Session::path(world.data_dir()).exists());

    // When: logging out
    let result = world.run(&["logout", "--format", "json"])?;

    // Then: the credentials file is gone and the badge confirms it
    assert!(result.success());
    let json = result.json()?;
    assertions::assert_badge_level(&json, "success")?;
    assert!(!Session::path(world.data_dir()).exists());

    // A second logout falls back to the informational path.
    let again = world.run(&["logout", "--format", "json"])?;
    assert!(again.success());
    assertions::assert_badge_level(&again.json()?, "info")?;

    Ok(())
}

#[test]
fn test_whoami_without_session_asks_for_login() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["whoami"])?;

    assert!(!result.success(), "whoami must fail when signed out");
    assert!(
        result.stderr().contains("no stored session"),
        "Unexpected stderr: {}",
        result.stderr()
    );
    assert!(result.stderr().contains("acadex login"));

    Ok(())
}

#[test]
fn test_promote_without_session_asks_for_login() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["promote", "admin", "--code", "EXAM-2024"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("no stored session"));

    Ok(())
}
