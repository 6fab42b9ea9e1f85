//! Init & Configuration Tests
//!
//! Verifies the config bootstrap workflow: writing a starter config,
//! refusing accidental overwrites, and the guidance screen shown when
//! the binary is invoked without a subcommand.

use acadex_testing::{TestWorld, assertions};
use anyhow::Result;

#[test]
fn test_init_writes_config_with_server() -> Result<()> {
    // Given: a fresh data directory with no config.toml
    let world = TestWorld::new();
    assert!(!world.data_dir().join("config.toml").exists());

    // When: init records an explicit server URL
    let result = world.run(&[
        "init",
        "--server",
        "http://10.0.0.9:5000",
        "--format",
        "json",
    ])?;

    // Then: the file exists and the envelope reports a fresh write
    assert!(result.success(), "Init should succeed: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_badge_level(&json, "success")?;
    assert_eq!(json["content"]["created"], true);
    assert_eq!(json["content"]["server"], "http://10.0.0.9:5000");
    assertions::assert_suggests(&json, "acadex login")?;

    let content = std::fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(
        content.contains("http://10.0.0.9:5000"),
        "config.toml should record the server URL: {}",
        content
    );

    Ok(())
}

#[test]
fn test_init_refuses_overwrite_without_force() -> Result<()> {
    // Given: an already-written config pointing somewhere specific
    let world =
        TestWorld::new().with_config("[server]\nbase_url = \"http://keep-me:5000\"\n");

    // When: init runs again without --force
    let result = world.run(&["init", "--server", "http://clobber:5000"])?;

    // Then: it fails and the original file is untouched
    assert!(!result.success(), "Second init should fail without --force");
    assert!(
        result.stderr().contains("already exists"),
        "Unexpected stderr: {}",
        result.stderr()
    );

    let content = std::fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(content.contains("http://keep-me:5000"));
    assert!(!content.contains("http://clobber:5000"));

    Ok(())
}

#[test]
fn test_init_force_overwrites_existing_config() -> Result<()> {
    let world =
        TestWorld::new().with_config("[server]\nbase_url = \"http://old-server:5000\"\n");

    let result = world.run(&[
        "init",
        "--force",
        "--server",
        "http://new-server:5000",
        "--format",
        "json",
    ])?;

    assert!(result.success(), "Forced init should succeed: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_badge_level(&json, "success")?;
    // `created` distinguishes a fresh write from a forced overwrite.
    assert_eq!(json["content"]["created"], false);
    assert_eq!(json["badge"]["label"], "Configuration overwritten");

    let content = std::fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(content.contains("http://new-server:5000"));

    Ok(())
}

#[test]
fn test_bare_invocation_guides_first_run() -> Result<()> {
    // Given: no config, no session
    let world = TestWorld::new();

    // When: the binary runs without a subcommand
    let result = world.run(&[])?;

    // Then: the guidance screen points at init and login
    assert!(result.success(), "Guidance should not fail: {}", result.stderr());
    assert!(result.stdout().contains("Get started:"));
    assert!(result.stdout().contains("acadex init --server"));
    assert!(result.stdout().contains("acadex login"));

    Ok(())
}

#[test]
fn test_bare_invocation_suggests_login_when_config_exists() -> Result<()> {
    let world = TestWorld::new().with_config("[server]\nbase_url = \"http://x:5000\"\n");

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout().contains("no stored session"));
    assert!(result.stdout().contains("acadex login"));
    assert!(!result.stdout().contains("Get started:"));

    Ok(())
}

#[test]
fn test_bare_invocation_lists_quick_commands_when_signed_in() -> Result<()> {
    let world = TestWorld::new()
        .with_config("[server]\nbase_url = \"http://x:5000\"\n")
        .with_session("tok-1", "admin@example.edu");

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout().contains("Quick commands:"));
    assert!(result.stdout().contains("acadex console"));
    assert!(result.stdout().contains("acadex catalog resolve"));

    Ok(())
}
