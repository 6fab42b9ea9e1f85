//! Custom assertions over the JSON command envelope.
//!
//! Every command's `--format json` output is `{badge, content, suggestions}`;
//! these helpers keep tests readable when poking into that shape.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the badge level of a command result ("success", "info",
/// "warning" or "error").
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level '{}', got '{}'", expected, level);
    }

    Ok(())
}

/// Assert that a CSV import report carries the expected number of issues.
pub fn assert_issue_count(json: &Value, expected: usize) -> Result<()> {
    let issues = json["content"]["issues"]
        .as_array()
        .context("Expected 'content.issues' array in JSON")?;

    if issues.len() != expected {
        anyhow::bail!("Expected {} issues, got {}", expected, issues.len());
    }

    Ok(())
}

/// Assert that some suggestion mentions the given fragment, in either its
/// description or its follow-up command.
pub fn assert_suggests(json: &Value, fragment: &str) -> Result<()> {
    let suggestions = json["suggestions"]
        .as_array()
        .context("Expected 'suggestions' array in JSON")?;

    let found = suggestions.iter().any(|suggestion| {
        suggestion["description"]
            .as_str()
            .is_some_and(|text| text.contains(fragment))
            || suggestion["command"]
                .as_str()
                .is_some_and(|text| text.contains(fragment))
    });

    if !found {
        anyhow::bail!("No suggestion mentions '{}' in {:?}", fragment, suggestions);
    }

    Ok(())
}
