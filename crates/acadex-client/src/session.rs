use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CREDENTIALS_FILE: &str = "credentials.toml";

/// Saved login state.
///
/// Login writes it, logout deletes it, and every command context loads it
/// once at startup and passes the token into [`crate::Client`]. Nothing
/// reads the token from anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// Email or username the token was issued for.
    pub identifier: String,
    pub obtained_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, identifier: impl Into<String>) -> Self {
        Session {
            token: token.into(),
            identifier: identifier.into(),
            obtained_at: Utc::now(),
        }
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CREDENTIALS_FILE)
    }

    /// `Ok(None)` when no session has been saved yet.
    pub fn load(data_dir: &Path) -> Result<Option<Session>> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let session = toml::from_str(&content)
            .map_err(|err| Error::Session(format!("{} is corrupt: {}", path.display(), err)))?;
        Ok(Some(session))
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|err| Error::Session(err.to_string()))?;
        std::fs::write(Self::path(data_dir), content)?;
        Ok(())
    }

    /// Remove the saved session. Returns whether one existed.
    pub fn clear(data_dir: &Path) -> Result<bool> {
        let path = Self::path(data_dir);
        if path.exists() {
            std::fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_clear_round_trip() {
        let dir = TempDir::new().unwrap();
        assert!(Session::load(dir.path()).unwrap().is_none());

        let session = Session::new("tok-123", "admin@example.edu");
        session.save(dir.path()).unwrap();

        let loaded = Session::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.identifier, "admin@example.edu");

        assert!(Session::clear(dir.path()).unwrap());
        assert!(!Session::clear(dir.path()).unwrap());
        assert!(Session::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_reports_session_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Session::path(dir.path()), "not = [valid").unwrap();
        assert!(matches!(
            Session::load(dir.path()),
            Err(Error::Session(_))
        ));
    }
}
