use acadex_client::ServerConfig;
use acadex_types::chat::DEFAULT_MODEL;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_PAGE_SIZE: u64 = 10;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ACADEX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.acadex (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ACADEX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("acadex"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".acadex"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_model")]
    pub default_model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            default_model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_config_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.chat.default_model, DEFAULT_MODEL);
        assert_eq!(config.output.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.server.base_url = "https://acadex.example.edu".to_string();
        config.output.page_size = 25;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.base_url, "https://acadex.example.edu");
        assert_eq!(loaded.output.page_size, 25);
        assert_eq!(loaded.chat.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_partial_config_fills_missing_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[server]\nbase_url = \"http://10.0.0.2:5000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.server.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.server.timeout_secs, 60);
        assert_eq!(config.output.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_resolve_data_dir_priority_chain() {
        // Explicit beats everything, including the environment variable.
        unsafe {
            std::env::set_var("ACADEX_PATH", "/tmp/acadex-env");
        }
        let explicit = resolve_data_dir(Some("/tmp/acadex-explicit")).unwrap();
        assert_eq!(explicit, PathBuf::from("/tmp/acadex-explicit"));

        // With no explicit path the environment variable wins.
        let from_env = resolve_data_dir(None).unwrap();
        assert_eq!(from_env, PathBuf::from("/tmp/acadex-env"));

        // Without either, some platform directory is picked.
        unsafe {
            std::env::remove_var("ACADEX_PATH");
        }
        let fallback = resolve_data_dir(None).unwrap();
        assert!(fallback.to_string_lossy().contains("acadex"));
    }

    #[test]
    fn test_expand_tilde() {
        unsafe {
            std::env::set_var("HOME", "/home/tester");
        }
        assert_eq!(
            expand_tilde("~/notes"),
            PathBuf::from("/home/tester/notes")
        );
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
