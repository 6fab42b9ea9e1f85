use crate::config::{CONFIG_FILE, Config};
use acadex_client::{Client, ServerConfig, Session};
use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation resources, built once in `run` and borrowed by handlers.
///
/// Config and client are loaded lazily so commands that never touch the
/// network (init, logout, local validation failures) do not pay for them.
pub struct ExecutionContext {
    data_dir: PathBuf,
    server_override: Option<String>,
    config: OnceCell<Config>,
    client: OnceCell<Client>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, server_override: Option<String>) -> Self {
        ExecutionContext {
            data_dir,
            server_override,
            config: OnceCell::new(),
            client: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// Effective server settings, with `--server` taking priority over
    /// config.toml.
    pub fn server(&self) -> Result<ServerConfig> {
        let mut server = self.config()?.server.clone();
        if let Some(url) = &self.server_override {
            server.base_url = url.clone();
        }
        Ok(server)
    }

    pub fn session(&self) -> Result<Option<Session>> {
        Ok(Session::load(&self.data_dir)?)
    }

    pub fn client(&self) -> Result<&Client> {
        self.client.get_or_try_init(|| {
            let server = self.server()?;
            let token = self.session()?.map(|s| s.token);
            Ok(Client::new(&server, token)?)
        })
    }

    pub fn page_size(&self) -> Result<u64> {
        Ok(self.config()?.output.page_size)
    }

    pub fn default_model(&self) -> Result<String> {
        Ok(self.config()?.chat.default_model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context_with_config(content: &str) -> (TempDir, ExecutionContext) {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), content).unwrap();
        let ctx = ExecutionContext::new(temp.path().to_path_buf(), None);
        (temp, ctx)
    }

    #[test]
    fn test_lazy_loading() {
        let (_temp, ctx) = context_with_config("[output]\npage_size = 7\n");

        assert!(ctx.config.get().is_none());
        assert_eq!(ctx.page_size().unwrap(), 7);
        assert!(ctx.config.get().is_some());

        // The HTTP client is still untouched.
        assert!(ctx.client.get().is_none());
    }

    #[test]
    fn test_server_override_wins() {
        let (_temp, temp_ctx) = context_with_config(
            "[server]\nbase_url = \"http://from-config:5000\"\ntimeout_secs = 5\n",
        );
        assert_eq!(
            temp_ctx.server().unwrap().base_url,
            "http://from-config:5000"
        );

        let temp = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(
            temp.path().to_path_buf(),
            Some("http://cli-flag:9000".to_string()),
        );
        let server = ctx.server().unwrap();
        assert_eq!(server.base_url, "http://cli-flag:9000");
        // Non-overridden settings still come from config defaults.
        assert_eq!(server.timeout_secs, 60);
    }

    #[test]
    fn test_session_absent_by_default() {
        let temp = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp.path().to_path_buf(), None);
        assert!(ctx.session().unwrap().is_none());
    }
}
