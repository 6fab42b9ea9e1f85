use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use acadex_types::PlatformStats;

use crate::api::{AiApi, AuthApi, CatalogApi, QuizApi, TutorialApi, UsersApi};
use crate::error::{Error, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where and how to reach the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ServerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ServerConfig {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::new(DEFAULT_BASE_URL)
    }
}

/// Async client for the backend API.
///
/// Holds the pooled HTTP client, the base URL and the bearer token (when
/// logged in). Endpoint groups hang off accessors so call sites read like
/// the API tree: `client.users().list(...)`, `client.catalog().colleges()`.
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    pub fn new(server: &ServerConfig, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs))
            .build()?;
        Ok(Client {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(self)
    }

    pub fn quizzes(&self) -> QuizApi<'_> {
        QuizApi::new(self)
    }

    pub fn tutorials(&self) -> TutorialApi<'_> {
        TutorialApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    pub async fn stats(&self) -> Result<PlatformStats> {
        self.get_json("/api/stats", &[]).await
    }

    // ---- transport helpers used by the api modules ----

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        decode_json(response).await
    }

    pub(crate) async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        decode_json(response).await
    }

    /// Send and only check the status; the body (usually `{message}`) is
    /// dropped.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| Error::Decode(err.to_string()))
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, status.as_u16());
    if status == reqwest::StatusCode::UNAUTHORIZED {
        Err(Error::Unauthorized(message))
    } else {
        Err(Error::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull a human-readable message out of an error body. The backend
/// answers `{message}` or `{error}`; anything else falls back to the raw
/// body or the bare status code.
fn error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_structured_fields() {
        assert_eq!(error_message(r#"{"message":"bad token"}"#, 401), "bad token");
        assert_eq!(error_message(r#"{"error":"nope"}"#, 400), "nope");
        assert_eq!(error_message("<html>teapot</html>", 418), "<html>teapot</html>");
        assert_eq!(error_message("", 502), "HTTP 502");
    }

    #[test]
    fn base_url_is_normalized() {
        let client = Client::new(&ServerConfig::new("http://x.test/"), None).unwrap();
        assert_eq!(client.base_url(), "http://x.test");
        assert!(!client.is_authenticated());
    }
}
