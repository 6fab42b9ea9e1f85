use reqwest::Method;
use serde::{Deserialize, Serialize};

use acadex_types::{Role, User};

use crate::client::Client;
use crate::error::{Error, Result};

pub struct AuthApi<'a> {
    client: &'a Client,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    identifier: &'a str,
    password: &'a str,
}

/// Older deployments answer `accessToken`, newer ones `token`.
#[derive(Deserialize)]
struct TokenBody {
    #[serde(default)]
    token: Option<String>,
    #[serde(default, rename = "accessToken")]
    access_token: Option<String>,
}

impl TokenBody {
    fn into_token(self) -> Result<String> {
        self.token
            .or(self.access_token)
            .ok_or_else(|| Error::Decode("auth response carried no token".to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MeBody {
    Wrapped { user: User },
    Bare(User),
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        AuthApi { client }
    }

    /// Exchange credentials for a bearer token. `identifier` is an email
    /// or username.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<String> {
        let body: TokenBody = self
            .client
            .send_json(
                self.client
                    .request(Method::POST, "/api/auth/login")
                    .json(&LoginBody { identifier, password }),
            )
            .await?;
        body.into_token()
    }

    /// Create an account and get a token for it in one step.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String> {
        let body: TokenBody = self
            .client
            .send_json(
                self.client
                    .request(Method::POST, "/api/auth/register")
                    .json(request),
            )
            .await?;
        body.into_token()
    }

    pub async fn me(&self) -> Result<User> {
        let body: MeBody = self.client.get_json("/api/auth/me", &[]).await?;
        Ok(match body {
            MeBody::Wrapped { user } => user,
            MeBody::Bare(user) => user,
        })
    }

    /// Self-service promotion with the shared invite code. Only `exec`
    /// and `admin` are accepted targets.
    pub async fn promote_self(&self, role: Role, code: &str) -> Result<String> {
        let body: MessageBody = self
            .client
            .send_json(
                self.client
                    .request(Method::POST, "/api/auth/promote-self")
                    .json(&serde_json::json!({ "role": role, "code": code })),
            )
            .await?;
        Ok(body
            .message
            .unwrap_or_else(|| format!("promoted to {}", role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_body_accepts_either_field() {
        let new_style: TokenBody = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert_eq!(new_style.into_token().unwrap(), "t1");

        let old_style: TokenBody = serde_json::from_str(r#"{"accessToken":"t2"}"#).unwrap();
        assert_eq!(old_style.into_token().unwrap(), "t2");

        let neither: TokenBody = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(neither.into_token().is_err());
    }

    #[test]
    fn me_body_accepts_wrapped_and_bare_user() {
        let raw = r#"{"user":{"_id":"u1","name":"Ada","username":"ada","email":"a@x.edu","role":"admin"}}"#;
        let wrapped: MeBody = serde_json::from_str(raw).unwrap();
        let MeBody::Wrapped { user } = wrapped else {
            panic!("expected wrapped form");
        };
        assert_eq!(user.id, "u1");

        let bare: MeBody = serde_json::from_str(
            r#"{"_id":"u2","name":"Lin","username":"lin","email":"l@x.edu","role":"member"}"#,
        )
        .unwrap();
        let MeBody::Bare(user) = bare else {
            panic!("expected bare form");
        };
        assert_eq!(user.id, "u2");
    }
}
