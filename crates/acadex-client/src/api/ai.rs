use reqwest::Method;
use serde::{Deserialize, Serialize};

use acadex_types::ChatMessage;

use crate::client::Client;
use crate::error::{Error, Result};

pub struct AiApi<'a> {
    client: &'a Client,
}

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// The relay answers 200 for both outcomes and flags failure in-band.
#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        AiApi { client }
    }

    /// Send the whole conversation so far; the reply is the assistant's
    /// next message.
    pub async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let reply: ChatReply = self
            .client
            .send_json(
                self.client
                    .request(Method::POST, "/api/ai/chat")
                    .json(&ChatBody { model, messages }),
            )
            .await?;
        match (reply.text, reply.error) {
            (Some(text), _) => Ok(text),
            (None, Some(error)) => Err(Error::Backend(error)),
            (None, None) => Err(Error::Decode("chat reply carried no text".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_shapes() {
        let ok: ChatReply = serde_json::from_str(r#"{"ok":true,"text":"hi"}"#).unwrap();
        assert_eq!(ok.text.as_deref(), Some("hi"));

        let failed: ChatReply =
            serde_json::from_str(r#"{"ok":false,"error":"model overloaded"}"#).unwrap();
        assert_eq!(failed.error.as_deref(), Some("model overloaded"));
    }
}
