use serde::{Deserialize, Serialize};

/// Models the AI relay accepts. The relay forwards to whichever vendor
/// hosts the requested model, so this list tracks the backend, not us.
pub const KNOWN_MODELS: [&str; 4] = [
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "claude-3-sonnet",
    "gpt-4-turbo",
];

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn of an assistant conversation, in wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Saved conversation transcript (local artifact, not a server record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub id: String,
    pub model: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub messages: Vec<ChatMessage>,
}
