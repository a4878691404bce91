//! Conversation core for the Winter chat uplink.
//!
//! Provides:
//! - An append-only message log
//! - Prompt composition from a fixed persona preamble
//! - A Gemini completion client (one request per turn, no retries)
//! - A session controller that enforces a single in-flight request

pub mod gemini;
pub mod message_log;
pub mod prompt;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL};
pub use message_log::MessageLog;
pub use prompt::{compose, Prompt, DEFAULT_PERSONA};
pub use session::{
    SessionController, SessionEvent, SessionPhase, SessionSettings, SessionSnapshot,
    SubmitOutcome,
};

/// A remote text-generation service.
///
/// Implementations make exactly one outbound request per call and never
/// retry or cache.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// Replies, notices and the seed greeting.
    Model,
}

impl Role {
    /// Transcript label for this role.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Model => "System",
        }
    }
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    role: Role,
    text: String,
    /// Milliseconds since the Unix epoch.
    timestamp: i64,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("no API key configured (set {0})")]
    MissingCredential(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("remote error: {0}")]
    Remote(String),
}

impl CompletionError {
    /// Short, stable name of the error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CompletionError::Configuration(_) => "configuration",
            CompletionError::MissingCredential(_) => "missing_credential",
            CompletionError::Transport(_) => "transport",
            CompletionError::Remote(_) => "remote",
        }
    }
}

impl From<CompletionError> for winter_common::WinterError {
    fn from(err: CompletionError) -> Self {
        winter_common::WinterError::Ai(err.to_string())
    }
}
