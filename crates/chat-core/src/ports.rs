//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use chat_types::{ChatError, Result, message::Message};

// ─── Storage Port ────────────────────────────────────────────

/// Synchronous string key-value store (browser `localStorage` semantics).
pub trait StoragePort {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, overwriting any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Completion Port ─────────────────────────────────────────

/// Body of a health probe response: `{"status": "OK", ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthReport {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            extra: Map::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// Body of a chat response. Servers disagree on the field carrying the
/// reply, so all known ones are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl CompletionBody {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            ..Self::default()
        }
    }

    /// The reply text: first non-empty of `reply`, `response`, `message`.
    /// An `error` field wins over everything.
    pub fn into_text(self) -> Result<String> {
        if let Some(err) = self.error {
            return Err(ChatError::Provider(err));
        }
        [self.reply, self.response, self.message]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .ok_or_else(|| ChatError::Provider("Response carried no reply text".to_string()))
    }
}

#[async_trait(?Send)]
pub trait CompletionPort {
    /// Probe whether the provider is reachable. Implementations bound
    /// this call in time.
    async fn health(&self) -> Result<HealthReport>;

    /// Ask for a reply to `message`, given the trailing conversation
    async fn complete(&self, message: &str, history: &[Message]) -> Result<CompletionBody>;

    /// Short label for exports and status lines
    fn label(&self) -> &str;

    /// Endpoints this provider talks to, for status display
    fn endpoints(&self) -> Vec<String> {
        Vec::new()
    }
}
