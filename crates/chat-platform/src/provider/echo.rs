//! In-process providers for running without a chat server.

use async_trait::async_trait;
use serde_json::json;

use chat_core::ports::*;
use chat_types::{ChatError, Result, message::Message};

/// Always healthy; answers by echoing the message back.
pub struct EchoProvider;

#[async_trait(?Send)]
impl CompletionPort for EchoProvider {
    async fn health(&self) -> Result<HealthReport> {
        let mut report = HealthReport::ok();
        report.extra.insert("message".to_string(), json!("Echo server is running"));
        Ok(report)
    }

    async fn complete(&self, message: &str, _history: &[Message]) -> Result<CompletionBody> {
        let mut body = CompletionBody::reply(format!("You said: \"{}\"", message));
        body.timestamp = Some(chrono::Utc::now().to_rfc3339());
        Ok(body)
    }

    fn label(&self) -> &str {
        "Echo"
    }
}

/// Never reachable, so every reply comes from the fallback table.
pub struct OfflineProvider;

#[async_trait(?Send)]
impl CompletionPort for OfflineProvider {
    async fn health(&self) -> Result<HealthReport> {
        Err(ChatError::ProviderUnavailable("offline mode".to_string()))
    }

    async fn complete(&self, _message: &str, _history: &[Message]) -> Result<CompletionBody> {
        Err(ChatError::ProviderUnavailable("offline mode".to_string()))
    }

    fn label(&self) -> &str {
        "Offline"
    }
}
