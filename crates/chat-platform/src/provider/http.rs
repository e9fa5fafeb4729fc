//! Adapter for a chat server exposing a health/chat endpoint pair.
//!
//! `GET {base}/api/health` answers `{"status": "OK"}` when the server is up;
//! `POST {base}/api/chat` takes `{message, chatHistory}` and answers with a
//! reply body. Uses browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use chat_core::ports::*;
use chat_types::{
    ChatError, Result,
    config::BackendConfig,
    message::Message,
};

use super::timeout::with_timeout;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestBody<'a> {
    pub message: &'a str,
    pub chat_history: Vec<HistoryEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry<'a> {
    pub sender: &'a str,
    pub content: &'a str,
}

impl<'a> ChatRequestBody<'a> {
    pub fn new(message: &'a str, history: &'a [Message]) -> Self {
        Self {
            message,
            chat_history: history
                .iter()
                .map(|m| HistoryEntry {
                    sender: m.sender.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

pub struct HttpCompletionProvider {
    health_url: String,
    chat_url: String,
    timeout_ms: u32,
}

impl HttpCompletionProvider {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            health_url: config.health_url(),
            chat_url: config.chat_url(),
            timeout_ms: config.timeout_ms,
        }
    }

    async fn fetch_health(&self) -> Result<HealthReport> {
        let response = Request::get(&self.health_url)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        response
            .json()
            .await
            .map_err(|e| ChatError::Provider(e.to_string()))
    }

    async fn post_chat(&self, message: &str, history: &[Message]) -> Result<CompletionBody> {
        let body = ChatRequestBody::new(message, history);

        let response = Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;
        response
            .json()
            .await
            .map_err(|e| ChatError::Provider(e.to_string()))
    }
}

async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ChatError::Provider(format!("HTTP {}: {}", status, text)))
}

#[async_trait(?Send)]
impl CompletionPort for HttpCompletionProvider {
    async fn health(&self) -> Result<HealthReport> {
        with_timeout(self.timeout_ms, self.fetch_health()).await
    }

    async fn complete(&self, message: &str, history: &[Message]) -> Result<CompletionBody> {
        log::debug!("POST {} ({} history entries)", self.chat_url, history.len());
        with_timeout(self.timeout_ms, self.post_chat(message, history)).await
    }

    fn label(&self) -> &str {
        "HTTP"
    }

    fn endpoints(&self) -> Vec<String> {
        vec![self.health_url.clone(), self.chat_url.clone()]
    }
}
