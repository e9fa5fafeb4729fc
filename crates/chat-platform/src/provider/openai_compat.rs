//! OpenAI-compatible completion adapter.
//!
//! Talks to any provider using the OpenAI chat completions API format
//! (OpenAI, DeepSeek, Groq, a local llama.cpp server, ...).
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use chat_core::ports::*;
use chat_types::{
    ChatError, Result,
    config::OpenAiConfig,
    message::{Message, Sender},
};

use super::timeout::with_timeout;

pub struct OpenAiCompatProvider {
    config: OpenAiConfig,
    timeout_ms: u32,
}

impl OpenAiCompatProvider {
    pub fn new(config: OpenAiConfig, timeout_ms: u32) -> Self {
        Self { config, timeout_ms }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.api_base.trim_end_matches('/'))
    }

    async fn post_completion(&self, body: Value) -> Result<CompletionBody> {
        let response = Request::post(&self.completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Provider(format!("HTTP {}: {}", status, text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Provider(e.to_string()))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::Provider("No choices in response".to_string()))?;

        Ok(CompletionBody {
            reply: choice.message.content,
            ..CompletionBody::default()
        })
    }
}

/// Build the chat completions request: system prompt, the trailing
/// conversation, then the new user message. The conversation usually ends
/// with the message being sent, so a trailing duplicate is dropped.
pub fn build_request_body(config: &OpenAiConfig, message: &str, history: &[Message]) -> Value {
    let history = match history.split_last() {
        Some((last, rest)) if last.sender == Sender::User && last.content == message => rest,
        _ => history,
    };

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(json!({ "role": "system", "content": config.system_prompt }));
    messages.extend(history.iter().map(message_to_json));
    messages.push(json!({ "role": "user", "content": message }));

    json!({
        "model": config.model,
        "messages": messages,
        "max_tokens": config.max_tokens,
        "temperature": config.temperature,
    })
}

fn message_to_json(msg: &Message) -> Value {
    let role = match msg.sender {
        Sender::User => "user",
        Sender::Assistant => "assistant",
    };
    json!({ "role": role, "content": msg.content })
}

#[async_trait(?Send)]
impl CompletionPort for OpenAiCompatProvider {
    /// No request is made: the provider counts as reachable once a key is set.
    async fn health(&self) -> Result<HealthReport> {
        if self.config.api_key.trim().is_empty() {
            return Err(ChatError::Config("API key not configured".to_string()));
        }
        let mut report = HealthReport::ok();
        report.extra.insert("model".to_string(), json!(self.config.model));
        Ok(report)
    }

    async fn complete(&self, message: &str, history: &[Message]) -> Result<CompletionBody> {
        let body = build_request_body(&self.config, message, history);
        with_timeout(self.timeout_ms, self.post_completion(body)).await
    }

    fn label(&self) -> &str {
        "OpenAI-compatible"
    }

    fn endpoints(&self) -> Vec<String> {
        vec![self.completions_url()]
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}
