use serde::{Deserialize, Serialize};

/// Top-level client configuration, persisted under `"config"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub backend: BackendConfig,
    /// How many trailing messages are sent to the provider as history
    pub history_window: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            history_window: 6,
        }
    }
}

/// Where replies come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Prefix for the HTTP endpoints; empty means same origin
    pub base_url: String,
    pub health_path: String,
    pub chat_path: String,
    /// Upper bound for each health probe and completion call
    pub timeout_ms: u32,
    pub openai: OpenAiConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Http,
            base_url: String::new(),
            health_path: "/api/health".to_string(),
            chat_path: "/api/chat".to_string(),
            timeout_ms: 10_000,
            openai: OpenAiConfig::default(),
        }
    }
}

impl BackendConfig {
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.health_path)
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.chat_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// A chat server exposing the health/chat endpoint pair
    Http,
    /// Direct calls to an OpenAI-compatible chat completions API
    OpenAiCompat,
    /// In-process stub that echoes the message back
    Echo,
    /// No provider; every reply comes from the fallback table
    Offline,
}

impl BackendKind {
    pub fn all() -> &'static [BackendKind] {
        &[
            BackendKind::Http,
            BackendKind::OpenAiCompat,
            BackendKind::Echo,
            BackendKind::Offline,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Http => "HTTP",
            BackendKind::OpenAiCompat => "OpenAI-compatible",
            BackendKind::Echo => "Echo",
            BackendKind::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            system_prompt: "You are a helpful AI assistant.".to_string(),
        }
    }
}

/// UI colour scheme, persisted under `"theme"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
