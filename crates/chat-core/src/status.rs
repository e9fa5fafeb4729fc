//! Backend connectivity checks shown in the status bar and settings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use chat_types::event::{ChatEvent, NotificationLevel};
use crate::event_bus::EventBus;
use crate::ports::CompletionPort;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiStatus {
    pub connected: bool,
    pub backend: String,
    pub endpoints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Probe the provider once and describe the result.
pub async fn api_status(provider: &dyn CompletionPort) -> ApiStatus {
    let (connected, health, error) = match provider.health().await {
        Ok(report) => {
            let connected = report.is_ok();
            (connected, serde_json::to_value(&report).ok(), None)
        }
        Err(e) => (false, None, Some(e.to_string())),
    };

    ApiStatus {
        connected,
        backend: provider.label().to_string(),
        endpoints: provider.endpoints(),
        health,
        error,
        timestamp: Utc::now(),
    }
}

/// Probe the provider and tell the user whether replies will be live or
/// simulated.
pub async fn check_backend(provider: &dyn CompletionPort, event_bus: &EventBus) -> bool {
    let status = api_status(provider).await;
    event_bus.emit(ChatEvent::BackendStatus {
        connected: status.connected,
    });

    if status.connected {
        log::info!("{} backend healthy", status.backend);
        event_bus.notify(
            NotificationLevel::Success,
            format!("Connected to {} backend", status.backend),
        );
    } else {
        log::warn!(
            "{} backend unavailable: {}",
            status.backend,
            status.error.as_deref().unwrap_or("unhealthy status")
        );
        event_bus.notify(
            NotificationLevel::Warning,
            format!(
                "{} backend is not connected. Using simulation mode.",
                status.backend
            ),
        );
    }
    status.connected
}
