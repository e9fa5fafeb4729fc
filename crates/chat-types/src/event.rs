use serde::{Deserialize, Serialize};

/// Events emitted by the chat manager.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A transient toast for the user
    Notification { level: NotificationLevel, text: String },
    /// A reply is being resolved
    TypingStarted,
    /// The pending reply arrived, or the view was reset
    TypingStopped,
    /// Session list or active session contents changed
    SessionsChanged,
    /// Result of a backend health check
    BackendStatus { connected: bool },
    /// A transcript is ready to be saved
    ExportReady(ChatExport),
}

impl ChatEvent {
    pub fn notify(level: NotificationLevel, text: impl Into<String>) -> Self {
        ChatEvent::Notification {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Plain-text transcript of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExport {
    pub filename: String,
    pub content: String,
}
