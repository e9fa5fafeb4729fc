//! UI-level state that drives rendering.
//! This is a read-only projection of the chat manager's output,
//! updated each frame by draining the EventBus.

use chat_types::config::Theme;
use chat_types::event::{ChatEvent, ChatExport, NotificationLevel};
use chat_types::session::SearchHit;

/// Seconds a toast stays on screen
pub const TOAST_SECONDS: f64 = 3.0;
/// Warnings and errors linger longer
pub const TOAST_SECONDS_LONG: f64 = 5.0;

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Typing indicator for the displayed chat
    pub typing: bool,
    /// The manager is awaiting a reply; mirrored from `ChatManager::is_busy`
    /// each frame. Gates sending even when the indicator is hidden.
    pub busy: bool,
    /// Last health check result; `None` until the first one finishes
    pub backend_connected: Option<bool>,
    /// Live toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Sidebar search box content
    pub search_query: String,
    /// Hits for `search_query`, refreshed when sessions change
    pub search_results: Option<Vec<SearchHit>>,
    /// Set by `SessionsChanged`; the app re-runs the search and clears it
    pub sessions_dirty: bool,
    /// Clear-chat confirmation dialog is open
    pub confirm_clear: bool,
    /// Session awaiting delete confirmation
    pub confirm_delete: Option<String>,
    /// Whether settings panel is open
    pub show_settings: bool,
    pub theme: Theme,
    exports: Vec<ChatExport>,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: NotificationLevel,
    pub text: String,
    /// egui time (seconds) after which the toast is dropped
    pub expires_at: f64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            typing: false,
            busy: false,
            backend_connected: None,
            toasts: Vec::new(),
            search_query: String::new(),
            search_results: None,
            sessions_dirty: false,
            confirm_clear: false,
            confirm_delete: None,
            show_settings: false,
            theme: Theme::Light,
            exports: Vec::new(),
        }
    }

    /// Process events from the EventBus and update UI state.
    /// `now` is the current egui time in seconds.
    pub fn process_events(&mut self, events: Vec<ChatEvent>, now: f64) {
        for event in events {
            match event {
                ChatEvent::Notification { level, text } => {
                    self.push_toast(level, text, now);
                }
                ChatEvent::TypingStarted => {
                    self.typing = true;
                }
                ChatEvent::TypingStopped => {
                    self.typing = false;
                }
                ChatEvent::SessionsChanged => {
                    self.sessions_dirty = true;
                }
                ChatEvent::BackendStatus { connected } => {
                    self.backend_connected = Some(connected);
                }
                ChatEvent::ExportReady(export) => {
                    self.exports.push(export);
                }
            }
        }
    }

    pub fn push_toast(&mut self, level: NotificationLevel, text: impl Into<String>, now: f64) {
        let ttl = match level {
            NotificationLevel::Warning | NotificationLevel::Error => TOAST_SECONDS_LONG,
            NotificationLevel::Info | NotificationLevel::Success => TOAST_SECONDS,
        };
        self.toasts.push(Toast {
            level,
            text: text.into(),
            expires_at: now + ttl,
        });
    }

    /// Drop toasts whose time is up
    pub fn prune_toasts(&mut self, now: f64) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Exports waiting to be handed to the browser
    pub fn take_exports(&mut self) -> Vec<ChatExport> {
        std::mem::take(&mut self.exports)
    }

    /// Take the trimmed input if it can be sent, clearing the field
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() || self.busy {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }

    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.busy
    }

    /// Status line text
    pub fn status_text(&self) -> &'static str {
        if self.busy {
            "Thinking..."
        } else {
            "Ready"
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    pub fn backend_label(&self) -> &'static str {
        match self.backend_connected {
            Some(true) => "Connected",
            Some(false) => "Simulation mode",
            None => "Checking...",
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
