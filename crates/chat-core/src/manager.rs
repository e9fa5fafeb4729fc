//! Chat Session Manager — owns the session collection and the send cycle.
//!
//! A send is split in two so no borrow of the manager is held while the
//! reply is being resolved:
//! 1. `begin_send` appends the user message and moves to `AwaitingResponse`
//! 2. the caller awaits the resolver
//! 3. `finish_send` appends the reply to the session bound in step 1
//!
//! `send_message` drives all three for callers holding an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use chrono::{DateTime, Local};
use futures::FutureExt;

use chat_types::{
    APP_NAME, ChatError, Result,
    event::{ChatEvent, ChatExport, NotificationLevel},
    message::{Message, format_time},
    session::{SearchHit, Session, SessionCollection, SessionSummary, derive_title},
};
use crate::event_bus::EventBus;
use crate::resolver::ResponseResolver;
use crate::session_store::SessionStore;

pub const APOLOGY_REPLY: &str = "Sorry, I encountered an unexpected error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    /// A reply is pending for `session_id`
    AwaitingResponse { session_id: String },
}

/// Everything the resolver needs for one outgoing message
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    /// Session the reply will be appended to, fixed at send time
    pub session_id: String,
    pub message: String,
    /// Trailing messages including the one just sent
    pub history: Vec<Message>,
}

pub struct ChatManager {
    sessions: SessionCollection,
    active_id: Option<String>,
    state: ChatState,
    store: SessionStore,
    event_bus: EventBus,
    history_window: usize,
}

impl ChatManager {
    /// Load saved sessions and open a fresh active chat.
    pub fn new(store: SessionStore, event_bus: EventBus, history_window: usize) -> Self {
        let sessions = store.load();
        let mut manager = Self {
            sessions,
            active_id: None,
            state: ChatState::Idle,
            store,
            event_bus,
            history_window,
        };
        manager.open_session();
        manager
    }

    // ─── Queries ─────────────────────────────────────────────

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, ChatState::AwaitingResponse { .. })
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.active_id.as_ref().and_then(|id| self.sessions.get(id))
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn sessions(&self) -> &SessionCollection {
        &self.sessions
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    pub fn set_history_window(&mut self, window: usize) {
        self.history_window = window;
    }

    /// Sessions, most recently touched first. Recomputed on every call.
    pub fn history(&self) -> Vec<SessionSummary> {
        let mut sessions: Vec<&Session> = self.sessions.values().collect();
        sort_recent_first(&mut sessions);
        sessions.into_iter().map(Session::summary).collect()
    }

    /// Messages containing `query` (case-insensitive), grouped by session.
    /// Sessions without a hit are left out. A blank query matches nothing.
    pub fn search_chats(&self, query: &str) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut sessions: Vec<&Session> = self.sessions.values().collect();
        sort_recent_first(&mut sessions);
        sessions
            .into_iter()
            .filter_map(|session| {
                let messages: Vec<Message> = session
                    .messages
                    .iter()
                    .filter(|m| m.matches(&needle))
                    .cloned()
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(SearchHit {
                        session: session.summary(),
                        messages,
                    })
                }
            })
            .collect()
    }

    // ─── Session lifecycle ───────────────────────────────────

    pub fn create_new_chat(&mut self) -> String {
        self.persist();
        let id = self.open_session();
        self.event_bus.emit(ChatEvent::TypingStopped);
        self.event_bus.emit(ChatEvent::SessionsChanged);
        self.event_bus.notify(NotificationLevel::Success, "New chat started");
        id
    }

    fn open_session(&mut self) -> String {
        let session = Session::new();
        let id = session.id.clone();
        log::debug!("Opened chat {}", id);
        self.sessions.insert(id.clone(), session);
        self.active_id = Some(id.clone());
        id
    }

    /// Make `id` the active session. Unknown or already active ids are ignored.
    pub fn switch_chat(&mut self, id: &str) -> bool {
        if self.active_id.as_deref() == Some(id) || !self.sessions.contains_key(id) {
            return false;
        }
        self.persist();
        self.active_id = Some(id.to_string());
        self.event_bus.emit(ChatEvent::SessionsChanged);
        true
    }

    /// Remove a session. Deleting the active one opens a new chat.
    pub fn delete_chat(&mut self, id: &str) -> bool {
        if self.sessions.remove(id).is_none() {
            return false;
        }
        self.persist();

        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
            self.create_new_chat();
        }

        log::info!("Deleted chat {}", id);
        self.event_bus.emit(ChatEvent::SessionsChanged);
        self.event_bus.notify(NotificationLevel::Success, "Chat deleted");
        true
    }

    /// Empty the active session. Does nothing unless the user confirmed.
    pub fn clear_current_chat(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let Some(session) = self.active_id.as_ref().and_then(|id| self.sessions.get_mut(id)) else {
            return false;
        };
        session.messages.clear();
        self.persist();
        self.event_bus.emit(ChatEvent::SessionsChanged);
        self.event_bus.notify(NotificationLevel::Success, "Chat cleared");
        true
    }

    // ─── Send cycle ──────────────────────────────────────────

    /// Append the user's message and bind a pending reply to the active
    /// session. Returns `None` for blank text or while a reply is pending.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }

        let session_id = self.active_id.clone()?;
        let session = self.sessions.get_mut(&session_id)?;
        session.push(Message::user(text));
        let history = session.recent(self.history_window).to_vec();

        self.state = ChatState::AwaitingResponse {
            session_id: session_id.clone(),
        };
        self.persist();
        self.event_bus.emit(ChatEvent::SessionsChanged);
        self.event_bus.emit(ChatEvent::TypingStarted);

        Some(PendingReply {
            session_id,
            message: text.to_string(),
            history,
        })
    }

    /// Apply a resolved reply. An `Err` is an unexpected internal fault
    /// and is shown to the user as an apology.
    pub fn finish_send(&mut self, pending: PendingReply, outcome: Result<String>) {
        let text = match outcome {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::error!("Resolver produced an empty reply");
                APOLOGY_REPLY.to_string()
            }
            Err(e) => {
                log::error!("Chat error: {}", e);
                APOLOGY_REPLY.to_string()
            }
        };

        self.state = ChatState::Idle;

        match self.sessions.get_mut(&pending.session_id) {
            Some(session) => {
                session.push(Message::assistant(text));
                if session.messages.len() == 2 {
                    if let Some(title) = session.first_user_message().map(derive_title) {
                        session.title = title;
                    }
                }
            }
            None => {
                log::warn!(
                    "Chat {} was deleted before its reply arrived; reply dropped",
                    pending.session_id
                );
            }
        }

        self.persist();
        self.event_bus.emit(ChatEvent::TypingStopped);
        self.event_bus.emit(ChatEvent::SessionsChanged);
    }

    // ─── Export ──────────────────────────────────────────────

    /// Plain-text transcript of the active session, or `None` (with a
    /// notice) when there is nothing to export.
    pub fn export_chat(&self, backend_label: &str, now: DateTime<Local>) -> Option<ChatExport> {
        let Some(session) = self.active_session().filter(|s| !s.messages.is_empty()) else {
            self.event_bus.notify(NotificationLevel::Error, "No messages to export");
            return None;
        };

        let mut content = format!("{} Chat Export\n", APP_NAME);
        content.push_str(&format!("Date: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
        content.push_str(&format!("Chat: {}\n", session.title));
        content.push_str(&format!("Backend: {}\n\n", backend_label));
        content.push_str(&"=".repeat(50));
        content.push_str("\n\n");

        for message in &session.messages {
            content.push_str(&format!(
                "{} ({}):\n{}\n\n",
                message.sender.display_name(),
                format_time(message.timestamp),
                message.content
            ));
        }

        let export = ChatExport {
            filename: format!(
                "{}-chat-{}.txt",
                APP_NAME.to_lowercase(),
                now.format("%Y-%m-%d")
            ),
            content,
        };

        log::info!("Exported chat {} as {}", session.id, export.filename);
        self.event_bus.emit(ChatEvent::ExportReady(export.clone()));
        Some(export)
    }

    // ─── Persistence ─────────────────────────────────────────

    /// Save everything; a failure becomes a warning toast, never an error.
    fn persist(&self) {
        if let Err(e) = self.store.persist(&self.sessions) {
            self.event_bus
                .notify(NotificationLevel::Warning, format!("Could not save chats: {}", e));
        }
    }
}

fn sort_recent_first(sessions: &mut [&Session]) {
    sessions.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Run one full send: append the user message, resolve a reply, append it.
///
/// Returns `false` when the send was rejected (blank text or a reply
/// already pending). A panic inside the resolver is caught and shown as an
/// apology instead of tearing down the caller.
pub async fn send_message(
    manager: &Rc<RefCell<ChatManager>>,
    resolver: &ResponseResolver,
    text: &str,
) -> bool {
    let pending = manager.borrow_mut().begin_send(text);
    let Some(pending) = pending else {
        return false;
    };

    let outcome = AssertUnwindSafe(resolver.resolve(&pending.message, &pending.history))
        .catch_unwind()
        .await
        .map_err(|panic| ChatError::InternalFault(panic_message(panic.as_ref())));

    manager.borrow_mut().finish_send(pending, outcome);
    true
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "resolver panicked".to_string()
    }
}
