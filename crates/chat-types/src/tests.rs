#[cfg(test)]
mod tests {
    use crate::command::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::session::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.content, "Hello");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.sender, Sender::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("same");
        let b = Message::user("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
        let json = serde_json::to_string(&Sender::User).unwrap();
        assert_eq!(json, r#""user""#);
    }

    #[test]
    fn test_sender_accepts_legacy_bot() {
        let sender: Sender = serde_json::from_str(r#""bot""#).unwrap();
        assert_eq!(sender, Sender::Assistant);
    }

    #[test]
    fn test_sender_display_names() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::Assistant.display_name(), "Palaver");
    }

    #[test]
    fn test_message_matches_is_case_insensitive() {
        let msg = Message::user("Tell me about Rust");
        assert!(msg.matches("rust"));
        assert!(msg.matches("tell me"));
        assert!(!msg.matches("python"));
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_new_defaults() {
        let session = Session::new();
        assert_eq!(session.title, "New Chat");
        assert!(session.messages.is_empty());
        assert_eq!(session.created_at, session.updated_at);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_session_push_bumps_updated_at() {
        let mut session = Session::with_id("s1");
        let before = session.updated_at;
        let mut msg = Message::user("hi");
        msg.timestamp = before + chrono::Duration::seconds(5);
        session.push(msg);
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.updated_at, before + chrono::Duration::seconds(5));
    }

    #[test]
    fn test_session_recent_window() {
        let mut session = Session::with_id("s1");
        for i in 0..10 {
            session.push(Message::user(format!("m{}", i)));
        }
        let recent = session.recent(6);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].content, "m4");
        assert_eq!(recent[5].content, "m9");
        assert_eq!(session.recent(50).len(), 10);
    }

    #[test]
    fn test_session_first_user_message() {
        let mut session = Session::with_id("s1");
        assert!(session.first_user_message().is_none());
        session.push(Message::assistant("welcome"));
        session.push(Message::user("question"));
        assert_eq!(session.first_user_message(), Some("question"));
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = Session::with_id("abc");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_session_summary() {
        let mut session = Session::with_id("abc");
        session.push(Message::user("x"));
        let summary = session.summary();
        assert_eq!(summary.id, "abc");
        assert_eq!(summary.title, "New Chat");
        assert_eq!(summary.message_count, 1);
    }

    #[test]
    fn test_derive_title_short_unchanged() {
        assert_eq!(derive_title("Hello there"), "Hello there");
    }

    #[test]
    fn test_derive_title_exactly_thirty() {
        let text = "a".repeat(30);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn test_derive_title_truncates_long() {
        let text = "Explain quantum computing in simple terms";
        assert_eq!(derive_title(text), "Explain quantum computing in s...");
    }

    #[test]
    fn test_derive_title_counts_chars_not_bytes() {
        let text = "ü".repeat(31);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "ü".repeat(30)));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.history_window, 6);
        assert_eq!(config.backend.kind, BackendKind::Http);
        assert_eq!(config.backend.health_path, "/api/health");
        assert_eq!(config.backend.chat_path, "/api/chat");
        assert_eq!(config.backend.openai.max_tokens, 500);
        assert!((config.backend.openai.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_backend_urls_join_base() {
        let mut backend = BackendConfig::default();
        assert_eq!(backend.health_url(), "/api/health");
        backend.base_url = "http://localhost:3000/".to_string();
        assert_eq!(backend.chat_url(), "http://localhost:3000/api/chat");
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"backend":{"kind":"Echo"}}"#).unwrap();
        assert_eq!(config.backend.kind, BackendKind::Echo);
        assert_eq!(config.backend.timeout_ms, 10_000);
        assert_eq!(config.history_window, 6);
    }

    #[test]
    fn test_backend_kind_labels() {
        let labels: Vec<&str> = BackendKind::all().iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["HTTP", "OpenAI-compatible", "Echo", "Offline"]);
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
        assert_eq!(Theme::default(), Theme::Light);
    }

    // ─── Event / Command Tests ───────────────────────────────

    #[test]
    fn test_notify_helper() {
        let event = ChatEvent::notify(NotificationLevel::Success, "done");
        assert_eq!(
            event,
            ChatEvent::Notification {
                level: NotificationLevel::Success,
                text: "done".to_string(),
            }
        );
    }

    #[test]
    fn test_command_equality() {
        assert_eq!(
            ChatCommand::SwitchChat("a".to_string()),
            ChatCommand::SwitchChat("a".to_string())
        );
        assert_ne!(ChatCommand::NewChat, ChatCommand::ClearChat);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(ChatError::Timeout(5000).to_string(), "Timeout after 5000ms");
        assert_eq!(
            ChatError::Persistence("quota exceeded".to_string()).to_string(),
            "Persistence error: quota exceeded"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: ChatError = serde_json::from_str::<Session>("not json").unwrap_err().into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
