#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use futures::executor::block_on;

    use chat_core::event_bus::EventBus;
    use chat_core::ports::*;
    use chat_core::resolver::{ReplySource, ResponseResolver};
    use chat_core::session_store::SessionStore;
    use chat_core::status::{api_status, check_backend};
    use chat_types::config::{BackendConfig, BackendKind, OpenAiConfig};
    use chat_types::event::ChatEvent;
    use chat_types::message::Message;
    use chat_types::session::{Session, SessionCollection};
    use chat_types::ChatError;

    use crate::provider::echo::{EchoProvider, OfflineProvider};
    use crate::provider::http::ChatRequestBody;
    use crate::provider::openai_compat::{build_request_body, OpenAiCompatProvider};
    use crate::provider::build_provider;
    use crate::storage::MemoryStorage;

    // ─── MemoryStorage ───────────────────────────────────────

    #[test]
    fn memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("chats").unwrap(), None);

        storage.set("chats", "{}").unwrap();
        assert_eq!(storage.get("chats").unwrap().as_deref(), Some("{}"));

        storage.set("chats", "{\"a\":1}").unwrap();
        assert_eq!(storage.get("chats").unwrap().as_deref(), Some("{\"a\":1}"));

        storage.remove("chats").unwrap();
        assert_eq!(storage.get("chats").unwrap(), None);
        assert_eq!(storage.backend_name(), "memory");
    }

    #[test]
    fn session_store_round_trips_through_memory_storage() {
        let store = SessionStore::new(Rc::new(MemoryStorage::new()));

        let mut session = Session::new();
        session.push(Message::user("hi there"));
        let mut sessions = SessionCollection::new();
        sessions.insert(session.id.clone(), session.clone());

        store.persist(&sessions).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&session.id].messages[0].content, "hi there");
    }

    // ─── Request bodies ──────────────────────────────────────

    #[test]
    fn http_request_body_uses_camel_case_history() {
        let history = vec![Message::user("hello"), Message::assistant("Hi!")];
        let body = serde_json::to_value(ChatRequestBody::new("how are you", &history)).unwrap();

        assert_eq!(body["message"], "how are you");
        let entries = body["chatHistory"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["sender"], "user");
        assert_eq!(entries[1]["sender"], "assistant");
        assert_eq!(entries[1]["content"], "Hi!");
    }

    #[test]
    fn openai_body_has_system_prompt_and_message_last() {
        let config = OpenAiConfig::default();
        let history = vec![Message::user("hello"), Message::assistant("Hi!")];
        let body = build_request_body(&config, "tell me a joke", &history);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are a helpful AI assistant.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["content"], "tell me a joke");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["model"], "gpt-3.5-turbo");
    }

    #[test]
    fn openai_body_drops_trailing_duplicate_of_message() {
        let config = OpenAiConfig::default();
        let history = vec![Message::assistant("Hi!"), Message::user("again")];
        let body = build_request_body(&config, "again", &history);

        let messages = body["messages"].as_array().unwrap();
        // system, assistant, user
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2]["content"], "again");
    }

    // ─── Providers ───────────────────────────────────────────

    #[test]
    fn echo_provider_is_healthy_and_echoes() {
        let provider = EchoProvider;
        assert!(block_on(provider.health()).unwrap().is_ok());

        let body = block_on(provider.complete("ping", &[])).unwrap();
        assert!(body.timestamp.is_some());
        assert_eq!(body.into_text().unwrap(), "You said: \"ping\"");
    }

    #[test]
    fn offline_provider_forces_fallback() {
        let resolver = ResponseResolver::new(Rc::new(OfflineProvider));
        let resolution = block_on(resolver.resolve_detailed("hello", &[]));
        assert_eq!(resolution.source, ReplySource::Fallback);
        assert_eq!(
            resolution.text,
            "Hello! I'm Palaver, your AI assistant. How can I help you today?"
        );
    }

    #[test]
    fn echo_provider_is_used_by_resolver() {
        let resolver = ResponseResolver::new(Rc::new(EchoProvider));
        let resolution = block_on(resolver.resolve_detailed("hello", &[]));
        assert_eq!(resolution.source, ReplySource::Provider);
        assert_eq!(resolution.text, "You said: \"hello\"");
    }

    #[test]
    fn openai_health_requires_api_key() {
        let provider = OpenAiCompatProvider::new(OpenAiConfig::default(), 1_000);
        assert!(matches!(block_on(provider.health()), Err(ChatError::Config(_))));

        let config = OpenAiConfig {
            api_key: "sk-test".to_string(),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiCompatProvider::new(config, 1_000);
        assert!(block_on(provider.health()).unwrap().is_ok());
        assert_eq!(
            provider.endpoints(),
            vec!["https://api.openai.com/v1/chat/completions".to_string()]
        );
    }

    #[test]
    fn build_provider_follows_kind() {
        let mut config = BackendConfig::default();
        for kind in BackendKind::all() {
            config.kind = *kind;
            let provider = build_provider(&config);
            assert_eq!(provider.label(), kind.label());
        }
    }

    #[test]
    fn http_provider_lists_configured_endpoints() {
        let config = BackendConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..BackendConfig::default()
        };
        let provider = build_provider(&config);
        assert_eq!(
            provider.endpoints(),
            vec![
                "http://localhost:3000/api/health".to_string(),
                "http://localhost:3000/api/chat".to_string(),
            ]
        );
    }

    // ─── Status ──────────────────────────────────────────────

    #[test]
    fn check_backend_reports_offline() {
        let bus = EventBus::new();
        assert!(!block_on(check_backend(&OfflineProvider, &bus)));

        let events = bus.drain();
        assert!(events
            .iter()
            .any(|e| matches!(e, ChatEvent::BackendStatus { connected: false })));
    }

    #[test]
    fn api_status_for_echo_is_connected() {
        let status = block_on(api_status(&EchoProvider));
        assert!(status.connected);
        assert_eq!(status.backend, "Echo");
        assert!(status.error.is_none());
    }
}
