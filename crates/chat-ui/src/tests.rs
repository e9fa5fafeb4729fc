#[cfg(test)]
mod tests {
    use crate::panels::chat::QUICK_ACTIONS;
    use crate::panels::settings::kind_description;
    use crate::shortcuts::{apply, Shortcut};
    use crate::state::*;
    use crate::theme::{palette, DARK, LIGHT};
    use chat_core::commands::CommandQueue;
    use chat_types::command::ChatCommand;
    use chat_types::config::{BackendKind, Theme};
    use chat_types::event::{ChatEvent, ChatExport, NotificationLevel};
    use chat_types::Result;
    use chat_core::event_bus::EventBus;
    use chat_core::manager::ChatManager;
    use chat_core::ports::StoragePort;
    use chat_core::session_store::SessionStore;

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct MapStorage {
        data: RefCell<HashMap<String, String>>,
    }

    impl StoragePort for MapStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.data.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.data.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.data.borrow_mut().remove(key);
            Ok(())
        }

        fn backend_name(&self) -> &str {
            "map"
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(!state.typing);
        assert!(state.toasts.is_empty());
        assert_eq!(state.backend_connected, None);
        assert!(!state.show_settings);
        assert!(!state.confirm_clear);
        assert!(!state.busy);
        assert_eq!(state.status_text(), "Ready");
        assert_eq!(state.backend_label(), "Checking...");
    }

    #[test]
    fn test_ui_state_typing_events() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::TypingStarted], 0.0);
        assert!(state.typing);

        state.process_events(vec![ChatEvent::TypingStopped], 1.0);
        assert!(!state.typing);
    }

    #[test]
    fn test_ui_state_sessions_changed_marks_dirty() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::SessionsChanged], 0.0);
        assert!(state.sessions_dirty);
    }

    #[test]
    fn test_ui_state_backend_status() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::BackendStatus { connected: false }], 0.0);
        assert_eq!(state.backend_connected, Some(false));
        assert_eq!(state.backend_label(), "Simulation mode");

        state.process_events(vec![ChatEvent::BackendStatus { connected: true }], 0.0);
        assert_eq!(state.backend_label(), "Connected");
    }

    #[test]
    fn test_ui_state_exports_are_taken_once() {
        let mut state = UiState::new();
        let export = ChatExport {
            filename: "palaver-chat-2024-01-01.txt".to_string(),
            content: "body".to_string(),
        };
        state.process_events(vec![ChatEvent::ExportReady(export.clone())], 0.0);

        assert_eq!(state.take_exports(), vec![export]);
        assert!(state.take_exports().is_empty());
    }

    // ─── Toast Tests ─────────────────────────────────────────

    #[test]
    fn test_toast_expiry() {
        let mut state = UiState::new();
        state.process_events(
            vec![
                ChatEvent::notify(NotificationLevel::Success, "New chat started"),
                ChatEvent::notify(NotificationLevel::Warning, "Could not save chats"),
            ],
            10.0,
        );
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].expires_at, 10.0 + TOAST_SECONDS);
        assert_eq!(state.toasts[1].expires_at, 10.0 + TOAST_SECONDS_LONG);

        state.prune_toasts(10.0 + TOAST_SECONDS + 0.1);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].level, NotificationLevel::Warning);

        state.prune_toasts(100.0);
        assert!(state.toasts.is_empty());
    }

    // ─── Input Tests ─────────────────────────────────────────

    #[test]
    fn test_take_input_trims_and_clears() {
        let mut state = UiState::new();
        state.input_text = "  hello  ".to_string();
        assert!(state.can_send());
        assert_eq!(state.take_input().as_deref(), Some("hello"));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_input_rejects_blank() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert!(!state.can_send());
        assert_eq!(state.take_input(), None);
    }

    #[test]
    fn test_take_input_blocked_while_busy() {
        let mut state = UiState::new();
        state.busy = true;
        state.input_text = "hello".to_string();
        assert!(!state.can_send());
        assert_eq!(state.take_input(), None);
        assert_eq!(state.input_text, "hello");
        assert_eq!(state.status_text(), "Thinking...");
    }

    #[test]
    fn test_pending_reply_still_blocks_send_after_new_chat() {
        let bus = EventBus::new();
        let store = SessionStore::new(Rc::new(MapStorage::default()));
        let mut manager = ChatManager::new(store, bus.clone(), 6);
        let mut state = UiState::new();
        state.process_events(bus.drain(), 0.0);

        let pending = manager.begin_send("first");
        assert!(pending.is_some());
        manager.create_new_chat();

        state.process_events(bus.drain(), 1.0);
        state.busy = manager.is_busy();
        // The indicator belongs to the chat that was left
        assert!(!state.typing);

        state.input_text = "second question".to_string();
        assert!(!state.can_send());
        assert_eq!(state.take_input(), None);
        assert_eq!(state.input_text, "second question");
        assert!(manager.active_session().unwrap().messages.is_empty());
    }

    // ─── Shortcut Tests ──────────────────────────────────────

    #[test]
    fn test_shortcut_new_chat_submits_command() {
        let mut state = UiState::new();
        let commands = CommandQueue::new();
        apply(Shortcut::NewChat, &mut state, &commands);
        assert_eq!(commands.drain(), vec![ChatCommand::NewChat]);
    }

    #[test]
    fn test_shortcut_escape_clears_input_and_dialogs() {
        let mut state = UiState::new();
        let commands = CommandQueue::new();
        state.input_text = "draft".to_string();
        state.confirm_clear = true;
        state.confirm_delete = Some("abc".to_string());

        apply(Shortcut::ClearInput, &mut state, &commands);
        assert!(state.input_text.is_empty());
        assert!(!state.confirm_clear);
        assert!(state.confirm_delete.is_none());
        assert!(commands.is_empty());
    }

    // ─── Theme / Panels ──────────────────────────────────────

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(palette(Theme::Light), &LIGHT);
        assert_eq!(palette(Theme::Dark), &DARK);
        assert_ne!(LIGHT.bg_primary, DARK.bg_primary);
    }

    #[test]
    fn test_quick_actions() {
        assert_eq!(QUICK_ACTIONS.len(), 4);
        assert!(QUICK_ACTIONS.iter().all(|(label, prompt)| !label.is_empty() && !prompt.is_empty()));
    }

    #[test]
    fn test_every_backend_kind_is_described() {
        for kind in BackendKind::all() {
            assert!(!kind_description(*kind).is_empty());
        }
    }
}
