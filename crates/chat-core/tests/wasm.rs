//! WASM-target tests for chat-core.
//!
//! Runs the fallback table, EventBus, and the manager send cycle under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::event_bus::EventBus;
use chat_core::fallback::FallbackResponder;
use chat_core::manager::{ChatManager, ChatState, send_message};
use chat_core::ports::*;
use chat_core::resolver::ResponseResolver;
use chat_core::session_store::SessionStore;
use chat_types::event::ChatEvent;
use chat_types::message::{Message, Sender};
use chat_types::{ChatError, Result};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;

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

struct DownProvider;

#[async_trait(?Send)]
impl CompletionPort for DownProvider {
    async fn health(&self) -> Result<HealthReport> {
        Err(ChatError::Network("offline".to_string()))
    }

    async fn complete(&self, _message: &str, _history: &[Message]) -> Result<CompletionBody> {
        Err(ChatError::Network("offline".to_string()))
    }

    fn label(&self) -> &str {
        "Down"
    }
}

fn manager() -> Rc<RefCell<ChatManager>> {
    let store = SessionStore::new(Rc::new(MapStorage::default()));
    Rc::new(RefCell::new(ChatManager::new(store, EventBus::new(), 6)))
}

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(ChatEvent::TypingStarted);
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
}

#[wasm_bindgen_test]
fn fallback_greeting() {
    let reply = FallbackResponder::new().reply("hello");
    assert!(reply.starts_with("Hello! I'm Palaver"));
}

#[wasm_bindgen_test]
async fn send_with_provider_down_uses_fallback() {
    let manager = manager();
    let resolver = ResponseResolver::new(Rc::new(DownProvider));

    assert!(send_message(&manager, &resolver, "hello").await);

    let m = manager.borrow();
    let messages = &m.active_session().unwrap().messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::Assistant);
    assert!(messages[1].content.starts_with("Hello!"));
    assert_eq!(m.state(), &ChatState::Idle);
}

#[wasm_bindgen_test]
async fn blank_send_is_rejected() {
    let manager = manager();
    let resolver = ResponseResolver::new(Rc::new(DownProvider));
    assert!(!send_message(&manager, &resolver, "  ").await);
    assert!(manager.borrow().active_session().unwrap().messages.is_empty());
}
