//! WASM-target tests for chat-platform (Node.js runtime).
//!
//! Tests MemoryStorage, the in-process providers and the request deadline
//! under wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and download tests need a browser and are not run here.

use wasm_bindgen_test::*;

use chat_core::ports::{CompletionPort, StoragePort};
use chat_platform::provider::echo::{EchoProvider, OfflineProvider};
use chat_platform::provider::timeout::with_timeout;
use chat_platform::storage::MemoryStorage;
use chat_types::{ChatError, Result};

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    assert!(storage.get("nonexistent").unwrap().is_none());
}

#[wasm_bindgen_test]
fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("theme", "light").unwrap();
    storage.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

// ─── Provider Tests ──────────────────────────────────────

#[wasm_bindgen_test]
async fn echo_provider_replies() {
    let body = EchoProvider.complete("hi", &[]).await.unwrap();
    assert_eq!(body.into_text().unwrap(), "You said: \"hi\"");
}

#[wasm_bindgen_test]
async fn offline_provider_is_unavailable() {
    let result = OfflineProvider.health().await;
    assert!(matches!(result, Err(ChatError::ProviderUnavailable(_))));
}

// ─── Timeout Tests ───────────────────────────────────────

#[wasm_bindgen_test]
async fn timeout_fires_for_pending_future() {
    let result: Result<()> = with_timeout(10, futures::future::pending()).await;
    assert_eq!(result, Err(ChatError::Timeout(10)));
}

#[wasm_bindgen_test]
async fn timeout_passes_through_ready_future() {
    let result = with_timeout(1_000, async { Ok(42) }).await;
    assert_eq!(result, Ok(42));
}
