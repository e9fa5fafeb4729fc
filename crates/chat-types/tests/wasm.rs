//! WASM-target tests for chat-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_types::config::*;
use chat_types::message::*;
use chat_types::session::*;

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.sender, Sender::User);
    assert_eq!(msg.content, "Hello");
}

#[wasm_bindgen_test]
fn session_roundtrip_keeps_order() {
    let mut session = Session::with_id("s1");
    session.push(Message::user("first"));
    session.push(Message::assistant("second"));

    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back.messages.len(), 2);
    assert_eq!(back.messages[0].content, "first");
    assert_eq!(back.messages[1].sender, Sender::Assistant);
}

#[wasm_bindgen_test]
fn derive_title_truncates() {
    let title = derive_title("This message is definitely longer than thirty characters");
    assert!(title.ends_with("..."));
    assert_eq!(title.chars().count(), 33);
}

#[wasm_bindgen_test]
fn theme_toggle() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[wasm_bindgen_test]
fn uuid_available_under_wasm() {
    // uuid's `js` feature must be enabled for v4 on wasm32
    let a = Session::new();
    let b = Session::new();
    assert_ne!(a.id, b.id);
}
