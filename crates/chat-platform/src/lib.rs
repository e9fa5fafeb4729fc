//! Browser platform adapters for Palaver.
//!
//! Implements the `chat-core` port traits on top of `localStorage` and
//! `fetch()`, plus a few DOM helpers the app needs.

pub mod browser;
pub mod provider;
pub mod storage;

pub use provider::build_provider;
pub use storage::auto_detect_storage;

#[cfg(test)]
mod tests;
