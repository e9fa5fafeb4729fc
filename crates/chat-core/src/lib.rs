//! Chat core — session manager, response resolver, and the port traits the
//! browser adapters implement. Nothing here touches web APIs.

pub mod commands;
pub mod config_store;
pub mod event_bus;
pub mod fallback;
pub mod manager;
pub mod ports;
pub mod resolver;
pub mod session_store;
pub mod status;
pub mod theme;
