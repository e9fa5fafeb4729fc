pub mod chat;
pub mod settings;
pub mod sidebar;
pub mod toasts;
