pub mod message;
pub mod event;
pub mod command;
pub mod config;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::ChatError;

pub type Result<T> = std::result::Result<T, ChatError>;

/// Product name shown in exports and as the assistant's display name
pub const APP_NAME: &str = "Palaver";
