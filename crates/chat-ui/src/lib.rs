//! egui panels for Palaver.
//!
//! Panels read the manager's state and push `ChatCommand`s onto the
//! `CommandQueue`; they never mutate sessions directly.

pub mod panels;
pub mod shortcuts;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
