//! Global keyboard shortcuts.

use chat_core::commands::CommandQueue;
use chat_types::command::ChatCommand;
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K / Cmd+K
    NewChat,
    /// Escape
    ClearInput,
}

/// Read this frame's key presses.
pub fn pressed(ctx: &egui::Context) -> Vec<Shortcut> {
    ctx.input_mut(|i| {
        let mut found = Vec::new();
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::K) {
            found.push(Shortcut::NewChat);
        }
        if i.key_pressed(egui::Key::Escape) {
            found.push(Shortcut::ClearInput);
        }
        found
    })
}

pub fn apply(shortcut: Shortcut, state: &mut UiState, commands: &CommandQueue) {
    log::debug!("Shortcut: {:?}", shortcut);
    match shortcut {
        Shortcut::NewChat => commands.submit(ChatCommand::NewChat),
        Shortcut::ClearInput => {
            state.input_text.clear();
            state.confirm_clear = false;
            state.confirm_delete = None;
        }
    }
}

pub fn handle_shortcuts(ctx: &egui::Context, state: &mut UiState, commands: &CommandQueue) {
    for shortcut in pressed(ctx) {
        apply(shortcut, state, commands);
    }
}
