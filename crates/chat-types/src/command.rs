use serde::{Deserialize, Serialize};

/// Typed user intents. The UI translates raw input into these and the app
/// applies them to the chat manager once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatCommand {
    SendMessage(String),
    NewChat,
    SwitchChat(String),
    DeleteChat(String),
    /// Only queued after the user confirmed the prompt
    ClearChat,
    ExportChat,
    Search(String),
    ToggleTheme,
    CheckBackend,
}
