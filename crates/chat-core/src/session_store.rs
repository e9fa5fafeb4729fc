//! Session Store — mirrors the session collection into the key-value store.

use std::rc::Rc;
use chat_types::{
    ChatError, Result,
    session::SessionCollection,
};
use crate::ports::StoragePort;

pub const CHATS_KEY: &str = "chats";

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }

    /// Read the collection. Missing or malformed data yields an empty one.
    pub fn load(&self) -> SessionCollection {
        let raw = match self.storage.get(CHATS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionCollection::new(),
            Err(e) => {
                log::warn!("Could not read saved chats: {}", e);
                return SessionCollection::new();
            }
        };

        match serde_json::from_str::<SessionCollection>(&raw) {
            Ok(sessions) => {
                // Key by the embedded id; hand-edited stores drift.
                let sessions: SessionCollection = sessions
                    .into_values()
                    .map(|s| (s.id.clone(), s))
                    .collect();
                log::info!(
                    "Loaded {} chats from {}",
                    sessions.len(),
                    self.storage.backend_name()
                );
                sessions
            }
            Err(e) => {
                log::warn!("Saved chats are malformed, starting fresh: {}", e);
                SessionCollection::new()
            }
        }
    }

    /// Overwrite the stored collection.
    pub fn persist(&self, sessions: &SessionCollection) -> Result<()> {
        let json = serde_json::to_string(sessions)?;
        self.storage.set(CHATS_KEY, &json).map_err(|e| {
            log::warn!("Failed to persist chats: {}", e);
            match e {
                ChatError::Persistence(_) => e,
                other => ChatError::Persistence(other.to_string()),
            }
        })
    }
}
