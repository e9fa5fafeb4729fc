//! Backend configuration, persisted under `"config"`.

use std::rc::Rc;
use chat_types::{config::ChatConfig, Result};
use crate::ports::StoragePort;

pub const CONFIG_KEY: &str = "config";

#[derive(Clone)]
pub struct ConfigStore {
    storage: Rc<dyn StoragePort>,
}

impl ConfigStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// The saved configuration, or the defaults when none is readable.
    pub fn load(&self) -> ChatConfig {
        match self.storage.get(CONFIG_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Config restored from {}", self.storage.backend_name());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable config: {}", e);
                    ChatConfig::default()
                }
            },
            Ok(None) => ChatConfig::default(),
            Err(e) => {
                log::warn!("Could not read config: {}", e);
                ChatConfig::default()
            }
        }
    }

    pub fn save(&self, config: &ChatConfig) -> Result<()> {
        let json = serde_json::to_string(config)?;
        self.storage.set(CONFIG_KEY, &json)?;
        log::info!("Config saved to {}", self.storage.backend_name());
        Ok(())
    }

    /// Forget the saved configuration and return the defaults.
    pub fn reset(&self) -> Result<ChatConfig> {
        self.storage.remove(CONFIG_KEY)?;
        log::info!("Config reset to defaults");
        Ok(ChatConfig::default())
    }
}
