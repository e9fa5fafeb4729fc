//! Light/dark preference, persisted under `"theme"`.

use std::rc::Rc;
use chat_types::{config::Theme, event::NotificationLevel};
use crate::event_bus::EventBus;
use crate::ports::StoragePort;

pub const THEME_KEY: &str = "theme";

pub struct ThemeManager {
    storage: Rc<dyn StoragePort>,
    event_bus: EventBus,
    current: Theme,
}

impl ThemeManager {
    /// A stored choice wins; otherwise follow the system preference.
    pub fn load(
        storage: Rc<dyn StoragePort>,
        event_bus: EventBus,
        system_preference: Option<Theme>,
    ) -> Self {
        let stored = match storage.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                None
            }
        };
        let current = stored.or(system_preference).unwrap_or_default();
        Self {
            storage,
            event_bus,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.event_bus.notify(
            NotificationLevel::Info,
            format!("Switched to {} mode", self.current.as_str()),
        );
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            log::warn!("Could not save theme preference: {}", e);
        }
    }
}
