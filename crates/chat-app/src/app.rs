//! Main egui application — composes all panels and owns the chat manager.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::commands::CommandQueue;
use chat_core::config_store::ConfigStore;
use chat_core::event_bus::EventBus;
use chat_core::manager::{send_message, ChatManager};
use chat_core::resolver::ResponseResolver;
use chat_core::session_store::SessionStore;
use chat_core::status::check_backend;
use chat_core::theme::ThemeManager;
use chat_platform::browser::{download_text, system_theme};
use chat_platform::{auto_detect_storage, build_provider};
use chat_types::command::ChatCommand;
use chat_types::config::{ChatConfig, Theme};
use chat_types::event::NotificationLevel;
use chat_types::APP_NAME;
use chat_ui::panels::settings::{SaveFeedback, SettingsAction};
use chat_ui::panels::{chat, settings, sidebar, toasts};
use chat_ui::shortcuts;
use chat_ui::state::UiState;
use chat_ui::theme;

/// The main application state
pub struct PalaverApp {
    ui_state: UiState,
    /// Configuration in effect
    config: ChatConfig,
    /// Copy edited by the settings panel until Save
    draft_config: ChatConfig,
    save_feedback: Option<SaveFeedback>,
    event_bus: EventBus,
    commands: CommandQueue,
    manager: Rc<RefCell<ChatManager>>,
    resolver: Rc<ResponseResolver>,
    theme: ThemeManager,
    config_store: ConfigStore,
    applied_theme: Option<Theme>,
}

impl PalaverApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let storage = auto_detect_storage();
        let config_store = ConfigStore::new(storage.clone());
        let config = config_store.load();
        let event_bus = EventBus::new();

        let store = SessionStore::new(storage.clone());
        let manager = ChatManager::new(store, event_bus.clone(), config.history_window);
        let resolver = ResponseResolver::new(build_provider(&config.backend));
        let theme = ThemeManager::load(storage.clone(), event_bus.clone(), system_theme());

        let mut ui_state = UiState::new();
        ui_state.theme = theme.current();

        let commands = CommandQueue::new();
        commands.submit(ChatCommand::CheckBackend);
        event_bus.notify(
            NotificationLevel::Info,
            format!("Welcome to {}! Start by typing a message.", APP_NAME),
        );

        log::info!("{} ready ({} storage)", APP_NAME, storage.backend_name());

        Self {
            ui_state,
            draft_config: config.clone(),
            config,
            save_feedback: None,
            event_bus,
            commands,
            manager: Rc::new(RefCell::new(manager)),
            resolver: Rc::new(resolver),
            theme,
            config_store,
            applied_theme: None,
        }
    }

    fn dispatch(&mut self, command: ChatCommand, ctx: &egui::Context) {
        match command {
            ChatCommand::SendMessage(text) => {
                // The spawned task has not run begin_send yet
                self.ui_state.busy = true;
                self.dispatch_message(text, ctx);
            }
            ChatCommand::NewChat => {
                self.manager.borrow_mut().create_new_chat();
            }
            ChatCommand::SwitchChat(id) => {
                self.manager.borrow_mut().switch_chat(&id);
            }
            ChatCommand::DeleteChat(id) => {
                self.manager.borrow_mut().delete_chat(&id);
            }
            ChatCommand::ClearChat => {
                // The panel only submits this after its confirmation dialog
                self.manager.borrow_mut().clear_current_chat(true);
            }
            ChatCommand::ExportChat => {
                // Delivered through ExportReady
                self.manager
                    .borrow()
                    .export_chat(self.resolver.label(), Local::now());
            }
            ChatCommand::Search(query) => {
                self.ui_state.search_query = query;
                self.refresh_search();
            }
            ChatCommand::ToggleTheme => {
                self.ui_state.theme = self.theme.toggle();
            }
            ChatCommand::CheckBackend => self.dispatch_health_check(ctx),
        }
    }

    /// Resolve a reply in the background; the manager rejects it if busy
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let manager = self.manager.clone();
        let resolver = self.resolver.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if !send_message(&manager, &resolver, &text).await {
                log::debug!("Send ignored: blank text or reply pending");
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_health_check(&self, ctx: &egui::Context) {
        let provider = self.resolver.provider();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            check_backend(provider.as_ref(), &event_bus).await;
            ctx.request_repaint();
        });
    }

    fn refresh_search(&mut self) {
        self.ui_state.search_results = if self.ui_state.is_searching() {
            Some(self.manager.borrow().search_chats(&self.ui_state.search_query))
        } else {
            None
        };
    }

    /// Rebuild the resolver and history window from `self.config`
    fn apply_config(&mut self) {
        self.resolver = Rc::new(ResponseResolver::new(build_provider(&self.config.backend)));
        self.manager
            .borrow_mut()
            .set_history_window(self.config.history_window);
    }

    fn save_settings(&mut self, ctx: &egui::Context) {
        let result = self.config_store.save(&self.draft_config);
        self.config = self.draft_config.clone();
        self.apply_config();

        self.save_feedback = Some(match result {
            Ok(()) => SaveFeedback {
                message: "Saved".to_string(),
                success: true,
            },
            Err(e) => SaveFeedback {
                message: format!("Applied, but not saved: {}", e),
                success: false,
            },
        });
        self.event_bus
            .notify(NotificationLevel::Success, "API configuration updated");
        self.dispatch_health_check(ctx);
    }

    fn reset_settings(&mut self, ctx: &egui::Context) {
        match self.config_store.reset() {
            Ok(defaults) => {
                self.config = defaults;
                self.draft_config = self.config.clone();
                self.apply_config();
                self.save_feedback = Some(SaveFeedback {
                    message: "Defaults restored".to_string(),
                    success: true,
                });
                self.event_bus
                    .notify(NotificationLevel::Success, "API configuration reset");
                self.dispatch_health_check(ctx);
            }
            Err(e) => {
                log::error!("Config reset failed: {}", e);
                self.save_feedback = Some(SaveFeedback {
                    message: format!("Reset failed: {}", e),
                    success: false,
                });
            }
        }
    }

    fn deliver_exports(&mut self) {
        for export in self.ui_state.take_exports() {
            match download_text(&export.filename, &export.content) {
                Ok(()) => self
                    .event_bus
                    .notify(NotificationLevel::Success, "Chat exported successfully"),
                Err(e) => {
                    log::error!("Export failed: {}", e);
                    self.event_bus
                        .notify(NotificationLevel::Error, format!("Export failed: {}", e));
                }
            }
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events, now);
            ctx.request_repaint();
        }
        if self.ui_state.sessions_dirty {
            self.ui_state.sessions_dirty = false;
            self.refresh_search();
        }
        self.ui_state.prune_toasts(now);
    }
}

impl eframe::App for PalaverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.ui_state.theme) {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.applied_theme = Some(self.ui_state.theme);
        }

        // A pending reply blocks sending even when another chat is shown
        self.ui_state.busy = self.manager.borrow().is_busy();

        shortcuts::handle_shortcuts(ctx, &mut self.ui_state, &self.commands);

        // Apply commands queued by last frame's panels
        for command in self.commands.drain() {
            self.dispatch(command, ctx);
        }

        // Exports emit a notification, so deliver them before draining
        self.drain_events(ctx);
        self.deliver_exports();
        self.drain_events(ctx);

        if self.ui_state.busy || !self.ui_state.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        let p = theme::palette(self.ui_state.theme);

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(APP_NAME)
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                let status_color = match self.ui_state.backend_connected {
                    Some(true) => theme::SUCCESS,
                    Some(false) => theme::WARNING,
                    None => p.text_secondary,
                };
                ui.label(
                    RichText::new(format!(
                        "Backend: {} | {}",
                        self.resolver.label(),
                        self.ui_state.backend_label()
                    ))
                    .color(status_color)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                    let theme_label = match self.ui_state.theme {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀",
                    };
                    if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                        self.commands.submit(ChatCommand::ToggleTheme);
                    }
                });
            });
        });

        // ── History side panel ───────────────────────────────
        SidePanel::left("history_panel")
            .min_width(220.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                let manager = self.manager.borrow();
                let history = manager.history();
                let active_id = manager.active_id().unwrap_or_default();
                sidebar::sidebar_panel(ui, &mut self.ui_state, &history, active_id, &self.commands);
            });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    settings::settings_panel(
                        ui,
                        &self.ui_state,
                        &mut self.draft_config,
                        self.save_feedback.as_ref(),
                    )
                })
                .inner;
            match action {
                SettingsAction::SaveClicked => self.save_settings(ctx),
                SettingsAction::ResetClicked => self.reset_settings(ctx),
                SettingsAction::CheckClicked => self.commands.submit(ChatCommand::CheckBackend),
                SettingsAction::Changed => self.save_feedback = None,
                SettingsAction::None => {}
            }
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let manager = self.manager.borrow();
            chat::chat_panel(ui, &mut self.ui_state, manager.active_session(), &self.commands);
        });

        toasts::toasts(ctx, &self.ui_state);

        if self.commands.has_pending() {
            ctx.request_repaint();
        }
    }
}
