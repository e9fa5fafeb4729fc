//! Settings panel — completion backend selection and endpoints.
//! Changes apply when the user clicks Save.

use egui::{self, RichText, Vec2};
use chat_types::config::{BackendKind, ChatConfig};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not yet saved
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
    /// The user asked for a fresh health check
    CheckClicked,
    /// Forget the saved configuration
    ResetClicked,
}

/// Save feedback passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    state: &UiState,
    config: &mut ChatConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let p = palette(state.theme);
    let mut changed = false;
    let mut save_clicked = false;
    let mut check_clicked = false;
    let mut reset_clicked = false;

    egui::Frame::default()
        .fill(p.bg_secondary)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(p.text_primary));
            ui.separator();

            // ── Backend Section ──────────────────────────────
            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Mode").color(p.text_secondary).small());
            egui::ComboBox::from_id_salt("backend_kind")
                .selected_text(config.backend.kind.label())
                .show_ui(ui, |ui| {
                    for kind in BackendKind::all() {
                        if ui
                            .selectable_value(&mut config.backend.kind, *kind, kind.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.label(
                RichText::new(kind_description(config.backend.kind))
                    .color(p.text_secondary)
                    .small()
                    .italics(),
            );

            ui.add_space(4.0);

            match config.backend.kind {
                BackendKind::Http => {
                    changed |= text_field(ui, state, "Base URL", &mut config.backend.base_url, "same origin");
                    changed |= text_field(ui, state, "Health path", &mut config.backend.health_path, "/api/health");
                    changed |= text_field(ui, state, "Chat path", &mut config.backend.chat_path, "/api/chat");
                }
                BackendKind::OpenAiCompat => {
                    let openai = &mut config.backend.openai;
                    changed |= text_field(ui, state, "API Base URL", &mut openai.api_base, "https://api.openai.com");

                    ui.label(RichText::new("API Key").color(p.text_secondary).small());
                    let api_key_edit = egui::TextEdit::singleline(&mut openai.api_key)
                        .password(true)
                        .hint_text("sk-...");
                    changed |= ui.add(api_key_edit).changed();

                    changed |= text_field(ui, state, "Model", &mut openai.model, "gpt-3.5-turbo");

                    ui.label(RichText::new("Temperature").color(p.text_secondary).small());
                    changed |= ui
                        .add(egui::Slider::new(&mut openai.temperature, 0.0..=2.0))
                        .changed();

                    ui.label(RichText::new("Max Tokens").color(p.text_secondary).small());
                    changed |= ui
                        .add(egui::Slider::new(&mut openai.max_tokens, 64..=4096))
                        .changed();

                    ui.label(RichText::new("System prompt").color(p.text_secondary).small());
                    changed |= ui
                        .add(egui::TextEdit::multiline(&mut openai.system_prompt).desired_rows(3))
                        .changed();
                }
                BackendKind::Echo | BackendKind::Offline => {}
            }

            if matches!(config.backend.kind, BackendKind::Http | BackendKind::OpenAiCompat) {
                ui.label(RichText::new("Timeout (ms)").color(p.text_secondary).small());
                changed |= ui
                    .add(egui::Slider::new(&mut config.backend.timeout_ms, 1_000..=60_000))
                    .changed();
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Conversation Section ─────────────────────────
            ui.label(RichText::new("Conversation").color(ACCENT).strong());
            ui.label(RichText::new("History sent with each message").color(p.text_secondary).small());
            changed |= ui
                .add(egui::Slider::new(&mut config.history_window, 0..=20))
                .changed();

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Settings")
                            .color(egui::Color32::WHITE)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }
                if ui.button("Check connection").clicked() {
                    check_clicked = true;
                }
                if ui
                    .button("Reset")
                    .on_hover_text("Restore the default backend settings")
                    .clicked()
                {
                    reset_clicked = true;
                }
            });

            // Show save feedback
            if let Some(fb) = save_feedback {
                let color = if fb.success { SUCCESS } else { ERROR };
                ui.label(RichText::new(&fb.message).color(color).small());
            }

            ui.add_space(4.0);
            let status_color = match state.backend_connected {
                Some(true) => SUCCESS,
                Some(false) => WARNING,
                None => p.text_secondary,
            };
            ui.label(RichText::new(state.backend_label()).color(status_color).small());
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if reset_clicked {
        SettingsAction::ResetClicked
    } else if check_clicked {
        SettingsAction::CheckClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

fn text_field(ui: &mut egui::Ui, state: &UiState, label: &str, value: &mut String, hint: &str) -> bool {
    let p = palette(state.theme);
    ui.label(RichText::new(label).color(p.text_secondary).small());
    let changed = ui
        .add(egui::TextEdit::singleline(value).hint_text(hint))
        .changed();
    ui.add_space(4.0);
    changed
}

pub fn kind_description(kind: BackendKind) -> &'static str {
    match kind {
        BackendKind::Http => "Chat server with /api/health and /api/chat endpoints.",
        BackendKind::OpenAiCompat => "Calls an OpenAI-compatible completions API directly.",
        BackendKind::Echo => "Built-in test server that repeats your message.",
        BackendKind::Offline => "Simulation mode. Replies come from built-in canned answers.",
    }
}
