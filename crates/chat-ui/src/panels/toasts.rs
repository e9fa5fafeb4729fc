//! Toast overlay for transient notifications.

use egui::{self, RichText, Vec2};
use chat_types::event::NotificationLevel;
use crate::state::UiState;
use crate::theme::*;

/// Draw live toasts stacked in the top-right corner.
pub fn toasts(ctx: &egui::Context, state: &UiState) {
    if state.toasts.is_empty() {
        return;
    }
    let p = palette(state.theme);

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, Vec2::new(-16.0, 48.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &state.toasts {
                egui::Frame::default()
                    .fill(p.bg_secondary)
                    .stroke(egui::Stroke::new(1.0, level_color(toast.level)))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(level_icon(toast.level)).color(level_color(toast.level)));
                            ui.label(RichText::new(&toast.text).color(p.text_primary));
                        });
                    });
                ui.add_space(6.0);
            }
        });
}

fn level_icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "ℹ",
        NotificationLevel::Success => "✔",
        NotificationLevel::Warning => "⚠",
        NotificationLevel::Error => "✖",
    }
}
