//! UI theme constants and light/dark palettes

use egui::{Color32, CornerRadius, Stroke, Vec2};
use chat_types::config::Theme;
use chat_types::event::NotificationLevel;

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub user_bubble: Color32,
    pub user_text: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(24, 24, 27),
    bg_secondary: Color32::from_rgb(39, 39, 42),
    bg_surface: Color32::from_rgb(52, 52, 56),
    text_primary: Color32::from_rgb(228, 228, 231),
    text_secondary: Color32::from_rgb(161, 161, 170),
    user_bubble: Color32::from_rgb(67, 56, 202),
    user_text: Color32::from_rgb(238, 242, 255),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(255, 255, 255),
    bg_secondary: Color32::from_rgb(244, 244, 245),
    bg_surface: Color32::from_rgb(228, 228, 231),
    text_primary: Color32::from_rgb(24, 24, 27),
    text_secondary: Color32::from_rgb(113, 113, 122),
    user_bubble: ACCENT,
    user_text: Color32::WHITE,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

pub fn level_color(level: NotificationLevel) -> Color32 {
    match level {
        NotificationLevel::Info => INFO,
        NotificationLevel::Success => SUCCESS,
        NotificationLevel::Warning => WARNING,
        NotificationLevel::Error => ERROR,
    }
}

/// Apply `theme` to an egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let p = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_secondary;

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.weak_bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.text_primary);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
