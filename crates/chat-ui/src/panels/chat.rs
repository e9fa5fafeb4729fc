//! Chat panel — displays the active conversation and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_core::commands::CommandQueue;
use chat_types::command::ChatCommand;
use chat_types::message::{format_time, Message, Sender};
use chat_types::session::Session;
use chat_types::APP_NAME;
use crate::state::UiState;
use crate::theme::*;

/// Welcome screen shortcuts: (button label, prompt sent)
pub const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Quantum Computing", "Explain quantum computing in simple terms"),
    ("Email Writing", "Help me write a professional email"),
    ("Fitness Plan", "Create a workout plan for beginners"),
    ("ML Concepts", "Explain machine learning concepts"),
];

/// Render the chat panel for `session`.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    session: Option<&Session>,
    commands: &CommandQueue,
) {
    let p = palette(state.theme);
    let has_messages = session.is_some_and(|s| !s.messages.is_empty());

    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    let title = session.map(|s| s.title.as_str()).unwrap_or(APP_NAME);
                    ui.heading(RichText::new(title).color(p.text_primary).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if state.busy { WARNING } else { SUCCESS };
                        ui.label(RichText::new(state.status_text()).color(status_color).small());
                        if ui
                            .add_enabled(has_messages, egui::Button::new("Clear"))
                            .on_hover_text("Clear this chat")
                            .clicked()
                        {
                            state.confirm_clear = true;
                        }
                        if ui
                            .add_enabled(has_messages, egui::Button::new("Export"))
                            .on_hover_text("Download as text")
                            .clicked()
                        {
                            commands.submit(ChatCommand::ExportChat);
                        }
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| match session {
                        Some(s) if !s.messages.is_empty() => {
                            for message in &s.messages {
                                render_message(ui, state, message);
                                ui.add_space(4.0);
                            }
                            if state.typing {
                                typing_indicator(ui, state);
                            }
                        }
                        _ => welcome(ui, state, commands),
                    });

                ui.add_space(8.0);
                input_row(ui, state, commands);
            });
        });

    clear_confirmation(ui.ctx(), state, commands);
}

fn welcome(ui: &mut egui::Ui, state: &UiState, commands: &CommandQueue) {
    let p = palette(state.theme);
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new(format!("Welcome to {}", APP_NAME)).color(p.text_primary).strong());
        ui.label(RichText::new("Your intelligent AI assistant").color(p.text_secondary));
        ui.add_space(16.0);

        egui::Grid::new("quick_actions")
            .num_columns(2)
            .spacing(Vec2::new(8.0, 8.0))
            .show(ui, |ui| {
                for (i, (label, prompt)) in QUICK_ACTIONS.iter().enumerate() {
                    let button = egui::Button::new(RichText::new(*label).color(p.text_primary))
                        .fill(p.bg_secondary)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(160.0, 40.0));
                    let clicked = ui
                        .add_enabled(!state.busy, button)
                        .on_hover_text(*prompt)
                        .clicked();
                    if clicked {
                        commands.submit(ChatCommand::SendMessage(prompt.to_string()));
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn render_message(ui: &mut egui::Ui, state: &UiState, message: &Message) {
    let p = palette(state.theme);
    let (label_color, bg, text_color) = match message.sender {
        Sender::User => (p.user_text, p.user_bubble, p.user_text),
        Sender::Assistant => (SUCCESS, p.bg_secondary, p.text_primary),
    };
    let layout = match message.sender {
        Sender::User => Layout::right_to_left(Align::Min),
        Sender::Assistant => Layout::left_to_right(Align::Min),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}  {}",
                            message.sender.display_name(),
                            format_time(message.timestamp)
                        ))
                        .color(label_color)
                        .strong()
                        .small(),
                    );
                    ui.label(RichText::new(&message.content).color(text_color));
                });
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui, state: &UiState) {
    let p = palette(state.theme);
    egui::Frame::default()
        .fill(p.bg_secondary)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new(format!("{} is typing...", Sender::Assistant.display_name()))
                        .color(p.text_secondary)
                        .italics(),
                );
            });
        });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState, commands: &CommandQueue) {
    let p = palette(state.theme);
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Type a message...")
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add(input);

        let send_enabled = state.can_send();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE))
                .fill(if send_enabled { ACCENT } else { p.bg_surface })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        // Submit on Enter or button click
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if entered || send_btn.clicked() {
            if let Some(text) = state.take_input() {
                commands.submit(ChatCommand::SendMessage(text));
            }
            response.request_focus();
        }
    });
}

fn clear_confirmation(ctx: &egui::Context, state: &mut UiState, commands: &CommandQueue) {
    if !state.confirm_clear {
        return;
    }

    egui::Window::new("Clear chat?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to clear this chat? This action cannot be undone.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Clear").color(ERROR)).clicked() {
                    commands.submit(ChatCommand::ClearChat);
                    state.confirm_clear = false;
                }
                if ui.button("Cancel").clicked() {
                    state.confirm_clear = false;
                }
            });
        });
}
