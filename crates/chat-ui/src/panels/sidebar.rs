//! Sidebar — chat history, search and the new-chat button.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_core::commands::CommandQueue;
use chat_types::command::ChatCommand;
use chat_types::message::format_time;
use chat_types::session::{SearchHit, SessionSummary};
use crate::state::UiState;
use crate::theme::*;

/// Render the sidebar. `history` is most-recent-first.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    history: &[SessionSummary],
    active_id: &str,
    commands: &CommandQueue,
) {
    let p = palette(state.theme);

    ui.add_space(8.0);
    let new_chat = ui.add_sized(
        Vec2::new(ui.available_width(), 32.0),
        egui::Button::new(RichText::new("+  New Chat").color(egui::Color32::WHITE).strong())
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING),
    );
    if new_chat.on_hover_text("Ctrl+K").clicked() {
        commands.submit(ChatCommand::NewChat);
    }

    ui.add_space(8.0);
    let search = ui.add(
        egui::TextEdit::singleline(&mut state.search_query)
            .hint_text("Search chats...")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        commands.submit(ChatCommand::Search(state.search_query.clone()));
    }

    ui.add_space(6.0);
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if state.is_searching() {
                let hits = state.search_results.clone().unwrap_or_default();
                search_results(ui, state, &hits, commands);
            } else if history.is_empty() {
                ui.label(RichText::new("No chats yet").color(p.text_secondary).italics());
            } else {
                for summary in history {
                    history_row(ui, state, summary, summary.id == active_id, commands);
                }
            }
        });

    delete_confirmation(ui.ctx(), state, commands);
}

fn history_row(
    ui: &mut egui::Ui,
    state: &mut UiState,
    summary: &SessionSummary,
    active: bool,
    commands: &CommandQueue,
) {
    let p = palette(state.theme);
    let fill = if active { p.bg_surface } else { p.bg_secondary };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let title = ui.add(
                    egui::Label::new(RichText::new(&summary.title).color(p.text_primary))
                        .truncate()
                        .sense(egui::Sense::click()),
                );
                if title.clicked() && !active {
                    commands.submit(ChatCommand::SwitchChat(summary.id.clone()));
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .small_button(RichText::new("🗑").color(p.text_secondary))
                        .on_hover_text("Delete chat")
                        .clicked()
                    {
                        state.confirm_delete = Some(summary.id.clone());
                    }
                });
            });
            ui.label(
                RichText::new(format!(
                    "{} · {} messages",
                    format_time(summary.updated_at),
                    summary.message_count
                ))
                .color(p.text_secondary)
                .small(),
            );
        });
    ui.add_space(4.0);
}

fn search_results(
    ui: &mut egui::Ui,
    state: &UiState,
    hits: &[SearchHit],
    commands: &CommandQueue,
) {
    let p = palette(state.theme);
    if hits.is_empty() {
        ui.label(RichText::new("No matches").color(p.text_secondary).italics());
        return;
    }

    for hit in hits {
        let clicked = egui::Frame::default()
            .fill(p.bg_secondary)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let title = ui.add(
                    egui::Label::new(RichText::new(&hit.session.title).color(p.text_primary).strong())
                        .truncate()
                        .sense(egui::Sense::click()),
                );
                for message in hit.messages.iter().take(3) {
                    ui.add(
                        egui::Label::new(
                            RichText::new(&message.content).color(p.text_secondary).small(),
                        )
                        .truncate(),
                    );
                }
                title.clicked()
            })
            .inner;
        if clicked {
            commands.submit(ChatCommand::SwitchChat(hit.session.id.clone()));
        }
        ui.add_space(4.0);
    }
}

fn delete_confirmation(ctx: &egui::Context, state: &mut UiState, commands: &CommandQueue) {
    let Some(id) = state.confirm_delete.clone() else {
        return;
    };

    egui::Window::new("Delete chat?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("This chat and its messages will be removed.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Delete").color(ERROR)).clicked() {
                    commands.submit(ChatCommand::DeleteChat(id.clone()));
                    state.confirm_delete = None;
                }
                if ui.button("Cancel").clicked() {
                    state.confirm_delete = None;
                }
            });
        });
}
