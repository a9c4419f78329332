//! Chat panel — transcript of the active conversation and the composer.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use nova_types::message::{Attachment, AttachmentKind, Message, Role};
use crate::state::UiState;
use crate::theme::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Trimmed, non-empty text to send
    Submit(String),
    OpenOutput,
}

/// Render the chat panel. `waiting` shows a typing indicator under the
/// transcript while this conversation has a request in flight.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    p: &Palette,
    messages: &[Message],
    waiting: bool,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("CONSOLE").color(p.text_secondary).small());
                        ui.label(
                            RichText::new("Talk to Nova like ChatGPT. Attach files and ask anything.")
                                .color(p.text_secondary)
                                .small(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let color = if waiting { p.warning } else { p.success };
                        ui.label(RichText::new(&state.status_text).color(color).small());
                        if ui.small_button("Output").clicked() {
                            action = Some(ChatAction::OpenOutput);
                        }
                    });
                });

                ui.separator();

                let composer_height = if state.attachments.is_empty() { 60.0 } else { 110.0 };
                let available_height = ui.available_height() - composer_height;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in messages {
                            render_message(ui, p, message);
                            ui.add_space(4.0);
                        }
                        if waiting {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Nova is thinking…").color(p.text_secondary).small());
                            });
                        }
                    });

                ui.add_space(8.0);

                if !state.attachments.is_empty() {
                    attachment_strip(ui, state, p);
                    ui.add_space(4.0);
                }

                // Input area
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type naturally…")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = state.can_submit();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(p.on_accent).strong())
                            .fill(if send_enabled { p.accent } else { p.bg_surface })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if entered || send_btn.clicked() {
                        if let Some(text) = state.take_submission() {
                            action = Some(ChatAction::Submit(text));
                        }
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, p: &Palette, message: &Message) {
    let (label, label_color, bg, layout) = match message.role {
        Role::User => ("You", p.accent, p.user_bubble, Layout::right_to_left(Align::Min)),
        Role::Agent => ("Nova", p.success, p.agent_bubble, Layout::left_to_right(Align::Min)),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).color(label_color).strong().small());
                    if !message.text.is_empty() {
                        ui.label(RichText::new(&message.text).color(p.text_primary));
                    }
                    if !message.files.is_empty() {
                        ui.horizontal_wrapped(|ui| {
                            for file in &message.files {
                                file_chip(ui, p, file);
                            }
                        });
                    }
                });
            });
    });
}

fn attachment_strip(ui: &mut egui::Ui, state: &mut UiState, p: &Palette) {
    let noun = if state.attachments.len() > 1 { "FILES" } else { "FILE" };
    ui.label(RichText::new(format!("ATTACHED {}", noun)).color(p.text_secondary).small());

    let mut remove = None;
    ui.horizontal_wrapped(|ui| {
        for (i, file) in state.attachments.iter().enumerate() {
            file_chip(ui, p, file);
            if ui.small_button("✕").clicked() {
                remove = Some(i);
            }
        }
    });
    if let Some(i) = remove {
        state.remove_attachment(i);
    }
}

fn file_chip(ui: &mut egui::Ui, p: &Palette, file: &Attachment) {
    let badge_color = match file.kind {
        AttachmentKind::Image => p.accent,
        AttachmentKind::Pdf => p.error,
        AttachmentKind::Archive => p.warning,
        AttachmentKind::File => p.text_secondary,
    };

    egui::Frame::default()
        .fill(p.bg_surface)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(file.badge()).color(badge_color).strong().small());
                ui.label(RichText::new(&file.name).color(p.text_primary).small());
                let size = file.size_label();
                if !size.is_empty() {
                    ui.label(RichText::new(format!("· {}", size)).color(p.text_secondary).small());
                }
            });
        });
}

/// Attachments for files dropped onto the window this frame.
/// Contents are not kept, only name and size.
pub fn dropped_attachments(ctx: &egui::Context) -> Vec<Attachment> {
    let dropped: Vec<Attachment> = ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .map(|f| {
                let name = if f.name.is_empty() {
                    f.path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "file".to_string())
                } else {
                    f.name.clone()
                };
                let size = f.bytes.as_ref().map(|b| b.len() as u64);
                Attachment::new(name, size)
            })
            .collect()
    });
    if !dropped.is_empty() {
        log::debug!("{} file(s) dropped onto the composer", dropped.len());
    }
    dropped
}
