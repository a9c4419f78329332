//! Backend endpoint settings, shown on the System & Env page.
//! Edits a draft; nothing applies until Save is clicked.

use egui::{self, RichText, Vec2};
use nova_types::config::ChatEndpointConfig;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// A draft field was edited
    Changed,
    /// The user clicked Save
    SaveClicked,
}

/// Save feedback passed in from the app layer
#[derive(Debug, Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Reject drafts that cannot form a URL
pub fn validate_endpoint(draft: &ChatEndpointConfig) -> Result<(), String> {
    let host = draft.host.trim();
    if host.is_empty() {
        return Err("Host must not be empty".to_string());
    }
    if host.contains(char::is_whitespace) || host.contains('/') {
        return Err(format!("Invalid host: {}", host));
    }
    if draft.port == 0 {
        return Err("Port must be between 1 and 65535".to_string());
    }
    Ok(())
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    p: &Palette,
    draft: &mut ChatEndpointConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .fill(p.bg_secondary)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Agent backend").color(p.accent).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Host").color(p.text_secondary).small());
            if ui
                .add(egui::TextEdit::singleline(&mut draft.host).hint_text("127.0.0.1"))
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(RichText::new("Port").color(p.text_secondary).small());
            if ui
                .add(egui::DragValue::new(&mut draft.port).range(1..=u16::MAX))
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(RichText::new("Path").color(p.text_secondary).small());
            if ui
                .add(egui::TextEdit::singleline(&mut draft.path).hint_text("/chat"))
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(draft.url())
                    .color(p.text_secondary)
                    .small()
                    .monospace(),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Save").color(p.on_accent).strong())
                        .fill(p.accent)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(90.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { p.success } else { p.error };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
