//! Top bar — drawer toggles and the theme switch.

use egui::{self, Align, Layout, RichText};
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleSidebar,
    ToggleStatus,
    ToggleTheme,
}

/// Below this width the sidebar collapses into a drawer
pub const NARROW_WIDTH: f32 = 1024.0;

pub fn header_bar(ui: &mut egui::Ui, p: &Palette, dark: bool, narrow: bool) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if narrow && ui.button(RichText::new("☰").color(p.text_primary)).clicked() {
            action = Some(HeaderAction::ToggleSidebar);
        }

        ui.vertical(|ui| {
            ui.label(
                RichText::new("Nova Builder + Agent")
                    .strong()
                    .color(p.accent)
                    .size(18.0),
            );
            ui.label(
                RichText::new("Local dev assistant · sandbox, backups, and smart suggestions.")
                    .color(p.text_secondary)
                    .small(),
            );
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let icon = if dark { "🌙" } else { "☀" };
            if ui
                .button(RichText::new(icon).color(p.text_primary))
                .on_hover_text("Toggle theme")
                .clicked()
            {
                action = Some(HeaderAction::ToggleTheme);
            }
            if ui
                .button(RichText::new("View output").color(p.text_primary).small())
                .clicked()
            {
                action = Some(HeaderAction::ToggleStatus);
            }
        });
    });

    action
}
