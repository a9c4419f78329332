//! Output / Status drawer on the right edge.

use egui::{self, RichText};
use crate::theme::*;

/// Kinds of output the drawer will carry once the builder is wired
pub const OUTPUT_KINDS: [&str; 5] = [
    "UI previews",
    "Code diffs",
    "Build / test logs",
    "Uploaded files",
    "Vision / OCR results",
];

/// Contents of the status drawer. Returns true when Close was clicked.
pub fn status_panel(
    ui: &mut egui::Ui,
    p: &Palette,
    status_text: &str,
    endpoint: &str,
    last_error: Option<&str>,
) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("OUTPUT / STATUS").color(p.text_secondary).small());
            ui.label(
                RichText::new("Builder output will appear here.")
                    .color(p.text_secondary)
                    .small(),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("✕").clicked() {
                close = true;
            }
        });
    });

    ui.separator();

    for kind in OUTPUT_KINDS {
        ui.label(RichText::new(format!("•  {}", kind)).color(p.text_primary));
    }

    ui.add_space(12.0);
    ui.separator();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Status:").color(p.text_secondary).small());
        ui.label(RichText::new(status_text).color(p.text_primary).small());
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("Endpoint:").color(p.text_secondary).small());
        ui.label(RichText::new(endpoint).color(p.text_primary).small().monospace());
    });

    if let Some(err) = last_error {
        ui.add_space(6.0);
        egui::Frame::default()
            .fill(p.bg_surface)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Last error").color(p.error).small().strong());
                ui.label(RichText::new(err).color(p.text_primary).small().monospace());
            });
    }

    close
}
