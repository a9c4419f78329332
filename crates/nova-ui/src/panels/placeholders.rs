//! Reserved panels for backend features that are not wired yet.
//!
//! Each page is static text describing the endpoints it will talk to.

use egui::{self, RichText, ScrollArea};
use nova_types::panel::Panel;
use crate::theme::*;

/// A titled block of bullet points
pub struct Section {
    pub intro: &'static str,
    pub items: &'static [&'static str],
}

pub struct PlaceholderPage {
    pub eyebrow: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
    pub footer: Option<&'static str>,
}

pub const BUILDER_PAGE: PlaceholderPage = PlaceholderPage {
    eyebrow: "BUILDER PIPELINE",
    subtitle: "Plan → prepare workspace → apply patch → run tests → merge.",
    sections: &[
        Section {
            intro: "This is a placeholder for the automated Builder+Agent pipeline UI. \
                    We will wire it to your FastAPI endpoints:",
            items: &[
                "/plan – analyse code and create a change plan",
                "/prepare – create workspace & backups",
                "/apply_patch – write patches into sandbox",
                "/run_tests – run Python tests / checks",
                "/merge – copy from sandbox into integrated/",
                "/rollback – restore from backup if something breaks",
            ],
        },
        Section {
            intro: "Later we will:",
            items: &[
                "Show step-by-step logs for each pipeline run",
                "Allow you to approve/reject patches",
                "Display code diffs and errors in a readable way",
            ],
        },
    ],
    footer: None,
};

pub const BACKUPS_PAGE: PlaceholderPage = PlaceholderPage {
    eyebrow: "BACKUPS",
    subtitle: "View and restore previous versions of your project.",
    sections: &[Section {
        intro: "This panel will be wired to your backup system in /backups and /restore endpoints.",
        items: &[
            "List backups grouped by request_id and timestamp",
            "Show backup notes like \"before merge\" / \"before tests\"",
            "Allow safe restore into integrated/ with one click",
        ],
    }],
    footer: Some("For now this is just UI space reserved. We will plug in real data after backend wiring."),
};

pub const SYSTEM_PAGE: PlaceholderPage = PlaceholderPage {
    eyebrow: "SYSTEM & ENV",
    subtitle: "Environment info, versions and resource usage (later).",
    sections: &[
        Section {
            intro: "This panel will read metadata from your environment capture:",
            items: &[
                "Python version, OS, CPU info",
                "Installed packages (from pip freeze / requirements_pinned)",
                "Node / npm versions when needed",
            ],
        },
        Section {
            intro: "Later we can also add:",
            items: &[
                "Simple CPU / RAM usage summary",
                "Warnings for risky dependency upgrades",
                "Buttons to trigger environment scans via the advisor engine",
            ],
        },
    ],
    footer: None,
};

/// Page for a non-chat panel. `Panel::Chat` has none.
pub fn placeholder_page(panel: Panel) -> Option<&'static PlaceholderPage> {
    match panel {
        Panel::Chat => None,
        Panel::Builder => Some(&BUILDER_PAGE),
        Panel::Backups => Some(&BACKUPS_PAGE),
        Panel::System => Some(&SYSTEM_PAGE),
    }
}

/// Render a placeholder page. `extra` draws below the text, used by the
/// System panel for the backend endpoint settings.
pub fn placeholder_panel(
    ui: &mut egui::Ui,
    p: &Palette,
    page: &PlaceholderPage,
    extra: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.label(RichText::new(page.eyebrow).color(p.text_secondary).small());
            ui.label(RichText::new(page.subtitle).color(p.text_secondary).small());
            ui.separator();

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for section in page.sections {
                    ui.add_space(6.0);
                    ui.label(RichText::new(section.intro).color(p.text_primary));
                    for item in section.items {
                        ui.label(RichText::new(format!("•  {}", item)).color(p.text_primary));
                    }
                }
                if let Some(footer) = page.footer {
                    ui.add_space(6.0);
                    ui.label(RichText::new(footer).color(p.text_secondary).italics());
                }
                ui.add_space(12.0);
                extra(ui);
            });
        });
}
