//! Sidebar — new chat, panel switcher, conversation list.

use egui::{self, RichText, ScrollArea, Vec2};
use nova_core::console::Console;
use nova_types::{conversation::ConversationId, panel::Panel};
use crate::theme::{Palette, PANEL_ROUNDING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    NewChat,
    SelectConversation(ConversationId),
    ChangePanel(Panel),
}

/// One line of the conversation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRow {
    pub id: ConversationId,
    pub title: String,
    pub active: bool,
    /// A reply landed while another chat was open
    pub unread: bool,
    pub waiting: bool,
}

/// Snapshot the store for rendering, newest first
pub fn conversation_rows(console: &Console) -> Vec<ConversationRow> {
    let store = console.store().borrow();
    let active = store.active_id().clone();
    store
        .conversations()
        .iter()
        .map(|c| ConversationRow {
            id: c.id.clone(),
            title: c.display_title().to_string(),
            active: c.id == active,
            unread: console.is_unread(&c.id),
            waiting: console.is_waiting(&c.id),
        })
        .collect()
}

pub fn sidebar_panel(
    ui: &mut egui::Ui,
    p: &Palette,
    active_panel: Panel,
    rows: &[ConversationRow],
) -> Option<SidebarAction> {
    let mut action = None;

    ui.vertical(|ui| {
        let new_chat = ui.add(
            egui::Button::new(RichText::new("+ New chat").color(p.on_accent).strong())
                .fill(p.accent)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 32.0)),
        );
        if new_chat.clicked() {
            action = Some(SidebarAction::NewChat);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("PANEL").color(p.text_secondary).small());

        for panel in Panel::all() {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(*panel == active_panel, panel.label())
                    .clicked()
                {
                    action = Some(SidebarAction::ChangePanel(*panel));
                }
                ui.label(
                    RichText::new(panel.hotkey().to_string())
                        .color(p.text_secondary)
                        .small()
                        .monospace(),
                );
            });
        }

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("CHATS").color(p.text_secondary).small());
            ui.label(RichText::new(rows.len().to_string()).color(p.text_secondary).small());
        });

        ScrollArea::vertical()
            .max_height(260.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for row in rows {
                    let mut label = RichText::new(&row.title);
                    if row.active {
                        label = label.color(p.accent).strong();
                    } else {
                        label = label.color(p.text_primary);
                    }
                    ui.horizontal(|ui| {
                        if ui.selectable_label(row.active, label).clicked() {
                            action = Some(SidebarAction::SelectConversation(row.id.clone()));
                        }
                        if row.waiting {
                            ui.spinner();
                        } else if row.unread {
                            ui.label(RichText::new("●").color(p.accent).small());
                        }
                    });
                }
            });

        ui.add_space(8.0);
        ui.separator();
        ui.label(RichText::new("Current mode").color(p.text_primary).small().strong());
        ui.label(RichText::new("• Manual control").color(p.text_secondary).small());
        ui.label(RichText::new("• Local sandbox only").color(p.text_secondary).small());
    });

    action
}

/// Panel switch for a typed hotkey, ignored while a text field has focus
pub fn hotkey_panel(ctx: &egui::Context) -> Option<Panel> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        i.events.iter().find_map(|e| match e {
            egui::Event::Text(text) => text.chars().next().and_then(Panel::from_hotkey),
            _ => None,
        })
    })
}
