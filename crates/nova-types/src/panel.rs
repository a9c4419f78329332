use serde::{Deserialize, Serialize};

/// The four mutually exclusive center views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Chat,
    Builder,
    Backups,
    System,
}

impl Panel {
    pub fn all() -> &'static [Panel] {
        &[Panel::Chat, Panel::Builder, Panel::Backups, Panel::System]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Chat => "Chat",
            Panel::Builder => "Builder Runs",
            Panel::Backups => "Backups",
            Panel::System => "System & Env",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Panel::Chat => 'C',
            Panel::Builder => 'B',
            Panel::Backups => 'K',
            Panel::System => 'S',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Panel> {
        let key = key.to_ascii_uppercase();
        Panel::all().iter().copied().find(|p| p.hotkey() == key)
    }
}
