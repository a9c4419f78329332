use serde::{Deserialize, Serialize};

/// Key under which the theme choice lives in persistent storage
pub const THEME_STORAGE_KEY: &str = "nova-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only the exact strings `"light"` and `"dark"` are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Stored preference, then system colour scheme, then dark.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Self {
        if let Some(mode) = stored.and_then(ThemeMode::parse) {
            return mode;
        }
        match system_prefers_dark {
            Some(true) => ThemeMode::Dark,
            Some(false) => ThemeMode::Light,
            None => ThemeMode::default(),
        }
    }
}
