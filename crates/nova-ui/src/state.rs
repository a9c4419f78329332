//! UI-level state that drives rendering.
//!
//! Conversations live in the core store; this holds only what the widgets
//! need between frames: the composer draft, picked attachments, theme, and
//! the status line fed from the event bus.

use nova_types::{
    event::NovaEvent,
    message::Attachment,
    theme::ThemeMode,
};

/// State visible to UI panels
pub struct UiState {
    /// Composer text
    pub input_text: String,
    /// Files picked or dropped into the composer. Display only, never sent.
    pub attachments: Vec<Attachment>,
    pub theme: ThemeMode,
    /// Status line text
    pub status_text: String,
    /// Diagnostic detail of the most recent failed request
    pub last_error: Option<String>,
}

impl UiState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            input_text: String::new(),
            attachments: Vec::new(),
            theme,
            status_text: "Ready".to_string(),
            last_error: None,
        }
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    /// Collect what the composer holds and reset it.
    ///
    /// An empty composer (blank text, no files) is left untouched. Files
    /// alone clear the composer but produce no text to send.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.input_text.trim().to_string();
        if trimmed.is_empty() && self.attachments.is_empty() {
            return None;
        }
        self.input_text.clear();
        self.attachments.clear();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.input_text.trim().is_empty() || !self.attachments.is_empty()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Update the status line from drained events
    pub fn process_events(&mut self, events: &[NovaEvent], requests_in_flight: usize) {
        let mut status: Option<&str> = None;
        for event in events {
            match event {
                NovaEvent::BackgroundReply { .. } => status = Some("Reply arrived in another chat"),
                NovaEvent::RequestFailed { reason, .. } => self.last_error = Some(reason.clone()),
                NovaEvent::RequestSettled { ok: false, .. } => status = Some("Backend unreachable"),
                NovaEvent::RequestSettled { ok: true, .. } => {
                    self.last_error = None;
                    if status.is_none() {
                        status = Some("Ready");
                    }
                }
                NovaEvent::RequestStarted { .. } | NovaEvent::MessageAppended { .. } => {}
            }
        }

        if requests_in_flight > 0 {
            self.status_text = match requests_in_flight {
                1 => "Waiting for agent...".to_string(),
                n => format!("Waiting for agent ({} requests)...", n),
            };
        } else if let Some(status) = status {
            self.status_text = status.to_string();
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
