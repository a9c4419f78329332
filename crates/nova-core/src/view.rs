//! Panel selection and overlay drawers.

use nova_types::panel::Panel;

/// Which center panel is shown and which drawers are open.
/// Pure selection state; nothing here has side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub panel: Panel,
    pub sidebar_open: bool,
    pub status_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_status(&mut self) {
        self.status_open = !self.status_open;
    }

    /// Close both drawers (backdrop tap, finished mobile navigation)
    pub fn close_all(&mut self) {
        self.sidebar_open = false;
        self.status_open = false;
    }

    pub fn any_drawer_open(&self) -> bool {
        self.sidebar_open || self.status_open
    }
}
