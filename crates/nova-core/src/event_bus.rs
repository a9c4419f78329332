//! Event bus between the console core and the UI.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! Events are buffered and drained by the UI on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use nova_types::event::NovaEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<NovaEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the chat adapter.
    pub fn emit(&self, event: NovaEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events, oldest first
    pub fn drain(&self) -> Vec<NovaEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Pending events exist (egui repaint trigger)
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
