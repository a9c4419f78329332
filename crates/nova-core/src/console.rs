//! Console controller — the state the UI drives.
//!
//! Ties the conversation store, the view state and the chat adapter together
//! and keeps per-conversation bookkeeping (unread replies, requests in
//! flight) fed from the event bus.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use nova_types::{
    config::ClientConfig,
    conversation::ConversationId,
    event::NovaEvent,
    ids::MessageIdSource,
    panel::Panel,
};
use crate::chat::{ChatService, PendingReply};
use crate::event_bus::EventBus;
use crate::ports::ChatPort;
use crate::store::{ConversationStore, SharedStore};
use crate::view::ViewState;

pub struct Console {
    store: SharedStore,
    pub view: ViewState,
    chat: ChatService,
    ids: Rc<dyn MessageIdSource>,
    event_bus: EventBus,
    unread: HashSet<ConversationId>,
    in_flight: HashMap<ConversationId, usize>,
}

impl Console {
    pub fn new(
        config: &ClientConfig,
        chat: Rc<dyn ChatPort>,
        ids: Rc<dyn MessageIdSource>,
        event_bus: EventBus,
    ) -> Self {
        let store = ConversationStore::seeded(config.greeting.clone(), ids.as_ref()).into_shared();
        Self::with_store(store, chat, ids, event_bus)
    }

    pub fn with_store(
        store: SharedStore,
        chat: Rc<dyn ChatPort>,
        ids: Rc<dyn MessageIdSource>,
        event_bus: EventBus,
    ) -> Self {
        let chat = ChatService::new(store.clone(), chat, ids.clone(), event_bus.clone());
        Self {
            store,
            view: ViewState::new(),
            chat,
            ids,
            event_bus,
            unread: HashSet::new(),
            in_flight: HashMap::new(),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn set_chat_port(&mut self, chat: Rc<dyn ChatPort>) {
        self.chat.set_chat_port(chat);
    }

    /// Apply a restored config. Existing conversations keep their seed.
    pub fn apply_config(&mut self, config: &ClientConfig, chat: Rc<dyn ChatPort>) {
        self.store.borrow_mut().set_greeting(config.greeting.clone());
        self.chat.set_chat_port(chat);
    }

    pub fn active_id(&self) -> ConversationId {
        self.store.borrow().active_id().clone()
    }

    // ─── Navigation ──────────────────────────────────────────

    /// New conversation at the top, made active, chat panel shown
    pub fn new_chat(&mut self) -> ConversationId {
        let id = self.store.borrow_mut().create_conversation(self.ids.as_ref());
        self.view.set_panel(Panel::Chat);
        id
    }

    /// Switching conversations always returns to the chat panel
    pub fn select_conversation(&mut self, id: ConversationId) {
        self.unread.remove(&id);
        self.store.borrow_mut().select_conversation(id);
        self.view.set_panel(Panel::Chat);
    }

    pub fn change_panel(&mut self, panel: Panel) {
        self.view.set_panel(panel);
    }

    pub fn new_chat_and_close(&mut self) -> ConversationId {
        let id = self.new_chat();
        self.view.close_all();
        id
    }

    pub fn select_conversation_and_close(&mut self, id: ConversationId) {
        self.select_conversation(id);
        self.view.close_all();
    }

    pub fn change_panel_and_close(&mut self, panel: Panel) {
        self.change_panel(panel);
        self.view.close_all();
    }

    // ─── Chat ────────────────────────────────────────────────

    /// Send `text` from the active conversation. The caller spawns
    /// `PendingReply::settle`.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        self.chat.submit_to_active(text)
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    // ─── Bookkeeping ─────────────────────────────────────────

    /// Drain the bus, update unread/in-flight tracking, and return the
    /// events so the UI can react to them too.
    pub fn drain_events(&mut self) -> Vec<NovaEvent> {
        let events = self.event_bus.drain();
        for event in &events {
            match event {
                NovaEvent::RequestStarted { conversation_id } => {
                    *self.in_flight.entry(conversation_id.clone()).or_insert(0) += 1;
                }
                NovaEvent::RequestSettled { conversation_id, .. } => {
                    if let Some(count) = self.in_flight.get_mut(conversation_id) {
                        *count = count.saturating_sub(1);
                        if *count == 0 {
                            self.in_flight.remove(conversation_id);
                        }
                    }
                }
                NovaEvent::BackgroundReply { conversation_id } => {
                    // It may have been selected since the reply landed.
                    if !self.store.borrow().is_active(conversation_id) {
                        self.unread.insert(conversation_id.clone());
                    }
                }
                NovaEvent::MessageAppended { .. } | NovaEvent::RequestFailed { .. } => {}
            }
        }
        events
    }

    pub fn is_unread(&self, id: &ConversationId) -> bool {
        self.unread.contains(id)
    }

    /// A request from this conversation has not settled yet
    pub fn is_waiting(&self, id: &ConversationId) -> bool {
        self.in_flight.contains_key(id)
    }

    pub fn requests_in_flight(&self) -> usize {
        self.in_flight.values().sum()
    }
}
