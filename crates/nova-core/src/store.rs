//! Conversation store.
//!
//! Ordered newest-first. The store is never empty and nothing is ever
//! deleted, so the active selection always resolves to something.

use std::cell::RefCell;
use std::rc::Rc;

use nova_types::{
    conversation::{Conversation, ConversationId},
    ids::{new_conversation_id, MessageIdSource},
    message::Message,
};

/// Handle shared between the UI and in-flight requests.
/// Borrows must never be held across an `.await`.
pub type SharedStore = Rc<RefCell<ConversationStore>>;

pub struct ConversationStore {
    conversations: Vec<Conversation>,
    /// Nominal selection; may be stale, see `active()`
    active_id: ConversationId,
    greeting: String,
}

impl ConversationStore {
    /// A store holding `initial`, which is active
    pub fn new(initial: Conversation, greeting: impl Into<String>) -> Self {
        Self {
            active_id: initial.id.clone(),
            conversations: vec![initial],
            greeting: greeting.into(),
        }
    }

    /// A store seeded with one fresh greeting conversation
    pub fn seeded(greeting: impl Into<String>, ids: &dyn MessageIdSource) -> Self {
        let greeting = greeting.into();
        let first = Conversation::with_greeting(new_conversation_id(), ids.next_id(), &greeting);
        Self::new(first, greeting)
    }

    /// Seed text for conversations created from now on
    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.greeting = greeting.into();
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    /// Prepend a new greeting conversation and make it active
    pub fn create_conversation(&mut self, ids: &dyn MessageIdSource) -> ConversationId {
        let conv = Conversation::with_greeting(new_conversation_id(), ids.next_id(), &self.greeting);
        let id = conv.id.clone();
        self.conversations.insert(0, conv);
        self.active_id = id.clone();
        log::debug!("Created conversation {}", id);
        id
    }

    /// Set the nominal active id. Membership is not checked here.
    pub fn select_conversation(&mut self, id: ConversationId) {
        self.active_id = id;
    }

    /// The active conversation, or the first one if the selection is stale
    pub fn active(&self) -> &Conversation {
        // Never empty: constructed with one and nothing removes.
        self.get(&self.active_id).unwrap_or(&self.conversations[0])
    }

    pub fn active_id(&self) -> &ConversationId {
        &self.active().id
    }

    pub fn is_active(&self, id: &ConversationId) -> bool {
        self.active_id() == id
    }

    /// Append to the matching conversation. Returns false (and does nothing)
    /// when no conversation has this id.
    pub fn append_message(&mut self, id: &ConversationId, message: Message) -> bool {
        match self.conversations.iter_mut().find(|c| &c.id == id) {
            Some(conv) => {
                conv.push(message);
                true
            }
            None => {
                log::debug!("Dropping message for unknown conversation {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
