//! Chat transport adapter.
//!
//! Bridges one user utterance to the agent backend and resolves exactly one
//! of two outcomes into the store:
//! 1. Synchronously append the user message (`ChatService::submit`)
//! 2. Send a single `POST /chat` (`PendingReply::settle`)
//! 3. Append the agent reply, or the fixed error text on any failure
//!
//! The target conversation id is captured at submit time and carried by the
//! `PendingReply`. Switching conversations while a request is in flight does
//! not redirect the reply.

use std::rc::Rc;

use nova_types::{
    NovaError,
    conversation::ConversationId,
    error::CANNOT_REACH_SERVER,
    event::NovaEvent,
    ids::MessageIdSource,
    message::{Message, MessageId, Role},
};
use crate::event_bus::EventBus;
use crate::ports::{ChatPort, ChatRequest};
use crate::store::SharedStore;

/// How a request settled. The store has already been updated either way.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    Replied { conversation_id: ConversationId, text: String },
    Failed { conversation_id: ConversationId, error: NovaError },
}

impl ReplyOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ReplyOutcome::Replied { .. })
    }

    pub fn conversation_id(&self) -> &ConversationId {
        match self {
            ReplyOutcome::Replied { conversation_id, .. }
            | ReplyOutcome::Failed { conversation_id, .. } => conversation_id,
        }
    }
}

#[derive(Clone)]
pub struct ChatService {
    store: SharedStore,
    chat: Rc<dyn ChatPort>,
    ids: Rc<dyn MessageIdSource>,
    event_bus: EventBus,
}

impl ChatService {
    pub fn new(
        store: SharedStore,
        chat: Rc<dyn ChatPort>,
        ids: Rc<dyn MessageIdSource>,
        event_bus: EventBus,
    ) -> Self {
        Self { store, chat, ids, event_bus }
    }

    /// Swap the backend, e.g. after the endpoint config changed.
    /// Requests already in flight keep the port they started with.
    pub fn set_chat_port(&mut self, chat: Rc<dyn ChatPort>) {
        self.chat = chat;
    }

    /// Where new requests go
    pub fn endpoint(&self) -> String {
        self.chat.endpoint()
    }

    /// Append the user message now and hand back the request to await.
    ///
    /// Returns `None` without touching anything when `text` is blank.
    pub fn submit(&self, conversation_id: &ConversationId, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        let user_id = self.ids.next_id();
        let appended = self
            .store
            .borrow_mut()
            .append_message(conversation_id, Message::user(user_id, text));
        if appended {
            self.event_bus.emit(NovaEvent::MessageAppended {
                conversation_id: conversation_id.clone(),
                role: Role::User,
            });
        }

        // An unknown target still sends; the reply append is then a no-op
        // like the user append above.
        self.event_bus.emit(NovaEvent::RequestStarted {
            conversation_id: conversation_id.clone(),
        });

        Some(PendingReply {
            conversation_id: conversation_id.clone(),
            text: text.to_string(),
            user_id,
            store: self.store.clone(),
            chat: self.chat.clone(),
            ids: self.ids.clone(),
            event_bus: self.event_bus.clone(),
        })
    }

    /// Submit against whatever is active right now
    pub fn submit_to_active(&self, text: &str) -> Option<PendingReply> {
        let active = self.store.borrow().active_id().clone();
        self.submit(&active, text)
    }

    /// `submit` and `settle` in one go. `None` when the text was blank.
    pub async fn send_message(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Option<ReplyOutcome> {
        match self.submit(conversation_id, text) {
            Some(pending) => Some(pending.settle().await),
            None => None,
        }
    }
}

/// An in-flight chat request bound to the conversation it was sent from
pub struct PendingReply {
    conversation_id: ConversationId,
    text: String,
    user_id: MessageId,
    store: SharedStore,
    chat: Rc<dyn ChatPort>,
    ids: Rc<dyn MessageIdSource>,
    event_bus: EventBus,
}

impl PendingReply {
    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Run the request once and record its outcome. Never fails: transport
    /// errors become the fixed agent message and are logged.
    pub async fn settle(self) -> ReplyOutcome {
        let request = ChatRequest::user(self.text.clone(), self.conversation_id.clone());
        log::debug!(
            "POST {} for conversation {}",
            self.chat.endpoint(),
            self.conversation_id
        );

        let result = self.chat.send(request).await;

        let outcome = match result {
            Ok(reply) => ReplyOutcome::Replied {
                conversation_id: self.conversation_id.clone(),
                text: reply.reply,
            },
            Err(error) => {
                log::error!("Chat request for {} failed: {}", self.conversation_id, error);
                ReplyOutcome::Failed {
                    conversation_id: self.conversation_id.clone(),
                    error,
                }
            }
        };

        let text = match &outcome {
            ReplyOutcome::Replied { text, .. } => text.clone(),
            ReplyOutcome::Failed { .. } => CANNOT_REACH_SERVER.to_string(),
        };

        // Reply ids stay after the user id even if the clock stalled.
        let reply_id = self.ids.next_id().max(self.user_id).next();

        let (appended, in_background) = {
            let mut store = self.store.borrow_mut();
            let appended = store.append_message(&self.conversation_id, Message::agent(reply_id, text));
            (appended, appended && !store.is_active(&self.conversation_id))
        };

        if appended {
            self.event_bus.emit(NovaEvent::MessageAppended {
                conversation_id: self.conversation_id.clone(),
                role: Role::Agent,
            });
        }
        if let ReplyOutcome::Failed { error, .. } = &outcome {
            self.event_bus.emit(NovaEvent::RequestFailed {
                conversation_id: self.conversation_id.clone(),
                reason: error.to_string(),
            });
        }
        if in_background {
            self.event_bus.emit(NovaEvent::BackgroundReply {
                conversation_id: self.conversation_id.clone(),
            });
        }
        self.event_bus.emit(NovaEvent::RequestSettled {
            conversation_id: self.conversation_id,
            ok: outcome.is_ok(),
        });

        outcome
    }
}
