//! WASM-target tests for nova-core.
//!
//! Runs the store, view state and chat adapter under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use nova_core::chat::ChatService;
use nova_core::console::Console;
use nova_core::event_bus::EventBus;
use nova_core::ports::*;
use nova_core::store::ConversationStore;
use nova_types::config::ClientConfig;
use nova_types::conversation::GREETING;
use nova_types::error::CANNOT_REACH_SERVER;
use nova_types::ids::SystemClockIds;
use nova_types::message::Role;
use nova_types::panel::Panel;
use nova_types::NovaError;

use std::rc::Rc;
use async_trait::async_trait;

struct EchoChat;

#[async_trait(?Send)]
impl ChatPort for EchoChat {
    async fn send(&self, req: ChatRequest) -> nova_types::Result<ChatReply> {
        Ok(ChatReply { reply: format!("echo: {}", req.message) })
    }

    fn endpoint(&self) -> String {
        "echo".to_string()
    }
}

struct DownChat;

#[async_trait(?Send)]
impl ChatPort for DownChat {
    async fn send(&self, _req: ChatRequest) -> nova_types::Result<ChatReply> {
        Err(NovaError::Network("TypeError: Failed to fetch".to_string()))
    }

    fn endpoint(&self) -> String {
        "down".to_string()
    }
}

#[wasm_bindgen_test]
fn store_create_and_select() {
    let ids = SystemClockIds;
    let mut store = ConversationStore::seeded(GREETING, &ids);
    let first = store.active_id().clone();
    let second = store.create_conversation(&ids);
    assert_eq!(store.active_id(), &second);
    store.select_conversation(first.clone());
    assert_eq!(store.active_id(), &first);
}

#[wasm_bindgen_test]
async fn chat_service_reply() {
    let store = ConversationStore::seeded(GREETING, &SystemClockIds).into_shared();
    let id = store.borrow().active_id().clone();
    let service = ChatService::new(store.clone(), Rc::new(EchoChat), Rc::new(SystemClockIds), EventBus::new());

    let outcome = service.send_message(&id, "ping").await.unwrap();
    assert!(outcome.is_ok());

    let store = store.borrow();
    let last = store.active().last_message().unwrap();
    assert_eq!(last.role, Role::Agent);
    assert_eq!(last.text, "echo: ping");
}

#[wasm_bindgen_test]
async fn chat_service_failure() {
    let store = ConversationStore::seeded(GREETING, &SystemClockIds).into_shared();
    let id = store.borrow().active_id().clone();
    let service = ChatService::new(store.clone(), Rc::new(DownChat), Rc::new(SystemClockIds), EventBus::new());

    service.send_message(&id, "ping").await.unwrap();
    assert_eq!(store.borrow().active().messages().len(), 3);
    assert_eq!(store.borrow().active().last_message().unwrap().text, CANNOT_REACH_SERVER);
}

#[wasm_bindgen_test]
fn console_panel_reset() {
    let mut console = Console::new(
        &ClientConfig::default(),
        Rc::new(EchoChat),
        Rc::new(SystemClockIds),
        EventBus::new(),
    );
    let first = console.active_id();
    console.change_panel(Panel::System);
    console.select_conversation(first);
    assert_eq!(console.view.panel, Panel::Chat);
}
