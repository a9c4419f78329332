#[cfg(test)]
mod tests {
    use crate::panels::placeholders::{self, BACKUPS_PAGE, BUILDER_PAGE, SYSTEM_PAGE};
    use crate::panels::settings::validate_endpoint;
    use crate::panels::sidebar::{conversation_rows, sidebar_panel};
    use crate::panels::status::OUTPUT_KINDS;
    use crate::state::*;
    use crate::theme::{self, DARK, LIGHT};
    use async_trait::async_trait;
    use nova_core::console::Console;
    use nova_core::event_bus::EventBus;
    use nova_core::ports::{ChatPort, ChatReply, ChatRequest};
    use nova_types::config::{ChatEndpointConfig, ClientConfig};
    use nova_types::conversation::ConversationId;
    use nova_types::event::NovaEvent;
    use nova_types::ids::MessageIdSource;
    use nova_types::message::{Attachment, MessageId, Role};
    use nova_types::panel::Panel;
    use nova_types::theme::ThemeMode;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CounterIds(Cell<u64>);

    impl MessageIdSource for CounterIds {
        fn next_id(&self) -> MessageId {
            let id = self.0.get();
            self.0.set(id + 1);
            MessageId(id)
        }
    }

    struct OkChat;

    #[async_trait(?Send)]
    impl ChatPort for OkChat {
        async fn send(&self, _req: ChatRequest) -> nova_types::Result<ChatReply> {
            Ok(ChatReply { reply: "ok".to_string() })
        }

        fn endpoint(&self) -> String {
            "mock://chat".to_string()
        }
    }

    fn console() -> Console {
        Console::new(
            &ClientConfig::default(),
            Rc::new(OkChat),
            Rc::new(CounterIds(Cell::new(1))),
            EventBus::new(),
        )
    }

    fn settled(id: &str, ok: bool) -> NovaEvent {
        NovaEvent::RequestSettled { conversation_id: ConversationId::from(id), ok }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(ThemeMode::Light);
        assert!(state.input_text.is_empty());
        assert!(state.attachments.is_empty());
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.status_text, "Ready");
        assert!(state.last_error.is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_ui_state_default_is_dark() {
        assert_eq!(UiState::default().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_take_submission_trims_and_clears() {
        let mut state = UiState::default();
        state.input_text = "  build the thing \n".to_string();
        assert!(state.can_submit());
        assert_eq!(state.take_submission().as_deref(), Some("build the thing"));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_submission_blank_keeps_draft() {
        let mut state = UiState::default();
        state.input_text = "   ".to_string();
        assert!(!state.can_submit());
        assert_eq!(state.take_submission(), None);
        assert_eq!(state.input_text, "   ");
    }

    #[test]
    fn test_take_submission_files_only_clears_without_sending() {
        let mut state = UiState::default();
        state.add_attachment(Attachment::new("diagram.png", Some(2048)));
        assert!(state.can_submit());
        assert_eq!(state.take_submission(), None);
        assert!(state.attachments.is_empty());
    }

    #[test]
    fn test_take_submission_text_with_files_drops_files() {
        let mut state = UiState::default();
        state.input_text = "see attached".to_string();
        state.add_attachment(Attachment::new("report.pdf", None));
        assert_eq!(state.take_submission().as_deref(), Some("see attached"));
        assert!(state.attachments.is_empty());
    }

    #[test]
    fn test_remove_attachment_out_of_range() {
        let mut state = UiState::default();
        state.add_attachment(Attachment::new("a.zip", None));
        state.add_attachment(Attachment::new("b.txt", None));
        state.remove_attachment(5);
        assert_eq!(state.attachments.len(), 2);
        state.remove_attachment(0);
        assert_eq!(state.attachments[0].name, "b.txt");
    }

    #[test]
    fn test_toggle_theme() {
        let mut state = UiState::new(ThemeMode::Dark);
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_process_events_waiting() {
        let mut state = UiState::default();
        let started = NovaEvent::RequestStarted { conversation_id: ConversationId::from("c0") };
        state.process_events(&[started.clone()], 1);
        assert_eq!(state.status_text, "Waiting for agent...");
        state.process_events(&[started], 2);
        assert_eq!(state.status_text, "Waiting for agent (2 requests)...");
    }

    #[test]
    fn test_process_events_failure_then_recovery() {
        let mut state = UiState::default();
        state.process_events(
            &[
                NovaEvent::RequestFailed {
                    conversation_id: ConversationId::from("c0"),
                    reason: "Network error: fetch failed".to_string(),
                },
                settled("c0", false),
            ],
            0,
        );
        assert_eq!(state.status_text, "Backend unreachable");
        assert_eq!(state.last_error.as_deref(), Some("Network error: fetch failed"));

        state.process_events(&[settled("c0", true)], 0);
        assert_eq!(state.status_text, "Ready");
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_process_events_background_reply_wins_over_ready() {
        let mut state = UiState::default();
        state.process_events(
            &[
                NovaEvent::MessageAppended { conversation_id: ConversationId::from("c1"), role: Role::Agent },
                NovaEvent::BackgroundReply { conversation_id: ConversationId::from("c1") },
                settled("c1", true),
            ],
            0,
        );
        assert_eq!(state.status_text, "Reply arrived in another chat");
    }

    #[test]
    fn test_process_events_in_flight_overrides_settled() {
        let mut state = UiState::default();
        state.process_events(&[settled("c0", true)], 1);
        assert_eq!(state.status_text, "Waiting for agent...");
    }

    // ─── Panels ──────────────────────────────────────────────

    #[test]
    fn test_placeholder_pages() {
        assert!(placeholders::placeholder_page(Panel::Chat).is_none());
        let builder = placeholders::placeholder_page(Panel::Builder).unwrap();
        assert_eq!(builder.eyebrow, BUILDER_PAGE.eyebrow);
        assert_eq!(BUILDER_PAGE.sections[0].items.len(), 6);
        assert!(BUILDER_PAGE.sections[0].items[0].starts_with("/plan"));
        assert_eq!(placeholders::placeholder_page(Panel::Backups).unwrap().eyebrow, "BACKUPS");
        assert!(BACKUPS_PAGE.footer.is_some());
        assert_eq!(placeholders::placeholder_page(Panel::System).unwrap().eyebrow, SYSTEM_PAGE.eyebrow);
    }

    #[test]
    fn test_output_kinds() {
        assert_eq!(OUTPUT_KINDS.len(), 5);
        assert_eq!(OUTPUT_KINDS[0], "UI previews");
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint(&ChatEndpointConfig::default()).is_ok());

        let blank = ChatEndpointConfig { host: "  ".to_string(), ..ChatEndpointConfig::default() };
        assert!(validate_endpoint(&blank).is_err());

        let slash = ChatEndpointConfig { host: "localhost/api".to_string(), ..ChatEndpointConfig::default() };
        assert!(validate_endpoint(&slash).is_err());

        let zero = ChatEndpointConfig { port: 0, ..ChatEndpointConfig::default() };
        assert!(validate_endpoint(&zero).is_err());
    }

    #[test]
    fn test_conversation_rows_newest_first_with_flags() {
        let mut console = console();
        let first = console.active_id();
        let second = console.new_chat();

        let _pending = console.submit("hi").unwrap();
        console.drain_events();

        let rows = conversation_rows(&console);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, second);
        assert!(rows[0].active);
        assert!(rows[0].waiting);
        assert_eq!(rows[0].title, "New chat");
        assert_eq!(rows[1].id, first);
        assert!(!rows[1].active);
        assert!(!rows[1].unread);
    }

    #[test]
    fn test_sidebar_renders_without_input() {
        let console = console();
        let rows = conversation_rows(&console);
        let ctx = egui::Context::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = sidebar_panel(ui, &DARK, Panel::Chat, &rows);
            });
        });
        assert!(action.is_none());
    }

    #[test]
    fn test_palette_by_mode() {
        assert_eq!(theme::palette(ThemeMode::Dark).bg_primary, DARK.bg_primary);
        assert_eq!(theme::palette(ThemeMode::Light).bg_primary, LIGHT.bg_primary);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }
}
