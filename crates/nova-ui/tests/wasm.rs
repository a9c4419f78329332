//! WASM-target tests for nova-ui.

use wasm_bindgen_test::*;

use nova_types::message::Attachment;
use nova_types::theme::ThemeMode;
use nova_ui::state::UiState;
use nova_ui::theme;

#[wasm_bindgen_test]
fn composer_submission() {
    let mut state = UiState::new(ThemeMode::Dark);
    state.input_text = " hello ".to_string();
    state.add_attachment(Attachment::new("shot.png", Some(10)));
    assert_eq!(state.take_submission().as_deref(), Some("hello"));
    assert!(state.attachments.is_empty());
}

#[wasm_bindgen_test]
fn theme_applies_to_context() {
    let ctx = egui::Context::default();
    theme::apply_theme(&ctx, ThemeMode::Light);
    assert!(!ctx.style().visuals.dark_mode);
    theme::apply_theme(&ctx, ThemeMode::Dark);
    assert!(ctx.style().visuals.dark_mode);
}
