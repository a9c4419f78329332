//! Main egui application — lays out the panels and applies their actions
//! to the console.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use nova_core::chat::PendingReply;
use nova_core::console::Console;
use nova_core::event_bus::EventBus;
use nova_core::ports::StoragePort;
use nova_platform::{prefs, storage, HttpChatClient};
use nova_types::config::{ChatEndpointConfig, ClientConfig};
use nova_types::ids::SystemClockIds;
use nova_types::panel::Panel;
use nova_types::theme::ThemeMode;
use nova_ui::panels::header::{self, HeaderAction};
use nova_ui::panels::settings::{self, SaveFeedback, SettingsAction};
use nova_ui::panels::sidebar::{self, SidebarAction};
use nova_ui::panels::{chat, placeholders, status};
use nova_ui::state::UiState;
use nova_ui::theme::{self, Palette, PANEL_PADDING};

const SIDEBAR_WIDTH: f32 = 256.0;
const STATUS_WIDTH: f32 = 360.0;

/// Preferences read from storage after startup
struct Restored {
    config: ClientConfig,
    theme: ThemeMode,
}

/// The main application state
pub struct NovaApp {
    console: Console,
    ui_state: UiState,
    config: ClientConfig,
    /// Endpoint fields being edited on the System page
    endpoint_draft: ChatEndpointConfig,
    storage: Rc<dyn StoragePort>,
    /// Filled by the async restore, taken on the next frame
    restored: Rc<RefCell<Option<Restored>>>,
    save_feedback: Rc<RefCell<Option<SaveFeedback>>>,
    applied_theme: Option<ThemeMode>,
}

impl NovaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let storage = storage::auto_detect_storage();
        let chat = Rc::new(HttpChatClient::new(&config.chat));
        let console = Console::new(&config, chat, Rc::new(SystemClockIds), EventBus::new());
        let theme = ThemeMode::resolve(None, prefs::system_prefers_dark());

        let app = Self {
            console,
            ui_state: UiState::new(theme),
            endpoint_draft: config.chat.clone(),
            config,
            storage,
            restored: Rc::new(RefCell::new(None)),
            save_feedback: Rc::new(RefCell::new(None)),
            applied_theme: None,
        };

        Self::restore_prefs(app.storage.clone(), app.restored.clone(), cc.egui_ctx.clone());
        app
    }

    /// Read theme and config from storage (async)
    fn restore_prefs(
        storage: Rc<dyn StoragePort>,
        slot: Rc<RefCell<Option<Restored>>>,
        ctx: egui::Context,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            let theme = prefs::load_theme(storage.as_ref(), prefs::system_prefers_dark()).await;
            let config = prefs::load_config(storage.as_ref()).await;
            *slot.borrow_mut() = Some(Restored { config, theme });
            ctx.request_repaint();
        });
    }

    fn take_restored(&mut self) {
        let restored = self.restored.borrow_mut().take();
        if let Some(Restored { config, theme }) = restored {
            self.ui_state.theme = theme;
            self.endpoint_draft = config.chat.clone();
            self.console
                .apply_config(&config, Rc::new(HttpChatClient::new(&config.chat)));
            log::info!("Chat endpoint: {}", config.chat.url());
            self.config = config;
        }
    }

    /// Persist the theme (async, fire-and-forget)
    fn save_theme(&self, mode: ThemeMode) {
        let storage = self.storage.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = prefs::save_theme(storage.as_ref(), mode).await {
                log::warn!("Could not save theme: {}", e);
            }
        });
    }

    /// Apply the endpoint draft and persist the config
    fn save_settings(&mut self, ctx: &egui::Context) {
        if let Err(message) = settings::validate_endpoint(&self.endpoint_draft) {
            *self.save_feedback.borrow_mut() = Some(SaveFeedback { message, success: false });
            return;
        }

        self.endpoint_draft.host = self.endpoint_draft.host.trim().to_string();
        self.config.chat = self.endpoint_draft.clone();
        self.console
            .set_chat_port(Rc::new(HttpChatClient::new(&self.config.chat)));
        log::info!("Chat endpoint changed to {}", self.config.chat.url());

        let storage = self.storage.clone();
        let config = self.config.clone();
        let feedback = self.save_feedback.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let fb = match prefs::save_config(storage.as_ref(), &config).await {
                Ok(()) => SaveFeedback {
                    message: format!("Saved to {}", storage.backend_name()),
                    success: true,
                },
                Err(e) => {
                    log::warn!("Could not save config: {}", e);
                    SaveFeedback { message: format!("Save failed: {}", e), success: false }
                }
            };
            *feedback.borrow_mut() = Some(fb);
            ctx.request_repaint();
        });
    }

    /// Run the request in the background; the store updates when it settles
    fn dispatch(&self, pending: PendingReply, ctx: &egui::Context) {
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = pending.settle().await;
            log::debug!(
                "Request for {} settled (ok: {})",
                outcome.conversation_id(),
                outcome.is_ok()
            );
            ctx.request_repaint();
        });
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction, close: bool) {
        match (action, close) {
            (SidebarAction::NewChat, false) => {
                self.console.new_chat();
            }
            (SidebarAction::NewChat, true) => {
                self.console.new_chat_and_close();
            }
            (SidebarAction::SelectConversation(id), false) => self.console.select_conversation(id),
            (SidebarAction::SelectConversation(id), true) => {
                self.console.select_conversation_and_close(id)
            }
            (SidebarAction::ChangePanel(panel), false) => self.console.change_panel(panel),
            (SidebarAction::ChangePanel(panel), true) => self.console.change_panel_and_close(panel),
        }
    }
}

impl eframe::App for NovaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_restored();

        if self.applied_theme != Some(self.ui_state.theme) {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.applied_theme = Some(self.ui_state.theme);
        }
        let p = theme::palette(self.ui_state.theme);

        // Drain events from in-flight requests
        let events = self.console.drain_events();
        if !events.is_empty() {
            self.ui_state
                .process_events(&events, self.console.requests_in_flight());
            ctx.request_repaint();
        }

        for attachment in chat::dropped_attachments(ctx) {
            self.ui_state.add_attachment(attachment);
        }

        if let Some(panel) = sidebar::hotkey_panel(ctx) {
            self.console.change_panel(panel);
        }

        let narrow = ctx.screen_rect().width() < header::NARROW_WIDTH;

        // ── Top bar ──────────────────────────────────────────
        let header_action = TopBottomPanel::top("top_bar")
            .show(ctx, |ui| header::header_bar(ui, p, self.ui_state.theme.is_dark(), narrow))
            .inner;
        match header_action {
            Some(HeaderAction::ToggleSidebar) => self.console.view.toggle_sidebar(),
            Some(HeaderAction::ToggleStatus) => self.console.view.toggle_status(),
            Some(HeaderAction::ToggleTheme) => {
                let mode = self.ui_state.toggle_theme();
                self.save_theme(mode);
            }
            None => {}
        }

        // ── Sidebar ──────────────────────────────────────────
        let rows = sidebar::conversation_rows(&self.console);
        let active_panel = self.console.view.panel;
        if !narrow {
            let action = SidePanel::left("sidebar")
                .resizable(false)
                .exact_width(SIDEBAR_WIDTH)
                .show(ctx, |ui| sidebar::sidebar_panel(ui, p, active_panel, &rows))
                .inner;
            if let Some(action) = action {
                self.apply_sidebar_action(action, false);
            }
        }

        // ── Main content ─────────────────────────────────────
        let panel = self.console.view.panel;
        CentralPanel::default().show(ctx, |ui| match panel {
            Panel::Chat => {
                let action = {
                    let store = self.console.store().borrow();
                    let active = store.active();
                    let waiting = self.console.is_waiting(&active.id);
                    chat::chat_panel(ui, &mut self.ui_state, p, active.messages(), waiting)
                };
                match action {
                    Some(chat::ChatAction::Submit(text)) => {
                        if let Some(pending) = self.console.submit(&text) {
                            self.dispatch(pending, ctx);
                        }
                    }
                    Some(chat::ChatAction::OpenOutput) => self.console.view.toggle_status(),
                    None => {}
                }
            }
            Panel::System => {
                let feedback = self.save_feedback.borrow().clone();
                let draft = &mut self.endpoint_draft;
                let mut settings_action = SettingsAction::None;
                placeholders::placeholder_panel(ui, p, &placeholders::SYSTEM_PAGE, |ui| {
                    settings_action = settings::settings_panel(ui, p, draft, feedback.as_ref());
                });
                match settings_action {
                    SettingsAction::SaveClicked => self.save_settings(ctx),
                    SettingsAction::Changed => *self.save_feedback.borrow_mut() = None,
                    SettingsAction::None => {}
                }
            }
            other => {
                if let Some(page) = placeholders::placeholder_page(other) {
                    placeholders::placeholder_panel(ui, p, page, |_| {});
                }
            }
        });

        // ── Drawers ──────────────────────────────────────────
        if narrow && self.console.view.sidebar_open {
            if backdrop(ctx, "sidebar_backdrop", p) {
                self.console.view.close_all();
            } else if let Some(action) = sidebar_drawer(ctx, p, active_panel, &rows) {
                self.apply_sidebar_action(action, true);
            }
        }

        if self.console.view.status_open {
            let endpoint = self.console.chat().endpoint();
            if backdrop(ctx, "status_backdrop", p)
                || status_drawer(ctx, p, &self.ui_state, &endpoint)
            {
                self.console.view.close_all();
            }
        }
    }
}

/// Dim the whole screen. Returns true when clicked.
fn backdrop(ctx: &egui::Context, id: &str, p: &Palette) -> bool {
    let rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Middle)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(rect.size(), egui::Sense::click());
            painter.rect_filled(rect, 0.0, p.backdrop);
            response.clicked()
        })
        .inner
}

fn sidebar_drawer(
    ctx: &egui::Context,
    p: &Palette,
    active_panel: Panel,
    rows: &[sidebar::ConversationRow],
) -> Option<SidebarAction> {
    let rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("sidebar_drawer"))
        .order(egui::Order::Foreground)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(p.bg_secondary)
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.set_width(SIDEBAR_WIDTH);
                    ui.set_min_height(rect.height());
                    sidebar::sidebar_panel(ui, p, active_panel, rows)
                })
                .inner
        })
        .inner
}

/// Returns true when the drawer asked to close
fn status_drawer(ctx: &egui::Context, p: &Palette, ui_state: &UiState, endpoint: &str) -> bool {
    let rect = ctx.screen_rect();
    let width = STATUS_WIDTH.min(rect.width());
    egui::Area::new(egui::Id::new("status_drawer"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(rect.max.x - width, rect.min.y))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(p.bg_secondary)
                .inner_margin(PANEL_PADDING)
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.set_min_height(rect.height());
                    status::status_panel(
                        ui,
                        p,
                        &ui_state.status_text,
                        endpoint,
                        ui_state.last_error.as_deref(),
                    )
                })
                .inner
        })
        .inner
}
