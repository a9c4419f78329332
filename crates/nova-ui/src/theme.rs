//! Light and dark palettes

use egui::{Color32, CornerRadius, Stroke, Vec2};
use nova_types::theme::ThemeMode;

pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub on_accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub user_bubble: Color32,
    pub agent_bubble: Color32,
    pub backdrop: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(2, 6, 23),
    bg_secondary: Color32::from_rgb(15, 23, 42),
    bg_surface: Color32::from_rgb(30, 41, 59),
    text_primary: Color32::from_rgb(226, 232, 240),
    text_secondary: Color32::from_rgb(148, 163, 184),
    accent: Color32::from_rgb(34, 211, 238),
    on_accent: Color32::from_rgb(2, 6, 23),
    success: Color32::from_rgb(52, 211, 153),
    error: Color32::from_rgb(251, 113, 133),
    warning: Color32::from_rgb(252, 211, 77),
    user_bubble: Color32::from_rgb(8, 51, 68),
    agent_bubble: Color32::from_rgb(30, 41, 59),
    backdrop: Color32::from_black_alpha(102),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(248, 250, 252),
    bg_secondary: Color32::from_rgb(241, 245, 249),
    bg_surface: Color32::from_rgb(226, 232, 240),
    text_primary: Color32::from_rgb(15, 23, 42),
    text_secondary: Color32::from_rgb(71, 85, 105),
    accent: Color32::from_rgb(14, 165, 233),
    on_accent: Color32::from_rgb(248, 250, 252),
    success: Color32::from_rgb(5, 150, 105),
    error: Color32::from_rgb(225, 29, 72),
    warning: Color32::from_rgb(217, 119, 6),
    user_bubble: Color32::from_rgb(207, 250, 254),
    agent_bubble: Color32::from_rgb(255, 255, 255),
    backdrop: Color32::from_black_alpha(64),
};

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

/// Apply a theme to an egui context
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let p = palette(mode);
    let mut style = (*ctx.style()).clone();

    style.visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_secondary;

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = p.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.on_accent);

    style.visuals.selection.bg_fill = p.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, p.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
