//! Dark navy/cyan theme shared by the backdrop and the widgets

use egui::Color32;

/// Navy backgrounds with cyan accents, matching the backdrop gradient
pub mod colors {
    use super::Color32;

    // === Backdrop gradient ===
    pub const SKY_TOP: Color32 = Color32::from_rgb(0, 9, 34); // #000922
    pub const SKY_BOTTOM: Color32 = Color32::from_rgb(0, 2, 21); // #000215

    // === Surfaces ===
    pub const PANEL: Color32 = Color32::from_rgb(4, 10, 28);
    pub const PANEL_RAISED: Color32 = Color32::from_rgb(10, 18, 40);
    pub const PANEL_HOVER: Color32 = Color32::from_rgb(16, 28, 56);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 244, 255);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(103, 232, 249);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 130, 160);

    // === Accents & borders ===
    pub const ACCENT: Color32 = Color32::from_rgb(8, 145, 178);
    pub const BORDER: Color32 = Color32::from_rgb(21, 56, 92);

    // === Backdrop strokes and glows ===
    pub const GRID_LINE: Color32 = Color32::from_rgb(0, 149, 255);
    pub const DUST_GLOW: Color32 = Color32::from_rgb(0, 200, 255);
    pub const HUB_CORE: Color32 = Color32::from_rgb(0, 255, 255);
    pub const HUB_MID: Color32 = Color32::from_rgb(0, 180, 255);
    pub const EDGE_DUST: Color32 = Color32::from_rgb(0, 180, 255);
    pub const EDGE_HUB: Color32 = Color32::from_rgb(0, 225, 255);

    // === Status ===
    pub const OK: Color32 = Color32::from_rgb(100, 200, 140);
    pub const BUSY: Color32 = Color32::from_rgb(200, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(230, 100, 100);
}

/// Create the night-sky egui Visuals
pub fn night_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    // Navy backgrounds; panels stay translucent so the backdrop shows through
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = PANEL_RAISED;
    visuals.extreme_bg_color = PANEL;
    visuals.faint_bg_color = PANEL_RAISED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = PANEL_RAISED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = PANEL_RAISED;

    visuals.widgets.hovered.bg_fill = PANEL_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_ACCENT);
    visuals.widgets.hovered.weak_bg_fill = PANEL_HOVER;

    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, TEXT_ACCENT);
    visuals.widgets.active.weak_bg_fill = ACCENT;

    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = TEXT_ACCENT;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
