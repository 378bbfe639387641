//! Theme Styling Functions
//!
//! Helpers applying the palette consistently across screens.

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.override_text_color = Some(colors::TEXT_LIGHT);

    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.weak_bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::MENU_ACTIVE;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for the scrolling content of a screen
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::symmetric(24, 16))
}

/// Frame for a route, place or home card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Small rounded label for a picked category or place
pub fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(colors::CHIP)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(colors::CHIP_TEXT));
        });
}

/// Section heading inside a screen
pub fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).size(22.0).strong().color(colors::TEXT_LIGHT));
    ui.add_space(8.0);
}
