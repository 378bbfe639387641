use eframe::egui;

use crate::egui_app::navigation::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("🧭 Rutafy").size(40.0).strong());
        ui.add_space(6.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new("Touristic routes built around your time and interests").size(16.0),
        );
        if let Some(email) = state.user_email() {
            ui.colored_label(colors::ACCENT, egui::RichText::new(email).size(16.0));
        }
        ui.add_space(24.0);
    });

    for screen in Screen::MENU.into_iter().filter(|s| *s != Screen::Home) {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(screen.label()).size(18.0).strong());
                    ui.colored_label(colors::TEXT_SECONDARY, screen.description());
                    if screen.requires_login() && !state.is_logged_in() {
                        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("Requires login").italics());
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let open = egui::Button::new("Open")
                        .min_size(egui::vec2(90.0, 30.0))
                        .fill(colors::ACCENT);
                    if ui.add(open).clicked() {
                        target = Some(screen);
                    }
                });
            });
        });
        ui.add_space(8.0);
    }

    if let Some(screen) = target {
        state.navigate(screen);
    }
}
