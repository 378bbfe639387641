use eframe::egui;

use super::route_card;
use crate::egui_app::controllers::Access;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Favourites");

    let Access::Authenticated(favourites) = &state.controllers.favourites else {
        super::render_login_prompt(ui, state, "your favourites");
        return;
    };

    ui.label(egui::RichText::new("Routes").size(18.0).strong());
    ui.add_space(4.0);
    if favourites.routes.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No favourite routes yet");
    }
    for route in &favourites.routes {
        route_card::render_route(ui, route, false);
    }

    ui.add_space(12.0);
    ui.label(egui::RichText::new("Places").size(18.0).strong());
    ui.add_space(4.0);
    if favourites.places.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No favourite places yet");
    }
    for place in &favourites.places {
        route_card::render_place(ui, place);
    }
}
