use eframe::egui;

use super::route_card;
use crate::egui_app::controllers::{AddEvent, Event};
use crate::egui_app::presenter;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let add = &state.controllers.add;
    let mut events = Vec::new();

    styles::heading(ui, "Add a route");

    if !add.logged_in {
        ui.colored_label(colors::ERROR, "You must be logged in to add routes.");
        ui.add_space(8.0);
    }

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Next place:");
            if let Some(place) = super::picker(ui, "add_places", "Choose a place", &add.all_places) {
                events.push(Event::Add(AddEvent::PlacePicked(place)));
            }
        });
        super::chips(ui, &add.places);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let can_add = add.logged_in && !add.places.is_empty() && !add.submitting;
            if ui
                .add_enabled(can_add, egui::Button::new("Add route").fill(colors::ACCENT))
                .clicked()
            {
                events.push(Event::Add(AddEvent::AddRequested));
            }
            if ui.button("Clear").clicked() {
                events.push(Event::Add(AddEvent::Cleared));
            }
            if add.submitting {
                ui.spinner();
            }
        });
    });
    ui.add_space(12.0);

    if let Some(route) = &add.last_added {
        ui.colored_label(
            colors::SUCCESS,
            format!("Added: {}", presenter::place_list(route)),
        );
        ui.add_space(6.0);
        route_card::render_route(ui, route, false);
    }

    super::flush(state, events);
}
