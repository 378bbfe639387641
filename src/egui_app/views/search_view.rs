use eframe::egui;

use super::route_card::{self, Favourite};
use crate::egui_app::controllers::{Event, SearchEvent};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let search = &state.controllers.search;
    let mut events = Vec::new();

    styles::heading(ui, "Search routes");

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        let mut minutes = search.criteria.minutes;
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Available time:");
            let slider = egui::Slider::new(&mut minutes, 15..=720)
                .step_by(15.0)
                .suffix(" min");
            if ui.add(slider).changed() {
                events.push(Event::Search(SearchEvent::MinutesChanged(minutes)));
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Categories:");
            if let Some(category) = super::picker(ui, "search_categories", "Choose a category", &search.all_categories) {
                events.push(Event::Search(SearchEvent::CategoryPicked(category)));
            }
        });
        super::chips(ui, &search.criteria.categories);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Places to visit:");
            if let Some(place) = super::picker(ui, "search_places", "Choose a place", &search.all_places) {
                events.push(Event::Search(SearchEvent::PlacePicked(place)));
            }
        });
        super::chips(ui, &search.criteria.places);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.add(egui::Button::new("Search").fill(colors::ACCENT)).clicked() {
                events.push(Event::Search(SearchEvent::SearchRequested));
            }
            if ui.button("Clear").clicked() {
                events.push(Event::Search(SearchEvent::Cleared));
            }
            if search.searching {
                ui.spinner();
            }
        });
    });
    ui.add_space(12.0);

    if search.results.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No routes to show");
    }
    for route in &search.results {
        match route_card::render_route(ui, route, search.can_favourite()) {
            Some(Favourite::Route) => {
                events.push(Event::Search(SearchEvent::FavouriteRequested(route.id.clone())));
            }
            Some(Favourite::Place(name)) => {
                events.push(Event::Search(SearchEvent::PlaceFavouriteRequested(name)));
            }
            None => {}
        }
    }

    super::flush(state, events);
}
