//! Route and place cards shared by the search, add and favourites screens.

use eframe::egui;

use crate::egui_app::presenter::{self, PlaceRow};
use crate::egui_app::theme::{colors, styles};
use crate::shared::models::{Place, Route};

/// What the user asked to favourite from a route card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Favourite {
    Route,
    Place(String),
}

/// Draw a route. Favourite buttons, for the route and for each of its places,
/// are only drawn when `can_favourite`.
pub fn render_route(ui: &mut egui::Ui, route: &Route, can_favourite: bool) -> Option<Favourite> {
    let mut favourite = None;

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(presenter::route_title(route)).size(17.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if can_favourite
                    && ui
                        .button(egui::RichText::new("★ Favourite").color(colors::FAVOURITE))
                        .clicked()
                {
                    favourite = Some(Favourite::Route);
                }
            });
        });
        ui.colored_label(colors::TEXT_SECONDARY, presenter::duration_label(route));
        if !route.categories.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, route.categories.join(", "));
        }

        egui::CollapsingHeader::new("Places")
            .id_salt(("places", &route.id))
            .show(ui, |ui| {
                for (i, place) in route.places.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}.", i + 1));
                        render_place_summary(ui, place);
                        if can_favourite
                            && ui
                                .small_button(egui::RichText::new("★").color(colors::FAVOURITE))
                                .on_hover_text("Favourite place")
                                .clicked()
                        {
                            favourite = Some(Favourite::Place(place.name.clone()));
                        }
                    });
                }
            });

        egui::CollapsingHeader::new("Map")
            .id_salt(("map", &route.id))
            .show(ui, |ui| {
                if let Some(center) = presenter::map_center(route) {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("Centre: {} , {}", center.lat, center.lng),
                    );
                }
                for (i, point) in presenter::coordinates(route).iter().enumerate() {
                    ui.monospace(format!("{:>2}  {:>10.5}  {:>10.5}", i + 1, point.lat, point.lng));
                }
            });

        egui::CollapsingHeader::new("Table")
            .id_salt(("table", &route.id))
            .show(ui, |ui| render_rows(ui, &route.id, &presenter::export_rows(route)));
    });
    ui.add_space(8.0);

    favourite
}

/// Draw a favourite place.
pub fn render_place(ui: &mut egui::Ui, place: &Place) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&place.name).size(17.0).strong());
        ui.colored_label(colors::TEXT_SECONDARY, &place.municipality);
        ui.monospace(presenter::coordinates_label(place));
        if !place.description.is_empty() {
            ui.label(&place.description);
        }
    });
    ui.add_space(8.0);
}

fn render_place_summary(ui: &mut egui::Ui, place: &Place) {
    ui.label(egui::RichText::new(&place.name).strong());
    if !place.municipality.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, format!("({})", place.municipality));
    }
    ui.monospace(presenter::coordinates_label(place));
}

fn render_rows(ui: &mut egui::Ui, route_id: &str, rows: &[PlaceRow]) {
    egui::Grid::new(("rows", route_id))
        .striped(true)
        .num_columns(PlaceRow::HEADERS.len())
        .show(ui, |ui| {
            for header in PlaceRow::HEADERS {
                ui.strong(header);
            }
            ui.end_row();
            for row in rows {
                ui.label(&row.route_id);
                ui.label(row.position.to_string());
                ui.label(&row.name);
                ui.label(&row.municipality);
                ui.label(row.lat.to_string());
                ui.label(row.lng.to_string());
                ui.label(&row.description);
                ui.end_row();
            }
        });
}
