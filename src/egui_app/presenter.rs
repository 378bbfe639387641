//! Route/Place Presenter
//!
//! Pure formatting of routes for the views: titles, duration labels, map
//! coordinates and export rows. Nothing here touches the network or the UI.

use crate::shared::models::{Place, Route};

/// Separator between place names in a route title.
pub const TITLE_SEPARATOR: &str = " - ";

/// Marker standing for the places elided from a long title.
pub const ELLIPSIS: &str = "...";

/// Routes with more places than this get an abbreviated title.
const FULL_TITLE_MAX_PLACES: usize = 4;

/// A map marker position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One place flattened for tabular export.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRow {
    pub route_id: String,
    pub position: usize,
    pub name: String,
    pub municipality: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

impl PlaceRow {
    pub const HEADERS: [&'static str; 7] = [
        "route_id",
        "position",
        "name",
        "municipality",
        "lat",
        "lng",
        "description",
    ];
}

/// Route title: every name when there are at most four places, otherwise the
/// first two and last two around an ellipsis.
pub fn route_title(route: &Route) -> String {
    let names: Vec<&str> = route.places.iter().map(|p| p.name.as_str()).collect();
    if names.len() > FULL_TITLE_MAX_PLACES {
        let n = names.len();
        [names[0], names[1], ELLIPSIS, names[n - 2], names[n - 1]].join(TITLE_SEPARATOR)
    } else {
        names.join(TITLE_SEPARATOR)
    }
}

/// Whole hours in `minutes`, truncated.
pub fn duration_hours(minutes: u32) -> u32 {
    minutes / 60
}

pub fn duration_label(route: &Route) -> String {
    format!(
        "{} minutes (>{} hours)",
        route.minutes,
        duration_hours(route.minutes)
    )
}

/// Marker positions in visiting order.
pub fn coordinates(route: &Route) -> Vec<LatLng> {
    route
        .places
        .iter()
        .map(|p| LatLng {
            lat: p.location.lat(),
            lng: p.location.lng(),
        })
        .collect()
}

/// Where a map of the route should be centred: its first place.
pub fn map_center(route: &Route) -> Option<LatLng> {
    coordinates(route).into_iter().next()
}

pub fn coordinates_label(place: &Place) -> String {
    format!("{} , {}", place.location.lat(), place.location.lng())
}

/// Comma-separated place names.
pub fn place_list(route: &Route) -> String {
    route
        .places
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn export_rows(route: &Route) -> Vec<PlaceRow> {
    route
        .places
        .iter()
        .enumerate()
        .map(|(i, p)| PlaceRow {
            route_id: route.id.clone(),
            position: i + 1,
            name: p.name.clone(),
            municipality: p.municipality.clone(),
            lat: p.location.lat(),
            lng: p.location.lng(),
            description: p.description.clone(),
        })
        .collect()
}
