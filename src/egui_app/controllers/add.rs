//! Add-Route Controller

use crate::egui_app::api::ApiClient;
use crate::egui_app::session::Session;
use crate::shared::models::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddState {
    pub logged_in: bool,
    pub all_places: Vec<String>,
    /// Place names in visiting order.
    pub places: Vec<String>,
    pub last_added: Option<Route>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddEvent {
    Mounted(Session),
    PlaceNamesLoaded(Vec<String>),
    PlacePicked(String),
    Cleared,
    AddRequested,
    RouteAdded(Route),
    AddFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddCommand {
    LoadPlaceNames,
    AddRoute(Vec<String>),
}

impl AddCommand {
    pub fn requires_auth(&self) -> bool {
        matches!(self, AddCommand::AddRoute(_))
    }
}

pub fn reduce(mut state: AddState, event: AddEvent) -> (AddState, Vec<AddCommand>) {
    match event {
        AddEvent::Mounted(session) => {
            state.logged_in = session.is_authenticated();
            (state, vec![AddCommand::LoadPlaceNames])
        }
        AddEvent::PlaceNamesLoaded(names) => {
            state.all_places = names;
            (state, vec![])
        }
        AddEvent::PlacePicked(name) => {
            state.places.push(name);
            (state, vec![])
        }
        AddEvent::Cleared => {
            state.places.clear();
            (state, vec![])
        }
        AddEvent::AddRequested => {
            if !state.logged_in || state.places.is_empty() || state.submitting {
                return (state, vec![]);
            }
            state.submitting = true;
            let command = AddCommand::AddRoute(state.places.clone());
            (state, vec![command])
        }
        AddEvent::RouteAdded(route) => {
            state.last_added = Some(route);
            state.submitting = false;
            (state, vec![])
        }
        AddEvent::AddFailed => {
            state.submitting = false;
            (state, vec![])
        }
    }
}

pub async fn execute(command: AddCommand, api: &ApiClient) -> Option<AddEvent> {
    match command {
        AddCommand::LoadPlaceNames => {
            let names = api.place_names().await.unwrap_or_else(|err| {
                tracing::warn!("place names unavailable: {}", err);
                Vec::new()
            });
            Some(AddEvent::PlaceNamesLoaded(names))
        }
        AddCommand::AddRoute(places) => match api.add_route(&places).await {
            Ok(route) => {
                tracing::info!("route {} added with {} places", route.id, route.places.len());
                Some(AddEvent::RouteAdded(route))
            }
            Err(err) => {
                tracing::warn!("route not added: {}", err);
                Some(AddEvent::AddFailed)
            }
        },
    }
}
