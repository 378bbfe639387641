//! Favourites Controller

use super::Access;
use crate::egui_app::api::ApiClient;
use crate::egui_app::session::Session;
use crate::shared::models::{Place, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favourites {
    pub routes: Vec<Route>,
    pub places: Vec<Place>,
}

pub type FavouritesState = Access<Favourites>;

#[derive(Debug, Clone, PartialEq)]
pub enum FavouritesEvent {
    Mounted(Session),
    RoutesLoaded(Vec<Route>),
    PlacesLoaded(Vec<Place>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouritesCommand {
    LoadRoutes,
    LoadPlaces,
}

impl FavouritesCommand {
    pub fn requires_auth(&self) -> bool {
        true
    }
}

pub fn reduce(
    state: FavouritesState,
    event: FavouritesEvent,
) -> (FavouritesState, Vec<FavouritesCommand>) {
    match (state, event) {
        (_, FavouritesEvent::Mounted(session)) => {
            if !session.is_authenticated() {
                return (Access::Anonymous, vec![]);
            }
            (
                Access::Authenticated(Favourites::default()),
                vec![FavouritesCommand::LoadRoutes, FavouritesCommand::LoadPlaces],
            )
        }
        (Access::Authenticated(mut favourites), FavouritesEvent::RoutesLoaded(routes)) => {
            favourites.routes = routes;
            (Access::Authenticated(favourites), vec![])
        }
        (Access::Authenticated(mut favourites), FavouritesEvent::PlacesLoaded(places)) => {
            favourites.places = places;
            (Access::Authenticated(favourites), vec![])
        }
        (Access::Anonymous, _) => (Access::Anonymous, vec![]),
    }
}

pub async fn execute(command: FavouritesCommand, api: &ApiClient) -> Option<FavouritesEvent> {
    match command {
        FavouritesCommand::LoadRoutes => {
            let routes = api.favourite_routes().await.unwrap_or_else(|err| {
                tracing::warn!("favourite routes unavailable: {}", err);
                Vec::new()
            });
            Some(FavouritesEvent::RoutesLoaded(routes))
        }
        FavouritesCommand::LoadPlaces => {
            let places = api.favourite_places().await.unwrap_or_else(|err| {
                tracing::warn!("favourite places unavailable: {}", err);
                Vec::new()
            });
            Some(FavouritesEvent::PlacesLoaded(places))
        }
    }
}
