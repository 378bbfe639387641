//! Search Controller
//!
//! Criteria and results for `GET /routes`. Category and place options are
//! loaded once per mount.

use crate::egui_app::api::ApiClient;
use crate::egui_app::session::Session;
use crate::shared::models::{Route, SearchCriteria};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub criteria: SearchCriteria,
    pub results: Vec<Route>,
    pub all_categories: Vec<String>,
    pub all_places: Vec<String>,
    pub logged_in: bool,
    pub searching: bool,
}

impl SearchState {
    /// Favourite buttons are shown only with a session token.
    pub fn can_favourite(&self) -> bool {
        self.logged_in
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Mounted(Session),
    CategoriesLoaded(Vec<String>),
    PlaceNamesLoaded(Vec<String>),
    MinutesChanged(u32),
    CategoryPicked(String),
    PlacePicked(String),
    Cleared,
    SearchRequested,
    ResultsLoaded(Vec<Route>),
    /// Route id.
    FavouriteRequested(String),
    /// Place name, from a place listed in a result.
    PlaceFavouriteRequested(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    LoadCategories,
    LoadPlaceNames,
    Search(SearchCriteria),
    MakeFavourite(String),
    MakePlaceFavourite(String),
}

impl SearchCommand {
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            SearchCommand::MakeFavourite(_) | SearchCommand::MakePlaceFavourite(_)
        )
    }
}

pub fn reduce(mut state: SearchState, event: SearchEvent) -> (SearchState, Vec<SearchCommand>) {
    match event {
        SearchEvent::Mounted(session) => {
            state.logged_in = session.is_authenticated();
            (
                state,
                vec![SearchCommand::LoadCategories, SearchCommand::LoadPlaceNames],
            )
        }
        SearchEvent::CategoriesLoaded(categories) => {
            state.all_categories = categories;
            (state, vec![])
        }
        SearchEvent::PlaceNamesLoaded(names) => {
            state.all_places = names;
            (state, vec![])
        }
        SearchEvent::MinutesChanged(minutes) => {
            state.criteria.minutes = minutes;
            (state, vec![])
        }
        SearchEvent::CategoryPicked(category) => {
            state.criteria.categories.push(category);
            (state, vec![])
        }
        SearchEvent::PlacePicked(place) => {
            state.criteria.places.push(place);
            (state, vec![])
        }
        SearchEvent::Cleared => {
            state.criteria = SearchCriteria::default();
            (state, vec![])
        }
        SearchEvent::SearchRequested => {
            state.searching = true;
            let command = SearchCommand::Search(state.criteria.clone());
            (state, vec![command])
        }
        SearchEvent::ResultsLoaded(routes) => {
            state.results = routes;
            state.searching = false;
            (state, vec![])
        }
        SearchEvent::FavouriteRequested(route_id) => {
            if !state.can_favourite() {
                return (state, vec![]);
            }
            (state, vec![SearchCommand::MakeFavourite(route_id)])
        }
        SearchEvent::PlaceFavouriteRequested(name) => {
            if !state.can_favourite() {
                return (state, vec![]);
            }
            (state, vec![SearchCommand::MakePlaceFavourite(name)])
        }
    }
}

pub async fn execute(command: SearchCommand, api: &ApiClient) -> Option<SearchEvent> {
    match command {
        SearchCommand::LoadCategories => {
            let categories = api.categories().await.unwrap_or_else(|err| {
                tracing::warn!("categories unavailable: {}", err);
                Vec::new()
            });
            Some(SearchEvent::CategoriesLoaded(categories))
        }
        SearchCommand::LoadPlaceNames => {
            let names = api.place_names().await.unwrap_or_else(|err| {
                tracing::warn!("place names unavailable: {}", err);
                Vec::new()
            });
            Some(SearchEvent::PlaceNamesLoaded(names))
        }
        SearchCommand::Search(criteria) => {
            let routes = api.search_routes(&criteria).await.unwrap_or_else(|err| {
                tracing::warn!("route search failed: {}", err);
                Vec::new()
            });
            tracing::debug!("{} routes found", routes.len());
            Some(SearchEvent::ResultsLoaded(routes))
        }
        SearchCommand::MakeFavourite(route_id) => {
            // No feedback on failure; the favourites screen shows the truth.
            if let Err(err) = api.make_route_favourite(&route_id).await {
                tracing::debug!("favourite {} not saved: {}", route_id, err);
            }
            None
        }
        SearchCommand::MakePlaceFavourite(name) => {
            if let Err(err) = api.make_place_favourite(&name).await {
                tracing::debug!("favourite place {} not saved: {}", name, err);
            }
            None
        }
    }
}
