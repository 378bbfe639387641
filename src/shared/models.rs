//! Wire types exchanged with the routes API.
//!
//! Every type here mirrors a JSON document produced or consumed by the
//! server. Optional server fields are defaulted so that partial documents
//! still deserialize.

use serde::{Deserialize, Serialize};

/// GeoJSON point. `coordinates` is `[lat, lng]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type", default = "default_location_type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn default_location_type() -> String {
    "Point".to_string()
}

impl Location {
    pub fn point(lat: f64, lng: f64) -> Self {
        Self {
            kind: default_location_type(),
            coordinates: vec![lat, lng],
        }
    }

    /// Latitude, or 0.0 when the server sent a short coordinate list.
    pub fn lat(&self) -> f64 {
        self.coordinates.first().copied().unwrap_or_default()
    }

    pub fn lng(&self) -> f64 {
        self.coordinates.get(1).copied().unwrap_or_default()
    }
}

/// A visitable place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub location: Location,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// An ordered itinerary of places with its estimated duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub minutes: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Profile of the logged-in user, also cached locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Answer of `POST /user/categories`: the full list of followed categories.
/// The server does not echo the email back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserCategories {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Answer of `POST /token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Default search length, two hours.
pub const DEFAULT_SEARCH_MINUTES: u32 = 120;

/// Parameters of `GET /routes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub minutes: u32,
    pub categories: Vec<String>,
    pub places: Vec<String>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_SEARCH_MINUTES,
            categories: Vec::new(),
            places: Vec::new(),
        }
    }
}

impl SearchCriteria {
    /// Query pairs in wire order: `minutes`, then one `categories` per
    /// category, then one `places_names` per place, each in insertion order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(1 + self.categories.len() + self.places.len());
        pairs.push(("minutes", self.minutes.to_string()));
        pairs.extend(self.categories.iter().map(|c| ("categories", c.clone())));
        pairs.extend(self.places.iter().map(|p| ("places_names", p.clone())));
        pairs
    }
}

/// Username/password pair typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for SignupRequest {
    fn from(value: &Credentials) -> Self {
        Self {
            email: value.username.clone(),
            password: value.password.clone(),
        }
    }
}

/// One row of a favourites statistic.
///
/// The server answers with `[name, count]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u64)")]
pub struct StatEntry {
    pub name: String,
    pub count: u64,
}

impl From<(String, u64)> for StatEntry {
    fn from((name, count): (String, u64)) -> Self {
        Self { name, count }
    }
}
