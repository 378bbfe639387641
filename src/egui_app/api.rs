//! Routes API Client
//!
//! Async client for the routes REST API. One shared `reqwest::Client` with a
//! cookie store, paths resolved against the configured base URL, bearer
//! tokens read from the [`SessionStore`] on every protected call.
//!
//! Failures are returned as [`ApiError`]; the controllers decide whether a
//! failure becomes an empty list, an error flag, or nothing at all.

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::egui_app::config::Config;
use crate::egui_app::session::SessionStore;
use crate::shared::error::ApiError;
use crate::shared::models::{
    Credentials, Place, Route, SearchCriteria, SignupRequest, StatEntry, TokenResponse, User,
    UserCategories,
};

/// Whether a request must carry the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Required,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`, used by the token endpoint.
    Form(Vec<(String, String)>),
}

impl Body {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::encode(e.to_string()))
    }
}

/// Routes API client
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    client: Client,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, ApiError> {
        let base = Url::parse(config.server_url())
            .map_err(|_| ApiError::InvalidUrl(config.server_url().to_string()))?;
        // Cookie store plays the part of credentialed cross-origin requests.
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        Ok(Self {
            base,
            client,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn build(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Body,
        auth: Auth,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        let mut request = self.client.request(method, url);

        if !query.is_empty() {
            request = request.query(query);
        }

        if auth == Auth::Required {
            let token = self.session.get_token().ok_or(ApiError::Unauthorized)?;
            request = request.bearer_auth(token);
        }

        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Form(pairs) => request.form(&pairs),
        };

        Ok(request)
    }

    /// Send a request and check the status. Non-2xx answers become
    /// [`ApiError::Status`] carrying the response body.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Body,
        auth: Auth,
    ) -> Result<Response, ApiError> {
        let path = segments.join("/");
        let request = match self.build(method.clone(), segments, query, body, auth) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("{} /{} not sent: {}", method, path, err);
                return Err(err);
            }
        };

        tracing::debug!("{} /{}", method, path);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!("{} /{} failed: {} - {}", method, path, status, error_text);
            return Err(ApiError::status(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Send a request and parse the JSON answer.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Body,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let response = self.send(method, segments, query, body, auth).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], auth: Auth) -> Result<T, ApiError> {
        self.request(Method::GET, segments, &[], Body::Empty, auth).await
    }

    /// `GET /places/names`
    pub async fn place_names(&self) -> Result<Vec<String>, ApiError> {
        self.get(&["places", "names"], Auth::Anonymous).await
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get(&["categories"], Auth::Anonymous).await
    }

    /// `GET /routes?minutes&categories&places_names`
    pub async fn search_routes(&self, criteria: &SearchCriteria) -> Result<Vec<Route>, ApiError> {
        self.request(
            Method::GET,
            &["routes"],
            &criteria.to_query_pairs(),
            Body::Empty,
            Auth::Anonymous,
        )
        .await
    }

    /// `POST /routes` with the ordered place names.
    pub async fn add_route(&self, places: &[String]) -> Result<Route, ApiError> {
        self.request(Method::POST, &["routes"], &[], Body::json(places)?, Auth::Required)
            .await
    }

    /// `POST /routes/{id}/fav`
    pub async fn make_route_favourite(&self, route_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::POST,
            &["routes", route_id, "fav"],
            &[],
            Body::Empty,
            Auth::Required,
        )
        .await
        .map(|_| ())
    }

    /// `POST /places/{name}/fav`
    pub async fn make_place_favourite(&self, name: &str) -> Result<(), ApiError> {
        self.send(
            Method::POST,
            &["places", name, "fav"],
            &[],
            Body::Empty,
            Auth::Required,
        )
        .await
        .map(|_| ())
    }

    /// `GET /fav/routes`
    pub async fn favourite_routes(&self) -> Result<Vec<Route>, ApiError> {
        self.get(&["fav", "routes"], Auth::Required).await
    }

    /// `GET /fav/places`
    pub async fn favourite_places(&self) -> Result<Vec<Place>, ApiError> {
        self.get(&["fav", "places"], Auth::Required).await
    }

    /// `POST /token` with a form body.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let form = Body::Form(vec![
            ("username".to_string(), credentials.username.clone()),
            ("password".to_string(), credentials.password.clone()),
        ]);
        self.request(Method::POST, &["token"], &[], form, Auth::Anonymous)
            .await
    }

    /// `POST /user`. Any 2xx status means the account exists; the body is
    /// not read.
    pub async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = Body::json(&SignupRequest::from(credentials))?;
        self.send(Method::POST, &["user"], &[], body, Auth::Anonymous)
            .await
            .map(|_| ())
    }

    /// `GET /user`
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(&["user"], Auth::Required).await
    }

    /// `POST /user/categories`; the answer is every category the user now
    /// follows.
    pub async fn add_user_categories(&self, categories: &[String]) -> Result<Vec<String>, ApiError> {
        let answer: UserCategories = self
            .request(
                Method::POST,
                &["user", "categories"],
                &[],
                Body::json(categories)?,
                Auth::Required,
            )
            .await?;
        Ok(answer.categories)
    }

    /// `GET /stats/categories`
    pub async fn category_stats(&self) -> Result<Vec<StatEntry>, ApiError> {
        self.get(&["stats", "categories"], Auth::Required).await
    }

    /// `GET /stats/municipalities`
    pub async fn municipality_stats(&self) -> Result<Vec<StatEntry>, ApiError> {
        self.get(&["stats", "municipalities"], Auth::Required).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn client(url: &str) -> ApiClient {
        let config = Config::with_builder(AppConfig::builder().server_url(url)).unwrap();
        ApiClient::new(&config, SessionStore::in_memory()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:8000");
        let url = api.endpoint(&["places", "names"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/places/names");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = client("https://example.org/api/");
        let url = api.endpoint(&["fav", "routes"]).unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/fav/routes");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let api = client("http://localhost:8000");
        let url = api.endpoint(&["places", "Castillo de Loarre", "fav"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/places/Castillo%20de%20Loarre/fav");
    }

    #[test]
    fn test_body_json() {
        let body = Body::json(&["history", "nature"]).unwrap();
        assert_eq!(body, Body::Json(serde_json::json!(["history", "nature"])));
    }

    #[tokio::test]
    async fn test_protected_call_without_token_fails_fast() {
        // Nothing listens on port 9; a sent request would be a network error.
        let api = client("http://127.0.0.1:9");
        let result = api.favourite_routes().await;
        assert_eq!(result, Err(ApiError::Unauthorized));
    }
}
