//! Mock server helpers for integration tests
//!
//! Every test gets its own wiremock server and an [`ApiClient`] pointed at
//! it, sharing an in-memory session store with the test.

use rutafy::egui_app::{ApiClient, Config, SessionStore};
use rutafy::shared::config::AppConfig;
use rutafy::shared::User;
use wiremock::MockServer;

/// A mock routes API and a client talking to it.
pub struct TestApi {
    pub server: MockServer,
    pub session: SessionStore,
    pub api: ApiClient,
}

impl TestApi {
    /// Anonymous client: empty session.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = Config::with_builder(AppConfig::builder().server_url(server.uri()))
            .expect("mock server uri is a valid url");
        let session = SessionStore::in_memory();
        let api = ApiClient::new(&config, session.clone()).expect("client builds");
        Self {
            server,
            session,
            api,
        }
    }

    /// Client whose session already holds `token`.
    pub async fn logged_in(token: &str) -> Self {
        let test = Self::start().await;
        test.session.set_token(token).expect("memory storage never fails");
        test
    }

    /// Client whose session holds `token` and a cached `user`.
    pub async fn logged_in_as(token: &str, user: &User) -> Self {
        let test = Self::logged_in(token).await;
        test.session
            .set_cached_user(user)
            .expect("memory storage never fails");
        test
    }

    /// Query string of every request received so far, in order.
    pub async fn received_queries(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.query().unwrap_or_default().to_string())
            .collect()
    }
}
