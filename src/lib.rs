//! Rutafy - Main Library
//!
//! Rutafy is a desktop client for a touristic routes REST API: search routes
//! that fit the time you have and the things you like, compose your own,
//! keep favourites and see statistics about them.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the UI
//!   - Wire types for places, routes, users and statistics
//!   - Error types
//!   - Configuration file and builder
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session store and API client
//!   - Screen controllers and presenter
//!   - Views and theme
//!
//! # Usage
//!
//! Controllers can be driven without a UI:
//!
//! ```rust,no_run
//! use rutafy::egui_app::{ApiClient, Config, Controllers, Screen, SessionStore};
//!
//! # async fn example() -> Result<(), rutafy::shared::ApiError> {
//! let session = SessionStore::in_memory();
//! let api = ApiClient::new(&Config::new(), session.clone())?;
//!
//! let mut controllers = Controllers::default();
//! let commands = controllers.mount(Screen::Search, session.snapshot());
//! controllers.settle(&api, commands).await;
//! println!("{} categories", controllers.search.all_categories.len());
//! # Ok(())
//! # }
//! ```

pub mod shared;

#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
