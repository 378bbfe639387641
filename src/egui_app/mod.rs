//! egui Native Desktop App Module
//!
//! Desktop client for the touristic routes API, built with egui/eframe.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration layers (server URL, storage directory)
//! - **`session`** - Token and cached user, over pluggable key/value storage
//! - **`api`** - Async REST client for the routes API
//! - **`controllers`** - Per-screen state and pure reducers
//! - **`presenter`** - Route titles, durations, coordinates, export rows
//! - **`navigation`** - Path to screen mapping
//! - **`state`** - Runtime, mount tracking and event dispatch
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── session.rs      - Session store
//! ├── api.rs          - API client
//! ├── presenter.rs    - Route formatting
//! ├── navigation.rs   - Screens and paths
//! ├── controllers/    - One module per screen
//! ├── state/          - AppState
//! ├── views/          - One module per screen
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin rutafy
//! ```

pub mod config;
pub mod session;
pub mod api;
pub mod controllers;
pub mod presenter;
pub mod navigation;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use api::ApiClient;
pub use controllers::{Access, Command, Controllers, Event};
pub use navigation::Screen;
pub use session::{FileStorage, KeyValueStore, MemoryStorage, Session, SessionStore};
pub use state::AppState;
