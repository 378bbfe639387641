//! Shared Module
//!
//! Types shared by every part of the client: the JSON documents exchanged
//! with the routes API, error types, and configuration.

/// API wire types
pub mod models;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ApiError, StartupError, StorageError};
pub use models::{
    Credentials, Location, Place, Route, SearchCriteria, SignupRequest, StatEntry, TokenResponse, User,
    UserCategories,
};
