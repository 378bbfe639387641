//! Common test utilities and helpers
//!
//! - Mock routes API backed by wiremock
//! - Fixtures for places, routes and users

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
