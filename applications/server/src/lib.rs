//! Gigbook Server Library
//!
//! Web front end for booking venues and artists into shows: HTML pages,
//! form submissions and a JSON delete endpoint over `gigbook-storage`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod router;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
