//! Gigbook Core
//!
//! Storage-agnostic domain types, error handling, and the small amount of
//! listing logic shared by the storage layer and the web server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Venue`, `Artist`, `Show` and their create/update payloads
//! - **Projections**: read-only detail and listing shapes built from entities
//! - **Listing Logic**: past/upcoming partitioning, area grouping, name search
//! - **Error Handling**: Unified `GigError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use gigbook_core::schedule::is_upcoming;
//!
//! let now = Utc::now();
//! assert!(is_upcoming(now + Duration::hours(1), now));
//! assert!(!is_upcoming(now, now));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod listing;
pub mod schedule;
pub mod types;

pub use error::{GigError, Result, ValidationError};
pub use types::{
    // Venues
    CreateVenue, UpdateVenue, Venue, VenueArea, VenueDetail, VenueId, VenueSummary,
    // Artists
    Artist, ArtistDetail, ArtistId, ArtistSummary, CreateArtist, UpdateArtist,
    // Shows
    CreateShow, Show, ShowId, ShowListing, ShowWithArtist, ShowWithVenue,
    // Search
    SearchResults,
};
