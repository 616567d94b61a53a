//! Venue types

use serde::{Deserialize, Serialize};

use super::show::ShowWithArtist;

pub type VenueId = i64;

/// A venue that hosts shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Data for creating a new venue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Replacement data for an existing venue.
///
/// Updates overwrite every column, so the payload is the full field set.
pub type UpdateVenue = CreateVenue;

/// A venue as shown in the grouped listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one exact (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Venue detail page projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ShowWithArtist>,
    pub upcoming_shows: Vec<ShowWithArtist>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    /// Build the projection from a venue and its already-partitioned shows
    pub fn new(
        venue: Venue,
        past_shows: Vec<ShowWithArtist>,
        upcoming_shows: Vec<ShowWithArtist>,
    ) -> Self {
        Self {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
