//! Artist types

use serde::{Deserialize, Serialize};

use super::show::ShowWithVenue;

pub type ArtistId = i64;

/// A performing artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Data for creating a new artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Replacement data for an existing artist (full overwrite)
pub type UpdateArtist = CreateArtist;

/// An artist as shown in the flat listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

/// Artist detail page projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ShowWithVenue>,
    pub upcoming_shows: Vec<ShowWithVenue>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    /// Build the projection from an artist and its already-partitioned shows
    pub fn new(
        artist: Artist,
        past_shows: Vec<ShowWithVenue>,
        upcoming_shows: Vec<ShowWithVenue>,
    ) -> Self {
        Self {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
