//! Show types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::artist::ArtistId;
use super::venue::VenueId;
use crate::schedule::Scheduled;

pub type ShowId = i64;

/// An artist playing a venue at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// Data for creating a new show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// A show joined with both sides, for the global show listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub id: ShowId,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show on a venue page, carrying the performing artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowWithArtist {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show on an artist page, carrying the hosting venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowWithVenue {
    pub id: ShowId,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Scheduled for ShowWithArtist {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ShowWithVenue {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}
