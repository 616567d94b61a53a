/// HTTP handlers
pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use crate::{
    error::{Result, ServerError},
    views::Notice,
};
use serde::Deserialize;

/// Search form body; a missing term searches for everything
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// `?notice=` carried across a redirect so the target page can report the
/// outcome of the request that sent it there
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub const SAVED: &'static str = "saved";
    pub const VENUE_DELETED: &'static str = "venue-deleted";
    pub const ARTIST_DELETED: &'static str = "artist-deleted";

    /// Unknown keys render nothing
    pub fn notices(&self) -> Vec<Notice> {
        let message = match self.notice.as_deref() {
            Some(Self::SAVED) => "Changes saved successfully",
            Some(Self::VENUE_DELETED) => "Venue deleted successfully.",
            Some(Self::ARTIST_DELETED) => "Artist deleted successfully.",
            _ => return Vec::new(),
        };
        vec![Notice::success(message)]
    }
}

/// Parse a path id. Ids that are not numbers cannot name a record.
fn parse_id(entity: &str, raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ServerError::NotFound(format!("{entity} {raw} not found")))
}
