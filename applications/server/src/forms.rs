//! Form decoding
//!
//! Submissions arrive as `application/x-www-form-urlencoded` pairs. Keys may
//! repeat (`genres`), and checkbox markers are either present or absent, so
//! handlers extract `Form<Vec<(String, String)>>` and decode from there.

use chrono::{DateTime, NaiveDateTime, Utc};
use gigbook_core::{Artist, CreateArtist, CreateShow, CreateVenue, ValidationError, Venue};

/// Genre choices offered by the venue and artist forms
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// State choices offered by the venue and artist forms
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Accepted `start_time` layouts, tried in order after RFC 3339
const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Raw submitted key/value pairs
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    /// First value submitted under `key`, or `""`
    pub fn text(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Every value submitted under `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Whether `key` was submitted at all
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn genres_from(fields: &FormFields) -> Vec<String> {
    fields
        .all("genres")
        .into_iter()
        .filter(|g| !g.trim().is_empty())
        .collect()
}

/// Values of the venue form, as submitted or as loaded for editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueFormValues {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name").to_string(),
            city: fields.text("city").to_string(),
            state: fields.text("state").to_string(),
            address: fields.text("address").to_string(),
            phone: fields.text("phone").to_string(),
            image_link: fields.text("image_link").to_string(),
            facebook_link: fields.text("facebook_link").to_string(),
            website_link: fields.text("website_link").to_string(),
            genres: genres_from(fields),
            seeking_talent: fields.has("seeking_talent"),
            seeking_description: fields.text("seeking_description").to_string(),
        }
    }

    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// Coerce into a create/update payload
    ///
    /// # Errors
    /// `MissingField` for a blank name, city, state or address
    pub fn into_create(self) -> Result<CreateVenue, ValidationError> {
        Ok(CreateVenue {
            name: required("name", self.name)?,
            city: required("city", self.city)?,
            state: required("state", self.state)?,
            address: required("address", self.address)?,
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website_link),
            genres: self.genres,
            seeking_talent: self.seeking_talent,
            seeking_description: optional(self.seeking_description),
        })
    }
}

/// Values of the artist form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistFormValues {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistFormValues {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name").to_string(),
            city: fields.text("city").to_string(),
            state: fields.text("state").to_string(),
            phone: fields.text("phone").to_string(),
            image_link: fields.text("image_link").to_string(),
            facebook_link: fields.text("facebook_link").to_string(),
            website_link: fields.text("website_link").to_string(),
            genres: genres_from(fields),
            seeking_venue: fields.has("seeking_venue"),
            seeking_description: fields.text("seeking_description").to_string(),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    /// `MissingField` for a blank name, city or state
    pub fn into_create(self) -> Result<CreateArtist, ValidationError> {
        Ok(CreateArtist {
            name: required("name", self.name)?,
            city: required("city", self.city)?,
            state: required("state", self.state)?,
            phone: optional(self.phone),
            image_link: optional(self.image_link),
            facebook_link: optional(self.facebook_link),
            website: optional(self.website_link),
            genres: self.genres,
            seeking_venue: self.seeking_venue,
            seeking_description: optional(self.seeking_description),
        })
    }
}

/// Values of the show form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFormValues {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowFormValues {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id").to_string(),
            venue_id: fields.text("venue_id").to_string(),
            start_time: fields.text("start_time").to_string(),
        }
    }

    /// Empty form with the start time prefilled
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Self::default()
        }
    }

    /// # Errors
    /// `MissingField` for blank values, `InvalidField` for non-numeric ids
    /// or an unparsable start time
    pub fn into_create(&self) -> Result<CreateShow, ValidationError> {
        Ok(CreateShow {
            artist_id: parse_id("artist_id", &self.artist_id)?,
            venue_id: parse_id("venue_id", &self.venue_id)?,
            start_time: parse_start_time(&self.start_time)?,
        })
    }
}

fn parse_id(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    raw.parse()
        .map_err(|_| ValidationError::invalid(field, format!("'{raw}' is not a number")))
}

/// Parse a submitted start time, treating zone-less values as UTC
///
/// # Errors
/// `MissingField` when blank, `InvalidField` when no accepted layout matches
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("start_time"));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ValidationError::invalid("start_time", format!("'{raw}' is not a date and time"))
        })
}
