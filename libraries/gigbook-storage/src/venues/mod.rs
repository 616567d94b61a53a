use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gigbook_core::{
    error::Result,
    listing::{group_by_area, name_matches},
    schedule::{is_upcoming, partition},
    types::*,
    GigError,
};

use crate::{genres_from_db, genres_to_db, shows, Session};

#[derive(sqlx::FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website: Option<String>,
    genres: String,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl TryFrom<VenueRow> for Venue {
    type Error = GigError;

    fn try_from(row: VenueRow) -> Result<Self> {
        Ok(Venue {
            id: row.id,
            genres: genres_from_db(&row.genres)?,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        })
    }
}

fn collect(rows: Vec<VenueRow>) -> Result<Vec<Venue>> {
    rows.into_iter().map(Venue::try_from).collect()
}

/// All venues, ordered by area then name
pub async fn get_all(session: &mut Session) -> Result<Vec<Venue>> {
    let rows = sqlx::query_as::<_, VenueRow>(
        "SELECT id, name, city, state, address, phone, image_link, facebook_link,
                website, genres, seeking_talent, seeking_description
         FROM venues
         ORDER BY state, city, name COLLATE NOCASE, id",
    )
    .fetch_all(session.connection())
    .await?;

    collect(rows)
}

pub async fn get_by_id(session: &mut Session, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query_as::<_, VenueRow>(
        "SELECT id, name, city, state, address, phone, image_link, facebook_link,
                website, genres, seeking_talent, seeking_description
         FROM venues
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(session.connection())
    .await?;

    row.map(Venue::try_from).transpose()
}

pub async fn exists(session: &mut Session, id: VenueId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues WHERE id = ?")
        .bind(id)
        .fetch_one(session.connection())
        .await?;

    Ok(count > 0)
}

/// Venues grouped by (city, state), each with its count of upcoming shows
pub async fn list_by_area(session: &mut Session, now: DateTime<Utc>) -> Result<Vec<VenueArea>> {
    let venues = get_all(session).await?;

    let mut upcoming: HashMap<VenueId, usize> = HashMap::new();
    for (venue_id, start_time) in shows::start_times_by_venue(session).await? {
        if is_upcoming(start_time, now) {
            *upcoming.entry(venue_id).or_default() += 1;
        }
    }

    Ok(group_by_area(venues.into_iter().map(|venue| {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };
        (venue.city, venue.state, summary)
    })))
}

/// Case-insensitive substring search on venue names, ordered by name
pub async fn search(session: &mut Session, term: &str) -> Result<SearchResults<Venue>> {
    let rows = sqlx::query_as::<_, VenueRow>(
        "SELECT id, name, city, state, address, phone, image_link, facebook_link,
                website, genres, seeking_talent, seeking_description
         FROM venues
         ORDER BY name COLLATE NOCASE, id",
    )
    .fetch_all(session.connection())
    .await?;

    let matches = collect(rows)?
        .into_iter()
        .filter(|venue| name_matches(&venue.name, term))
        .collect();

    Ok(SearchResults::new(matches))
}

/// Venue with its shows split into past and upcoming relative to `now`
pub async fn get_detail(
    session: &mut Session,
    id: VenueId,
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let venue = get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::not_found("Venue", id))?;

    let parts = partition(shows::for_venue(session, id).await?, now);

    Ok(VenueDetail::new(venue, parts.past, parts.upcoming))
}

pub async fn create(session: &mut Session, venue: CreateVenue) -> Result<Venue> {
    let genres = genres_to_db(&venue.genres)?;

    let result = sqlx::query(
        "INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            website, genres, seeking_talent, seeking_description
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(session.connection())
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(venue_id = id, "Inserted venue");

    get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::storage("Failed to retrieve created venue"))
}

/// Overwrite every field of an existing venue
pub async fn update(session: &mut Session, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
    let genres = genres_to_db(&venue.genres)?;

    let result = sqlx::query(
        "UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, genres = ?, seeking_talent = ?,
            seeking_description = ?
         WHERE id = ?",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(genres)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(session.connection())
    .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Venue", id));
    }

    get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::not_found("Venue", id))
}

/// Delete a venue together with every show it hosts.
///
/// Both deletions run on the caller's session, so they commit or roll back
/// together. Returns the number of shows removed.
pub async fn delete(session: &mut Session, id: VenueId) -> Result<u64> {
    let removed_shows = shows::delete_for_venue(session, id).await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(session.connection())
        .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Venue", id));
    }

    Ok(removed_shows)
}
