use chrono::{DateTime, Utc};
use gigbook_core::{error::Result, types::*, GigError, ValidationError};

use crate::{artists, timestamp_from_db, venues, Session};

/// Every show joined with its venue and artist, latest first
pub async fn list(session: &mut Session) -> Result<Vec<ShowListing>> {
    let rows: Vec<(i64, i64, String, i64, String, Option<String>, i64)> = sqlx::query_as(
        "SELECT s.id, s.venue_id, v.name, s.artist_id, a.name, a.image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON v.id = s.venue_id
         INNER JOIN artists a ON a.id = s.artist_id
         ORDER BY s.start_time DESC, s.id DESC",
    )
    .fetch_all(session.connection())
    .await?;

    rows.into_iter()
        .map(
            |(id, venue_id, venue_name, artist_id, artist_name, artist_image_link, start)| {
                Ok(ShowListing {
                    id,
                    venue_id,
                    venue_name,
                    artist_id,
                    artist_name,
                    artist_image_link,
                    start_time: timestamp_from_db(start)?,
                })
            },
        )
        .collect()
}

pub async fn get_by_id(session: &mut Session, id: ShowId) -> Result<Option<Show>> {
    let row: Option<(i64, i64, i64, i64)> = sqlx::query_as(
        "SELECT id, artist_id, venue_id, start_time FROM shows WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(session.connection())
    .await?;

    row.map(|(id, artist_id, venue_id, start)| {
        Ok(Show {
            id,
            artist_id,
            venue_id,
            start_time: timestamp_from_db(start)?,
        })
    })
    .transpose()
}

pub async fn count(session: &mut Session) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(session.connection())
        .await?;
    Ok(count)
}

/// Create a show after checking both references.
///
/// The artist is checked first, so a submission with two bad ids reports the
/// artist.
pub async fn create(session: &mut Session, show: CreateShow) -> Result<Show> {
    if !artists::exists(session, show.artist_id).await? {
        return Err(ValidationError::ArtistNotFound.into());
    }
    if !venues::exists(session, show.venue_id).await? {
        return Err(ValidationError::VenueNotFound.into());
    }

    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time.timestamp())
        .execute(session.connection())
        .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(show_id = id, "Inserted show");

    get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::storage("Failed to retrieve created show"))
}

/// Shows at a venue with the performing artist attached, in start order
pub async fn for_venue(session: &mut Session, venue_id: VenueId) -> Result<Vec<ShowWithArtist>> {
    let rows: Vec<(i64, i64, String, Option<String>, i64)> = sqlx::query_as(
        "SELECT s.id, a.id, a.name, a.image_link, s.start_time
         FROM shows s
         INNER JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(venue_id)
    .fetch_all(session.connection())
    .await?;

    rows.into_iter()
        .map(|(id, artist_id, artist_name, artist_image_link, start)| {
            Ok(ShowWithArtist {
                id,
                artist_id,
                artist_name,
                artist_image_link,
                start_time: timestamp_from_db(start)?,
            })
        })
        .collect()
}

/// Shows by an artist with the hosting venue attached, in start order
pub async fn for_artist(session: &mut Session, artist_id: ArtistId) -> Result<Vec<ShowWithVenue>> {
    let rows: Vec<(i64, i64, String, Option<String>, i64)> = sqlx::query_as(
        "SELECT s.id, v.id, v.name, v.image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(artist_id)
    .fetch_all(session.connection())
    .await?;

    rows.into_iter()
        .map(|(id, venue_id, venue_name, venue_image_link, start)| {
            Ok(ShowWithVenue {
                id,
                venue_id,
                venue_name,
                venue_image_link,
                start_time: timestamp_from_db(start)?,
            })
        })
        .collect()
}

pub(crate) async fn start_times_by_venue(
    session: &mut Session,
) -> Result<Vec<(VenueId, DateTime<Utc>)>> {
    let rows: Vec<(i64, i64)> = sqlx::query_as("SELECT venue_id, start_time FROM shows")
        .fetch_all(session.connection())
        .await?;

    rows.into_iter()
        .map(|(venue_id, start)| Ok((venue_id, timestamp_from_db(start)?)))
        .collect()
}

pub(crate) async fn delete_for_venue(session: &mut Session, venue_id: VenueId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(venue_id)
        .execute(session.connection())
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete_for_artist(session: &mut Session, artist_id: ArtistId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(artist_id)
        .execute(session.connection())
        .await?;
    Ok(result.rows_affected())
}
