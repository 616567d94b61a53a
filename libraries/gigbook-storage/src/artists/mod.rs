use chrono::{DateTime, Utc};
use gigbook_core::{
    error::Result, listing::name_matches, schedule::partition, types::*, GigError,
};

use crate::{genres_from_db, genres_to_db, shows, Session};

#[derive(sqlx::FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website: Option<String>,
    genres: String,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = GigError;

    fn try_from(row: ArtistRow) -> Result<Self> {
        Ok(Artist {
            id: row.id,
            genres: genres_from_db(&row.genres)?,
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
        })
    }
}

/// Flat listing, most recently created first
pub async fn list(session: &mut Session) -> Result<Vec<ArtistSummary>> {
    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM artists ORDER BY id DESC")
        .fetch_all(session.connection())
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistSummary { id, name })
        .collect())
}

pub async fn get_by_id(session: &mut Session, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query_as::<_, ArtistRow>(
        "SELECT id, name, city, state, phone, image_link, facebook_link,
                website, genres, seeking_venue, seeking_description
         FROM artists
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(session.connection())
    .await?;

    row.map(Artist::try_from).transpose()
}

pub async fn exists(session: &mut Session, id: ArtistId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists WHERE id = ?")
        .bind(id)
        .fetch_one(session.connection())
        .await?;

    Ok(count > 0)
}

/// Case-insensitive substring search on artist names, ordered by name
pub async fn search(session: &mut Session, term: &str) -> Result<SearchResults<Artist>> {
    let rows = sqlx::query_as::<_, ArtistRow>(
        "SELECT id, name, city, state, phone, image_link, facebook_link,
                website, genres, seeking_venue, seeking_description
         FROM artists
         ORDER BY name COLLATE NOCASE, id",
    )
    .fetch_all(session.connection())
    .await?;

    let mut matches = Vec::new();
    for row in rows {
        if name_matches(&row.name, term) {
            matches.push(Artist::try_from(row)?);
        }
    }

    Ok(SearchResults::new(matches))
}

/// Artist with its shows split into past and upcoming relative to `now`
pub async fn get_detail(
    session: &mut Session,
    id: ArtistId,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let artist = get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::not_found("Artist", id))?;

    let parts = partition(shows::for_artist(session, id).await?, now);

    Ok(ArtistDetail::new(artist, parts.past, parts.upcoming))
}

pub async fn create(session: &mut Session, artist: CreateArtist) -> Result<Artist> {
    let genres = genres_to_db(&artist.genres)?;

    let result = sqlx::query(
        "INSERT INTO artists (
            name, city, state, phone, image_link, facebook_link,
            website, genres, seeking_venue, seeking_description
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(session.connection())
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(artist_id = id, "Inserted artist");

    get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::storage("Failed to retrieve created artist"))
}

/// Overwrite every field of an existing artist
pub async fn update(session: &mut Session, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
    let genres = genres_to_db(&artist.genres)?;

    let result = sqlx::query(
        "UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, genres = ?, seeking_venue = ?,
            seeking_description = ?
         WHERE id = ?",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(genres)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(session.connection())
    .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Artist", id));
    }

    get_by_id(session, id)
        .await?
        .ok_or_else(|| GigError::not_found("Artist", id))
}

/// Delete an artist and all of their shows on the caller's session.
/// Returns the number of shows removed.
pub async fn delete(session: &mut Session, id: ArtistId) -> Result<u64> {
    let removed_shows = shows::delete_for_artist(session, id).await?;

    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(session.connection())
        .await?;

    if result.rows_affected() == 0 {
        return Err(GigError::not_found("Artist", id));
    }

    Ok(removed_shows)
}
