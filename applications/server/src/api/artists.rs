/// Artist routes
use super::{home, parse_id, NoticeQuery, SearchForm};
use crate::{
    error::{Result, ServerError},
    forms::{ArtistFormValues, FormFields},
    state::AppState,
    views::{self, Notice},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use gigbook_core::{Artist, ArtistId, ArtistSummary, SearchResults};
use gigbook_storage::artists;
use serde_json::{json, Value};

/// GET /artists
pub async fn list_artists(State(app_state): State<AppState>) -> Html<String> {
    match load_artists(&app_state).await {
        Ok(artists) => views::artists::list(&artists, &[]),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list artists");
            let notice = Notice::error("Error in fetching the list of artists");
            views::artists::list(&[], &[notice])
        }
    }
}

async fn load_artists(app_state: &AppState) -> gigbook_core::Result<Vec<ArtistSummary>> {
    let mut session = app_state.db.begin().await?;
    artists::list(&mut session).await
}

/// POST /artists/search
pub async fn search_artists(
    State(app_state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    match run_search(&app_state, &form.search_term).await {
        Ok(results) => views::artists::search(&results, &form.search_term, &[]),
        Err(e) => {
            tracing::warn!(error = %e, term = %form.search_term, "Artist search failed");
            views::artists::search(
                &SearchResults::default(),
                &form.search_term,
                &[Notice::error("Error in searching artists")],
            )
        }
    }
}

async fn run_search(
    app_state: &AppState,
    term: &str,
) -> gigbook_core::Result<SearchResults<Artist>> {
    let mut session = app_state.db.begin().await?;
    artists::search(&mut session, term).await
}

/// GET /artists/:id
///
/// A successful edit lands here with `?notice=saved`.
pub async fn show_artist(
    Path(id): Path<String>,
    Query(query): Query<NoticeQuery>,
    State(app_state): State<AppState>,
) -> Result<Html<String>> {
    let artist_id = parse_id("Artist", &id)?;
    let mut session = app_state.db.begin().await?;
    let detail = artists::get_detail(&mut session, artist_id, Utc::now()).await?;
    Ok(views::artists::detail(&detail, &query.notices()))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    let values = ArtistFormValues::default();
    views::artists::form("List a new artist", "/artists/create", &values, &[])
}

/// POST /artists/create
pub async fn create_artist(
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let values = ArtistFormValues::from_fields(&FormFields::from(pairs));
    let name = values.name.clone();

    let notice = match insert_artist(&app_state, values).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "Artist listed");
            Notice::success(format!("Artist {} was successfully listed!", artist.name))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Artist could not be listed");
            Notice::error(format!("An error occurred. Artist {name} could not be listed."))
        }
    };

    home::with_notice(notice)
}

async fn insert_artist(
    app_state: &AppState,
    values: ArtistFormValues,
) -> gigbook_core::Result<Artist> {
    let payload = values.into_create()?;
    let mut session = app_state.db.begin_write().await?;
    let artist = artists::create(&mut session, payload).await?;
    session.commit().await?;
    Ok(artist)
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Html<String>> {
    let artist_id = parse_id("Artist", &id)?;
    let mut session = app_state.db.begin().await?;
    let artist = artists::get_by_id(&mut session, artist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Artist {artist_id} not found")))?;

    Ok(views::artists::form(
        "Edit artist",
        &edit_action(artist_id),
        &ArtistFormValues::from_artist(&artist),
        &[],
    ))
}

/// POST /artists/:id/edit
///
/// Redirects to the detail page on success. A rejected submission re-renders
/// the form with what was entered.
pub async fn edit_artist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let artist_id = parse_id("Artist", &id)?;
    let values = ArtistFormValues::from_fields(&FormFields::from(pairs));

    let payload = match values.clone().into_create() {
        Ok(payload) => payload,
        Err(e) => {
            let page = views::artists::form(
                "Edit artist",
                &edit_action(artist_id),
                &values,
                &[Notice::error(e.to_string())],
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let mut session = app_state.db.begin_write().await?;
    artists::update(&mut session, artist_id, payload).await?;
    session.commit().await?;
    tracing::info!(artist_id, "Artist updated");

    let location = format!("/artists/{artist_id}?notice={}", NoticeQuery::SAVED);
    Ok(Redirect::to(&location).into_response())
}

fn edit_action(artist_id: ArtistId) -> String {
    format!("/artists/{artist_id}/edit")
}

/// DELETE /artists/:id
///
/// Answers `{"status": true}` only when the artist and their shows were removed.
pub async fn delete_artist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<Value> {
    let status = match id.parse::<ArtistId>() {
        Ok(artist_id) => match remove_artist(&app_state, artist_id).await {
            Ok(removed_shows) => {
                tracing::info!(artist_id, removed_shows, "Artist deleted");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, artist_id, "Artist could not be deleted");
                false
            }
        },
        Err(_) => false,
    };

    Json(json!({ "status": status }))
}

async fn remove_artist(app_state: &AppState, artist_id: ArtistId) -> gigbook_core::Result<u64> {
    let mut session = app_state.db.begin_write().await?;
    let removed = artists::delete(&mut session, artist_id).await?;
    session.commit().await?;
    Ok(removed)
}
