/// Venue routes
use super::{home, parse_id, NoticeQuery, SearchForm};
use crate::{
    error::{Result, ServerError},
    forms::{FormFields, VenueFormValues},
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
use gigbook_core::{SearchResults, Venue, VenueArea, VenueId};
use gigbook_storage::venues;
use serde_json::{json, Value};

/// GET /venues
pub async fn list_venues(State(app_state): State<AppState>) -> Html<String> {
    match load_areas(&app_state).await {
        Ok(areas) => views::venues::list(&areas, &[]),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list venues");
            let notice = Notice::error("Error in fetching the list of venues");
            views::venues::list(&[], &[notice])
        }
    }
}

async fn load_areas(app_state: &AppState) -> gigbook_core::Result<Vec<VenueArea>> {
    let mut session = app_state.db.begin().await?;
    venues::list_by_area(&mut session, Utc::now()).await
}

/// POST /venues/search
pub async fn search_venues(
    State(app_state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    match run_search(&app_state, &form.search_term).await {
        Ok(results) => views::venues::search(&results, &form.search_term, &[]),
        Err(e) => {
            tracing::warn!(error = %e, term = %form.search_term, "Venue search failed");
            views::venues::search(
                &SearchResults::default(),
                &form.search_term,
                &[Notice::error("Error in searching venues")],
            )
        }
    }
}

async fn run_search(
    app_state: &AppState,
    term: &str,
) -> gigbook_core::Result<SearchResults<Venue>> {
    let mut session = app_state.db.begin().await?;
    venues::search(&mut session, term).await
}

/// GET /venues/:id
///
/// A successful edit lands here with `?notice=saved`.
pub async fn show_venue(
    Path(id): Path<String>,
    Query(query): Query<NoticeQuery>,
    State(app_state): State<AppState>,
) -> Result<Html<String>> {
    let venue_id = parse_id("Venue", &id)?;
    let mut session = app_state.db.begin().await?;
    let detail = venues::get_detail(&mut session, venue_id, Utc::now()).await?;
    Ok(views::venues::detail(&detail, &query.notices()))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    let values = VenueFormValues::default();
    views::venues::form("List a new venue", "/venues/create", &values, &[])
}

/// POST /venues/create
pub async fn create_venue(
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let values = VenueFormValues::from_fields(&FormFields::from(pairs));
    let name = values.name.clone();

    let notice = match insert_venue(&app_state, values).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "Venue listed");
            Notice::success(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Venue could not be listed");
            Notice::error(format!("An error occurred. Venue {name} could not be listed."))
        }
    };

    home::with_notice(notice)
}

async fn insert_venue(
    app_state: &AppState,
    values: VenueFormValues,
) -> gigbook_core::Result<Venue> {
    let payload = values.into_create()?;
    let mut session = app_state.db.begin_write().await?;
    let venue = venues::create(&mut session, payload).await?;
    session.commit().await?;
    Ok(venue)
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Html<String>> {
    let venue_id = parse_id("Venue", &id)?;
    let mut session = app_state.db.begin().await?;
    let venue = venues::get_by_id(&mut session, venue_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Venue {venue_id} not found")))?;

    Ok(views::venues::form(
        "Edit venue",
        &edit_action(venue_id),
        &VenueFormValues::from_venue(&venue),
        &[],
    ))
}

/// POST /venues/:id/edit
///
/// Redirects to the detail page on success. A rejected submission re-renders
/// the form with what was entered.
pub async fn edit_venue(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let venue_id = parse_id("Venue", &id)?;
    let values = VenueFormValues::from_fields(&FormFields::from(pairs));

    let payload = match values.clone().into_create() {
        Ok(payload) => payload,
        Err(e) => {
            let page = views::venues::form(
                "Edit venue",
                &edit_action(venue_id),
                &values,
                &[Notice::error(e.to_string())],
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let mut session = app_state.db.begin_write().await?;
    venues::update(&mut session, venue_id, payload).await?;
    session.commit().await?;
    tracing::info!(venue_id, "Venue updated");

    let location = format!("/venues/{venue_id}?notice={}", NoticeQuery::SAVED);
    Ok(Redirect::to(&location).into_response())
}

fn edit_action(venue_id: VenueId) -> String {
    format!("/venues/{venue_id}/edit")
}

/// DELETE /venues/:id
///
/// Answers `{"status": true}` only when the venue and its shows were removed.
pub async fn delete_venue(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Json<Value> {
    let status = match id.parse::<VenueId>() {
        Ok(venue_id) => match remove_venue(&app_state, venue_id).await {
            Ok(removed_shows) => {
                tracing::info!(venue_id, removed_shows, "Venue deleted");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, venue_id, "Venue could not be deleted");
                false
            }
        },
        Err(_) => false,
    };

    Json(json!({ "status": status }))
}

async fn remove_venue(app_state: &AppState, venue_id: VenueId) -> gigbook_core::Result<u64> {
    let mut session = app_state.db.begin_write().await?;
    let removed = venues::delete(&mut session, venue_id).await?;
    session.commit().await?;
    Ok(removed)
}
