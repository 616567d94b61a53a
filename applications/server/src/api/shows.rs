/// Show routes
use super::home;
use crate::{
    forms::{FormFields, ShowFormValues},
    state::AppState,
    views::{self, Notice},
};
use axum::{extract::State, response::Html, Form};
use chrono::Utc;
use gigbook_core::{GigError, Show, ShowListing, ValidationError};
use gigbook_storage::shows;

/// GET /shows
pub async fn list_shows(State(app_state): State<AppState>) -> Html<String> {
    match load_shows(&app_state).await {
        Ok(listed) => views::shows::list(&listed, &[]),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list shows");
            let notice = Notice::error("Error in fetching the list of shows");
            views::shows::list(&[], &[notice])
        }
    }
}

async fn load_shows(app_state: &AppState) -> gigbook_core::Result<Vec<ShowListing>> {
    let mut session = app_state.db.begin().await?;
    shows::list(&mut session).await
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    views::shows::form(&ShowFormValues::starting_at(Utc::now()), &[])
}

/// POST /shows/create
///
/// An unknown artist or venue is reported by name; every other failure gets
/// the generic notice.
pub async fn create_show(
    State(app_state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let values = ShowFormValues::from_fields(&FormFields::from(pairs));

    let notice = match insert_show(&app_state, &values).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show listed"
            );
            Notice::success("Show was successfully listed!")
        }
        Err(GigError::Validation(
            e @ (ValidationError::ArtistNotFound | ValidationError::VenueNotFound),
        )) => {
            tracing::debug!(artist_id = %values.artist_id, venue_id = %values.venue_id, "{}", e);
            Notice::error(e.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Show could not be listed");
            Notice::error("An error occurred. Show could not be listed.")
        }
    };

    home::with_notice(notice)
}

async fn insert_show(app_state: &AppState, values: &ShowFormValues) -> gigbook_core::Result<Show> {
    let payload = values.into_create()?;
    let mut session = app_state.db.begin_write().await?;
    let show = shows::create(&mut session, payload).await?;
    session.commit().await?;
    Ok(show)
}
