/// Route table and middleware stack
use crate::{api, state::AppState, views};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, path::Path};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState, static_dir: &Path) -> Router {
    let venue_routes = Router::new()
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::create_venue_form).post(api::venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::edit_venue),
        );

    let artist_routes = Router::new()
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::create_artist_form).post(api::artists::create_artist),
        )
        .route(
            "/artists/:id",
            get(api::artists::show_artist).delete(api::artists::delete_artist),
        )
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::edit_artist),
        );

    let show_routes = Router::new()
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::create_show_form).post(api::shows::create_show),
        );

    Router::new()
        .route("/", get(api::home::index))
        .route("/health", get(api::health::health))
        .merge(venue_routes)
        .merge(artist_routes)
        .merge(show_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(api::home::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}

/// Log the panic and answer with the 500 page
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, views::pages::server_error()).into_response()
}
