/// Home and fallback pages
use super::NoticeQuery;
use crate::views::{self, Notice};
use axum::{extract::Query, http::StatusCode, response::Html};

/// GET /
///
/// A delete redirects here with `?notice=venue-deleted` or
/// `?notice=artist-deleted`.
pub async fn index(Query(query): Query<NoticeQuery>) -> Html<String> {
    views::pages::home(&query.notices())
}

/// Any route the router does not know
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, views::pages::not_found("Page not found"))
}

/// Home page carrying the outcome of a create submission
pub(crate) fn with_notice(notice: Notice) -> Html<String> {
    views::pages::home(&[notice])
}
