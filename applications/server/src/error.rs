/// Server error types
use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gigbook_core::{GigError, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(GigError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GigError> for ServerError {
    fn from(err: GigError) -> Self {
        match err {
            GigError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            GigError::Validation(e) => ServerError::Validation(e),
            other => ServerError::Database(other),
        }
    }
}

impl From<gigbook_storage::StorageError> for ServerError {
    fn from(err: gigbook_storage::StorageError) -> Self {
        // StorageError -> GigError -> ServerError
        GigError::from(err).into()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, views::pages::not_found(&msg)).into_response()
            }
            ServerError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                views::pages::unprocessable(&e.to_string()),
            )
                .into_response(),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                server_error_page()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                server_error_page()
            }
        }
    }
}

fn server_error_page() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, views::pages::server_error()).into_response()
}
