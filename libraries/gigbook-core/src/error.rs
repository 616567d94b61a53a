/// Core error types for Gigbook
use thiserror::Error;

/// Result type alias using `GigError`
pub type Result<T> = std::result::Result<T, GigError>;

/// Core error type for Gigbook
#[derive(Error, Debug)]
pub enum GigError {
    /// Submitted data was rejected before anything was written
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: String },

    /// Storage-related errors that are not raw database failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl GigError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// True when the error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Why a submission was rejected.
///
/// The `Display` output of the reference variants is the exact notice shown
/// to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field was present but could not be coerced
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The referenced artist does not exist
    #[error("Artist ID not found")]
    ArtistNotFound,

    /// The referenced venue does not exist
    #[error("Venue ID not found")]
    VenueNotFound,
}

impl ValidationError {
    /// Create an invalid field error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for GigError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
