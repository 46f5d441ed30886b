use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventApiError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("missing event id")]
    MissingId,

    #[error("invalid event id")]
    InvalidId,

    #[error("event not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

impl EventApiError {
    /// Machine-readable code carried in every error response body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::MissingId => "missing_id",
            Self::InvalidId => "invalid_id",
            Self::NotFound => "not_found",
            Self::Store(_) => "store_error",
        }
    }
}
