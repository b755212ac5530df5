use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid event: {0}")]
    Invalid(String),

    #[error("event not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(EventStoreError),
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::NotFound { key } => ApplicationError::NotFound(key),
            other => ApplicationError::Store(other),
        }
    }
}
