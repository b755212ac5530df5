// Port for keyed event storage.
//
// Purpose
// - Describe what the webhook use cases need from storage, without binding them to a backend.
//
// Responsibilities
// - Insert or overwrite a record under a key, read one back, and snapshot the key set.
// - Report absence separately from backend faults, so callers can answer 404 and 500 apart.
//
// Boundaries
// - Implementations own all synchronization. Callers never hold a lock across an await.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("no record found for key: {key}")]
    NotFound { key: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore<Record: Clone + Send + Sync + 'static>: Send + Sync {
    /// Inserts `record` under `key`, replacing any previous record (last write wins).
    async fn set(&self, key: &str, record: Record) -> Result<(), EventStoreError>;

    async fn get(&self, key: &str) -> Result<Record, EventStoreError>;

    /// Point-in-time snapshot of every key. Order is unspecified.
    async fn keys(&self) -> Result<Vec<String>, EventStoreError>;
}

pub mod in_memory;
