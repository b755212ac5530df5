// In memory implementation of the EventStore port.
//
// Purpose
// - Hold every received record for the lifetime of the process.
//
// Responsibilities
// - Keep one record per key, last write wins.
// - Serve many concurrent readers alongside writers through a reader-writer lock.
//
// Records are stored behind `Arc`, so the write lock only covers the map insert and
// readers clone the record after releasing the read lock.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub struct InMemoryEventStore<Record> {
    inner: RwLock<HashMap<String, Arc<Record>>>,
    is_offline: bool,
}

impl<Record> Default for InMemoryEventStore<Record> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }
}

impl<Record> InMemoryEventStore<Record> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn len(&self) -> Result<usize, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, EventStoreError> {
        self.len().map(|len| len == 0)
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

fn poisoned() -> EventStoreError {
    EventStoreError::Backend("event store lock poisoned".into())
}

#[async_trait::async_trait]
impl<Record> EventStore<Record> for InMemoryEventStore<Record>
where
    Record: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: &str, record: Record) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let record = Arc::new(record);
        let previous = {
            let mut guard = self.inner.write().map_err(|_| poisoned())?;
            guard.insert(key.to_string(), record)
        };
        tracing::debug!(key, overwritten = previous.is_some(), "event stored");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Record, EventStoreError> {
        self.ensure_online()?;
        let found = {
            let guard = self.inner.read().map_err(|_| poisoned())?;
            guard.get(key).cloned()
        };
        match found {
            Some(record) => Ok(Record::clone(&record)),
            None => Err(EventStoreError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    async fn keys(&self) -> Result<Vec<String>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().map_err(|_| poisoned())?;
        Ok(guard.keys().cloned().collect())
    }
}
