use crate::modules::webhooks::application::errors::ApplicationError;
use crate::modules::webhooks::core::event_record::EventRecord;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct IngestEventHandler<TEventStore>
where
    TEventStore: EventStore<EventRecord> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> IngestEventHandler<TEventStore>
where
    TEventStore: EventStore<EventRecord> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Decodes a raw delivery and stores it under its own id.
    ///
    /// Only the first JSON value in the body is read; anything after it is ignored.
    /// Malformed or empty bodies and empty ids are rejected before the store is touched.
    pub async fn handle(&self, body: &[u8]) -> Result<EventRecord, ApplicationError> {
        let record: EventRecord = serde_json::Deserializer::from_slice(body)
            .into_iter::<EventRecord>()
            .next()
            .ok_or_else(|| ApplicationError::Invalid("empty request body".into()))??;
        if record.id.is_empty() {
            return Err(ApplicationError::Invalid("event id must not be empty".into()));
        }

        self.event_store.set(&record.id, record.clone()).await?;
        Ok(record)
    }
}
