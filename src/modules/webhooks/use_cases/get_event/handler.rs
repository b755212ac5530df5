use crate::modules::webhooks::application::errors::ApplicationError;
use crate::modules::webhooks::core::event_record::EventRecord;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct GetEventHandler<TEventStore>
where
    TEventStore: EventStore<EventRecord> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> GetEventHandler<TEventStore>
where
    TEventStore: EventStore<EventRecord> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, id: &str) -> Result<EventRecord, ApplicationError> {
        Ok(self.event_store.get(id).await?)
    }
}
