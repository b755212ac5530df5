use crate::modules::webhooks::core::event_record::EventRecord;
use crate::modules::webhooks::use_cases::get_event::handler::GetEventHandler;
use crate::modules::webhooks::use_cases::ingest_event::handler::IngestEventHandler;
use crate::modules::webhooks::use_cases::list_events::handler::ListEventsHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub type WebhookEventStore = InMemoryEventStore<EventRecord>;

#[derive(Clone)]
pub struct AppState {
    pub ingest_handler: Arc<IngestEventHandler<WebhookEventStore>>,
    pub list_handler: Arc<ListEventsHandler<WebhookEventStore>>,
    pub get_handler: Arc<GetEventHandler<WebhookEventStore>>,
}

impl AppState {
    /// Wires every use case to the same store instance.
    pub fn new(event_store: Arc<WebhookEventStore>) -> Self {
        Self {
            ingest_handler: Arc::new(IngestEventHandler::new(event_store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(event_store.clone())),
            get_handler: Arc::new(GetEventHandler::new(event_store)),
        }
    }
}
