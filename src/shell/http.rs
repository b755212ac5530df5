use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::webhooks::use_cases::get_event::inbound::http as get_http;
use crate::modules::webhooks::use_cases::ingest_event::inbound::http as ingest_http;
use crate::modules::webhooks::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(ingest_http::handle))
        .route("/events", get(list_http::handle))
        .route("/events/{id}", get(get_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
