use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::webhooks::application::errors::ApplicationError;
use crate::shell::state::AppState;

// The body is decoded by the handler rather than the `Json` extractor, so deliveries
// without a JSON content type are still accepted.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match state.ingest_handler.handle(&body).await {
        Ok(record) => {
            tracing::info!(id = %record.id, op = %record.operation(), "webhook event received");
            StatusCode::OK
        }
        Err(error @ (ApplicationError::Decode(_) | ApplicationError::Invalid(_))) => {
            tracing::warn!(%error, "rejected webhook payload");
            StatusCode::BAD_REQUEST
        }
        Err(error) => {
            tracing::error!(%error, "failed to store webhook event");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
