use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::webhooks::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.get_handler.handle(&id).await {
        Ok(record) => Json(record).into_response(),
        Err(ApplicationError::NotFound(_)) => {
            tracing::debug!(%id, "event not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(error) => {
            tracing::error!(%id, %error, "failed to fetch event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
