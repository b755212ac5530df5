use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(ids) => Json(ids).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to list stored events");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
