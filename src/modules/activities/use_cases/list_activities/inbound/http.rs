use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::http::{ErrorDetail, INTERNAL_SERVER_ERROR_DETAIL};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(INTERNAL_SERVER_ERROR_DETAIL)),
            )
                .into_response()
        }
    }
}
