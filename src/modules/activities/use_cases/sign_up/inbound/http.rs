use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shared::http::{EmailQuery, ErrorDetail, MISSING_EMAIL_DETAIL, MessageBody};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDetail::new(MISSING_EMAIL_DETAIL)),
            )
                .into_response();
        }
    };

    let command = SignUp {
        activity_name,
        email: params.email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageBody::new(message)).into_response(),
        Err(e) => e.into_response(),
    }
}
