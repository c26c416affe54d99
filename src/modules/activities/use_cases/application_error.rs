use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::activities::core::decision::DecideError;
use crate::shared::http::{ErrorDetail, INTERNAL_SERVER_ERROR_DETAIL};
use crate::shared::infrastructure::activity_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Domain(DecideError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(_) | ApplicationError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text shown to callers. Infrastructure failures are masked.
    pub fn detail(&self) -> String {
        match self {
            ApplicationError::Domain(reason) => reason.to_string(),
            _ => INTERNAL_SERVER_ERROR_DETAIL.to_string(),
        }
    }

    /// Logs failures that are masked from callers. Domain rejections are not logged.
    pub fn report(&self) {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "activity command failed");
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        self.report();
        (self.status_code(), Json(ErrorDetail::new(self.detail()))).into_response()
    }
}
