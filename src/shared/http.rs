use serde::{Deserialize, Serialize};

/// Success body: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure body: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";

pub const MISSING_EMAIL_DETAIL: &str = "Missing required query parameter: email";

/// `?email=...` on signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
