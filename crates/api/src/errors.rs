use crate::dto::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use parkstat_domain::DomainError;

/// Error returned by handlers, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// The message is shown to the caller; log the cause before building this.
    Internal(String),
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Maps a domain error, replacing server-side details with `internal_message`.
    pub fn from_domain(error: DomainError, internal_message: &str) -> Self {
        match error {
            DomainError::InvalidTimeRange(msg) => ApiError::BadRequest(msg),
            e @ DomainError::RangeTooLarge { .. } => ApiError::BadRequest(e.to_string()),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::DatabaseError(_) | DomainError::InvalidConfig(_) => {
                ApiError::Internal(internal_message.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg)
            | ApiError::Unavailable(msg) => msg,
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
