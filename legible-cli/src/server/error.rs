//! HTTP error responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use legible_api::{ApiError, ErrorBody};
use tokio::task::JoinError;
use tracing::error;

/// Error returned by handlers, rendered as `{"error": message}`
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Create an error with an explicit status
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent to the client
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Correction(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(%err, status = status.as_u16(), "analysis failed");
        }

        Self::new(status, err.to_string())
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", rejection.body_text()),
        )
    }
}

impl From<JoinError> for HttpError {
    fn from(err: JoinError) -> Self {
        error!(?err, "analysis task failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}
