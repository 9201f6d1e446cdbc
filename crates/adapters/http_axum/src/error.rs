//! HTTP error response mapping.
//!
//! Clients only ever see a generic message per status; the specific reason is
//! written to the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HbnbError);

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(HbnbError::Validation(err))
    }
}

impl ApiError {
    /// Response for paths that match no route.
    #[must_use]
    pub fn not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody { error: "Not found" }),
        )
            .into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HbnbError::Validation(err) => {
                tracing::info!(reason = %err, "rejected request body");
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
            HbnbError::NotFound(err) => {
                tracing::debug!(reason = %err, "lookup missed");
                (StatusCode::NOT_FOUND, "Not found")
            }
            HbnbError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
