//! HTTP error mapping for the upload endpoint

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use slotbook_domain::SlotbookError;
use tracing::error;

/// Wrapper turning domain errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(pub SlotbookError);

impl From<SlotbookError> for ApiError {
    fn from(value: SlotbookError) -> Self {
        Self(value)
    }
}

impl From<MultipartError> for ApiError {
    fn from(value: MultipartError) -> Self {
        Self(SlotbookError::InvalidInput(format!("malformed multipart body: {value}")))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SlotbookError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SlotbookError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotbookError::Config(_)
            | SlotbookError::Network(_)
            | SlotbookError::Storage(_)
            | SlotbookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %self.0, %status, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
