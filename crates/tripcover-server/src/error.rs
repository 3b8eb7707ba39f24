//! Error envelope for the HTTP surface

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tripcover_core::Error;

/// Wrapper converting pipeline errors into the uniform JSON envelope
/// `{ "error": "…" }` with the failure's reported status, or 500 when the
/// failure does not supply one.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "chat request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
