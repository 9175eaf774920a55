//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::debug;
use urlrisk_core::UrlRiskError;

/// Error returned by API handlers, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<UrlRiskError> for ApiError {
    fn from(err: UrlRiskError) -> Self {
        debug!(error = ?err, "Rejected scan request");
        Self::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(%rejection, "Rejected request body");
        match rejection {
            // Well-formed JSON of the wrong shape, e.g. a non-string `url`.
            JsonRejection::JsonDataError(_) => Self::bad_request("Invalid URL format"),
            _ => Self::bad_request("Malformed JSON body"),
        }
    }
}
