//! Scan route handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use urlrisk_core::{ScanRequest, ScanResult, UrlRiskError};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/scan - Score a URL.
pub async fn scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ScanResult>, ApiError> {
    let req = parse_request(&headers, &body)?;
    let url = req.url.ok_or(UrlRiskError::MissingInput)?;

    let result = state.scanner.scan(&url)?;
    Ok(Json(result))
}

/// Decode the request body. A body that is empty or not declared as JSON
/// reads as `{}`, so it surfaces as a missing URL rather than a parse error.
fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<ScanRequest, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(ScanRequest::default());
    }

    let Json(req) = Json::<ScanRequest>::from_bytes(body)?;
    Ok(req)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
