//! Error types for URL scanning.

use thiserror::Error;

/// Errors a scan can fail with. Both are caller mistakes.
///
/// The display strings are the exact messages returned to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlRiskError {
    #[error("URL is required")]
    MissingInput,

    #[error("Invalid URL format")]
    InvalidUrl(#[source] url::ParseError),
}

/// Result type for scanning operations.
pub type UrlRiskResult<T> = Result<T, UrlRiskError>;

impl From<url::ParseError> for UrlRiskError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err)
    }
}
