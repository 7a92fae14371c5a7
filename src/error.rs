//! Error types for video-link-card

#[cfg(feature = "http")]
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while resolving video metadata.
///
/// None of these reach the rendering layer: [`MetadataResolver::resolve`]
/// and [`LinkPreview`] log and suppress them, leaving metadata absent.
///
/// [`MetadataResolver::resolve`]: crate::MetadataResolver::resolve
/// [`LinkPreview`]: crate::LinkPreview
#[derive(Debug, Error)]
pub enum Error {
    /// The lookup endpoint is not a usable URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// URL parse error (from url crate)
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// HTTP request failed
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The lookup did not complete within the configured bound
    #[cfg(feature = "http")]
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The lookup service answered with a non-success status
    #[cfg(feature = "http")]
    #[error("lookup service returned status {0}")]
    Status(u16),

    /// Response body is not JSON or lacks the expected fields
    #[error("malformed lookup response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// Whether the error means the request never produced a usable response.
    pub fn is_network_failure(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            Error::Http(_) | Error::Timeout(_) | Error::Status(_) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

/// Result type alias for video-link-card operations.
pub type Result<T> = std::result::Result<T, Error>;
