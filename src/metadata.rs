//! Video display metadata and oEmbed response parsing

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display metadata for a video preview card.
///
/// All fields stay `None` until a lookup succeeds, and remain `None` if it
/// fails or the link is not a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    pub title: Option<String>,

    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,

    /// Channel or creator name
    pub creator_name: Option<String>,
}

/// The subset of an oEmbed document the card needs.
#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    thumbnail_url: String,
    author_name: String,
}

impl VideoMetadata {
    /// Create metadata with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an oEmbed JSON body.
    ///
    /// `title`, `thumbnail_url` and `author_name` must all be strings; any
    /// other fields are ignored. An `{"error": ...}` body is rejected.
    ///
    /// # Example
    /// ```
    /// use video_link_card::VideoMetadata;
    ///
    /// let body = br#"{"title":"T","thumbnail_url":"X","author_name":"A","width":480}"#;
    /// let meta = VideoMetadata::from_oembed(body).unwrap();
    /// assert_eq!(meta.creator_name.as_deref(), Some("A"));
    /// ```
    pub fn from_oembed(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;

        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return Err(Error::MalformedResponse(format!(
                "lookup service error: {message}"
            )));
        }

        let oembed: OEmbedResponse = serde_json::from_value(value)?;
        Ok(Self {
            title: Some(oembed.title),
            thumbnail_url: Some(oembed.thumbnail_url),
            creator_name: Some(oembed.author_name),
        })
    }

    /// Check if no field has been resolved.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.thumbnail_url.is_none() && self.creator_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_oembed_maps_fields() {
        let body = br#"{"title":"T","thumbnail_url":"X","author_name":"A"}"#;
        let meta = VideoMetadata::from_oembed(body).unwrap();
        assert_eq!(
            meta,
            VideoMetadata {
                title: Some("T".to_string()),
                thumbnail_url: Some("X".to_string()),
                creator_name: Some("A".to_string()),
            }
        );
    }

    #[test]
    fn test_from_oembed_ignores_extra_fields() {
        let body = br#"{
            "title": "Never Gonna Give You Up",
            "author_name": "Rick Astley",
            "author_url": "https://www.youtube.com/@RickAstleyYT",
            "thumbnail_url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
            "provider_name": "YouTube",
            "html": "<iframe></iframe>",
            "width": 200
        }"#;
        let meta = VideoMetadata::from_oembed(body).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(meta.creator_name.as_deref(), Some("Rick Astley"));
    }

    #[test]
    fn test_from_oembed_missing_field() {
        let body = br#"{"title":"T","thumbnail_url":"X"}"#;
        let err = VideoMetadata::from_oembed(body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_from_oembed_wrong_type() {
        let body = br#"{"title":null,"thumbnail_url":"X","author_name":"A"}"#;
        assert!(VideoMetadata::from_oembed(body).is_err());
    }

    #[test]
    fn test_from_oembed_service_error() {
        let body = br#"{"error":"no matching providers found","url":"https://x"}"#;
        let err = VideoMetadata::from_oembed(body).unwrap_err();
        assert!(err.to_string().contains("no matching providers"));
    }

    #[test]
    fn test_from_oembed_not_json() {
        assert!(VideoMetadata::from_oembed(b"<html>502</html>").is_err());
        assert!(VideoMetadata::from_oembed(b"[]").is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(VideoMetadata::new().is_empty());
        let meta = VideoMetadata {
            title: Some("T".to_string()),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }
}
