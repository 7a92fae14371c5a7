//! URL classification
//!
//! Decides by plain substring tests whether a link is a YouTube Short, a
//! regular YouTube video, or anything else. No normalization is applied, so
//! `YOUTUBE.COM` or `youtube .com` are ordinary links.

use std::fmt;

use serde::{Deserialize, Serialize};

const SHORTS_MARKER: &str = "youtube.com/shorts";
const SHORTS_PATH: &str = "shorts/";
const VIDEO_DOMAINS: &[&str] = &["youtube.com", "youtu.be"];
const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";

/// Presentation variant of a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlVariant {
    /// Anything that is not a recognized video link
    #[default]
    Plain,

    /// A regular video on the main domain or the short-link domain
    StandardVideo,

    /// A short-form video (`youtube.com/shorts/<id>`)
    ShortVideo,
}

impl UrlVariant {
    /// Whether this variant is rendered as a preview card.
    pub fn is_video(self) -> bool {
        !matches!(self, UrlVariant::Plain)
    }

    /// Badge text shown on the preview card.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            UrlVariant::Plain => None,
            UrlVariant::StandardVideo => Some("video"),
            UrlVariant::ShortVideo => Some("short"),
        }
    }
}

impl fmt::Display for UrlVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UrlVariant::Plain => "plain",
            UrlVariant::StandardVideo => "standard-video",
            UrlVariant::ShortVideo => "short-video",
        })
    }
}

/// Classify a URL string.
///
/// Short-form links also contain the main domain, so they are tested first.
///
/// # Example
/// ```
/// use video_link_card::{classify, UrlVariant};
///
/// assert_eq!(classify("https://youtube.com/shorts/abc123"), UrlVariant::ShortVideo);
/// assert_eq!(classify("https://youtu.be/abc123"), UrlVariant::StandardVideo);
/// assert_eq!(classify("https://example.org"), UrlVariant::Plain);
/// ```
pub fn classify(url: &str) -> UrlVariant {
    if url.contains(SHORTS_MARKER) {
        UrlVariant::ShortVideo
    } else if VIDEO_DOMAINS.iter().any(|domain| url.contains(domain)) {
        UrlVariant::StandardVideo
    } else {
        UrlVariant::Plain
    }
}

/// Video identifier of a short-form link: everything after the last `shorts/`.
///
/// Query strings and fragments are kept as-is.
pub fn short_video_id(url: &str) -> Option<&str> {
    url.rfind(SHORTS_PATH).map(|idx| &url[idx + SHORTS_PATH.len()..])
}

/// Canonical embed URL for a video identifier.
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_URL_PREFIX}{video_id}")
}
