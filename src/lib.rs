//! # video-link-card
//!
//! Render links from rich text content, upgrading YouTube videos and Shorts
//! into preview cards with thumbnail, title and creator.
//!
//! ## Features
//!
//! - Classify a URL as a plain link, a standard video or a short-form video
//! - Resolve video metadata through an oEmbed-style lookup service (noembed.com)
//! - Keep per-link render state that fills in asynchronously and never shows
//!   metadata for a link that has since changed
//! - Render plain anchors and video cards as HTML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use video_link_card::{LinkInput, LinkPreview, MetadataResolver};
//!
//! #[tokio::main]
//! async fn main() -> video_link_card::Result<()> {
//!     let mut preview = LinkPreview::new(MetadataResolver::new()?);
//!     preview.observe(LinkInput::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
//!
//!     let state = preview.settled().await;
//!     println!("Title: {:?}", state.metadata.title);
//!     println!("{}", state.render());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Classification Only
//!
//! ```rust
//! use video_link_card::{classify, UrlVariant};
//!
//! assert_eq!(classify("https://www.youtube.com/shorts/abc123"), UrlVariant::ShortVideo);
//! assert_eq!(classify("https://youtu.be/abc123"), UrlVariant::StandardVideo);
//! assert_eq!(classify("just some text"), UrlVariant::Plain);
//! ```
//!
//! ## Without HTTP (classification and rendering only)
//!
//! ```toml
//! [dependencies]
//! video-link-card = { version = "0.1", default-features = false }
//! ```

mod error;
mod link;
mod metadata;
mod render;
mod variant;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
mod preview;
#[cfg(feature = "http")]
mod resolver;

pub use error::{Error, Result};
pub use link::{LinkInput, LinkState};
pub use metadata::VideoMetadata;
pub use render::render;
pub use variant::{UrlVariant, classify, embed_url, short_video_id};

#[cfg(feature = "http")]
pub use http::{DEFAULT_ENDPOINT, HttpOptions};
#[cfg(feature = "http")]
pub use preview::LinkPreview;
#[cfg(feature = "http")]
pub use resolver::{MetadataResolver, lookup_target};
