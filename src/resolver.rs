//! Video metadata resolution through the oEmbed lookup service

use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::http::{self, HttpOptions};
use crate::metadata::VideoMetadata;
use crate::variant::{UrlVariant, embed_url, short_video_id};

/// URL to submit to the lookup service for a classified link.
///
/// Short-form links are translated to their canonical embed URL, standard
/// videos are passed through unchanged, and plain links have no target.
///
/// # Example
/// ```
/// use video_link_card::{lookup_target, UrlVariant};
///
/// assert_eq!(
///     lookup_target("https://youtube.com/shorts/abc123", UrlVariant::ShortVideo).as_deref(),
///     Some("https://www.youtube.com/embed/abc123"),
/// );
/// assert_eq!(lookup_target("https://example.org", UrlVariant::Plain), None);
/// ```
pub fn lookup_target(url: &str, variant: UrlVariant) -> Option<String> {
    match variant {
        UrlVariant::Plain => None,
        UrlVariant::StandardVideo => Some(url.to_string()),
        UrlVariant::ShortVideo => short_video_id(url).map(embed_url),
    }
}

/// Resolves display metadata for video links.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MetadataResolver {
    client: Client,
    endpoint: Url,
    options: HttpOptions,
}

impl MetadataResolver {
    /// Create a resolver against the public lookup service.
    pub fn new() -> Result<Self> {
        Self::with_options(HttpOptions::default())
    }

    /// Create a resolver with custom HTTP options.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::time::Duration;
    /// use video_link_card::{HttpOptions, MetadataResolver, UrlVariant};
    ///
    /// #[tokio::main]
    /// async fn main() -> video_link_card::Result<()> {
    ///     let options = HttpOptions::new().timeout(Duration::from_secs(2));
    ///     let resolver = MetadataResolver::with_options(options)?;
    ///
    ///     let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    ///     if let Some(meta) = resolver.resolve(url, UrlVariant::StandardVideo).await {
    ///         println!("{:?} by {:?}", meta.title, meta.creator_name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn with_options(options: HttpOptions) -> Result<Self> {
        let endpoint = options.endpoint_url()?;
        let client = options.build_client()?;
        Ok(Self {
            client,
            endpoint,
            options,
        })
    }

    /// The options this resolver was built with.
    pub fn options(&self) -> &HttpOptions {
        &self.options
    }

    /// Resolve metadata, reporting why a lookup failed.
    ///
    /// Returns `Ok(None)` for plain links without touching the network.
    pub async fn try_resolve(
        &self,
        url: &str,
        variant: UrlVariant,
    ) -> Result<Option<VideoMetadata>> {
        let Some(target) = lookup_target(url, variant) else {
            if variant.is_video() {
                tracing::debug!(url, %variant, "no video id in link, skipping lookup");
            }
            return Ok(None);
        };

        tracing::debug!(url, %variant, target = %target, "looking up video metadata");
        let body = http::fetch_oembed(&self.client, &self.endpoint, &target, &self.options).await?;
        VideoMetadata::from_oembed(&body).map(Some)
    }

    /// Resolve metadata, never failing.
    ///
    /// Network failures, timeouts and malformed responses are logged and
    /// yield `None`, so the card renders without the missing fields.
    pub async fn resolve(&self, url: &str, variant: UrlVariant) -> Option<VideoMetadata> {
        match self.try_resolve(url, variant).await {
            Ok(metadata) => metadata,
            Err(error) => {
                tracing::warn!(
                    url,
                    %variant,
                    network = error.is_network_failure(),
                    %error,
                    "failed to resolve video metadata"
                );
                None
            }
        }
    }
}
