//! HTTP client for the oEmbed lookup service

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, Response};
use url::Url;

use crate::error::{Error, Result};

/// Public noembed.com endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://noembed.com/embed";

const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_BODY_SIZE: usize = 256 * 1024; // oEmbed documents are small

/// Configuration for metadata lookups.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// oEmbed-style lookup endpoint, queried with `dataType=json&url=...`
    pub endpoint: String,

    /// Upper bound on a whole lookup, connection through body.
    ///
    /// Expiry is reported as [`Error::Timeout`] and treated like any other
    /// network failure.
    pub timeout: Duration,

    /// Maximum response body size in bytes.
    ///
    /// Larger bodies are truncated, which then fails JSON parsing.
    pub max_body_size: usize,

    /// User-Agent header
    pub user_agent: String,

    /// Additional headers to send
    pub headers: Vec<(String, String)>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: format!("video-link-card/{}", env!("CARGO_PKG_VERSION")),
            headers: Vec::new(),
        }
    }
}

impl HttpOptions {
    /// Create a new HttpOptions with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the lookup timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum response body size in bytes.
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build a reqwest Client from these options.
    pub(crate) fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent);

        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                name.parse::<reqwest::header::HeaderName>(),
                value.parse::<reqwest::header::HeaderValue>(),
            ) {
                headers.insert(name, value);
            }
        }
        builder = builder.default_headers(headers);

        Ok(builder.build()?)
    }

    /// Parse and check the configured endpoint.
    pub(crate) fn endpoint_url(&self) -> Result<Url> {
        let parsed = Url::parse(&self.endpoint)?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(Error::InvalidUrl(format!(
                "unsupported scheme '{}', only http/https allowed",
                scheme
            ))),
        }
    }
}

/// Query the lookup service for `target` and return the raw body.
///
/// The whole exchange is bounded by `options.timeout`.
pub(crate) async fn fetch_oembed(
    client: &Client,
    endpoint: &Url,
    target: &str,
    options: &HttpOptions,
) -> Result<Vec<u8>> {
    let request = send_lookup(client, endpoint, target, options.max_body_size);

    match tokio::time::timeout(options.timeout, request).await {
        Ok(Err(Error::Http(err))) if err.is_timeout() => Err(Error::Timeout(options.timeout)),
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(options.timeout)),
    }
}

async fn send_lookup(
    client: &Client,
    endpoint: &Url,
    target: &str,
    max_body_size: usize,
) -> Result<Vec<u8>> {
    let response = client
        .get(endpoint.clone())
        .query(&[("dataType", "json"), ("url", target)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    read_body(response, max_body_size).await
}

/// Read a response body with a streaming size limit.
async fn read_body(response: Response, max_body_size: usize) -> Result<Vec<u8>> {
    let content_length = response.content_length().unwrap_or(0) as usize;
    let capacity = content_length.min(max_body_size);
    let mut bytes = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let remaining = max_body_size.saturating_sub(bytes.len());
        if remaining == 0 {
            break;
        }
        let to_take = chunk.len().min(remaining);
        bytes.extend_from_slice(&chunk[..to_take]);
        if to_take < chunk.len() {
            break; // Hit the limit
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HttpOptions::default();
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(options.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(options.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert!(options.user_agent.contains("video-link-card"));
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let options = HttpOptions::new()
            .endpoint("http://127.0.0.1:9000/embed")
            .timeout(Duration::from_millis(250))
            .max_body_size(1024)
            .user_agent("Custom Agent")
            .header("X-Custom", "Value");

        assert_eq!(options.endpoint, "http://127.0.0.1:9000/embed");
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert_eq!(options.max_body_size, 1024);
        assert_eq!(options.user_agent, "Custom Agent");
        assert_eq!(options.headers.len(), 1);
    }

    #[test]
    fn test_endpoint_rejects_non_http_scheme() {
        let options = HttpOptions::new().endpoint("ftp://noembed.com/embed");
        let err = options.endpoint_url().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let options = HttpOptions::new().endpoint("not a url");
        assert!(matches!(options.endpoint_url(), Err(Error::UrlParse(_))));
    }

    #[test]
    fn test_default_endpoint_parses() {
        let url = HttpOptions::default().endpoint_url().unwrap();
        assert_eq!(url.host_str(), Some("noembed.com"));
    }
}
