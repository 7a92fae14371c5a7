//! Example: classify links and render them with resolved video metadata
//!
//! ```text
//! RUST_LOG=video_link_card=debug cargo run --example preview -- https://youtu.be/dQw4w9WgXcQ
//! ```

use tracing_subscriber::EnvFilter;
use video_link_card::{LinkInput, LinkPreview, MetadataResolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("video_link_card=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        urls = vec![
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            "https://www.youtube.com/shorts/tPEE9ZwTmy0".to_string(),
            "https://example.com".to_string(),
        ];
    }

    let resolver = MetadataResolver::new()?;
    let mut preview = LinkPreview::new(resolver);

    for url in urls {
        println!("Link: {}", url);

        preview.observe(LinkInput::new(url));
        println!("  Before: {}", preview.render());

        let state = preview.settled().await;
        println!("  Variant: {}", state.variant);
        println!("  Title: {:?}", state.metadata.title);
        println!("  Creator: {:?}", state.metadata.creator_name);
        println!("  Thumbnail: {:?}", state.metadata.thumbnail_url);
        println!("  After: {}\n", state.render());
    }

    Ok(())
}
