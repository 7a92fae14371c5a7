//! HTML rendering of links and video cards
//!
//! Emits semantic markup with stable class names; styling is left to the
//! page. Every anchor opens in a new tab without giving it access to the
//! opener or the referrer.

use crate::link::LinkInput;
use crate::metadata::VideoMetadata;
use crate::variant::UrlVariant;

const LINK_TARGET: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Render a link for the given variant and whatever metadata is available.
///
/// Plain links render as an inline anchor. Video links render as a card;
/// thumbnail, title and creator elements are left out when absent.
///
/// # Example
/// ```
/// use video_link_card::{render, LinkInput, UrlVariant, VideoMetadata};
///
/// let html = render(&LinkInput::new("https://example.org"), UrlVariant::Plain, &VideoMetadata::new());
/// assert!(html.contains(r#"rel="noopener noreferrer""#));
/// ```
pub fn render(input: &LinkInput, variant: UrlVariant, metadata: &VideoMetadata) -> String {
    match variant.badge() {
        None => render_plain(input),
        Some(badge) => render_card(input, badge, metadata),
    }
}

fn render_plain(input: &LinkInput) -> String {
    format!(
        r#"<a class="link" href="{}" {LINK_TARGET}>{}</a>"#,
        html_escape(&input.url),
        html_escape(input.text()),
    )
}

fn render_card(input: &LinkInput, badge: &str, metadata: &VideoMetadata) -> String {
    let mut html = String::new();

    html.push_str(&format!(r#"<div class="link-card link-card--{badge}">"#));
    html.push_str(&format!(r#"<span class="link-card__badge">{badge}</span>"#));

    if let Some(thumbnail) = &metadata.thumbnail_url {
        html.push_str(&format!(
            r#"<img class="link-card__thumbnail" src="{}" alt="{}">"#,
            html_escape(thumbnail),
            html_escape(metadata.title.as_deref().unwrap_or_default()),
        ));
    }

    html.push_str(r#"<div class="link-card__content">"#);
    if let Some(title) = &metadata.title {
        html.push_str(r#"<h4 class="link-card__title">"#);
        html.push_str(&html_escape(title));
        html.push_str("</h4>");
    }
    if let Some(creator) = &metadata.creator_name {
        html.push_str(r#"<p class="link-card__creator">"#);
        html.push_str(&html_escape(creator));
        html.push_str("</p>");
    }
    html.push_str(&format!(
        r#"<a class="link-card__overlay" href="{}" {LINK_TARGET} aria-label="{}"></a>"#,
        html_escape(&input.url),
        html_escape(metadata.title.as_deref().unwrap_or(input.text())),
    ));
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
