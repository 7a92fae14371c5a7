//! Link input and per-link render state

use serde::{Deserialize, Serialize};

use crate::metadata::VideoMetadata;
use crate::render;
use crate::variant::{UrlVariant, classify};

/// A link as found in rich text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInput {
    /// Navigation target
    pub url: String,

    /// Anchor text, if the content gave one
    pub display_text: Option<String>,
}

impl LinkInput {
    /// Create an input with no display text.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            display_text: None,
        }
    }

    /// Set the anchor text.
    pub fn display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = Some(text.into());
        self
    }

    /// Text to show for a plain link.
    pub fn text(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.url)
    }
}

/// Everything needed to render one link at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkState {
    /// The input currently observed
    pub input: LinkInput,

    /// Classification of `input.url`
    pub variant: UrlVariant,

    /// Metadata for `input.url`; empty until resolved
    pub metadata: VideoMetadata,

    /// Bumped on every `url` change; resolutions carry the value they started with
    pub generation: u64,

    /// A lookup for the current `url` has not settled yet
    pub pending: bool,
}

impl LinkState {
    /// Fresh state for an input, with metadata absent.
    pub fn new(input: LinkInput, generation: u64) -> Self {
        let variant = classify(&input.url);
        Self {
            input,
            variant,
            metadata: VideoMetadata::new(),
            generation,
            pending: variant.is_video(),
        }
    }

    /// Render the current state as an HTML fragment.
    pub fn render(&self) -> String {
        render::render(&self.input, self.variant, &self.metadata)
    }
}
