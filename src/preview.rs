//! Live link preview: observes inputs and resolves metadata in the background

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::link::{LinkInput, LinkState};
use crate::metadata::VideoMetadata;
use crate::resolver::MetadataResolver;
use crate::variant::UrlVariant;

/// One rendered link whose video metadata fills in asynchronously.
///
/// Each distinct `url` observed triggers at most one lookup. A lookup that
/// settles after the `url` has changed is discarded, so the visible state
/// never shows metadata for a previous link.
///
/// Spawns onto the current Tokio runtime; [`observe`](Self::observe) must be
/// called from within one.
///
/// # Example
///
/// ```rust,no_run
/// use video_link_card::{LinkInput, LinkPreview, MetadataResolver};
///
/// #[tokio::main]
/// async fn main() -> video_link_card::Result<()> {
///     let mut preview = LinkPreview::new(MetadataResolver::new()?);
///     preview.observe(LinkInput::new("https://youtube.com/shorts/abc123"));
///
///     // Renders immediately with metadata absent
///     println!("{}", preview.render());
///
///     let state = preview.settled().await;
///     println!("{}", state.render());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct LinkPreview {
    resolver: MetadataResolver,
    state: Arc<watch::Sender<LinkState>>,
    task: Option<JoinHandle<()>>,
}

impl LinkPreview {
    /// Create a preview with no link observed yet.
    pub fn new(resolver: MetadataResolver) -> Self {
        Self {
            resolver,
            state: Arc::new(watch::Sender::new(LinkState::default())),
            task: None,
        }
    }

    /// Observe the input for the current render.
    ///
    /// A changed `url` resets the metadata, cancels any in-flight lookup and
    /// starts a new one for video links. An unchanged `url` only updates the
    /// display text.
    pub fn observe(&mut self, input: LinkInput) {
        let current_url_matches = self.state.borrow().input.url == input.url;
        if current_url_matches {
            self.state.send_if_modified(|state| {
                if state.input.display_text == input.display_text {
                    return false;
                }
                state.input.display_text = input.display_text;
                true
            });
            return;
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }

        let generation = self.state.borrow().generation + 1;
        let next = LinkState::new(input, generation);
        let url = next.input.url.clone();
        let variant = next.variant;
        let pending = next.pending;
        self.state.send_replace(next);

        tracing::debug!(url = %url, %variant, generation, "observed new link");
        if pending {
            self.task = Some(tokio::spawn(resolve_into(
                self.resolver.clone(),
                Arc::clone(&self.state),
                url,
                variant,
                generation,
            )));
        }
    }

    /// Current state, without waiting for a pending lookup.
    pub fn snapshot(&self) -> LinkState {
        self.state.borrow().clone()
    }

    /// Render the current state as an HTML fragment.
    pub fn render(&self) -> String {
        self.state.borrow().render()
    }

    /// Subscribe to state changes; each change is a cue to re-render.
    pub fn subscribe(&self) -> watch::Receiver<LinkState> {
        self.state.subscribe()
    }

    /// Wait until the lookup for the current `url` has settled.
    pub async fn settled(&self) -> LinkState {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|state| !state.pending).await {
            Ok(state) => state.clone(),
            // Unreachable while `self` holds the sender
            Err(_) => self.snapshot(),
        }
    }
}

impl Drop for LinkPreview {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn resolve_into(
    resolver: MetadataResolver,
    state: Arc<watch::Sender<LinkState>>,
    url: String,
    variant: UrlVariant,
    generation: u64,
) {
    let metadata = resolver.resolve(&url, variant).await;
    if !apply_resolution(&state, generation, metadata) {
        tracing::debug!(url = %url, generation, "discarding metadata for superseded link");
    }
}

/// Write a settled lookup into the state if it is still for the current `url`.
///
/// Returns `false` when the state has moved on to a newer generation.
pub(crate) fn apply_resolution(
    state: &watch::Sender<LinkState>,
    generation: u64,
    metadata: Option<VideoMetadata>,
) -> bool {
    state.send_if_modified(|current| {
        if current.generation != generation {
            return false;
        }
        current.pending = false;
        if let Some(metadata) = metadata {
            current.metadata = metadata;
        }
        true
    })
}
