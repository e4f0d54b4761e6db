//! Deferred embed interaction machine
//!
//! One instance per element occurrence. The lifecycle is
//! `Idle → ThumbnailPending → ThumbnailReady` for the placeholder, with
//! `Activated` as the terminal state once the user clicks and the real
//! player iframe exists. Connection warming is a side effect shared
//! across instances through [`PreconnectRegistry`], not a state of its
//! own.

use crate::host::EmbedHost;
use crate::oembed::ThumbnailFetcher;
use crate::preconnect::PreconnectRegistry;
use embeds::{vimeo, youtube, IframeSpec, Platform};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Accessible caption used when neither the content nor the attributes
/// name one
pub const DEFAULT_PLAY_LABEL: &str = "Play video";

/// Thumbnail width assumed when the host cannot report a box size
const FALLBACK_THUMBNAIL_WIDTH: u32 = 480;

/// Errors that can occur while attaching an element
#[derive(Debug, Error)]
pub enum ElementError {
    /// The element has no `videoid` attribute
    #[error("Element is missing the required videoid attribute")]
    MissingVideoId,
}

/// Attributes read off the custom element at attach time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttrs {
    /// `videoid` attribute, required
    pub video_id: Option<String>,
    /// `playlabel` attribute
    pub play_label: Option<String>,
    /// `params` attribute, extra player parameters in `k=v&k2=v2` form
    pub params: Option<String>,
}

impl ElementAttrs {
    /// Attributes carrying just a video ID
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            play_label: None,
            params: None,
        }
    }
}

/// Lifecycle state of a deferred embed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// Attached, no thumbnail requested yet
    Idle,
    /// Thumbnail metadata fetch in flight
    ThumbnailPending,
    /// Placeholder background set
    ThumbnailReady,
    /// Player iframe attached; terminal
    Activated,
}

/// A deferred video embed
///
/// `video_id` and `play_label` are fixed at attach time and never change.
/// Event methods are driven by the host's rendering tree; see the crate
/// docs for the expected wiring.
#[derive(Debug)]
pub struct DeferredEmbed {
    platform: Platform,
    video_id: String,
    play_label: String,
    params: Option<String>,
    state: ElementState,
    iframe_focused: bool,
    registry: Arc<PreconnectRegistry>,
}

impl DeferredEmbed {
    /// Attach an element to its host, sharing the process-wide
    /// preconnect registry
    pub fn attach<H: EmbedHost>(
        platform: Platform,
        attrs: ElementAttrs,
        host: &mut H,
    ) -> Result<Self, ElementError> {
        Self::attach_with_registry(platform, attrs, host, PreconnectRegistry::global())
    }

    /// Attach an element with an explicit preconnect registry
    ///
    /// The synchronous part of the connected lifecycle: reads the
    /// attributes, resolves the accessible play label, and synthesizes a
    /// play button when the host content has none. Thumbnail loading is
    /// separate ([`load_thumbnail`](Self::load_thumbnail)) because it
    /// suspends.
    pub fn attach_with_registry<H: EmbedHost>(
        platform: Platform,
        attrs: ElementAttrs,
        host: &mut H,
        registry: Arc<PreconnectRegistry>,
    ) -> Result<Self, ElementError> {
        let video_id = attrs
            .video_id
            .filter(|id| !id.is_empty())
            .ok_or(ElementError::MissingVideoId)?;

        // A label on a button the author shipped inside the element takes
        // priority over the playlabel attribute.
        let existing = host
            .existing_play_button_label()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());

        let play_label = match existing {
            Some(label) => label,
            None => {
                let label = attrs
                    .play_label
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| DEFAULT_PLAY_LABEL.to_string());
                host.add_play_button(&label);
                label
            }
        };

        Ok(Self {
            platform,
            video_id,
            play_label,
            params: attrs.params,
            state: ElementState::Idle,
            iframe_focused: false,
            registry,
        })
    }

    /// Fetch the thumbnail and set it as the placeholder background
    ///
    /// Suspends on the metadata fetch; there is no ordering guarantee
    /// against user interaction, and a click may activate the element
    /// before this resolves. Failures degrade to no background image and
    /// are not retried; the play button stays interactive either way.
    pub async fn load_thumbnail<H, F>(&mut self, host: &mut H, fetcher: &F)
    where
        H: EmbedHost,
        F: ThumbnailFetcher + ?Sized,
    {
        if self.state == ElementState::Idle {
            self.state = ElementState::ThumbnailPending;
        }

        let endpoint = self.platform.oembed_url(&self.video_id);
        let response = match fetcher.fetch_oembed(&endpoint).await {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    platform = self.platform.as_str(),
                    video_id = %self.video_id,
                    %error,
                    "thumbnail metadata fetch failed"
                );
                if self.state == ElementState::ThumbnailPending {
                    self.state = ElementState::Idle;
                }
                return;
            }
        };

        let Some(original) = response.thumbnail_url else {
            warn!(
                platform = self.platform.as_str(),
                video_id = %self.video_id,
                "oEmbed response carried no thumbnail URL"
            );
            if self.state == ElementState::ThumbnailPending {
                self.state = ElementState::Idle;
            }
            return;
        };

        let rewritten = self.target_thumbnail_url(host, &original);
        let url = if rewritten != original && !fetcher.probe_image(&rewritten).await {
            // The CDN does not serve the rewritten size; the original
            // always exists.
            original
        } else {
            rewritten
        };

        host.set_background_image(&url);
        if self.state == ElementState::ThumbnailPending {
            self.state = ElementState::ThumbnailReady;
        }
    }

    /// Warm the platform's player origins, at most once per process
    ///
    /// Wired to pointer-hover or touch-start. Repeated hovers on this or
    /// any other instance of the same platform are no-ops.
    pub fn pointer_over<H: EmbedHost>(&mut self, host: &mut H) {
        if self.registry.warm(self.platform) {
            for origin in self.platform.warm_origins() {
                host.preconnect(origin);
            }
        }
    }

    /// Activate: replace the placeholder with the real player iframe
    ///
    /// One-way and terminal. Clicking an activated element is a no-op.
    pub fn click<H: EmbedHost>(&mut self, host: &mut H) {
        if self.state == ElementState::Activated {
            return;
        }
        self.state = ElementState::Activated;

        let spec = IframeSpec::build(
            self.platform,
            &self.video_id,
            &self.play_label,
            self.params.as_deref(),
        );
        host.attach_iframe(&spec);
    }

    /// The attached iframe finished loading; move focus into it once
    pub fn iframe_loaded<H: EmbedHost>(&mut self, host: &mut H) {
        if self.state == ElementState::Activated && !self.iframe_focused {
            self.iframe_focused = true;
            host.focus_iframe();
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Platform this element embeds
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Video ID, fixed at attach time
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// Accessible play label, fixed at attach time
    pub fn play_label(&self) -> &str {
        &self.play_label
    }

    /// Whether the player iframe has been attached
    pub fn is_activated(&self) -> bool {
        self.state == ElementState::Activated
    }

    /// Pick the thumbnail URL for the host's display characteristics
    fn target_thumbnail_url<H: EmbedHost>(&self, host: &H, original: &str) -> String {
        match self.platform {
            Platform::YouTube => {
                let target_width = host
                    .box_size()
                    .map(|(width, _)| (width as f64 * host.device_pixel_ratio()).round() as u32)
                    .unwrap_or(FALLBACK_THUMBNAIL_WIDTH);
                youtube::rewrite_thumbnail_url(
                    original,
                    youtube::ThumbnailQuality::for_width(target_width),
                )
            }
            Platform::Vimeo => {
                let (width, height) = host.box_size().unwrap_or(self.platform.nominal_size());
                let dims = vimeo::ThumbnailDimensions::from_box(width, height)
                    .scaled(host.device_pixel_ratio());
                vimeo::rewrite_thumbnail_url(original, dims)
            }
        }
    }
}
