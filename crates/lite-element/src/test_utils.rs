//! Test doubles for driving embed elements without a rendering tree
//!
//! These are used by this crate's unit tests and by downstream
//! integration tests, so they live in the library rather than behind
//! `#[cfg(test)]`.

#![allow(dead_code)] // Test utilities may not all be used yet

use crate::host::EmbedHost;
use crate::oembed::{OEmbedError, OEmbedResponse, Result, ThumbnailFetcher};
use async_trait::async_trait;
use embeds::IframeSpec;

/// Recording host that captures every capability call
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    /// Background image last set on the placeholder
    pub background_image: Option<String>,
    /// Play-button label pre-existing in the element's content
    pub existing_label: Option<String>,
    /// Labels of synthesized play buttons, in order of creation
    pub play_buttons: Vec<String>,
    /// Iframes attached, in order of attachment
    pub iframes: Vec<IframeSpec>,
    /// How many times focus was moved into an iframe
    pub focus_count: usize,
    /// Origins preconnected to, in order of issue
    pub preconnects: Vec<String>,
    /// Rendered box size reported to the element
    pub box_size: Option<(u32, u32)>,
    /// Device pixel ratio reported to the element
    pub pixel_ratio: Option<f64>,
}

impl FakeHost {
    /// Host with no pre-existing content and no known box size
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that reports a rendered box size
    pub fn with_box_size(width: u32, height: u32) -> Self {
        Self {
            box_size: Some((width, height)),
            ..Self::default()
        }
    }
}

impl EmbedHost for FakeHost {
    fn set_background_image(&mut self, url: &str) {
        self.background_image = Some(url.to_string());
    }

    fn existing_play_button_label(&self) -> Option<String> {
        self.existing_label.clone()
    }

    fn add_play_button(&mut self, label: &str) {
        self.play_buttons.push(label.to_string());
    }

    fn attach_iframe(&mut self, spec: &IframeSpec) {
        self.iframes.push(spec.clone());
    }

    fn focus_iframe(&mut self) {
        self.focus_count += 1;
    }

    fn preconnect(&mut self, origin: &str) {
        self.preconnects.push(origin.to_string());
    }

    fn box_size(&self) -> Option<(u32, u32)> {
        self.box_size
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.unwrap_or(1.0)
    }
}

/// Canned fetcher with a fixed thumbnail URL and probe verdict
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    /// Thumbnail URL returned in the oEmbed response
    pub thumbnail_url: Option<String>,
    /// Whether image probes report success
    pub probe_ok: bool,
    /// Fail the metadata fetch entirely
    pub fail: bool,
}

impl StaticFetcher {
    /// Fetcher that succeeds with the given thumbnail URL
    pub fn with_thumbnail(url: impl Into<String>) -> Self {
        Self {
            thumbnail_url: Some(url.into()),
            probe_ok: true,
            fail: false,
        }
    }

    /// Fetcher whose metadata fetch always fails
    pub fn failing() -> Self {
        Self {
            thumbnail_url: None,
            probe_ok: false,
            fail: true,
        }
    }
}

#[async_trait]
impl ThumbnailFetcher for StaticFetcher {
    async fn fetch_oembed(&self, _endpoint: &str) -> Result<OEmbedResponse> {
        if self.fail {
            return Err(OEmbedError::Http("stubbed fetch failure".to_string()));
        }
        Ok(OEmbedResponse {
            thumbnail_url: self.thumbnail_url.clone(),
            ..OEmbedResponse::default()
        })
    }

    async fn probe_image(&self, _url: &str) -> bool {
        self.probe_ok
    }
}
