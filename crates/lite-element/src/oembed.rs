//! oEmbed thumbnail metadata fetching
//!
//! Both platforms expose a public oEmbed endpoint that returns JSON
//! metadata, including a thumbnail URL whose path encodes a resolution
//! token. The fetch is behind a trait so the element machine stays
//! testable without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching oEmbed metadata
#[derive(Debug, Error)]
pub enum OEmbedError {
    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status
    #[error("oEmbed endpoint returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON
    #[error("Invalid oEmbed response: {0}")]
    Decode(String),
}

/// Result type for oEmbed operations
pub type Result<T> = std::result::Result<T, OEmbedError>;

/// Request timeout for metadata fetches
///
/// A placeholder image is never worth a long wait; a slow endpoint
/// degrades to no background, not to a stalled element.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// oEmbed metadata response
///
/// Only the fields the element consumes are modeled; unknown fields are
/// ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OEmbedResponse {
    /// Thumbnail image URL with an embedded resolution token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Thumbnail width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    /// Thumbnail height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
    /// Video title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Provider name reported by the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

/// Source of thumbnail metadata and image reachability checks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThumbnailFetcher: Send + Sync {
    /// Fetch oEmbed metadata from an endpoint URL
    async fn fetch_oembed(&self, endpoint: &str) -> Result<OEmbedResponse>;

    /// Whether an image URL actually loads
    ///
    /// Used to validate a rewritten thumbnail URL before committing to it.
    async fn probe_image(&self, url: &str) -> bool;
}

/// Network-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
}

impl HttpThumbnailFetcher {
    /// Create a fetcher with its own HTTP client
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Create a fetcher sharing an existing HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpThumbnailFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThumbnailFetcher for HttpThumbnailFetcher {
    async fn fetch_oembed(&self, endpoint: &str) -> Result<OEmbedResponse> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| OEmbedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OEmbedError::Status(status.as_u16()));
        }

        response
            .json::<OEmbedResponse>()
            .await
            .map_err(|e| OEmbedError::Decode(e.to_string()))
    }

    async fn probe_image(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
