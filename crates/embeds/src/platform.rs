//! Platform identification and per-platform constants
//!
//! Everything that differs between YouTube and Vimeo but is fixed for a
//! given platform lives here: tag names, canonical URLs, the oEmbed
//! endpoint, warm-up origins, and nominal player dimensions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while resolving a video reference
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The reference matched none of the platform's recognized shapes
    #[error("No {platform} video ID found in reference")]
    MissingId {
        /// Platform the reference was resolved against
        platform: Platform,
    },
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Supported video platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube video
    YouTube,
    /// Vimeo video
    Vimeo,
}

impl Platform {
    /// Get the platform name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Vimeo => "vimeo",
        }
    }

    /// Custom element tag name for this platform
    pub fn tag_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "lite-youtube",
            Platform::Vimeo => "lite-vimeo",
        }
    }

    /// Canonical watch URL for a video ID
    pub fn watch_url(&self, video_id: &str) -> String {
        match self {
            Platform::YouTube => format!("https://www.youtube.com/watch?v={}", video_id),
            Platform::Vimeo => format!("https://vimeo.com/{}", video_id),
        }
    }

    /// oEmbed metadata endpoint for a video ID
    ///
    /// The watch URL is percent-encoded into the endpoint's `url` query
    /// parameter, which is how both platforms key their oEmbed APIs.
    pub fn oembed_url(&self, video_id: &str) -> String {
        let watch = urlencoding::encode(&self.watch_url(video_id)).into_owned();
        match self {
            Platform::YouTube => {
                format!("https://www.youtube.com/oembed?url={}&format=json", watch)
            }
            Platform::Vimeo => format!("https://vimeo.com/api/oembed.json?url={}", watch),
        }
    }

    /// Origins the real player will contact once activated
    ///
    /// Preconnecting to these during hover shaves the connection setup off
    /// the click-to-playback latency. The sets are small and fixed; the
    /// embed's own subresources load inside its iframe and cannot usefully
    /// be prefetched from outside it.
    pub fn warm_origins(&self) -> &'static [&'static str] {
        match self {
            Platform::YouTube => &[
                // The iframe document itself
                "https://www.youtube-nocookie.com",
                // Botguard script
                "https://www.google.com",
                // Ads, loaded even for ad-free playback
                "https://googleads.g.doubleclick.net",
                "https://static.doubleclick.net",
            ],
            Platform::Vimeo => &[
                // The iframe document and most of its subresources
                "https://player.vimeo.com",
                // Images
                "https://i.vimeocdn.com",
                // Files .js, .css
                "https://f.vimeocdn.com",
                // Metrics
                "https://fresnel.vimeocdn.com",
            ],
        }
    }

    /// Nominal player size in CSS pixels, overridable by styling
    pub fn nominal_size(&self) -> (u32, u32) {
        match self {
            Platform::YouTube => (560, 315),
            Platform::Vimeo => (640, 360),
        }
    }

    /// Extract a video ID from a URL or bare-ID reference
    pub fn extract_id(&self, reference: &str) -> Option<String> {
        match self {
            Platform::YouTube => crate::youtube::extract_youtube_id(reference),
            Platform::Vimeo => crate::vimeo::extract_vimeo_id(reference),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a video reference against a platform's recognized URL shapes
///
/// Returns [`EmbedError::MissingId`] when the reference matches none of
/// them, which callers treat as "not a video" rather than a fault.
pub fn resolve_video_id(platform: Platform, reference: &str) -> Result<String> {
    platform
        .extract_id(reference)
        .ok_or(EmbedError::MissingId { platform })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_as_str() {
        assert_eq!(Platform::YouTube.as_str(), "youtube");
        assert_eq!(Platform::Vimeo.as_str(), "vimeo");
    }

    #[test]
    fn test_platform_tag_name() {
        assert_eq!(Platform::YouTube.tag_name(), "lite-youtube");
        assert_eq!(Platform::Vimeo.tag_name(), "lite-vimeo");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            Platform::YouTube.watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(Platform::Vimeo.watch_url("76979871"), "https://vimeo.com/76979871");
    }

    #[test]
    fn test_oembed_url_encodes_watch_url() {
        assert_eq!(
            Platform::Vimeo.oembed_url("76979871"),
            "https://vimeo.com/api/oembed.json?url=https%3A%2F%2Fvimeo.com%2F76979871"
        );

        let url = Platform::YouTube.oembed_url("dQw4w9WgXcQ");
        assert!(url.starts_with("https://www.youtube.com/oembed?url=https%3A%2F%2F"));
        assert!(url.ends_with("&format=json"));
    }

    #[test]
    fn test_warm_origins_are_fixed_small_sets() {
        assert_eq!(Platform::YouTube.warm_origins().len(), 4);
        assert_eq!(Platform::Vimeo.warm_origins().len(), 4);
        assert!(Platform::Vimeo.warm_origins().contains(&"https://player.vimeo.com"));
    }

    #[test]
    fn test_resolve_video_id_success() {
        let id = resolve_video_id(Platform::Vimeo, "https://vimeo.com/76979871").unwrap();
        assert_eq!(id, "76979871");
    }

    #[test]
    fn test_resolve_video_id_failure() {
        let err = resolve_video_id(Platform::Vimeo, "https://example.com/clip").unwrap_err();
        assert!(format!("{}", err).contains("vimeo"));
    }

    #[test]
    fn test_platform_serialization() {
        assert_eq!(serde_json::to_string(&Platform::YouTube).unwrap(), "\"youtube\"");
        let p: Platform = serde_json::from_str("\"vimeo\"").unwrap();
        assert_eq!(p, Platform::Vimeo);
    }
}
