//! Vimeo video ID extraction and thumbnail handling
//!
//! Recognized reference shapes, tried in order:
//!
//! - `https://vimeo.com/VIDEO_ID`
//! - `https://player.vimeo.com/video/VIDEO_ID`
//! - a bare numeric ID with no URL around it

use regex::Regex;
use std::sync::OnceLock;

/// Extract a Vimeo video ID from a URL or bare-ID reference
///
/// Rules are tried in order and the first capture wins. Vimeo IDs are
/// plain digit strings.
pub fn extract_vimeo_id(reference: &str) -> Option<String> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            Regex::new(r"vimeo\.com/([0-9]+)").unwrap(),
            Regex::new(r"player\.vimeo\.com/video/([0-9]+)").unwrap(),
            // Just the video ID without URL
            Regex::new(r"^([0-9]+)$").unwrap(),
        ]
    });

    for pattern in patterns {
        if let Some(captures) = pattern.captures(reference) {
            if let Some(m) = captures.get(1) {
                return Some(m.as_str().to_string());
            }
        }
    }
    None
}

/// Thumbnail dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailDimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ThumbnailDimensions {
    /// Snap a rendered box size to dimensions the image CDN serves well
    ///
    /// Widths that are not a multiple of 320 are rounded up to the next
    /// multiple of 100, with the height rescaled to keep the aspect ratio.
    pub fn from_box(width: u32, height: u32) -> Self {
        if width == 0 || width % 320 == 0 {
            return Self { width, height };
        }
        let snapped = 100 * width.div_ceil(100);
        let rescaled = ((snapped as f64 / width as f64) * height as f64).round() as u32;
        Self {
            width: snapped,
            height: rescaled,
        }
    }

    /// Scale to the device's physical pixels
    ///
    /// The 0.75 factor trades a little sharpness for a much smaller
    /// placeholder image; at placeholder sizes the difference is invisible.
    pub fn scaled(&self, device_pixel_ratio: f64) -> Self {
        let factor = device_pixel_ratio * 0.75;
        Self {
            width: (self.width as f64 * factor).round() as u32,
            height: (self.height as f64 * factor).round() as u32,
        }
    }
}

/// Rewrite an oEmbed thumbnail URL to target dimensions
///
/// Vimeo thumbnail URLs end in a resolution token (`-d_640x360` or
/// `_640x360`); the token is replaced with the target size. URLs without a
/// token come back unchanged.
pub fn rewrite_thumbnail_url(thumbnail_url: &str, dimensions: ThumbnailDimensions) -> String {
    static RESOLUTION_TOKEN: OnceLock<Regex> = OnceLock::new();
    let re = RESOLUTION_TOKEN
        .get_or_init(|| Regex::new(r"-d_\d+x\d+$|_\d+x\d+$").unwrap());

    re.replace(
        thumbnail_url,
        format!("_{}x{}", dimensions.width, dimensions.height),
    )
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_vimeo_id("https://vimeo.com/76979871"),
            Some("76979871".to_string())
        );
    }

    #[test]
    fn test_extract_from_player_url() {
        assert_eq!(
            extract_vimeo_id("https://player.vimeo.com/video/76979871"),
            Some("76979871".to_string())
        );
    }

    #[test]
    fn test_extract_bare_numeric_id() {
        assert_eq!(extract_vimeo_id("76979871"), Some("76979871".to_string()));
    }

    #[test]
    fn test_rejects_non_numeric_references() {
        assert_eq!(extract_vimeo_id("https://vimeo.com/channels/staffpicks"), None);
        assert_eq!(extract_vimeo_id("dQw4w9WgXcQ"), None);
        assert_eq!(extract_vimeo_id(""), None);
    }

    #[test]
    fn test_extract_stops_at_non_digit() {
        assert_eq!(
            extract_vimeo_id("https://vimeo.com/76979871?autoplay=1"),
            Some("76979871".to_string())
        );
    }

    #[test]
    fn test_dimensions_multiple_of_320_untouched() {
        let dims = ThumbnailDimensions::from_box(640, 360);
        assert_eq!(dims, ThumbnailDimensions { width: 640, height: 360 });
    }

    #[test]
    fn test_dimensions_rounded_up_to_hundred() {
        let dims = ThumbnailDimensions::from_box(630, 354);
        assert_eq!(dims.width, 700);
        // Height rescaled to preserve aspect ratio
        assert_eq!(dims.height, ((700.0 / 630.0_f64) * 354.0).round() as u32);
    }

    #[test]
    fn test_dimensions_scaled_by_pixel_ratio() {
        let dims = ThumbnailDimensions { width: 640, height: 360 }.scaled(2.0);
        assert_eq!(dims, ThumbnailDimensions { width: 960, height: 540 });
    }

    #[test]
    fn test_rewrite_thumbnail_url_dash_token() {
        assert_eq!(
            rewrite_thumbnail_url(
                "https://i.vimeocdn.com/video/452001751-d_640x360",
                ThumbnailDimensions { width: 960, height: 540 }
            ),
            "https://i.vimeocdn.com/video/452001751_960x540"
        );
    }

    #[test]
    fn test_rewrite_thumbnail_url_underscore_token() {
        assert_eq!(
            rewrite_thumbnail_url(
                "https://i.vimeocdn.com/video/452001751_295x166",
                ThumbnailDimensions { width: 640, height: 360 }
            ),
            "https://i.vimeocdn.com/video/452001751_640x360"
        );
    }

    #[test]
    fn test_rewrite_thumbnail_url_without_token() {
        assert_eq!(
            rewrite_thumbnail_url(
                "https://i.vimeocdn.com/video/452001751",
                ThumbnailDimensions { width: 640, height: 360 }
            ),
            "https://i.vimeocdn.com/video/452001751"
        );
    }
}
