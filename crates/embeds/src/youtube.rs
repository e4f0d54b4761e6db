//! YouTube video ID extraction and thumbnail handling
//!
//! Recognized reference shapes, tried in order:
//!
//! - `https://www.youtube.com/watch?v=VIDEO_ID`
//! - `https://youtu.be/VIDEO_ID`
//! - `https://www.youtube.com/shorts/VIDEO_ID`
//! - a bare video ID with no URL around it

use regex::Regex;
use std::sync::OnceLock;

/// Extract a YouTube video ID from a URL or bare-ID reference
///
/// Rules are tried in order and the first capture wins. The bare-ID rule
/// accepts tokens of 10 to 12 ID characters; canonical IDs are 11 long,
/// but both shorter and longer tokens have been observed in the wild.
pub fn extract_youtube_id(reference: &str) -> Option<String> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            Regex::new(r"youtube\.com/watch\?v=([^&?/]+)").unwrap(),
            Regex::new(r"youtu\.be/([^&?/]+)").unwrap(),
            Regex::new(r"youtube\.com/shorts/([^&?/]+)").unwrap(),
            // Just the video ID without URL
            Regex::new(r"^([a-zA-Z0-9_-]{10,12})$").unwrap(),
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

/// YouTube thumbnail quality
///
/// Each quality maps to a fixed filename on the image CDN; the oEmbed
/// response names one of them, and swapping the filename swaps the
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// Default quality (120x90)
    Default,
    /// Medium quality (320x180)
    Medium,
    /// High quality (480x360)
    High,
    /// Standard definition (640x480)
    StandardDef,
    /// Max resolution (1280x720)
    MaxRes,
}

impl ThumbnailQuality {
    /// Get the filename for this quality
    pub fn filename(&self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::StandardDef => "sddefault.jpg",
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
        }
    }

    /// Pick the smallest quality that covers a target display width
    pub fn for_width(target_width: u32) -> Self {
        match target_width {
            0..=120 => ThumbnailQuality::Default,
            121..=320 => ThumbnailQuality::Medium,
            321..=480 => ThumbnailQuality::High,
            481..=640 => ThumbnailQuality::StandardDef,
            _ => ThumbnailQuality::MaxRes,
        }
    }
}

/// Rewrite an oEmbed thumbnail URL to a target quality
///
/// Replaces the final path segment (the resolution-encoding filename) with
/// the target quality's filename. URLs without a path segment come back
/// unchanged.
pub fn rewrite_thumbnail_url(thumbnail_url: &str, quality: ThumbnailQuality) -> String {
    match thumbnail_url.rfind('/') {
        Some(pos) => format!("{}/{}", &thumbnail_url[..pos], quality.filename()),
        None => thumbnail_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_watch_url_with_extra_params() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_short_url() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_from_shorts_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_bare_id() {
        assert_eq!(extract_youtube_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_bare_id_length_boundaries() {
        // 10 and 12 characters are accepted, 9 and 13 are not
        assert_eq!(extract_youtube_id("abcdefghij"), Some("abcdefghij".to_string()));
        assert_eq!(extract_youtube_id("abcdefghijkl"), Some("abcdefghijkl".to_string()));
        assert_eq!(extract_youtube_id("abcdefghi"), None);
        assert_eq!(extract_youtube_id("abcdefghijklm"), None);
    }

    #[test]
    fn test_bare_id_allows_hyphen_and_underscore() {
        assert_eq!(extract_youtube_id("a-b_c-d_e-f"), Some("a-b_c-d_e-f".to_string()));
    }

    #[test]
    fn test_rejects_non_id_input() {
        assert_eq!(extract_youtube_id("not a video"), None);
        assert_eq!(extract_youtube_id("https://example.com/watch?v="), None);
        assert_eq!(extract_youtube_id(""), None);
    }

    #[test]
    fn test_thumbnail_quality_filenames() {
        assert_eq!(ThumbnailQuality::Default.filename(), "default.jpg");
        assert_eq!(ThumbnailQuality::High.filename(), "hqdefault.jpg");
        assert_eq!(ThumbnailQuality::MaxRes.filename(), "maxresdefault.jpg");
    }

    #[test]
    fn test_thumbnail_quality_for_width() {
        assert_eq!(ThumbnailQuality::for_width(100), ThumbnailQuality::Default);
        assert_eq!(ThumbnailQuality::for_width(320), ThumbnailQuality::Medium);
        assert_eq!(ThumbnailQuality::for_width(480), ThumbnailQuality::High);
        assert_eq!(ThumbnailQuality::for_width(640), ThumbnailQuality::StandardDef);
        assert_eq!(ThumbnailQuality::for_width(1280), ThumbnailQuality::MaxRes);
    }

    #[test]
    fn test_rewrite_thumbnail_url() {
        assert_eq!(
            rewrite_thumbnail_url(
                "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
                ThumbnailQuality::MaxRes
            ),
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_rewrite_thumbnail_url_without_path() {
        assert_eq!(
            rewrite_thumbnail_url("no-slashes-here", ThumbnailQuality::High),
            "no-slashes-here"
        );
    }
}
