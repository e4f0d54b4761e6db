//! Shortcode tag body parsing
//!
//! The interior of a shortcode is `videoRefOrUrl` or `videoRefOrUrl|width`.
//! Editors paste URLs through WYSIWYG filters that entity-encode them, so
//! the reference segment is decoded before ID extraction.

/// Parsed interior of a shortcode tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBody {
    /// Video URL or bare ID, entity-decoded
    pub video_ref: String,
    /// Accepted width modifier in CSS pixels, if one was supplied
    pub width_px: Option<u32>,
}

impl TagBody {
    /// Parse a raw tag interior
    ///
    /// The body is split on `|`: the first segment becomes the video
    /// reference, the second becomes the width when it is numeric and at
    /// most `max_width_px`. Anything else in the width position is
    /// silently dropped. Segments past the second are ignored.
    pub fn parse(raw: &str, max_width_px: u32) -> Self {
        let mut segments = raw.split('|');
        let reference = segments.next().unwrap_or_default();
        let width_px = segments.next().and_then(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            segment.parse::<u32>().ok().filter(|&w| w <= max_width_px)
        });

        Self {
            video_ref: decode_html_entities(reference),
            width_px,
        }
    }
}

/// Decode common HTML entities
fn decode_html_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}
