//! Single-pass shortcode scanner and rewriter
//!
//! The scanner walks the text once, left to right, copying verbatim spans
//! and generated replacements into an output buffer. The cursor always
//! points into the *original* text, so a replacement is never rescanned
//! and no offset bookkeeping survives a splice.

use crate::context::{ContentContext, RewriteOptions};
use crate::tag::TagBody;
use embeds::{resolve_video_id, Platform};
use serde::{Deserialize, Serialize};
use tracing::debug;

const YOUTUBE_OPEN: &str = "{youtube}";
const YOUTUBE_CLOSE: &str = "{/youtube}";
const VIMEO_OPEN: &str = "{vimeo}";
const VIMEO_CLOSE: &str = "{/vimeo}";

/// Outcome of rewriting one text fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    /// The rewritten text
    pub text: String,
    /// Whether any YouTube shortcode was replaced
    pub uses_youtube: bool,
    /// Whether any Vimeo shortcode was replaced
    pub uses_vimeo: bool,
}

impl RewriteResult {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            uses_youtube: false,
            uses_vimeo: false,
        }
    }

    /// Whether any shortcode was replaced at all
    pub fn changed(&self) -> bool {
        self.uses_youtube || self.uses_vimeo
    }
}

/// Configurable shortcode rewriter
///
/// [`rewrite`] covers the common case; construct a `Rewriter` to set a
/// non-default unknown-context policy or width cap.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    /// Create a rewriter with the given options
    pub fn new(options: RewriteOptions) -> Self {
        Self { options }
    }

    /// Rewrite an article-body fragment
    pub fn rewrite(&self, text: &str) -> RewriteResult {
        self.rewrite_in(ContentContext::ArticleBody, text)
    }

    /// Rewrite a fragment from a known content context
    ///
    /// Non-rewritable contexts return the input unchanged with both
    /// platform flags false.
    pub fn rewrite_in(&self, context: ContentContext, text: &str) -> RewriteResult {
        if !context.is_rewritable(&self.options) {
            return RewriteResult::unchanged(text);
        }
        self.scan(text)
    }

    fn scan(&self, text: &str) -> RewriteResult {
        // Cheap substring probe before committing to a scan
        if !text.contains(YOUTUBE_OPEN) && !text.contains(VIMEO_OPEN) {
            return RewriteResult::unchanged(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut copied = 0; // everything before this offset is already in `out`
        let mut offset = 0; // scan cursor into the original text
        let mut uses_youtube = false;
        let mut uses_vimeo = false;

        while let Some(found) = text[offset..].find('{') {
            let start = offset + found;

            let platform = if text[start..].starts_with(YOUTUBE_OPEN) {
                Some(Platform::YouTube)
            } else if text[start..].starts_with(VIMEO_OPEN) {
                Some(Platform::Vimeo)
            } else {
                None
            };

            let Some(platform) = platform else {
                // Some other braced content; not ours
                offset = start + 1;
                continue;
            };

            let (open_tag, close_tag) = match platform {
                Platform::YouTube => (YOUTUBE_OPEN, YOUTUBE_CLOSE),
                Platform::Vimeo => (VIMEO_OPEN, VIMEO_CLOSE),
            };

            let body_start = start + open_tag.len();
            let Some(close_found) = text[body_start..].find(close_tag) else {
                // Unterminated tag: the opening brace is plain content
                offset = start + 1;
                continue;
            };
            let body_end = body_start + close_found;
            let raw_body = &text[body_start..body_end];

            // An unescaped angle bracket means the braces wrap a
            // pre-existing HTML fragment, not a shortcode.
            if raw_body.contains('<') {
                debug!(platform = platform.as_str(), "skipping shortcode with embedded markup");
                offset = start + 1;
                continue;
            }

            let body = TagBody::parse(raw_body, self.options.max_width_px);
            match resolve_video_id(platform, &body.video_ref) {
                Ok(video_id) => {
                    out.push_str(&text[copied..start]);
                    out.push_str(&element_markup(platform, &video_id, body.width_px));
                    copied = body_end + close_tag.len();
                    offset = copied;

                    debug!(platform = platform.as_str(), video_id = %video_id, "replaced video shortcode");
                    match platform {
                        Platform::YouTube => uses_youtube = true,
                        Platform::Vimeo => uses_vimeo = true,
                    }
                }
                Err(_) => {
                    // No resolvable ID: leave the span verbatim and move on
                    debug!(
                        platform = platform.as_str(),
                        reference = %body.video_ref,
                        "unresolvable video reference, leaving shortcode in place"
                    );
                    offset = body_end + close_tag.len();
                }
            }
        }

        out.push_str(&text[copied..]);
        RewriteResult {
            text: out,
            uses_youtube,
            uses_vimeo,
        }
    }
}

/// Rewrite an article-body fragment with default options
pub fn rewrite(text: &str) -> RewriteResult {
    Rewriter::default().rewrite(text)
}

/// Generate the custom-element replacement for a resolved video
fn element_markup(platform: Platform, video_id: &str, width_px: Option<u32>) -> String {
    let tag = platform.tag_name();
    let id = escape_attribute(video_id);
    match width_px {
        Some(width) => {
            format!("<{tag} videoid=\"{id}\" style=\"width:{width}px\"></{tag}>")
        }
        None => format!("<{tag} videoid=\"{id}\"></{tag}>"),
    }
}

/// Escape a value for use in a double-quoted HTML attribute
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::UnknownContextPolicy;

    #[test]
    fn test_text_without_shortcodes_is_identity() {
        let input = "Just a paragraph with {braces} and a https://vimeo.com/123 link.";
        let result = rewrite(input);
        assert_eq!(result.text, input);
        assert!(!result.uses_youtube);
        assert!(!result.uses_vimeo);
    }

    #[test]
    fn test_replaces_youtube_bare_id() {
        let result = rewrite("{youtube}dQw4w9WgXcQ{/youtube}");
        assert_eq!(
            result.text,
            "<lite-youtube videoid=\"dQw4w9WgXcQ\"></lite-youtube>"
        );
        assert!(result.uses_youtube);
        assert!(!result.uses_vimeo);
    }

    #[test]
    fn test_replaces_vimeo_url_in_surrounding_text() {
        let result = rewrite("See {vimeo}https://vimeo.com/76979871{/vimeo} now");
        assert_eq!(
            result.text,
            "See <lite-vimeo videoid=\"76979871\"></lite-vimeo> now"
        );
        assert!(result.uses_vimeo);
        assert!(!result.uses_youtube);
    }

    #[test]
    fn test_bare_id_round_trips_into_attribute() {
        let result = rewrite("{youtube}a1b2c3d4e5f{/youtube}");
        assert!(result.text.contains("videoid=\"a1b2c3d4e5f\""));
    }

    #[test]
    fn test_width_modifier_applied() {
        let result = rewrite("{youtube}abcdefghij|480{/youtube}");
        assert_eq!(
            result.text,
            "<lite-youtube videoid=\"abcdefghij\" style=\"width:480px\"></lite-youtube>"
        );
    }

    #[test]
    fn test_width_above_cap_still_replaces_without_style() {
        let result = rewrite("{youtube}abcdefghij|999{/youtube}");
        assert_eq!(
            result.text,
            "<lite-youtube videoid=\"abcdefghij\"></lite-youtube>"
        );
        assert!(result.uses_youtube);
    }

    #[test]
    fn test_embedded_markup_left_untouched() {
        let input = "{youtube}<b>dQw4w9WgXcQ</b>{/youtube}";
        let result = rewrite(input);
        assert_eq!(result.text, input);
        assert!(!result.uses_youtube);
    }

    #[test]
    fn test_unterminated_tag_left_untouched() {
        let input = "before {vimeo}12345 after";
        let result = rewrite(input);
        assert_eq!(result.text, input);
        assert!(!result.uses_vimeo);
    }

    #[test]
    fn test_unresolvable_reference_left_verbatim() {
        let input = "{vimeo}not-a-video{/vimeo}";
        let result = rewrite(input);
        assert_eq!(result.text, input);
        assert!(!result.uses_vimeo);
    }

    #[test]
    fn test_failed_span_does_not_block_later_shortcodes() {
        let result = rewrite("{vimeo}nope{/vimeo} and {vimeo}76979871{/vimeo}");
        assert_eq!(
            result.text,
            "{vimeo}nope{/vimeo} and <lite-vimeo videoid=\"76979871\"></lite-vimeo>"
        );
        assert!(result.uses_vimeo);
    }

    #[test]
    fn test_multiple_platforms_in_one_fragment() {
        let result = rewrite(
            "{youtube}dQw4w9WgXcQ{/youtube} then {vimeo}76979871{/vimeo}",
        );
        assert_eq!(
            result.text,
            "<lite-youtube videoid=\"dQw4w9WgXcQ\"></lite-youtube> then <lite-vimeo videoid=\"76979871\"></lite-vimeo>"
        );
        assert!(result.uses_youtube);
        assert!(result.uses_vimeo);
    }

    #[test]
    fn test_entity_encoded_url_resolves() {
        let result = rewrite(
            "{youtube}https://www.youtube.com/watch?v=dQw4w9WgXcQ&amp;t=42{/youtube}",
        );
        assert_eq!(
            result.text,
            "<lite-youtube videoid=\"dQw4w9WgXcQ\"></lite-youtube>"
        );
    }

    #[test]
    fn test_unrelated_braces_pass_through() {
        let result = rewrite("{loadposition sidebar} {youtube}dQw4w9WgXcQ{/youtube}");
        assert_eq!(
            result.text,
            "{loadposition sidebar} <lite-youtube videoid=\"dQw4w9WgXcQ\"></lite-youtube>"
        );
    }

    #[test]
    fn test_search_indexer_context_is_identity() {
        let rewriter = Rewriter::default();
        let input = "{youtube}dQw4w9WgXcQ{/youtube}";
        let result = rewriter.rewrite_in(ContentContext::SearchIndexer, input);
        assert_eq!(result.text, input);
        assert!(!result.changed());
    }

    #[test]
    fn test_unknown_context_skipped_by_default() {
        let rewriter = Rewriter::default();
        let input = "{youtube}dQw4w9WgXcQ{/youtube}";
        let result = rewriter.rewrite_in(ContentContext::Unknown, input);
        assert_eq!(result.text, input);
    }

    #[test]
    fn test_unknown_context_rewritten_under_permissive_policy() {
        let rewriter = Rewriter::new(RewriteOptions {
            unknown_context: UnknownContextPolicy::TreatAsArticle,
            ..RewriteOptions::default()
        });
        let result = rewriter.rewrite_in(ContentContext::Unknown, "{youtube}dQw4w9WgXcQ{/youtube}");
        assert!(result.uses_youtube);
    }

    #[test]
    fn test_module_body_rewritten() {
        let rewriter = Rewriter::default();
        let result = rewriter.rewrite_in(ContentContext::ModuleBody, "{vimeo}76979871{/vimeo}");
        assert!(result.uses_vimeo);
    }

    #[test]
    fn test_empty_input() {
        let result = rewrite("");
        assert_eq!(result.text, "");
        assert!(!result.changed());
    }

    #[test]
    fn test_result_serialization() {
        let result = rewrite("{vimeo}76979871{/vimeo}");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("usesVimeo"));

        let deserialized: RewriteResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }
}
