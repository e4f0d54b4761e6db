//! Content context and rewrite configuration
//!
//! The host content pipeline labels each fragment it hands over: article
//! bodies and module bodies are rewritten, search-indexer passes never
//! are, and fragments the host could not classify follow a configurable
//! policy.

use serde::{Deserialize, Serialize};

/// Where a text fragment came from in the host pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentContext {
    /// Body of an article or article listing
    ArticleBody,
    /// Body of a standalone content module
    ModuleBody,
    /// Text being processed for a search index, never rewritten
    SearchIndexer,
    /// The host could not classify the fragment
    Unknown,
}

/// What to do with fragments of unknown context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownContextPolicy {
    /// Leave unknown fragments untouched
    #[default]
    Skip,
    /// Rewrite unknown fragments as if they were article bodies
    TreatAsArticle,
}

/// Rewriter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteOptions {
    /// Policy for [`ContentContext::Unknown`] fragments
    pub unknown_context: UnknownContextPolicy,
    /// Largest width modifier accepted, in CSS pixels
    ///
    /// Width modifiers above the cap are silently dropped; the shortcode
    /// is still replaced, just without a width style.
    pub max_width_px: u32,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            unknown_context: UnknownContextPolicy::default(),
            max_width_px: 720,
        }
    }
}

impl ContentContext {
    /// Whether fragments in this context get rewritten
    pub fn is_rewritable(&self, options: &RewriteOptions) -> bool {
        match self {
            ContentContext::ArticleBody | ContentContext::ModuleBody => true,
            ContentContext::SearchIndexer => false,
            ContentContext::Unknown => {
                options.unknown_context == UnknownContextPolicy::TreatAsArticle
            }
        }
    }
}
