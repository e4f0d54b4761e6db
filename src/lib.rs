//! litevid — lightweight deferred video embeds
//!
//! Two independently usable pieces, re-exported here for convenience:
//!
//! - [`shortcodes`] rewrites `{youtube}...{/youtube}` and
//!   `{vimeo}...{/vimeo}` markers in text into `<lite-youtube>` /
//!   `<lite-vimeo>` custom elements and reports which asset bundles the
//!   page needs.
//! - [`lite_element`] implements those elements: a cheap placeholder that
//!   fetches a thumbnail, warms player connections on hover, and only
//!   builds the third-party player iframe when the user clicks.
//!
//! The rewriter runs server-side at render time; the element machine runs
//! wherever the rendered markup ends up being displayed.
//!
//! # Example
//!
//! ```rust
//! use litevid::{required_bundles, rewrite};
//!
//! let result = rewrite("Intro {youtube}dQw4w9WgXcQ{/youtube} outro");
//! assert!(result.uses_youtube);
//! assert_eq!(required_bundles(&result).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embeds;
pub use embeds::{resolve_video_id, IframeSpec, Platform};
pub use lite_element;
pub use lite_element::{
    DeferredEmbed, ElementAttrs, ElementState, EmbedHost, HttpThumbnailFetcher,
    PreconnectRegistry, ThumbnailFetcher,
};
pub use shortcodes;
pub use shortcodes::{
    required_bundles, rewrite, ContentContext, RewriteOptions, RewriteResult, Rewriter,
    UnknownContextPolicy,
};
