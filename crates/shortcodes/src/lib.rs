//! Video shortcode rewriting for litevid
//!
//! This crate turns authoring-convenience shortcodes
//! (`{youtube}...{/youtube}`, `{vimeo}...{/vimeo}`) inside arbitrary text
//! into deferred-loading custom elements (`<lite-youtube>`,
//! `<lite-vimeo>`), and reports which platforms were used so the host can
//! load only the asset bundles it needs.
//!
//! Rewriting never fails: malformed shortcodes, unterminated tags, and
//! unresolvable video references are all left verbatim in the output.
//!
//! # Example
//!
//! ```rust
//! use shortcodes::rewrite;
//!
//! let result = rewrite("See {vimeo}https://vimeo.com/76979871{/vimeo} now");
//! assert_eq!(
//!     result.text,
//!     "See <lite-vimeo videoid=\"76979871\"></lite-vimeo> now"
//! );
//! assert!(result.uses_vimeo);
//! assert!(!result.uses_youtube);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod context;
pub mod scanner;
pub mod tag;

pub use assets::{required_bundles, AssetBundle};
pub use context::{ContentContext, RewriteOptions, UnknownContextPolicy};
pub use scanner::{rewrite, RewriteResult, Rewriter};
pub use tag::TagBody;
