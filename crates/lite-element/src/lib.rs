//! Deferred video embed element for litevid
//!
//! This crate implements the interaction machine behind the
//! `<lite-youtube>` and `<lite-vimeo>` custom elements: a placeholder that
//! fetches a thumbnail on attach, warms player connections on hover, and
//! only builds the real (and expensive) player iframe when the user
//! clicks.
//!
//! The element does not know how to touch a rendering tree. Host
//! environments implement [`EmbedHost`] and drive the element with their
//! own attach/hover/click notifications; environments without a rendering
//! tree simply never instantiate one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod host;
pub mod oembed;
pub mod preconnect;
pub mod test_utils;

pub use element::{DeferredEmbed, ElementAttrs, ElementError, ElementState, DEFAULT_PLAY_LABEL};
pub use host::EmbedHost;
pub use oembed::{HttpThumbnailFetcher, OEmbedError, OEmbedResponse, ThumbnailFetcher};
pub use preconnect::PreconnectRegistry;
