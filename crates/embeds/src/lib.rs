//! Video platform model for litevid
//!
//! This crate knows what a YouTube or Vimeo video *is*: how to recognize a
//! video reference in its many URL shapes, which origins the real player
//! will contact, where the oEmbed metadata lives, and how to describe the
//! player iframe that eventually replaces a placeholder.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iframe;
pub mod platform;
pub mod vimeo;
pub mod youtube;

pub use iframe::IframeSpec;
pub use platform::{resolve_video_id, EmbedError, Platform, Result};
