//! Asset bundles required by rewritten content
//!
//! Each platform's custom element ships as one script plus one stylesheet,
//! registered under a well-known bundle name. The host inspects a
//! [`RewriteResult`](crate::RewriteResult) and registers only the bundles
//! the page actually needs.

use crate::scanner::RewriteResult;
use embeds::Platform;
use serde::Serialize;

/// A script/style bundle the host must register for a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle {
    /// Platform the bundle implements
    pub platform: Platform,
    /// Registered script name
    pub script: &'static str,
    /// Registered stylesheet name
    pub style: &'static str,
}

impl AssetBundle {
    /// The bundle for a platform
    pub fn for_platform(platform: Platform) -> Self {
        let name = platform.tag_name();
        Self {
            platform,
            script: name,
            style: name,
        }
    }
}

/// List the asset bundles a rewrite result requires
///
/// Empty when nothing was replaced, so an untouched page loads no embed
/// assets at all.
pub fn required_bundles(result: &RewriteResult) -> Vec<AssetBundle> {
    let mut bundles = Vec::new();
    if result.uses_youtube {
        bundles.push(AssetBundle::for_platform(Platform::YouTube));
    }
    if result.uses_vimeo {
        bundles.push(AssetBundle::for_platform(Platform::Vimeo));
    }
    bundles
}
