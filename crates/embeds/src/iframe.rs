//! Player iframe description
//!
//! When a deferred embed activates, the placeholder is replaced by a real
//! player iframe. [`IframeSpec`] describes that iframe declaratively so
//! host environments can materialize it however their rendering tree
//! requires.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Feature policy granted to both platforms' players
const PLAYER_ALLOW: &str = "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture";

/// Declarative description of a player iframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeSpec {
    /// Player URL including all query parameters
    pub src: String,
    /// Nominal width in CSS pixels, overridable by styling
    pub width: u32,
    /// Nominal height in CSS pixels, overridable by styling
    pub height: u32,
    /// Accessible title, copied from the play label
    pub title: String,
    /// Feature policy attribute value
    pub allow: String,
    /// Whether fullscreen is permitted
    pub allow_fullscreen: bool,
}

impl IframeSpec {
    /// Build the player iframe for a video
    ///
    /// Caller-supplied parameters (the element's `params` attribute, in
    /// `k=v&k2=v2` form) are merged in first, then autoplay is forced on;
    /// the user already clicked play, so the player should start
    /// immediately. Vimeo additionally gets `playsinline` so activation
    /// does not jump to fullscreen on mobile.
    pub fn build(
        platform: Platform,
        video_id: &str,
        play_label: &str,
        extra_params: Option<&str>,
    ) -> Self {
        let mut params: Vec<(String, String)> = extra_params
            .map(parse_query_params)
            .unwrap_or_default();
        params.push(("autoplay".to_string(), "1".to_string()));
        if platform == Platform::Vimeo {
            params.push(("playsinline".to_string(), "1".to_string()));
        }

        let query = encode_query(&params);
        // The ID charset is already restricted by extraction, but it is a
        // URL component, so encode it anyway.
        let id = urlencoding::encode(video_id);
        let src = match platform {
            Platform::YouTube => {
                format!("https://www.youtube-nocookie.com/embed/{}?{}", id, query)
            }
            Platform::Vimeo => format!("https://player.vimeo.com/video/{}?{}", id, query),
        };

        let (width, height) = platform.nominal_size();

        Self {
            src,
            width,
            height,
            title: play_label.to_string(),
            allow: PLAYER_ALLOW.to_string(),
            allow_fullscreen: true,
        }
    }
}

/// Parse a `k=v&k2=v2` parameter string
///
/// Keys without a value are kept with an empty value, matching URL query
/// semantics.
fn parse_query_params(input: &str) -> Vec<(String, String)> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Encode parameter pairs as a query string
fn encode_query(params: &[(String, String)]) -> String {
    let mut query = String::new();
    for (key, value) in params {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&urlencoding::encode(key));
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
    query
}
