//! Host environment capability contract
//!
//! An [`EmbedHost`] is whatever owns the element's subtree in a rendering
//! tree: a browser DOM node, a webview bridge, or a test double. The
//! element calls these capabilities and never reaches around them.

use embeds::IframeSpec;

/// Capabilities an embed element needs from its host environment
pub trait EmbedHost {
    /// Set the placeholder's background image
    fn set_background_image(&mut self, url: &str);

    /// Text of a play control already present in the element's content
    ///
    /// Authors may ship their own play button inside the element; its text
    /// takes priority over the `playlabel` attribute as the accessible
    /// label.
    fn existing_play_button_label(&self) -> Option<String>;

    /// Add a synthesized play button with the given accessible label
    fn add_play_button(&mut self, label: &str);

    /// Attach the real player iframe into the element
    fn attach_iframe(&mut self, spec: &IframeSpec);

    /// Move keyboard focus into the attached iframe
    fn focus_iframe(&mut self);

    /// Open an early connection to an origin the player will need
    fn preconnect(&mut self, origin: &str);

    /// Rendered box size of the element in CSS pixels, when known
    fn box_size(&self) -> Option<(u32, u32)>;

    /// Ratio of physical to CSS pixels
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }
}
