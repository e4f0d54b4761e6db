//! Process-wide connection-warming registry
//!
//! Every embed instance on a page shares one registry so the preconnect
//! hints for a platform are issued at most once per page session. The
//! flags live only for the process; a page reload starts cold.

use embeds::Platform;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Set-once flags tracking which platforms have been warmed
#[derive(Debug, Default)]
pub struct PreconnectRegistry {
    youtube: AtomicBool,
    vimeo: AtomicBool,
}

impl PreconnectRegistry {
    /// Create a registry with both platforms cold
    pub const fn new() -> Self {
        Self {
            youtube: AtomicBool::new(false),
            vimeo: AtomicBool::new(false),
        }
    }

    /// The process-wide registry shared by elements on the same page
    pub fn global() -> Arc<PreconnectRegistry> {
        static GLOBAL: OnceLock<Arc<PreconnectRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(PreconnectRegistry::new())).clone()
    }

    /// Mark a platform warmed; true exactly once per platform
    ///
    /// The read-then-set is a single atomic swap, so concurrent callers
    /// cannot both observe "cold".
    pub fn warm(&self, platform: Platform) -> bool {
        !self.flag(platform).swap(true, Ordering::SeqCst)
    }

    /// Whether a platform has already been warmed
    pub fn is_warmed(&self, platform: Platform) -> bool {
        self.flag(platform).load(Ordering::SeqCst)
    }

    /// Return both platforms to cold, as a fresh page session would
    pub fn reset(&self) {
        self.youtube.store(false, Ordering::SeqCst);
        self.vimeo.store(false, Ordering::SeqCst);
    }

    fn flag(&self, platform: Platform) -> &AtomicBool {
        match platform {
            Platform::YouTube => &self.youtube,
            Platform::Vimeo => &self.vimeo,
        }
    }
}
