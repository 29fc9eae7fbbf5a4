//! Configuration structure and defaults for the tracker.
//!
//! [`TrackerConfig`] holds everything about a [`Tracker`](super::Tracker)
//! that is not progress state: which time-text variant to render, where time
//! comes from and where lines are written.
//!
//! # Examples
//!
//! ```rust
//! use advbar::tracker::TrackerConfig;
//!
//! let config = TrackerConfig::default();
//! assert!(!config.show_eta);
//! ```

use crate::progress::{Clock, DrawTarget, SystemClock};

use std::sync::Arc;

/// Configuration structure for the tracker
pub struct TrackerConfig {
    /// Render `(elapsed/eta)` instead of `(elapsed)`.
    pub show_eta: bool,
    /// Time source for elapsed time and estimates.
    pub clock: Arc<dyn Clock>,
    /// Destination of rendered lines.
    pub target: DrawTarget,
}

impl std::fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("show_eta", &self.show_eta)
            .field("clock", &self.clock.now())
            .field("target", &self.target)
            .finish()
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            show_eta: false,
            clock: Arc::new(SystemClock::new()),
            target: DrawTarget::stdout(),
        }
    }
}
