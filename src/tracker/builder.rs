//! Builder pattern implementation for creating Tracker instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use advbar::{progress::Style, tracker::TrackerBuilder};
//!
//! # fn main() -> advbar::Result<()> {
//! let style = Style::new("Download", "green", "MB", 10)?;
//! let tracker = TrackerBuilder::new()
//!     .style(style)
//!     .maximum(200.0)
//!     .show_eta(true)
//!     .build()?;
//! assert_eq!(tracker.value(), 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Deterministic Time and Captured Output
//!
//! ```rust
//! use advbar::{progress::{ManualClock, Style}, tracker::TrackerBuilder};
//! use std::time::Duration;
//!
//! # fn main() -> advbar::Result<()> {
//! let clock = ManualClock::new();
//! let mut tracker = TrackerBuilder::hidden()
//!     .style(Style::with_defaults("Rows", "white")?)
//!     .maximum(10.0)
//!     .clock(clock.clone())
//!     .build()?;
//! clock.advance(Duration::from_secs(3));
//! tracker.step_to(5.0, false)?;
//! assert_eq!(tracker.elapsed(), Duration::from_secs(3));
//! # Ok(())
//! # }
//! ```

use super::{config::TrackerConfig, tracker::Tracker};
use crate::error::{Error, Result};
use crate::progress::{Clock, DrawTarget, Style};

use std::sync::Arc;

/// A builder used to create a [`Tracker`].
///
/// A style and a positive maximum are required, everything else has a
/// default (see [`TrackerConfig`]).
#[derive(Debug, Default)]
pub struct TrackerBuilder {
    config: TrackerConfig,
    style: Option<Arc<Style>>,
    maximum: Option<f64>,
}

impl TrackerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        TrackerBuilder::default()
    }

    /// Convenience function to discard all rendered output.
    pub fn hidden() -> Self {
        TrackerBuilder::default().target(DrawTarget::hidden())
    }

    /// Set the style. Accepts an owned [`Style`] or a shared `Arc<Style>`.
    pub fn style(mut self, style: impl Into<Arc<Style>>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the target maximum.
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Render an estimate of the total run time next to the elapsed time.
    pub fn show_eta(mut self, show_eta: bool) -> Self {
        self.config.show_eta = show_eta;
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.config.clock = Arc::new(clock);
        self
    }

    /// Set where lines are written.
    pub fn target(mut self, target: DrawTarget) -> Self {
        self.config.target = target;
        self
    }

    /// Create the [`Tracker`].
    ///
    /// Fails with [`Error::InvalidArgument`] when no style was given or the
    /// maximum is missing, not finite or not strictly positive.
    pub fn build(self) -> Result<Tracker> {
        let style = self.style.ok_or_else(|| {
            Error::InvalidArgument("a style was not passed to the progress bar".into())
        })?;
        let maximum = self.maximum.ok_or_else(|| {
            Error::InvalidArgument("a maximum was not passed to the progress bar".into())
        })?;
        Tracker::from_config(self.config, style, maximum)
    }
}
