//! Progress module containing the display building blocks.
//!
//! This module provides the styling, text formatting, time sources and output
//! targets a [`Tracker`](crate::Tracker) is made of.
//!
//! # Overview
//!
//! - `style` - The color palette and the immutable [`Style`]
//! - `format` - Pure formatting of the bar, iteration and time texts
//! - `clock` - Injectable time sources
//! - `target` - Where rendered lines are written
//!
//! # Examples
//!
//! ## Sharing a Style
//!
//! ```rust
//! use advbar::progress::{Style, DrawTarget};
//! use advbar::tracker::TrackerBuilder;
//! use std::sync::Arc;
//!
//! # fn main() -> advbar::Result<()> {
//! let style = Arc::new(Style::new("Upload", "magenta", "kB", 20)?);
//! let first = TrackerBuilder::new()
//!     .style(style.clone())
//!     .maximum(10.0)
//!     .target(DrawTarget::hidden())
//!     .build()?;
//! let second = TrackerBuilder::hidden().style(style).maximum(5.0).build()?;
//! assert_eq!(first.style().map(|s| s.label()), second.style().map(|s| s.label()));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod format;
pub(crate) mod style;
pub(crate) mod target;

pub use clock::{Clock, ManualClock, SystemClock};
pub use style::{Color, Style};
pub use target::DrawTarget;
