//! Tracker module containing the progress state machine, builder pattern, and configuration.
//!
//! # Overview
//!
//! The tracker module is organized into three main components:
//!
//! - `tracker` - Core Tracker struct with value mutation, lifecycle and rendering
//! - `builder` - TrackerBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use advbar::{progress::Style, tracker::Tracker};
//! use std::sync::Arc;
//!
//! # fn main() -> advbar::Result<()> {
//! let style = Arc::new(Style::with_defaults("Files", "blue")?);
//! let mut tracker = Tracker::new(style, 3.0)?;
//! for _ in 0..3 {
//!     // ... work ...
//!     tracker.step(true)?;
//! }
//! tracker.terminate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Output
//!
//! ```rust
//! use advbar::{progress::Style, tracker::TrackerBuilder};
//!
//! # fn main() -> advbar::Result<()> {
//! let mut tracker = TrackerBuilder::hidden()
//!     .style(Style::with_defaults("Files", "blue")?)
//!     .maximum(3.0)
//!     .build()?;
//! tracker.step_by(2.0, true)?;
//! assert_eq!(tracker.value(), 2.0);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
#[allow(clippy::module_inception)]
pub mod tracker;

pub use builder::TrackerBuilder;
pub use config::TrackerConfig;
pub use tracker::Tracker;
