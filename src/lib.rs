//! advbar renders a live, redrawn-in-place progress bar to a terminal.
//!
//! A line looks like this (colors omitted):
//!
//! ```text
//! Download 50 % │█████     │ 100/200 MB (00:01:05)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use advbar::{progress::Style, Tracker, Error};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Error> {
//! let style = Arc::new(Style::new("Download", "green", "MB", 10)?);
//! let mut tracker = Tracker::new(style, 200.0)?;
//! for _ in 0..200 {
//!     // ... transfer one megabyte ...
//!     tracker.step(true)?;
//! }
//! tracker.terminate()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`error`] - Centralized error handling with the `Error` enum and advisory `Notice`s
//! - [`progress`] - Styling, formatting, time sources and draw targets
//! - [`tracker`] - The `Tracker` and `TrackerBuilder`
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to see
//! them.

pub mod error;
pub mod progress;
pub mod tracker;

pub use error::{Error, Notice, Result};
pub use progress::{Color, Style};
pub use tracker::{Tracker, TrackerBuilder};
