//! Error handling for the advbar library.
//!
//! Two severities exist. Contract violations (bad style fields, a bad maximum,
//! out-of-range steps, using a tracker after reset) are returned as [`Error`]
//! and leave the tracker untouched. Advisory conditions that the caller may
//! safely ignore are reported as a [`Notice`] instead.

use std::fmt;
use std::io;
use thiserror::Error;

/// Errors that can happen when using advbar.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument failed validation.
    ///
    /// Returned for blank labels, unknown colors, a zero width, a non-positive
    /// maximum and non-positive or non-finite steps.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A step or target would move the value past the maximum.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The ratio was requested against a zero maximum.
    #[error("Numeric error, cannot divide by zero")]
    DivisionByZero,

    /// The tracker is not in a state that allows the operation.
    ///
    /// This is what every mutation and render returns after
    /// [`Tracker::reset`](crate::Tracker::reset).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// I/O Error.
    ///
    /// Writing a line to the draw target failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with an advbar error.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal conditions signalled by the tracker.
///
/// The tracker state is left unchanged and execution continues. The host
/// decides whether to log, ignore or escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// `step()` was called with the value already at the maximum.
    LimitReached,
    /// `pause()` was called while the pause marker was still pending.
    AlreadyPaused,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LimitReached => write!(f, "value cannot be increased over the maximum"),
            Notice::AlreadyPaused => write!(f, "progress bar is already paused"),
        }
    }
}
