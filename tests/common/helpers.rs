#![allow(dead_code)]

use advbar::progress::{DrawTarget, ManualClock, Style};
use advbar::{Error, Result, Tracker, TrackerBuilder};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// Common test constants
pub const TEST_LABEL: &str = "Download";
pub const TEST_COLOR: &str = "green";
pub const TEST_UNIT: &str = "MB";
pub const TEST_WIDTH: usize = 10;
pub const GREEN_ESCAPE: &str = "\x1b[0;32;40m";

/// An in-memory writer whose contents stay readable after being handed to a tracker
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, escapes included
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().expect("capture buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Everything written so far, without ANSI escapes
    pub fn visible(&self) -> String {
        visible(&self.contents())
    }

    pub fn clear(&self) {
        self.bytes.lock().expect("capture buffer poisoned").clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .expect("capture buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that refuses every write
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Strips ANSI escape sequences from a string
pub fn visible(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

// === Style Helpers ===

/// Creates the `Download`/green/`MB`/10 style shared by most tests
pub fn create_test_style() -> Arc<Style> {
    Arc::new(
        Style::new(TEST_LABEL, TEST_COLOR, TEST_UNIT, TEST_WIDTH)
            .expect("Failed to create test style"),
    )
}

/// Creates a style without a unit
pub fn create_unitless_style(width: usize) -> Arc<Style> {
    Arc::new(Style::new("Items", "white", "", width).expect("Failed to create test style"))
}

// === Tracker Helpers ===

/// Creates a tracker that draws nowhere
pub fn create_hidden_tracker(maximum: f64) -> Tracker {
    TrackerBuilder::hidden()
        .style(create_test_style())
        .maximum(maximum)
        .build()
        .expect("Failed to create hidden tracker")
}

/// Creates a tracker writing into a capture buffer and driven by a manual clock
pub fn create_captured_tracker(maximum: f64) -> (Tracker, CaptureBuffer, ManualClock) {
    create_captured_tracker_with(create_test_style(), maximum, false)
}

/// Same as [`create_captured_tracker`] with a custom style and ETA setting
pub fn create_captured_tracker_with(
    style: Arc<Style>,
    maximum: f64,
    show_eta: bool,
) -> (Tracker, CaptureBuffer, ManualClock) {
    let buffer = CaptureBuffer::new();
    let clock = ManualClock::new();
    let tracker = TrackerBuilder::new()
        .style(style)
        .maximum(maximum)
        .show_eta(show_eta)
        .clock(clock.clone())
        .target(DrawTarget::writer(buffer.clone()))
        .build()
        .expect("Failed to create captured tracker");
    (tracker, buffer, clock)
}

// === Assertion Helpers ===

pub fn assert_invalid_argument<T: std::fmt::Debug>(result: Result<T>) {
    assert!(
        matches!(result, Err(Error::InvalidArgument(_))),
        "expected InvalidArgument, got {:?}",
        result
    );
}

pub fn assert_out_of_range<T: std::fmt::Debug>(result: Result<T>) {
    assert!(
        matches!(result, Err(Error::OutOfRange(_))),
        "expected OutOfRange, got {:?}",
        result
    );
}

pub fn assert_invalid_state<T: std::fmt::Debug>(result: Result<T>) {
    assert!(
        matches!(result, Err(Error::InvalidState(_))),
        "expected InvalidState, got {:?}",
        result
    );
}
