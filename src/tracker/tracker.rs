//! The progress tracker state machine.

use super::{builder::TrackerBuilder, config::TrackerConfig};
use crate::error::{Error, Notice, Result};
use crate::progress::{
    format::{self, BOLD, CLEAR_LINE, PAUSED, RESET},
    Style,
};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tracks a value moving from zero toward a maximum and redraws it in place.
///
/// All operations run synchronously on the calling thread. A host that feeds
/// progress from several threads must serialize its calls.
///
/// ```rust,no_run
/// use advbar::{progress::Style, Tracker};
/// use std::sync::Arc;
///
/// # fn main() -> advbar::Result<()> {
/// let style = Arc::new(Style::new("Download", "green", "MB", 10)?);
/// let mut tracker = Tracker::new(style, 200.0)?;
/// tracker.step_to(100.0, true)?;
/// tracker.terminate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Tracker {
    config: TrackerConfig,
    /// `None` once reset.
    style: Option<Arc<Style>>,
    /// `None` once reset.
    maximum: Option<f64>,
    value: f64,
    /// Clock reading taken at construction.
    start: Duration,
    /// One-shot marker, consumed by the next successful update.
    paused: bool,
}

impl Tracker {
    /// Create a tracker with the default configuration.
    ///
    /// Lines are written to standard output. Use [`TrackerBuilder`] for
    /// anything else.
    pub fn new(style: Arc<Style>, maximum: f64) -> Result<Self> {
        TrackerBuilder::new().style(style).maximum(maximum).build()
    }

    pub(crate) fn from_config(
        config: TrackerConfig,
        style: Arc<Style>,
        maximum: f64,
    ) -> Result<Self> {
        check_maximum(maximum)?;
        let start = config.clock.now();
        debug!("Tracking {:?} up to {}", style.label(), maximum);

        Ok(Self {
            config,
            style: Some(style),
            maximum: Some(maximum),
            value: 0.0,
            start,
            paused: false,
        })
    }

    /// Increase the value by one.
    ///
    /// At the maximum the value is left unchanged and
    /// [`Notice::LimitReached`] is returned instead of an error. The line is
    /// redrawn either way when `autoupdate` is set.
    pub fn step(&mut self, autoupdate: bool) -> Result<Option<Notice>> {
        let maximum = self.attached_maximum()?;

        let notice = if self.value < maximum {
            self.value += 1.0;
            None
        } else {
            warn!("{} ({})", Notice::LimitReached, maximum);
            Some(Notice::LimitReached)
        };

        if autoupdate {
            self.update()?;
        }
        Ok(notice)
    }

    /// Increase the value by `delta`.
    ///
    /// `delta` must be positive and must not exceed the distance left to the
    /// maximum. Nothing changes when either check fails.
    pub fn step_by(&mut self, delta: f64, autoupdate: bool) -> Result<()> {
        let maximum = self.attached_maximum()?;

        if !(delta.is_finite() && delta > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "step must be positive, non-zero, got {}",
                delta
            )));
        }
        if delta > maximum - self.value {
            return Err(Error::OutOfRange(format!(
                "step {} cannot take {} past the maximum {}",
                delta, self.value, maximum
            )));
        }

        self.value += delta;
        if autoupdate {
            self.update()?;
        }
        Ok(())
    }

    /// Set the value to `target`.
    ///
    /// This is an absolute move and may go backwards. `target` must lie
    /// within `0..=maximum`.
    pub fn step_to(&mut self, target: f64, autoupdate: bool) -> Result<()> {
        let maximum = self.attached_maximum()?;

        if !(target.is_finite() && target >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "target cannot be below zero, got {}",
                target
            )));
        }
        if target > maximum {
            return Err(Error::OutOfRange(format!(
                "target {} cannot be greater than the maximum {}",
                target, maximum
            )));
        }

        self.value = target;
        if autoupdate {
            self.update()?;
        }
        Ok(())
    }

    /// Get the current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the maximum, `None` after [`reset`](Self::reset).
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    /// Get the style, `None` after [`reset`](Self::reset).
    pub fn style(&self) -> Option<&Arc<Style>> {
        self.style.as_ref()
    }

    /// Get `value / maximum`.
    pub fn ratio(&self) -> Result<f64> {
        let maximum = self.attached_maximum()?;
        if maximum <= 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.value / maximum)
    }

    /// Get the completion percentage, `0.0` to `100.0`.
    pub fn percent(&self) -> Result<f64> {
        Ok(self.ratio()? * 100.0)
    }

    /// Whether the next update will show the paused marker.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time elapsed since construction (or the last reconfigure).
    pub fn elapsed(&self) -> Duration {
        self.config.clock.now().saturating_sub(self.start)
    }

    /// Whether lines carry an estimate of the total run time.
    pub fn show_eta(&self) -> bool {
        self.config.show_eta
    }

    /// Mark the line as paused and redraw it.
    ///
    /// The marker only affects the next successful update, it does not stop
    /// value changes. If the marker is still pending (the previous paused
    /// redraw failed) [`Notice::AlreadyPaused`] is returned and nothing is
    /// drawn.
    pub fn pause(&mut self) -> Result<Option<Notice>> {
        if self.paused {
            warn!("{}", Notice::AlreadyPaused);
            return Ok(Some(Notice::AlreadyPaused));
        }
        self.attached_maximum()?;

        self.paused = true;
        self.update()?;
        Ok(None)
    }

    /// Tear the tracker down.
    ///
    /// The value goes back to zero and the style and maximum are detached.
    /// Every later step or update fails with [`Error::InvalidState`] until
    /// [`reconfigure`](Self::reconfigure) is called.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.maximum = None;
        self.style = None;
        self.paused = false;
        debug!("Progress bar reset");
    }

    /// Reset the tracker and erase the last drawn line.
    pub fn terminate(&mut self) -> Result<()> {
        self.reset();
        self.config
            .target
            .write_str(&format!("{}\r", CLEAR_LINE))?;
        debug!("Progress bar terminated");
        Ok(())
    }

    /// Attach a new style and maximum and restart the clock.
    ///
    /// The value is reset to zero. Validation is the same as at construction;
    /// on failure the tracker is left as it was.
    pub fn reconfigure(&mut self, style: Arc<Style>, maximum: f64) -> Result<()> {
        check_maximum(maximum)?;
        debug!("Reconfiguring {:?} up to {}", style.label(), maximum);

        self.style = Some(style);
        self.maximum = Some(maximum);
        self.value = 0.0;
        self.paused = false;
        self.start = self.config.clock.now();
        Ok(())
    }

    /// Build the line [`update`](Self::update) would write, without writing
    /// it or consuming the paused marker.
    pub fn line(&self) -> Result<String> {
        let (style, maximum) = self.attached()?;
        let bar = format::bar(style.label(), self.ratio()?, style.width());
        let iteration = format::iteration(self.value, maximum, style.unit());

        if self.paused {
            return Ok(format!(
                "{}\r{}{}{} {} {}{}",
                CLEAR_LINE,
                style.escape(),
                bar,
                BOLD,
                iteration,
                PAUSED,
                RESET
            ));
        }

        let elapsed = self.elapsed();
        let time = if self.config.show_eta {
            format::time_text_with_eta(elapsed, format::eta(elapsed, self.value, maximum))
        } else {
            format::time_text(elapsed)
        };
        Ok(format!(
            "\r{}{}{} {}{}{}",
            style.escape(),
            bar,
            BOLD,
            iteration,
            time,
            RESET
        ))
    }

    /// Redraw the line in place.
    ///
    /// A pending paused marker is shown once and then cleared. It is only
    /// cleared once the write succeeds, so a failed paused redraw is retried.
    pub fn update(&mut self) -> Result<()> {
        let line = self.line()?;
        self.config.target.write_str(&line)?;
        self.paused = false;
        Ok(())
    }

    fn attached_maximum(&self) -> Result<f64> {
        self.attached().map(|(_, maximum)| maximum)
    }

    fn attached(&self) -> Result<(&Style, f64)> {
        match (&self.style, self.maximum) {
            (Some(style), Some(maximum)) => Ok((style.as_ref(), maximum)),
            _ => Err(Error::InvalidState(
                "progress bar has been reset and must be reconfigured".into(),
            )),
        }
    }
}

fn check_maximum(maximum: f64) -> Result<()> {
    if maximum.is_finite() && maximum > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "maximum must be a positive number, got {}",
            maximum
        )))
    }
}
