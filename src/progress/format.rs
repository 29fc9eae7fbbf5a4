//! Text building blocks of a rendered line.
//!
//! These functions are pure: they never read the clock and never write to the
//! terminal. [`Tracker`](crate::Tracker) combines them with its current state.
//!
//! ```rust
//! use advbar::progress::format;
//! use std::time::Duration;
//!
//! assert_eq!(format::bar("Copy", 0.5, 4), "Copy 50 % │██  │");
//! assert_eq!(format::iteration(3.0, 12.0, "kg"), "3/12 kg");
//! assert_eq!(format::time_text(Duration::from_secs(65)), " (00:01:05)");
//! ```

use std::time::Duration;

/// Glyph of a fully filled cell.
pub const FILLED: char = '█';
/// Glyph of a half filled cell.
pub const HALF: char = '▌';
/// Placeholder shown while no estimate can be made.
pub const UNKNOWN_CLOCK: &str = "--:--:--";
/// Marker appended to the one redraw following a pause.
pub const PAUSED: &str = "[PAUSED]";

/// Bold text.
pub const BOLD: &str = "\x1b[1m";
/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";
/// Erase from the start of the line up to the cursor.
pub const CLEAR_LINE: &str = "\x1b[1K";

/// Build `"<label> <percent> % │<cells>│"`.
///
/// The region between the borders is always `width` cells. Each cell has two
/// sub-steps: empty, half (`▌`) and full (`█`). The fractional part of the
/// scaled width is rounded to two decimals before picking the half glyph, and
/// no fractional glyph is drawn once the bar is full.
pub fn bar(label: &str, ratio: f64, width: usize) -> String {
    let scaled = ratio * width as f64;
    let whole = (scaled.floor().max(0.0) as usize).min(width);

    let cents = (scaled * 100.0).round().max(0.0) as u64;
    let fraction = if whole + 1 > width {
        None
    } else if cents % 100 >= 50 {
        Some(HALF)
    } else {
        Some(' ')
    };
    let padding = width - whole - usize::from(fraction.is_some());

    format!(
        "{} {} % │{}{}{}│",
        label,
        percent(ratio),
        FILLED.to_string().repeat(whole),
        fraction.map(String::from).unwrap_or_default(),
        " ".repeat(padding)
    )
}

/// Round `ratio * 100` half away from zero, without decimals.
pub fn percent(ratio: f64) -> String {
    format!("{}", (ratio * 100.0).round())
}

/// Build `"<current>/<maximum>"`, followed by `" <unit>"` when a unit is set.
pub fn iteration(current: f64, maximum: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{}/{}", number(current), number(maximum))
    } else {
        format!("{}/{} {}", number(current), number(maximum), unit)
    }
}

/// Print a value rounded to 14 significant digits, without trailing zeros.
///
/// Accumulated binary noise such as `0.30000000000000004` prints as `0.3`.
pub fn number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.13e}", value)
        .parse::<f64>()
        .unwrap_or(value);
    // Avoid printing `-0`.
    format!("{}", rounded + 0.0)
}

/// Format whole seconds as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped, so a day renders as `24:00:00`.
pub fn clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Build `" (HH:MM:SS)"` from the elapsed time.
pub fn time_text(elapsed: Duration) -> String {
    format!(" ({})", clock(elapsed))
}

/// Build `" (elapsed/eta)"`, using [`UNKNOWN_CLOCK`] when `eta` is `None`.
pub fn time_text_with_eta(elapsed: Duration, eta: Option<Duration>) -> String {
    let eta = eta.map_or_else(|| UNKNOWN_CLOCK.to_string(), clock);
    format!(" ({}/{})", clock(elapsed), eta)
}

/// Estimate the total run time as `(elapsed / current) * maximum`.
///
/// Only whole elapsed seconds are used. Returns `None` while `current` is not
/// positive, since no rate can be derived yet.
pub fn eta(elapsed: Duration, current: f64, maximum: f64) -> Option<Duration> {
    if current.is_nan() || current <= 0.0 {
        return None;
    }
    let secs = elapsed.as_secs() as f64 * maximum / current;
    Duration::try_from_secs_f64(secs).ok()
}
