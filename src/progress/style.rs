//! Progress bar styling and color palette.
//!
//! A [`Style`] is an immutable bundle of display parameters: the label shown in
//! front of the bar, the [`Color`] of the whole line, an optional unit suffix
//! for the iteration text and the number of character cells the bar occupies.
//! It is validated once, at construction, and can then be shared read-only by
//! any number of trackers.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use advbar::progress::Style;
//!
//! // No unit, 16 cells wide.
//! let style = Style::with_defaults("Files", "blue").unwrap();
//! assert_eq!(style.width(), Style::DEFAULT_WIDTH);
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use advbar::progress::{Color, Style};
//!
//! let style = Style::new("Download", "GREEN", "MB", 10).unwrap();
//! assert_eq!(style.color(), Color::Green);
//! assert_eq!(style.unit(), "MB");
//! ```
//!
//! ## Rejected Styles
//!
//! ```rust
//! use advbar::{progress::Style, Error};
//!
//! assert!(matches!(Style::new("  ", "red", "", 16), Err(Error::InvalidArgument(_))));
//! assert!(matches!(Style::new("Copy", "cyan", "", 16), Err(Error::InvalidArgument(_))));
//! assert!(matches!(Style::new("Copy", "red", "", 0), Err(Error::InvalidArgument(_))));
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The fixed terminal color palette.
///
/// Each color maps to an ANSI SGR prefix which is combined with a black
/// background (`40`) to form the escape sequence written before a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
}

impl Color {
    /// Every color of the palette, in display order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Magenta,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
        }
    }

    /// The SGR attribute/foreground pair, e.g. `0;32` for green.
    pub fn code(self) -> &'static str {
        match self {
            Color::White => "1;37",
            Color::Red => "0;31",
            Color::Yellow => "1;33",
            Color::Green => "0;32",
            Color::Blue => "0;34",
            Color::Magenta => "0;35",
        }
    }

    /// The full escape sequence: foreground color on a black background.
    ///
    /// `\x1b[0;32;40m` for green.
    pub fn escape(self) -> String {
        format!("\x1b[{};40m", self.code())
    }

    fn valid_names() -> String {
        Color::ALL
            .iter()
            .map(|color| color.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Case-insensitive lookup in the palette.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "invalid color `{}`, valid colors are {}",
                    s,
                    Color::valid_names()
                ))
            })
    }
}

/// Immutable display configuration for a progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    label: String,
    color: Color,
    /// Resolved once from `color`.
    escape: String,
    unit: String,
    width: usize,
}

impl Style {
    /// Number of cells used by [`Style::with_defaults`].
    pub const DEFAULT_WIDTH: usize = 16;

    /// Create a new [`Style`].
    ///
    /// # Arguments
    /// * `label` - Name of the tracked quantity, must not be blank
    /// * `color` - Palette name, matched case-insensitively
    /// * `unit` - Suffix for the iteration text, empty for none (e.g. `MB`)
    /// * `width` - Number of cells allotted to the bar, must be positive
    pub fn new(label: &str, color: &str, unit: &str, width: usize) -> Result<Self> {
        if label.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "progress bar label cannot be empty".into(),
            ));
        }
        let color = color.parse::<Color>()?;
        if width == 0 {
            return Err(Error::InvalidArgument(
                "progress bar width must be greater than zero".into(),
            ));
        }

        Ok(Self {
            label: label.to_string(),
            color,
            escape: color.escape(),
            unit: unit.to_string(),
            width,
        })
    }

    /// Create a [`Style`] without a unit and with the default width.
    pub fn with_defaults(label: &str, color: &str) -> Result<Self> {
        Self::new(label, color, "", Self::DEFAULT_WIDTH)
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the palette color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the escape sequence written in front of each line.
    pub fn escape(&self) -> &str {
        &self.escape
    }

    /// Get the unit suffix, empty when none was given.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Get the bar width in cells.
    pub fn width(&self) -> usize {
        self.width
    }
}
