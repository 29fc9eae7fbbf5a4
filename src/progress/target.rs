//! Destinations for rendered lines.
//!
//! By default lines go to standard output through a [`console::Term`]. A
//! target can also be hidden, or wrap any [`io::Write`] to capture output.
//!
//! ```rust
//! use advbar::progress::DrawTarget;
//!
//! let mut target = DrawTarget::hidden();
//! assert!(target.is_hidden());
//! target.write_str("\rnothing to see").unwrap();
//! ```

use console::Term;
use std::fmt;
use std::io::{self, Write};

/// Where a tracker writes its lines.
pub enum DrawTarget {
    /// A terminal stream, written unbuffered.
    Term(Term),
    /// Any writer, flushed after each line.
    Writer(Box<dyn Write + Send>),
    /// Discard everything.
    Hidden,
}

impl DrawTarget {
    /// Draw to standard output.
    pub fn stdout() -> Self {
        DrawTarget::Term(Term::stdout())
    }

    /// Draw to standard error.
    pub fn stderr() -> Self {
        DrawTarget::Term(Term::stderr())
    }

    /// Draw into the given writer.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        DrawTarget::Writer(Box::new(writer))
    }

    /// Draw nowhere.
    pub fn hidden() -> Self {
        DrawTarget::Hidden
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, DrawTarget::Hidden)
    }

    /// Write `text` as-is, without a trailing newline, and flush.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        match self {
            DrawTarget::Term(term) => {
                term.write_all(text.as_bytes())?;
                term.flush()
            }
            DrawTarget::Writer(writer) => {
                writer.write_all(text.as_bytes())?;
                writer.flush()
            }
            DrawTarget::Hidden => Ok(()),
        }
    }
}

impl Default for DrawTarget {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for DrawTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawTarget::Term(term) => f.debug_tuple("Term").field(term).finish(),
            DrawTarget::Writer(_) => f.write_str("Writer"),
            DrawTarget::Hidden => f.write_str("Hidden"),
        }
    }
}
