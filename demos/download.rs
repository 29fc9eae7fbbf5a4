//! Example showing a simulated download followed by a second, reconfigured pass

use advbar::progress::Style;
use advbar::{Notice, TrackerBuilder};
use color_eyre::Result;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let style = Arc::new(Style::new("Download", "green", "MB", 20)?);
    let mut tracker = TrackerBuilder::new()
        .style(style)
        .maximum(64.0)
        .show_eta(true)
        .build()?;

    // Pretend to fetch 64 MB in uneven chunks.
    for chunk in [4.0, 8.0, 2.5, 13.5, 16.0, 20.0] {
        sleep(Duration::from_millis(400));
        tracker.step_by(chunk, true)?;
        if chunk == 16.0 {
            tracker.pause()?;
            sleep(Duration::from_millis(800));
        }
    }

    // The ceiling is only an advisory for single steps.
    if let Some(Notice::LimitReached) = tracker.step(true)? {
        sleep(Duration::from_millis(400));
    }
    tracker.terminate()?;

    let style = Arc::new(Style::new("Unpack", "yellow", "", 16)?);
    tracker.reconfigure(style, 10.0)?;
    for _ in 0..10 {
        sleep(Duration::from_millis(150));
        tracker.step(true)?;
    }
    println!();

    Ok(())
}
