//! Tests for rendering.
//!
//! This file contains tests for the lines a tracker writes to its draw target:
//! bar fill, iteration and time texts, the paused marker and terminate.

use advbar::progress::{format, DrawTarget, ManualClock};
use advbar::TrackerBuilder;
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_download_scenario() {
    let (mut tracker, buffer, _) = create_captured_tracker(200.0);
    tracker.step_to(100.0, true).unwrap();

    assert_eq!(
        buffer.contents(),
        "\r\x1b[0;32;40mDownload 50 % │█████     │\x1b[1m 100/200 MB (00:00:00)\x1b[0m"
    );
}

#[test]
fn test_every_update_starts_with_carriage_return() {
    let (mut tracker, buffer, _) = create_captured_tracker(3.0);
    for _ in 0..3 {
        buffer.clear();
        tracker.step(true).unwrap();
        let line = buffer.contents();
        assert!(line.starts_with('\r'));
        assert!(!line.contains('\n'));
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[test]
fn test_full_bar_has_exact_width() {
    let (mut tracker, buffer, _) = create_captured_tracker(200.0);
    tracker.step_to(200.0, true).unwrap();

    let visible = buffer.visible();
    assert!(visible.contains("100 % │██████████│"), "{}", visible);
    assert!(!visible.contains(format::HALF));
}

#[test]
fn test_empty_bar_uses_space_glyph() {
    let (mut tracker, buffer, _) = create_captured_tracker(200.0);
    tracker.update().unwrap();

    let visible = buffer.visible();
    assert!(visible.contains("Download 0 % │          │ 0/200 MB"), "{}", visible);
    assert!(!visible.contains(format::FILLED));
}

#[test]
fn test_half_block_between_cells() {
    let (mut tracker, buffer, _) = create_captured_tracker(20.0);
    // 3 / 20 * 10 = 1.5 cells
    tracker.step_to(3.0, true).unwrap();

    assert!(buffer.visible().contains("15 % │█▌        │"));
}

#[test]
fn test_bar_region_always_fills_width() {
    let (mut tracker, buffer, _) = create_captured_tracker(7.0);
    for _ in 0..7 {
        buffer.clear();
        tracker.step(true).unwrap();
        let visible = buffer.visible();
        let inner = visible.split('│').nth(1).unwrap();
        assert_eq!(inner.chars().count(), TEST_WIDTH, "{:?}", visible);
    }
}

#[test]
fn test_iteration_without_unit() {
    let (mut tracker, buffer, _) = create_captured_tracker_with(create_unitless_style(4), 12.0, false);
    tracker.step_by(3.0, true).unwrap();

    assert!(buffer.visible().contains("│ 3/12 (00:00:00)"));
}

#[test]
fn test_fractional_values_are_printed_as_is() {
    let (mut tracker, buffer, _) = create_captured_tracker(10.0);
    tracker.step_by(2.5, true).unwrap();

    assert!(buffer.visible().contains(" 2.5/10 MB "));
}

#[test]
fn test_accumulated_fractions_print_without_noise() {
    let (mut tracker, buffer, _) = create_captured_tracker(1.0);
    for _ in 0..3 {
        buffer.clear();
        tracker.step_by(0.1, true).unwrap();
    }

    let visible = buffer.visible();
    assert!(visible.contains("30 % │███       │ 0.3/1 MB (00:00:00)"), "{}", visible);
}

#[test]
fn test_elapsed_time_text() {
    let (mut tracker, buffer, clock) = create_captured_tracker(10.0);
    clock.advance(Duration::from_millis(65_900));
    tracker.step(true).unwrap();

    assert!(buffer.visible().ends_with(" 1/10 MB (00:01:05)"));

    buffer.clear();
    clock.set(Duration::from_secs(3 * 3600 + 25 * 60 + 9));
    tracker.update().unwrap();
    assert!(buffer.visible().ends_with(" (03:25:09)"));
}

#[test]
fn test_eta_unknown_before_progress() {
    let (mut tracker, buffer, clock) = create_captured_tracker_with(create_test_style(), 200.0, true);
    clock.advance(Duration::from_secs(10));
    tracker.update().unwrap();

    assert!(buffer.visible().ends_with(" (00:00:10/--:--:--)"));
}

#[test]
fn test_eta_scales_elapsed_by_progress() {
    let (mut tracker, buffer, clock) = create_captured_tracker_with(create_test_style(), 200.0, true);
    clock.advance(Duration::from_secs(10));
    tracker.step_to(50.0, true).unwrap();

    assert!(buffer.visible().ends_with(" 50/200 MB (00:00:10/00:00:40)"));
}

#[test]
fn test_pause_marker_shown_exactly_once() {
    let (mut tracker, buffer, _) = create_captured_tracker(10.0);
    tracker.step(false).unwrap();
    tracker.pause().unwrap();

    assert_eq!(
        buffer.contents(),
        "\x1b[1K\r\x1b[0;32;40mDownload 10 % │█         │\x1b[1m 1/10 MB [PAUSED]\x1b[0m"
    );

    buffer.clear();
    tracker.update().unwrap();
    let line = buffer.contents();
    assert!(!line.contains("[PAUSED]"));
    assert!(line.ends_with(" 1/10 MB (00:00:00)\x1b[0m"));
}

#[test]
fn test_line_matches_update_output() {
    let (mut tracker, buffer, clock) = create_captured_tracker(10.0);
    clock.advance(Duration::from_secs(2));
    tracker.step_by(4.0, false).unwrap();

    let preview = tracker.line().unwrap();
    assert!(buffer.contents().is_empty());

    tracker.update().unwrap();
    assert_eq!(buffer.contents(), preview);
}

#[test]
fn test_no_output_without_autoupdate() {
    let (mut tracker, buffer, _) = create_captured_tracker(10.0);
    tracker.step(false).unwrap();
    tracker.step_by(1.0, false).unwrap();
    tracker.step_to(5.0, false).unwrap();

    assert!(buffer.contents().is_empty());
}

#[test]
fn test_step_at_ceiling_still_redraws() {
    let (mut tracker, buffer, _) = create_captured_tracker(1.0);
    tracker.step(false).unwrap();
    tracker.step(true).unwrap();

    assert!(buffer.visible().contains("100 % │██████████│ 1/1 MB"));
}

#[test]
fn test_terminate_clears_line_and_detaches() {
    let (mut tracker, buffer, _) = create_captured_tracker(10.0);
    tracker.step(true).unwrap();
    buffer.clear();

    tracker.terminate().unwrap();
    assert_eq!(buffer.contents(), "\x1b[1K\r");

    assert_invalid_state(tracker.update());
    assert_eq!(buffer.contents(), "\x1b[1K\r");
}

#[test]
fn test_stderr_target_renders() {
    let mut tracker = TrackerBuilder::new()
        .style(create_test_style())
        .maximum(2.0)
        .clock(ManualClock::new())
        .target(DrawTarget::stderr())
        .build()
        .unwrap();

    tracker.step(true).unwrap();
    tracker.terminate().unwrap();
}
