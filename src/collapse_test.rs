#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Point;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

/// Tick at `start, start + step, ...` until the animation stops; returns the
/// final status and the number of ticks taken.
fn run_until_stopped(
    animation: &mut CollapseAnimation,
    segments: &mut Vec<Segment>,
    start: f64,
    step: f64,
) -> (CollapseStatus, usize) {
    let mut ticks = 0;
    let mut ts = start;
    loop {
        ticks += 1;
        let tick = animation.tick(ts, segments);
        if tick.status != CollapseStatus::Running {
            return (tick.status, ticks);
        }
        ts += step;
        assert!(ticks < 10_000, "animation never stopped");
    }
}

// --- is_near_zero ---

#[test]
fn near_zero_threshold_is_half_a_tenth() {
    assert!(is_near_zero(&seg(0.0, 0.0, 0.0, 0.0)));
    assert!(is_near_zero(&seg(0.0, 0.0, 0.04, 0.0)));
    assert!(!is_near_zero(&seg(0.0, 0.0, 0.05, 0.0)));
    assert!(!is_near_zero(&seg(0.0, 0.0, 0.1, 0.0)));
}

// --- tick ---

#[test]
fn first_tick_records_start_without_moving() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    let tick = animation.tick(500.0, &mut segments);
    assert_eq!(tick, Tick { redraw: true, status: CollapseStatus::Running });
    assert_eq!(segments[0], seg(0.0, 0.0, 100.0, 0.0));
}

#[test]
fn duration_counts_from_first_tick() {
    let mut segments = vec![seg(0.0, 0.0, 100_000.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    animation.tick(500.0, &mut segments);
    assert_eq!(animation.tick(1499.0, &mut segments).status, CollapseStatus::Running);
    // Overshoots past the midpoint, so the segment is long again at expiry.
    assert_eq!(animation.tick(1600.0, &mut segments).status, CollapseStatus::Expired);
}

#[test]
fn tick_shrinks_by_rate_times_step() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    animation.tick(0.0, &mut segments);
    animation.tick(100.0, &mut segments);
    // 0.1 px/ms * 100 ms = 10 px total, 5 px from each end.
    assert!((segments[0].begin.x - 5.0).abs() < 1e-9);
    assert!((segments[0].end.x - 95.0).abs() < 1e-9);
}

#[test]
fn each_segment_uses_its_own_rate() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0), seg(0.0, 10.0, 0.0, 30.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    animation.tick(0.0, &mut segments);
    animation.tick(500.0, &mut segments);
    assert!((distance(&segments[0]) - 50.0).abs() < 1e-9);
    assert!((distance(&segments[1]) - 10.0).abs() < 1e-9);
    assert!((segments[1].midpoint().y - 20.0).abs() < 1e-9);
}

#[test]
fn repeated_timestamp_does_no_work() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    animation.tick(0.0, &mut segments);
    animation.tick(100.0, &mut segments);
    let before = segments.clone();
    let tick = animation.tick(100.0, &mut segments);
    assert_eq!(tick, Tick { redraw: false, status: CollapseStatus::Running });
    assert_eq!(segments, before);
}

#[test]
fn steady_frames_clear_exactly_at_duration() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    let (status, ticks) = run_until_stopped(&mut animation, &mut segments, 0.0, 10.0);
    assert_eq!(status, CollapseStatus::Cleared);
    assert_eq!(ticks, 101);
    assert!(segments.is_empty());
}

#[test]
fn first_near_zero_segment_clears_everything() {
    // At 96% of the duration the 1 px segment is 0.04 px long while the
    // 1000 px one is still 40 px; both are cleared.
    let mut segments = vec![seg(0.0, 0.0, 1000.0, 0.0), seg(0.0, 5.0, 1.0, 5.0)];
    let mut animation = CollapseAnimation::new(&segments, 100.0);
    animation.tick(0.0, &mut segments);
    let tick = animation.tick(96.0, &mut segments);
    assert_eq!(tick, Tick { redraw: true, status: CollapseStatus::Cleared });
    assert!(segments.is_empty());
}

#[test]
fn degenerate_segment_clears_on_first_tick() {
    let mut segments = vec![seg(0.0, 0.0, 50.0, 0.0), seg(7.0, 7.0, 7.0, 7.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    let tick = animation.tick(0.0, &mut segments);
    assert_eq!(tick.status, CollapseStatus::Cleared);
    assert!(segments.is_empty());
}

#[test]
fn overshooting_frame_expires_without_clearing() {
    // One late frame moves each end 75 px: the endpoints cross and the
    // segment is 50 px long again when the duration runs out.
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    animation.tick(0.0, &mut segments);
    let tick = animation.tick(1500.0, &mut segments);
    assert_eq!(tick, Tick { redraw: true, status: CollapseStatus::Expired });
    assert_eq!(segments.len(), 1);
    assert!((distance(&segments[0]) - 50.0).abs() < 1e-9);
}

#[test]
fn uneven_frames_that_miss_near_zero_expire() {
    let mut segments = vec![seg(0.0, 0.0, 100.0, 0.0)];
    let mut animation = CollapseAnimation::new(&segments, 1000.0);
    let (status, _) = run_until_stopped(&mut animation, &mut segments, 0.0, 16.0);
    assert_eq!(status, CollapseStatus::Expired);
    assert_eq!(segments.len(), 1);
}
