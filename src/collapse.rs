//! Collapse animation: every segment shrinks into its midpoint over a fixed
//! wall-clock duration, then the whole collection is cleared.
//!
//! The animation is an explicit state machine. The controller owns a
//! [`CollapseAnimation`] and calls [`CollapseAnimation::tick`] once per
//! display frame with the frame timestamp; the returned [`Tick`] says whether
//! to redraw and whether another frame is needed.

#[cfg(test)]
#[path = "collapse_test.rs"]
mod collapse_test;

use crate::consts::NEAR_ZERO_TENTHS;
use crate::geom::{Segment, distance, shrink_toward_center};

/// Where the animation stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseStatus {
    /// Still inside the duration; request another frame.
    Running,
    /// A segment reached near-zero length and the collection was cleared.
    Cleared,
    /// The duration elapsed before any segment reached near-zero length.
    Expired,
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Segments changed this frame and the scene must be redrawn.
    pub redraw: bool,
    pub status: CollapseStatus,
}

/// Loop-owned state of a running collapse.
#[derive(Debug, Clone)]
pub struct CollapseAnimation {
    duration_ms: f64,
    /// Pixels per millisecond for each segment, indexed like the collection.
    rates: Vec<f64>,
    start_ms: Option<f64>,
    previous_ms: Option<f64>,
}

impl CollapseAnimation {
    /// Compute per-segment shrink rates so each segment reaches zero length
    /// exactly at `duration_ms`.
    #[must_use]
    pub fn new(segments: &[Segment], duration_ms: f64) -> Self {
        let rates = segments.iter().map(|s| distance(s) / duration_ms).collect();
        Self { duration_ms, rates, start_ms: None, previous_ms: None }
    }

    /// Advance the animation to `timestamp_ms`, shrinking `segments` in place.
    ///
    /// The first tick only records the start time (zero offset). A repeated
    /// timestamp does no work. If any segment falls below the near-zero
    /// threshold the entire collection is cleared.
    pub fn tick(&mut self, timestamp_ms: f64, segments: &mut Vec<Segment>) -> Tick {
        let start = *self.start_ms.get_or_insert(timestamp_ms);

        let mut redraw = false;
        if self.previous_ms != Some(timestamp_ms) {
            let time_step = self.previous_ms.map_or(0.0, |previous| timestamp_ms - previous);
            redraw = true;
            if self.shrink_all(segments, time_step) {
                segments.clear();
                return Tick { redraw, status: CollapseStatus::Cleared };
            }
        }

        if timestamp_ms - start < self.duration_ms {
            self.previous_ms = Some(timestamp_ms);
            Tick { redraw, status: CollapseStatus::Running }
        } else {
            Tick { redraw, status: CollapseStatus::Expired }
        }
    }

    /// Shrink every segment by its rate over `time_step`. Returns `true` as
    /// soon as one of them is near-zero.
    fn shrink_all(&self, segments: &mut [Segment], time_step: f64) -> bool {
        for (segment, rate) in segments.iter_mut().zip(&self.rates) {
            let offset = rate * time_step;
            let offset = if offset.is_finite() { offset } else { 0.0 };
            *segment = shrink_toward_center(segment, offset);
            if is_near_zero(segment) {
                return true;
            }
        }
        false
    }
}

/// Length rounds to less than a tenth of a pixel.
#[must_use]
pub fn is_near_zero(segment: &Segment) -> bool {
    (distance(segment) * 10.0).round() < NEAR_ZERO_TENTHS
}
