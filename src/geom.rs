//! Segment geometry: intersection, length, and shrinking toward the midpoint.
//!
//! Everything here is a pure function of its inputs. Edge cases (degenerate
//! segments, parallel lines, parameters outside the segment) are reported as
//! `None` rather than errors.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` toward `other` at parameter `t`.
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// Both endpoints coincide.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.begin.x == self.end.x && self.begin.y == self.end.y
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.begin.lerp(self.end, 0.5)
    }
}

/// Intersection of two finite segments (Paul Bourke's parametric method).
///
/// For `P1P2` and `P3P4` this solves for `ua`, `ub` where the infinite lines
/// meet, and accepts the point only when both lie in `[0, 1]`. Returns
/// `None` for degenerate operands and for parallel or collinear segments
/// (denominator exactly zero).
#[must_use]
pub fn intersect(first: &Segment, second: &Segment) -> Option<Point> {
    if first.is_degenerate() || second.is_degenerate() {
        return None;
    }

    let (x1, y1) = (first.begin.x, first.begin.y);
    let (x2, y2) = (first.end.x, first.end.y);
    let (x3, y3) = (second.begin.x, second.begin.y);
    let (x4, y4) = (second.end.x, second.end.y);

    let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;

    let unit = 0.0..=1.0;
    if !unit.contains(&ua) || !unit.contains(&ub) {
        return None;
    }

    Some(Point::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1)))
}

/// Euclidean length of a segment.
#[must_use]
pub fn distance(segment: &Segment) -> f64 {
    let dx = segment.begin.x - segment.end.x;
    let dy = segment.begin.y - segment.end.y;
    (dx * dx + dy * dy).sqrt()
}

/// Move both endpoints `offset / 2` toward each other along the segment.
///
/// An `offset` equal to the segment length lands both endpoints on the
/// midpoint. Zero-length input is returned unchanged.
#[must_use]
pub fn shrink_toward_center(segment: &Segment, offset: f64) -> Segment {
    let length = distance(segment);
    if length == 0.0 {
        return *segment;
    }
    let t = offset / 2.0 / length;
    Segment {
        begin: segment.begin.lerp(segment.end, t),
        end: segment.end.lerp(segment.begin, t),
    }
}
