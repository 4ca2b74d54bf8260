//! Rendering: draws the sketch scene onto a [`Surface`].
//!
//! The scene is drawn in a fixed layer order:
//!
//! 1. clear the whole viewport;
//! 2. the in-progress segment, if any;
//! 3. each committed segment in insertion order, each followed by its marker
//!    against the in-progress segment;
//! 4. markers for every unordered pair of committed segments.
//!
//! [`Surface`] is the only seam to pixels. This module also carries the
//! `Canvas2D` implementation, the only place that touches
//! [`web_sys::CanvasRenderingContext2d`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geom::{Point, Segment, intersect};

/// Primitive drawing operations provided by the host.
pub trait Surface {
    type Error;

    /// Erase the drawing area.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Stroke a line between two points, leaving no drawing state behind.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn draw_line(&mut self, begin: Point, end: Point) -> Result<(), Self::Error>;

    /// Fill and stroke a circular marker centered on `at`.
    ///
    /// # Errors
    ///
    /// Backend failure.
    fn draw_marker(&mut self, at: Point, radius: f64, color: &str) -> Result<(), Self::Error>;
}

/// Radius and fill of intersection markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: String,
}

/// Read-only view of everything a redraw needs.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub segments: &'a [Segment],
    pub in_progress: Option<Segment>,
    pub width: f64,
    pub height: f64,
}

impl Scene<'_> {
    /// Intersection points in the order [`draw`] marks them.
    #[must_use]
    pub fn intersections(&self) -> Vec<Point> {
        let mut points = Vec::new();
        if let Some(current) = &self.in_progress {
            points.extend(self.segments.iter().filter_map(|line| intersect(line, current)));
        }
        points.extend(pair_intersections(self.segments));
        points
    }
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene<'_>, style: &MarkerStyle) -> Result<(), S::Error> {
    surface.clear(scene.width, scene.height)?;

    if let Some(current) = &scene.in_progress {
        surface.draw_line(current.begin, current.end)?;
    }

    for line in scene.segments {
        surface.draw_line(line.begin, line.end)?;
        if let Some(current) = &scene.in_progress
            && let Some(point) = intersect(line, current)
        {
            surface.draw_marker(point, style.radius, &style.color)?;
        }
    }

    for point in pair_intersections(scene.segments) {
        surface.draw_marker(point, style.radius, &style.color)?;
    }

    Ok(())
}

/// Intersections of every `(i, j)` pair with `i < j`, in index order.
fn pair_intersections(segments: &[Segment]) -> impl Iterator<Item = Point> + '_ {
    segments.iter().enumerate().flat_map(move |(i, first)| {
        segments[i + 1..].iter().filter_map(move |second| intersect(first, second))
    })
}

// =============================================================
// Canvas2D backend
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_line(&mut self, begin: Point, end: Point) -> Result<(), JsValue> {
        self.save();
        self.begin_path();
        self.move_to(begin.x, begin.y);
        self.line_to(end.x, end.y);
        self.stroke();
        self.restore();
        Ok(())
    }

    fn draw_marker(&mut self, at: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.save();
        self.begin_path();
        self.arc(at.x, at.y, radius, 0.0, 2.0 * PI)?;
        self.set_fill_style_str(color);
        self.fill();
        self.stroke();
        self.restore();
        Ok(())
    }
}
