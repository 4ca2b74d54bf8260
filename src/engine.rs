use log::{debug, trace, warn};

use crate::collapse::{CollapseAnimation, CollapseStatus};
use crate::config::SketchConfig;
use crate::geom::{Point, Segment};
use crate::input::{Button, DrawState};
use crate::render::{self, MarkerStyle, Scene, Surface};
use crate::throttle::{Throttle, Throttled};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Scheduling requests returned from handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Call [`SketchCore::on_frame`] before the next repaint.
    FrameRequested,
    /// Call [`SketchCore::on_timer`] after `delay_ms`.
    TimerRequested { delay_ms: f64 },
}

/// Sketch controller state. All logic that doesn't depend on the browser.
///
/// Owns the committed segments, the in-progress segment, the lock flag and
/// the collapse animation. Pixels go to whatever [`Surface`] the caller
/// passes in, so it can be tested without WASM/browser dependencies.
pub struct SketchCore {
    segments: Vec<Segment>,
    drawing: DrawState,
    /// Set while a collapse runs; start and commit are ignored.
    locked: bool,
    collapse: Option<CollapseAnimation>,
    move_throttle: Throttle<Point>,
    style: MarkerStyle,
    config: SketchConfig,
    viewport_width: f64,
    viewport_height: f64,
}

impl Default for SketchCore {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchCore {
    #[must_use]
    pub fn new(config: SketchConfig) -> Self {
        Self {
            segments: Vec::new(),
            drawing: DrawState::Idle,
            locked: false,
            collapse: None,
            move_throttle: Throttle::new(config.move_throttle_ms),
            style: MarkerStyle { radius: config.marker_radius, color: config.marker_color.clone() },
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Viewport ---

    /// Size of the area cleared on every redraw.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Input events ---

    /// Track the pointer, redrawing at most once per throttle window.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the redraw.
    pub fn on_pointer_move<S: Surface>(
        &mut self,
        now_ms: f64,
        at: Point,
        surface: &mut S,
    ) -> Result<Vec<Action>, S::Error> {
        match self.move_throttle.call(now_ms, at) {
            Throttled::Run(at) => {
                self.apply_move(at, surface)?;
                Ok(Vec::new())
            }
            Throttled::Deferred { delay_ms } => Ok(vec![Action::TimerRequested { delay_ms }]),
            Throttled::Coalesced => Ok(Vec::new()),
        }
    }

    /// Deliver a deferred pointer move once its window has passed.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the redraw.
    pub fn on_timer<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        if let Some(at) = self.move_throttle.poll(now_ms) {
            self.apply_move(at, surface)?;
            return Ok(Vec::new());
        }
        // Fired early: re-arm for whatever is still pending.
        Ok(self
            .move_throttle
            .remaining_ms(now_ms)
            .map(|delay_ms| Action::TimerRequested { delay_ms })
            .into_iter()
            .collect())
    }

    /// Primary release starts or commits a segment; secondary release
    /// cancels the in-progress one. Other buttons and any release while
    /// locked are ignored.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the cancel redraw.
    pub fn on_pointer_up<S: Surface>(&mut self, button: Button, at: Point, surface: &mut S) -> Result<(), S::Error> {
        if self.locked {
            return Ok(());
        }
        match button {
            Button::Primary => match self.drawing.segment() {
                Some(segment) => {
                    self.segments.push(segment);
                    self.drawing = DrawState::Idle;
                }
                None => self.drawing = DrawState::start(at),
            },
            Button::Secondary => {
                self.drawing = DrawState::Idle;
                self.redraw(surface)?;
            }
            Button::Other => {}
        }
        Ok(())
    }

    /// Commit a segment directly. Returns `false` while locked.
    pub fn add_segment(&mut self, segment: Segment) -> bool {
        if self.locked {
            return false;
        }
        self.segments.push(segment);
        true
    }

    // --- Render ---

    /// Clear the surface and draw segments and intersection markers.
    ///
    /// # Errors
    ///
    /// Propagates the first surface error.
    pub fn redraw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.scene(), &self.style)
    }

    // --- Collapse ---

    /// Start shrinking every committed segment into its midpoint.
    ///
    /// No-op when there is nothing to collapse, when a collapse is already
    /// running, or for a non-positive duration.
    pub fn collapse_all(&mut self, duration_ms: f64) -> Vec<Action> {
        if self.segments.is_empty() || self.collapse.is_some() {
            return Vec::new();
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            warn!("collapse ignored: invalid duration {duration_ms}");
            return Vec::new();
        }
        debug!("collapse started: {} segments over {duration_ms}ms", self.segments.len());
        self.locked = true;
        self.collapse = Some(CollapseAnimation::new(&self.segments, duration_ms));
        vec![Action::FrameRequested]
    }

    /// Advance a running collapse to the frame timestamp.
    ///
    /// # Errors
    ///
    /// Propagates surface errors from the redraw.
    pub fn on_frame<S: Surface>(&mut self, timestamp_ms: f64, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        let Some(animation) = self.collapse.as_mut() else {
            return Ok(Vec::new());
        };
        let tick = animation.tick(timestamp_ms, &mut self.segments);
        trace!("collapse tick at {timestamp_ms}: {:?}", tick.status);

        let actions = match tick.status {
            CollapseStatus::Running => vec![Action::FrameRequested],
            CollapseStatus::Cleared => {
                debug!("collapse finished: segments cleared");
                self.collapse = None;
                self.locked = false;
                Vec::new()
            }
            CollapseStatus::Expired => {
                // The lock stays set; input remains blocked until another
                // collapse clears the leftovers.
                debug!("collapse expired with {} segments left; input stays locked", self.segments.len());
                self.collapse = None;
                Vec::new()
            }
        };

        if tick.redraw {
            self.redraw(surface)?;
        }
        Ok(actions)
    }

    // --- Queries ---

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn in_progress(&self) -> Option<Segment> {
        self.drawing.segment()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_collapsing(&self) -> bool {
        self.collapse.is_some()
    }

    /// Intersection points the next redraw would mark, in drawing order.
    #[must_use]
    pub fn intersections(&self) -> Vec<Point> {
        self.scene().intersections()
    }

    #[must_use]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            segments: &self.segments,
            in_progress: self.drawing.segment(),
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    fn apply_move<S: Surface>(&mut self, at: Point, surface: &mut S) -> Result<(), S::Error> {
        if self.drawing.track(at) {
            self.redraw(surface)?;
        }
        Ok(())
    }
}
