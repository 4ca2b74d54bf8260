//! Input model: mouse buttons and the drawing state machine.
//!
//! `DrawState` tracks the single in-progress segment between the click that
//! starts it and the click that commits or cancels it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Segment};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button. Starts and commits segments.
    Primary,
    /// Right mouse button. Cancels the in-progress segment.
    Secondary,
    /// Middle, back, forward and any other button. Ignored.
    Other,
}

/// Map a DOM `MouseEvent.button` id to a [`Button`].
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        0 => Button::Primary,
        2 => Button::Secondary,
        _ => Button::Other,
    }
}

/// State of the in-progress segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawState {
    /// No segment in progress; the next primary click starts one.
    #[default]
    Idle,
    /// A segment is anchored at `begin` and follows the pointer with `end`.
    Drawing {
        /// Where the segment was started.
        begin: Point,
        /// Last tracked pointer position.
        end: Point,
    },
}

impl DrawState {
    /// Anchor a new segment at `at`.
    #[must_use]
    pub fn start(at: Point) -> Self {
        Self::Drawing { begin: at, end: at }
    }

    /// The in-progress segment, if any.
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        match *self {
            Self::Idle => None,
            Self::Drawing { begin, end } => Some(Segment::new(begin, end)),
        }
    }

    /// Move the live endpoint. Returns `false` when idle.
    pub fn track(&mut self, to: Point) -> bool {
        match self {
            Self::Idle => false,
            Self::Drawing { end, .. } => {
                *end = to;
                true
            }
        }
    }
}
