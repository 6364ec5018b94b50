//! Input model: mouse buttons, keys, and the sticker drag state machine.
//!
//! A gesture starts when the primary button goes down on a sticker
//! (`Pressed`). It only becomes a drag once the pointer actually moves
//! (`Dragging`); a press released without movement is an ordinary click.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::StickerId;
use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// State of the sticker drag gesture between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held over a sticker.
    #[default]
    Idle,
    /// Primary button went down on a sticker; no movement yet.
    Pressed {
        id: StickerId,
        /// Pointer position relative to the sticker's top-left corner.
        grab: Point,
        /// Sticker position when the button went down.
        origin: Point,
    },
    /// The pointer has moved since the press; the sticker follows it.
    Dragging {
        id: StickerId,
        grab: Point,
        origin: Point,
    },
}

impl DragState {
    /// Whether movement has been observed during the current gesture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The sticker held by the current gesture, if any.
    #[must_use]
    pub fn sticker(&self) -> Option<StickerId> {
        match self {
            Self::Idle => None,
            Self::Pressed { id, .. } | Self::Dragging { id, .. } => Some(*id),
        }
    }
}
