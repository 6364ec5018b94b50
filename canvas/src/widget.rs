//! The single active widget panel.
//!
//! Logically there are two states: no panel, or one panel owned by one
//! sticker. Closing is immediate here; the exit animation and deferred element
//! removal belong to the view.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use uuid::Uuid;

use crate::catalog::StickerType;
use crate::consts::{
    WIDGET_EDGE_MARGIN_PX, WIDGET_FLIP_GAP_PX, WIDGET_HEIGHT_PX, WIDGET_MIN_INSET_PX, WIDGET_RIGHT_OFFSET_PX,
    WIDGET_WIDTH_PX,
};
use crate::doc::StickerId;
use crate::geometry::{Point, Rect, Size};

/// Unique identifier for one opening of a widget panel.
pub type WidgetId = Uuid;

/// An open widget panel.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWidget {
    pub panel: WidgetId,
    /// Sticker that opened the panel and carries the active mark.
    pub owner: StickerId,
    pub kind: &'static StickerType,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
}

impl OpenWidget {
    /// The panel's footprint, using the fixed panel size.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, panel_size())
    }
}

/// Whether a widget panel is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    Open(OpenWidget),
}

impl WidgetState {
    /// The open panel, if any.
    #[must_use]
    pub fn open(&self) -> Option<&OpenWidget> {
        match self {
            Self::Closed => None,
            Self::Open(widget) => Some(widget),
        }
    }

    /// Whether `id` owns the open panel.
    #[must_use]
    pub fn is_owned_by(&self, id: &StickerId) -> bool {
        self.open().is_some_and(|w| w.owner == *id)
    }
}

/// Fixed size assumed for every widget panel.
#[must_use]
pub fn panel_size() -> Size {
    Size::new(WIDGET_WIDTH_PX, WIDGET_HEIGHT_PX)
}

/// Where to open a panel for a sticker at `sticker`.
///
/// Right of the sticker by default. If that would run within the edge margin
/// of the canvas's right side, the panel flips to the sticker's left; if it
/// would run past the bottom margin, it moves up to fit.
#[must_use]
pub fn place_widget(sticker: Point, canvas: Size) -> Point {
    let mut x = sticker.x + WIDGET_RIGHT_OFFSET_PX;
    let mut y = sticker.y;

    if x + WIDGET_WIDTH_PX > canvas.width - WIDGET_EDGE_MARGIN_PX {
        x = (sticker.x - WIDGET_WIDTH_PX - WIDGET_FLIP_GAP_PX).max(WIDGET_MIN_INSET_PX);
    }
    if y + WIDGET_HEIGHT_PX > canvas.height - WIDGET_EDGE_MARGIN_PX {
        y = (canvas.height - WIDGET_HEIGHT_PX - WIDGET_EDGE_MARGIN_PX).max(WIDGET_MIN_INSET_PX);
    }
    Point::new(x, y)
}
