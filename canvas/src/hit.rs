#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{StickerDoc, StickerId};
use crate::geometry::Point;
use crate::widget::{WidgetId, WidgetState};

/// What a canvas click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The open widget panel.
    Widget(WidgetId),
    /// A sticker.
    Sticker(StickerId),
    /// Empty canvas.
    Canvas,
}

/// Find what lies under `pt`: the open panel first, then the topmost sticker.
#[must_use]
pub fn hit_test(pt: Point, doc: &StickerDoc, widget: &WidgetState) -> HitTarget {
    if let Some(open) = widget.open() {
        if open.rect().contains(pt) {
            return HitTarget::Widget(open.panel);
        }
    }
    doc.iter()
        .rev()
        .find(|s| s.rect().contains(pt))
        .map_or(HitTarget::Canvas, |s| HitTarget::Sticker(s.id))
}
