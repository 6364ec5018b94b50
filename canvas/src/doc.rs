//! Stickers currently on the canvas.
//!
//! `StickerDoc` is the in-memory view model: every sticker element the canvas
//! shows, in creation order (later stickers stack above earlier ones). It is
//! separate from the saved placement sequence in the `store` crate; the engine
//! decides when the two are synchronized.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use store::StickerPlacement;
use uuid::Uuid;

use crate::catalog::StickerType;
use crate::consts::STICKER_SIZE_PX;
use crate::geometry::{Point, Rect, Size, to_px};

/// Unique identifier for a sticker element.
pub type StickerId = Uuid;

/// A sticker shown on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    pub id: StickerId,
    pub kind: &'static StickerType,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
}

impl Sticker {
    /// A new sticker with a fresh id.
    #[must_use]
    pub fn new(kind: &'static StickerType, position: Point) -> Self {
        Self { id: Uuid::new_v4(), kind, position }
    }

    /// The sticker's footprint on the canvas.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, Size::new(STICKER_SIZE_PX, STICKER_SIZE_PX))
    }

    /// The saved form of this sticker's current position.
    #[must_use]
    pub fn placement(&self) -> StickerPlacement {
        StickerPlacement::new(self.kind.id, to_px(self.position.x), to_px(self.position.y))
    }
}

/// Ordered collection of canvas stickers.
#[derive(Debug, Clone, Default)]
pub struct StickerDoc {
    stickers: Vec<Sticker>,
}

impl StickerDoc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sticker on top of all others.
    pub fn insert(&mut self, sticker: Sticker) {
        self.stickers.push(sticker);
    }

    #[must_use]
    pub fn get(&self, id: &StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == *id)
    }

    pub fn get_mut(&mut self, id: &StickerId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| s.id == *id)
    }

    /// Stickers bottom-to-top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sticker> {
        self.stickers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
