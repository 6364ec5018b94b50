//! Sticker layout engine: placement, dragging, and the active widget.
//!
//! `StickerEngine` holds everything the canvas shows and reacts to input
//! events already translated into canvas coordinates. It never touches the
//! DOM. Operations that persist or notify receive the store and notifier
//! from the caller; the returned [`Action`]s tell the view what changed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde_json::{Map, Value};
use store::state::STICKER_POSITIONS_KEY;
use store::{StateStore, StickerPlacement, StorageBackend};
use uuid::Uuid;

use crate::catalog::{self, StickerType};
use crate::consts::{CLICK_GUARD_MS, DROP_CENTER_OFFSET_PX, PLACEMENT_MATCH_RADIUS_PX, STICKER_SIZE_PX};
use crate::doc::{Sticker, StickerDoc, StickerId};
use crate::geometry::{Point, Size, clamp_to_canvas, to_px};
use crate::hit::{HitTarget, hit_test};
use crate::input::{Button, DragState, Key};
use crate::notify::Notifier;
use crate::widget::{OpenWidget, WidgetId, WidgetState, place_widget};

/// Changes reported back to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StickerCreated(Sticker),
    StickerMoved { id: StickerId, position: Point },
    /// A finished drag was written back to the saved placement at `index`.
    PlacementSaved { index: usize, placement: StickerPlacement },
    WidgetOpened(OpenWidget),
    WidgetMoved { panel: WidgetId, position: Point },
    /// The panel is logically closed; the view may still animate it out.
    WidgetClosed { panel: WidgetId, owner: StickerId },
}

/// Canvas state and input handling for stickers and their widget panel.
#[derive(Debug, Clone)]
pub struct StickerEngine {
    pub doc: StickerDoc,
    pub drag: DragState,
    pub widget: WidgetState,
    pub canvas_size: Size,
    click_guard_until_ms: f64,
}

impl Default for StickerEngine {
    fn default() -> Self {
        Self {
            doc: StickerDoc::new(),
            drag: DragState::Idle,
            widget: WidgetState::Closed,
            canvas_size: Size::default(),
            click_guard_until_ms: f64::NEG_INFINITY,
        }
    }
}

impl StickerEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas dimensions used for clamping and panel placement.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_size = Size::new(width, height);
    }

    // --- Creation ---

    /// Show a sticker for every saved placement without recording anything.
    ///
    /// Returns the number of stickers restored.
    pub fn restore_stickers<B: StorageBackend>(&mut self, store: &mut StateStore<B>) -> usize {
        let placements = store.placements();
        for placement in &placements {
            self.spawn(&placement.kind, placement.x, placement.y);
        }
        log::debug!("restored {} stickers", placements.len());
        placements.len()
    }

    /// Place a new sticker at `(x, y)` and append its placement to the store.
    ///
    /// Coordinates are not bounds-checked. Unknown `kind` ids are replaced by
    /// the first catalog entry.
    pub fn create_sticker<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        kind: &str,
        x: i32,
        y: i32,
    ) -> Sticker {
        let sticker = self.spawn(kind, x, y);
        store.record_placement(&sticker.placement());
        sticker
    }

    /// Handle a palette drop of `kind` with the pointer at canvas point `pointer`.
    ///
    /// The sticker is centered under the pointer. Empty payloads are ignored.
    pub fn drop_sticker<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        notifier: &mut dyn Notifier,
        kind: &str,
        pointer: Point,
    ) -> Vec<Action> {
        if kind.trim().is_empty() {
            return Vec::new();
        }
        let x = to_px(pointer.x - DROP_CENTER_OFFSET_PX);
        let y = to_px(pointer.y - DROP_CENTER_OFFSET_PX);
        let sticker = self.create_sticker(store, kind, x, y);
        notifier.notify(&format!("{} sticker added", catalog::display_name(kind)));
        vec![Action::StickerCreated(sticker)]
    }

    fn spawn(&mut self, kind: &str, x: i32, y: i32) -> Sticker {
        let resolved: &'static StickerType = match catalog::lookup(kind) {
            Some(t) => t,
            None => {
                log::debug!("unknown sticker type `{kind}`; using `{}`", catalog::FALLBACK.id);
                catalog::FALLBACK
            }
        };
        let sticker = Sticker::new(resolved, Point::new(f64::from(x), f64::from(y)));
        self.doc.insert(sticker.clone());
        sticker
    }

    // --- Pointer input ---

    /// Primary-button press on sticker `id` with the pointer at canvas point `pointer`.
    pub fn on_pointer_down(&mut self, id: StickerId, pointer: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(sticker) = self.doc.get(&id) else {
            return Vec::new();
        };
        self.click_guard_until_ms = f64::NEG_INFINITY;
        self.drag = DragState::Pressed { id, grab: pointer.offset_from(sticker.position), origin: sticker.position };
        Vec::new()
    }

    /// Pointer moved to canvas point `pointer`. Moves the held sticker, clamped
    /// inside the canvas, and carries its open panel along by the same delta.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let (id, grab, origin) = match self.drag {
            DragState::Idle => return Vec::new(),
            DragState::Pressed { id, grab, origin } | DragState::Dragging { id, grab, origin } => (id, grab, origin),
        };
        self.drag = DragState::Dragging { id, grab, origin };

        let target = clamp_to_canvas(
            pointer.offset_from(grab),
            Size::new(STICKER_SIZE_PX, STICKER_SIZE_PX),
            self.canvas_size,
        );
        let Some(sticker) = self.doc.get_mut(&id) else {
            self.drag = DragState::Idle;
            return Vec::new();
        };
        let delta = target.offset_from(sticker.position);
        sticker.position = target;

        let mut actions = vec![Action::StickerMoved { id, position: target }];
        if let WidgetState::Open(widget) = &mut self.widget {
            if widget.owner == id {
                widget.position = widget.position.translate(delta);
                actions.push(Action::WidgetMoved { panel: widget.panel, position: widget.position });
            }
        }
        actions
    }

    /// Button released at time `now_ms`. Ends the gesture; after a real drag,
    /// persists the new position and swallows clicks for a short window.
    pub fn on_pointer_up<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        notifier: &mut dyn Notifier,
        now_ms: f64,
    ) -> Vec<Action> {
        let DragState::Dragging { id, origin, .. } = std::mem::take(&mut self.drag) else {
            return Vec::new();
        };
        self.click_guard_until_ms = now_ms + CLICK_GUARD_MS;
        notifier.notify("Sticker moved");
        self.persist_move(store, id, origin).into_iter().collect()
    }

    /// Write the sticker's position back to the saved placement that matches
    /// its type and lies near where the drag started. Saved types the catalog
    /// does not know compare as the type they were shown as.
    fn persist_move<B: StorageBackend>(
        &self,
        store: &mut StateStore<B>,
        id: StickerId,
        origin: Point,
    ) -> Option<Action> {
        let sticker = self.doc.get(&id)?;
        let placement = sticker.placement();
        let from = StickerPlacement::new(sticker.kind.id, to_px(origin.x), to_px(origin.y));

        let Some(Value::Array(items)) = store.get(STICKER_POSITIONS_KEY) else {
            log::debug!("no saved placements; move of {id} not persisted");
            return None;
        };
        let Some(index) = items.iter().position(|item| is_near(item, &from)) else {
            log::debug!("no saved placement near {from:?}; move of {id} not persisted");
            return None;
        };

        let mut patch = Map::new();
        patch.insert("x".to_owned(), Value::from(placement.x));
        patch.insert("y".to_owned(), Value::from(placement.y));
        store.update_in_array(STICKER_POSITIONS_KEY, |_, i| i == index, &patch);
        Some(Action::PlacementSaved { index, placement })
    }

    /// Click at canvas point `pointer` at time `now_ms`.
    ///
    /// A sticker opens its widget, the open panel ignores the click, and empty
    /// canvas closes the widget. Clicks right after a drag are ignored.
    pub fn on_click(&mut self, notifier: &mut dyn Notifier, pointer: Point, now_ms: f64) -> Vec<Action> {
        if now_ms < self.click_guard_until_ms {
            return Vec::new();
        }
        match hit_test(pointer, &self.doc, &self.widget) {
            HitTarget::Sticker(id) => self.open_widget(notifier, id),
            HitTarget::Widget(_) => Vec::new(),
            HitTarget::Canvas => self.close_widget(),
        }
    }

    /// Escape closes the widget.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() { self.close_widget() } else { Vec::new() }
    }

    // --- Widget ---

    /// Open the widget panel for sticker `id`, closing any other panel first.
    pub fn open_widget(&mut self, notifier: &mut dyn Notifier, id: StickerId) -> Vec<Action> {
        let Some(sticker) = self.doc.get(&id) else {
            return Vec::new();
        };
        let kind = sticker.kind;
        let position = place_widget(sticker.position, self.canvas_size);

        let mut actions = self.close_widget();
        notifier.notify(&format!("{} widget opened", kind.name));
        let widget = OpenWidget { panel: Uuid::new_v4(), owner: id, kind, position };
        self.widget = WidgetState::Open(widget.clone());
        actions.push(Action::WidgetOpened(widget));
        actions
    }

    /// Close the open widget panel, if any.
    pub fn close_widget(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.widget) {
            WidgetState::Open(widget) => vec![Action::WidgetClosed { panel: widget.panel, owner: widget.owner }],
            WidgetState::Closed => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn sticker(&self, id: &StickerId) -> Option<&Sticker> {
        self.doc.get(id)
    }

    /// The open widget panel, if any.
    #[must_use]
    pub fn active_widget(&self) -> Option<&OpenWidget> {
        self.widget.open()
    }

    /// Whether sticker `id` carries the active mark.
    #[must_use]
    pub fn is_active(&self, id: &StickerId) -> bool {
        self.widget.is_owned_by(id)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

fn is_near(item: &Value, from: &StickerPlacement) -> bool {
    let Ok(saved) = serde_json::from_value::<StickerPlacement>(item.clone()) else {
        return false;
    };
    catalog::resolve(&saved.kind).id == from.kind
        && saved.x.abs_diff(from.x) < PLACEMENT_MATCH_RADIUS_PX
        && saved.y.abs_diff(from.y) < PLACEMENT_MATCH_RADIUS_PX
}
