//! Shared numeric constants for the sticker canvas.

// ── Stickers ────────────────────────────────────────────────────

/// Rendered sticker width and height in CSS pixels.
pub const STICKER_SIZE_PX: f64 = 50.0;

/// A palette drop lands with the sticker centered under the pointer.
pub const DROP_CENTER_OFFSET_PX: f64 = 25.0;

/// Saved placements within this distance (exclusive, per axis) of a sticker's
/// drag-start position are considered the same sticker.
pub const PLACEMENT_MATCH_RADIUS_PX: u32 = 50;

/// Clicks within this window after a drag release are swallowed.
pub const CLICK_GUARD_MS: f64 = 100.0;

// ── Widget panel ────────────────────────────────────────────────

/// Assumed widget panel width used for placement and hit-testing.
pub const WIDGET_WIDTH_PX: f64 = 300.0;

/// Assumed widget panel height used for placement and hit-testing.
pub const WIDGET_HEIGHT_PX: f64 = 200.0;

/// Horizontal offset from a sticker's left edge to a panel opened on its right.
pub const WIDGET_RIGHT_OFFSET_PX: f64 = 60.0;

/// Gap between a panel flipped to the left and its sticker.
pub const WIDGET_FLIP_GAP_PX: f64 = 10.0;

/// Space kept free between a panel and the canvas's right/bottom edges.
pub const WIDGET_EDGE_MARGIN_PX: f64 = 40.0;

/// Minimum distance between a repositioned panel and the canvas's left/top edges.
pub const WIDGET_MIN_INSET_PX: f64 = 10.0;

/// Delay before a freshly opened panel receives its visible class.
pub const WIDGET_SHOW_DELAY_MS: u32 = 10;

/// Length of the panel's exit animation; the element is removed afterwards.
pub const WIDGET_CLOSE_DELAY_MS: u32 = 300;
