//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and canvas while reading and
//! updating the shared `Dashboard` signal from Leptos context.

pub mod background_menu;
pub mod notification;
pub mod sidebar;
pub mod sticker_canvas;
pub mod sticker_palette;
pub mod widget_panel;
