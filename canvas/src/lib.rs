//! Sticker layout engine for the dashboard canvas.
//!
//! Pure Rust with no DOM access, so the whole crate is tested natively. The
//! client crate converts browser events into canvas coordinates, feeds them
//! to [`engine::StickerEngine`], and renders the [`engine::Action`]s it gets
//! back. Saved placements go through the `store` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::StickerEngine`]: creation, restore, drag, widget lifecycle |
//! | [`doc`] | Stickers currently on the canvas |
//! | [`catalog`] | The six sticker types and display names |
//! | [`widget`] | Active widget state and panel placement |
//! | [`input`] | Buttons, keys, and the drag state machine |
//! | [`hit`] | Hit-testing clicks against the panel and stickers |
//! | [`geometry`] | Points, sizes, rectangles, clamping |
//! | [`notify`] | The [`notify::Notifier`] capability |
//! | [`consts`] | Sticker and panel dimensions, timings |

pub mod catalog;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod notify;
pub mod widget;
