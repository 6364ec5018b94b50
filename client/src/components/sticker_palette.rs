//! Grid of sticker types that can be dragged onto the canvas.
//!
//! Uses native HTML5 drag and drop: the dragged item's type id travels as
//! `text/plain` and the canvas reads it back on drop.

use leptos::prelude::*;

use canvas::catalog::{STICKER_TYPES, StickerType};

/// MIME type carrying the sticker type id during a palette drag.
pub const DRAG_MIME: &str = "text/plain";

#[component]
pub fn StickerPalette() -> impl IntoView {
    view! {
        <div id="sticker-grid" class="sticker-grid">
            {STICKER_TYPES.iter().map(|kind| view! { <PaletteItem kind=kind/> }).collect_view()}
        </div>
    }
}

#[component]
fn PaletteItem(kind: &'static StickerType) -> impl IntoView {
    let dragging = RwSignal::new(false);

    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(transfer) = ev.data_transfer() else {
                return;
            };
            if let Err(err) = transfer.set_data(DRAG_MIME, kind.id) {
                log::warn!("failed to start sticker drag: {err:?}");
                return;
            }
            dragging.set(true);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };
    let on_dragend = move |_| dragging.set(false);
    let opacity = move || if dragging.get() { "0.5" } else { "1" };

    view! {
        <div
            class="sticker-item"
            draggable="true"
            data-type=kind.id
            title=kind.name
            style:opacity=opacity
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <img src=kind.image alt=kind.name width="50" height="50"/>
            <div class="sticker-icon">
                <i class=format!("fas fa-{}", kind.icon)></i>
            </div>
        </div>
    }
}
