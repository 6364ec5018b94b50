//! The canvas: drop target, sticker layer, and widget panels.
//!
//! ARCHITECTURE
//! ============
//! Every DOM event is reduced to a canvas-relative point and handed to the
//! dashboard controller; rendering reads back from the engine. Dragging
//! listens on the window so the sticker keeps following the pointer when it
//! leaves the canvas. The canvas size is re-read on each event because the
//! sidebar can shift the canvas at any time.

use leptos::prelude::*;

use canvas::doc::StickerId;

use crate::app::DashboardState;
use crate::components::widget_panel::WidgetPanel;
use crate::util::dom::position_style;

#[component]
pub fn StickerCanvas() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use crate::util::dom::now_ms;

        let mousemove = window_event_listener(leptos::ev::mousemove, move |ev| {
            if dash.with_untracked(|d| d.engine.drag.sticker().is_none()) {
                return;
            }
            let Some(point) = sync_and_locate(dash, canvas_ref, &ev) else {
                return;
            };
            dash.update(|d| {
                d.pointer_move(point);
            });
        });
        let mouseup = window_event_listener(leptos::ev::mouseup, move |_| {
            if dash.with_untracked(|d| d.engine.drag.sticker().is_none()) {
                return;
            }
            dash.update(|d| {
                d.pointer_up(now_ms());
            });
        });
        on_cleanup(move || {
            mousemove.remove();
            mouseup.remove();
        });
    }

    let on_dragover = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            use crate::components::sticker_palette::DRAG_MIME;

            let kind = ev.data_transfer().and_then(|t| t.get_data(DRAG_MIME).ok()).unwrap_or_default();
            if kind.is_empty() {
                return;
            }
            let Some(point) = sync_and_locate(dash, canvas_ref, &ev) else {
                return;
            };
            dash.update(|d| {
                d.drop_sticker(&kind, point);
            });
        }
    };
    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(point) = sync_and_locate(dash, canvas_ref, &ev) else {
                return;
            };
            let now = crate::util::dom::now_ms();
            dash.update(|d| {
                d.click(point, now);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let overlay = move || dash.with(|d| d.background.overlay_color());
    let sticker_ids = move || dash.with(|d| d.engine.doc.iter().map(|s| s.id).collect::<Vec<_>>());
    let panels = move || {
        dash.with(|d| d.retiring.iter().chain(d.engine.active_widget()).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="canvas-container" style:background-color=overlay>
            <div
                id="canvas"
                class="canvas"
                node_ref=canvas_ref
                on:dragover=on_dragover
                on:drop=on_drop
                on:click=on_click
            >
                <For each=sticker_ids key=|id| *id children=move |id| view! { <StickerView id=id canvas_ref=canvas_ref/> }/>
                <For each=panels key=|w| w.panel children=move |widget| view! { <WidgetPanel widget=widget/> }/>
            </div>
        </div>
    }
}

/// One sticker on the canvas. Pressing it starts a drag.
#[component]
fn StickerView(id: StickerId, canvas_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let kind = dash.with_untracked(|d| d.engine.sticker(&id).map(|s| s.kind)).unwrap_or(canvas::catalog::FALLBACK);

    let style = move || dash.with(|d| d.engine.sticker(&id).map(|s| position_style(s.position))).unwrap_or_default();
    let class = move || {
        if dash.with(|d| d.engine.is_active(&id)) { "sticker-item draggable active-sticker" } else { "sticker-item draggable" }
    };
    let on_mousedown = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use canvas::input::Button;

            let button = Button::from_dom(ev.button());
            if button != Button::Primary {
                return;
            }
            ev.prevent_default();
            let Some(point) = sync_and_locate(dash, canvas_ref, &ev) else {
                return;
            };
            dash.update(|d| {
                d.pointer_down(id, point, button);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, canvas_ref);
        }
    };

    view! {
        <div class=class data-type=kind.id style=style on:mousedown=on_mousedown>
            <img src=kind.image alt=kind.name width="50" height="50" draggable="false"/>
            <div class="sticker-icon">
                <i class=format!("fas fa-{}", kind.icon)></i>
            </div>
        </div>
    }
}

/// Record the canvas's current size with the engine and return the event's
/// position relative to the canvas.
#[cfg(feature = "csr")]
fn sync_and_locate(
    dash: RwSignal<DashboardState>,
    canvas_ref: NodeRef<leptos::html::Div>,
    ev: &web_sys::MouseEvent,
) -> Option<canvas::geometry::Point> {
    use crate::util::dom::{client_rect, mouse_point};

    let element = canvas_ref.get_untracked()?;
    let (_, _, width, height) = client_rect(&element);
    if dash.with_untracked(|d| d.engine.canvas_size != canvas::geometry::Size::new(width, height)) {
        dash.update(|d| d.set_canvas_size(width, height));
    }
    Some(mouse_point(ev, &element))
}
