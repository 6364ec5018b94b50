//! Sliding sticker tray with its toggle button.

use leptos::prelude::*;

use crate::app::DashboardState;
use crate::components::sticker_palette::StickerPalette;

#[component]
pub fn Sidebar() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();

    let left = move || dash.with(|d| d.shell.sidebar_left());
    let icon = move || dash.with(|d| d.shell.toggle_icon());
    let on_toggle = move |_| {
        dash.update(|d| {
            d.toggle_sidebar();
        });
    };

    view! {
        <aside id="sidebar" class="sidebar" style:left=left>
            <div class="sidebar-header">
                <h2>"Stickers"</h2>
            </div>
            <StickerPalette/>
            <button id="sidebar-button" class="sidebar-button" on:click=on_toggle title="Toggle sticker tray">
                <i id="sidebar-icon" class=icon></i>
            </button>
        </aside>
    }
}
