//! Placeholder widget panel opened from a sticker.
//!
//! A panel fades in a moment after it mounts and fades out when the engine
//! closes it; the element itself is removed once the fade has had time to
//! finish.

use leptos::prelude::*;

use canvas::widget::OpenWidget;

use crate::app::DashboardState;
use crate::util::dom::position_style;

#[component]
pub fn WidgetPanel(widget: OpenWidget) -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let panel = widget.panel;
    let kind = widget.kind;
    let shown = RwSignal::new(false);

    let is_open = Memo::new(move |_| dash.with(|d| d.engine.active_widget().is_some_and(|w| w.panel == panel)));

    #[cfg(feature = "csr")]
    {
        use canvas::consts::{WIDGET_CLOSE_DELAY_MS, WIDGET_SHOW_DELAY_MS};
        use gloo_timers::callback::Timeout;

        Timeout::new(WIDGET_SHOW_DELAY_MS, move || {
            if shown.try_set(true).is_some() {
                log::debug!("widget {panel} unmounted before showing");
            }
        })
        .forget();

        Effect::new(move |was_open: Option<bool>| {
            let open = is_open.get();
            if !open && was_open != Some(false) {
                Timeout::new(WIDGET_CLOSE_DELAY_MS, move || {
                    dash.update(|d| {
                        d.finish_retire(panel);
                    });
                })
                .forget();
            }
            open
        });
    }

    let class = move || {
        if shown.get() && is_open.get() { "widget-container widget-visible" } else { "widget-container" }
    };
    let style = move || {
        dash.with(|d| {
            d.engine
                .active_widget()
                .into_iter()
                .chain(d.retiring.iter())
                .find(|w| w.panel == panel)
                .map_or_else(|| position_style(widget.position), |w| position_style(w.position))
        })
    };
    // Clicks inside the panel never reach the canvas, whatever the layout.
    let on_panel_click = |ev: leptos::ev::MouseEvent| ev.stop_propagation();
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        dash.update(|d| {
            d.close_widget();
        });
    };

    view! {
        <div class=class data-type=kind.id style=style on:click=on_panel_click>
            <div class="widget-header">
                <h3>{format!("{} Widget", kind.name)}</h3>
                <button class="widget-close" on:click=on_close>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="widget-content">
                <p>{format!("This is the {} widget. Content will be loaded from actual widgets in the future.", kind.name)}</p>
                <div class="widget-placeholder">
                    <i class=format!("fas fa-{} fa-4x", kind.icon)></i>
                    <p>"Widget content loading..."</p>
                </div>
            </div>
        </div>
    }
}
