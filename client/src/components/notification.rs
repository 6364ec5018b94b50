//! Transient status message in the corner of the page.

use leptos::prelude::*;

use crate::app::DashboardState;

/// Shows the latest toast and hides it after the configured delay.
#[component]
pub fn Notification() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Timeout;

        let toast_ms = dash.with_untracked(|d| d.config.toast_ms);
        Effect::new(move || {
            let generation = dash.with(|d| d.toast.generation());
            if generation == 0 {
                return;
            }
            Timeout::new(toast_ms, move || {
                dash.update(|d| {
                    d.expire_toast(generation);
                });
            })
            .forget();
        });
    }

    let message = move || dash.with(|d| d.toast.message().to_owned());
    let opacity = move || if dash.with(|d| d.toast.is_visible()) { "1" } else { "0" };

    view! {
        <div id="notification" class="notification" style:opacity=opacity>
            {message}
        </div>
    }
}
