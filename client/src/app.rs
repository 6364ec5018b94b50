//! Root application component and the shared dashboard context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::background_menu::BackgroundMenu;
use crate::components::notification::Notification;
use crate::components::sidebar::Sidebar;
use crate::components::sticker_canvas::StickerCanvas;
use crate::state::config::DashboardConfig;
use crate::state::dashboard::Dashboard;
use crate::util::dom::set_body_style;
use crate::util::local_storage::LocalStorageBackend;

/// The dashboard as the browser runs it, backed by `localStorage`.
pub type DashboardState = Dashboard<LocalStorageBackend>;

/// Root application component.
///
/// Builds and restores the dashboard once, provides it as a context signal,
/// and installs page-wide listeners (Escape, onboarding, body background).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::from_build_env();
    let mut dashboard = Dashboard::new(LocalStorageBackend, config.clone());
    dashboard.init();
    let dash = RwSignal::new(dashboard);
    provide_context(dash);

    Effect::new(move || {
        let image = dash.with(|d| d.background.background_image());
        set_body_style("background-image", &image);
    });

    #[cfg(feature = "csr")]
    {
        use canvas::input::Key;

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = Key(ev.key());
            dash.update(|d| {
                d.key_down(&key);
            });
        });
        on_cleanup(move || keydown.remove());

        if config.onboarding {
            start_onboarding(dash);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let content_margin = move || dash.with(|d| d.shell.content_margin());

    view! {
        <Title text="Ritual Dashboard"/>
        <Sidebar/>
        <main class="main-content" style:margin-left=content_margin>
            <StickerCanvas/>
        </main>
        <BackgroundMenu/>
        <Notification/>
    }
}

/// Open the sticker tray shortly after load, then tuck it away again.
#[cfg(feature = "csr")]
fn start_onboarding(dash: RwSignal<DashboardState>) {
    use gloo_timers::callback::Timeout;

    use crate::state::config::{ONBOARDING_HOLD_MS, ONBOARDING_OPEN_DELAY_MS};
    use crate::state::shell::OnboardingStep;

    Timeout::new(ONBOARDING_OPEN_DELAY_MS, move || {
        dash.update(|d| {
            d.onboarding(OnboardingStep::Reveal);
        });
        Timeout::new(ONBOARDING_HOLD_MS, move || {
            dash.update(|d| {
                d.onboarding(OnboardingStep::Hide);
            });
        })
        .forget();
    })
    .forget();
}
