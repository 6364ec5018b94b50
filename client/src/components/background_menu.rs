//! Background settings: upload, presets, and canvas overlay opacity.

use leptos::prelude::*;

use crate::app::DashboardState;
use crate::state::background::{PRESETS, parse_opacity};

#[component]
pub fn BackgroundMenu() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();

    let toggle = move |_| {
        dash.update(|d| {
            d.toggle_background_menu();
        });
    };
    let menu_class = move || {
        if dash.with(|d| d.background.menu_open()) { "background-menu menu-visible" } else { "background-menu" }
    };

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::file_reader::read_as_data_url;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            let mut accepted = false;
            dash.update(|d| accepted = d.begin_upload(&file.type_()).is_ok());
            if !accepted {
                return;
            }
            leptos::task::spawn_local(async move {
                match read_as_data_url(&file).await {
                    Ok(data_url) => dash.update(|d| d.finish_upload(&data_url)),
                    Err(err) => log::error!("background upload of {:?} failed: {err}", file.name()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_opacity = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match parse_opacity(&raw) {
            Some(value) => dash.update(|d| d.set_opacity(value)),
            None => log::warn!("ignoring opacity value {raw:?}"),
        }
    };
    let opacity_value = move || dash.with(|d| d.background.opacity().to_string());
    let opacity_label = move || dash.with(|d| d.background.opacity_label());

    view! {
        <button id="background-button" class="background-button" on:click=toggle title="Background settings">
            <i class="fas fa-image"></i>
        </button>
        <div id="background-menu" class=menu_class>
            <div class="background-menu-header">
                <h3>"Background Settings"</h3>
                <button class="background-menu-close" on:click=toggle>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="background-menu-content">
                <div class="background-section">
                    <h4>"Upload Background"</h4>
                    <div class="background-upload-container">
                        <label for="background-upload" class="background-upload-label">
                            <i class="fas fa-upload"></i>
                            <span>"Choose Image"</span>
                        </label>
                        <input
                            type="file"
                            id="background-upload"
                            accept="image/*"
                            class="background-upload-input"
                            on:change=on_upload
                        />
                    </div>
                </div>
                <div class="background-section">
                    <h4>"Preset Backgrounds"</h4>
                    <div class="background-presets">
                        {PRESETS
                            .iter()
                            .enumerate()
                            .map(|(index, preset)| {
                                let class = move || {
                                    if dash.with(|d| d.background.selected_preset() == Some(index)) {
                                        "background-preset selected-preset"
                                    } else {
                                        "background-preset"
                                    }
                                };
                                let on_select = move |_| {
                                    dash.update(|d| {
                                        d.select_preset(index);
                                    });
                                };
                                view! {
                                    <div class=class data-url=preset.url on:click=on_select>
                                        <div
                                            class="background-preset-image"
                                            style:background-image=format!("url(\"{}\")", preset.url)
                                        ></div>
                                        <span>{preset.name}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="background-section">
                    <h4>"Background Opacity"</h4>
                    <input
                        type="range"
                        id="background-opacity"
                        min="0"
                        max="100"
                        class="background-opacity-slider"
                        prop:value=opacity_value
                        on:input=on_opacity
                    />
                    <div class="background-opacity-value">{opacity_label}</div>
                </div>
            </div>
        </div>
    }
}
