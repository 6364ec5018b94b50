use serde_json::json;
use store::MemoryBackend;

use super::*;

fn store() -> StateStore<MemoryBackend> {
    StateStore::new(MemoryBackend::new())
}

#[test]
fn defaults_to_first_preset_at_eighty_percent() {
    let bg = Background::restore(&Settings::default());
    assert_eq!(bg.url(), PRESETS[0].url);
    assert_eq!(bg.selected_preset(), Some(0));
    assert_eq!(bg.opacity(), 80);
    assert_eq!(bg.opacity_label(), "80%");
    assert_eq!(bg, Background::default());
}

#[test]
fn preset_names() {
    let names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Blue Mountains", "Sunset", "Night Sky", "Forest"]);
}

#[test]
fn select_preset_applies_persists_and_notifies() {
    let mut store = store();
    let mut notes: Vec<String> = Vec::new();
    let mut bg = Background::default();

    assert!(bg.select_preset(&mut store, &mut notes, 2));
    assert_eq!(bg.url(), PRESETS[2].url);
    assert_eq!(bg.selected_preset(), Some(2));
    assert_eq!(notes, vec!["Background updated"]);
    assert_eq!(store.settings().background_url.as_deref(), Some(PRESETS[2].url));
}

#[test]
fn select_missing_preset_changes_nothing() {
    let mut store = store();
    let mut notes: Vec<String> = Vec::new();
    let mut bg = Background::default();
    assert!(!bg.select_preset(&mut store, &mut notes, 9));
    assert_eq!(bg, Background::default());
    assert!(notes.is_empty());
}

#[test]
fn upload_rejects_non_images() {
    let mut store = store();
    let mut notes: Vec<String> = Vec::new();
    let mut bg = Background::default();
    bg.select_preset(&mut store, &mut notes, 1);
    notes.clear();

    let err = bg.begin_upload(&mut notes, "application/pdf").unwrap_err();
    assert_eq!(err, UploadError::NotAnImage { media_type: "application/pdf".into() });
    assert_eq!(notes, vec!["Please select an image file"]);
    assert_eq!(bg.url(), PRESETS[1].url);
    assert_eq!(store.settings().background_url.as_deref(), Some(PRESETS[1].url));
}

#[test]
fn upload_type_must_start_with_image() {
    assert!(validate_upload("image/png").is_ok());
    assert!(validate_upload("image/svg+xml").is_ok());
    assert!(validate_upload("").is_err());
    assert!(validate_upload("text/image").is_err());
}

#[test]
fn finished_upload_applies_and_clears_selection() {
    let mut store = store();
    let mut notes: Vec<String> = Vec::new();
    let mut bg = Background::default();
    let data_url = "data:image/png;base64,iVBORw0KGgo=";

    assert!(bg.begin_upload(&mut notes, "image/png").is_ok());
    bg.finish_upload(&mut store, &mut notes, data_url);

    assert_eq!(bg.url(), data_url);
    assert_eq!(bg.selected_preset(), None);
    assert_eq!(notes, vec!["Background uploaded"]);
    assert_eq!(store.settings().background_url.as_deref(), Some(data_url));
}

#[test]
fn opacity_fifty_maps_to_overlay_and_persists() {
    let mut store = store();
    let mut bg = Background::default();
    bg.set_opacity(&mut store, 50);

    assert_eq!(bg.overlay_color(), "rgba(255,255,255,0.4)");
    assert_eq!(bg.opacity_label(), "50%");
    assert_eq!(store.get("settings").and_then(|s| s.get("canvasOpacity").cloned()), Some(json!(50)));
}

#[test]
fn overlay_bounds() {
    let mut store = store();
    let mut bg = Background::default();
    bg.set_opacity(&mut store, 0);
    assert_eq!(bg.overlay_color(), "rgba(255,255,255,0)");
    bg.set_opacity(&mut store, 100);
    assert_eq!(bg.overlay_color(), "rgba(255,255,255,0.8)");
    bg.set_opacity(&mut store, 250);
    assert_eq!(bg.opacity(), 100);
}

#[test]
fn restore_keeps_zero_opacity_and_saved_url() {
    let settings = Settings {
        background_url: Some(PRESETS[3].url.to_owned()),
        canvas_opacity: Some(0),
        ..Settings::default()
    };
    let bg = Background::restore(&settings);
    assert_eq!(bg.opacity(), 0);
    assert_eq!(bg.selected_preset(), Some(3));
}

#[test]
fn restore_uploaded_url_selects_nothing() {
    let settings = Settings { background_url: Some("data:image/png;base64,AAAA".into()), ..Settings::default() };
    let bg = Background::restore(&settings);
    assert_eq!(bg.url(), "data:image/png;base64,AAAA");
    assert_eq!(bg.selected_preset(), None);
}

#[test]
fn settings_survive_reload() {
    let backend = MemoryBackend::new();
    {
        let mut store = StateStore::new(backend.clone());
        let mut notes: Vec<String> = Vec::new();
        let mut bg = Background::default();
        bg.select_preset(&mut store, &mut notes, 1);
        bg.set_opacity(&mut store, 35);
    }
    let mut reloaded = StateStore::new(backend);
    let bg = Background::restore(&reloaded.settings());
    assert_eq!(bg.url(), PRESETS[1].url);
    assert_eq!(bg.opacity(), 35);
}

#[test]
fn parse_slider_values() {
    assert_eq!(parse_opacity("50"), Some(50));
    assert_eq!(parse_opacity(" 0 "), Some(0));
    assert_eq!(parse_opacity("140"), Some(100));
    assert_eq!(parse_opacity("-3"), Some(0));
    assert_eq!(parse_opacity("abc"), None);
}

#[test]
fn slider_fractions_round_like_saved_records() {
    assert_eq!(parse_opacity("50.6"), Some(51));
    assert_eq!(parse_opacity("50.4"), Some(50));
    let saved: Settings = serde_json::from_value(json!({ "canvasOpacity": "50.6" })).unwrap();
    assert_eq!(saved.canvas_opacity, parse_opacity("50.6"));
}

#[test]
fn escape_closes_open_menu_only() {
    let mut bg = Background::default();
    let escape = Key("Escape".into());
    assert!(!bg.on_key_down(&escape));

    assert!(bg.toggle_menu());
    assert!(!bg.on_key_down(&Key("a".into())));
    assert!(bg.menu_open());
    assert!(bg.on_key_down(&escape));
    assert!(!bg.menu_open());
}

#[test]
fn background_image_quotes_url() {
    let bg = Background::default();
    assert_eq!(bg.background_image(), format!("url(\"{}\")", PRESETS[0].url));
}
