//! Layout: the stylesheet must draw stickers and widget panels with exactly
//! the footprints the engine hit-tests, or clicks near their edges land on
//! the wrong target.

use std::collections::HashMap;
use std::fs;

use canvas::consts::{STICKER_SIZE_PX, WIDGET_HEIGHT_PX, WIDGET_WIDTH_PX};

fn stylesheet() -> String {
    fs::read_to_string("style.css").unwrap_or_default()
}

/// Declarations of the rule whose selector list is exactly `selector`.
fn rule(css: &str, selector: &str) -> HashMap<String, String> {
    let head = format!("\n{selector} {{");
    let Some(start) = css.find(&head) else {
        return HashMap::new();
    };
    let body = &css[start + head.len()..];
    let body = &body[..body.find('}').unwrap_or(body.len())];
    body.split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
        .collect()
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn px_value(raw: &str) -> f64 {
    raw.trim_end_matches("px").parse().unwrap_or(f64::NAN)
}

#[test]
fn stylesheet_is_found() {
    assert!(stylesheet().contains(".widget-container"), "style.css not found from {:?}", std::env::current_dir());
}

#[test]
fn widget_panel_has_the_hit_tested_size() {
    let css = stylesheet();
    let decls = rule(&css, ".widget-container");
    assert_eq!(decls.get("width"), Some(&px(WIDGET_WIDTH_PX)));
    assert_eq!(decls.get("height"), Some(&px(WIDGET_HEIGHT_PX)));
    assert!(!decls.contains_key("min-height"), "a min-height lets the panel grow past its hit rect");
    assert!(decls.get("overflow").is_some_and(|v| v != "visible"), "panel content must not spill outside");
}

#[test]
fn sticker_has_the_hit_tested_size() {
    let css = stylesheet();
    let decls = rule(&css, ".sticker-item");
    assert_eq!(decls.get("width"), Some(&px(STICKER_SIZE_PX)));
    assert_eq!(decls.get("height"), Some(&px(STICKER_SIZE_PX)));
}

#[test]
fn sticker_badge_stays_inside_the_sticker() {
    let css = stylesheet();
    let decls = rule(&css, ".sticker-icon");
    for side in ["top", "right", "bottom", "left"] {
        if let Some(offset) = decls.get(side) {
            assert!(px_value(offset) >= 0.0, "badge {side} offset {offset} sticks out of the sticker");
        }
    }
}
