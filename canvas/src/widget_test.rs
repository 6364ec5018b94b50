#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::resolve;

fn canvas() -> Size {
    Size::new(1000.0, 700.0)
}

#[test]
fn places_right_of_sticker_when_room() {
    assert_eq!(place_widget(Point::new(100.0, 150.0), canvas()), Point::new(160.0, 150.0));
}

#[test]
fn flips_left_near_right_edge() {
    // 650 + 60 + 300 = 1010 > 1000 - 40
    assert_eq!(place_widget(Point::new(650.0, 100.0), canvas()), Point::new(340.0, 100.0));
}

#[test]
fn flip_never_goes_past_left_inset() {
    let narrow = Size::new(320.0, 700.0);
    assert_eq!(place_widget(Point::new(50.0, 100.0), narrow), Point::new(10.0, 100.0));
}

#[test]
fn moves_up_near_bottom_edge() {
    // 500 + 200 > 700 - 40, so y = 700 - 200 - 40
    assert_eq!(place_widget(Point::new(100.0, 500.0), canvas()), Point::new(160.0, 460.0));
}

#[test]
fn vertical_adjust_never_goes_above_top_inset() {
    let short = Size::new(1000.0, 150.0);
    assert_eq!(place_widget(Point::new(100.0, 50.0), short), Point::new(160.0, 10.0));
}

#[test]
fn exact_fit_on_right_is_kept() {
    // 600 + 60 + 300 = 960 == 1000 - 40: not overflowing
    assert_eq!(place_widget(Point::new(600.0, 0.0), canvas()).x, 660.0);
}

#[test]
fn widget_state_default_is_closed() {
    let state = WidgetState::default();
    assert!(state.open().is_none());
}

#[test]
fn widget_state_reports_owner() {
    let owner = Uuid::new_v4();
    let state = WidgetState::Open(OpenWidget {
        panel: Uuid::new_v4(),
        owner,
        kind: resolve("notes"),
        position: Point::new(0.0, 0.0),
    });
    assert!(state.is_owned_by(&owner));
    assert!(!state.is_owned_by(&Uuid::new_v4()));
}

#[test]
fn open_widget_rect_has_panel_size() {
    let widget = OpenWidget {
        panel: Uuid::new_v4(),
        owner: Uuid::new_v4(),
        kind: resolve("notes"),
        position: Point::new(5.0, 6.0),
    };
    assert_eq!(widget.rect().size, Size::new(300.0, 200.0));
}
