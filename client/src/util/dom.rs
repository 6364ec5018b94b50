//! Small DOM helpers shared by the dashboard components.
//!
//! Geometry conversion is plain Rust and tested natively; everything that
//! touches `web_sys` is `csr`-only.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use canvas::geometry::Point;

/// Convert a viewport (client) position to coordinates relative to an
/// element whose bounding box starts at `(left, top)`.
#[must_use]
pub fn relative_point(client_x: f64, client_y: f64, left: f64, top: f64) -> Point {
    Point::new(client_x - left, client_y - top)
}

/// CSS `left`/`top` declaration for an absolutely positioned element.
#[must_use]
pub fn position_style(position: Point) -> String {
    format!("left: {}px; top: {}px;", position.x, position.y)
}

/// Wall-clock time in milliseconds (`Date.now()`), or `0` outside the browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Bounding box `(left, top, width, height)` of `element` in viewport coordinates.
#[cfg(feature = "csr")]
pub fn client_rect(element: &web_sys::Element) -> (f64, f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.left(), rect.top(), rect.width(), rect.height())
}

/// Mouse event position relative to `element`.
#[cfg(feature = "csr")]
pub fn mouse_point(ev: &web_sys::MouseEvent, element: &web_sys::Element) -> Point {
    let (left, top, _, _) = client_rect(element);
    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), left, top)
}

/// Set a CSS property on `<body>`.
pub fn set_body_style(property: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.style().set_property(property, value) {
            log::warn!("failed to set body {property}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (property, value);
    }
}
