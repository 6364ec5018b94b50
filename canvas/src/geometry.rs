#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in canvas space (CSS pixels, origin at the canvas's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn offset_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise `self + delta`.
    #[must_use]
    pub fn translate(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Whether `pt` lies inside. Left/top edges are inclusive, right/bottom exclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.origin.x
            && pt.y >= self.origin.y
            && pt.x < self.origin.x + self.size.width
            && pt.y < self.origin.y + self.size.height
    }
}

/// Keep an item of size `item` fully inside `canvas`: each axis is limited to
/// `[0, canvas - item]`. A canvas smaller than the item pins it to `0`.
#[must_use]
pub fn clamp_to_canvas(pt: Point, item: Size, canvas: Size) -> Point {
    Point {
        x: pt.x.min(canvas.width - item.width).max(0.0),
        y: pt.y.min(canvas.height - item.height).max(0.0),
    }
}

/// Truncate a canvas coordinate to whole pixels, as stored in placements.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_px(value: f64) -> i32 {
    value.trunc() as i32
}
