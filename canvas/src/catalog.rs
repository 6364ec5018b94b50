//! The fixed catalog of sticker types offered in the palette.
//!
//! Saved placements refer to these by `id`. Anything that names an id missing
//! from the catalog is shown as the first entry instead.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Static description of one sticker type.
#[derive(Debug, PartialEq, Eq)]
pub struct StickerType {
    /// Stable id stored in placements.
    pub id: &'static str,
    /// Human-readable name used in panels and notifications.
    pub name: &'static str,
    /// Font Awesome glyph name (without the `fa-` prefix).
    pub icon: &'static str,
    /// Transparent PNG shown on the sticker.
    pub image: &'static str,
}

pub static STICKER_TYPES: [StickerType; 6] = [
    StickerType {
        id: "analytics",
        name: "Analytics",
        icon: "chart-line",
        image: "https://cdn-icons-png.flaticon.com/512/4478/4478878.png",
    },
    StickerType {
        id: "calendar",
        name: "Calendar",
        icon: "calendar",
        image: "https://cdn-icons-png.flaticon.com/512/2693/2693507.png",
    },
    StickerType {
        id: "weather",
        name: "Weather",
        icon: "cloud-sun",
        image: "https://cdn-icons-png.flaticon.com/512/4052/4052984.png",
    },
    StickerType {
        id: "notes",
        name: "Notes",
        icon: "sticky-note",
        image: "https://cdn-icons-png.flaticon.com/512/2541/2541988.png",
    },
    StickerType {
        id: "tasks",
        name: "Tasks",
        icon: "tasks",
        image: "https://cdn-icons-png.flaticon.com/512/4697/4697260.png",
    },
    StickerType {
        id: "chart",
        name: "Chart",
        icon: "chart-pie",
        image: "https://cdn-icons-png.flaticon.com/512/1010/1010535.png",
    },
];

/// Catalog entry substituted for unknown ids.
pub static FALLBACK: &StickerType = &STICKER_TYPES[0];

/// Look up a sticker type by id.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static StickerType> {
    STICKER_TYPES.iter().find(|t| t.id == id)
}

/// Look up a sticker type by id, falling back to [`FALLBACK`].
#[must_use]
pub fn resolve(id: &str) -> &'static StickerType {
    lookup(id).unwrap_or(FALLBACK)
}

/// Name shown to the user for `id`: the catalog name when known, otherwise
/// the id with its first character upper-cased.
#[must_use]
pub fn display_name(id: &str) -> String {
    if let Some(t) = lookup(id) {
        return t.name.to_owned();
    }
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
