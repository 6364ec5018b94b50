//! Typed records stored inside the saved document, and its default shape.
//!
//! The document is a free-form JSON object; these types describe the two keys
//! the dashboard knows about. Reads are lenient so records written by older
//! builds (string opacities, fractional coordinates) still load.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Durable storage key holding the whole document.
pub const STORAGE_KEY: &str = "ritualState";

/// Document key holding the ordered sticker placements.
pub const STICKER_POSITIONS_KEY: &str = "stickerPositions";

/// Document key holding [`Settings`].
pub const SETTINGS_KEY: &str = "settings";

/// Theme name written into fresh documents.
pub const DEFAULT_THEME: &str = "default";

/// Highest accepted canvas opacity percentage.
pub const MAX_OPACITY: u8 = 100;

/// Saved position of one sticker on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerPlacement {
    /// Sticker type id (`"weather"`, `"notes"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Left edge in canvas pixels.
    #[serde(deserialize_with = "lenient_coord")]
    pub x: i32,
    /// Top edge in canvas pixels.
    #[serde(deserialize_with = "lenient_coord")]
    pub y: i32,
}

impl StickerPlacement {
    #[must_use]
    pub fn new(kind: impl Into<String>, x: i32, y: i32) -> Self {
        Self { kind: kind.into(), x, y }
    }
}

/// User settings persisted under [`SETTINGS_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_theme", deserialize_with = "lenient_theme")]
    pub theme: String,
    /// Kept for record compatibility; nothing restores the sidebar from it.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub sidebar_open: bool,
    /// Data URL or remote URL of the page background.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_or_default")]
    pub background_url: Option<String>,
    /// Canvas overlay opacity percentage, `0..=100`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opacity")]
    pub canvas_opacity: Option<u8>,
    /// Fields written by other builds, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_open: false,
            background_url: None,
            canvas_opacity: None,
            extra: Map::new(),
        }
    }
}

/// Typed view of the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub sticker_positions: Vec<StickerPlacement>,
    #[serde(default)]
    pub settings: Settings,
}

/// The document used when nothing valid is saved:
/// `{ stickerPositions: [], settings: { theme: "default", sidebarOpen: false } }`.
#[must_use]
pub fn default_state() -> Map<String, Value> {
    let mut settings = Map::new();
    settings.insert("theme".to_owned(), Value::String(DEFAULT_THEME.to_owned()));
    settings.insert("sidebarOpen".to_owned(), Value::Bool(false));

    let mut state = Map::new();
    state.insert(STICKER_POSITIONS_KEY.to_owned(), Value::Array(Vec::new()));
    state.insert(SETTINGS_KEY.to_owned(), Value::Object(settings));
    state
}

fn default_theme() -> String {
    DEFAULT_THEME.to_owned()
}

/// Parse a whole-number pixel coordinate from a number or numeric string,
/// truncating fractions toward zero.
#[allow(clippy::cast_possible_truncation)]
fn coord_from_value(value: &Value) -> Option<i32> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() || raw < f64::from(i32::MIN) || raw > f64::from(i32::MAX) {
        return None;
    }
    Some(raw.trunc() as i32)
}

/// Parse an opacity percentage from a number or numeric string, clamped to `0..=100`.
#[must_use]
pub fn opacity_from_value(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => opacity_from_f64(n.as_f64()?),
        Value::String(s) => opacity_from_str(s),
        _ => None,
    }
}

/// Parse an opacity percentage from text such as a range input value.
#[must_use]
pub fn opacity_from_str(raw: &str) -> Option<u8> {
    opacity_from_f64(raw.trim().parse().ok()?)
}

/// Round to the nearest whole percentage and clamp to `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn opacity_from_f64(raw: f64) -> Option<u8> {
    raw.is_finite().then(|| raw.round().clamp(0.0, f64::from(MAX_OPACITY)) as u8)
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coord_from_value(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid coordinate: {value}")))
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(theme) => Ok(theme),
        other => {
            log::warn!("ignoring saved theme {other}");
            Ok(default_theme())
        }
    }
}

/// Read a settings field, using its default when the saved value has the wrong shape.
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        log::warn!("ignoring malformed saved setting: {err}");
        T::default()
    }))
}

fn lenient_opacity<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(opacity_from_value(&value))
}
