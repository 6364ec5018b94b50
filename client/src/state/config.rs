//! Dashboard configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = store::state::STORAGE_KEY;
pub const DEFAULT_TOAST_MS: u32 = 2000;
pub const DEFAULT_ONBOARDING: bool = true;
pub const ONBOARDING_OPEN_DELAY_MS: u32 = 1000;
pub const ONBOARDING_HOLD_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// `localStorage` key holding the persisted document.
    pub storage_key: String,
    /// How long a notification stays visible.
    pub toast_ms: u32,
    /// Whether the sidebar briefly opens on first load.
    pub onboarding: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), toast_ms: DEFAULT_TOAST_MS, onboarding: DEFAULT_ONBOARDING }
    }
}

impl DashboardConfig {
    /// Build config from variables captured when the WASM bundle was compiled.
    ///
    /// Optional:
    /// - `RITUAL_STORAGE_KEY`: default `ritualState`
    /// - `RITUAL_TOAST_MS`: default 2000
    /// - `RITUAL_ONBOARDING`: `true` (default) or `false`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("RITUAL_STORAGE_KEY"), option_env!("RITUAL_TOAST_MS"), option_env!("RITUAL_ONBOARDING"))
    }

    /// Build config from raw values; anything missing or malformed keeps its default.
    #[must_use]
    pub fn from_values(storage_key: Option<&str>, toast_ms: Option<&str>, onboarding: Option<&str>) -> Self {
        let storage_key = match storage_key.map(str::trim) {
            Some(key) if !key.is_empty() => key.to_owned(),
            _ => DEFAULT_STORAGE_KEY.to_owned(),
        };
        Self {
            storage_key,
            toast_ms: parse_u32(toast_ms, DEFAULT_TOAST_MS),
            onboarding: parse_bool(onboarding, DEFAULT_ONBOARDING),
        }
    }
}

fn parse_u32(raw: Option<&str>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring config value {raw:?}: {e}");
            default
        }
    }
}

fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => default,
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        Some(other) => {
            log::warn!("ignoring config value {other:?}: expected true or false");
            default
        }
    }
}
