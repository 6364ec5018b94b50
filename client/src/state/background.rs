//! Page background image, canvas overlay opacity, and the settings menu.
//!
//! Both values live in the `settings` record of the persisted document
//! (`backgroundUrl`, `canvasOpacity`) and are written through on every change.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use canvas::input::Key;
use canvas::notify::Notifier;
use store::state::{MAX_OPACITY, opacity_from_str};
use store::{Settings, StateStore, StorageBackend};

/// Opacity used when nothing is saved.
pub const DEFAULT_OPACITY: u8 = 80;

/// Overlay alpha at full opacity.
const MAX_OVERLAY_ALPHA_PER_MILLE: u16 = 8;

/// A built-in background image.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub url: &'static str,
}

pub static PRESETS: [Preset; 4] = [
    Preset {
        name: "Blue Mountains",
        url: "https://images.unsplash.com/photo-1557683316-973673baf926?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
    Preset {
        name: "Sunset",
        url: "https://images.unsplash.com/photo-1502790671504-542ad42d5189?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
    Preset {
        name: "Night Sky",
        url: "https://images.unsplash.com/photo-1519681393784-d120267933ba?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
    Preset {
        name: "Forest",
        url: "https://images.unsplash.com/photo-1440342359743-84fcb8c21f21?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80",
    },
];

/// Preset applied when nothing is saved.
pub static DEFAULT_PRESET: &Preset = &PRESETS[0];

/// Why an upload was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please select an image file")]
    NotAnImage { media_type: String },
}

/// Index of the preset whose URL is exactly `url`.
#[must_use]
pub fn preset_index(url: &str) -> Option<usize> {
    PRESETS.iter().position(|p| p.url == url)
}

/// Accept only media types in the `image/` family.
///
/// # Errors
///
/// Returns [`UploadError::NotAnImage`] for anything else, including an empty type.
pub fn validate_upload(media_type: &str) -> Result<(), UploadError> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(UploadError::NotAnImage { media_type: media_type.to_owned() })
    }
}

/// Parse a range input value (`"0"`..`"100"`), clamping to the valid range.
/// Fractions round the same way saved opacities do.
#[must_use]
pub fn parse_opacity(raw: &str) -> Option<u8> {
    opacity_from_str(raw)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    url: String,
    opacity: u8,
    selected: Option<usize>,
    menu_open: bool,
}

impl Default for Background {
    fn default() -> Self {
        Self { url: DEFAULT_PRESET.url.to_owned(), opacity: DEFAULT_OPACITY, selected: Some(0), menu_open: false }
    }
}

impl Background {
    /// Rebuild from saved settings. Missing values fall back to the defaults;
    /// a saved opacity of `0` is kept.
    #[must_use]
    pub fn restore(settings: &Settings) -> Self {
        let url = settings.background_url.clone().filter(|u| !u.is_empty()).unwrap_or_else(|| DEFAULT_PRESET.url.to_owned());
        let selected = preset_index(&url);
        let opacity = settings.canvas_opacity.unwrap_or(DEFAULT_OPACITY).min(MAX_OPACITY);
        Self { url, opacity, selected, menu_open: false }
    }

    /// Apply `url` as the page background and save it.
    pub fn set_background<B: StorageBackend>(&mut self, store: &mut StateStore<B>, url: &str) {
        url.clone_into(&mut self.url);
        store.update_settings(|s| s.background_url = Some(url.to_owned()));
    }

    /// Apply preset `index` and mark it selected.
    pub fn select_preset<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        notifier: &mut dyn Notifier,
        index: usize,
    ) -> bool {
        let Some(preset) = PRESETS.get(index) else {
            log::warn!("no background preset {index}");
            return false;
        };
        self.set_background(store, preset.url);
        self.selected = Some(index);
        notifier.notify("Background updated");
        true
    }

    /// Check a chosen file before reading it. Rejections are announced and
    /// leave the background untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NotAnImage`] when `media_type` is not an image type.
    pub fn begin_upload(&self, notifier: &mut dyn Notifier, media_type: &str) -> Result<(), UploadError> {
        validate_upload(media_type).inspect_err(|e| {
            log::info!("upload rejected: {media_type:?}");
            notifier.notify(&e.to_string());
        })
    }

    /// Apply the uploaded file's data URL. No preset stays selected.
    pub fn finish_upload<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        notifier: &mut dyn Notifier,
        data_url: &str,
    ) {
        self.set_background(store, data_url);
        self.selected = None;
        notifier.notify("Background uploaded");
    }

    /// Set and save the overlay opacity (0-100).
    pub fn set_opacity<B: StorageBackend>(&mut self, store: &mut StateStore<B>, value: u8) {
        let value = value.min(MAX_OPACITY);
        self.opacity = value;
        store.update_settings(|s| s.canvas_opacity = Some(value));
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    #[must_use]
    pub fn selected_preset(&self) -> Option<usize> {
        self.selected
    }

    /// CSS `background-image` value for the page.
    #[must_use]
    pub fn background_image(&self) -> String {
        format!("url(\"{}\")", self.url.replace('"', "%22"))
    }

    /// Canvas overlay color: white at `opacity / 100 * 0.8` alpha.
    #[must_use]
    pub fn overlay_color(&self) -> String {
        let alpha = f64::from(u16::from(self.opacity) * MAX_OVERLAY_ALPHA_PER_MILLE) / 1000.0;
        format!("rgba(255,255,255,{alpha})")
    }

    /// Label shown next to the slider.
    #[must_use]
    pub fn opacity_label(&self) -> String {
        format!("{}%", self.opacity)
    }

    // --- Menu ---

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Escape closes the menu when it is showing. Returns whether it closed.
    pub fn on_key_down(&mut self, key: &Key) -> bool {
        if key.is_escape() && self.menu_open {
            self.menu_open = false;
            return true;
        }
        false
    }
}
