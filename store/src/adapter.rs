//! Cached, write-through access to the saved document.
//!
//! DESIGN
//! ======
//! The first operation of any kind loads the document from the backend;
//! until then the cache is empty. Every mutation serializes the full document
//! back immediately. There is no debouncing, versioning, or cross-tab
//! coordination: one document, one writer.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::state::{SETTINGS_KEY, STICKER_POSITIONS_KEY, STORAGE_KEY, Settings, StickerPlacement, default_state};

/// In-memory mirror of the saved document.
#[derive(Debug)]
pub struct StateStore<B> {
    backend: B,
    key: String,
    cache: Option<Map<String, Value>>,
}

impl<B: StorageBackend> StateStore<B> {
    /// Create a store over `backend` using the standard storage key.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Create a store over `backend` saving under a custom storage key.
    #[must_use]
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into(), cache: None }
    }

    /// The durable backend this store writes through to.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The storage key the document is saved under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    // --- Raw document access ---

    /// Value stored under `key`, if any.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.state_mut().get(key).cloned()
    }

    /// A copy of the whole document.
    pub fn snapshot(&mut self) -> Map<String, Value> {
        self.state_mut().clone()
    }

    /// Store `value` under `key` and persist. Returns the stored value.
    pub fn set(&mut self, key: &str, value: Value) -> Value {
        self.state_mut().insert(key.to_owned(), value.clone());
        self.save();
        value
    }

    /// Append `item` to the array under `key`, creating it when missing.
    ///
    /// A non-array value under `key` is replaced by a fresh array.
    pub fn add_to_array(&mut self, key: &str, item: Value) -> Vec<Value> {
        let state = self.state_mut();
        let mut items = take_array(state, key).unwrap_or_default();
        items.push(item);
        state.insert(key.to_owned(), Value::Array(items.clone()));
        self.save();
        items
    }

    /// Drop every element of the array under `key` for which `predicate` holds.
    ///
    /// Returns an empty list without writing when `key` holds no array; a
    /// non-array value is left as it is.
    pub fn remove_from_array<F>(&mut self, key: &str, mut predicate: F) -> Vec<Value>
    where
        F: FnMut(&Value) -> bool,
    {
        let state = self.state_mut();
        let Some(mut items) = take_existing_array(state, key) else {
            return Vec::new();
        };
        items.retain(|item| !predicate(item));
        state.insert(key.to_owned(), Value::Array(items.clone()));
        self.save();
        items
    }

    /// Shallow-merge `patch` into every element of the array under `key` for
    /// which `predicate(item, index)` holds. Patch fields win on conflict.
    ///
    /// Returns an empty list without writing when `key` holds no array; a
    /// non-array value is left as it is.
    pub fn update_in_array<F>(&mut self, key: &str, mut predicate: F, patch: &Map<String, Value>) -> Vec<Value>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        let state = self.state_mut();
        let Some(mut items) = take_existing_array(state, key) else {
            return Vec::new();
        };
        for (index, item) in items.iter_mut().enumerate() {
            if !predicate(item, index) {
                continue;
            }
            match item {
                Value::Object(fields) => {
                    for (k, v) in patch {
                        fields.insert(k.clone(), v.clone());
                    }
                }
                other => *other = Value::Object(patch.clone()),
            }
        }
        state.insert(key.to_owned(), Value::Array(items.clone()));
        self.save();
        items
    }

    /// Forget the saved document. The next access starts from the default shape.
    pub fn clear(&mut self) {
        self.cache = None;
        if let Err(err) = self.backend.remove(&self.key) {
            log::error!("failed to clear saved state: {err}");
        }
    }

    // --- Typed access ---

    /// Deserialize the value under `key`, logging and returning `None` on mismatch.
    pub fn get_as<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                log::warn!("saved `{key}` has an unexpected shape: {err}");
                None
            }
        }
    }

    /// Serialize `value` and store it under `key`.
    pub fn set_as<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(raw) => {
                self.set(key, raw);
            }
            Err(err) => log::error!("failed to serialize `{key}`: {err}"),
        }
    }

    /// Current settings, or the defaults when none are saved.
    pub fn settings(&mut self) -> Settings {
        self.get_as(SETTINGS_KEY).unwrap_or_default()
    }

    /// Read-modify-write the settings record. Returns the saved settings.
    ///
    /// The typed fields are merged over the stored object, so saved values the
    /// typed view could not read are kept rather than replaced by defaults.
    pub fn update_settings<F>(&mut self, update: F) -> Settings
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings();
        update(&mut settings);
        let fields = match serde_json::to_value(&settings) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                log::error!("settings serialized to a non-object: {other}");
                return settings;
            }
            Err(err) => {
                log::error!("failed to serialize settings: {err}");
                return settings;
            }
        };
        let mut merged = match self.get(SETTINGS_KEY) {
            Some(Value::Object(stored)) => stored,
            _ => Map::new(),
        };
        merged.extend(fields);
        self.set(SETTINGS_KEY, Value::Object(merged));
        settings
    }

    /// Saved sticker placements in creation order. Malformed entries are skipped.
    pub fn placements(&mut self) -> Vec<StickerPlacement> {
        let Some(Value::Array(items)) = self.get(STICKER_POSITIONS_KEY) else {
            return Vec::new();
        };
        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<StickerPlacement>(item) {
                Ok(placement) => Some(placement),
                Err(err) => {
                    log::warn!("skipping malformed sticker placement: {err}");
                    None
                }
            })
            .collect()
    }

    /// Append a placement to the saved sequence.
    pub fn record_placement(&mut self, placement: &StickerPlacement) {
        match serde_json::to_value(placement) {
            Ok(item) => {
                self.add_to_array(STICKER_POSITIONS_KEY, item);
            }
            Err(err) => log::error!("failed to serialize sticker placement: {err}"),
        }
    }

    // --- Load / save ---

    fn state_mut(&mut self) -> &mut Map<String, Value> {
        if self.cache.is_none() {
            let loaded = self.load();
            self.cache = Some(loaded);
        }
        self.cache.get_or_insert_with(default_state)
    }

    fn load(&self) -> Map<String, Value> {
        match self.read_state() {
            Ok(Some(state)) => state,
            Ok(None) => default_state(),
            Err(err) => {
                log::error!("failed to load state: {err}");
                default_state()
            }
        }
    }

    fn read_state(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw).map_err(StoreError::Parse)? {
            Value::Object(state) => Ok(Some(state)),
            _ => Err(StoreError::NotAnObject),
        }
    }

    fn save(&self) {
        if let Err(err) = self.write_state() {
            log::error!("failed to save state: {err}");
        }
    }

    fn write_state(&self) -> Result<(), StoreError> {
        let Some(state) = &self.cache else {
            return Ok(());
        };
        let raw = serde_json::to_string(state).map_err(StoreError::Serialize)?;
        self.backend.write(&self.key, &raw)
    }
}

/// Remove and return the array under `key`. A missing key yields `None`; any
/// other non-array value is logged and treated as an empty array.
fn take_array(state: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match state.remove(key) {
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            log::warn!("saved `{key}` is not an array ({other}); treating it as empty");
            Some(Vec::new())
        }
        None => None,
    }
}

/// Take the elements of the array under `key`, leaving an empty array in its
/// place. Missing keys and non-array values yield `None` and stay untouched.
fn take_existing_array(state: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match state.get_mut(key)? {
        Value::Array(items) => Some(std::mem::take(items)),
        other => {
            log::warn!("saved `{key}` is not an array ({other}); leaving it as it is");
            None
        }
    }
}
