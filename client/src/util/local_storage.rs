//! Browser `localStorage` backend for the persistence store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only durable storage the dashboard has. Every call re-resolves the
//! window's storage so a blocked or missing `localStorage` (private mode,
//! sandboxed iframe) degrades to `StoreError::Unavailable` instead of
//! failing once at startup. Without the `csr` feature there is no browser and
//! every call reports `Unavailable`.

#[cfg(all(test, not(feature = "csr")))]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use store::{StorageBackend, StoreError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Ok(storage),
        _ => Err(StoreError::Unavailable),
    }
}

#[cfg(feature = "csr")]
fn describe(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| StoreError::Read { key: key.to_owned(), reason: describe(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .set_item(key, raw)
                .map_err(|e| StoreError::Write { key: key.to_owned(), reason: describe(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, raw);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .remove_item(key)
                .map_err(|e| StoreError::Write { key: key.to_owned(), reason: describe(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
