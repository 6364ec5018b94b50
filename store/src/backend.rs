//! Durable key/value backends for [`crate::StateStore`].

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;

/// Raw string storage keyed by name, in the shape of the browser's `localStorage`.
pub trait StorageBackend {
    /// Return the raw record stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw record stored under `key`.
    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError>;

    /// Delete the record stored under `key`. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend.
///
/// Clones share the same entries, so two stores built from clones of one
/// backend behave like two page loads over the same durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw record currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store a raw record directly, bypassing any store cache.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }

    /// Make subsequent writes fail, as a full or locked storage area would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.insert_raw(key, raw);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
