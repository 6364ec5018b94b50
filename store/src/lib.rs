//! Write-through persistence for the dashboard's single saved document.
//!
//! The whole dashboard state lives in one JSON object stored under a fixed
//! key in client-side durable storage. [`adapter::StateStore`] keeps an
//! in-memory copy of that object, loads it lazily on first access, and
//! serializes the full document back after every mutation. Storage failures
//! are logged and recovered with the default shape; they never reach callers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`adapter`] | `StateStore`: cached key/value and array operations |
//! | [`backend`] | `StorageBackend` trait and the in-memory backend |
//! | [`state`] | Typed records (`Settings`, `StickerPlacement`) and the default shape |
//! | [`error`] | `StoreError` |

pub mod adapter;
pub mod backend;
pub mod error;
pub mod state;

pub use adapter::StateStore;
pub use backend::{MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use state::{PersistedState, Settings, StickerPlacement};
