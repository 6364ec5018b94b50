//! Errors raised between the store and its durable backend.
//!
//! None of these escape [`crate::StateStore`]'s public operations; they are
//! logged and the store falls back to its default shape.

/// Failure reading, parsing, or writing the saved document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No durable storage is available in this environment.
    #[error("durable storage is unavailable")]
    Unavailable,
    /// The backend refused to return the raw record.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// The backend refused to store the raw record (quota, privacy mode, ...).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// The saved record is not valid JSON.
    #[error("failed to parse saved state: {0}")]
    Parse(#[source] serde_json::Error),
    /// The saved record is valid JSON but not an object.
    #[error("saved state is not a JSON object")]
    NotAnObject,
    /// The in-memory state could not be serialized.
    #[error("failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}
