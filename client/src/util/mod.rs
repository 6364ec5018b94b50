//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so those stay testable without a browser.

pub mod dom;
pub mod file_reader;
pub mod local_storage;
