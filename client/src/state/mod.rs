//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`background`, `shell`, `toast`, ...) and tied
//! together by the [`dashboard::Dashboard`] controller, which components share
//! through a single context signal. None of it depends on the browser.

pub mod background;
pub mod config;
pub mod dashboard;
pub mod shell;
pub mod toast;
pub mod widgets;
