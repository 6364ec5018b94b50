//! Transient notification text.
//!
//! Every message bumps a generation counter. The view schedules a hide timer
//! per message and passes the generation it saw to [`Toast::expire`], so a
//! timer from an earlier message cannot hide a newer one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use canvas::notify::Notifier;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    message: String,
    visible: bool,
    generation: u64,
}

impl Toast {
    /// Show `message`, replacing any current one. Returns the new generation.
    pub fn show(&mut self, message: &str) -> u64 {
        message.clone_into(&mut self.message);
        self.visible = true;
        self.generation += 1;
        log::debug!("toast #{}: {message}", self.generation);
        self.generation
    }

    /// Hide the toast if `generation` is still the latest message.
    ///
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Notifier for Toast {
    fn notify(&mut self, message: &str) {
        self.show(message);
    }
}
