//! Sidebar chrome: the sticker tray that slides in from the left.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use canvas::notify::Notifier;

/// Width of the sticker tray in CSS pixels.
pub const SIDEBAR_WIDTH_PX: u32 = 240;

/// Step of the first-load sidebar demonstration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnboardingStep {
    /// Open the tray (if closed).
    Reveal,
    /// Close the tray (if open).
    Hide,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shell {
    sidebar_open: bool,
}

impl Shell {
    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Flip the tray. Opening announces itself.
    pub fn toggle_sidebar(&mut self, notifier: &mut dyn Notifier) -> bool {
        self.sidebar_open = !self.sidebar_open;
        if self.sidebar_open {
            notifier.notify("Sticker tray opened");
        }
        self.sidebar_open
    }

    /// Apply one onboarding step. Returns whether the tray changed.
    pub fn onboarding(&mut self, step: OnboardingStep, notifier: &mut dyn Notifier) -> bool {
        let wanted_open = step == OnboardingStep::Reveal;
        if self.sidebar_open == wanted_open {
            return false;
        }
        self.toggle_sidebar(notifier);
        true
    }

    /// CSS `left` of the tray.
    #[must_use]
    pub fn sidebar_left(&self) -> String {
        if self.sidebar_open { "0".to_owned() } else { format!("-{SIDEBAR_WIDTH_PX}px") }
    }

    /// CSS `margin-left` of the main content.
    #[must_use]
    pub fn content_margin(&self) -> String {
        if self.sidebar_open { format!("{SIDEBAR_WIDTH_PX}px") } else { "0".to_owned() }
    }

    /// Font Awesome class list for the toggle button icon.
    #[must_use]
    pub fn toggle_icon(&self) -> &'static str {
        if self.sidebar_open { "fas fa-chevron-left" } else { "fas fa-chevron-right" }
    }
}
