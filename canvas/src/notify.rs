//! The notification capability handed to canvas operations.
//!
//! Callers pass whatever surfaces messages to the user (a toast, a log); code
//! that has nothing to show passes [`NoopNotifier`].

/// Receives short user-facing status messages.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _message: &str) {}
}

/// Collects messages in order.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}
