//! Native notification center adapter using notify-rust
//!
//! Only built on macOS, where notify-rust talks to the user notification
//! center.

use crate::application::ports::{NativeCenter, NativeCenterError};

/// User notification center backed by notify-rust
pub struct NotifyRustCenter;

impl NotifyRustCenter {
    /// Create a notification center handle
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotifyRustCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeCenter for NotifyRustCenter {
    fn show(&self, title: &str, body: &str) -> Result<(), NativeCenterError> {
        notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .show()
            .map(|_| ())
            .map_err(|e| NativeCenterError::SendFailed(e.to_string()))
    }
}
