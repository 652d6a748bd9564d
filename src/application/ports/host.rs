//! Host application collaborators
//!
//! The dispatcher borrows these from the enclosing application; it never
//! owns them and never outlives them.

use crate::domain::notification::Severity;

/// Built-in icon classes of a tray balloon message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageIcon {
    NoIcon,
    Information,
    Warning,
    Critical,
}

impl MessageIcon {
    /// Icon class for a severity
    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::None => Self::NoIcon,
            Severity::Information => Self::Information,
            Severity::Warning => Self::Warning,
            Severity::Critical => Self::Critical,
        }
    }
}

/// A tray icon owned by the host application
pub trait TrayIcon {
    /// Whether the tray can show balloon messages at all
    fn supports_messages(&self) -> bool;

    /// Show a balloon message. Delivery is not acknowledged.
    ///
    /// # Arguments
    /// * `title` - The message title
    /// * `body` - The message text
    /// * `icon` - The built-in icon class
    /// * `timeout_ms` - Display duration hint in milliseconds
    fn show_message(&self, title: &str, body: &str, icon: MessageIcon, timeout_ms: i32);
}

/// A window able to present a modal alert
pub trait HostWindow {
    /// Show a critical alert with a single acknowledgment button.
    ///
    /// Blocks until the user dismisses it.
    fn show_critical(&self, title: &str, body: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_icon_per_severity() {
        assert_eq!(MessageIcon::for_severity(Severity::None), MessageIcon::NoIcon);
        assert_eq!(
            MessageIcon::for_severity(Severity::Information),
            MessageIcon::Information
        );
        assert_eq!(MessageIcon::for_severity(Severity::Warning), MessageIcon::Warning);
        assert_eq!(MessageIcon::for_severity(Severity::Critical), MessageIcon::Critical);
    }
}
