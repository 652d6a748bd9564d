//! Tray balloon backend

use crate::application::ports::{MessageIcon, TrayIcon};
use crate::domain::notification::Severity;

/// Show a balloon on the host's tray icon.
///
/// Caller icons are ignored; the tray only knows its built-in classes.
pub fn render(tray: &dyn TrayIcon, severity: Severity, title: &str, body: &str, timeout_ms: i32) {
    tray.show_message(title, body, MessageIcon::for_severity(severity), timeout_ms);
}
