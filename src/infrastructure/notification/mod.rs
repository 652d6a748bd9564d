//! Notification infrastructure module
//!
//! Concrete platform mechanisms behind the application ports: the desktop
//! bus (zbus), the user notification center (notify-rust), osascript for
//! the third-party notifier, and dialog tools for the critical alert.

mod alert;
mod osascript;
mod platform;

#[cfg(target_os = "macos")]
mod notify_rust;
#[cfg(all(unix, not(target_os = "macos")))]
mod zbus_bus;

pub use alert::SystemAlert;
pub use osascript::OsaScriptRunner;
pub use platform::{
    locate_handler_script, parse_resolved_app, version_has_notification_center, SystemPlatform,
    MARKER_EXTENSION,
};

#[cfg(target_os = "macos")]
pub use self::notify_rust::NotifyRustCenter;
#[cfg(all(unix, not(target_os = "macos")))]
pub use zbus_bus::ZbusDesktopBus;

use crate::application::ports::{HostWindow, TrayIcon};
use crate::application::Notificator;

/// Create a dispatcher backed by the host OS's notification mechanisms
///
/// Probes run once here; the chosen backend stays fixed afterwards.
pub fn create_notificator<'a>(
    app_name: impl Into<String>,
    tray: Option<&'a dyn TrayIcon>,
    parent: Option<&'a dyn HostWindow>,
) -> Notificator<'a> {
    Notificator::with_platform(app_name, tray, parent, &SystemPlatform::new())
}
