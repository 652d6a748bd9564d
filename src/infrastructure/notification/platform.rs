//! Platform capability probes
//!
//! Each probe is compiled only where its mechanism can exist; elsewhere it
//! reports absence.

use crate::application::ports::{
    DesktopBus, HostWindow, NativeCenter, Platform, ResolvedApp, ScriptRunner,
};

use crate::application::backends::third_party::escape_script_string;

use super::alert::SystemAlert;
use super::osascript::OsaScriptRunner;

/// Document type the third-party notifier registers itself for
pub const MARKER_EXTENSION: &str = "growlTicket";

/// The host OS's notification mechanisms
pub struct SystemPlatform;

impl SystemPlatform {
    /// Create the platform probes
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SystemPlatform {
    fn connect_desktop_bus(&self) -> Option<Box<dyn DesktopBus>> {
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            match super::zbus_bus::ZbusDesktopBus::connect() {
                Ok(bus) => return Some(Box::new(bus)),
                Err(e) => {
                    tracing::debug!(error = %e, "desktop notification service not available")
                }
            }
        }

        None
    }

    fn native_center(&self) -> Option<Box<dyn NativeCenter>> {
        #[cfg(target_os = "macos")]
        {
            let version = std::process::Command::new("sw_vers")
                .arg("-productVersion")
                .output()
                .ok()
                .filter(|out| out.status.success())
                .map(|out| String::from_utf8_lossy(&out.stdout).into_owned());

            match version {
                Some(v) if version_has_notification_center(&v) => {
                    return Some(Box::new(super::notify_rust::NotifyRustCenter::new()));
                }
                other => tracing::debug!(version = ?other, "no user notification center"),
            }
        }

        None
    }

    fn locate_third_party(&self) -> Option<ResolvedApp> {
        #[cfg(target_os = "macos")]
        {
            let marker = tempfile::Builder::new()
                .prefix("notificator-")
                .suffix(&format!(".{}", MARKER_EXTENSION))
                .tempfile()
                .ok()?;

            let script = locate_handler_script(&marker.path().to_string_lossy());
            match OsaScriptRunner::javascript().output(&script) {
                Ok(out) => return parse_resolved_app(&out),
                Err(e) => tracing::debug!(error = %e, "third-party notifier lookup failed"),
            }
        }

        None
    }

    fn script_runner(&self) -> Box<dyn ScriptRunner> {
        Box::new(OsaScriptRunner::new())
    }

    fn alert_dialog(&self) -> Box<dyn HostWindow> {
        Box::new(SystemAlert::new())
    }
}

/// Whether a `sw_vers -productVersion` string names an OS with the user
/// notification center (10.8 and later)
pub fn version_has_notification_center(version: &str) -> bool {
    let mut parts = version.trim().split('.').map(|p| p.parse::<u32>().ok());
    match (parts.next().flatten(), parts.next().flatten().unwrap_or(0)) {
        (Some(major), minor) => (major, minor) >= (10, 8),
        (None, _) => false,
    }
}

/// JXA asking Launch Services which application opens `marker_path`.
///
/// Prints the handler's bundle identifier and URL on two lines, or nothing.
pub fn locate_handler_script(marker_path: &str) -> String {
    format!(
        concat!(
            "ObjC.import('AppKit');\n",
            "var url = $.NSWorkspace.sharedWorkspace.URLForApplicationToOpenURL(",
            "$.NSURL.fileURLWithPath(\"{}\"));\n",
            "if (url.isNil()) {{\n",
            "  '';\n",
            "}} else {{\n",
            "  var bundle = $.NSBundle.bundleWithURL(url);\n",
            "  var id = bundle.isNil() ? '' : ObjC.unwrap(bundle.bundleIdentifier);\n",
            "  id + '\\n' + ObjC.unwrap(url.absoluteString);\n",
            "}}"
        ),
        escape_script_string(marker_path)
    )
}

/// Parse the two-line `bundle id` / `url` answer of the handler lookup
pub fn parse_resolved_app(output: &str) -> Option<ResolvedApp> {
    let mut lines = output.lines().map(str::trim);
    let bundle_id = lines.next().filter(|s| !s.is_empty())?;
    let path = lines.next().filter(|s| !s.is_empty())?;

    Some(ResolvedApp {
        bundle_id: bundle_id.to_string(),
        path: path.to_string(),
    })
}
