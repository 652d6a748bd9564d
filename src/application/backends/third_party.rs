//! Third-party notifier (Growl) backend
//!
//! Notifications are raised by generating an AppleScript that registers the
//! application with the notifier and then fires a single notification type.

use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::application::ports::{ScriptError, ScriptRunner};
use crate::domain::icon::{icon_or_default, StandardIcon, THIRD_PARTY_ICON_SIZE};
use crate::domain::notification::{Severity, ThirdPartyVariant};

/// The one notification type registered with the notifier
pub const NOTIFICATION_TYPE: &str = "Notification";

/// Name announced when the host application has none
pub const FALLBACK_APP_NAME: &str = "Application";

/// Escape text for interpolation inside an AppleScript string literal
pub fn escape_script_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Generate the register-and-notify script.
///
/// `icon_path` is referenced as a `file://` location when present; the image
/// clause is left out entirely otherwise.
pub fn build_script(
    variant: ThirdPartyVariant,
    app_name: &str,
    title: &str,
    body: &str,
    icon_path: Option<&str>,
) -> String {
    let app_name = if app_name.is_empty() {
        FALLBACK_APP_NAME
    } else {
        app_name
    };
    let app_name = escape_script_string(app_name);
    let image_clause = icon_path
        .map(|path| format!(" image from location \"file://{}\"", escape_script_string(path)))
        .unwrap_or_default();

    format!(
        concat!(
            "tell application \"{target}\"\n",
            "  set the allNotificationsList to {{\"{kind}\"}}\n",
            "  set the enabledNotificationsList to {{\"{kind}\"}}\n",
            "  register as application \"{app}\" all notifications allNotificationsList default notifications enabledNotificationsList\n",
            "  notify with name \"{kind}\" title \"{title}\" description \"{body}\" application name \"{app}\"{image}\n",
            "end tell"
        ),
        target = variant.target_application(),
        kind = NOTIFICATION_TYPE,
        app = app_name,
        title = escape_script_string(title),
        body = escape_script_string(body),
        image = image_clause,
    )
}

/// Write an icon to a temporary PNG file.
///
/// The file is removed when the returned handle drops.
pub fn write_icon_file(icon: &DynamicImage) -> Result<NamedTempFile, ScriptError> {
    let mut png = Cursor::new(Vec::new());
    icon.write_to(&mut png, ImageFormat::Png)
        .map_err(|e| ScriptError::IconWrite(e.to_string()))?;

    let mut file = tempfile::Builder::new()
        .prefix("notificator-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| ScriptError::IconWrite(e.to_string()))?;
    file.write_all(png.get_ref())
        .and_then(|_| file.flush())
        .map_err(|e| ScriptError::IconWrite(e.to_string()))?;

    Ok(file)
}

/// Raise a notification through the third-party notifier.
///
/// The script run is awaited so the temporary icon file is still on disk
/// while the notifier reads it.
pub fn render(
    runner: &dyn ScriptRunner,
    variant: ThirdPartyVariant,
    app_name: &str,
    severity: Severity,
    title: &str,
    body: &str,
    icon: Option<&DynamicImage>,
) {
    let icon = icon_or_default(icon, StandardIcon::for_severity(severity), THIRD_PARTY_ICON_SIZE);
    let icon_file = match write_icon_file(&icon) {
        Ok(file) => Some(file),
        Err(e) => {
            debug!(error = %e, "sending notification without image");
            None
        }
    };
    let icon_path = icon_file
        .as_ref()
        .map(|file| file.path().to_string_lossy().into_owned());

    let script = build_script(variant, app_name, title, body, icon_path.as_deref());
    if let Err(e) = runner.run(&script) {
        warn!(error = %e, "third-party notification not delivered");
    }

    drop(icon_file);
}
