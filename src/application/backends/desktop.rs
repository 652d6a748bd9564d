//! Desktop notification service backend

use image::DynamicImage;
use tracing::{debug, warn};

use crate::application::ports::{DesktopBus, NotifyCall};
use crate::domain::icon::{icon_or_default, EncodedImage, StandardIcon, DESKTOP_ICON_SIZE};
use crate::domain::notification::Severity;

/// Build the `Notify` arguments for one notification.
///
/// The replaces-id is always zero: every call raises a new notification.
pub fn build_call(
    app_name: &str,
    severity: Severity,
    title: &str,
    body: &str,
    icon: Option<&DynamicImage>,
    timeout_ms: i32,
) -> NotifyCall {
    let icon = icon_or_default(icon, StandardIcon::for_severity(severity), DESKTOP_ICON_SIZE);

    NotifyCall {
        app_name: app_name.to_string(),
        replaces_id: 0,
        app_icon: String::new(),
        summary: title.to_string(),
        body: body.to_string(),
        actions: Vec::new(),
        icon_data: EncodedImage::encode(&icon),
        expire_timeout: timeout_ms,
    }
}

/// Fire a notification at the desktop service. Failures are logged only.
pub fn render(
    bus: &dyn DesktopBus,
    app_name: &str,
    severity: Severity,
    title: &str,
    body: &str,
    icon: Option<&DynamicImage>,
    timeout_ms: i32,
) {
    let call = build_call(app_name, severity, title, body, icon, timeout_ms);
    debug!(
        summary = %call.summary,
        icon_width = call.icon_data.width,
        icon_height = call.icon_data.height,
        "sending Notify"
    );

    if let Err(e) = bus.notify(&call) {
        warn!(error = %e, "desktop notification not delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::DesktopBusError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBus {
        calls: RefCell<Vec<NotifyCall>>,
        fail: bool,
    }

    impl DesktopBus for RecordingBus {
        fn notify(&self, call: &NotifyCall) -> Result<(), DesktopBusError> {
            self.calls.borrow_mut().push(call.clone());
            if self.fail {
                Err(DesktopBusError::SendFailed("no reply".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn call_fields_follow_protocol() {
        let call = build_call("Wallet", Severity::Information, "Title", "Body", None, 7000);
        assert_eq!(call.app_name, "Wallet");
        assert_eq!(call.replaces_id, 0);
        assert!(call.app_icon.is_empty());
        assert_eq!(call.summary, "Title");
        assert_eq!(call.body, "Body");
        assert!(call.actions.is_empty());
        assert_eq!(call.expire_timeout, 7000);
    }

    #[test]
    fn missing_icon_sends_severity_default() {
        let call = build_call("App", Severity::Critical, "t", "b", None, 0);
        let expected = EncodedImage::encode(&StandardIcon::Error.render(DESKTOP_ICON_SIZE));
        assert_eq!(call.icon_data, expected);
        assert_eq!(call.icon_data.width, 128);
    }

    #[test]
    fn supplied_icon_is_encoded() {
        let icon = DynamicImage::new_rgba8(4, 2);
        let call = build_call("App", Severity::Critical, "t", "b", Some(&icon), 0);
        assert_eq!(call.icon_data, EncodedImage::encode(&icon));
    }

    #[test]
    fn oversized_icon_is_scaled_down() {
        let icon = DynamicImage::new_rgba8(256, 256);
        let call = build_call("App", Severity::None, "t", "b", Some(&icon), 0);
        assert_eq!((call.icon_data.width, call.icon_data.height), (128, 128));
    }

    #[test]
    fn send_failure_is_swallowed() {
        let bus = RecordingBus {
            fail: true,
            ..Default::default()
        };
        render(&bus, "App", Severity::Warning, "t", "b", None, 1000);
        assert_eq!(bus.calls.borrow().len(), 1);
    }
}
