//! Notification dispatcher

use image::DynamicImage;
use tracing::{debug, warn};

use crate::application::backends::{desktop, native, third_party, tray};
use crate::application::ports::{HostWindow, Platform, TrayIcon};
use crate::application::selector::{select_backend, Backend};
use crate::domain::notification::{Mode, NotificationRequest, Severity};

/// Dispatches notifications to the backend chosen at construction.
///
/// The backend (and therefore [`Mode`]) is fixed for the lifetime of the
/// value. The tray icon and parent window are borrowed from the host and
/// must outlive the dispatcher. A desktop bus connection, if one was
/// opened, is closed when the dispatcher drops.
pub struct Notificator<'a> {
    app_name: String,
    parent: Option<&'a dyn HostWindow>,
    fallback_alert: Box<dyn HostWindow>,
    backend: Backend<'a>,
}

impl<'a> Notificator<'a> {
    /// Probe `platform` and commit to the best available backend
    ///
    /// # Arguments
    /// * `app_name` - Name announced to the notification services
    /// * `tray` - The host's tray icon, if it has one
    /// * `parent` - Window that owns the critical alert fallback
    /// * `platform` - Source of the platform mechanisms
    pub fn with_platform(
        app_name: impl Into<String>,
        tray: Option<&'a dyn TrayIcon>,
        parent: Option<&'a dyn HostWindow>,
        platform: &dyn Platform,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            parent,
            fallback_alert: platform.alert_dialog(),
            backend: select_backend(tray, platform),
        }
    }

    /// The backend committed to at construction
    pub fn mode(&self) -> Mode {
        self.backend.mode()
    }

    /// Application name announced to the backends
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Show a notification.
    ///
    /// Never fails. With no backend, critical notifications fall back to a
    /// blocking modal alert and everything else is dropped.
    ///
    /// # Arguments
    /// * `severity` - Classification; picks the default icon
    /// * `title` - The notification title
    /// * `body` - The notification text
    /// * `icon` - Optional icon; backends without icon support ignore it
    /// * `timeout_ms` - Display duration hint in milliseconds
    pub fn notify(
        &self,
        severity: Severity,
        title: &str,
        body: &str,
        icon: Option<&DynamicImage>,
        timeout_ms: i32,
    ) {
        match &self.backend {
            Backend::DesktopService(bus) => desktop::render(
                bus.as_ref(),
                &self.app_name,
                severity,
                title,
                body,
                icon,
                timeout_ms,
            ),
            Backend::TrayBalloon(tray_icon) => {
                tray::render(*tray_icon, severity, title, body, timeout_ms)
            }
            Backend::NativeCenter(center) => native::render(center.as_ref(), title, body),
            Backend::ThirdParty { variant, runner } => third_party::render(
                runner.as_ref(),
                *variant,
                &self.app_name,
                severity,
                title,
                body,
                icon,
            ),
            Backend::None if severity.is_critical() => self.alert(title, body),
            Backend::None => debug!(%severity, "no notification backend, dropping"),
        }
    }

    /// Show a prepared request
    pub fn notify_request(&self, request: &NotificationRequest) {
        self.notify(
            request.severity,
            &request.title,
            &request.body,
            request.icon.as_ref(),
            request.timeout_ms,
        );
    }

    fn alert(&self, title: &str, body: &str) {
        warn!(title, "no notification backend, showing critical alert");
        match self.parent {
            Some(window) => window.show_critical(title, body),
            None => self.fallback_alert.show_critical(title, body),
        }
    }
}
