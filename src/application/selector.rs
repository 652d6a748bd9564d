//! Capability probing and backend selection

use tracing::{debug, info};

use crate::application::ports::{DesktopBus, NativeCenter, Platform, ScriptRunner, TrayIcon};
use crate::domain::notification::{Mode, ThirdPartyVariant};

/// The committed backend together with whatever handle it needs
pub enum Backend<'a> {
    None,
    TrayBalloon(&'a dyn TrayIcon),
    DesktopService(Box<dyn DesktopBus>),
    NativeCenter(Box<dyn NativeCenter>),
    ThirdParty {
        variant: ThirdPartyVariant,
        runner: Box<dyn ScriptRunner>,
    },
}

impl Backend<'_> {
    /// The mode this backend represents
    pub fn mode(&self) -> Mode {
        match self {
            Self::None => Mode::None,
            Self::TrayBalloon(_) => Mode::TrayBalloon,
            Self::DesktopService(_) => Mode::DesktopService,
            Self::NativeCenter(_) => Mode::NativeCenter,
            Self::ThirdParty { variant, .. } => variant.mode(),
        }
    }
}

/// Probe the available mechanisms and commit to one.
///
/// Priority, lowest first: tray balloon, desktop service, then either the
/// native center or the third-party notifier. A later match replaces an
/// earlier one. Probes report absence as `None`, so this never fails.
pub fn select_backend<'a>(tray: Option<&'a dyn TrayIcon>, platform: &dyn Platform) -> Backend<'a> {
    let mut backend = Backend::None;

    match tray {
        Some(tray) if tray.supports_messages() => backend = Backend::TrayBalloon(tray),
        Some(_) => debug!("tray icon cannot show messages"),
        None => debug!("no tray icon supplied"),
    }

    if let Some(bus) = platform.connect_desktop_bus() {
        backend = Backend::DesktopService(bus);
    }

    if let Some(center) = platform.native_center() {
        backend = Backend::NativeCenter(center);
    } else if let Some(app) = platform.locate_third_party() {
        match ThirdPartyVariant::classify(&app.bundle_id, &app.path) {
            Some(variant) => {
                backend = Backend::ThirdParty {
                    variant,
                    runner: platform.script_runner(),
                }
            }
            None => debug!(bundle_id = %app.bundle_id, "marker type handled by unknown application"),
        }
    }

    info!(mode = %backend.mode(), "notification backend selected");
    backend
}
