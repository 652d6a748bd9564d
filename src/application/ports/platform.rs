//! Platform capability port interface

use super::desktop_bus::DesktopBus;
use super::host::HostWindow;
use super::native_center::NativeCenter;
use super::script_runner::ScriptRunner;

/// An application resolved by the OS for a document type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApp {
    /// Bundle identifier, e.g. `com.Growl.GrowlHelperApp`
    pub bundle_id: String,
    /// Install location as a URL string
    pub path: String,
}

/// Port for the notification mechanisms the host OS offers.
///
/// Every probe reports absence as `None`; none of them may fail loudly.
pub trait Platform {
    /// Open a connection to the desktop notification service if one is
    /// reachable. The returned handle stays open until dropped.
    fn connect_desktop_bus(&self) -> Option<Box<dyn DesktopBus>>;

    /// The OS notification center, if the OS offers one
    fn native_center(&self) -> Option<Box<dyn NativeCenter>>;

    /// The application registered for the third-party notifier's marker
    /// file type, if any
    fn locate_third_party(&self) -> Option<ResolvedApp>;

    /// Runner for generated notifier scripts
    fn script_runner(&self) -> Box<dyn ScriptRunner>;

    /// Parentless modal alert used when the host supplied no window
    fn alert_dialog(&self) -> Box<dyn HostWindow>;
}
