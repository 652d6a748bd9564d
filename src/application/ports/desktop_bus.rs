//! Desktop notification bus port interface

use thiserror::Error;

use crate::domain::icon::EncodedImage;

/// Well-known bus name of the notification service
pub const NOTIFICATIONS_SERVICE: &str = "org.freedesktop.Notifications";

/// Object path of the notification service
pub const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";

/// Interface implemented by the notification service
pub const NOTIFICATIONS_INTERFACE: &str = "org.freedesktop.Notifications";

/// Remote method raising a notification
pub const NOTIFY_METHOD: &str = "Notify";

/// Hint key carrying raw icon pixels
pub const ICON_DATA_HINT: &str = "icon_data";

/// Desktop bus errors
#[derive(Debug, Clone, Error)]
pub enum DesktopBusError {
    #[error("Notification service unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to send notification: {0}")]
    SendFailed(String),
}

/// Arguments of a `Notify` call, in wire order.
///
/// `icon_data` travels in the hints map under [`ICON_DATA_HINT`].
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyCall {
    pub app_name: String,
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub icon_data: EncodedImage,
    pub expire_timeout: i32,
}

/// Port for an open connection to the notification service
pub trait DesktopBus {
    /// Send a `Notify` call without waiting for the reply.
    ///
    /// # Returns
    /// Ok(()) once the message is queued, error otherwise
    fn notify(&self, call: &NotifyCall) -> Result<(), DesktopBusError>;
}
