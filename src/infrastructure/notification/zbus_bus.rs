//! Desktop notification bus adapter using zbus
//!
//! Talks to `org.freedesktop.Notifications` on the session bus.

use std::collections::HashMap;

use zbus::blocking::fdo::DBusProxy;
use zbus::blocking::{Connection, Proxy};
use zbus::names::BusName;
use zbus::zvariant::{Structure, Value};

use crate::application::ports::desktop_bus::{
    ICON_DATA_HINT, NOTIFICATIONS_INTERFACE, NOTIFICATIONS_PATH, NOTIFICATIONS_SERVICE,
    NOTIFY_METHOD,
};
use crate::application::ports::{DesktopBus, DesktopBusError, NotifyCall};
use crate::domain::icon::EncodedImage;

/// Open session-bus connection to the notification service.
///
/// The connection lives as long as this value.
pub struct ZbusDesktopBus {
    proxy: Proxy<'static>,
}

impl ZbusDesktopBus {
    /// Connect to the session bus and check that the notification service
    /// is running or can be activated
    pub fn connect() -> Result<Self, DesktopBusError> {
        let unavailable = |e: zbus::Error| DesktopBusError::Unavailable(e.to_string());

        let connection = Connection::session().map_err(unavailable)?;
        let dbus = DBusProxy::new(&connection).map_err(unavailable)?;
        let service = BusName::try_from(NOTIFICATIONS_SERVICE)
            .map_err(|e| DesktopBusError::Unavailable(e.to_string()))?;

        let running = dbus
            .name_has_owner(service)
            .map_err(|e| DesktopBusError::Unavailable(e.to_string()))?;
        if !running {
            let activatable = dbus
                .list_activatable_names()
                .map_err(|e| DesktopBusError::Unavailable(e.to_string()))?;
            if !activatable
                .iter()
                .any(|name| name.as_str() == NOTIFICATIONS_SERVICE)
            {
                return Err(DesktopBusError::Unavailable(format!(
                    "{} is not registered",
                    NOTIFICATIONS_SERVICE
                )));
            }
        }

        let proxy = Proxy::new(
            &connection,
            NOTIFICATIONS_SERVICE,
            NOTIFICATIONS_PATH,
            NOTIFICATIONS_INTERFACE,
        )
        .map_err(unavailable)?;

        Ok(Self { proxy })
    }
}

impl DesktopBus for ZbusDesktopBus {
    fn notify(&self, call: &NotifyCall) -> Result<(), DesktopBusError> {
        let actions: Vec<&str> = call.actions.iter().map(String::as_str).collect();
        let mut hints: HashMap<&str, Value<'_>> = HashMap::new();
        hints.insert(ICON_DATA_HINT, icon_value(&call.icon_data));

        // Signature susssasa{sv}i, sent with NO_REPLY_EXPECTED
        self.proxy
            .call_noreply(
                NOTIFY_METHOD,
                &(
                    call.app_name.as_str(),
                    call.replaces_id,
                    call.app_icon.as_str(),
                    call.summary.as_str(),
                    call.body.as_str(),
                    actions,
                    hints,
                    call.expire_timeout,
                ),
            )
            .map_err(|e| DesktopBusError::SendFailed(e.to_string()))
    }
}

/// Pack an encoded image as an `(iiibiiay)` structure
fn icon_value(image: &EncodedImage) -> Value<'static> {
    Value::from(Structure::from(image.clone().into_fields()))
}
