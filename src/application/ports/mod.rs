//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod desktop_bus;
pub mod host;
pub mod native_center;
pub mod platform;
pub mod script_runner;

// Re-export common types
pub use config::ConfigStore;
pub use desktop_bus::{DesktopBus, DesktopBusError, NotifyCall};
pub use host::{HostWindow, MessageIcon, TrayIcon};
pub use native_center::{NativeCenter, NativeCenterError};
pub use platform::{Platform, ResolvedApp};
pub use script_runner::{ScriptError, ScriptRunner};
