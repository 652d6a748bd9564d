//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the session bus, osascript and the filesystem.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notificator, OsaScriptRunner, SystemAlert, SystemPlatform};
