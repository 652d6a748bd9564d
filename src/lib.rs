//! Notificator - cross-platform desktop notification dispatcher
//!
//! A host application hands a [`Notificator`] its tray icon and parent
//! window (both optional). At construction the dispatcher probes the
//! platform once and commits to one backend, most preferred first:
//!
//! 1. the macOS user notification center, or else the Growl notifier
//!    driven through AppleScript,
//! 2. the freedesktop notification service on the session bus,
//! 3. the host's tray icon balloon.
//!
//! With none of them available, critical notifications fall back to a
//! blocking modal alert and everything else is dropped.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Severity, mode, icon encoding, configuration and errors
//! - **Application**: The dispatcher, backend selection and port interfaces
//! - **Infrastructure**: Adapter implementations (zbus, notify-rust, osascript, dialogs)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::ports::{HostWindow, MessageIcon, Platform, TrayIcon};
pub use application::Notificator;
pub use domain::{Mode, NotificationRequest, Severity};
pub use infrastructure::create_notificator;
