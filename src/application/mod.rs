//! Application layer - Dispatcher, backend selection and port interfaces
//!
//! Contains the notification use case and trait definitions
//! for the platform mechanisms it drives.

pub mod backends;
pub mod notificator;
pub mod ports;
pub mod selector;

// Re-export the dispatcher
pub use notificator::Notificator;
pub use selector::{select_backend, Backend};
