//! Domain layer - Core notification model
//!
//! Contains value objects, the icon encoder and domain errors.
//! This layer has no dependencies on platform services.

pub mod config;
pub mod error;
pub mod icon;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use icon::{EncodedImage, StandardIcon};
pub use notification::{Mode, NotificationRequest, Severity, ThirdPartyVariant};
