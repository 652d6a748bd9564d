//! Notification domain module

mod mode;
mod request;
mod severity;

pub use mode::{Mode, ThirdPartyVariant, THIRD_PARTY_BUNDLED_SUFFIX, THIRD_PARTY_BUNDLE_ID};
pub use request::{NotificationRequest, DEFAULT_TIMEOUT_MS};
pub use severity::{Severity, ALL_SEVERITIES};
