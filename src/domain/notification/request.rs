//! Notification request value object

use image::DynamicImage;

use super::Severity;

/// Default display duration (10 seconds)
pub const DEFAULT_TIMEOUT_MS: i32 = 10_000;

/// A single notification as the host application describes it.
///
/// Consumed synchronously by the dispatcher and never retained.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub severity: Severity,
    pub title: String,
    pub body: String,
    pub icon: Option<DynamicImage>,
    pub timeout_ms: i32,
}

impl NotificationRequest {
    /// Create a request with no icon and the default timeout
    pub fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
            icon: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Attach an icon
    pub fn with_icon(mut self, icon: DynamicImage) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Override the display duration
    pub fn with_timeout_ms(mut self, timeout_ms: i32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
