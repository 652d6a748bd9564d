//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::notification::{Severity, DEFAULT_TIMEOUT_MS};

/// Default application name announced to notification backends
pub const DEFAULT_APP_NAME: &str = "Notificator";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub timeout_ms: Option<i32>,
    pub severity: Option<String>,
    pub icon: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            severity: Some(Severity::Information.to_string()),
            icon: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            severity: other.severity.or(self.severity),
            icon: other.icon.or(self.icon),
        }
    }

    /// Get app name, or the default if not set/empty
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get timeout, or the default if not set
    pub fn timeout_ms_or_default(&self) -> i32 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    /// Get severity as parsed Severity, or Information if not set/invalid
    pub fn severity_or_default(&self) -> Severity {
        self.severity
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Severity::Information)
    }

    /// Get the default icon path, if any
    pub fn icon_path(&self) -> Option<PathBuf> {
        self.icon
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}
