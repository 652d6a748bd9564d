//! Severity value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SeverityParseError;

/// All severities, neutral first
pub const ALL_SEVERITIES: &[Severity] = &[
    Severity::None,
    Severity::Information,
    Severity::Warning,
    Severity::Critical,
];

/// Classification of a notification.
///
/// Drives the default iconography when the caller supplies no icon, and
/// decides whether a notification may be dropped when no backend exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral class for callers that supply none
    #[default]
    None,
    Information,
    Warning,
    Critical,
}

impl Severity {
    /// Get the string identifier for this severity
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Whether this notification must never be silently dropped
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "default" => Ok(Self::None),
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "critical" | "error" => Ok(Self::Critical),
            _ => Err(SeverityParseError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
