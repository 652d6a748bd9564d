//! Domain error types

use thiserror::Error;

/// Error when parsing a severity string
#[derive(Debug, Clone, Error)]
#[error("Invalid severity: \"{input}\". Valid severities are: none, information, warning, critical")]
pub struct SeverityParseError {
    pub input: String,
}

/// Error when wire fields do not describe a valid encoded image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageDecodeError {
    #[error("Negative image dimensions: {width}x{height}")]
    NegativeDimensions { width: i32, height: i32 },

    #[error("Unsupported layout: {channels} channels at {bits_per_sample} bits per sample")]
    UnsupportedLayout { channels: i32, bits_per_sample: i32 },

    #[error("Row stride {row_stride} does not match width {width}")]
    StrideMismatch { width: i32, row_stride: i32 },

    #[error("Expected {expected} bytes of pixel data, got {actual}")]
    LengthMismatch { expected: i64, actual: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
