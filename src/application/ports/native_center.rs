//! Native notification center port interface

use thiserror::Error;

/// Native notification center errors
#[derive(Debug, Clone, Error)]
pub enum NativeCenterError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for the OS notification center.
///
/// Icons are never transmitted; the OS shows the application's own icon.
pub trait NativeCenter {
    fn show(&self, title: &str, body: &str) -> Result<(), NativeCenterError>;
}
