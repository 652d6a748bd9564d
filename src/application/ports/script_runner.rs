//! Script execution port interface

use thiserror::Error;

/// Script execution errors
#[derive(Debug, Clone, Error)]
pub enum ScriptError {
    #[error("osascript not found")]
    InterpreterNotFound,

    #[error("Failed to write notification icon: {0}")]
    IconWrite(String),

    #[error("Script failed: {0}")]
    RunFailed(String),
}

/// Port for handing generated script text to the system for execution
pub trait ScriptRunner {
    /// Run a script to completion.
    ///
    /// # Arguments
    /// * `script` - The complete script source
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    fn run(&self, script: &str) -> Result<(), ScriptError>;
}
