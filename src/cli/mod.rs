//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{init_logging, run_probe, run_send, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, SendArgs, SeverityArg};
pub use presenter::Presenter;
