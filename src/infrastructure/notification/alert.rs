//! Parentless critical alert dialog
//!
//! Used when the host supplied no window and no notification backend exists.
//! Each candidate is a desktop dialog tool that blocks until dismissed.

use std::process::{Command, Stdio};

use tracing::{debug, error};

#[cfg(target_os = "macos")]
use crate::application::backends::third_party::escape_script_string;
use crate::application::ports::HostWindow;

/// Modal error dialog shown through the platform's dialog tools
pub struct SystemAlert;

impl SystemAlert {
    /// Create a new system alert
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemAlert {
    fn default() -> Self {
        Self::new()
    }
}

impl HostWindow for SystemAlert {
    fn show_critical(&self, title: &str, body: &str) {
        if run_first_successful(alert_commands(title, body)) {
            return;
        }

        error!(title, body, "critical notification could not be displayed");
        eprintln!("{}: {}", title, body);
    }
}

/// Run candidates in order until one exits successfully.
///
/// A tool that is missing, or that exits non-zero (no display, refused),
/// counts as not having shown the dialog.
fn run_first_successful(commands: Vec<Command>) -> bool {
    for mut command in commands {
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => return true,
            Ok(status) => {
                debug!(program = ?command.get_program(), %status, "alert tool failed")
            }
            Err(e) => debug!(program = ?command.get_program(), error = %e, "alert tool unavailable"),
        }
    }

    false
}

/// Candidate dialog commands, most preferred first
#[cfg(target_os = "macos")]
fn alert_commands(title: &str, body: &str) -> Vec<Command> {
    let script = format!(
        "display alert \"{}\" message \"{}\" as critical buttons {{\"OK\"}} default button \"OK\"",
        escape_script_string(title),
        escape_script_string(body)
    );
    let mut osascript = Command::new("osascript");
    osascript.args(["-e", &script]);
    vec![osascript]
}

#[cfg(windows)]
fn alert_commands(title: &str, body: &str) -> Vec<Command> {
    // Text travels through the environment so no PowerShell quoting is needed
    let mut powershell = Command::new("powershell");
    powershell
        .args([
            "-NoProfile",
            "-Command",
            "Add-Type -AssemblyName PresentationFramework; \
             [void][System.Windows.MessageBox]::Show($env:NOTIFICATOR_BODY, $env:NOTIFICATOR_TITLE, 'OK', 'Error')",
        ])
        .env("NOTIFICATOR_TITLE", title)
        .env("NOTIFICATOR_BODY", body);
    vec![powershell]
}

#[cfg(not(any(target_os = "macos", windows)))]
fn alert_commands(title: &str, body: &str) -> Vec<Command> {
    let mut zenity = Command::new("zenity");
    zenity.args(["--error", "--no-markup", "--title", title, "--text", body]);

    let mut kdialog = Command::new("kdialog");
    kdialog.args(["--title", title, "--error", body]);

    vec![zenity, kdialog]
}
