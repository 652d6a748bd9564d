//! osascript script runner

use std::io::Write;
use std::process::{Command, Stdio};

use crate::application::ports::{ScriptError, ScriptRunner};

/// Runs AppleScript (or JXA with `-l JavaScript`) through `osascript`,
/// feeding the source on stdin
pub struct OsaScriptRunner {
    language: Option<&'static str>,
}

impl OsaScriptRunner {
    /// Create an AppleScript runner
    pub fn new() -> Self {
        Self { language: None }
    }

    /// Create a JavaScript for Automation runner
    pub fn javascript() -> Self {
        Self {
            language: Some("JavaScript"),
        }
    }

    /// Run a script and capture its standard output
    pub fn output(&self, script: &str) -> Result<String, ScriptError> {
        let mut command = Command::new("osascript");
        if let Some(language) = self.language {
            command.args(["-l", language]);
        }

        let mut child = command
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ScriptError::InterpreterNotFound
                } else {
                    ScriptError::RunFailed(e.to_string())
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(script.as_bytes())
                .map_err(|e| ScriptError::RunFailed(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ScriptError::RunFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(ScriptError::RunFailed(format!(
                "osascript exited with status {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for OsaScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRunner for OsaScriptRunner {
    fn run(&self, script: &str) -> Result<(), ScriptError> {
        self.output(script).map(|_| ())
    }
}
