//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::Severity;

/// Notificator - desktop notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "notificator")]
#[command(version)]
#[command(about = "Send desktop notifications through the best available platform mechanism")]
#[command(long_about = None)]
pub struct Cli {
    /// Log backend selection and dispatch details
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a notification
    Send(SendArgs),
    /// Show which notification backend would be used
    Probe,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `send`
#[derive(clap::Args, Debug)]
pub struct SendArgs {
    /// Notification title
    pub title: String,

    /// Notification text
    pub body: String,

    /// Notification severity
    #[arg(short = 's', long, value_name = "SEVERITY")]
    pub severity: Option<SeverityArg>,

    /// PNG icon to show with the notification
    #[arg(short = 'i', long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Display duration in milliseconds
    #[arg(short = 't', long, value_name = "MS", allow_negative_numbers = true)]
    pub timeout: Option<i32>,

    /// Application name announced to the notification service
    #[arg(short = 'a', long, value_name = "NAME")]
    pub app_name: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Severity argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    None,
    #[value(alias = "info")]
    Information,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "error")]
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::None => Severity::None,
            SeverityArg::Information => Severity::Information,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "timeout_ms", "severity", "icon"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_send() {
        let cli = Cli::parse_from(["notificator", "send", "Backup", "Finished"]);
        let Commands::Send(args) = cli.command else {
            panic!("Expected Send command");
        };
        assert_eq!(args.title, "Backup");
        assert_eq!(args.body, "Finished");
        assert!(args.severity.is_none());
        assert!(args.icon.is_none());
        assert!(args.timeout.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_send_options() {
        let cli = Cli::parse_from([
            "notificator",
            "send",
            "-s",
            "critical",
            "-i",
            "/tmp/icon.png",
            "-t",
            "2500",
            "Disk",
            "Full",
        ]);
        let Commands::Send(args) = cli.command else {
            panic!("Expected Send command");
        };
        assert_eq!(args.severity, Some(SeverityArg::Critical));
        assert_eq!(args.icon, Some(PathBuf::from("/tmp/icon.png")));
        assert_eq!(args.timeout, Some(2500));
    }

    #[test]
    fn cli_accepts_negative_timeout() {
        let cli = Cli::parse_from(["notificator", "send", "-t", "-1", "t", "b"]);
        let Commands::Send(args) = cli.command else {
            panic!("Expected Send command");
        };
        assert_eq!(args.timeout, Some(-1));
    }

    #[test]
    fn cli_accepts_severity_aliases() {
        for (alias, expected) in [
            ("info", SeverityArg::Information),
            ("warn", SeverityArg::Warning),
            ("error", SeverityArg::Critical),
        ] {
            let cli = Cli::parse_from(["notificator", "send", "-s", alias, "t", "b"]);
            let Commands::Send(args) = cli.command else {
                panic!("Expected Send command");
            };
            assert_eq!(args.severity, Some(expected));
            assert_eq!(
                Severity::from(expected),
                alias.parse::<Severity>().unwrap()
            );
        }
    }

    #[test]
    fn cli_parses_verbose_after_subcommand() {
        let cli = Cli::parse_from(["notificator", "probe", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Probe));
    }

    #[test]
    fn cli_rejects_unknown_severity() {
        let result = Cli::try_parse_from(["notificator", "send", "-s", "loud", "t", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["notificator", "config", "set", "severity", "warning"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "severity");
            assert_eq!(value, "warning");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn severity_arg_converts() {
        assert_eq!(Severity::from(SeverityArg::None), Severity::None);
        assert_eq!(Severity::from(SeverityArg::Critical), Severity::Critical);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("app_name"));
        assert!(is_valid_config_key("timeout_ms"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
