//! App runners for the `send` and `probe` commands

use std::env;
use std::process::ExitCode;

use image::DynamicImage;
use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::notification::{Mode, Severity};
use crate::infrastructure::{create_notificator, XdgConfigStore};

use super::args::SendArgs;
use super::presenter::Presenter;

/// Exit codes (usage errors exit with 2 from clap)
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Environment variable overriding the configured application name
pub const APP_NAME_ENV: &str = "NOTIFICATOR_APP_NAME";

/// Install the log subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for
/// this crate when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_log_directive(verbose: bool) -> &'static str {
    if verbose {
        "notificator=debug"
    } else {
        "warn"
    }
}

/// Send one notification
pub fn run_send(args: SendArgs) -> ExitCode {
    let presenter = Presenter::new();

    let cli_config = AppConfig {
        app_name: args.app_name,
        timeout_ms: args.timeout,
        severity: args.severity.map(|s| Severity::from(s).to_string()),
        icon: args.icon.map(|p| p.to_string_lossy().into_owned()),
    };
    let config = load_merged_config(cli_config);

    let icon = match load_icon(&config) {
        Ok(icon) => icon,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let severity = config.severity_or_default();
    let notificator = create_notificator(config.app_name_or_default(), None, None);

    if notificator.mode() == Mode::None && !severity.is_critical() {
        presenter.warn("No notification backend available, notification dropped");
    }

    notificator.notify(
        severity,
        &args.title,
        &args.body,
        icon.as_ref(),
        config.timeout_ms_or_default(),
    );

    ExitCode::from(EXIT_SUCCESS)
}

/// Print the backend a dispatcher would commit to
pub fn run_probe() -> ExitCode {
    let presenter = Presenter::new();
    let config = load_merged_config(AppConfig::empty());

    let notificator = create_notificator(config.app_name_or_default(), None, None);
    presenter.output(notificator.mode().as_str());
    if notificator.mode() == Mode::None {
        presenter.info("Only critical notifications will be shown, as an alert dialog");
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file, env, and CLI
pub fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    let env_config = AppConfig {
        app_name: env::var(APP_NAME_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

fn load_icon(config: &AppConfig) -> Result<Option<DynamicImage>, String> {
    match config.icon_path() {
        Some(path) => image::open(&path)
            .map(Some)
            .map_err(|e| format!("Failed to load icon {}: {}", path.display(), e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn verbose_raises_default_log_level() {
        assert_eq!(default_log_directive(false), "warn");
        assert_eq!(default_log_directive(true), "notificator=debug");
    }

    #[test]
    fn no_icon_configured() {
        assert!(load_icon(&AppConfig::empty()).unwrap().is_none());
    }

    #[test]
    fn missing_icon_file_is_an_error() {
        let config = AppConfig {
            icon: Some("/nonexistent/notificator-icon.png".to_string()),
            ..Default::default()
        };
        let err = load_icon(&config).unwrap_err();
        assert!(err.contains("/nonexistent/notificator-icon.png"));
    }

    #[test]
    fn loads_png_icon() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        DynamicImage::new_rgba8(4, 3).save(&path).unwrap();

        let config = AppConfig {
            icon: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let icon = load_icon(&config).unwrap().unwrap();
        assert_eq!((icon.width(), icon.height()), (4, 3));
    }
}
