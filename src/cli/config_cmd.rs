//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::notification::Severity;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter),
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value),
        ConfigAction::Get { key } => handle_get(store, presenter, &key),
        ConfigAction::List => handle_list(store, presenter),
        ConfigAction::Path => handle_path(store, presenter),
    }
}

fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init()?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load()?;

    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "timeout_ms" => config.timeout_ms = Some(parse_timeout(key, value)?),
        "severity" => config.severity = Some(value.to_lowercase()),
        "icon" => config.icon = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config)?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load()?;

    let value = match key {
        "app_name" => config.app_name,
        "timeout_ms" => config.timeout_ms.map(|t| t.to_string()),
        "severity" => config.severity,
        "icon" => config.icon,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load()?;

    presenter.key_value("app_name", config.app_name.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "timeout_ms",
        &config
            .timeout_ms
            .map(|t| t.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    presenter.key_value("severity", config.severity.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("icon", config.icon.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "app_name" if value.trim().is_empty() => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must not be empty".to_string(),
        }),
        "timeout_ms" => parse_timeout(key, value).map(|_| ()),
        "severity" => value
            .parse::<Severity>()
            .map(|_| ())
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            }),
        _ => Ok(()), // icon accepts any path
    }
}

fn parse_timeout(key: &str, value: &str) -> Result<i32, ConfigError> {
    value
        .parse::<i32>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a whole number of milliseconds".to_string(),
        })
}
