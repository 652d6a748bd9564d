//! Error scenario integration tests

use std::process::Command;

fn notificator_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notificator"));
    cmd.env_remove("DBUS_SESSION_BUS_ADDRESS")
        .env("XDG_RUNTIME_DIR", "/nonexistent");
    cmd
}

#[test]
fn missing_icon_file_error() {
    let output = notificator_bin()
        .args(["send", "-i", "/nonexistent/icon.png", "Title", "Body"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load icon"),
        "Expected error about the icon, got: {}",
        stderr
    );
}

#[test]
fn config_get_unknown_key() {
    let output = notificator_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_timeout() {
    let output = notificator_bin()
        .args(["config", "set", "timeout_ms", "soon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("milliseconds"),
        "Expected error about invalid timeout, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_severity() {
    let output = notificator_bin()
        .args(["config", "set", "severity", "loud"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("loud"),
        "Expected error naming the bad severity, got: {}",
        stderr
    );
}

#[test]
#[cfg(target_os = "linux")]
fn config_round_trip_in_isolated_home() {
    let dir = tempfile::TempDir::new().unwrap();

    let set = notificator_bin()
        .args(["config", "set", "app_name", "Wallet"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());
    assert!(dir.path().join("notificator").join("config.toml").exists());

    let get = notificator_bin()
        .args(["config", "get", "app_name"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "Wallet");
}

#[test]
#[cfg(target_os = "linux")]
fn config_list_with_no_file() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = notificator_bin()
        .args(["config", "list"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("app_name") && stdout.contains("not set"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
#[cfg(all(unix, not(target_os = "macos")))]
fn critical_text_survives_failing_dialog_tools() {
    use std::os::unix::fs::PermissionsExt;

    // A zenity that cannot open a display, and no kdialog at all
    let bin_dir = tempfile::TempDir::new().unwrap();
    let zenity = bin_dir.path().join("zenity");
    std::fs::write(&zenity, "#!/bin/sh\nexit 1\n").unwrap();
    std::fs::set_permissions(&zenity, std::fs::Permissions::from_mode(0o755)).unwrap();

    let output = notificator_bin()
        .args(["send", "-s", "critical", "Fatal", "disk full"])
        .env("PATH", bin_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Fatal: disk full"),
        "Expected the critical text on stderr, got: {}",
        stderr
    );
}
