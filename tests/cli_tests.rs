//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn notificator_bin() -> Command {
    let mut cmd = Command::cargo_bin("notificator").expect("binary is built");
    // Keep probes away from the developer's session bus
    cmd.env_remove("DBUS_SESSION_BUS_ADDRESS")
        .env("XDG_RUNTIME_DIR", "/nonexistent")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    notificator_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notifications"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("probe"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn send_help_lists_options() {
    notificator_bin()
        .args(["send", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--severity"))
        .stdout(predicate::str::contains("--icon"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("critical"));
}

#[test]
fn version_output() {
    notificator_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notificator"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    notificator_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notificator"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    notificator_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn probe_prints_a_mode() {
    let modes = [
        "none",
        "tray-balloon",
        "desktop-service",
        "native-center",
        "third-party-v1",
        "third-party-v2",
    ];

    let output = notificator_bin().arg("probe").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        modes.contains(&stdout.trim()),
        "Expected a mode name, got: {}",
        stdout
    );
}

#[test]
#[cfg(all(unix, not(target_os = "macos")))]
fn probe_without_session_bus_is_none() {
    notificator_bin()
        .arg("probe")
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
#[cfg(all(unix, not(target_os = "macos")))]
fn send_without_backend_warns_and_succeeds() {
    notificator_bin()
        .args(["send", "-s", "information", "Backup", "Finished"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No notification backend"));
}

#[test]
fn send_requires_title_and_body() {
    notificator_bin()
        .args(["send", "only-title"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BODY"));
}

#[test]
fn invalid_severity_error() {
    notificator_bin()
        .args(["send", "--severity", "loud", "t", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
