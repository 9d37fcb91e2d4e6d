use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Runs `issuelens` with an empty config directory and no credentials.
fn isolated() -> (assert_cmd::Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    (cmd, dir)
}

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("issuelens"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_no_args_shows_help() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_analyze_rejects_non_numeric_issue() {
    let (mut cmd, _dir) = isolated();
    cmd.args(["analyze", "https://github.com/acme/widget", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Issue number must be a positive integer"));
}

#[test]
fn test_analyze_rejects_unparsable_repository() {
    let (mut cmd, _dir) = isolated();
    cmd.args(["analyze", "https://gitlab.com/acme/widget", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid GitHub URL"));
}

#[test]
fn test_analyze_without_api_key_is_config_error() {
    let (mut cmd, _dir) = isolated();
    cmd.args(["analyze", "acme/widget", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("System configuration error"))
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_analyze_without_args_requires_terminal() {
    let (mut cmd, _dir) = isolated();
    cmd.arg("analyze")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interactive mode requires a terminal"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let (mut cmd, dir) = isolated();
    let app_dir = dir.path().join("issuelens");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("config.toml"), "[web]\nport = \"nope\"\n").unwrap();

    cmd.args(["analyze", "acme/widget", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("System configuration error"));
}

#[test]
fn test_completion_ignores_invalid_config_file() {
    let (mut cmd, dir) = isolated();
    let app_dir = dir.path().join("issuelens");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("config.toml"), "[web]\nport = \"nope\"\n").unwrap();

    cmd.args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issuelens"));
}

#[test]
fn test_completion_bash() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("issuelens"));
}

#[test]
fn test_completion_zsh() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef issuelens"));
}
