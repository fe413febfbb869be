mod common;

use common::{temp_config, SAMPLE_TOML};
use std::process::Command;
use tempfile::TempDir;

fn folio() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    // Keep the log file out of the user's home during tests.
    cmd.env_remove("FOLIO_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let output = folio().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["init", "render", "view", "--config"] {
        assert!(stdout.contains(name), "missing {name} in help:\n{stdout}");
    }
}

#[test]
fn test_render_writes_document_to_stdout() {
    let (_dir, path) = temp_config(SAMPLE_TOML);
    let output = folio()
        .arg("render")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains("Ada Lovelace"));
}

#[test]
fn test_render_writes_document_to_file() {
    let (dir, path) = temp_config(SAMPLE_TOML);
    let out = dir.path().join("index.html");
    let status = folio()
        .args(["render", "--out"])
        .arg(&out)
        .arg("--config")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let document = std::fs::read_to_string(&out).unwrap();
    assert!(document.contains("class=\"reveal\""));
}

#[test]
fn test_missing_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = folio()
        .arg("render")
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "stderr was: {stderr}");
}

#[test]
fn test_init_creates_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.toml");

    let first = folio().arg("init").arg("--config").arg(&path).output().unwrap();
    assert!(first.status.success());
    assert!(path.exists());

    let second = folio().arg("init").arg("--config").arg(&path).output().unwrap();
    assert_eq!(second.status.code(), Some(1));

    let forced = folio()
        .args(["init", "--force", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(forced.status.success());
}
