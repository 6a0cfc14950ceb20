//! Integration tests for the outfit binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn outfit(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("outfit"));
    cmd.current_dir(project.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("recon toolkit"))
        .stdout(predicate::str::contains("plan"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn declining_proceed_cancels_without_side_effects() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = outfit(&temp);
    cmd.args(["run", "--non-interactive"])
        .env("OUTFIT_PROMPT_PROCEED", "n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Installation cancelled"));

    assert!(!temp.path().join("output").exists());
    assert!(!temp.path().join("openai_apikey.txt").exists());
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".outfit.yml"),
        "python_packages: []\nexpected_modules: []\n",
    )?;
    let mut cmd = outfit(&temp);
    cmd.args(["run", "--dry-run", "--non-interactive"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("output").exists());
    assert!(!temp.path().join("openai_apikey.txt").exists());
    Ok(())
}

#[test]
fn detect_json_reports_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = outfit(&temp);
    cmd.args(["detect", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"os_family\""))
        .stdout(predicate::str::contains("\"distro\""));
    Ok(())
}

#[test]
fn plan_shows_pip_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = outfit(&temp);
    cmd.args(["plan", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("python3 -m pip install openai"));
    Ok(())
}

#[test]
fn verify_with_nothing_expected_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".outfit.yml"),
        "expected_tools: []\nexpected_modules: []\n",
    )?;
    let mut cmd = outfit(&temp);
    cmd.arg("verify");
    cmd.assert().success();
    Ok(())
}

#[test]
fn verify_missing_tool_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join("tools.yml"),
        "catalogs:\n  debian:\n    - name: no-such-tool-outfit-test\n      command: \"true\"\n",
    )?;
    fs::write(
        temp.path().join(".outfit.yml"),
        "catalog: tools.yml\nexpected_tools: [no-such-tool-outfit-test]\nexpected_modules: []\n",
    )?;
    let mut cmd = outfit(&temp);
    cmd.arg("verify");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing tools: no-such-tool-outfit-test"));
    Ok(())
}

#[test]
fn expected_tool_outside_catalog_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".outfit.yml"),
        "expected_tools: [no-such-tool-outfit-test]\n",
    )?;
    let mut cmd = outfit(&temp);
    cmd.arg("verify");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("no-such-tool-outfit-test"));
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = outfit(&temp);
    cmd.args(["detect", "--config", "absent.yml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".outfit.yml"), "python: \"\"\n")?;
    let mut cmd = outfit(&temp);
    cmd.arg("plan");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfit"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("outfit"));
    Ok(())
}
