//! Integration tests for the pose-doctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use candle_core::{DType, Device, Tensor};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// No host exposes this many video nodes, so the device check always fails to open.
const MISSING_CAMERA: &str = "250";

fn doctor(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("pose-doctor"));
    cmd.current_dir(project.path())
        .env_remove("POSE_DOCTOR_MODEL")
        .env_remove("POSE_DOCTOR_CAMERA")
        .env_remove("POSE_DOCTOR_CAPTURE_TIMEOUT_MS")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pose-doctor"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Readiness diagnostics"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pose-doctor"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_reports_all_three_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.args(["--camera", MISSING_CAMERA]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[INFO] diagnostics starting"))
        .stdout(predicate::str::contains("[OK] runtime SUCCESS: candle-core"))
        .stdout(predicate::str::contains("[ERROR] artifact NOT_FOUND"))
        .stdout(predicate::str::contains("modelLHRHBOTHHAND.mdl"))
        .stdout(predicate::str::contains("[ERROR] device FAILED: failed to open"))
        .stdout(predicate::str::ends_with("[INFO] diagnostics complete\n"));
    Ok(())
}

#[test]
fn cli_flags_corrupt_artifact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("broken.mdl"), b"definitely not tensors")?;
    let mut cmd = doctor(&temp);
    cmd.args(["--model", "broken.mdl", "--camera", MISSING_CAMERA]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[ERROR] artifact FAILED"))
        .stdout(predicate::str::contains("size_bytes=22"));
    Ok(())
}

#[test]
fn cli_loads_valid_artifact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let weights = Tensor::zeros((2, 3), DType::F32, &Device::Cpu)?;
    weights.save_safetensors("hand.weight", temp.path().join("modelLHRHBOTHHAND.mdl"))?;
    let mut cmd = doctor(&temp);
    cmd.args(["--camera", MISSING_CAMERA]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[OK] artifact SUCCESS: loaded"))
        .stdout(predicate::str::contains("load_verified=true"))
        .stdout(predicate::str::contains("tensor_count=1"));
    Ok(())
}

#[test]
fn cli_reads_project_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".pose-doctor.yml"),
        format!("model_path: weights/custom.mdl\ncamera_index: {}\n", MISSING_CAMERA),
    )?;
    let mut cmd = doctor(&temp);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("custom.mdl"))
        .stdout(predicate::str::contains(format!("camera_index={}", MISSING_CAMERA)));
    Ok(())
}

#[test]
fn cli_env_overrides_camera() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.env("POSE_DOCTOR_CAMERA", "251");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("camera_index=251"));
    Ok(())
}

#[test]
fn cli_strict_fails_when_checks_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.args(["--strict", "--camera", MISSING_CAMERA]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[SUMMARY] overall FAILED"))
        .stdout(predicate::str::ends_with("[INFO] diagnostics complete\n"));
    Ok(())
}

#[test]
fn cli_check_subcommand_strict_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.args(["check", "--strict", "--camera", MISSING_CAMERA]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("[INFO] diagnostics starting"))
        .stdout(predicate::str::contains("[SUMMARY] overall FAILED"));
    Ok(())
}

#[test]
fn cli_check_subcommand_matches_bare_invocation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.args(["check", "--camera", MISSING_CAMERA, "--no-color"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[ERROR] artifact NOT_FOUND"))
        .stdout(predicate::str::contains(format!("camera_index={}", MISSING_CAMERA)))
        .stdout(predicate::str::contains("[SUMMARY]").not());
    Ok(())
}

#[test]
fn cli_help_lists_check_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pose-doctor"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Run every readiness check"));
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".pose-doctor.yml"), "camera: 1\n")?;
    let mut cmd = doctor(&temp);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"))
        .stdout(predicate::str::contains("diagnostics starting").not());
    Ok(())
}

#[test]
fn cli_unreadable_config_shows_cause() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".pose-doctor.yml"), [0xff, 0xfe, 0x00])?;
    let mut cmd = doctor(&temp);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"))
        .stderr(predicate::str::contains("UTF-8"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = doctor(&temp);
    cmd.args(["--config", "absent.yml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_project_flag_resolves_model_path() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    let elsewhere = TempDir::new()?;
    fs::write(project.path().join("modelLHRHBOTHHAND.mdl"), b"xyz")?;
    let mut cmd = doctor(&elsewhere);
    cmd.arg("--project")
        .arg(project.path())
        .args(["--camera", MISSING_CAMERA]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("size_bytes=3"));
    Ok(())
}
