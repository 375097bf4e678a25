//! Config load validation tests for preflight-config.
// preflight-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use preflight_config::ConfigError;
use preflight_config::PreflightConfig;
use preflight_config::config_toml_example;
use tempfile::NamedTempFile;
use tempfile::tempdir;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<PreflightConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(PreflightConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(PreflightConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(PreflightConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(PreflightConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_reports_missing_file_as_io_error() -> TestResult {
    let dir = tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(PreflightConfig::load(Some(&path)), "config io error")?;
    Ok(())
}

#[test]
fn load_rejects_invalid_toml() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"quota = [unterminated").map_err(|err| err.to_string())?;
    assert_invalid(PreflightConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_invalid_sections() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"[quota]\ndaily_limit = 0\n").map_err(|err| err.to_string())?;
    assert_invalid(
        PreflightConfig::load(Some(file.path())),
        "quota.daily_limit must be at least 1",
    )?;
    Ok(())
}

#[test]
fn load_accepts_canonical_example() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(config_toml_example().as_bytes()).map_err(|err| err.to_string())?;
    let config = PreflightConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.quota.daily_limit != 25 {
        return Err(format!("unexpected daily limit {}", config.quota.daily_limit));
    }
    if config.environments.is_none() {
        return Err("example should configure environments".to_string());
    }
    Ok(())
}
