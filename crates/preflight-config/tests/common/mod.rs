// preflight-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for preflight-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use preflight_config::EnvironmentProfileConfig;
use preflight_config::PreflightConfig;
use preflight_config::config_toml_example;

/// Parses a TOML string into a `PreflightConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<PreflightConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<PreflightConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns the parsed canonical example config.
pub fn example_config() -> Result<PreflightConfig, toml::de::Error> {
    config_from_toml(&config_toml_example())
}

/// Borrows the staging section of a config that must carry one.
pub fn staging_mut(
    config: &mut PreflightConfig,
) -> Result<&mut EnvironmentProfileConfig, String> {
    config
        .environments
        .as_mut()
        .ok_or_else(|| "config should carry an environments table".to_string())?
        .staging
        .as_mut()
        .ok_or_else(|| "config should carry a staging section".to_string())
}

/// Borrows the production section of a config that must carry one.
pub fn production_mut(
    config: &mut PreflightConfig,
) -> Result<&mut EnvironmentProfileConfig, String> {
    config
        .environments
        .as_mut()
        .ok_or_else(|| "config should carry an environments table".to_string())?
        .production
        .as_mut()
        .ok_or_else(|| "config should carry a production section".to_string())
}
