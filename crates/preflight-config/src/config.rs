// preflight-config/src/config.rs
// ============================================================================
// Module: Preflight Configuration
// Description: Configuration loading and validation for Preflight.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: preflight-core, serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing sections fall back to the shipped defaults; a section that is
//! present must be complete and valid, so gating is never silently relaxed.
//! Parsed sections assemble directly into runtime components: guards,
//! routers, and quota ledgers all come from one validated document.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use preflight_core::DecisionRouter;
use preflight_core::Environment;
use preflight_core::EnvironmentProfile;
use preflight_core::EventSink;
use preflight_core::PolicyGuard;
use preflight_core::ProfileSet;
use preflight_core::QuotaBoundedRouter;
use preflight_core::QuotaLedger;
use preflight_core::RouterRules;
use serde::Deserialize;
use thiserror::Error;
use time::Date;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "preflight.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "PREFLIGHT_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of an environment base URL.
pub(crate) const MAX_BASE_URL_LENGTH: usize = 2048;
/// Minimum per-run timeout in milliseconds.
pub(crate) const MIN_TEST_TIMEOUT_MS: u64 = 100;
/// Maximum per-run timeout in milliseconds.
pub(crate) const MAX_TEST_TIMEOUT_MS: u64 = 600_000;
/// Default per-run timeout in milliseconds when a section omits it.
pub(crate) const DEFAULT_MAX_TEST_TIMEOUT_MS: u64 = 10_000;
/// Maximum retry attempts per verification run.
pub(crate) const MAX_RETRIES: u32 = 10;
/// Maximum number of patterns in one lexical rule list.
pub(crate) const MAX_PATTERNS: usize = 64;
/// Maximum length of a single lexical pattern.
pub(crate) const MAX_PATTERN_LENGTH: usize = 128;
/// Maximum cache freshness window in minutes.
pub(crate) const MAX_FRESHNESS_WINDOW_MINUTES: u32 = 1_440;
/// Default expensive checks allowed per calendar day.
pub(crate) const DEFAULT_DAILY_LIMIT: u32 = 25;
/// Maximum expensive checks allowed per calendar day.
pub(crate) const MAX_DAILY_LIMIT: u32 = 10_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Preflight configuration loaded from `preflight.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreflightConfig {
    /// Per-environment gating profiles; builtin profiles apply when absent.
    #[serde(default)]
    pub environments: Option<EnvironmentsConfig>,
    /// Routing rule set for the decision router.
    #[serde(default)]
    pub router: RouterRules,
    /// Daily quota for the expensive path.
    #[serde(default)]
    pub quota: QuotaConfig,
}

impl PreflightConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(environments) = &self.environments {
            environments.validate()?;
        }
        build_router(&self.router)?;
        self.quota.validate()?;
        Ok(())
    }

    /// Returns the effective profile set.
    ///
    /// The builtin profiles apply when no `[environments]` table is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a configured section is incomplete or
    /// invalid.
    pub fn profile_set(&self) -> Result<ProfileSet, ConfigError> {
        match &self.environments {
            Some(environments) => environments.profile_set(),
            None => Ok(ProfileSet::builtin()),
        }
    }

    /// Builds a policy guard for the given environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the environment sections are invalid.
    pub fn guard(&self, environment: Environment) -> Result<PolicyGuard, ConfigError> {
        Ok(PolicyGuard::new(environment, self.profile_set()?))
    }

    /// Builds the decision router from the `[router]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the rule set is invalid.
    pub fn router(&self) -> Result<DecisionRouter, ConfigError> {
        build_router(&self.router)
    }

    /// Builds a quota ledger whose window opens on the given day.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured daily limit is zero.
    pub fn quota_ledger(&self, window_start: Date) -> Result<QuotaLedger, ConfigError> {
        let limit = NonZeroU32::new(self.quota.daily_limit).ok_or_else(|| {
            ConfigError::Invalid("quota.daily_limit must be at least 1".to_string())
        })?;
        Ok(QuotaLedger::new(limit, window_start))
    }

    /// Builds a quota-bounded router whose window opens on the given day.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the router or quota sections are invalid.
    pub fn bounded_router(&self, window_start: Date) -> Result<QuotaBoundedRouter, ConfigError> {
        Ok(QuotaBoundedRouter::new(self.router()?, self.quota_ledger(window_start)?))
    }

    /// Builds a quota-bounded router that records events into the given sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the router or quota sections are invalid.
    pub fn bounded_router_with_events(
        &self,
        window_start: Date,
        events: Arc<dyn EventSink>,
    ) -> Result<QuotaBoundedRouter, ConfigError> {
        Ok(QuotaBoundedRouter::with_events(
            self.router()?,
            self.quota_ledger(window_start)?,
            events,
        ))
    }
}

/// Per-environment profile sections.
///
/// # Invariants
/// - When this table is present, both environments must be configured.
///   Partial overrides are rejected so production gating is never defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentsConfig {
    /// Staging profile section.
    #[serde(default)]
    pub staging: Option<EnvironmentProfileConfig>,
    /// Production profile section.
    #[serde(default)]
    pub production: Option<EnvironmentProfileConfig>,
}

impl EnvironmentsConfig {
    /// Validates both environment sections.
    fn validate(&self) -> Result<(), ConfigError> {
        self.profile_set()?;
        Ok(())
    }

    /// Builds the runtime profile set from both sections.
    fn profile_set(&self) -> Result<ProfileSet, ConfigError> {
        let staging = require_section(self.staging.as_ref(), "environments.staging")?;
        let production = require_section(self.production.as_ref(), "environments.production")?;
        staging.validate("environments.staging")?;
        production.validate("environments.production")?;
        Ok(ProfileSet::new(staging.to_profile(), production.to_profile()))
    }
}

/// One environment's gating profile section.
///
/// Permission flags default to `false`: an environment grants nothing it does
/// not name.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentProfileConfig {
    /// Base URL the environment's checks run against.
    pub base_url: String,
    /// Whether write operations are allowed.
    #[serde(default)]
    pub allow_write_operations: bool,
    /// Whether data creation is allowed.
    #[serde(default)]
    pub allow_data_creation: bool,
    /// Whether form submission is allowed.
    #[serde(default)]
    pub allow_form_submission: bool,
    /// Upper bound for a single verification run in milliseconds.
    #[serde(default = "default_max_test_timeout_ms")]
    pub max_test_timeout_ms: u64,
    /// Retry attempts for failed verification runs.
    #[serde(default)]
    pub retries: u32,
}

impl EnvironmentProfileConfig {
    /// Validates one environment section under the given field prefix.
    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(format!("{field}.base_url must be non-empty")));
        }
        if trimmed.len() > MAX_BASE_URL_LENGTH {
            return Err(ConfigError::Invalid(format!("{field}.base_url exceeds max length")));
        }
        let url = Url::parse(trimmed)
            .map_err(|err| ConfigError::Invalid(format!("{field}.base_url is invalid: {err}")))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::Invalid(format!(
                    "{field}.base_url has unsupported scheme {scheme}"
                )));
            }
        }
        validate_timeout_range(
            &format!("{field}.max_test_timeout_ms"),
            self.max_test_timeout_ms,
            MIN_TEST_TIMEOUT_MS,
            MAX_TEST_TIMEOUT_MS,
        )?;
        if self.retries > MAX_RETRIES {
            return Err(ConfigError::Invalid(format!("{field}.retries exceeds {MAX_RETRIES}")));
        }
        Ok(())
    }

    /// Converts the section into a runtime profile.
    #[must_use]
    pub fn to_profile(&self) -> EnvironmentProfile {
        EnvironmentProfile {
            base_url: self.base_url.trim().to_string(),
            allow_write_operations: self.allow_write_operations,
            allow_data_creation: self.allow_data_creation,
            allow_form_submission: self.allow_form_submission,
            max_test_timeout_ms: self.max_test_timeout_ms,
            retries: self.retries,
        }
    }
}

/// Daily quota section for the expensive path.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    /// Expensive checks allowed per calendar day.
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
        }
    }
}

impl QuotaConfig {
    /// Validates quota configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.daily_limit == 0 {
            return Err(ConfigError::Invalid("quota.daily_limit must be at least 1".to_string()));
        }
        if self.daily_limit > MAX_DAILY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "quota.daily_limit exceeds {MAX_DAILY_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against hard limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Returns a required environment section or a fail-closed error.
fn require_section<'a>(
    section: Option<&'a EnvironmentProfileConfig>,
    field: &str,
) -> Result<&'a EnvironmentProfileConfig, ConfigError> {
    section.ok_or_else(|| ConfigError::Invalid(format!("{field} is not configured")))
}

/// Builds the router after checking the rule set against hard limits.
fn build_router(rules: &RouterRules) -> Result<DecisionRouter, ConfigError> {
    validate_pattern_list("router.informational_patterns", &rules.informational_patterns)?;
    validate_pattern_list("router.operational_patterns", &rules.operational_patterns)?;
    if rules.freshness_window_minutes > MAX_FRESHNESS_WINDOW_MINUTES {
        return Err(ConfigError::Invalid(format!(
            "router.freshness_window_minutes exceeds {MAX_FRESHNESS_WINDOW_MINUTES}"
        )));
    }
    DecisionRouter::new(rules).map_err(|err| ConfigError::Invalid(format!("router: {err}")))
}

/// Validates one pattern list against count and length limits.
fn validate_pattern_list(field: &str, patterns: &[String]) -> Result<(), ConfigError> {
    if patterns.len() > MAX_PATTERNS {
        return Err(ConfigError::Invalid(format!("{field} exceeds {MAX_PATTERNS} entries")));
    }
    for pattern in patterns {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} entry exceeds max length")));
        }
    }
    Ok(())
}

/// Validates a millisecond value against inclusive bounds.
fn validate_timeout_range(
    field: &str,
    value_ms: u64,
    min_ms: u64,
    max_ms: u64,
) -> Result<(), ConfigError> {
    if !(min_ms ..= max_ms).contains(&value_ms) {
        return Err(ConfigError::Invalid(format!(
            "{field} must be between {min_ms} and {max_ms} milliseconds",
        )));
    }
    Ok(())
}

/// Default per-run timeout ceiling in milliseconds.
pub(crate) const fn default_max_test_timeout_ms() -> u64 {
    DEFAULT_MAX_TEST_TIMEOUT_MS
}

/// Default daily quota for expensive checks.
pub(crate) const fn default_daily_limit() -> u32 {
    DEFAULT_DAILY_LIMIT
}
