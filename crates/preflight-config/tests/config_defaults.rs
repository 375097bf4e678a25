//! Config defaults and core validation tests for preflight-config.
// preflight-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Core Validation Tests
// Description: Validate default behavior and section-level config invariants.
// Purpose: Ensure minimal config is valid and fail-closed limits are enforced.
// =============================================================================

use preflight_config::ConfigError;
use preflight_core::RouteRuleKind;
use preflight_core::RouterRules;

mod common;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn default_config_validates() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn example_config_validates() -> TestResult {
    let config = common::example_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn environments_default_to_absent() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.environments.is_some() {
        return Err("environments should default to absent".to_string());
    }
    Ok(())
}

#[test]
fn quota_daily_limit_defaults_to_twenty_five() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.quota.daily_limit != 25 {
        return Err(format!("unexpected default daily limit {}", config.quota.daily_limit));
    }
    Ok(())
}

#[test]
fn router_section_defaults_to_shipped_rules() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.router != RouterRules::default() {
        return Err("router section should default to the shipped rules".to_string());
    }
    Ok(())
}

#[test]
fn partial_router_section_fills_missing_fields() -> TestResult {
    let config = common::config_from_toml("[router]\nfreshness_window_minutes = 10\n")
        .map_err(|err| err.to_string())?;
    if config.router.freshness_window_minutes != 10 {
        return Err("explicit freshness window should be kept".to_string());
    }
    if config.router.informational_patterns != RouterRules::default().informational_patterns {
        return Err("omitted pattern list should fill from defaults".to_string());
    }
    Ok(())
}

#[test]
fn omitted_profile_fields_fail_closed() -> TestResult {
    let toml_str = r#"
[environments.staging]
base_url = "https://staging.example.com"

[environments.production]
base_url = "https://www.example.com"
"#;
    let mut config = common::config_from_toml(toml_str).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    let staging = common::staging_mut(&mut config)?;
    if staging.allow_write_operations
        || staging.allow_data_creation
        || staging.allow_form_submission
    {
        return Err("omitted permission flags should default to false".to_string());
    }
    if staging.max_test_timeout_ms != 10_000 {
        return Err(format!("unexpected default timeout {}", staging.max_test_timeout_ms));
    }
    if staging.retries != 0 {
        return Err(format!("unexpected default retries {}", staging.retries));
    }
    Ok(())
}

#[test]
fn environments_missing_production_rejected() -> TestResult {
    let toml_str = r#"
[environments.staging]
base_url = "https://staging.example.com"
"#;
    let config = common::config_from_toml(toml_str).map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "environments.production is not configured")?;
    Ok(())
}

#[test]
fn environments_missing_staging_rejected() -> TestResult {
    let toml_str = r#"
[environments.production]
base_url = "https://www.example.com"
"#;
    let config = common::config_from_toml(toml_str).map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "environments.staging is not configured")?;
    Ok(())
}

#[test]
fn base_url_must_be_non_empty() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::staging_mut(&mut config)?.base_url = "   ".to_string();
    assert_invalid(config.validate(), "environments.staging.base_url must be non-empty")?;
    Ok(())
}

#[test]
fn base_url_must_parse() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::production_mut(&mut config)?.base_url = "not a url".to_string();
    assert_invalid(config.validate(), "environments.production.base_url is invalid")?;
    Ok(())
}

#[test]
fn base_url_rejects_non_http_scheme() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::staging_mut(&mut config)?.base_url = "ftp://staging.example.com".to_string();
    assert_invalid(config.validate(), "unsupported scheme ftp")?;
    Ok(())
}

#[test]
fn base_url_length_capped() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::staging_mut(&mut config)?.base_url =
        format!("https://{}.example.com", "a".repeat(2_048));
    assert_invalid(config.validate(), "environments.staging.base_url exceeds max length")?;
    Ok(())
}

#[test]
fn timeout_below_minimum_rejected() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::staging_mut(&mut config)?.max_test_timeout_ms = 50;
    assert_invalid(config.validate(), "must be between 100 and 600000 milliseconds")?;
    Ok(())
}

#[test]
fn timeout_above_maximum_rejected() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::production_mut(&mut config)?.max_test_timeout_ms = 600_001;
    assert_invalid(
        config.validate(),
        "environments.production.max_test_timeout_ms must be between",
    )?;
    Ok(())
}

#[test]
fn retries_capped() -> TestResult {
    let mut config = common::example_config().map_err(|err| err.to_string())?;
    common::staging_mut(&mut config)?.retries = 11;
    assert_invalid(config.validate(), "environments.staging.retries exceeds 10")?;
    Ok(())
}

#[test]
fn quota_zero_rejected() -> TestResult {
    let config =
        common::config_from_toml("[quota]\ndaily_limit = 0\n").map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "quota.daily_limit must be at least 1")?;
    Ok(())
}

#[test]
fn quota_above_cap_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.quota.daily_limit = 10_001;
    assert_invalid(config.validate(), "quota.daily_limit exceeds 10000")?;
    Ok(())
}

#[test]
fn router_zero_freshness_window_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.freshness_window_minutes = 0;
    assert_invalid(config.validate(), "freshness window must be at least one minute")?;
    Ok(())
}

#[test]
fn router_freshness_window_capped() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.freshness_window_minutes = 1_441;
    assert_invalid(config.validate(), "router.freshness_window_minutes exceeds 1440")?;
    Ok(())
}

#[test]
fn router_duplicate_rule_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.order.push(RouteRuleKind::InformationalLexical);
    assert_invalid(config.validate(), "listed more than once in the evaluation order")?;
    Ok(())
}

#[test]
fn router_empty_pattern_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.informational_patterns = vec![" ".to_string()];
    assert_invalid(config.validate(), "contains an empty pattern")?;
    Ok(())
}

#[test]
fn router_missing_patterns_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.operational_patterns.clear();
    assert_invalid(config.validate(), "requires at least one pattern")?;
    Ok(())
}

#[test]
fn router_pattern_count_capped() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.informational_patterns =
        (0 .. 65).map(|idx| format!("pattern-{idx}")).collect();
    assert_invalid(config.validate(), "router.informational_patterns exceeds 64 entries")?;
    Ok(())
}

#[test]
fn router_pattern_length_capped() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.router.operational_patterns = vec!["x".repeat(129)];
    assert_invalid(config.validate(), "router.operational_patterns entry exceeds max length")?;
    Ok(())
}
