// preflight-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Preflight configuration. The example mirrors the
//! builtin profiles and the shipped routing defaults, so parsing it yields
//! the same components as an absent config file.

/// Returns a canonical example `preflight.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[environments.staging]
base_url = "https://staging.example.com"
allow_write_operations = true
allow_data_creation = true
allow_form_submission = true
max_test_timeout_ms = 30000
retries = 2

[environments.production]
base_url = "https://www.example.com"
allow_write_operations = false
allow_data_creation = false
allow_form_submission = false
max_test_timeout_ms = 10000
retries = 0

[router]
informational_patterns = ["price", "cost", "how much", "feature", "include", "offer"]
operational_patterns = ["work", "broken", "validate", "verify", "check", "available"]
freshness_window_minutes = 5
order = ["informational_lexical", "urgency_escalation", "freshness_window", "operational_lexical"]

[quota]
daily_limit = 25
"#,
    )
}
