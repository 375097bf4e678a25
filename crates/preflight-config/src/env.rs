// preflight-config/src/env.rs
// ============================================================================
// Module: Environment Selection
// Description: Deployment environment selection from process variables.
// Purpose: Deterministic, bounded reads of the environment switch.
// Dependencies: preflight-core
// ============================================================================

//! ## Overview
//! Deployment environment selection reads the `ENVIRONMENT` variable. An
//! optional override map replaces process lookups for deterministic tests,
//! and values are clipped to a hard length cap before resolution so the
//! recorded fallback event stays bounded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;

use preflight_core::Environment;
use preflight_core::EventSink;
use preflight_core::resolve_environment;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_ENV_VAR: &str = "ENVIRONMENT";
/// Maximum characters of an environment value carried into resolution.
pub(crate) const MAX_ENVIRONMENT_VALUE_CHARS: usize = 128;

// ============================================================================
// SECTION: Environment Reader
// ============================================================================

/// Reader for the deployment environment switch.
///
/// # Invariants
/// - `overrides`, when present, replace process environment reads entirely.
/// - Values longer than the character cap are clipped before resolution.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentReader {
    /// Optional override map used for deterministic lookups.
    overrides: Option<BTreeMap<String, String>>,
}

impl EnvironmentReader {
    /// Creates a reader backed by the process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overrides: None,
        }
    }

    /// Creates a reader that resolves from the given map only.
    #[must_use]
    pub const fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// Resolves the deployment environment, recording any fallback.
    ///
    /// Unset, unrecognized, and oversized values all degrade to the staging
    /// default through [`resolve_environment`], which records exactly one
    /// warning event per call.
    pub fn resolve(&self, events: &dyn EventSink) -> Environment {
        let raw = self.raw_value().map(clip_value);
        resolve_environment(raw.as_deref(), events)
    }

    /// Reads the raw variable from overrides or the process environment.
    fn raw_value(&self) -> Option<String> {
        if let Some(overrides) = &self.overrides {
            return overrides.get(ENVIRONMENT_ENV_VAR).cloned();
        }
        env::var(ENVIRONMENT_ENV_VAR).ok()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Clips a value to the hard character cap.
fn clip_value(value: String) -> String {
    if value.chars().count() <= MAX_ENVIRONMENT_VALUE_CHARS {
        value
    } else {
        value.chars().take(MAX_ENVIRONMENT_VALUE_CHARS).collect()
    }
}
