// preflight-core/src/core/profile.rs
// ============================================================================
// Module: Environment Profiles
// Description: Per-environment permission flags, endpoint, and check budgets.
// Purpose: Define the gated action set and the profile data guards consult.
// Dependencies: crate::core::environment, serde
// ============================================================================

//! ## Overview
//! A profile records what one environment permits and how checks against it
//! should be budgeted. The profile set holds exactly one profile per
//! environment as struct fields, so "no profile registered" is not a
//! representable state and lookups are total by construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::environment::Environment;

// ============================================================================
// SECTION: Gated Actions
// ============================================================================

/// Side-effecting action categories subject to environment gating.
///
/// Each action maps to exactly one profile flag. Read-only operations are
/// never gated and have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatedAction {
    /// Mutates existing data.
    Write,
    /// Creates new records.
    Create,
    /// Submits forms.
    Submit,
}

impl GatedAction {
    /// Every gated action, in declaration order.
    pub const ALL: [Self; 3] = [Self::Write, Self::Create, Self::Submit];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Create => "create",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for GatedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Environment Profile
// ============================================================================

/// Permission flags and check budgets for one environment.
///
/// Read-only after construction: a guard built over a profile answers the
/// same way for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    /// Base URL checks against this environment target.
    pub base_url: String,
    /// Whether mutating existing data is permitted.
    pub allow_write_operations: bool,
    /// Whether creating new records is permitted.
    pub allow_data_creation: bool,
    /// Whether submitting forms is permitted.
    pub allow_form_submission: bool,
    /// Upper bound on a single check, in milliseconds.
    pub max_test_timeout_ms: u64,
    /// Retry attempts a check driver may make.
    pub retries: u32,
}

impl EnvironmentProfile {
    /// Returns whether this profile permits the given action.
    ///
    /// Total over the closed action set; each action reads exactly one flag.
    #[must_use]
    pub const fn permits(&self, action: GatedAction) -> bool {
        match action {
            GatedAction::Write => self.allow_write_operations,
            GatedAction::Create => self.allow_data_creation,
            GatedAction::Submit => self.allow_form_submission,
        }
    }
}

// ============================================================================
// SECTION: Profile Set
// ============================================================================

/// One profile per environment, closed over the environment set.
///
/// # Invariants
/// - Exactly one profile exists per [`Environment`] variant; the field
///   layout makes a missing profile unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSet {
    /// Profile consulted for staging checks.
    pub staging: EnvironmentProfile,
    /// Profile consulted for production checks.
    pub production: EnvironmentProfile,
}

impl ProfileSet {
    /// Creates a profile set from its per-environment parts.
    #[must_use]
    pub const fn new(staging: EnvironmentProfile, production: EnvironmentProfile) -> Self {
        Self {
            staging,
            production,
        }
    }

    /// Returns the profile for an environment.
    ///
    /// Total: the exhaustive match cannot miss.
    #[must_use]
    pub const fn profile(&self, environment: Environment) -> &EnvironmentProfile {
        match environment {
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }

    /// Returns the compiled-in default profiles.
    ///
    /// Staging permits every gated action with a generous budget; production
    /// permits none and keeps checks short. Deployments override these
    /// through configuration.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            staging: EnvironmentProfile {
                base_url: "https://staging.example.com".to_string(),
                allow_write_operations: true,
                allow_data_creation: true,
                allow_form_submission: true,
                max_test_timeout_ms: 30_000,
                retries: 2,
            },
            production: EnvironmentProfile {
                base_url: "https://www.example.com".to_string(),
                allow_write_operations: false,
                allow_data_creation: false,
                allow_form_submission: false,
                max_test_timeout_ms: 10_000,
                retries: 0,
            },
        }
    }
}
