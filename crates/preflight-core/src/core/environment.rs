// preflight-core/src/core/environment.rs
// ============================================================================
// Module: Preflight Environments
// Description: Closed environment set and deterministic resolution.
// Purpose: Resolve which environment a process targets, exactly once, with an
//          explicit record of any fallback.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The environment set is closed: checks target staging or production and
//! nothing else. Resolution is a pure function from an externally supplied
//! configuration value; an unusable value degrades to staging with an explicit
//! fallback cause so hosts can surface the substitution instead of hiding it.
//! The resolved value is injected into guards at construction and never cached
//! in process-wide state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Deployment environment a check runs against.
///
/// # Invariants
/// - Closed set; every consumer matches exhaustively so adding a variant is a
///   compile-time event, never a silent runtime gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Pre-production environment where mutating checks are acceptable.
    Staging,
    /// Live environment serving real users; mutating checks are locked down.
    Production,
}

impl Environment {
    /// Every environment, in declaration order.
    pub const ALL: [Self; 2] = [Self::Staging, Self::Production];

    /// Parses a configuration value into an environment.
    ///
    /// Accepts `"staging"` and `"production"` after trimming, ASCII
    /// case-insensitively. Anything else is `None`; the caller decides how to
    /// degrade.
    #[must_use]
    pub fn from_config_value(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("staging") {
            Some(Self::Staging)
        } else if trimmed.eq_ignore_ascii_case("production") {
            Some(Self::Production)
        } else {
            None
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Resolves an optional configuration value into an environment.
    ///
    /// Pure and total: a valid value resolves to itself with no fallback
    /// cause; an absent, empty, or unrecognized value resolves to
    /// [`Environment::Staging`] carrying the cause. Recording the fallback
    /// (exactly one warning per resolution) is the caller's job, typically
    /// via [`crate::runtime::resolve_environment`].
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> EnvironmentResolution {
        match raw {
            None => EnvironmentResolution::fallback(FallbackCause::Unset),
            Some(value) if value.trim().is_empty() => {
                EnvironmentResolution::fallback(FallbackCause::Unset)
            }
            Some(value) => Self::from_config_value(value).map_or_else(
                || {
                    EnvironmentResolution::fallback(FallbackCause::Unrecognized {
                        value: value.to_string(),
                    })
                },
                EnvironmentResolution::resolved,
            ),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Resolution Record
// ============================================================================

/// Why resolution substituted the staging default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCause {
    /// The configuration value was absent or empty.
    Unset,
    /// The configuration value did not name a known environment.
    Unrecognized {
        /// The value as supplied, untrimmed.
        value: String,
    },
}

/// Outcome of resolving an environment configuration value.
///
/// # Invariants
/// - `fallback` is `Some` exactly when the resolved environment was
///   substituted rather than named by the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentResolution {
    /// The environment selected for this process.
    pub environment: Environment,
    /// Cause of the substitution, when the input was unusable.
    pub fallback: Option<FallbackCause>,
}

impl EnvironmentResolution {
    /// Builds a clean resolution for a value that named its environment.
    #[must_use]
    const fn resolved(environment: Environment) -> Self {
        Self {
            environment,
            fallback: None,
        }
    }

    /// Builds a staging substitution carrying its cause.
    ///
    /// Staging is the historical default for unusable values. It is the more
    /// permissive direction, which is why the cause is always carried: hosts
    /// must be able to warn rather than silently run permissive checks.
    #[must_use]
    const fn fallback(cause: FallbackCause) -> Self {
        Self {
            environment: Environment::Staging,
            fallback: Some(cause),
        }
    }

    /// Returns whether this resolution substituted the default.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}
