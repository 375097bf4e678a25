// preflight-core/src/runtime/guard.rs
// ============================================================================
// Module: Policy Guard
// Description: Environment-scoped action gating with a hard-fail assert form.
// Purpose: Answer "may this action run here" totally, and refuse loudly
//          when it may not.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The guard binds a resolved environment to its profile set at construction
//! and is immutable afterwards, so a check and the action it gates can never
//! observe different environments. `is_allowed` is a total lookup;
//! `assert_allowed` turns a refusal into a [`PolicyViolation`] that names the
//! action and the environment. Guards hold no global state: two guards for
//! different environments coexist freely in one process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Environment;
use crate::core::EnvironmentProfile;
use crate::core::GatedAction;
use crate::core::PreflightEvent;
use crate::core::ProfileSet;
use crate::interfaces::EventSink;

// ============================================================================
// SECTION: Policy Violation
// ============================================================================

/// A gated action was attempted where the environment forbids it.
///
/// Fatal to the attempted operation: callers abort, never retry, and never
/// downgrade this to a warning. The message names both the action and the
/// environment so a failure report is meaningful without extra context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("policy violation: {action} operations are not allowed in {environment}")]
pub struct PolicyViolation {
    /// The refused action.
    pub action: GatedAction,
    /// The environment that refused it.
    pub environment: Environment,
}

impl PolicyViolation {
    /// Builds the structured event form of this violation.
    ///
    /// The guard itself stays side-effect-free; hosts that catch the
    /// violation record this event for reporting.
    #[must_use]
    pub const fn as_event(&self) -> PreflightEvent {
        PreflightEvent::PolicyViolation {
            action: self.action,
            environment: self.environment,
        }
    }
}

// ============================================================================
// SECTION: Policy Guard
// ============================================================================

/// Environment-scoped authorization check for gated actions.
///
/// # Invariants
/// - Environment and profiles are fixed at construction; answers never change
///   over the guard's lifetime.
#[derive(Debug, Clone)]
pub struct PolicyGuard {
    /// The environment every check targets.
    environment: Environment,
    /// Profiles for the full environment set.
    profiles: ProfileSet,
}

impl PolicyGuard {
    /// Creates a guard for a resolved environment over the given profiles.
    #[must_use]
    pub const fn new(environment: Environment, profiles: ProfileSet) -> Self {
        Self {
            environment,
            profiles,
        }
    }

    /// Returns the environment this guard answers for.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the profile in force for this guard's environment.
    #[must_use]
    pub const fn profile(&self) -> &EnvironmentProfile {
        self.profiles.profile(self.environment)
    }

    /// Returns whether the environment permits the action.
    ///
    /// Total over the closed action and environment sets; no combination is
    /// an error.
    #[must_use]
    pub const fn is_allowed(&self, action: GatedAction) -> bool {
        self.profile().permits(action)
    }

    /// Requires that the environment permits the action.
    ///
    /// `Ok(())` is side-effect-free. The error form is how mutating flows
    /// fail fast before touching anything.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyViolation`] when the action is not permitted here.
    pub const fn assert_allowed(&self, action: GatedAction) -> Result<(), PolicyViolation> {
        if self.is_allowed(action) {
            Ok(())
        } else {
            Err(PolicyViolation {
                action,
                environment: self.environment,
            })
        }
    }
}

// ============================================================================
// SECTION: Environment Resolution Helper
// ============================================================================

/// Resolves an environment value and records any fallback as one warning.
///
/// Wraps [`Environment::resolve`] for hosts that want the standard behavior:
/// a usable value passes through silently; an unusable one degrades to
/// staging and records exactly one `environment_fallback` event.
pub fn resolve_environment(raw: Option<&str>, events: &dyn EventSink) -> Environment {
    let resolution = Environment::resolve(raw);
    if let Some(cause) = &resolution.fallback {
        events.record(&PreflightEvent::environment_fallback(cause, resolution.environment));
    }
    resolution.environment
}
