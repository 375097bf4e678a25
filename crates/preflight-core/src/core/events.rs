// preflight-core/src/core/events.rs
// ============================================================================
// Module: Preflight Events
// Description: Structured event payloads emitted at decision boundaries.
// Purpose: Give hosts a stable, serializable record of fallbacks, quota
//          exhaustion, and violations.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Events are plain payloads handed to an event sink; components never write
//! logs directly. Payloads carry domain facts only. Query text is reported by
//! length, not content, so event streams stay free of user data; timestamps
//! are stamped by sinks at the recording boundary, keeping event construction
//! clock-free.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::environment::Environment;
use crate::core::environment::FallbackCause;
use crate::core::profile::GatedAction;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Severity grade attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSeverity {
    /// Routine operational fact.
    Info,
    /// Degraded or surprising condition the host should surface.
    Warning,
    /// A refused operation.
    Error,
}

impl EventSeverity {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

// ============================================================================
// SECTION: Event Payloads
// ============================================================================

/// Structured event emitted at a decision boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PreflightEvent {
    /// Environment resolution substituted the staging default.
    EnvironmentFallback {
        /// The rejected value as supplied, or `None` when absent or empty.
        rejected: Option<String>,
        /// The environment substituted in its place.
        substituted: Environment,
    },

    /// The daily expensive-path quota refused a consumption.
    QuotaExhausted {
        /// Daily ceiling that was hit.
        limit: u32,
        /// Calendar day the exhausted window started, rendered as a date.
        window_start: String,
        /// Length of the downgraded query text in characters, not its content.
        query_chars: usize,
    },

    /// A gated action was refused for the active environment.
    PolicyViolation {
        /// The refused action.
        action: GatedAction,
        /// The environment that refused it.
        environment: Environment,
    },
}

impl PreflightEvent {
    /// Builds an environment-fallback event from a resolution cause.
    #[must_use]
    pub fn environment_fallback(cause: &FallbackCause, substituted: Environment) -> Self {
        let rejected = match cause {
            FallbackCause::Unset => None,
            FallbackCause::Unrecognized {
                value,
            } => Some(value.clone()),
        };
        Self::EnvironmentFallback {
            rejected,
            substituted,
        }
    }

    /// Returns the stable event label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EnvironmentFallback {
                ..
            } => "environment_fallback",
            Self::QuotaExhausted {
                ..
            } => "quota_exhausted",
            Self::PolicyViolation {
                ..
            } => "policy_violation",
        }
    }

    /// Returns the severity grade for this event.
    #[must_use]
    pub const fn severity(&self) -> EventSeverity {
        match self {
            Self::EnvironmentFallback {
                ..
            }
            | Self::QuotaExhausted {
                ..
            } => EventSeverity::Warning,
            Self::PolicyViolation {
                ..
            } => EventSeverity::Error,
        }
    }
}
