// preflight-core/src/core/health.rs
// ============================================================================
// Module: Verification Health Types
// Description: Tier identity and probe report structures.
// Purpose: Provide stable types for expensive-path verification results.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The expensive path verifies one tier of the target system and reports its
//! health. The tier identifier is opaque here; probe implementations give it
//! meaning.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tier Identity
// ============================================================================

/// Identifier of the tier an expensive probe verifies.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    /// Creates a new tier identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TierId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TierId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Health Report
// ============================================================================

/// Result of one expensive-path verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Whether the verified tier is considered healthy overall.
    pub healthy: bool,
    /// Problems observed during verification; empty when healthy.
    pub errors: Vec<String>,
    /// Wall time the verification consumed, in milliseconds.
    pub duration_ms: u64,
}

impl HealthReport {
    /// Builds a healthy report with the measured duration.
    #[must_use]
    pub const fn healthy(duration_ms: u64) -> Self {
        Self {
            healthy: true,
            errors: Vec::new(),
            duration_ms,
        }
    }

    /// Builds an unhealthy report from the observed problems.
    #[must_use]
    pub fn unhealthy(errors: Vec<String>, duration_ms: u64) -> Self {
        Self {
            healthy: false,
            errors,
            duration_ms,
        }
    }
}
