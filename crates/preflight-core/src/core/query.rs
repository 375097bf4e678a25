// preflight-core/src/core/query.rs
// ============================================================================
// Module: Routing Queries
// Description: Query, context, and decision types for verification routing.
// Purpose: Provide the stable, serializable surface routing operates on.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! A routing query is free text plus optional operational context. Context
//! fields are independently optional so producers send what they know;
//! routing treats a missing field as "cannot hold" for any rule that needs
//! it, never as an error. Timestamps use RFC 3339 on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Urgency
// ============================================================================

/// Caller-declared urgency of a routing query.
///
/// Ordered: `Low < Medium < High`, so threshold rules compare directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// No freshness pressure.
    Low,
    /// Normal operation.
    Medium,
    /// Answer must reflect live state.
    High,
}

impl Urgency {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Query Context
// ============================================================================

/// Optional operational context accompanying a query.
///
/// Every field is independently optional. A rule that needs an absent field
/// simply does not match; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
    /// When the relevant state was last verified.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_check_at: Option<OffsetDateTime>,
    /// Whether a cached verification result is available.
    #[serde(default)]
    pub cached_result_available: Option<bool>,
    /// Caller-declared urgency.
    #[serde(default)]
    pub urgency: Option<Urgency>,
}

// ============================================================================
// SECTION: Query
// ============================================================================

/// A free-text question submitted for routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// The question text; may be empty.
    pub text: String,
    /// Operational context, when the caller has any.
    #[serde(default)]
    pub context: Option<QueryContext>,
}

impl Query {
    /// Creates a query with no context.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    /// Creates a query carrying operational context.
    pub fn with_context(text: impl Into<String>, context: QueryContext) -> Self {
        Self {
            text: text.into(),
            context: Some(context),
        }
    }

    /// Returns the caller-declared urgency, if any.
    #[must_use]
    pub fn urgency(&self) -> Option<Urgency> {
        self.context.as_ref().and_then(|context| context.urgency)
    }
}

// ============================================================================
// SECTION: Routing Decision
// ============================================================================

/// The outcome of routing one query.
///
/// # Invariants
/// - `reason` is never empty: every decision explains itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Whether the expensive live-verification path should run.
    pub use_expensive_path: bool,
    /// Human-readable justification for the choice.
    pub reason: String,
}
