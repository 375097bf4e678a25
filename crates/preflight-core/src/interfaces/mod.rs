// preflight-core/src/interfaces/mod.rs
// ============================================================================
// Module: Preflight Interfaces
// Description: Backend-agnostic interfaces for probes, knowledge, time, and events.
// Purpose: Define the contract surfaces used by the Preflight runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Preflight integrates with external systems without
//! embedding backend-specific details. Implementations must be deterministic
//! where the contract says so and must never block a decision: routing and
//! gating remain total regardless of what lives behind these seams.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::HealthReport;
use crate::core::PreflightEvent;
use crate::core::Query;
use crate::core::TierId;

// ============================================================================
// SECTION: Verification Probe
// ============================================================================

/// Verification probe errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Probe backend reported an error.
    #[error("verification probe error: {0}")]
    Probe(String),
    /// Verification exceeded its time budget.
    #[error("verification timed out after {timeout_ms} ms")]
    Timeout {
        /// Budget that was exceeded, in milliseconds.
        timeout_ms: u64,
    },
    /// The requested tier is not known to this probe.
    #[error("unknown tier: {0}")]
    UnknownTier(String),
}

/// Expensive-path executor verifying live system state.
///
/// Probes are opaque to routing: decisions pick the path, hosts drive the
/// probe, and its cost is exactly why the quota wrapper exists.
pub trait VerificationProbe {
    /// Verifies one tier and reports its health.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when verification cannot produce a report.
    fn verify(&self, tier: &TierId) -> Result<HealthReport, ProbeError>;
}

// ============================================================================
// SECTION: Knowledge Source
// ============================================================================

/// Cheap-path answer source over known data.
///
/// Lookup is best-effort by contract: `None` simply means this source has no
/// canned answer, never a failure.
pub trait KnowledgeSource {
    /// Returns a canned answer for the query, when one is known.
    fn lookup(&self, query: &Query) -> Option<String>;
}

// ============================================================================
// SECTION: Clock
// ============================================================================

/// Time source injected wherever wall-clock time is needed.
///
/// Core types never read a clock themselves; hosts pass explicit instants
/// into routing and quota calls. This seam exists so hosts and examples have
/// one standard way to obtain those instants.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

// ============================================================================
// SECTION: Event Sink
// ============================================================================

/// Sink for structured decision-boundary events.
///
/// Recording is fire-and-forget: sinks swallow their own I/O problems rather
/// than letting observability failures disturb decisions.
pub trait EventSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: &PreflightEvent);
}
