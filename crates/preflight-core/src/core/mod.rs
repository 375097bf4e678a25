// preflight-core/src/core/mod.rs
// ============================================================================
// Module: Preflight Core Types
// Description: Canonical environment, profile, query, and event structures.
// Purpose: Provide stable, serializable types for gating and routing.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Preflight core types define environments, per-environment profiles, routing
//! queries, verification reports, and event payloads. These types are the
//! canonical source of truth for any derived surfaces. None of them reads a
//! clock; hosts supply timestamps explicitly wherever time matters.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod environment;
pub mod events;
pub mod health;
pub mod profile;
pub mod query;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use environment::Environment;
pub use environment::EnvironmentResolution;
pub use environment::FallbackCause;
pub use events::EventSeverity;
pub use events::PreflightEvent;
pub use health::HealthReport;
pub use health::TierId;
pub use profile::EnvironmentProfile;
pub use profile::GatedAction;
pub use profile::ProfileSet;
pub use query::Query;
pub use query::QueryContext;
pub use query::RoutingDecision;
pub use query::Urgency;
