// preflight-core/src/runtime/mod.rs
// ============================================================================
// Module: Preflight Runtime
// Description: Guard, router, quota wrapper, and bundled providers.
// Purpose: Execute preflight decisions against injected interfaces.
// Dependencies: crate::{core, interfaces}, rule-ladder
// ============================================================================

//! ## Overview
//! Runtime modules implement the three decision components and the bundled
//! interface implementations. Everything is constructed explicitly: hosts
//! build a guard and a router from configuration data, pick sinks and clocks,
//! and pass time into every decision call.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod bounded;
pub mod clock;
pub mod guard;
pub mod memory;
pub mod quota;
pub mod router;
pub mod sinks;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use bounded::QuotaBoundedRouter;
pub use bounded::REASON_QUOTA_EXHAUSTED;
pub use clock::SystemClock;
pub use guard::PolicyGuard;
pub use guard::PolicyViolation;
pub use guard::resolve_environment;
pub use memory::ScriptedProbe;
pub use memory::StaticKnowledge;
pub use quota::QuotaLedger;
pub use router::DecisionRouter;
pub use router::FALLBACK_RULE_LABEL;
pub use router::REASON_DEFAULT_AUTHORITATIVE;
pub use router::REASON_HIGH_URGENCY;
pub use router::REASON_KNOWN_DATA;
pub use router::REASON_LIVE_VALIDATION;
pub use router::RouteInput;
pub use router::RoutePredicate;
pub use router::RouteRuleKind;
pub use router::RouteTrace;
pub use router::RouteTraceEntry;
pub use router::RouterRules;
pub use router::RouterRulesError;
pub use sinks::MemoryEventSink;
pub use sinks::NoopEventSink;
pub use sinks::WriterEventSink;
