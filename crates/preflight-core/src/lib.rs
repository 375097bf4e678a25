// preflight-core/src/lib.rs
// ============================================================================
// Module: Preflight Core Library
// Description: Public API surface for the preflight decision core.
// Purpose: Expose core types, interfaces, and runtime components.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Preflight core decides, before any expensive verification work runs,
//! whether an action is permitted in the resolved environment, whether a
//! query needs the expensive verification path at all, and whether today's
//! expensive-path budget has room for it. Every component is constructed
//! explicitly from data and integrates through injected interfaces, so two
//! differently configured stacks coexist in one process.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::Clock;
pub use interfaces::EventSink;
pub use interfaces::KnowledgeSource;
pub use interfaces::ProbeError;
pub use interfaces::VerificationProbe;
pub use runtime::DecisionRouter;
pub use runtime::FALLBACK_RULE_LABEL;
pub use runtime::MemoryEventSink;
pub use runtime::NoopEventSink;
pub use runtime::PolicyGuard;
pub use runtime::PolicyViolation;
pub use runtime::QuotaBoundedRouter;
pub use runtime::QuotaLedger;
pub use runtime::REASON_DEFAULT_AUTHORITATIVE;
pub use runtime::REASON_HIGH_URGENCY;
pub use runtime::REASON_KNOWN_DATA;
pub use runtime::REASON_LIVE_VALIDATION;
pub use runtime::REASON_QUOTA_EXHAUSTED;
pub use runtime::RouteRuleKind;
pub use runtime::RouteTrace;
pub use runtime::RouteTraceEntry;
pub use runtime::RouterRules;
pub use runtime::RouterRulesError;
pub use runtime::ScriptedProbe;
pub use runtime::StaticKnowledge;
pub use runtime::SystemClock;
pub use runtime::WriterEventSink;
pub use runtime::resolve_environment;
