// crates/preflight-core/examples/minimal.rs
// ============================================================================
// Module: Preflight Minimal Example
// Description: Minimal end-to-end preflight run using in-memory providers.
// Purpose: Demonstrate guard checks and quota-bounded routing.
// Dependencies: preflight-core
// ============================================================================

//! ## Overview
//! Wires a guard, a router, and the quota wrapper from built-in data, then
//! serves one cheap query from static knowledge and one expensive query from
//! a scripted probe. Everything runs in memory and is suitable for quick
//! verification.

use std::num::NonZeroU32;
use std::sync::Arc;

use preflight_core::Clock;
use preflight_core::DecisionRouter;
use preflight_core::GatedAction;
use preflight_core::HealthReport;
use preflight_core::KnowledgeSource;
use preflight_core::MemoryEventSink;
use preflight_core::PolicyGuard;
use preflight_core::ProfileSet;
use preflight_core::Query;
use preflight_core::QueryContext;
use preflight_core::QuotaBoundedRouter;
use preflight_core::QuotaLedger;
use preflight_core::RouterRules;
use preflight_core::ScriptedProbe;
use preflight_core::StaticKnowledge;
use preflight_core::SystemClock;
use preflight_core::TierId;
use preflight_core::Urgency;
use preflight_core::VerificationProbe;
use preflight_core::resolve_environment;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let events = Arc::new(MemoryEventSink::new());
    let clock = SystemClock;
    let now = clock.now();

    // Staging permits all gated actions under the built-in profiles.
    let environment = resolve_environment(Some("staging"), events.as_ref());
    let guard = PolicyGuard::new(environment, ProfileSet::builtin());
    guard.assert_allowed(GatedAction::Write)?;

    let router = DecisionRouter::new(&RouterRules::default())?;
    let limit = NonZeroU32::new(2).ok_or(ExampleError("limit must be nonzero"))?;
    let ledger = QuotaLedger::new(limit, now.date());
    let bounded = QuotaBoundedRouter::with_events(router, ledger, events.clone());

    let knowledge = StaticKnowledge::new()
        .with_answer("price", "The starter tier is $19 per month.")
        .with_answer("feature", "Every tier includes unlimited projects.");
    let probe = ScriptedProbe::new().with_result(Ok(HealthReport::healthy(420)));

    // Informational query: served from known data, quota untouched.
    let pricing = Query::new("How much does the starter tier cost?");
    let decision = bounded.route(&pricing, clock.now());
    if decision.use_expensive_path {
        return Err(ExampleError("pricing query should take the cheap path").into());
    }
    let answer = knowledge
        .lookup(&pricing)
        .ok_or(ExampleError("knowledge table should cover pricing"))?;

    // Operational query under high urgency: charged against the quota.
    let outage = Query::with_context(
        "Is checkout working right now?",
        QueryContext {
            last_check_at: None,
            cached_result_available: None,
            urgency: Some(Urgency::High),
        },
    );
    let decision = bounded.route(&outage, clock.now());
    if !decision.use_expensive_path {
        return Err(ExampleError("outage query should take the expensive path").into());
    }
    let report = probe.verify(&TierId::new("checkout"))?;

    let _ = (answer, report, bounded.remaining(clock.now()), events.snapshot());
    Ok(())
}
