// preflight-core/src/runtime/bounded.rs
// ============================================================================
// Module: Quota-Bounded Router
// Description: Router wrapper capping expensive-path calls per calendar day.
// Purpose: Downgrade expensive decisions to the cheap path once the daily
//          quota is exhausted, never the reverse.
// Dependencies: crate::core, crate::interfaces, crate::runtime, time
// ============================================================================

//! ## Overview
//! The wrapper delegates every decision to the inner router, then applies the
//! quota: cheap decisions pass through untouched, expensive decisions consume
//! one ledger slot, and once the day's slots are gone the decision is
//! downgraded to the cheap path with a fixed reason. A downgrade records one
//! `quota_exhausted` event; the wrapper never upgrades a cheap decision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use time::OffsetDateTime;

use crate::core::PreflightEvent;
use crate::core::Query;
use crate::core::RoutingDecision;
use crate::interfaces::EventSink;
use crate::runtime::quota::QuotaLedger;
use crate::runtime::router::DecisionRouter;
use crate::runtime::sinks::NoopEventSink;

// ============================================================================
// SECTION: Canonical Reason
// ============================================================================

/// Reason attached when quota exhaustion downgrades an expensive decision.
pub const REASON_QUOTA_EXHAUSTED: &str = "daily limit reached";

// ============================================================================
// SECTION: Quota-Bounded Router
// ============================================================================

/// Router wrapper enforcing the daily expensive-path quota.
pub struct QuotaBoundedRouter {
    /// The wrapped router producing raw decisions.
    router: DecisionRouter,
    /// The daily consumption ledger.
    ledger: Mutex<QuotaLedger>,
    /// Sink receiving quota exhaustion events.
    events: Arc<dyn EventSink>,
}

impl QuotaBoundedRouter {
    /// Wraps a router with a ledger, discarding events.
    #[must_use]
    pub fn new(router: DecisionRouter, ledger: QuotaLedger) -> Self {
        Self::with_events(router, ledger, Arc::new(NoopEventSink))
    }

    /// Wraps a router with a ledger and an event sink.
    #[must_use]
    pub fn with_events(
        router: DecisionRouter,
        ledger: QuotaLedger,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            router,
            ledger: Mutex::new(ledger),
            events,
        }
    }

    /// Returns the wrapped router.
    #[must_use]
    pub const fn router(&self) -> &DecisionRouter {
        &self.router
    }

    /// Routes a query, charging expensive decisions against the quota.
    ///
    /// Cheap decisions pass through without touching the ledger. An expensive
    /// decision consumes one slot for the calendar day of `now`; when none
    /// remain it is downgraded to the cheap path with
    /// [`REASON_QUOTA_EXHAUSTED`] and one `quota_exhausted` event is
    /// recorded. The wrapper only ever downgrades.
    #[must_use]
    pub fn route(&self, query: &Query, now: OffsetDateTime) -> RoutingDecision {
        let decision = self.router.decide(query, now);
        if !decision.use_expensive_path {
            return decision;
        }

        let exhausted_event = {
            let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
            if ledger.try_consume(now.date()) {
                None
            } else {
                Some(PreflightEvent::QuotaExhausted {
                    limit: ledger.limit().get(),
                    window_start: ledger.window_start().to_string(),
                    query_chars: query.text.chars().count(),
                })
            }
        };

        match exhausted_event {
            None => decision,
            Some(event) => {
                self.events.record(&event);
                RoutingDecision {
                    use_expensive_path: false,
                    reason: REASON_QUOTA_EXHAUSTED.to_string(),
                }
            }
        }
    }

    /// Returns how many expensive calls remain for the calendar day of `now`.
    #[must_use]
    pub fn remaining(&self, now: OffsetDateTime) -> u32 {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner).remaining(now.date())
    }

    /// Returns a copy of the ledger's current state.
    #[must_use]
    pub fn ledger_snapshot(&self) -> QuotaLedger {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
