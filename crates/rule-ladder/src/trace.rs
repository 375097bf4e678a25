// rule-ladder/src/trace.rs
// ============================================================================
// Module: Ladder Trace Hooks
// Description: Observation hooks for ladder evaluation.
// Purpose: Let hosts record which rungs were consulted without slowing the
//          untraced path.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Trace hooks observe each rung consultation in evaluation order plus the
//! fallback selection, so hosts can explain a verdict after the fact. The
//! no-op implementation keeps the fast path allocation-free.

// ============================================================================
// SECTION: Trace Trait
// ============================================================================

/// Trace hook for ladder evaluation
///
/// Callbacks fire in evaluation order. `on_rung_evaluated` fires once per
/// consulted rung, including the matching one; `on_fallback_selected` fires
/// only when no rung matched.
pub trait LadderTrace<P> {
    /// Called whenever a rung predicate is evaluated
    fn on_rung_evaluated(&mut self, index: usize, label: &str, predicate: &P, matched: bool);

    /// Called when evaluation exhausted every rung and selected the fallback
    fn on_fallback_selected(&mut self, label: &str);
}

// ============================================================================
// SECTION: No-Op Trace
// ============================================================================

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl<P> LadderTrace<P> for NoopTrace {
    fn on_rung_evaluated(&mut self, _index: usize, _label: &str, _predicate: &P, _matched: bool) {}

    fn on_fallback_selected(&mut self, _label: &str) {}
}
