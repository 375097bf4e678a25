// rule-ladder/src/traits.rs
// ============================================================================
// Module: Ladder Traits
// Description: Predicate evaluation contract for ladder rungs.
// Purpose: Define the boundary where domain-specific matching is injected.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The predicate contract describes how a rung decides whether it matches a
//! given input. Domains supply the input type and the matching logic; the
//! ladder supplies ordering, first-match selection, and fallback totality.

// ============================================================================
// SECTION: Predicate Trait
// ============================================================================

/// Core trait for rung predicate evaluation
///
/// Predicates evaluate against a borrowed domain input. This design enables:
///
/// - Zero-copy evaluation over caller-owned inputs
/// - Domain-specific context (query text, timestamps, flags) behind one type
/// - Deterministic, side-effect-free matching
pub trait RungPredicate {
    /// Domain-specific input type the predicate inspects
    ///
    /// Examples: `RouteInput<'a>`, `RequestView<'a>`. Each bundles the
    /// borrowed data a single evaluation pass needs.
    type Input<'a>;

    /// Returns whether this predicate matches the given input
    ///
    /// Must be pure: same input, same answer, no observable side effects.
    /// Evaluation order and short-circuiting are owned by the ladder, so a
    /// predicate must not rely on being called at all.
    fn matches(&self, input: &Self::Input<'_>) -> bool;
}
