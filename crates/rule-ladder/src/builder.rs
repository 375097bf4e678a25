// rule-ladder/src/builder.rs
// ============================================================================
// Module: Ladder Builder
// Description: Fluent builder over the first-match rule table.
// Purpose: Provide an ergonomic, type-safe API for composing ladders.
// Dependencies: crate::{error, ladder, rung}
// ============================================================================

//! ## Overview
//! The fluent builder simplifies composing ladders by enabling chained rung
//! additions while keeping the same invariants as [`Ladder::new`]: the
//! finishing step demands a fallback, so a built ladder is always total.

use crate::error::LadderResult;
use crate::ladder::Ladder;
use crate::rung::Fallback;
use crate::rung::Rung;

// ============================================================================
// SECTION: Fluent Builder API
// ============================================================================

/// Fluent builder for constructing ladders programmatically
///
/// Rungs are appended in priority order. The builder cannot produce a ladder
/// without a fallback: [`LadderBuilder::fallback`] is the only finishing
/// call, and it runs full validation.
///
/// # Type Parameters
/// * `P` - The domain-specific predicate type
/// * `O` - The outcome type rungs select
pub struct LadderBuilder<P, O> {
    /// Rungs collected so far, in priority order.
    rungs: Vec<Rung<P, O>>,
}

impl<P, O> LadderBuilder<P, O> {
    /// Creates an empty builder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rungs: Vec::new(),
        }
    }

    /// Appends a rung from its parts
    #[must_use]
    pub fn rung(mut self, label: impl Into<String>, predicate: P, outcome: O) -> Self {
        self.rungs.push(Rung::new(label, predicate, outcome));
        self
    }

    /// Appends an already-constructed rung
    #[must_use]
    pub fn with_rung(mut self, rung: Rung<P, O>) -> Self {
        self.rungs.push(rung);
        self
    }

    /// Appends multiple rungs in iteration order
    #[must_use]
    pub fn with_all<I>(mut self, rungs: I) -> Self
    where
        I: IntoIterator<Item = Rung<P, O>>,
    {
        self.rungs.extend(rungs);
        self
    }

    /// Finishes the ladder with its mandatory fallback
    ///
    /// # Errors
    /// Returns a [`crate::error::LadderError`] when validation rejects the
    /// assembled ladder (empty or duplicate labels, too many rungs).
    pub fn fallback(self, label: impl Into<String>, outcome: O) -> LadderResult<Ladder<P, O>> {
        Ladder::new(self.rungs, Fallback::new(label, outcome))
    }
}

// ============================================================================
// SECTION: Default Implementation
// ============================================================================

impl<P, O> Default for LadderBuilder<P, O> {
    fn default() -> Self {
        Self::new()
    }
}
