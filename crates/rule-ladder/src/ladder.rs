// rule-ladder/src/ladder.rs
// ============================================================================
// Module: Ladder Core Types
// Description: Ordered first-match rule table with a mandatory fallback.
// Purpose: Define `Ladder`, `Verdict`, and `MatchPosition` along with
//          validation and evaluation.
// Dependencies: serde, smallvec, crate::{error, rung, trace, traits}
// ============================================================================

//! ## Overview
//! This module defines the ladder structure and its evaluation semantics:
//! rungs are consulted strictly in order, the first matching predicate wins,
//! and the mandatory fallback makes evaluation total. Priority is therefore
//! data carried by the ladder, never an artifact of caller code order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::error::LadderError;
use crate::error::LadderResult;
use crate::rung::Fallback;
use crate::rung::Rung;
use crate::trace::LadderTrace;
use crate::trace::NoopTrace;
use crate::traits::RungPredicate;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of rungs a single ladder may carry
///
/// Rule tables are authored configuration, not accumulated state; a ladder
/// approaching this bound indicates a modelling problem upstream.
pub const MAX_RUNGS: usize = 64;

// ============================================================================
// SECTION: Ladder Definition
// ============================================================================

/// Ordered first-match rule table over typed predicates
///
/// A ladder owns its rungs in priority order plus exactly one fallback. The
/// logical shape (ordering, first-match, totality) is universal and
/// domain-agnostic, while the predicate type `P` and outcome type `O` are the
/// boundary where domain-specific semantics are injected.
///
/// # Invariants
/// - Labels are non-empty and unique across rungs and fallback (validated).
/// - Rung count never exceeds [`MAX_RUNGS`] (validated).
/// - Evaluation is total: every input yields exactly one [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder<P, O> {
    /// Rungs in evaluation order; earlier rungs take priority.
    rungs: SmallVec<[Rung<P, O>; 8]>,
    /// Outcome selected when no rung matches.
    fallback: Fallback<O>,
}

impl<P, O> Ladder<P, O> {
    /// Creates a validated ladder from rungs in priority order plus a fallback
    ///
    /// # Errors
    /// Returns a [`LadderError`] when a label is empty, labels collide, or the
    /// rung count exceeds [`MAX_RUNGS`].
    pub fn new(
        rungs: impl IntoIterator<Item = Rung<P, O>>,
        fallback: Fallback<O>,
    ) -> LadderResult<Self> {
        let ladder = Self {
            rungs: rungs.into_iter().collect(),
            fallback,
        };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Re-checks the structural invariants of this ladder
    ///
    /// [`Ladder::new`] validates on construction; ladders arriving through
    /// deserialization must be revalidated by the host before use.
    ///
    /// # Errors
    /// Returns a [`LadderError`] when a label is empty, labels collide, or the
    /// rung count exceeds [`MAX_RUNGS`].
    pub fn validate(&self) -> LadderResult {
        if self.rungs.len() > MAX_RUNGS {
            return Err(LadderError::TooManyRungs {
                max: MAX_RUNGS,
                actual: self.rungs.len(),
            });
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (index, rung) in self.rungs.iter().enumerate() {
            if rung.label().trim().is_empty() {
                return Err(LadderError::empty_rung_label(index));
            }
            if !seen.insert(rung.label()) {
                return Err(LadderError::duplicate_label(rung.label()));
            }
        }

        if self.fallback.label().trim().is_empty() {
            return Err(LadderError::EmptyFallbackLabel);
        }
        if seen.contains(self.fallback.label()) {
            return Err(LadderError::duplicate_label(self.fallback.label()));
        }

        Ok(())
    }

    /// Returns the rungs in evaluation order
    #[must_use]
    pub fn rungs(&self) -> &[Rung<P, O>] {
        &self.rungs
    }

    /// Returns the fallback
    #[must_use]
    pub const fn fallback(&self) -> &Fallback<O> {
        &self.fallback
    }

    /// Returns the number of rungs (the fallback is not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Returns whether the ladder has no rungs
    ///
    /// A rungless ladder is legal: every input then receives the fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

impl<P: RungPredicate, O: Clone> Ladder<P, O> {
    /// Evaluates the ladder against an input, returning the winning verdict
    ///
    /// Rungs are consulted strictly in order and evaluation stops at the
    /// first match; the fallback wins when every rung declines. Total for
    /// every input, empty included.
    #[must_use]
    pub fn evaluate(&self, input: &P::Input<'_>) -> Verdict<O> {
        self.evaluate_with_trace(input, &mut NoopTrace)
    }

    /// Evaluates the ladder while reporting each consultation to a trace hook
    ///
    /// The trace observes every consulted rung in order (including the
    /// matching one) and the fallback selection when no rung matched.
    #[must_use]
    pub fn evaluate_with_trace<T>(&self, input: &P::Input<'_>, trace: &mut T) -> Verdict<O>
    where
        T: LadderTrace<P>,
    {
        for (index, rung) in self.rungs.iter().enumerate() {
            let matched = rung.predicate().matches(input);
            trace.on_rung_evaluated(index, rung.label(), rung.predicate(), matched);
            if matched {
                return Verdict {
                    outcome: rung.outcome().clone(),
                    label: rung.label().to_string(),
                    position: MatchPosition::Rung(index),
                };
            }
        }

        trace.on_fallback_selected(self.fallback.label());
        Verdict {
            outcome: self.fallback.outcome().clone(),
            label: self.fallback.label().to_string(),
            position: MatchPosition::Fallback,
        }
    }
}

// ============================================================================
// SECTION: Verdict Types
// ============================================================================

/// Where in the ladder a verdict was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPosition {
    /// A rung matched at the given zero-based position.
    Rung(usize),
    /// No rung matched; the fallback supplied the outcome.
    Fallback,
}

impl MatchPosition {
    /// Returns whether this verdict came from the fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Result of evaluating a ladder against one input
///
/// Carries the selected outcome plus enough provenance (label and position)
/// for hosts to explain the decision without re-running evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict<O> {
    /// The outcome the winning rung (or fallback) selected.
    pub outcome: O,
    /// Label of the winning rung or fallback.
    pub label: String,
    /// Position at which the verdict was decided.
    pub position: MatchPosition,
}
