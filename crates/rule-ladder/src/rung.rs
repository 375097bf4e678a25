// rule-ladder/src/rung.rs
// ============================================================================
// Module: Rung Data Carriers
// Description: Labelled predicate/outcome pairs and the mandatory fallback.
// Purpose: Define the data each ladder position carries, independent of
//          evaluation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A rung pairs a domain predicate with the outcome selected when it matches,
//! under a label that identifies the rule in verdicts and traces. The fallback
//! carries an outcome with no predicate: it is what makes evaluation total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Rung Definition
// ============================================================================

/// One prioritized rule in a ladder
///
/// Rungs are evaluated in ladder order; the first whose predicate matches
/// supplies the outcome. The label names the rule in verdicts and traces and
/// must be unique within its ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rung<P, O> {
    /// Unique name identifying this rule in verdicts and traces.
    label: String,
    /// Domain predicate deciding whether this rung matches.
    predicate: P,
    /// Outcome selected when the predicate matches.
    outcome: O,
}

impl<P, O> Rung<P, O> {
    /// Creates a new rung from its label, predicate, and outcome
    ///
    /// Label validity (non-empty, unique) is enforced when the rung joins a
    /// ladder, not here, so partially-built rule sets stay representable.
    pub fn new(label: impl Into<String>, predicate: P, outcome: O) -> Self {
        Self {
            label: label.into(),
            predicate,
            outcome,
        }
    }

    /// Returns the rung label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the rung predicate
    #[must_use]
    pub const fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns the rung outcome
    #[must_use]
    pub const fn outcome(&self) -> &O {
        &self.outcome
    }
}

// ============================================================================
// SECTION: Fallback Definition
// ============================================================================

/// The outcome selected when no rung matches
///
/// Every ladder carries exactly one fallback, which is what guarantees that
/// evaluation is total: there is no input without a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback<O> {
    /// Name identifying the fallback in verdicts and traces.
    label: String,
    /// Outcome selected when every rung declined.
    outcome: O,
}

impl<O> Fallback<O> {
    /// Creates a new fallback from its label and outcome
    pub fn new(label: impl Into<String>, outcome: O) -> Self {
        Self {
            label: label.into(),
            outcome,
        }
    }

    /// Returns the fallback label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the fallback outcome
    #[must_use]
    pub const fn outcome(&self) -> &O {
        &self.outcome
    }
}
