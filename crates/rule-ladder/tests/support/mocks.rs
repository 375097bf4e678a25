// rule-ladder/tests/support/mocks.rs
// ============================================================================
// Module: Mock Predicates
// Description: Shared mock predicates, inputs, and traces for ladder tests.
// ============================================================================
//! ## Overview
//! Mock predicate, input, outcome, and trace types used by integration tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use rule_ladder::LadderTrace;
use rule_ladder::RungPredicate;
use serde::Deserialize;
use serde::Serialize;

// ========================================================================
// Mock Predicate Types
// ========================================================================

/// Simple mock predicate for testing the ladder system.
///
/// This predicate type is domain-agnostic and allows testing ordering and
/// fallback semantics without any domain-specific logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MockPredicate {
    /// Always matches.
    AlwaysTrue,

    /// Never matches.
    AlwaysFalse,

    /// Matches when the input value is greater than or equal to the threshold.
    ValueGte(i32),

    /// Matches when the input text contains the given needle.
    TextContains(String),
}

/// Returns every predicate variant, keeping coverage of rarely-used arms.
#[must_use]
pub fn all_variants() -> Vec<MockPredicate> {
    vec![
        MockPredicate::AlwaysTrue,
        MockPredicate::AlwaysFalse,
        MockPredicate::ValueGte(0),
        MockPredicate::TextContains(String::new()),
    ]
}

// ========================================================================
// Mock Input Type
// ========================================================================

/// Mock input that provides test data for predicate evaluation.
///
/// Borrows its text so tests exercise the zero-copy input design the
/// predicate contract is built around.
pub struct MockInput<'a> {
    /// Free text inspected by lexical predicates.
    pub text: &'a str,

    /// Numeric value inspected by threshold predicates.
    pub value: i32,
}

impl<'a> MockInput<'a> {
    /// Creates a new mock input with the given data.
    #[must_use]
    pub const fn new(text: &'a str, value: i32) -> Self {
        Self {
            text,
            value,
        }
    }
}

// ========================================================================
// RungPredicate Implementation
// ========================================================================

impl RungPredicate for MockPredicate {
    type Input<'a> = MockInput<'a>;

    fn matches(&self, input: &Self::Input<'_>) -> bool {
        match self {
            Self::AlwaysTrue => true,
            Self::AlwaysFalse => false,
            Self::ValueGte(threshold) => input.value >= *threshold,
            Self::TextContains(needle) => input.text.contains(needle.as_str()),
        }
    }
}

// ========================================================================
// Mock Outcome Type
// ========================================================================

/// Outcome type used by ladder tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MockOutcome {
    /// First distinguishable outcome.
    Alpha,

    /// Second distinguishable outcome.
    Beta,

    /// Third distinguishable outcome.
    Gamma,
}

// ========================================================================
// Recording Trace
// ========================================================================

/// Trace hook that records every consultation for later assertions.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    /// Consulted rungs as (index, label, matched) in evaluation order.
    pub steps: Vec<(usize, String, bool)>,

    /// Label of the fallback, when evaluation reached it.
    pub fallback: Option<String>,
}

impl LadderTrace<MockPredicate> for RecordingTrace {
    fn on_rung_evaluated(
        &mut self,
        index: usize,
        label: &str,
        _predicate: &MockPredicate,
        matched: bool,
    ) {
        self.steps.push((index, label.to_string(), matched));
    }

    fn on_fallback_selected(&mut self, label: &str) {
        self.fallback = Some(label.to_string());
    }
}
