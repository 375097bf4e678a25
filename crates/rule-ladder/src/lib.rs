// rule-ladder/src/lib.rs
// ============================================================================
// Module: Rule Ladder Root
// Description: Public API surface for the prioritized rule-table subsystem.
// Purpose: Wire together core modules, re-exports, and the ladder macro.
// Dependencies: crate::{builder, error, ladder, rung, trace, traits}
// ============================================================================

//! ## Overview
//! This module exposes the building blocks (errors, rungs, ladders, traces)
//! plus a construction macro so callers can express prioritized first-match
//! rule tables as data. Ordering lives in the ladder, never in caller code;
//! the mandatory fallback makes every evaluation total.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod builder;
pub mod error;
pub mod ladder;
pub mod rung;
pub mod trace;
pub mod traits;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::LadderBuilder;
pub use error::LadderError;
pub use error::LadderResult;
pub use ladder::Ladder;
pub use ladder::MAX_RUNGS;
pub use ladder::MatchPosition;
pub use ladder::Verdict;
pub use rung::Fallback;
pub use rung::Rung;
pub use trace::LadderTrace;
pub use trace::NoopTrace;
pub use traits::RungPredicate;

// ============================================================================
// SECTION: Convenience Constructors
// ============================================================================

/// Convenience functions for creating ladder parts without builders
pub mod convenience {
    use super::Fallback;
    use super::Rung;

    /// Creates a rung from its label, predicate, and outcome
    #[must_use]
    pub fn rung<P, O>(label: impl Into<String>, predicate: P, outcome: O) -> Rung<P, O> {
        Rung::new(label, predicate, outcome)
    }

    /// Creates a fallback from its label and outcome
    #[must_use]
    pub fn fallback<O>(label: impl Into<String>, outcome: O) -> Fallback<O> {
        Fallback::new(label, outcome)
    }
}

// ============================================================================
// SECTION: Ladder Macro
// ============================================================================

/// Macro for ergonomic ladder construction
///
/// This macro provides a DSL-like syntax for building ladders in priority
/// order; the trailing `fallback` entry is mandatory, mirroring
/// [`Ladder::new`]. The expansion validates, so the expression yields a
/// [`LadderResult`].
///
/// ```ignore
/// let ladder = ladder! {
///     rung("cheap-known", informational, Route::Cheap),
///     rung("urgent", urgency_high, Route::Expensive),
///     fallback("default", Route::Expensive),
/// }?;
/// ```
#[macro_export]
macro_rules! ladder {
    // Base case: fallback only (a rungless ladder is legal)
    (fallback($label:expr, $outcome:expr) $(,)?) => {
        $crate::ladder::Ladder::new(
            ::std::vec::Vec::new(),
            $crate::rung::Fallback::new($label, $outcome),
        )
    };

    // General case: one or more comma-terminated rungs followed by the fallback
    ($(rung($label:expr, $predicate:expr, $outcome:expr),)+
     fallback($flabel:expr, $foutcome:expr) $(,)?) => {
        $crate::ladder::Ladder::new(
            ::std::vec![$($crate::rung::Rung::new($label, $predicate, $outcome)),+],
            $crate::rung::Fallback::new($flabel, $foutcome),
        )
    };
}
