// rule-ladder/src/error.rs
// ============================================================================
// Module: Ladder Error Definitions
// Description: Structured diagnostics for ladder construction and validation.
// Purpose: Provide rich diagnostics and helper constructors for ladder failures.
// Dependencies: serde::{Serialize, Deserialize}, std::fmt
// ============================================================================

//! ## Overview
//! Centralizes ladder construction errors, their user-facing messaging, and
//! serialization guarantees so construction and host layers remain decoupled
//! while still exposing actionable diagnostics. Evaluation itself has no error
//! path: a validated ladder always yields a verdict.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Errors that can occur while constructing or validating a ladder
///
/// This enum represents the ways a rule ladder can be rejected before use.
/// Evaluation never produces these: the mandatory fallback guarantees every
/// input receives a verdict, so all failure modes are front-loaded into
/// construction.
///
/// # Invariants
/// - None. Variants capture structured construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LadderError {
    // ============================================================================
    // SECTION: Label Errors
    // ============================================================================
    /// A rung label was empty or contained only whitespace
    EmptyRungLabel {
        /// Zero-based position of the offending rung
        index: usize,
    },

    /// The fallback label was empty or contained only whitespace
    EmptyFallbackLabel,

    /// Two rungs (or a rung and the fallback) share the same label
    ///
    /// Labels identify which rule matched in verdicts and traces, so they
    /// must be unique across the whole ladder including the fallback.
    DuplicateLabel {
        /// The label that appeared more than once
        label: String,
    },

    // ============================================================================
    // SECTION: Structural Errors
    // ============================================================================
    /// The ladder carries more rungs than the supported maximum
    TooManyRungs {
        /// Maximum allowed rung count
        max: usize,
        /// Rung count that was supplied
        actual: usize,
    },
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRungLabel {
                index,
            } => {
                write!(f, "Rung {index} has an empty label")
            }
            Self::EmptyFallbackLabel => {
                write!(f, "Fallback label is empty")
            }
            Self::DuplicateLabel {
                label,
            } => {
                write!(f, "Duplicate ladder label: {label}")
            }
            Self::TooManyRungs {
                max,
                actual,
            } => {
                write!(f, "Ladder has too many rungs: {actual} (max {max})")
            }
        }
    }
}

// ============================================================================
// SECTION: Standard Trait Implementations
// ============================================================================

impl std::error::Error for LadderError {}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl LadderError {
    /// Creates a duplicate-label error with the offending label
    pub fn duplicate_label(label: impl Into<String>) -> Self {
        Self::DuplicateLabel {
            label: label.into(),
        }
    }

    /// Creates an empty-rung-label error for the given position
    #[must_use]
    pub const fn empty_rung_label(index: usize) -> Self {
        Self::EmptyRungLabel {
            index,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for ladder operations
pub type LadderResult<T = ()> = Result<T, LadderError>;

// Tests are in the central tests module (tests/error.rs)
