// preflight-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Providers
// Description: Knowledge source and probe implementations backed by memory.
// Purpose: Serve the cheap path and script the expensive path without I/O.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Two reference providers. [`StaticKnowledge`] answers the cheap path from a
//! topic table matched by case-insensitive substring, mirroring how the
//! router's lexical rules read queries. [`ScriptedProbe`] plays back a queue
//! of verification results, which is how tests and demos drive the expensive
//! path deterministically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::core::HealthReport;
use crate::core::Query;
use crate::core::TierId;
use crate::interfaces::KnowledgeSource;
use crate::interfaces::ProbeError;
use crate::interfaces::VerificationProbe;

// ============================================================================
// SECTION: Static Knowledge
// ============================================================================

/// Knowledge source answering from a fixed topic table.
///
/// Topics are stored lowercased; a lookup answers with the first topic
/// contained in the lowercased query text. Iteration order is the topic's
/// lexicographic order, so lookups are deterministic.
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledge {
    /// Lowercased topic to canned answer.
    answers: BTreeMap<String, String>,
}

impl StaticKnowledge {
    /// Creates an empty knowledge table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a canned answer for a topic, replacing any previous entry.
    #[must_use]
    pub fn with_answer(mut self, topic: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(topic.into().to_lowercase(), answer.into());
        self
    }

    /// Returns how many topics are registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns `true` when no topics are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl KnowledgeSource for StaticKnowledge {
    fn lookup(&self, query: &Query) -> Option<String> {
        let text_lower = query.text.to_lowercase();
        self.answers
            .iter()
            .find(|(topic, _)| text_lower.contains(topic.as_str()))
            .map(|(_, answer)| answer.clone())
    }
}

// ============================================================================
// SECTION: Scripted Probe
// ============================================================================

/// Interior state of a scripted probe.
#[derive(Debug, Default)]
struct ScriptState {
    /// Results to play back, front first.
    queue: VecDeque<Result<HealthReport, ProbeError>>,
    /// Number of verifications requested so far.
    calls: u64,
}

/// Verification probe playing back a scripted result queue.
///
/// Each verification pops the front of the queue regardless of tier. An
/// exhausted script reports a probe error rather than panicking.
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    /// Queue and call counter behind one lock.
    state: Mutex<ScriptState>,
}

impl ScriptedProbe {
    /// Creates a probe with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one scripted result to the queue.
    #[must_use]
    pub fn with_result(self, result: Result<HealthReport, ProbeError>) -> Self {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .queue
            .push_back(result);
        self
    }

    /// Returns how many verifications have been requested.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).calls
    }
}

impl VerificationProbe for ScriptedProbe {
    fn verify(&self, _tier: &TierId) -> Result<HealthReport, ProbeError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.calls += 1;
        state
            .queue
            .pop_front()
            .unwrap_or_else(|| Err(ProbeError::Probe("script exhausted".to_string())))
    }
}
