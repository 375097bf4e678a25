// preflight-core/src/runtime/sinks.rs
// ============================================================================
// Module: Event Sinks
// Description: Bundled event sink implementations.
// Purpose: Provide drop-in sinks for silence, test capture, and JSON lines.
// Dependencies: crate::core, crate::interfaces, serde, serde_json
// ============================================================================

//! ## Overview
//! Three sinks cover the common deployments: [`NoopEventSink`] discards
//! everything, [`MemoryEventSink`] captures events for assertions, and
//! [`WriterEventSink`] appends one JSON object per line to any writer.
//!
//! Sinks are fire-and-forget. The writer sink swallows I/O errors rather
//! than surfacing them into guard or routing outcomes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::PreflightEvent;
use crate::interfaces::EventSink;

// ============================================================================
// SECTION: Noop Sink
// ============================================================================

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: &PreflightEvent) {}
}

// ============================================================================
// SECTION: Memory Sink
// ============================================================================

/// Sink that retains events in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<PreflightEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PreflightEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns how many events have been recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` when no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, event: &PreflightEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ============================================================================
// SECTION: Writer Sink
// ============================================================================

/// Envelope serialized for each written event.
#[derive(Serialize)]
struct EventEnvelope<'a> {
    /// Milliseconds since the Unix epoch at write time.
    timestamp_ms: u128,
    /// Event severity label.
    severity: &'static str,
    /// The event payload, flattened into the envelope.
    #[serde(flatten)]
    event: &'a PreflightEvent,
}

/// Sink that appends events as JSON lines to a writer.
///
/// The envelope adds a write-time timestamp and a severity label to the
/// event payload. Serialization or write failures are dropped silently.
#[derive(Debug)]
pub struct WriterEventSink<W: Write + Send> {
    /// The wrapped writer.
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterEventSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl WriterEventSink<File> {
    /// Opens a sink appending to the given file path, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be opened.
    pub fn for_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> EventSink for WriterEventSink<W> {
    fn record(&self, event: &PreflightEvent) {
        let envelope = EventEnvelope {
            timestamp_ms: unix_timestamp_ms(),
            severity: event.severity().as_str(),
            event,
        };
        let Ok(line) = serde_json::to_string(&envelope) else {
            return;
        };
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{line}");
    }
}

/// Returns milliseconds since the Unix epoch, zero if the clock is skewed.
fn unix_timestamp_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}
