// preflight-core/src/runtime/clock.rs
// ============================================================================
// Module: System Clock
// Description: Wall-clock implementation of the Clock interface.
// Purpose: Supply the ambient time source hosts use outside of tests.
// Dependencies: crate::interfaces, time
// ============================================================================

//! ## Overview
//! Decision logic takes time as a parameter; this module supplies the one
//! place wall-clock time enters a host process. Local offset is preferred so
//! quota windows follow the operator's calendar day, with UTC as the fallback
//! when the offset cannot be determined.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::OffsetDateTime;

use crate::interfaces::Clock;

// ============================================================================
// SECTION: System Clock
// ============================================================================

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}
