// preflight-core/src/runtime/quota.rs
// ============================================================================
// Module: Quota Ledger
// Description: Calendar-day counting of expensive-path consumption.
// Purpose: Enforce the daily expensive-path cap with check-before-increment.
// Dependencies: time
// ============================================================================

//! ## Overview
//! The ledger counts expensive-path calls against a daily limit. The window
//! is the calendar day of the caller-supplied date: whenever the date differs
//! from the recorded window start, the count resets to zero before any other
//! bookkeeping. Consumption checks the limit before incrementing, so the
//! count never exceeds the limit.
//!
//! The ledger holds no clock. Callers pass the current date, which keeps
//! window-rollover tests free of real time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU32;

use time::Date;

// ============================================================================
// SECTION: Quota Ledger
// ============================================================================

/// Daily expensive-path counter with calendar-day reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaLedger {
    /// Expensive calls consumed within the current window.
    used_today: u32,
    /// Maximum expensive calls per calendar day.
    limit: NonZeroU32,
    /// Date the current window opened.
    window_start: Date,
}

impl QuotaLedger {
    /// Opens a fresh ledger with nothing consumed.
    #[must_use]
    pub const fn new(limit: NonZeroU32, window_start: Date) -> Self {
        Self {
            used_today: 0,
            limit,
            window_start,
        }
    }

    /// Returns the daily limit.
    #[must_use]
    pub const fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Returns the count consumed in the current window.
    #[must_use]
    pub const fn used_today(&self) -> u32 {
        self.used_today
    }

    /// Returns the date the current window opened.
    #[must_use]
    pub const fn window_start(&self) -> Date {
        self.window_start
    }

    /// Resets the count when `today` falls outside the recorded window.
    pub fn roll_window(&mut self, today: Date) {
        if today != self.window_start {
            self.window_start = today;
            self.used_today = 0;
        }
    }

    /// Attempts to consume one expensive call on the given date.
    ///
    /// Rolls the window first, then checks the limit before incrementing.
    /// Returns `false` without counting when the limit is already reached.
    pub fn try_consume(&mut self, today: Date) -> bool {
        self.roll_window(today);
        if self.used_today >= self.limit.get() {
            return false;
        }
        self.used_today += 1;
        true
    }

    /// Returns how many expensive calls remain on the given date.
    ///
    /// Rolls the window first, so a new day reports the full limit.
    pub fn remaining(&mut self, today: Date) -> u32 {
        self.roll_window(today);
        self.limit.get().saturating_sub(self.used_today)
    }
}
