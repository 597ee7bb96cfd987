//! Round countdown clock.
//!
//! Decrements the countdown at most once per [`CLOCK_PERIOD_MS`] of monotonic time,
//! independent of how often the game loop polls. Time is passed in as milliseconds
//! since boot so the clock works with `embassy_time::Instant` on the device and
//! `std::time::Instant` in the simulator.
//!
//! Missed seconds are not backfilled: a late call decrements once and re-anchors.
//! The anchor is kept across round resets.

use crate::config::CLOCK_PERIOD_MS;
use crate::state::RoundState;

/// One-second tick source for the countdown.
#[derive(Clone, Copy, Debug)]
pub struct RoundClock {
    /// Instant (ms) of the last decrement, or of the round start.
    anchor_ms: u64,
}

impl RoundClock {
    /// Create a clock anchored at `now_ms`.
    pub const fn new(now_ms: u64) -> Self { Self { anchor_ms: now_ms } }

    /// Advance the countdown if a full period has elapsed.
    ///
    /// Returns `true` if `seconds_remaining` was decremented.
    pub fn tick(
        &mut self,
        now_ms: u64,
        round: &mut RoundState,
    ) -> bool {
        if round.seconds_remaining == 0 || now_ms.saturating_sub(self.anchor_ms) < CLOCK_PERIOD_MS {
            return false;
        }

        round.seconds_remaining -= 1;
        self.anchor_ms = now_ms;
        true
    }

    /// Instant of the last decrement (ms).
    #[inline]
    pub const fn anchor_ms(&self) -> u64 { self.anchor_ms }
}

// =============================================================================
// Unit Tests
// =============================================================================
