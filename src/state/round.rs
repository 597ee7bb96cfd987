//! Round bookkeeping: score, countdown and phase.

use crate::config::ROUND_LENGTH_SECS;

/// Phase of the round state machine.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Phase {
    /// Normal gameplay ticks.
    #[default]
    Playing,
    /// Countdown expired; the round-over screen is pending or showing.
    RoundOver,
}

/// Score and countdown of the active round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct RoundState {
    pub score: u32,
    pub seconds_remaining: u32,
    pub phase: Phase,
}

impl RoundState {
    /// State at the start of a round.
    pub const fn new() -> Self {
        Self {
            score: 0,
            seconds_remaining: ROUND_LENGTH_SECS,
            phase: Phase::Playing,
        }
    }

    /// Whether the countdown has run out.
    #[inline]
    pub const fn is_expired(&self) -> bool { self.seconds_remaining == 0 }
}

impl Default for RoundState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
