//! Game state: round bookkeeping, target placement, scoring and reset.
//!
//! `GameState` does no I/O. A collection is reported as a [`ScoreEvent`] and the game
//! loop decides what feedback to give. The round phase is only changed on request of
//! the loop ([`GameState::end_round`], [`GameState::reset`]).

use embedded_graphics::prelude::Point;
use rand::{Rng, RngCore};

use crate::collision::is_collected;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_MARGIN};
use crate::input::ScreenPoint;

use super::{Phase, RoundState};

/// Emitted on the tick the avatar collects the target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoreEvent {
    /// Score after the collection.
    pub score: u32,
    /// Where the target respawned.
    pub target: ScreenPoint,
}

/// Owns the round state and the target, and the RNG that places it.
pub struct GameState<R> {
    round: RoundState,
    target: ScreenPoint,
    rng: R,
}

impl<R: RngCore> GameState<R> {
    /// Start the first round with a randomly placed target.
    pub fn new(rng: R) -> Self {
        let mut state = Self {
            round: RoundState::new(),
            target: Point::zero(),
            rng,
        };
        state.respawn_target();
        state
    }

    #[inline]
    pub const fn round(&self) -> &RoundState { &self.round }

    #[inline]
    pub fn round_mut(&mut self) -> &mut RoundState { &mut self.round }

    #[inline]
    pub const fn target(&self) -> ScreenPoint { self.target }

    #[inline]
    pub const fn phase(&self) -> Phase { self.round.phase }

    /// Check the avatar against the target for this tick.
    ///
    /// On collection the target respawns and the score increments.
    pub fn on_tick(
        &mut self,
        avatar: ScreenPoint,
    ) -> Option<ScoreEvent> {
        if !is_collected(avatar, self.target) {
            return None;
        }

        self.respawn_target();
        self.round.score += 1;
        Some(ScoreEvent {
            score: self.round.score,
            target: self.target,
        })
    }

    /// Switch to the round-over phase once the loop has seen the countdown expire.
    pub fn end_round(&mut self) { self.round.phase = Phase::RoundOver; }

    /// Start a new round: score 0, full countdown, new target, back to playing.
    pub fn reset(&mut self) {
        self.round = RoundState::new();
        self.respawn_target();
    }

    /// Place the target uniformly inside the margin-inset screen area.
    fn respawn_target(&mut self) {
        let x = self.rng.random_range(TARGET_MARGIN..SCREEN_WIDTH as i32 - TARGET_MARGIN);
        let y = self.rng.random_range(TARGET_MARGIN..SCREEN_HEIGHT as i32 - TARGET_MARGIN);
        self.target = Point::new(x, y);
    }

    #[cfg(test)]
    pub(crate) fn place_target(
        &mut self,
        target: ScreenPoint,
    ) {
        self.target = target;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
