//! Game state.
//!
//! - `round`: Score, countdown and round phase
//! - `game`: Target placement plus the scoring and reset policy

mod game;
mod round;

pub use game::{GameState, ScoreEvent};
pub use round::{Phase, RoundState};
