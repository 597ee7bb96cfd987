//! Application configuration.
//!
//! - `layout`: Display dimensions and screen anchors
//! - `tilt`: Accelerometer calibration and dead zones
//! - `round`: Round timing, scoring feedback and collision offset
//! - `board`: Bus addresses and frequencies for the reference hardware

pub mod board;
pub mod layout;
pub mod round;
pub mod tilt;

// Re-export layout constants at config level for convenience
pub use layout::{
    FINAL_SCORE_POS,
    GAME_OVER_POS,
    SCORE_POS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TARGET_MARGIN,
    TIME_POS,
};
// Re-export round constants at config level for convenience
pub use round::{
    CLOCK_PERIOD_MS,
    COLLECT_OFFSET,
    ROUND_LENGTH_SECS,
    ROUND_OVER_PAUSE_MS,
    SCORE_TONE_DURATION_MS,
    SCORE_TONE_HZ,
    TICK_INTERVAL_MS,
};
