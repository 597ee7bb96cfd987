//! Round structure, timing and scoring constants.
//!
//! These values are calibrated against the reference hardware and are used verbatim
//! by the tests. Do not round them.

/// Countdown length of a round in seconds.
pub const ROUND_LENGTH_SECS: u32 = 30;

/// Minimum monotonic time between two countdown decrements.
pub const CLOCK_PERIOD_MS: u64 = 1000;

/// Wait after every gameplay tick (~20 Hz polling).
pub const TICK_INTERVAL_MS: u64 = 50;

/// How long the round-over screen stays up before the next round starts.
pub const ROUND_OVER_PAUSE_MS: u64 = 2000;

/// Buzzer frequency played when the target is collected.
pub const SCORE_TONE_HZ: u32 = 500;

/// Buzzer duration played when the target is collected.
pub const SCORE_TONE_DURATION_MS: u32 = 1000;

/// Offset added to the avatar coordinate before comparing it with the target.
/// Compensates for the different glyph anchors of the two fonts.
pub const COLLECT_OFFSET: i32 = 2;
