//! Timing for the simulator.
//!
//! The game loop reports waits in milliseconds; the simulator sleeps them in short
//! slices so the window keeps handling events during the round-over pause.

use std::time::{Duration, Instant};

/// Longest single sleep while waiting out a tick.
pub const EVENT_POLL: Duration = Duration::from_millis(10);

/// Milliseconds since the simulator started, the same clock the firmware gets from
/// `embassy_time::Instant`.
pub struct Uptime(Instant);

impl Uptime {
    pub fn start() -> Self { Self(Instant::now()) }

    pub fn millis(&self) -> u64 { self.0.elapsed().as_millis() as u64 }
}
