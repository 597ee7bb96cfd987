//! Async tasks for the firmware.
//!
//! - `buzzer`: PWM tone playback, fed by the game loop through a signal

pub mod buzzer;

pub use buzzer::{SignalTone, buzzer_task};
