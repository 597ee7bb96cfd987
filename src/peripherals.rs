//! Seams between the game core and the hardware.
//!
//! The game loop only talks to these traits (and [`Flush`](crate::display::Flush) for
//! the panel). The firmware binary backs them with the MPU6050 driver and a PWM buzzer
//! task; the simulator backs them with the mouse and stdout; the tests use fakes.

use crate::input::TiltSample;

/// Source of raw tilt readings.
pub trait Accelerometer {
    type Error;

    /// Read the current raw acceleration on all three axes.
    fn read_acceleration(&mut self) -> Result<TiltSample, Self::Error>;
}

/// Fire-and-forget audio feedback.
pub trait Tone {
    /// Start a tone. Must not block the game loop for the tone's duration.
    fn play_tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    );
}

impl<T: Accelerometer + ?Sized> Accelerometer for &mut T {
    type Error = T::Error;

    fn read_acceleration(&mut self) -> Result<TiltSample, Self::Error> { (**self).read_acceleration() }
}

impl<T: Tone + ?Sized> Tone for &mut T {
    fn play_tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) {
        (**self).play_tone(frequency_hz, duration_ms);
    }
}
