//! Buzzer task: plays tones on the piezo so the game loop never waits for them.
//!
//! The game loop posts a [`ToneRequest`] through [`TONE_SIGNAL`] and keeps going. The
//! task drives PWM slice 0 channel A (GPIO16) at 50% duty for the requested duration,
//! then silences it. A request posted while a tone is playing is picked up when the
//! current tone ends.

use defmt::{debug, info};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use tilt_catch::peripherals::Tone;

/// PWM counter clock after the divider: 150 MHz / 150.
const PWM_COUNTER_HZ: u32 = 1_000_000;
const PWM_DIVIDER: u8 = 150;

/// One tone to play.
#[derive(Clone, Copy, defmt::Format)]
pub struct ToneRequest {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

/// Latest tone request from the game loop.
pub static TONE_SIGNAL: Signal<CriticalSectionRawMutex, ToneRequest> = Signal::new();

/// [`Tone`] implementation that hands requests to [`buzzer_task`].
pub struct SignalTone;

impl Tone for SignalTone {
    fn play_tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) {
        TONE_SIGNAL.signal(ToneRequest {
            frequency_hz,
            duration_ms,
        });
    }
}

/// PWM configuration for a square wave at `frequency_hz` (silent for 0 Hz).
fn tone_config(frequency_hz: u32) -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = PWM_DIVIDER.into();
    if frequency_hz == 0 {
        config.enable = false;
        return config;
    }

    let top = (PWM_COUNTER_HZ / frequency_hz).clamp(2, u32::from(u16::MAX)) - 1;
    config.top = top as u16;
    config.compare_a = (top / 2) as u16;
    config.enable = true;
    config
}

/// Buzzer task - owns the PWM slice for the lifetime of the firmware.
#[embassy_executor::task]
pub async fn buzzer_task(mut pwm: Pwm<'static>) {
    info!("Buzzer task started");

    loop {
        let request = TONE_SIGNAL.wait().await;
        debug!("Tone {}", request);

        pwm.set_config(&tone_config(request.frequency_hz));
        Timer::after_millis(u64::from(request.duration_ms)).await;
        pwm.set_config(&tone_config(0));
    }
}
