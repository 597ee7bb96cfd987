//! Tilt Catch firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Tilt the board to steer the avatar onto the target before the 30 second round ends.
//!
//! # Hardware
//!
//! - MPU6050 accelerometer and SH1106 128x64 OLED sharing I2C0 (SDA GP4, SCL GP5)
//! - Piezo buzzer on GP16 (PWM)
//!
//! # Architecture
//!
//! - Main task: runs the game loop and sleeps for the wait each tick asks for
//! - Buzzer task: plays score tones so the loop never blocks on audio

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tilt-catch"),
    embassy_rp::binary_info::rp_program_description!(c"Tilt-controlled catch game on SH1106 OLED"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Mix the boot sample and the timer into an RNG seed.
#[cfg(target_arch = "arm")]
fn rng_seed(
    sample: tilt_catch::TiltSample,
    ticks: u64,
) -> u64 {
    let axes = (u64::from(sample.x as u16) << 32) | (u64::from(sample.y as u16) << 16) | u64::from(sample.z as u16);
    axes ^ ticks.rotate_left(17)
}

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) {
    use core::cell::RefCell;

    use defmt::{error, info, warn};
    use embassy_rp::i2c::{Config as I2cConfig, I2c};
    use embassy_rp::pwm::{Config as PwmConfig, Pwm};
    use embassy_time::{Instant, Timer};
    use embedded_hal_bus::i2c::RefCellDevice;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use tilt_catch::GameLoop;
    use tilt_catch::config::board::{I2C_FREQUENCY_HZ, MPU6050_ADDR, SH1106_ADDR};
    use tilt_catch::display::Screen;
    use tilt_catch::drivers::{Mpu6050, Sh1106};

    use crate::tasks::{SignalTone, buzzer_task};

    info!("Tilt Catch starting...");

    let p = embassy_rp::init(Default::default());

    // Shared I2C0 bus: SCL=5, SDA=4
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let bus = RefCell::new(i2c);

    // Accelerometer: fatal if missing
    let mut imu = Mpu6050::new(RefCellDevice::new(&bus), MPU6050_ADDR);
    if let Err(e) = imu.init() {
        error!("MPU6050 init failed: {}", e);
        loop {
            cortex_m::asm::wfi();
        }
    }
    info!("MPU6050 initialized");

    let mut panel = Sh1106::new(RefCellDevice::new(&bus), SH1106_ADDR);
    if let Err(e) = panel.init() {
        warn!("SH1106 init failed: {}", e);
    } else {
        info!("SH1106 initialized");
    }
    let mut screen = Screen::new(panel);

    // Buzzer on PWM slice 0 channel A, silent until the first request
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, PwmConfig::default());
    spawner.spawn(buzzer_task(pwm)).unwrap();
    info!("Buzzer task spawned");

    let boot_sample = imu.read_sample().unwrap_or_default();
    let seed = rng_seed(boot_sample, Instant::now().as_ticks());
    let mut game = GameLoop::new(Pcg32::seed_from_u64(seed), Instant::now().as_millis());
    let mut tone = SignalTone;
    info!("Round started, target at ({}, {})", game.state().target().x, game.state().target().y);

    loop {
        let report = game.tick(Instant::now().as_millis(), &mut imu, &mut screen, &mut tone);

        if let Some(event) = report.score {
            info!("Score {}, target moved to ({}, {})", event.score, event.target.x, event.target.y);
        }
        if let Some(final_score) = report.round_over {
            info!("Round over, final score {}", final_score);
        }
        if report.round_reset {
            info!("New round");
        }
        if report.sensor_misses > 0 {
            warn!("Accelerometer read failed ({} in a row), holding last sample", report.sensor_misses);
        }
        if report.display_fault {
            warn!("Display flush failed");
        }

        Timer::after_millis(report.wait_ms).await;
    }
}

/// Placeholder for non-ARM targets (host builds of the workspace).
#[cfg(not(target_arch = "arm"))]
fn main() {
    println!("tilt-catch targets the RP2350 (thumbv8m.main-none-eabihf); use the simulator package on the desktop");
}
