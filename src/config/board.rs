//! Reference hardware wiring.
//!
//! Pin mapping (Raspberry Pi Pico 2):
//! - I2C0 SDA: GPIO4
//! - I2C0 SCL: GPIO5
//! - Buzzer:   GPIO16 (PWM slice 0, channel A)

/// Shared I2C bus frequency (SH1106 and MPU6050 both support fast mode).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// MPU6050 address with AD0 pulled low.
pub const MPU6050_ADDR: u8 = 0x68;

/// SH1106 address with SA0 pulled low.
pub const SH1106_ADDR: u8 = 0x3C;
