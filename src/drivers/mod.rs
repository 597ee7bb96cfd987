//! Hardware drivers for the reference board.
//!
//! - `mpu6050`: MPU6050 accelerometer over `embedded-hal` I2C
//! - `sh1106`: SH1106 128x64 OLED controller over `embedded-hal` I2C
//!
//! Both are generic over the bus so they can be exercised on the host with fake I2C
//! devices. The firmware shares one I2C0 bus between them.

pub mod mpu6050;
pub mod sh1106;

pub use mpu6050::{Mpu6050, SensorError};
pub use sh1106::Sh1106;
