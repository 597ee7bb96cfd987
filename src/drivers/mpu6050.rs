//! MPU6050 6-axis IMU, accelerometer only.
//!
//! Configuration after [`Mpu6050::init`]:
//! - awake, clock from the X gyro PLL
//! - gyro +-250 dps, accelerometer +-2 g (16384 LSB/g)
//!
//! Samples are read as one 6-byte burst from `ACCEL_XOUT_H`, big-endian.

use embedded_hal::i2c::I2c;

use crate::input::TiltSample;
use crate::peripherals::Accelerometer;

// Registers
const PWR_MGMT_1: u8 = 0x6B;
const GYRO_CONFIG: u8 = 0x1B;
const ACCEL_CONFIG: u8 = 0x1C;
const ACCEL_XOUT_H: u8 = 0x3B;
const WHO_AM_I: u8 = 0x75;

/// PWR_MGMT_1: sleep cleared, CLKSEL = PLL with X gyro reference.
const CLOCK_PLL_XGYRO: u8 = 0x01;
/// GYRO_CONFIG FS_SEL = 0.
const GYRO_FS_250DPS: u8 = 0x00;
/// ACCEL_CONFIG AFS_SEL = 0.
const ACCEL_FS_2G: u8 = 0x00;

/// Device ID held in WHO_AM_I bits [6:1].
const DEVICE_ID: u8 = 0x34;

/// MPU6050 errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SensorError<E> {
    /// The device answered but the health check failed (WHO_AM_I value).
    Unavailable(u8),
    /// Bus error (no ack, arbitration loss, ...).
    Bus(E),
}

impl<E> From<E> for SensorError<E> {
    fn from(e: E) -> Self { Self::Bus(e) }
}

/// MPU6050 on an I2C bus.
pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub const fn new(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Run the health check and configure the device.
    pub fn init(&mut self) -> Result<(), SensorError<I2C::Error>> {
        let who = self.who_am_i()?;
        if (who >> 1) & 0x3F != DEVICE_ID {
            return Err(SensorError::Unavailable(who));
        }

        self.write_reg(PWR_MGMT_1, CLOCK_PLL_XGYRO)?;
        self.write_reg(GYRO_CONFIG, GYRO_FS_250DPS)?;
        self.write_reg(ACCEL_CONFIG, ACCEL_FS_2G)?;
        Ok(())
    }

    /// Raw WHO_AM_I register.
    pub fn who_am_i(&mut self) -> Result<u8, SensorError<I2C::Error>> { self.read_reg(WHO_AM_I) }

    /// Read the raw acceleration on all three axes.
    pub fn read_sample(&mut self) -> Result<TiltSample, SensorError<I2C::Error>> {
        let mut buf = [0u8; 6];
        self.i2c.write_read(self.address, &[ACCEL_XOUT_H], &mut buf)?;

        Ok(TiltSample::new(
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ))
    }

    /// Release the bus.
    pub fn release(self) -> I2C { self.i2c }

    fn write_reg(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), SensorError<I2C::Error>> {
        self.i2c.write(self.address, &[reg, value])?;
        Ok(())
    }

    fn read_reg(
        &mut self,
        reg: u8,
    ) -> Result<u8, SensorError<I2C::Error>> {
        let mut out = [0u8];
        self.i2c.write_read(self.address, &[reg], &mut out)?;
        Ok(out[0])
    }
}

impl<I2C: I2c> Accelerometer for Mpu6050<I2C> {
    type Error = SensorError<I2C::Error>;

    fn read_acceleration(&mut self) -> Result<TiltSample, Self::Error> { self.read_sample() }
}

// =============================================================================
// Unit Tests
// =============================================================================
