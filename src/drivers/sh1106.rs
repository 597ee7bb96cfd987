//! SH1106 128x64 monochrome OLED over I2C.
//!
//! The SH1106 has 132 columns of display RAM; a 128-pixel module is wired to columns
//! 2..130, so every page write starts at column [`COLUMN_OFFSET`].
//!
//! Each I2C transfer starts with a control byte: `0x00` for a command stream, `0x40`
//! for a data stream.

use embedded_hal::i2c::I2c;

use crate::display::{Flush, Framebuffer, PAGES, WIDTH};

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

// SH1106 Commands
const DISPLAY_OFF: u8 = 0xAE;
const DISPLAY_ON: u8 = 0xAF;
const SET_CLOCK_DIV: u8 = 0xD5;
const SET_MULTIPLEX: u8 = 0xA8;
const SET_DISPLAY_OFFSET: u8 = 0xD3;
const SET_START_LINE: u8 = 0x40;
const SET_DC_DC: u8 = 0xAD;
const SEGMENT_REMAP: u8 = 0xA1;
const COM_SCAN_DEC: u8 = 0xC8;
const SET_COM_PINS: u8 = 0xDA;
const SET_CONTRAST: u8 = 0x81;
const SET_PRECHARGE: u8 = 0xD9;
const SET_VCOM_DESELECT: u8 = 0xDB;
const RESUME_FROM_RAM: u8 = 0xA4;
const NORMAL_DISPLAY: u8 = 0xA6;
const SET_PAGE: u8 = 0xB0;
const SET_COLUMN_LOW: u8 = 0x00;
const SET_COLUMN_HIGH: u8 = 0x10;

/// First visible RAM column.
pub const COLUMN_OFFSET: u8 = 2;

/// Power-up sequence: 64-line multiplex, flipped to match the module mounting,
/// internal DC-DC on, then display on.
const INIT_SEQUENCE: [u8; 25] = [
    CONTROL_COMMAND,
    DISPLAY_OFF,
    SET_CLOCK_DIV,
    0x80,
    SET_MULTIPLEX,
    0x3F,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_START_LINE,
    SET_DC_DC,
    0x8B,
    SEGMENT_REMAP,
    COM_SCAN_DEC,
    SET_COM_PINS,
    0x12,
    SET_CONTRAST,
    0xCF,
    SET_PRECHARGE,
    0x22,
    SET_VCOM_DESELECT,
    0x40,
    RESUME_FROM_RAM,
    NORMAL_DISPLAY,
    DISPLAY_ON,
    // Park the RAM pointer on page 0
    SET_PAGE,
];

/// SH1106 panel on an I2C bus.
pub struct Sh1106<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Sh1106<I2C> {
    pub const fn new(
        i2c: I2C,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Initialize the controller and switch the panel on.
    pub fn init(&mut self) -> Result<(), I2C::Error> { self.i2c.write(self.address, &INIT_SEQUENCE) }

    /// Write a full frame, page by page.
    pub fn write_frame(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), I2C::Error> {
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            let address = [
                CONTROL_COMMAND,
                SET_PAGE | page as u8,
                SET_COLUMN_LOW | COLUMN_OFFSET,
                SET_COLUMN_HIGH,
            ];
            self.i2c.write(self.address, &address)?;

            data[1..].copy_from_slice(frame.page(page));
            self.i2c.write(self.address, &data)?;
        }
        Ok(())
    }

    /// Release the bus.
    pub fn release(self) -> I2C { self.i2c }
}

impl<I2C: I2c> Flush for Sh1106<I2C> {
    type Error = I2C::Error;

    fn flush(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Self::Error> {
        self.write_frame(frame)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
