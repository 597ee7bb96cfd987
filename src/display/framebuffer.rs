//! 1-bit framebuffer in SH1106 page order.
//!
//! The panel is addressed in 8 pages of 8 pixel rows. Byte `page * WIDTH + x` holds
//! column `x` of that page, least significant bit on top. Keeping the buffer in this
//! layout lets the driver send each page as one contiguous I2C write.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Panel dimensions.
pub const WIDTH: usize = SCREEN_WIDTH as usize;
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// Framebuffer size in bytes (1,024).
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Monochrome framebuffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    /// Create a blank (all pixels off) framebuffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; BUFFER_SIZE],
        }
    }

    /// Turn every pixel off.
    #[inline]
    pub fn clear_buffer(&mut self) { self.buffer.fill(0); }

    /// One page (8 pixel rows) as sent to the panel.
    #[inline]
    pub fn page(
        &self,
        page: usize,
    ) -> &[u8] {
        &self.buffer[page * WIDTH..(page + 1) * WIDTH]
    }

    /// Raw buffer contents.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] { &self.buffer }

    /// Whether the pixel at (`x`, `y`) is lit. Out-of-bounds reads are off.
    pub fn is_on(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        match Self::index(x, y) {
            Some((idx, mask)) => self.buffer[idx] & mask != 0,
            None => false,
        }
    }

    /// Number of lit pixels inside `area`.
    pub fn count_on(
        &self,
        area: &Rectangle,
    ) -> usize {
        area.points().filter(|p| self.is_on(p.x, p.y)).count()
    }

    /// Byte index and bit mask for a pixel, or `None` when off-screen.
    #[inline]
    fn index(
        x: i32,
        y: i32,
    ) -> Option<(usize, u8)> {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let (x, y) = (x as usize, y as usize);
            Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
        } else {
            None
        }
    }

    /// Set a pixel in the framebuffer. Off-screen pixels are clipped.
    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: BinaryColor,
    ) {
        if let Some((idx, mask)) = Self::index(x, y) {
            if color.is_on() {
                self.buffer[idx] |= mask;
            } else {
                self.buffer[idx] &= !mask;
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.buffer.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
