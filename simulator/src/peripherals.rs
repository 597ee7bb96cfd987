//! Desktop stand-ins for the board peripherals.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use tilt_catch::TiltSample;
use tilt_catch::display::{Flush, Framebuffer, HEIGHT, WIDTH};
use tilt_catch::input::TiltMapper;
use tilt_catch::peripherals::{Accelerometer, Tone};

/// Mouse pointer as accelerometer: the raw sample that maps onto the pointer position.
pub struct MouseTilt {
    mapper: TiltMapper,
    pointer: Point,
}

impl MouseTilt {
    pub fn new(mapper: TiltMapper) -> Self {
        Self {
            mapper,
            pointer: Point::zero(),
        }
    }

    pub fn move_to(
        &mut self,
        pointer: Point,
    ) {
        self.pointer = pointer;
    }
}

impl Accelerometer for MouseTilt {
    type Error = Infallible;

    fn read_acceleration(&mut self) -> Result<TiltSample, Infallible> {
        Ok(TiltSample::new(
            self.mapper.x_axis().raw_for(self.pointer.x),
            self.mapper.y_axis().raw_for(self.pointer.y),
            // 1 g on Z, board lying flat
            16384,
        ))
    }
}

/// Simulator window contents, refreshed from each presented frame.
pub struct SimPanel {
    display: SimulatorDisplay<BinaryColor>,
}

impl SimPanel {
    pub fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(WIDTH as u32, HEIGHT as u32)),
        }
    }

    pub const fn display(&self) -> &SimulatorDisplay<BinaryColor> { &self.display }
}

impl Default for SimPanel {
    fn default() -> Self { Self::new() }
}

impl Flush for SimPanel {
    type Error = Infallible;

    fn flush(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Infallible> {
        let pixels = (0..HEIGHT as i32)
            .flat_map(|y| (0..WIDTH as i32).map(move |x| Point::new(x, y)))
            .map(|p| Pixel(p, BinaryColor::from(frame.is_on(p.x, p.y))));
        self.display.draw_iter(pixels)
    }
}

/// Buzzer stand-in: prints the tone instead of playing it.
pub struct ConsoleTone;

impl Tone for ConsoleTone {
    fn play_tone(
        &mut self,
        frequency_hz: u32,
        duration_ms: u32,
    ) {
        println!("[tone] {frequency_hz} Hz for {duration_ms} ms");
    }
}
