//! Tilt Catch Simulator for Windows/Desktop.
//!
//! Runs the firmware's game loop in an `embedded-graphics-simulator` window. The mouse
//! pointer stands in for the accelerometer: wherever it points is where the avatar goes.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod peripherals;
mod timing;

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorEvent, Window};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tilt_catch::GameLoop;
use tilt_catch::display::Screen;
use tilt_catch::input::TiltMapper;

use crate::peripherals::{ConsoleTone, MouseTilt, SimPanel};
use crate::timing::{EVENT_POLL, Uptime};

fn main() {
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let mut window = Window::new("Tilt Catch Sim", &output_settings);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let uptime = Uptime::start();
    let mapper = TiltMapper::default();

    let mut game = GameLoop::new(Pcg32::seed_from_u64(seed), uptime.millis()).with_mapper(mapper);
    let mut sensor = MouseTilt::new(mapper);
    let mut screen = Screen::new(SimPanel::new());
    let mut tone = ConsoleTone;

    println!("Round started, target at {:?}", game.state().target());

    loop {
        let report = game.tick(uptime.millis(), &mut sensor, &mut screen, &mut tone);

        if let Some(event) = report.score {
            println!("Score {}, target moved to {:?}", event.score, event.target);
        }
        if let Some(final_score) = report.round_over {
            println!("Round over, final score {final_score}");
        }
        if report.round_reset {
            println!("New round");
        }

        window.update(screen.flusher().display());

        // Wait out the tick while keeping the window responsive
        let deadline = Instant::now() + Duration::from_millis(report.wait_ms);
        loop {
            for event in window.events() {
                match event {
                    SimulatorEvent::Quit => return,
                    SimulatorEvent::MouseMove { point } => sensor.move_to(point),
                    _ => {}
                }
            }

            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(EVENT_POLL.min(deadline - now));
        }
    }
}
