//! Tilt Catch library - testable modules for the tilt-to-target game.
//!
//! This library contains the game core and the hardware-agnostic drivers. It can be
//! tested on the host machine. The binary (`main.rs`) uses this library and adds the
//! RP2350-specific code (clocks, I2C, PWM buzzer, embassy executor).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target aarch64-apple-darwin      # macOS
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Game core
pub mod clock;
pub mod collision;
pub mod game_loop;
pub mod input;
pub mod state;

// Rendering
pub mod display;
pub mod screens;

// Collaborator seams and the drivers implementing them
pub mod drivers;
pub mod peripherals;

// Re-export at top level for the binary and the simulator
pub use game_loop::{GameLoop, TickReport};
pub use input::{ScreenPoint, TiltSample};
pub use state::{GameState, Phase, RoundState, ScoreEvent};
