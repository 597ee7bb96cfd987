//! Off-screen rendering for the 128x64 monochrome panel.
//!
//! - `framebuffer`: 1-bit page-major framebuffer implementing `DrawTarget`
//! - `screen`: Double buffer and the scoped frame that flips and presents it

mod framebuffer;
mod screen;

pub use framebuffer::{BUFFER_SIZE, Framebuffer, HEIGHT, PAGES, WIDTH};
pub use screen::{DoubleBuffer, Flush, Screen};
