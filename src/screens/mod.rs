//! Screens drawn by the game loop.
//!
//! - `playfield`: Avatar, target and the score/countdown HUD (every gameplay tick)
//! - `round_over`: Banner and final score shown between rounds
//! - `styles`: Fonts, glyphs and text styles shared by both

mod playfield;
mod round_over;
mod styles;

pub use playfield::{draw_playfield, render_frame};
pub use round_over::{draw_round_over, render_round_over};
pub use styles::{AVATAR_FONT, AVATAR_GLYPH, HUD_STYLE, TARGET_FONT, TARGET_GLYPH};
