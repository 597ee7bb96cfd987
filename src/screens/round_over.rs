//! Round-over screen.
//!
//! Replaces the whole gameplay layout: only the banner and the final score are drawn.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::styles::HUD_STYLE;
use crate::config::{FINAL_SCORE_POS, GAME_OVER_POS};
use crate::display::{Flush, Screen};

const BANNER: &str = "Game Over";

/// Render the round-over screen and present it.
pub fn render_round_over<F: Flush>(
    screen: &mut Screen<F>,
    final_score: u32,
) -> Result<(), F::Error> {
    screen.frame(|fb| draw_round_over(fb, final_score))
}

pub fn draw_round_over<D>(
    display: &mut D,
    final_score: u32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::new(BANNER, GAME_OVER_POS, HUD_STYLE).draw(display).ok();

    let mut text: String<24> = String::new();
    write!(text, "Final Score: {final_score}").ok();
    Text::new(&text, FINAL_SCORE_POS, HUD_STYLE).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::display::Framebuffer;
    use crate::screens::draw_playfield;
    use crate::state::RoundState;

    #[test]
    fn test_banner_and_score_drawn() {
        let mut fb = Framebuffer::new();
        draw_round_over(&mut fb, 3);
        assert!(fb.count_on(&Rectangle::new(Point::new(30, 38), Size::new(98, 26))) > 0);
    }

    #[test]
    fn test_no_gameplay_layout() {
        let mut fb = Framebuffer::new();
        draw_round_over(&mut fb, 0);
        // HUD rows and the left margin stay dark
        assert_eq!(fb.count_on(&Rectangle::new(Point::new(0, 0), Size::new(128, 30))), 0);
        assert_eq!(fb.count_on(&Rectangle::new(Point::new(0, 0), Size::new(28, 64))), 0);
    }

    #[test]
    fn test_final_score_is_rendered() {
        let mut zero = Framebuffer::new();
        let mut nine = Framebuffer::new();
        draw_round_over(&mut zero, 0);
        draw_round_over(&mut nine, 9);
        assert_ne!(zero, nine);
    }

    #[test]
    fn test_differs_from_playfield() {
        let mut over = Framebuffer::new();
        let mut play = Framebuffer::new();
        draw_round_over(&mut over, 0);
        draw_playfield(&mut play, &RoundState::new(), Point::new(100, 40), Point::new(20, 50));
        assert_ne!(over, play);
    }
}
