//! Gameplay frame: avatar, target, score and countdown.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;
use u8g2_fonts::types::{FontColor, VerticalPosition};

use super::styles::{AVATAR_FONT, AVATAR_GLYPH, HUD_STYLE, TARGET_FONT, TARGET_GLYPH};
use crate::config::{SCORE_POS, TIME_POS};
use crate::display::{Flush, Screen};
use crate::input::ScreenPoint;
use crate::state::RoundState;

/// Render one gameplay frame and present it.
pub fn render_frame<F: Flush>(
    screen: &mut Screen<F>,
    round: &RoundState,
    avatar: ScreenPoint,
    target: ScreenPoint,
) -> Result<(), F::Error> {
    screen.frame(|fb| draw_playfield(fb, round, avatar, target))
}

/// Draw the gameplay layout. Glyph positions are baseline-left anchors.
pub fn draw_playfield<D>(
    display: &mut D,
    round: &RoundState,
    avatar: ScreenPoint,
    target: ScreenPoint,
) where
    D: DrawTarget<Color = BinaryColor>,
    D::Error: core::fmt::Debug,
{
    AVATAR_FONT
        .render(
            AVATAR_GLYPH,
            avatar,
            VerticalPosition::Baseline,
            FontColor::Transparent(BinaryColor::On),
            display,
        )
        .ok();

    TARGET_FONT
        .render(
            TARGET_GLYPH,
            target,
            VerticalPosition::Baseline,
            FontColor::Transparent(BinaryColor::On),
            display,
        )
        .ok();

    let mut text: String<16> = String::new();
    write!(text, "Score: {}", round.score).ok();
    Text::new(&text, SCORE_POS, HUD_STYLE).draw(display).ok();

    text.clear();
    write!(text, "Time: {}", round.seconds_remaining).ok();
    Text::new(&text, TIME_POS, HUD_STYLE).draw(display).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::display::Framebuffer;

    fn hud_area() -> Rectangle { Rectangle::new(Point::new(0, 0), Size::new(64, 22)) }

    fn field_area() -> Rectangle { Rectangle::new(Point::new(0, 24), Size::new(128, 40)) }

    #[test]
    fn test_hud_is_drawn_top_left() {
        let mut fb = Framebuffer::new();
        draw_playfield(&mut fb, &RoundState::new(), Point::new(100, 40), Point::new(20, 50));
        assert!(fb.count_on(&hud_area()) > 0);
        // Nothing on the right half of the HUD rows besides text
        assert_eq!(fb.count_on(&Rectangle::new(Point::new(90, 0), Size::new(38, 12))), 0);
    }

    #[test]
    fn test_glyphs_are_drawn_in_the_field() {
        let mut fb = Framebuffer::new();
        draw_playfield(&mut fb, &RoundState::new(), Point::new(100, 40), Point::new(20, 50));
        assert!(fb.count_on(&field_area()) > 0);
    }

    #[test]
    fn test_hud_changes_with_countdown() {
        let mut full = Framebuffer::new();
        let mut late = Framebuffer::new();
        let mut round = RoundState::new();
        draw_playfield(&mut full, &round, Point::new(100, 40), Point::new(20, 50));
        round.seconds_remaining = 7;
        draw_playfield(&mut late, &round, Point::new(100, 40), Point::new(20, 50));
        assert_ne!(full, late);
    }
}
