//! Pre-computed fonts and text styles.
//!
//! The avatar and target come from two different u8g2 glyph sets so they stay
//! visually distinct on a 1-bit panel. HUD text uses ProFont.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use profont::PROFONT_9_POINT;
use u8g2_fonts::{FontRenderer, fonts};

/// Font holding the avatar glyph.
pub const AVATAR_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_unifont_t_animals>();

/// Fish, code point 65 of the animals set.
pub const AVATAR_GLYPH: char = 'A';

/// Font holding the target glyph.
pub const TARGET_FONT: FontRenderer = FontRenderer::new::<fonts::u8g2_font_7x13_t_symbols>();

/// Sun, U+2600 (9728).
pub const TARGET_GLYPH: char = '\u{2600}';

/// Score, countdown and round-over text.
pub const HUD_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::On);
