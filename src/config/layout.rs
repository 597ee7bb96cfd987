//! Display and layout configuration constants.
//!
//! Anchors are text baselines / glyph origins in pixel coordinates, matching the
//! 128x64 SH1106 panel.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SH1106 1.3" OLED: 128x64)
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 64;

/// Distance in pixels the target keeps from every screen edge.
/// Targets spawn in `[TARGET_MARGIN, SCREEN_WIDTH - TARGET_MARGIN)` on X (same on Y).
pub const TARGET_MARGIN: i32 = 6;

// =============================================================================
// Gameplay HUD
// =============================================================================

/// Score label baseline (row 1, top-left).
pub const SCORE_POS: Point = Point::new(0, 10);

/// Countdown label baseline (row 2, directly below the score).
pub const TIME_POS: Point = Point::new(0, 20);

// =============================================================================
// Round-over Screen
// =============================================================================

/// "Game Over" banner baseline.
pub const GAME_OVER_POS: Point = Point::new(30, 50);

/// Final score baseline.
pub const FINAL_SCORE_POS: Point = Point::new(30, 60);
