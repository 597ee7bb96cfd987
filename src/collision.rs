//! Target collection check.
//!
//! Deliberately coarse: the target counts as collected when EITHER avatar
//! coordinate, shifted by [`COLLECT_OFFSET`], equals the matching target
//! coordinate. This is not a bounding-box or distance test.

use crate::config::COLLECT_OFFSET;
use crate::input::ScreenPoint;

/// Whether the avatar collects the target this frame.
#[inline]
pub const fn is_collected(
    avatar: ScreenPoint,
    target: ScreenPoint,
) -> bool {
    avatar.x + COLLECT_OFFSET == target.x || avatar.y + COLLECT_OFFSET == target.y
}

// =============================================================================
// Unit Tests
// =============================================================================
