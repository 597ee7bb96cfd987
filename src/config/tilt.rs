//! Accelerometer calibration.
//!
//! Raw ranges are in MPU6050 LSB at +-2 g. The horizontal range is wider than the
//! vertical one because the device is tilted further sideways than forwards.

/// Raw X reading mapped to the left edge.
pub const X_RAW_MIN: i32 = -2000;

/// Raw X reading mapped to the right edge.
pub const X_RAW_MAX: i32 = 3200;

/// Raw Y reading mapped to the top edge.
pub const Y_RAW_MIN: i32 = -5400;

/// Raw Y reading mapped to the bottom edge.
pub const Y_RAW_MAX: i32 = 2000;

// =============================================================================
// Dead Zones
// =============================================================================

/// Mapped X strictly inside `(X_DEAD_ZONE_LOW, X_DEAD_ZONE_HIGH)` snaps to `X_DEAD_ZONE_SNAP`.
pub const X_DEAD_ZONE_LOW: i32 = 56;
pub const X_DEAD_ZONE_HIGH: i32 = 68;
pub const X_DEAD_ZONE_SNAP: i32 = 56;

/// Mapped Y strictly inside `(Y_DEAD_ZONE_LOW, Y_DEAD_ZONE_HIGH)` snaps to `Y_DEAD_ZONE_SNAP`.
pub const Y_DEAD_ZONE_LOW: i32 = 30;
pub const Y_DEAD_ZONE_HIGH: i32 = 42;
pub const Y_DEAD_ZONE_SNAP: i32 = 40;
