//! Tilt input mapping.
//!
//! Converts raw accelerometer readings into avatar screen coordinates:
//!
//! 1. Each axis is rescaled from its calibrated raw range to screen pixels
//!    (integer arithmetic, truncating toward zero).
//! 2. The result is clamped to the screen, so out-of-range tilt pins the avatar to an edge.
//! 3. A dead zone near the screen center snaps the avatar to a fixed coordinate to
//!    suppress accelerometer jitter.
//!
//! The mapping is stateless: the avatar has no memory of previous frames.

use embedded_graphics::prelude::Point;

use crate::config::tilt::{
    X_DEAD_ZONE_HIGH,
    X_DEAD_ZONE_LOW,
    X_DEAD_ZONE_SNAP,
    X_RAW_MAX,
    X_RAW_MIN,
    Y_DEAD_ZONE_HIGH,
    Y_DEAD_ZONE_LOW,
    Y_DEAD_ZONE_SNAP,
    Y_RAW_MAX,
    Y_RAW_MIN,
};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// A position in display pixel coordinates.
pub type ScreenPoint = Point;

/// One raw 3-axis accelerometer reading.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct TiltSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl TiltSample {
    pub const fn new(
        x: i16,
        y: i16,
        z: i16,
    ) -> Self {
        Self { x, y, z }
    }
}

// =============================================================================
// Axis Calibration
// =============================================================================

/// Linear mapping of one raw axis onto `[0, span)` pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxisCalibration {
    raw_min: i32,
    raw_max: i32,
    span: i32,
}

impl AxisCalibration {
    /// Horizontal axis: raw X onto the screen width.
    pub const HORIZONTAL: Self = Self::new(X_RAW_MIN, X_RAW_MAX, SCREEN_WIDTH as i32);

    /// Vertical axis: raw Y onto the screen height.
    pub const VERTICAL: Self = Self::new(Y_RAW_MIN, Y_RAW_MAX, SCREEN_HEIGHT as i32);

    pub const fn new(
        raw_min: i32,
        raw_max: i32,
        span: i32,
    ) -> Self {
        Self { raw_min, raw_max, span }
    }

    /// Rescale a raw reading and clamp it into `[0, span - 1]`.
    pub fn map(
        &self,
        raw: i16,
    ) -> i32 {
        let scaled = (i32::from(raw) - self.raw_min) * self.span / (self.raw_max - self.raw_min);
        scaled.clamp(0, self.span - 1)
    }

    /// Smallest raw reading that maps onto `pixel`.
    ///
    /// Inverse of [`map`](Self::map) for `pixel` in `[0, span)`. Used by the desktop
    /// simulator to turn a mouse position into a tilt sample.
    pub fn raw_for(
        &self,
        pixel: i32,
    ) -> i16 {
        let pixel = pixel.clamp(0, self.span - 1);
        let range = self.raw_max - self.raw_min;
        let offset = (pixel * range + self.span - 1) / self.span;
        (self.raw_min + offset).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    }
}

// =============================================================================
// Tilt Mapper
// =============================================================================

/// Maps tilt samples to avatar positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TiltMapper {
    x_axis: AxisCalibration,
    y_axis: AxisCalibration,
}

impl TiltMapper {
    pub const fn new(
        x_axis: AxisCalibration,
        y_axis: AxisCalibration,
    ) -> Self {
        Self { x_axis, y_axis }
    }

    pub const fn x_axis(&self) -> AxisCalibration { self.x_axis }

    pub const fn y_axis(&self) -> AxisCalibration { self.y_axis }

    /// Map a raw sample to a clamped, dead-zoned screen point. Z is ignored.
    pub fn map(
        &self,
        sample: TiltSample,
    ) -> ScreenPoint {
        apply_dead_zone(Point::new(self.x_axis.map(sample.x), self.y_axis.map(sample.y)))
    }
}

impl Default for TiltMapper {
    fn default() -> Self { Self::new(AxisCalibration::HORIZONTAL, AxisCalibration::VERTICAL) }
}

/// Snap coordinates inside the center dead zones.
///
/// The bands are open intervals: the boundary values pass through unchanged.
pub const fn apply_dead_zone(point: ScreenPoint) -> ScreenPoint {
    let x = if point.x > X_DEAD_ZONE_LOW && point.x < X_DEAD_ZONE_HIGH {
        X_DEAD_ZONE_SNAP
    } else {
        point.x
    };
    let y = if point.y > Y_DEAD_ZONE_LOW && point.y < Y_DEAD_ZONE_HIGH {
        Y_DEAD_ZONE_SNAP
    } else {
        point.y
    };
    Point::new(x, y)
}

// =============================================================================
// Sensor Read Failures
// =============================================================================

/// Last-known-value hold for runtime sensor read failures.
///
/// A failed read is replaced by the most recent good sample so a glitch on the bus
/// freezes the avatar for a tick instead of teleporting it. Consecutive misses are
/// counted for diagnostics.
#[derive(Clone, Copy, Default, Debug)]
pub struct SampleHold {
    last: TiltSample,
    misses: u32,
}

impl SampleHold {
    pub const fn new(initial: TiltSample) -> Self {
        Self {
            last: initial,
            misses: 0,
        }
    }

    /// Resolve a read result into the sample to use this tick.
    pub fn resolve<E>(
        &mut self,
        reading: Result<TiltSample, E>,
    ) -> TiltSample {
        match reading {
            Ok(sample) => {
                self.last = sample;
                self.misses = 0;
            }
            Err(_) => self.misses = self.misses.saturating_add(1),
        }
        self.last
    }

    /// Number of consecutive failed reads (0 when the last read succeeded).
    #[inline]
    pub const fn misses(&self) -> u32 { self.misses }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn map_xy(
        x: i16,
        y: i16,
    ) -> ScreenPoint {
        TiltMapper::default().map(TiltSample::new(x, y, 0))
    }

    #[test]
    fn test_map_range_edges() {
        assert_eq!(map_xy(-2000, -5400), Point::new(0, 0));
        // Full scale would land on the width/height, clamp keeps it on screen
        assert_eq!(map_xy(3200, 2000), Point::new(127, 63));
    }

    #[test]
    fn test_map_truncates_toward_zero() {
        // (0 + 2000) * 128 / 5200 = 49.23
        assert_eq!(AxisCalibration::HORIZONTAL.map(0), 49);
        // (0 + 5400) * 64 / 7400 = 46.70
        assert_eq!(AxisCalibration::VERTICAL.map(0), 46);
    }

    #[test]
    fn test_map_out_of_range_is_clamped() {
        assert_eq!(map_xy(i16::MIN, i16::MIN), Point::new(0, 0));
        assert_eq!(map_xy(i16::MAX, i16::MAX), Point::new(127, 63));
    }

    #[test]
    fn test_map_stays_on_screen_for_whole_raw_range() {
        let mapper = TiltMapper::default();
        for raw in (i16::MIN..=i16::MAX).step_by(7) {
            let p = mapper.map(TiltSample::new(raw, raw, raw));
            assert!((0..SCREEN_WIDTH as i32).contains(&p.x), "x out of bounds for raw {raw}");
            assert!((0..SCREEN_HEIGHT as i32).contains(&p.y), "y out of bounds for raw {raw}");
        }
    }

    #[test]
    fn test_axes_use_different_ranges() {
        // Same raw value lands at different relative positions on each axis
        let x = AxisCalibration::HORIZONTAL.map(1000);
        let y = AxisCalibration::VERTICAL.map(1000);
        assert_eq!(x, 3000 * 128 / 5200);
        assert_eq!(y, 6400 * 64 / 7400);
    }

    #[test]
    fn test_dead_zone_x_snaps_inside_band() {
        for x in 57..68 {
            assert_eq!(apply_dead_zone(Point::new(x, 0)).x, 56, "x = {x}");
        }
    }

    #[test]
    fn test_dead_zone_y_snaps_inside_band() {
        for y in 31..42 {
            assert_eq!(apply_dead_zone(Point::new(0, y)).y, 40, "y = {y}");
        }
    }

    #[test]
    fn test_dead_zone_boundaries_pass_through() {
        assert_eq!(apply_dead_zone(Point::new(56, 30)), Point::new(56, 30));
        assert_eq!(apply_dead_zone(Point::new(68, 42)), Point::new(68, 42));
        assert_eq!(apply_dead_zone(Point::new(55, 29)), Point::new(55, 29));
        assert_eq!(apply_dead_zone(Point::new(69, 43)), Point::new(69, 43));
    }

    #[test]
    fn test_mapper_applies_dead_zone() {
        let mapper = TiltMapper::default();
        let raw_x = AxisCalibration::HORIZONTAL.raw_for(60);
        let raw_y = AxisCalibration::VERTICAL.raw_for(35);
        assert_eq!(mapper.map(TiltSample::new(raw_x, raw_y, 0)), Point::new(56, 40));
    }

    #[test]
    fn test_raw_for_inverts_map() {
        for axis in [AxisCalibration::HORIZONTAL, AxisCalibration::VERTICAL] {
            for pixel in 0..axis.span {
                assert_eq!(axis.map(axis.raw_for(pixel)), pixel, "pixel {pixel}");
            }
        }
    }

    #[test]
    fn test_sample_hold_keeps_last_good_sample() {
        let mut hold = SampleHold::new(TiltSample::default());
        let good = TiltSample::new(100, -200, 16000);

        assert_eq!(hold.resolve::<()>(Ok(good)), good);
        assert_eq!(hold.misses(), 0);

        assert_eq!(hold.resolve(Err(())), good);
        assert_eq!(hold.resolve(Err(())), good);
        assert_eq!(hold.misses(), 2);

        let next = TiltSample::new(1, 2, 3);
        assert_eq!(hold.resolve::<()>(Ok(next)), next);
        assert_eq!(hold.misses(), 0);
    }
}
