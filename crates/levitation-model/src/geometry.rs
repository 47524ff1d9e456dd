//! Geometry primitives and scalar helpers.
//!
//! Pixel-space values use [`Offset`] and [`Size`]. Density-independent
//! values use [`Dp`] and [`DpOffset`], and are converted through
//! [`Density`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D offset (or fraction pair) in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another offset.
    pub fn distance_to(&self, other: Offset) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Offset {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Offset {
    type Output = Offset;
    fn mul(self, rhs: f32) -> Offset {
        Offset::new(self.x * rhs, self.y * rhs)
    }
}

/// Floating extent of laid-out content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The point at `fraction` of this extent, per axis.
    pub fn at_fraction(&self, fraction: Offset) -> Offset {
        Offset::new(self.width * fraction.x, self.height * fraction.y)
    }
}

/// Integer pixel extent reported by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntSize {
    pub width: u32,
    pub height: u32,
}

impl IntSize {
    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Whether `position` falls outside `[0, width] x [0, height]`.
    pub fn is_out_of_bounds(&self, position: Offset) -> bool {
        position.x < 0.0
            || position.x > self.width as f32
            || position.y < 0.0
            || position.y > self.height as f32
    }
}

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f32);

/// A density-independent 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DpOffset {
    pub x: Dp,
    pub y: Dp,
}

impl DpOffset {
    pub const ZERO: DpOffset = DpOffset {
        x: Dp(0.0),
        y: Dp(0.0),
    };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x: Dp(x), y: Dp(y) }
    }
}

/// Pixels per density-independent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(pub f32);

impl Density {
    pub fn to_px(&self, dp: Dp) -> f32 {
        dp.0 * self.0
    }

    pub fn offset_to_px(&self, offset: DpOffset) -> Offset {
        Offset::new(self.to_px(offset.x), self.to_px(offset.y))
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Position of `value` within `[start, stop]`, expressed as a fraction.
///
/// The result is not clamped: values outside the range extrapolate past
/// 0 or 1. When `start == stop` the range is empty and the result is a
/// step: `0.0` when `value <= start`, otherwise `1.0`.
pub fn sub_lerp(value: f32, start: f32, stop: f32) -> f32 {
    if start == stop {
        return if value <= start { 0.0 } else { 1.0 };
    }
    (value - start) / (stop - start)
}

/// Clamp `value` into `[min, max]`.
///
/// Never panics. An inverted range resolves to `min` and a NaN value stays NaN.
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
