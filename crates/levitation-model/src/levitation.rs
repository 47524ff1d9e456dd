//! Main levitation configuration: orientation, tilt degree, pivot and shape.

use serde::{Deserialize, Serialize};

use crate::geometry::{Offset, Size};

/// Default tilt degree. Can be positive or negative.
pub const DEFAULT_DEGREE: f32 = 4.0;

/// Default pivot: the content center.
pub const DEFAULT_PIVOT: Offset = Offset::new(0.5, 0.5);

/// Default camera distance, in density units.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 8.0;

/// Axes along which levitation reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevitationOrientation {
    /// Both horizontal and vertical.
    #[default]
    All,
    /// Only along the X axis.
    Horizontal,
    /// Only along the Y axis.
    Vertical,
}

impl LevitationOrientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::All | Self::Horizontal)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::All | Self::Vertical)
    }
}

/// Outline of the levitating content and its shadow.
///
/// The engine only compares shapes for equality; the gesture layer uses
/// [`Shape::contains`] to clip pointer-down hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Rectangle,
    /// Fully rounded ends (50% corners).
    Circle,
    /// Corners rounded by a percentage of the shorter side.
    RoundedCorners { percent: f32 },
}

impl Shape {
    /// Whether `position` lies inside this shape laid out at `size`.
    pub fn contains(&self, position: Offset, size: Size) -> bool {
        let inside_rect = position.x >= 0.0
            && position.x <= size.width
            && position.y >= 0.0
            && position.y <= size.height;
        if !inside_rect {
            return false;
        }

        let percent = match self {
            Shape::Rectangle => return true,
            Shape::Circle => 50.0,
            Shape::RoundedCorners { percent } => *percent,
        };

        let shorter = size.width.min(size.height);
        let radius = (shorter * percent / 100.0).clamp(0.0, shorter / 2.0);
        if radius <= 0.0 {
            return true;
        }

        // Nearest corner circle center; only matters inside a corner box.
        let cx = position.x.clamp(radius, size.width - radius);
        let cy = position.y.clamp(radius, size.height - radius);
        position.distance_to(Offset::new(cx, cy)) <= radius
    }
}

/// The required levitation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevitationConfig {
    pub orientation: LevitationOrientation,

    /// Maximum tilt in degrees. Can be positive or negative.
    pub degree: f32,

    /// Anchor point as a fraction of the content size. Conventionally in
    /// `[0, 1]` per axis, but never clamped.
    pub pivot: Offset,

    /// Camera distance for the 3D rotation. Expected to be positive.
    pub camera_distance: f32,

    /// Whether the transform origin follows the pointer instead of the pivot.
    pub is_bounded: bool,

    pub shape: Shape,

    /// Whether pointer input (and content) is clipped to `shape`.
    pub is_clipped: bool,
}

impl Default for LevitationConfig {
    fn default() -> Self {
        Self {
            orientation: LevitationOrientation::All,
            degree: DEFAULT_DEGREE,
            pivot: DEFAULT_PIVOT,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            is_bounded: false,
            shape: Shape::Rectangle,
            is_clipped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LevitationConfig::default();
        assert_eq!(config.orientation, LevitationOrientation::All);
        assert_eq!(config.degree, 4.0);
        assert_eq!(config.pivot, Offset::new(0.5, 0.5));
        assert_eq!(config.camera_distance, 8.0);
        assert!(!config.is_bounded);
        assert!(config.is_clipped);
    }

    #[test]
    fn test_orientation_axes() {
        assert!(LevitationOrientation::All.is_horizontal());
        assert!(LevitationOrientation::All.is_vertical());
        assert!(LevitationOrientation::Horizontal.is_horizontal());
        assert!(!LevitationOrientation::Horizontal.is_vertical());
        assert!(!LevitationOrientation::Vertical.is_horizontal());
        assert!(LevitationOrientation::Vertical.is_vertical());
    }

    #[test]
    fn test_rectangle_contains() {
        let size = Size::new(100.0, 50.0);
        assert!(Shape::Rectangle.contains(Offset::new(0.0, 0.0), size));
        assert!(Shape::Rectangle.contains(Offset::new(100.0, 50.0), size));
        assert!(!Shape::Rectangle.contains(Offset::new(101.0, 25.0), size));
    }

    #[test]
    fn test_circle_excludes_corners() {
        let size = Size::new(100.0, 100.0);
        assert!(Shape::Circle.contains(Offset::new(50.0, 50.0), size));
        assert!(Shape::Circle.contains(Offset::new(50.0, 1.0), size));
        assert!(!Shape::Circle.contains(Offset::new(2.0, 2.0), size));
    }

    #[test]
    fn test_rounded_corners() {
        let size = Size::new(200.0, 100.0);
        let shape = Shape::RoundedCorners { percent: 20.0 };
        // Radius is 20px; the very corner is cut, the edge middle is not.
        assert!(!shape.contains(Offset::new(1.0, 1.0), size));
        assert!(shape.contains(Offset::new(100.0, 0.5), size));
        assert!(shape.contains(Offset::new(20.0, 20.0), size));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LevitationConfig =
            serde_json::from_str(r#"{"orientation":"vertical","degree":-6.0}"#).unwrap();
        assert_eq!(config.orientation, LevitationOrientation::Vertical);
        assert_eq!(config.degree, -6.0);
        assert_eq!(config.pivot, DEFAULT_PIVOT);
        assert_eq!(config.shape, Shape::Rectangle);
    }
}
