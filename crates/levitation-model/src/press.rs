//! Press configuration: downscale behaviour and press animation curve.

use serde::{Deserialize, Serialize};

/// Default press downscale. Can be positive or negative.
pub const DEFAULT_DOWNSCALE: f32 = 0.03;

/// How the press downscale is distributed over the content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PressType {
    /// Downscale interpolated over the radial degree progress, from `start`
    /// (measured from the pivot) to `stop` (measured toward the bounds).
    Ranged {
        #[serde(default)]
        start: f32,
        #[serde(default = "default_ranged_stop")]
        stop: f32,
    },
    /// Uniform downscale regardless of pointer position.
    Full,
    /// No downscale.
    None,
}

fn default_ranged_stop() -> f32 {
    1.0
}

impl Default for PressType {
    fn default() -> Self {
        Self::Ranged {
            start: 0.0,
            stop: 1.0,
        }
    }
}

/// Named cubic-Bezier easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
}

impl Easing {
    /// Control points `(x1, y1, x2, y2)` of the cubic Bezier curve.
    pub fn control_points(&self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::FastOutSlowIn => (0.4, 0.0, 0.2, 1.0),
            Easing::LinearOutSlowIn => (0.0, 0.0, 0.2, 1.0),
            Easing::FastOutLinearIn => (0.4, 0.0, 1.0, 1.0),
        }
    }
}

/// Damping ratio for a spring without overshoot.
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

/// Medium spring stiffness.
pub const STIFFNESS_MEDIUM: f32 = 1500.0;

/// Curve used to animate toward a target value.
///
/// This is an opaque handle to the engine; only the animation driver
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationSpec {
    Spring { damping_ratio: f32, stiffness: f32 },
    Tween { duration_ms: u32, easing: Easing },
    /// Jump to the target immediately.
    Snap,
}

impl AnimationSpec {
    pub fn spring() -> Self {
        Self::Spring {
            damping_ratio: DAMPING_RATIO_NO_BOUNCY,
            stiffness: STIFFNESS_MEDIUM,
        }
    }

    pub fn tween(duration_ms: u32) -> Self {
        Self::Tween {
            duration_ms,
            easing: Easing::default(),
        }
    }

    /// Whether this spec reaches its target without any intermediate frame.
    pub fn is_instant(&self) -> bool {
        matches!(self, Self::Snap | Self::Tween { duration_ms: 0, .. })
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::spring()
    }
}

/// The required press configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    #[serde(rename = "type")]
    pub press_type: PressType,

    /// Downscale fraction at full press. Can be positive or negative.
    pub downscale: f32,

    pub press_animation_spec: AnimationSpec,

    /// Whether a release waits for the press animation to reach full press.
    pub is_await_press_animation: bool,

    /// Whether the offset returns to the pivot when released.
    pub is_pivoted_when_released: bool,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            press_type: PressType::default(),
            downscale: DEFAULT_DOWNSCALE,
            press_animation_spec: AnimationSpec::default(),
            is_await_press_animation: false,
            is_pivoted_when_released: false,
        }
    }
}
