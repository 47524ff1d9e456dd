//! The configuration triple that defines one levitating surface.

use std::fmt;
use std::path::Path;

use levitate_common::error::{LevitateError, LevitateResult};
use serde::{Deserialize, Serialize};

use crate::levitation::LevitationConfig;
use crate::press::{PressConfig, PressType};
use crate::shadow::ShadowConfig;

/// Downscale magnitude above which a profile is flagged as unusual.
pub const CONVENTIONAL_DOWNSCALE_LIMIT: f32 = 0.1;

/// Levitation, press and (optional) shadow configuration together.
///
/// Missing JSON fields fall back to defaults; `"shadow": null` disables
/// the shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevitationProfile {
    pub levitation: LevitationConfig,
    pub press: PressConfig,
    pub shadow: Option<ShadowConfig>,
}

impl Default for LevitationProfile {
    fn default() -> Self {
        Self {
            levitation: LevitationConfig::default(),
            press: PressConfig::default(),
            shadow: Some(ShadowConfig::default()),
        }
    }
}

/// Axis label used in advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A non-fatal note about configuration values outside their usual range.
///
/// The engine accepts every value and extrapolates; advisories only
/// explain where the output may look unusual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigAdvisory {
    PivotOutOfRange { axis: Axis, value: f32 },
    NonPositiveCameraDistance { value: f32 },
    InvertedPressRange { start: f32, stop: f32 },
    PressRangeOutOfBounds { start: f32, stop: f32 },
    EmptyPressRange { at: f32 },
    LargeDownscale { value: f32 },
}

impl fmt::Display for ConfigAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAdvisory::PivotOutOfRange { axis, value } => {
                write!(f, "pivot {axis}={value} is outside [0, 1]")
            }
            ConfigAdvisory::NonPositiveCameraDistance { value } => {
                write!(f, "camera distance {value} is not positive")
            }
            ConfigAdvisory::InvertedPressRange { start, stop } => {
                write!(f, "ranged press start {start} is after stop {stop}")
            }
            ConfigAdvisory::PressRangeOutOfBounds { start, stop } => {
                write!(f, "ranged press [{start}, {stop}] is outside [0, 1]")
            }
            ConfigAdvisory::EmptyPressRange { at } => write!(
                f,
                "ranged press is empty at {at}; downscale becomes a step at that radius"
            ),
            ConfigAdvisory::LargeDownscale { value } => write!(
                f,
                "downscale {value} exceeds the conventional magnitude {CONVENTIONAL_DOWNSCALE_LIMIT}"
            ),
        }
    }
}

impl LevitationProfile {
    /// Load a profile from a JSON file.
    pub fn load_from(path: &Path) -> LevitateResult<Self> {
        if !path.exists() {
            return Err(LevitateError::file_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| LevitateError::config(format!("{}: {e}", path.display())))
    }

    /// Report values outside their conventional ranges.
    pub fn advisories(&self) -> Vec<ConfigAdvisory> {
        let mut advisories = Vec::new();

        let pivot = self.levitation.pivot;
        for (axis, value) in [(Axis::X, pivot.x), (Axis::Y, pivot.y)] {
            if !(0.0..=1.0).contains(&value) {
                advisories.push(ConfigAdvisory::PivotOutOfRange { axis, value });
            }
        }

        if self.levitation.camera_distance <= 0.0 {
            advisories.push(ConfigAdvisory::NonPositiveCameraDistance {
                value: self.levitation.camera_distance,
            });
        }

        if let PressType::Ranged { start, stop } = self.press.press_type {
            if start > stop {
                advisories.push(ConfigAdvisory::InvertedPressRange { start, stop });
            } else if start == stop {
                advisories.push(ConfigAdvisory::EmptyPressRange { at: start });
            }
            if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&stop) {
                advisories.push(ConfigAdvisory::PressRangeOutOfBounds { start, stop });
            }
        }

        if self.press.downscale.abs() > CONVENTIONAL_DOWNSCALE_LIMIT {
            advisories.push(ConfigAdvisory::LargeDownscale {
                value: self.press.downscale,
            });
        }

        advisories
    }
}
