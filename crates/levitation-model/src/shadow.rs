//! Optional shadow configuration and shadow rendering variants.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dp, DpOffset};

pub const DEFAULT_DEGREE_MULTIPLIER: f32 = 1.1;
pub const DEFAULT_DOWNSCALE_MULTIPLIER: f32 = 2.5;
pub const DEFAULT_CAMERA_DISTANCE_MULTIPLIER: f32 = 0.9;
pub const DEFAULT_TRANSLATION_OFFSET: DpOffset = DpOffset::new(3.0, 6.0);
pub const DEFAULT_SHADOW_RADIUS: Dp = Dp(8.0);
pub const DEFAULT_SHADOW_OFFSET: DpOffset = DpOffset::new(0.0, 2.0);
pub const DEFAULT_SHADOW_SPREAD: Dp = Dp(0.0);
pub const DEFAULT_SHADOW_COLOR: Color = Color(0x40_00_00_00);
pub const DEFAULT_ELEVATION_COLOR: Color = Color(0xFF_00_00_00);

/// A packed ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Shadow rendering backends.
///
/// The engine carries these opaquely. It only reads [`ShadowType::offset`]
/// when the shadow is pivoted while pressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShadowType {
    /// Platform elevation shadow.
    Elevation {
        is_clipped: bool,
        ambient_color: Color,
        spot_color: Color,
    },
    /// Software paint-layer blur shadow.
    SoftLayer {
        color: Color,
        offset: DpOffset,
        spread: Dp,
    },
    /// Offscreen blur shadow.
    RsBlur {
        color: Color,
        offset: DpOffset,
        spread: Dp,
        is_radius_aligned: bool,
    },
}

impl ShadowType {
    pub fn elevation() -> Self {
        Self::Elevation {
            is_clipped: true,
            ambient_color: DEFAULT_ELEVATION_COLOR,
            spot_color: DEFAULT_ELEVATION_COLOR,
        }
    }

    pub fn soft_layer() -> Self {
        Self::SoftLayer {
            color: DEFAULT_SHADOW_COLOR,
            offset: DEFAULT_SHADOW_OFFSET,
            spread: DEFAULT_SHADOW_SPREAD,
        }
    }

    pub fn rs_blur() -> Self {
        Self::RsBlur {
            color: DEFAULT_SHADOW_COLOR,
            offset: DEFAULT_SHADOW_OFFSET,
            spread: DEFAULT_SHADOW_SPREAD,
            is_radius_aligned: true,
        }
    }

    /// Drawn offset of the shadow. Elevation shadows have none.
    pub fn offset(&self) -> DpOffset {
        match self {
            ShadowType::Elevation { .. } => DpOffset::ZERO,
            ShadowType::SoftLayer { offset, .. } | ShadowType::RsBlur { offset, .. } => *offset,
        }
    }

    /// Spread of the shadow. Elevation shadows have none.
    pub fn spread(&self) -> Dp {
        match self {
            ShadowType::Elevation { .. } => Dp(0.0),
            ShadowType::SoftLayer { spread, .. } | ShadowType::RsBlur { spread, .. } => *spread,
        }
    }

    /// Main paint color of the shadow.
    pub fn color(&self) -> Color {
        match self {
            ShadowType::Elevation { spot_color, .. } => *spot_color,
            ShadowType::SoftLayer { color, .. } | ShadowType::RsBlur { color, .. } => *color,
        }
    }
}

impl Default for ShadowType {
    fn default() -> Self {
        Self::rs_blur()
    }
}

/// The optional shadow configuration. Absence means no shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub degree_multiplier: f32,
    pub downscale_multiplier: f32,
    pub camera_distance_multiplier: f32,

    /// Maximum shadow travel away from the pointer, in dp.
    pub translation_offset: DpOffset,

    /// Whether the shadow offset is cancelled out when pressed at the pivot.
    pub is_pivoted_when_pressed: bool,

    pub radius: Dp,

    #[serde(rename = "type")]
    pub shadow_type: ShadowType,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            degree_multiplier: DEFAULT_DEGREE_MULTIPLIER,
            downscale_multiplier: DEFAULT_DOWNSCALE_MULTIPLIER,
            camera_distance_multiplier: DEFAULT_CAMERA_DISTANCE_MULTIPLIER,
            translation_offset: DEFAULT_TRANSLATION_OFFSET,
            is_pivoted_when_pressed: true,
            radius: DEFAULT_SHADOW_RADIUS,
            shadow_type: ShadowType::default(),
        }
    }
}
