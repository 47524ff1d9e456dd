//! Transform projection: maps levitation state onto layer transforms.

use levitate_model::geometry::{Density, Offset};
use levitate_model::levitation::DEFAULT_CAMERA_DISTANCE;
use levitate_model::shadow::{Color, ShadowType};
use serde::Serialize;

use crate::state::LevitationState;

/// Transform origin as a fraction of the layer size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformOrigin {
    pub pivot_fraction_x: f32,
    pub pivot_fraction_y: f32,
}

impl TransformOrigin {
    pub const CENTER: TransformOrigin = TransformOrigin {
        pivot_fraction_x: 0.5,
        pivot_fraction_y: 0.5,
    };

    fn from_offset(offset: Offset) -> Self {
        Self {
            pivot_fraction_x: offset.x,
            pivot_fraction_y: offset.y,
        }
    }
}

/// Final graphics-layer parameters for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub transform_origin: TransformOrigin,
    /// Degrees.
    pub rotation_x: f32,
    /// Degrees.
    pub rotation_y: f32,
    pub camera_distance: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl LayerTransform {
    /// The untransformed layer.
    pub fn identity() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            transform_origin: TransformOrigin::CENTER,
            rotation_x: 0.0,
            rotation_y: 0.0,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Content,
    Shadow,
}

/// Project `state` onto `layer`.
///
/// Bounded levitation tilts around the point opposite the pointer; otherwise
/// both layers pivot on the configured pivot.
pub fn project(state: &LevitationState, layer: Layer) -> LayerTransform {
    let config = state.levitation_config();
    let transform_origin = if config.is_bounded {
        let progress = state.offset_progress();
        TransformOrigin::from_offset(Offset::new(1.0 - progress.x, 1.0 - progress.y))
    } else {
        TransformOrigin::from_offset(config.pivot)
    };

    match layer {
        Layer::Content => {
            let scale = state.scale();
            let rotation = state.rotation();
            LayerTransform {
                scale_x: scale,
                scale_y: scale,
                transform_origin,
                rotation_x: rotation.x,
                rotation_y: rotation.y,
                camera_distance: config.camera_distance,
                translation_x: 0.0,
                translation_y: 0.0,
            }
        }
        Layer::Shadow => {
            let scale = state.shadow_scale();
            let rotation = state.shadow_rotation();
            let translation = state.shadow_translation();
            LayerTransform {
                scale_x: scale,
                scale_y: scale,
                transform_origin,
                rotation_x: rotation.x,
                rotation_y: rotation.y,
                camera_distance: state.shadow_camera_distance(),
                translation_x: translation.x,
                translation_y: translation.y,
            }
        }
    }
}

/// What the renderer needs to draw the shadow, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowPaint {
    pub radius_px: f32,
    pub spread_px: f32,
    pub offset_px: Offset,
    pub color: Color,
    pub shadow_type: ShadowType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowLayer {
    pub transform: LayerTransform,
    pub paint: ShadowPaint,
}

/// Read-only snapshot of a surface for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevitationFrame {
    pub is_enabled: bool,
    pub is_pressed: bool,
    pub is_dragged: bool,
    pub press_fraction: f32,
    pub offset: Offset,
    pub offset_progress: Offset,
    pub degree_progress: Offset,
    pub content: LayerTransform,
    /// Absent without a shadow config or while disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowLayer>,
}

impl LevitationFrame {
    pub fn capture(state: &LevitationState, is_enabled: bool, density: Density) -> Self {
        let (content, shadow) = if is_enabled {
            let shadow = state.shadow_config().map(|config| ShadowLayer {
                transform: project(state, Layer::Shadow),
                paint: ShadowPaint {
                    radius_px: density.to_px(config.radius),
                    spread_px: density.to_px(config.shadow_type.spread()),
                    offset_px: density.offset_to_px(config.shadow_type.offset()),
                    color: config.shadow_type.color(),
                    shadow_type: config.shadow_type,
                },
            });
            (project(state, Layer::Content), shadow)
        } else {
            (LayerTransform::identity(), None)
        };

        Self {
            is_enabled,
            is_pressed: state.is_pressed(),
            is_dragged: state.is_dragged(),
            press_fraction: state.press_fraction(),
            offset: state.offset(),
            offset_progress: state.offset_progress(),
            degree_progress: state.degree_progress(),
            content,
            shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levitate_model::geometry::IntSize;
    use levitate_model::levitation::LevitationConfig;
    use levitate_model::press::{PressConfig, PressType};
    use levitate_model::shadow::ShadowConfig;

    fn pressed_state(levitation: LevitationConfig, shadow: Option<ShadowConfig>) -> LevitationState {
        let mut state = LevitationState::new(
            levitation,
            PressConfig {
                press_type: PressType::Full,
                ..Default::default()
            },
            shadow,
        );
        state.set_content_size(IntSize::new(200, 100));
        state.convert_shadow_offsets(Density(1.0));
        state.sync_press_fraction(1.0);
        state.sync_offset(Offset::new(200.0, 50.0));
        state
    }

    #[test]
    fn test_content_projection() {
        let state = pressed_state(LevitationConfig::default(), None);
        let transform = project(&state, Layer::Content);

        assert!((transform.scale_x - 0.97).abs() < 1e-6);
        assert_eq!(transform.scale_x, transform.scale_y);
        assert_eq!(transform.transform_origin, TransformOrigin::CENTER);
        assert!((transform.rotation_y - 4.0).abs() < 1e-6);
        assert_eq!(transform.camera_distance, 8.0);
        assert_eq!(transform.translation_x, 0.0);
    }

    #[test]
    fn test_bounded_origin_mirrors_progress() {
        let state = pressed_state(
            LevitationConfig {
                is_bounded: true,
                ..Default::default()
            },
            None,
        );
        let transform = project(&state, Layer::Content);
        assert_eq!(transform.transform_origin.pivot_fraction_x, 0.0);
        assert_eq!(transform.transform_origin.pivot_fraction_y, 0.5);
    }

    #[test]
    fn test_shadow_projection_uses_shadow_fields() {
        let state = pressed_state(LevitationConfig::default(), Some(ShadowConfig::default()));
        let transform = project(&state, Layer::Shadow);

        assert_eq!(transform.scale_x, state.shadow_scale());
        assert_eq!(transform.rotation_y, state.shadow_rotation().y);
        assert_eq!(transform.camera_distance, state.shadow_camera_distance());
        assert_eq!(transform.translation_x, state.shadow_translation().x);
        assert_eq!(transform.translation_y, state.shadow_translation().y);
    }

    #[test]
    fn test_frame_carries_shadow_paint() {
        let state = pressed_state(LevitationConfig::default(), Some(ShadowConfig::default()));
        let frame = LevitationFrame::capture(&state, true, Density(2.0));

        let shadow = frame.shadow.unwrap();
        assert_eq!(shadow.paint.radius_px, 16.0);
        assert_eq!(shadow.paint.offset_px, Offset::new(0.0, 4.0));
        assert_eq!(frame.press_fraction, 1.0);
    }

    #[test]
    fn test_disabled_frame_is_identity() {
        let state = pressed_state(LevitationConfig::default(), Some(ShadowConfig::default()));
        let frame = LevitationFrame::capture(&state, false, Density(1.0));

        assert_eq!(frame.content, LayerTransform::identity());
        assert!(frame.shadow.is_none());
        assert!(!frame.is_enabled);
    }

    #[test]
    fn test_frame_serializes_without_absent_shadow() {
        let state = pressed_state(LevitationConfig::default(), None);
        let frame = LevitationFrame::capture(&state, true, Density(1.0));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"content\""));
        assert!(!json.contains("\"shadow\""));
    }
}
