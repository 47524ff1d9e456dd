//! The levitation state machine.
//!
//! [`LevitationState`] holds the raw pointer geometry, the press/drag/await
//! flags, and the animation-fed values (press fraction and offset). Every
//! visual parameter is a pure function of those fields and the three
//! configs, recomputed on read. Nothing derived is stored.
//!
//! One state exists per surface. The owner discards and rebuilds it when
//! any config changes (see [`crate::surface::LevitationSurface::reconfigure`]).

use levitate_model::geometry::{clamp_axis, sub_lerp, Density, IntSize, Offset, Size};
use levitate_model::levitation::{LevitationConfig, LevitationOrientation};
use levitate_model::press::{AnimationSpec, PressConfig, PressType};
use levitate_model::profile::LevitationProfile;
use levitate_model::shadow::ShadowConfig;

use crate::gesture::PointerChange;

/// Central source of levitation state for one surface.
#[derive(Debug, Clone)]
pub struct LevitationState {
    levitation_config: LevitationConfig,
    press_config: PressConfig,
    shadow_config: Option<ShadowConfig>,

    /// Laid-out content extent.
    content_size: IntSize,
    /// Last press position. Range `[0, size]`.
    raw_press_offset: Offset,
    /// Last in-bounds drag position. Range `[0, size]`.
    raw_drag_offset: Offset,

    is_pressed: bool,
    /// A release arrived while the press animation was still running.
    is_await_pressed: bool,
    is_dragged: bool,
    is_simulated_press_started: bool,
    is_await_press_animation_finished: bool,

    /// Current press animation value. Range `[0, 1]`.
    press_fraction: f32,
    /// Current offset animation value. Range `[0, size]`.
    offset: Offset,

    /// Shadow offsets converted to pixels, with the density they came from.
    shadow_translation_offset: Offset,
    shadow_offset: Offset,
    shadow_density: Option<Density>,
}

impl LevitationState {
    pub fn new(
        levitation_config: LevitationConfig,
        press_config: PressConfig,
        shadow_config: Option<ShadowConfig>,
    ) -> Self {
        Self {
            levitation_config,
            press_config,
            shadow_config,
            content_size: IntSize::ZERO,
            raw_press_offset: Offset::ZERO,
            raw_drag_offset: Offset::ZERO,
            is_pressed: false,
            is_await_pressed: false,
            is_dragged: false,
            is_simulated_press_started: false,
            is_await_press_animation_finished: false,
            press_fraction: 0.0,
            offset: Offset::ZERO,
            shadow_translation_offset: Offset::ZERO,
            shadow_offset: Offset::ZERO,
            shadow_density: None,
        }
    }

    pub fn from_profile(profile: &LevitationProfile) -> Self {
        Self::new(
            profile.levitation.clone(),
            profile.press.clone(),
            profile.shadow.clone(),
        )
    }

    // ------------------------------------------------------------------
    // Configuration and raw inputs
    // ------------------------------------------------------------------

    pub fn levitation_config(&self) -> &LevitationConfig {
        &self.levitation_config
    }

    pub fn press_config(&self) -> &PressConfig {
        &self.press_config
    }

    pub fn shadow_config(&self) -> Option<&ShadowConfig> {
        self.shadow_config.as_ref()
    }

    pub fn content_size(&self) -> IntSize {
        self.content_size
    }

    /// Layout reported a new content extent.
    pub fn set_content_size(&mut self, size: IntSize) {
        self.content_size = size;
    }

    pub fn raw_press_offset(&self) -> Offset {
        self.raw_press_offset
    }

    pub fn raw_drag_offset(&self) -> Offset {
        self.raw_drag_offset
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn is_dragged(&self) -> bool {
        self.is_dragged
    }

    pub fn is_await_pressed(&self) -> bool {
        self.is_await_pressed
    }

    pub fn is_simulated_press_started(&self) -> bool {
        self.is_simulated_press_started
    }

    pub fn press_fraction(&self) -> f32 {
        self.press_fraction
    }

    /// Animated offset between press, drag and release positions.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    // ------------------------------------------------------------------
    // Animation driver contract
    // ------------------------------------------------------------------

    /// Target of the press animation.
    pub fn press_fraction_target(&self) -> f32 {
        if self.is_pressed {
            1.0
        } else {
            0.0
        }
    }

    /// Target of the offset animation.
    pub fn offset_target(&self) -> Offset {
        if self.is_dragged && self.is_pressed {
            return self.raw_drag_offset;
        }
        if self.press_config.is_pivoted_when_released {
            if self.is_pressed && !self.is_dragged {
                self.raw_press_offset
            } else {
                self.pivot_offset()
            }
        } else {
            self.raw_press_offset
        }
    }

    /// Curve for the offset animation. The first touch from rest lands
    /// instantly instead of sliding in from a stale offset.
    pub fn offset_animation_spec(&self) -> AnimationSpec {
        if self.press_fraction == 0.0 {
            AnimationSpec::tween(0)
        } else {
            AnimationSpec::spring()
        }
    }

    /// Per-tick feedback from the press animation.
    pub fn sync_press_fraction(&mut self, value: f32) {
        self.press_fraction = value;
        self.is_await_press_animation_finished = value == 1.0;
    }

    /// Per-tick feedback from the offset animation.
    pub fn sync_offset(&mut self, value: Offset) {
        self.offset = value;
    }

    /// Completion feedback from the press animation.
    ///
    /// Clears an awaited release and ends a simulated press once the
    /// animation has reached full press.
    pub fn on_press_animation_finished(&mut self, value: f32) {
        if self.press_config.is_await_press_animation {
            self.is_await_press_animation_finished = value == 1.0;

            if self.is_await_pressed {
                tracing::debug!(value, "awaited release applied");
                self.is_await_pressed = false;
                self.is_pressed = false;
            }
        }

        if self.is_simulated_press_started && value == 1.0 {
            tracing::debug!("simulated press released");
            self.is_simulated_press_started = false;
            self.is_pressed = false;
        }
    }

    /// Convert the shadow's dp offsets to pixels. Repeated calls with the
    /// same density are free.
    pub fn convert_shadow_offsets(&mut self, density: Density) {
        let Some(shadow) = &self.shadow_config else {
            return;
        };
        if self.shadow_density == Some(density) {
            return;
        }

        self.shadow_translation_offset = density.offset_to_px(shadow.translation_offset);
        if shadow.is_pivoted_when_pressed {
            self.shadow_offset = density.offset_to_px(shadow.shadow_type.offset());
        }
        self.shadow_density = Some(density);
    }

    // ------------------------------------------------------------------
    // Gesture protocol
    // ------------------------------------------------------------------

    /// Press at the configured pivot; animates to full press, then releases.
    pub fn press(&mut self) {
        let pivot = self.levitation_config.pivot;
        self.press_at(pivot);
    }

    /// Press at `pivot` (a fraction of the content size).
    ///
    /// When already fully pressed the press releases immediately.
    pub fn press_at(&mut self, pivot: Offset) {
        self.raw_press_offset = self.size().at_fraction(pivot);
        self.is_simulated_press_started = true;
        self.is_pressed = true;
        tracing::debug!(x = pivot.x, y = pivot.y, "simulated press");

        if self.press_fraction == 1.0 {
            self.is_simulated_press_started = false;
            self.is_pressed = false;
        }
    }

    /// Whether drag processing is blocked until the pointer is released.
    /// A drag that left the bounds clears the dragged flag and stays blocked.
    fn is_drag_blocked_until_release(&self) -> bool {
        !self.is_dragged
    }

    /// Track a drag change, releasing the press once it leaves the bounds.
    pub fn handle_drag(&mut self, change: &mut PointerChange) {
        if self.is_drag_blocked_until_release() {
            return;
        }

        let is_out_of_bounds = self.content_size.is_out_of_bounds(change.position());
        self.is_pressed = !is_out_of_bounds;
        self.is_dragged = self.is_pressed;

        if is_out_of_bounds {
            tracing::debug!(
                x = change.position().x,
                y = change.position().y,
                "drag left bounds; blocked until release"
            );
            self.raw_press_offset = self.raw_drag_offset;
            return;
        }

        change.consume();
        self.raw_drag_offset = change.position();
    }

    /// Drop a pending awaited release (a new gesture took over).
    pub fn cancel_pending_await_pressed_state(&mut self) {
        if self.press_config.is_await_press_animation {
            self.is_await_pressed = false;
        }
    }

    /// Release under the await policy: immediately if the press animation
    /// already finished, otherwise once it does.
    pub fn handle_await_pressed_state(&mut self) {
        if self.is_await_press_animation_finished {
            self.is_pressed = false;
        } else {
            self.is_await_pressed = true;
        }
    }

    /// Pointer-down intercept: press at `position`.
    pub fn intercept_down(&mut self, position: Offset) {
        self.raw_press_offset = position;
        self.is_pressed = true;
        self.cancel_pending_await_pressed_state();
    }

    /// Release watcher. Returns whether there was a press to release.
    pub fn release_pointer(&mut self) -> bool {
        if !self.is_pressed {
            return false;
        }
        if self.press_config.is_await_press_animation {
            self.handle_await_pressed_state();
        } else {
            self.is_pressed = false;
        }
        true
    }

    /// Tap-detector release fallback.
    pub fn release_tap(&mut self) {
        if self.press_config.is_await_press_animation {
            self.is_await_pressed = true;
        } else {
            self.is_pressed = false;
        }
    }

    /// A press turned into a drag.
    pub fn start_drag(&mut self) {
        self.is_pressed = true;
        self.is_dragged = true;
        self.cancel_pending_await_pressed_state();
    }

    /// A drag ended or was cancelled: keep the last drag position as the
    /// press position and release.
    pub fn end_drag(&mut self) {
        self.raw_press_offset = self.raw_drag_offset;
        self.is_pressed = false;
        self.is_dragged = false;
    }

    /// A pointer cancel outside of a drag. Also abandons a pending
    /// simulated press.
    pub fn cancel_press(&mut self) {
        self.is_pressed = false;
        self.is_simulated_press_started = false;
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn size(&self) -> Size {
        self.content_size.to_size()
    }

    /// Pivot position in pixels.
    pub fn pivot_offset(&self) -> Offset {
        self.size().at_fraction(self.levitation_config.pivot)
    }

    /// Offset normalized against the content size. Range `[0, 1]`.
    ///
    /// Axes excluded by the orientation, or with no extent, report the
    /// pivot instead.
    pub fn offset_progress(&self) -> Offset {
        let orientation = self.levitation_config.orientation;
        let pivot = self.levitation_config.pivot;
        let size = self.size();

        Offset::new(
            if orientation.is_horizontal() {
                offset_axis_progress(self.offset.x, pivot.x, size.width)
            } else {
                pivot.x
            },
            if orientation.is_vertical() {
                offset_axis_progress(self.offset.y, pivot.y, size.height)
            } else {
                pivot.y
            },
        )
    }

    /// Signed progress relative to the pivot. Range `[-1, 1]`, zero at the
    /// pivot.
    pub fn degree_progress(&self) -> Offset {
        let orientation: LevitationOrientation = self.levitation_config.orientation;
        let pivot = self.levitation_config.pivot;
        let progress = self.offset_progress();

        Offset::new(
            if orientation.is_horizontal() {
                degree_axis_progress(progress.x, pivot.x)
            } else {
                0.0
            },
            if orientation.is_vertical() {
                degree_axis_progress(progress.y, pivot.y)
            } else {
                0.0
            },
        )
    }

    /// Content scale.
    pub fn scale(&self) -> f32 {
        self.scale_with(1.0)
    }

    /// Scale with the downscale multiplied by `downscale_multiplier`.
    ///
    /// The ranged variant is deliberately unclamped and extrapolates
    /// outside its band.
    pub fn scale_with(&self, downscale_multiplier: f32) -> f32 {
        let fraction = self.press_fraction * self.press_config.downscale * downscale_multiplier;

        match self.press_config.press_type {
            PressType::Full => 1.0 - fraction,
            PressType::Ranged { start, stop } => {
                let degree_progress = self.degree_progress();
                let radial = degree_progress.x.abs().max(degree_progress.y.abs());
                let radial_offset = sub_lerp(radial, start, stop);

                1.0 - (1.0 - radial_offset) * fraction
            }
            PressType::None => 1.0,
        }
    }

    /// Content rotation in degrees. X rotation follows the vertical
    /// progress and Y rotation the horizontal one, tilting toward the pointer.
    pub fn rotation(&self) -> Offset {
        let degree_progress = self.degree_progress();
        let degree = self.levitation_config.degree;

        Offset::new(
            degree_progress.y * -self.press_fraction * degree,
            degree_progress.x * self.press_fraction * degree,
        )
    }

    /// Shadow scale; zero without a shadow.
    pub fn shadow_scale(&self) -> f32 {
        match &self.shadow_config {
            Some(shadow) => self.scale_with(shadow.downscale_multiplier),
            None => 0.0,
        }
    }

    pub fn shadow_rotation(&self) -> Offset {
        let rotation = self.rotation();
        match &self.shadow_config {
            Some(shadow) => rotation * shadow.degree_multiplier,
            None => rotation,
        }
    }

    /// Shadow translation in pixels: pushed away from the pointer, and
    /// pulled back by the drawn shadow offset near the pivot when pivoted.
    pub fn shadow_translation(&self) -> Offset {
        let Some(shadow) = &self.shadow_config else {
            return Offset::ZERO;
        };

        let degree_progress = self.degree_progress();
        let fraction = self.press_fraction;
        let axis = |progress: f32, translation: f32, shadow_offset: f32| {
            let degree_translation = progress * fraction * -translation;
            let centered_shadow = if shadow.is_pivoted_when_pressed {
                (1.0 - progress.abs()) * fraction * shadow_offset
            } else {
                0.0
            };
            degree_translation - centered_shadow
        };

        Offset::new(
            axis(
                degree_progress.x,
                self.shadow_translation_offset.x,
                self.shadow_offset.x,
            ),
            axis(
                degree_progress.y,
                self.shadow_translation_offset.y,
                self.shadow_offset.y,
            ),
        )
    }

    pub fn shadow_camera_distance(&self) -> f32 {
        let camera_distance = self.levitation_config.camera_distance;
        match &self.shadow_config {
            Some(shadow) => camera_distance * shadow.camera_distance_multiplier,
            None => camera_distance,
        }
    }
}

fn offset_axis_progress(offset_axis: f32, default_axis: f32, size_axis: f32) -> f32 {
    if size_axis <= 0.0 {
        return default_axis;
    }
    clamp_axis(offset_axis / size_axis, 0.0, 1.0)
}

fn degree_axis_progress(offset_progress_axis: f32, pivot_axis: f32) -> f32 {
    if offset_progress_axis <= pivot_axis {
        sub_lerp(offset_progress_axis, 0.0, pivot_axis) - 1.0
    } else {
        sub_lerp(offset_progress_axis, pivot_axis, 1.0)
    }
}
