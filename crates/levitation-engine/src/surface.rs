//! Levitation surface: owns one state and drives it frame by frame.

use levitate_model::geometry::{Density, IntSize, Offset};
use levitate_model::profile::LevitationProfile;
use levitate_model::scenario::PointerEvent;

use crate::animation::{TargetAnimation, OFFSET_THRESHOLD_PX, PRESS_FRACTION_THRESHOLD};
use crate::gesture::{GestureConfig, GestureDispatcher, GesturePhase};
use crate::state::LevitationState;
use crate::transform::LevitationFrame;

/// A levitating piece of content.
///
/// Owns the [`LevitationState`], its two animations (press fraction and
/// offset) and the gesture dispatcher feeding it. The state is rebuilt from
/// scratch whenever the profile changes.
#[derive(Debug, Clone)]
pub struct LevitationSurface {
    profile: LevitationProfile,
    state: LevitationState,
    press_animation: TargetAnimation<f32>,
    offset_animation: TargetAnimation<Offset>,
    dispatcher: GestureDispatcher,
    density: Density,
    is_enabled: bool,
}

impl LevitationSurface {
    pub fn new(profile: LevitationProfile, density: Density) -> Self {
        log_advisories(&profile);
        let state = LevitationState::from_profile(&profile);

        Self {
            profile,
            state,
            press_animation: TargetAnimation::new(0.0, PRESS_FRACTION_THRESHOLD),
            offset_animation: TargetAnimation::new(Offset::ZERO, OFFSET_THRESHOLD_PX),
            dispatcher: GestureDispatcher::default(),
            density,
            is_enabled: true,
        }
    }

    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.dispatcher = GestureDispatcher::new(config);
        self
    }

    pub fn profile(&self) -> &LevitationProfile {
        &self.profile
    }

    pub fn state(&self) -> &LevitationState {
        &self.state
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.dispatcher.phase()
    }

    /// Apply a new profile. When any config differs the state and both
    /// animations are discarded and rebuilt; the content size carries over.
    ///
    /// Returns whether a rebuild happened.
    pub fn reconfigure(&mut self, profile: LevitationProfile) -> bool {
        if profile == self.profile {
            return false;
        }

        log_advisories(&profile);
        let content_size = self.state.content_size();
        let mut state = LevitationState::from_profile(&profile);
        state.set_content_size(content_size);

        tracing::debug!(
            width = content_size.width,
            height = content_size.height,
            "levitation state rebuilt"
        );

        self.state = state;
        self.profile = profile;
        self.press_animation = TargetAnimation::new(0.0, PRESS_FRACTION_THRESHOLD);
        self.offset_animation = TargetAnimation::new(Offset::ZERO, OFFSET_THRESHOLD_PX);
        self.dispatcher.reset();
        true
    }

    /// Enable or disable the effect. Disabling ends any gesture in flight.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.is_enabled == enabled {
            return;
        }
        if !enabled {
            self.dispatcher.dispatch(&mut self.state, PointerEvent::Cancel);
        }
        tracing::debug!(enabled, "levitation enabled changed");
        self.is_enabled = enabled;
    }

    pub fn set_content_size(&mut self, size: IntSize) {
        self.state.set_content_size(size);
    }

    /// Route a pointer event. Returns whether it was consumed.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        if !self.is_enabled {
            return false;
        }
        self.dispatcher.dispatch(&mut self.state, event)
    }

    /// Press at the configured pivot.
    pub fn press(&mut self) {
        if self.is_enabled {
            self.state.press();
        }
    }

    /// Press at `pivot`, a fraction of the content size.
    pub fn press_at(&mut self, pivot: Offset) {
        if self.is_enabled {
            self.state.press_at(pivot);
        }
    }

    /// Whether either animation is still moving.
    pub fn is_animating(&self) -> bool {
        self.press_animation.is_running() || self.offset_animation.is_running()
    }

    /// Advance one frame of `dt_secs` and capture it.
    pub fn frame(&mut self, dt_secs: f32) -> LevitationFrame {
        self.state.convert_shadow_offsets(self.density);

        let press_spec = self.state.press_config().press_animation_spec;
        self.press_animation
            .animate_to(self.state.press_fraction_target(), press_spec);
        self.offset_animation
            .animate_to(self.state.offset_target(), self.state.offset_animation_spec());

        let press = self.press_animation.tick(dt_secs);
        let offset = self.offset_animation.tick(dt_secs);

        self.state.sync_press_fraction(press.value);
        self.state.sync_offset(offset.value);
        if press.finished {
            tracing::trace!(value = press.value, "press animation finished");
            self.state.on_press_animation_finished(press.value);
        }

        tracing::trace!(
            press_fraction = press.value,
            x = offset.value.x,
            y = offset.value.y,
            "frame"
        );

        LevitationFrame::capture(&self.state, self.is_enabled, self.density)
    }
}

fn log_advisories(profile: &LevitationProfile) {
    for advisory in profile.advisories() {
        tracing::warn!(%advisory, "levitation profile advisory");
    }
}
