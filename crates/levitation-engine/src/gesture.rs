//! Pointer gesture dispatch.
//!
//! Turns a raw `down/move/up/cancel` stream into the state machine's gesture
//! hooks: the down intercept, the release watcher with its tap fallback, and
//! the drag detector.

use levitate_model::geometry::{Density, Dp, Offset};
use levitate_model::scenario::PointerEvent;
use serde::{Deserialize, Serialize};

use crate::state::LevitationState;

/// Default movement before a press turns into a drag.
pub const DEFAULT_TOUCH_SLOP_DP: f32 = 8.0;

/// A pointer position handed to the drag handler.
///
/// The handler consumes it when it owns the movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerChange {
    position: Offset,
    consumed: bool,
}

impl PointerChange {
    pub fn new(position: Offset) -> Self {
        Self {
            position,
            consumed: false,
        }
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Gesture recognition thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Distance in pixels a pointer may travel before a drag starts.
    pub touch_slop_px: f32,
}

impl GestureConfig {
    pub fn from_density(touch_slop_dp: f32, density: Density) -> Self {
        Self {
            touch_slop_px: density.to_px(Dp(touch_slop_dp)),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from_density(DEFAULT_TOUCH_SLOP_DP, Density::default())
    }
}

/// Where the current pointer gesture stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Down received, still within the touch slop.
    Pressing,
    Dragging,
    /// Down landed outside the clipped shape. Ignored until the next down.
    Ignored,
}

/// Routes pointer events to a [`LevitationState`].
#[derive(Debug, Clone, Default)]
pub struct GestureDispatcher {
    config: GestureConfig,
    phase: GesturePhase,
    down_position: Offset,
}

impl GestureDispatcher {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            down_position: Offset::ZERO,
        }
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Forget the current gesture without touching any state.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Dispatch one pointer event. Returns whether the event was consumed.
    pub fn dispatch(&mut self, state: &mut LevitationState, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(position) => self.on_down(state, position),
            PointerEvent::Move(position) => self.on_move(state, position),
            PointerEvent::Up(_) => self.on_up(state),
            PointerEvent::Cancel => self.on_cancel(state),
        }
    }

    fn on_down(&mut self, state: &mut LevitationState, position: Offset) -> bool {
        // The up of the previous drag never arrived.
        if self.phase == GesturePhase::Dragging {
            state.end_drag();
            tracing::debug!("interrupted drag ended");
        }

        let config = state.levitation_config();
        if config.is_clipped && !config.shape.contains(position, state.size()) {
            tracing::debug!(x = position.x, y = position.y, "down outside shape ignored");
            self.phase = GesturePhase::Ignored;
            return false;
        }

        tracing::debug!(x = position.x, y = position.y, "press down");
        state.intercept_down(position);
        self.down_position = position;
        self.phase = GesturePhase::Pressing;
        true
    }

    fn on_move(&mut self, state: &mut LevitationState, position: Offset) -> bool {
        match self.phase {
            GesturePhase::Pressing => {
                if self.down_position.distance_to(position) <= self.config.touch_slop_px {
                    return false;
                }
                tracing::debug!(x = position.x, y = position.y, "drag start");
                state.start_drag();
                self.phase = GesturePhase::Dragging;
                self.drag(state, position)
            }
            GesturePhase::Dragging => self.drag(state, position),
            GesturePhase::Idle | GesturePhase::Ignored => false,
        }
    }

    fn drag(&mut self, state: &mut LevitationState, position: Offset) -> bool {
        let mut change = PointerChange::new(position);
        state.handle_drag(&mut change);
        change.is_consumed()
    }

    fn on_up(&mut self, state: &mut LevitationState) -> bool {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            GesturePhase::Pressing => {
                if !state.release_pointer() {
                    state.release_tap();
                }
                tracing::debug!(
                    is_pressed = state.is_pressed(),
                    is_await_pressed = state.is_await_pressed(),
                    "release"
                );
                true
            }
            GesturePhase::Dragging => {
                state.end_drag();
                tracing::debug!("drag end");
                true
            }
            GesturePhase::Idle | GesturePhase::Ignored => false,
        }
    }

    fn on_cancel(&mut self, state: &mut LevitationState) -> bool {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            GesturePhase::Pressing => {
                state.cancel_press();
                tracing::debug!("press cancelled");
                true
            }
            GesturePhase::Dragging => {
                state.end_drag();
                tracing::debug!("drag cancelled");
                true
            }
            GesturePhase::Idle | GesturePhase::Ignored => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levitate_model::geometry::IntSize;
    use levitate_model::levitation::{LevitationConfig, Shape};
    use levitate_model::press::PressConfig;

    fn state_with(levitation: LevitationConfig) -> LevitationState {
        let mut state = LevitationState::new(levitation, PressConfig::default(), None);
        state.set_content_size(IntSize::new(100, 100));
        state
    }

    #[test]
    fn test_down_presses_and_up_releases() {
        let mut state = state_with(LevitationConfig::default());
        let mut dispatcher = GestureDispatcher::default();

        assert!(dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 30.0))));
        assert!(state.is_pressed());
        assert_eq!(state.raw_press_offset(), Offset::new(20.0, 30.0));
        assert_eq!(dispatcher.phase(), GesturePhase::Pressing);

        assert!(dispatcher.dispatch(&mut state, PointerEvent::Up(Offset::new(20.0, 30.0))));
        assert!(!state.is_pressed());
        assert_eq!(dispatcher.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_small_move_stays_a_press() {
        let mut state = state_with(LevitationConfig::default());
        let mut dispatcher = GestureDispatcher::default();

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 20.0)));
        assert!(!dispatcher.dispatch(&mut state, PointerEvent::Move(Offset::new(24.0, 20.0))));
        assert!(!state.is_dragged());
        assert_eq!(dispatcher.phase(), GesturePhase::Pressing);
    }

    #[test]
    fn test_move_past_slop_starts_drag() {
        let mut state = state_with(LevitationConfig::default());
        let mut dispatcher = GestureDispatcher::default();

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 20.0)));
        assert!(dispatcher.dispatch(&mut state, PointerEvent::Move(Offset::new(40.0, 20.0))));
        assert!(state.is_dragged());
        assert!(state.is_pressed());
        assert_eq!(state.raw_drag_offset(), Offset::new(40.0, 20.0));

        dispatcher.dispatch(&mut state, PointerEvent::Up(Offset::new(40.0, 20.0)));
        assert!(!state.is_dragged());
        assert!(!state.is_pressed());
        assert_eq!(state.raw_press_offset(), Offset::new(40.0, 20.0));
    }

    #[test]
    fn test_clipped_down_outside_shape_is_ignored() {
        let mut state = state_with(LevitationConfig {
            shape: Shape::Circle,
            ..Default::default()
        });
        let mut dispatcher = GestureDispatcher::default();

        assert!(!dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(2.0, 2.0))));
        assert!(!state.is_pressed());
        assert_eq!(dispatcher.phase(), GesturePhase::Ignored);

        assert!(!dispatcher.dispatch(&mut state, PointerEvent::Move(Offset::new(50.0, 50.0))));
        assert!(!dispatcher.dispatch(&mut state, PointerEvent::Up(Offset::new(50.0, 50.0))));
        assert!(!state.is_pressed());
        assert_eq!(dispatcher.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_unclipped_down_outside_shape_presses() {
        let mut state = state_with(LevitationConfig {
            shape: Shape::Circle,
            is_clipped: false,
            ..Default::default()
        });
        let mut dispatcher = GestureDispatcher::default();

        assert!(dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(2.0, 2.0))));
        assert!(state.is_pressed());
    }

    #[test]
    fn test_cancel_clears_press() {
        let mut state = state_with(LevitationConfig::default());
        let mut dispatcher = GestureDispatcher::default();

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 20.0)));
        assert!(dispatcher.dispatch(&mut state, PointerEvent::Cancel));
        assert!(!state.is_pressed());
        assert!(!dispatcher.dispatch(&mut state, PointerEvent::Cancel));
    }

    #[test]
    fn test_cancel_during_drag_keeps_last_position() {
        let mut state = state_with(LevitationConfig::default());
        let mut dispatcher = GestureDispatcher::default();

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 20.0)));
        dispatcher.dispatch(&mut state, PointerEvent::Move(Offset::new(60.0, 70.0)));
        dispatcher.dispatch(&mut state, PointerEvent::Cancel);
        assert!(!state.is_pressed());
        assert!(!state.is_dragged());
        assert_eq!(state.raw_press_offset(), Offset::new(60.0, 70.0));
    }

    #[test]
    fn test_down_during_drag_ends_the_drag() {
        let mut state = LevitationState::new(
            LevitationConfig::default(),
            PressConfig {
                is_pivoted_when_released: true,
                ..Default::default()
            },
            None,
        );
        state.set_content_size(IntSize::new(100, 100));
        let mut dispatcher = GestureDispatcher::default();

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(20.0, 20.0)));
        dispatcher.dispatch(&mut state, PointerEvent::Move(Offset::new(60.0, 60.0)));
        assert!(state.is_dragged());

        assert!(dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(10.0, 90.0))));
        assert!(!state.is_dragged());
        assert!(state.is_pressed());
        assert_eq!(state.raw_press_offset(), Offset::new(10.0, 90.0));
        assert_eq!(dispatcher.phase(), GesturePhase::Pressing);

        dispatcher.dispatch(&mut state, PointerEvent::Up(Offset::new(10.0, 90.0)));
        assert!(!state.is_pressed());
        assert!(!state.is_dragged());
        assert_eq!(state.offset_target(), state.pivot_offset());

        dispatcher.dispatch(&mut state, PointerEvent::Down(Offset::new(80.0, 10.0)));
        assert!(state.is_pressed());
        assert!(!state.is_dragged());
        assert_eq!(state.offset_target(), Offset::new(80.0, 10.0));
    }

    #[test]
    fn test_touch_slop_scales_with_density() {
        let config = GestureConfig::from_density(8.0, Density(2.5));
        assert!((config.touch_slop_px - 20.0).abs() < 1e-6);
    }
}
