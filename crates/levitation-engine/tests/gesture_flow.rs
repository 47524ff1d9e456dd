use levitate_engine::{GestureConfig, LevitationFrame, LevitationSurface};
use levitate_model::geometry::{Density, IntSize, Offset};
use levitate_model::press::{PressConfig, PressType};
use levitate_model::profile::LevitationProfile;
use levitate_model::scenario::PointerEvent;

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 600;

fn surface_with(press: PressConfig) -> LevitationSurface {
    let profile = LevitationProfile {
        press,
        ..Default::default()
    };
    let mut surface = LevitationSurface::new(profile, Density(1.0))
        .with_gesture_config(GestureConfig { touch_slop_px: 8.0 });
    surface.set_content_size(IntSize::new(100, 100));
    surface
}

fn settle(surface: &mut LevitationSurface) -> LevitationFrame {
    let mut frame = surface.frame(DT);
    for _ in 0..MAX_FRAMES {
        if !surface.is_animating() {
            return frame;
        }
        frame = surface.frame(DT);
    }
    panic!("surface did not settle within {MAX_FRAMES} frames");
}

#[test]
fn tap_presses_and_returns_to_rest() {
    let mut surface = surface_with(PressConfig::default());

    assert!(surface.dispatch(PointerEvent::Down(Offset::new(80.0, 20.0))));
    let pressed = settle(&mut surface);
    assert_eq!(pressed.press_fraction, 1.0);
    assert!(pressed.content.scale_x < 1.0);
    assert!(pressed.content.rotation_x > 0.0);
    assert!(pressed.content.rotation_y > 0.0);

    assert!(surface.dispatch(PointerEvent::Up(Offset::new(80.0, 20.0))));
    let released = settle(&mut surface);
    assert_eq!(released.press_fraction, 0.0);
    assert_eq!(released.content.scale_x, 1.0);
    assert_eq!(released.content.rotation_y, 0.0);
    assert!(!released.is_pressed);
}

#[test]
fn quick_release_never_reaches_full_press() {
    let mut surface = surface_with(PressConfig::default());

    surface.dispatch(PointerEvent::Down(Offset::new(50.0, 50.0)));
    surface.frame(DT);
    surface.frame(DT);
    surface.dispatch(PointerEvent::Up(Offset::new(50.0, 50.0)));
    assert!(!surface.state().is_pressed());

    let mut peak: f32 = 0.0;
    for _ in 0..MAX_FRAMES {
        let frame = surface.frame(DT);
        peak = peak.max(frame.press_fraction);
        if !surface.is_animating() {
            break;
        }
    }
    assert!(peak < 1.0);
    assert_eq!(surface.state().press_fraction(), 0.0);
}

#[test]
fn awaited_release_holds_until_full_press() {
    let mut surface = surface_with(PressConfig {
        is_await_press_animation: true,
        ..Default::default()
    });

    surface.dispatch(PointerEvent::Down(Offset::new(50.0, 50.0)));
    surface.frame(DT);
    surface.frame(DT);
    surface.dispatch(PointerEvent::Up(Offset::new(50.0, 50.0)));
    assert!(surface.state().is_pressed());
    assert!(surface.state().is_await_pressed());

    let mut released_at = None;
    for _ in 0..MAX_FRAMES {
        let frame = surface.frame(DT);
        if !frame.is_pressed {
            released_at = Some(frame.press_fraction);
            break;
        }
    }
    assert_eq!(released_at, Some(1.0));

    let rest = settle(&mut surface);
    assert_eq!(rest.press_fraction, 0.0);
}

#[test]
fn simulated_press_runs_full_cycle() {
    let mut surface = surface_with(PressConfig::default());

    surface.press();
    assert!(surface.state().is_simulated_press_started());

    let mut peak: f32 = 0.0;
    for _ in 0..MAX_FRAMES {
        let frame = surface.frame(DT);
        peak = peak.max(frame.press_fraction);
        if peak == 1.0 && frame.press_fraction == 0.0 {
            break;
        }
    }
    assert_eq!(peak, 1.0);
    assert!(!surface.state().is_simulated_press_started());
    assert_eq!(surface.state().press_fraction(), 0.0);
    assert_eq!(surface.state().offset(), Offset::new(50.0, 50.0));
}

#[test]
fn simulated_press_at_full_press_is_instant() {
    let mut surface = surface_with(PressConfig::default());
    surface.dispatch(PointerEvent::Down(Offset::new(50.0, 50.0)));
    settle(&mut surface);

    surface.press_at(Offset::new(1.0, 1.0));
    assert!(!surface.state().is_simulated_press_started());
    assert_eq!(surface.state().raw_press_offset(), Offset::new(100.0, 100.0));
}

#[test]
fn drag_follows_pointer_then_blocks_out_of_bounds() {
    let mut surface = surface_with(PressConfig::default());

    surface.dispatch(PointerEvent::Down(Offset::new(50.0, 50.0)));
    surface.frame(DT);
    assert!(surface.dispatch(PointerEvent::Move(Offset::new(70.0, 50.0))));
    let dragging = settle(&mut surface);
    assert!(dragging.is_dragged);
    assert_eq!(dragging.offset, Offset::new(70.0, 50.0));

    assert!(!surface.dispatch(PointerEvent::Move(Offset::new(150.0, 50.0))));
    assert!(!surface.state().is_pressed());
    assert_eq!(surface.state().raw_press_offset(), Offset::new(70.0, 50.0));

    // Back inside: still blocked until release.
    assert!(!surface.dispatch(PointerEvent::Move(Offset::new(60.0, 50.0))));
    let rest = settle(&mut surface);
    assert!(!rest.is_pressed);
    assert_eq!(rest.press_fraction, 0.0);

    surface.dispatch(PointerEvent::Up(Offset::new(60.0, 50.0)));
    assert_eq!(surface.state().raw_press_offset(), Offset::new(70.0, 50.0));
}

#[test]
fn pivoted_release_returns_offset_to_pivot() {
    let mut surface = surface_with(PressConfig {
        is_pivoted_when_released: true,
        ..Default::default()
    });

    surface.dispatch(PointerEvent::Down(Offset::new(10.0, 90.0)));
    let pressed = settle(&mut surface);
    assert_eq!(pressed.offset, Offset::new(10.0, 90.0));

    surface.dispatch(PointerEvent::Up(Offset::new(10.0, 90.0)));
    let rest = settle(&mut surface);
    assert_eq!(rest.offset, Offset::new(50.0, 50.0));
    assert_eq!(rest.degree_progress, Offset::ZERO);
}

#[test]
fn unpivoted_release_keeps_press_offset() {
    let mut surface = surface_with(PressConfig {
        press_type: PressType::Full,
        ..Default::default()
    });

    surface.dispatch(PointerEvent::Down(Offset::new(10.0, 90.0)));
    settle(&mut surface);
    surface.dispatch(PointerEvent::Up(Offset::new(10.0, 90.0)));
    let rest = settle(&mut surface);
    assert_eq!(rest.offset, Offset::new(10.0, 90.0));
}

#[test]
fn second_touch_slides_from_previous_offset() {
    let mut surface = surface_with(PressConfig::default());

    surface.dispatch(PointerEvent::Down(Offset::new(10.0, 10.0)));
    surface.frame(DT);
    surface.frame(DT);
    surface.dispatch(PointerEvent::Up(Offset::new(10.0, 10.0)));
    surface.frame(DT);

    // Press fraction is still above zero, so the offset springs over.
    surface.dispatch(PointerEvent::Down(Offset::new(90.0, 90.0)));
    let frame = surface.frame(DT);
    assert!(frame.press_fraction > 0.0);
    assert!(frame.offset.x > 10.0 && frame.offset.x < 90.0);
}
