//! Reference animation driver.
//!
//! The state machine never owns an animation loop. It publishes targets
//! and reads current values back. [`TargetAnimation`] is the driver used by
//! [`crate::surface::LevitationSurface`]: one running interpolation per
//! animated quantity, retargeted smoothly when the target moves.
//!
//! Springs use the closed-form damped oscillator solution, so large frame
//! steps stay stable.

use std::fmt::Debug;

use levitate_model::geometry::Offset;
use levitate_model::press::{AnimationSpec, Easing};

/// Visibility threshold for the press fraction.
pub const PRESS_FRACTION_THRESHOLD: f32 = 0.01;

/// Visibility threshold for pixel offsets.
pub const OFFSET_THRESHOLD_PX: f32 = 0.5;

/// A spring is settled when its velocity cannot carry it across the
/// threshold within this window.
const SETTLE_WINDOW_SECS: f32 = 0.01;

/// A value the driver can interpolate.
pub trait Animatable: Copy + PartialEq + Debug {
    const ZERO: Self;

    fn plus(self, other: Self) -> Self;
    fn minus(self, other: Self) -> Self;
    fn times(self, factor: f32) -> Self;

    /// Largest absolute component.
    fn magnitude(self) -> f32;
}

impl Animatable for f32 {
    const ZERO: Self = 0.0;

    fn plus(self, other: Self) -> Self {
        self + other
    }

    fn minus(self, other: Self) -> Self {
        self - other
    }

    fn times(self, factor: f32) -> Self {
        self * factor
    }

    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Animatable for Offset {
    const ZERO: Self = Offset::ZERO;

    fn plus(self, other: Self) -> Self {
        self + other
    }

    fn minus(self, other: Self) -> Self {
        self - other
    }

    fn times(self, factor: f32) -> Self {
        self * factor
    }

    fn magnitude(self) -> f32 {
        self.x.abs().max(self.y.abs())
    }
}

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTick<T> {
    /// Current interpolated value.
    pub value: T,
    /// Whether the animation reached its target during this tick.
    pub finished: bool,
}

/// A single interpolation toward a movable target.
#[derive(Debug, Clone)]
pub struct TargetAnimation<T: Animatable> {
    value: T,
    velocity: T,
    target: T,
    spec: AnimationSpec,
    threshold: f32,
    tween_from: T,
    tween_elapsed_secs: f32,
    running: bool,
    pending_finish: bool,
}

impl<T: Animatable> TargetAnimation<T> {
    /// Create an idle animation resting at `initial`.
    pub fn new(initial: T, threshold: f32) -> Self {
        Self {
            value: initial,
            velocity: T::ZERO,
            target: initial,
            spec: AnimationSpec::default(),
            threshold,
            tween_from: initial,
            tween_elapsed_secs: 0.0,
            running: false,
            pending_finish: false,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Move the target. A no-op while the target is unchanged.
    ///
    /// Springs keep their velocity; tweens restart from the current value;
    /// instant specs land on the target right away and report completion
    /// on the next tick.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.spec = spec;

        if spec.is_instant() || !is_spring_usable(&spec) {
            self.value = target;
            self.velocity = T::ZERO;
            self.running = false;
            self.pending_finish = true;
            return;
        }

        if let AnimationSpec::Tween { .. } = spec {
            self.tween_from = self.value;
            self.tween_elapsed_secs = 0.0;
            self.velocity = T::ZERO;
        }
        self.running = true;
        self.pending_finish = false;
    }

    /// Advance by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f32) -> AnimationTick<T> {
        if !self.running {
            let finished = std::mem::take(&mut self.pending_finish);
            return AnimationTick {
                value: self.value,
                finished,
            };
        }

        let dt = dt_secs.max(0.0);
        match self.spec {
            AnimationSpec::Spring {
                damping_ratio,
                stiffness,
            } => self.step_spring(dt, damping_ratio, stiffness),
            AnimationSpec::Tween {
                duration_ms,
                easing,
            } => self.step_tween(dt, duration_ms, easing),
            AnimationSpec::Snap => self.finish(),
        }

        AnimationTick {
            value: self.value,
            finished: !self.running,
        }
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.velocity = T::ZERO;
        self.running = false;
    }

    fn step_tween(&mut self, dt: f32, duration_ms: u32, easing: Easing) {
        self.tween_elapsed_secs += dt;
        let duration_secs = duration_ms as f32 / 1000.0;
        let fraction = (self.tween_elapsed_secs / duration_secs).min(1.0);
        if fraction >= 1.0 {
            self.finish();
            return;
        }
        let eased = ease(easing, fraction);
        self.value = self
            .tween_from
            .plus(self.target.minus(self.tween_from).times(eased));
    }

    fn step_spring(&mut self, dt: f32, damping_ratio: f32, stiffness: f32) {
        let x0 = self.value.minus(self.target);
        let v0 = self.velocity;
        let w = stiffness.sqrt();
        let zeta = damping_ratio.max(0.0);

        let (x, v) = if (zeta - 1.0).abs() < 1e-4 {
            let exp_term = (-w * dt).exp();
            let c2 = v0.plus(x0.times(w));
            let x = x0.plus(c2.times(dt)).times(exp_term);
            let v = v0.minus(c2.times(w * dt)).times(exp_term);
            (x, v)
        } else if zeta < 1.0 {
            let wd = w * (1.0 - zeta * zeta).sqrt();
            let exp_term = (-zeta * w * dt).exp();
            let cos_term = (wd * dt).cos();
            let sin_term = (wd * dt).sin();

            let a = x0;
            let b = v0.plus(x0.times(zeta * w)).times(1.0 / wd);
            let x = a.times(cos_term).plus(b.times(sin_term)).times(exp_term);

            let v_cos = b.times(wd).minus(a.times(zeta * w));
            let v_sin = a.times(wd).plus(b.times(zeta * w));
            let v = v_cos
                .times(cos_term)
                .minus(v_sin.times(sin_term))
                .times(exp_term);
            (x, v)
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -w * (zeta - s);
            let r2 = -w * (zeta + s);
            let denom = 1.0 / (r2 - r1);

            let c1 = x0.times(r2).minus(v0).times(denom);
            let c2 = v0.minus(x0.times(r1)).times(denom);

            let exp1 = (r1 * dt).exp();
            let exp2 = (r2 * dt).exp();

            let x = c1.times(exp1).plus(c2.times(exp2));
            let v = c1.times(r1 * exp1).plus(c2.times(r2 * exp2));
            (x, v)
        };

        self.value = self.target.plus(x);
        self.velocity = v;

        let settled = x.magnitude() < self.threshold
            && v.magnitude() * SETTLE_WINDOW_SECS < self.threshold;
        if settled {
            self.finish();
        }
    }
}

/// Springs need a positive, finite stiffness to move at all.
fn is_spring_usable(spec: &AnimationSpec) -> bool {
    match spec {
        AnimationSpec::Spring { stiffness, .. } => stiffness.is_finite() && *stiffness > 0.0,
        _ => true,
    }
}

/// Evaluate a cubic-Bezier easing curve at `fraction` in `[0, 1]`.
pub fn ease(easing: Easing, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }
    let (x1, y1, x2, y2) = easing.control_points();
    if easing == Easing::Linear {
        return fraction;
    }

    // Bezier x is monotonic for control points inside [0, 1].
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if cubic(x1, x2, mid) < fraction {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    cubic(y1, y2, (lo + hi) * 0.5)
}

fn cubic(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}
