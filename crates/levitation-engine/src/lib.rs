//! Levitate Engine
//!
//! Drives the levitation effect:
//! - **State:** Raw pointer geometry, gesture flags and derived visual fields
//! - **Gesture:** Pointer stream dispatch onto the state's gesture hooks
//! - **Animation:** Spring/tween interpolation toward moving targets
//! - **Transform:** Projection of state onto content and shadow layers
//! - **Surface:** Per-frame orchestration of all of the above
//!
//! Everything here is pure computation. Out-of-range configuration is never
//! rejected; it extrapolates.

pub mod animation;
pub mod gesture;
pub mod state;
pub mod surface;
pub mod transform;

pub use animation::{AnimationTick, Animatable, TargetAnimation};
pub use gesture::{GestureConfig, GestureDispatcher, GesturePhase, PointerChange};
pub use state::LevitationState;
pub use surface::LevitationSurface;
pub use transform::{project, Layer, LayerTransform, LevitationFrame, ShadowLayer, ShadowPaint, TransformOrigin};
