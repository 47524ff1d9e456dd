//! Levitate Model
//!
//! Defines the data contracts for the levitation effect:
//! - **Geometry:** Pixel and density-independent units, `sub_lerp`
//! - **Levitation / Press / Shadow:** The three immutable configuration groups
//! - **Profile:** The configuration triple with non-fatal advisories
//! - **Scenario:** Timestamped pointer input for replay
//!
//! Nothing here validates or rejects values: out-of-range configuration
//! flows through the engine and extrapolates.

pub mod geometry;
pub mod levitation;
pub mod press;
pub mod profile;
pub mod scenario;
pub mod shadow;

pub use geometry::*;
pub use levitation::*;
pub use press::*;
pub use profile::*;
pub use scenario::*;
pub use shadow::*;
