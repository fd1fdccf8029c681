//! Relief UI: element-level decorations on top of `relief-engine`.
//!
//! - [`DropShadowPanel`] computes the clips and offsets for a drop shadow
//!   around one hosted child.
//! - [`TiltBehavior`] turns engine input into a pressed-tilt presentation.
//! - [`TiltStrategy`] chooses how tilt and shadow coexist for an element.
//!
//! Nothing here draws. Hosts read the geometry and apply the commands to
//! whatever presentation layer they own.

pub mod drop_shadow;
pub mod event;
pub mod strategy;
pub mod tilt_behavior;

pub use drop_shadow::DropShadowPanel;
pub use strategy::TiltStrategy;
pub use tilt_behavior::TiltBehavior;

/// Everything needed to decorate an element.
pub mod prelude {
    pub use crate::drop_shadow::{DropShadowPanel, RenderingBias, ShadowClip, ShadowMode, ShadowSpec};
    pub use crate::event::{EventResult, TiltResponse};
    pub use crate::strategy::{ElementTraits, PlanInput, StrategyPlan, TiltStrategy};
    pub use crate::tilt_behavior::TiltBehavior;
    pub use relief_engine::coords::{ColorRgba, CornerRadii, Rect, Thickness, Vec2};
    pub use relief_engine::tilt::{TiltCommand, TiltConfig, TiltPose};
}
