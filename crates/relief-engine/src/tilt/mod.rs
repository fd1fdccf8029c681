//! Pointer-driven 3D tilt.
//!
//! Pressing an element wraps it for 3D presentation and rotates it toward the
//! pointer; releasing eases it back flat and tears the wrapper down after a
//! grace period unless another press arrives first.
//!
//! Layers:
//! - [`TiltSession`]: pure `(state, input) -> (state, commands)` transitions
//! - [`TeardownTimer`]: single-shot, cancellable deferred teardown
//! - [`TiltAnimator`]: one retargetable transition per animated property
//! - [`TiltController`]: owns all three and is what element code talks to

mod animator;
mod config;
mod controller;
mod event;
mod session;
mod timer;

pub use animator::{TiltAnimator, TiltPose};
pub use config::TiltConfig;
pub use controller::TiltController;
pub use event::{PointerEvent, PointerEventKind};
pub use session::{
    tilt_angles, PropertyAnimation, TiltCommand, TiltCommands, TiltInput, TiltPhase, TiltProperty,
    TiltSession,
};
pub use timer::{TeardownTimer, MAX_TEARDOWN_DELAY};
