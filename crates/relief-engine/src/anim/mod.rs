//! Time-based eased transitions.
//!
//! Transitions are sampled against an explicit `Instant` rather than ticked,
//! so callers (and tests) own the clock. A property has at most one transition
//! at a time; retargeting restarts from the currently sampled value.

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::Transition;
