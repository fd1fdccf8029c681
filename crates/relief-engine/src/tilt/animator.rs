use std::time::Instant;

use crate::anim::Transition;

use super::session::{TiltCommand, TiltProperty};

/// Sampled presentation values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TiltPose {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub depth: f32,
}

/// Holds exactly one transition per tilt property. Starting a new animation
/// on a property supersedes the old one from its current value.
#[derive(Debug, Clone)]
pub struct TiltAnimator {
    rotation_x: Transition,
    rotation_y: Transition,
    depth: Transition,
}

impl TiltAnimator {
    pub fn new(now: Instant) -> Self {
        Self {
            rotation_x: Transition::settled(0.0, now),
            rotation_y: Transition::settled(0.0, now),
            depth: Transition::settled(0.0, now),
        }
    }

    /// Applies the animation-related part of a command; other commands only
    /// matter for `Unwrap`, which snaps everything flat.
    pub fn apply(&mut self, cmd: &TiltCommand, now: Instant) {
        match cmd {
            TiltCommand::Animate(a) => {
                self.slot(a.property).retarget(now, a.to, a.duration, a.easing);
            }
            TiltCommand::Unwrap => *self = Self::new(now),
            TiltCommand::Wrap
            | TiltCommand::ScheduleTeardown { .. }
            | TiltCommand::CancelTeardown => {}
        }
    }

    pub fn sample(&self, now: Instant) -> TiltPose {
        TiltPose {
            rotation_x: self.rotation_x.value_at(now),
            rotation_y: self.rotation_y.value_at(now),
            depth: self.depth.value_at(now),
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.rotation_x.is_finished(now) && self.rotation_y.is_finished(now) && self.depth.is_finished(now)
    }

    pub fn transition(&self, property: TiltProperty) -> &Transition {
        match property {
            TiltProperty::RotationX => &self.rotation_x,
            TiltProperty::RotationY => &self.rotation_y,
            TiltProperty::Depth => &self.depth,
        }
    }

    fn slot(&mut self, property: TiltProperty) -> &mut Transition {
        match property {
            TiltProperty::RotationX => &mut self.rotation_x,
            TiltProperty::RotationY => &mut self.rotation_y,
            TiltProperty::Depth => &mut self.depth,
        }
    }
}
