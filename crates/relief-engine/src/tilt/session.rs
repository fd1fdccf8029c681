use std::time::Duration;

use smallvec::SmallVec;

use crate::anim::Easing;
use crate::coords::Vec2;

use super::config::TiltConfig;
use super::event::{PointerEvent, PointerEventKind};

/// Lifecycle phase of a tilted element.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TiltPhase {
    /// Flat, not wrapped.
    #[default]
    Idle,
    /// Wrapped and pressed, but no rotation could be computed (no measured size).
    WrappedResting,
    /// Wrapped, pressed and rotated toward the pointer.
    WrappedTilted,
    /// Released; easing back flat with a teardown pending.
    Releasing,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TiltProperty {
    RotationX,
    RotationY,
    Depth,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PropertyAnimation {
    pub property: TiltProperty,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

/// Side effect requested by a transition, in the order it must be applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TiltCommand {
    /// Place the content in its 3D presentation.
    Wrap,
    /// Remove the 3D presentation.
    Unwrap,
    /// Start (or retarget) the transition owning a property.
    Animate(PropertyAnimation),
    /// Arm the single-shot teardown timer.
    ScheduleTeardown { after: Duration },
    /// Disarm the pending teardown.
    CancelTeardown,
}

pub type TiltCommands = SmallVec<[TiltCommand; 6]>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TiltInput {
    Pointer(PointerEvent),
    /// The teardown timer armed by the last release went off.
    TeardownElapsed,
}

/// Per-element tilt state.
///
/// `rotation_x`, `rotation_y` and `depth` are the most recent targets, not the
/// animated values; see `TiltAnimator` for those.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TiltSession {
    pub phase: TiltPhase,
    pub is_pressed: bool,
    pub is_wrapped_3d: bool,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub depth: f32,
}

/// Rotation targets `(rotation_x, rotation_y)` in degrees for a pointer at
/// `pos` on an element of `size`.
///
/// The horizontal offset drives yaw; the vertical offset drives pitch with
/// the sign inverted so pressing near the top tips the top edge away.
/// Offsets are clamped to the element so magnitudes never exceed `tilt_factor`.
pub fn tilt_angles(pos: Vec2, size: Vec2, tilt_factor: f32) -> (f32, f32) {
    let nx = ((pos.x / size.x - 0.5) * 2.0).clamp(-1.0, 1.0);
    let ny = ((pos.y / size.y - 0.5) * 2.0).clamp(-1.0, 1.0);
    let rotation_y = nx * tilt_factor;
    let rotation_x = -ny * tilt_factor;
    (rotation_x, rotation_y)
}

impl TiltSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function: consumes the current state and one input,
    /// returns the next state and the commands to apply.
    pub fn transition(self, input: TiltInput, config: &TiltConfig) -> (Self, TiltCommands) {
        let mut next = self;
        let mut out = TiltCommands::new();

        match input {
            TiltInput::Pointer(ev) => match ev.kind {
                PointerEventKind::Down => next.press(ev, config, &mut out),
                PointerEventKind::Move => next.follow(ev, config, &mut out),
                PointerEventKind::Up | PointerEventKind::Leave => next.release(config, &mut out),
            },
            TiltInput::TeardownElapsed => next.teardown(&mut out),
        }

        debug_assert!(!next.is_pressed || next.is_wrapped_3d, "pressed while unwrapped: {next:?}");
        (next, out)
    }

    fn press(&mut self, ev: PointerEvent, config: &TiltConfig, out: &mut TiltCommands) {
        if !config.enabled {
            return;
        }
        // A measured element only reacts to presses that land on it; without a
        // size there is nothing to test against and the wrap still proceeds.
        if ev.has_size() && !ev.is_inside() {
            return;
        }

        if self.phase == TiltPhase::Releasing {
            out.push(TiltCommand::CancelTeardown);
        }
        if !self.is_wrapped_3d {
            out.push(TiltCommand::Wrap);
            self.is_wrapped_3d = true;
        }
        self.is_pressed = true;

        if ev.has_size() {
            let (rx, ry) = tilt_angles(ev.pos, ev.size, config.effective_tilt_factor());
            self.rotate_to(rx, ry, config.press_duration, config.press_easing, out);
            self.phase = TiltPhase::WrappedTilted;
        } else {
            self.phase = TiltPhase::WrappedResting;
        }

        self.depth = config.effective_depth();
        out.push(animate(TiltProperty::Depth, self.depth, config.press_duration, config.press_easing));
    }

    fn follow(&mut self, ev: PointerEvent, config: &TiltConfig, out: &mut TiltCommands) {
        if !config.enabled || !config.follow_pointer || !self.is_pressed || !ev.has_size() {
            return;
        }
        let (rx, ry) = tilt_angles(ev.pos, ev.size, config.effective_tilt_factor());
        self.rotate_to(rx, ry, config.press_duration, config.press_easing, out);
        self.phase = TiltPhase::WrappedTilted;
    }

    fn release(&mut self, config: &TiltConfig, out: &mut TiltCommands) {
        if !self.is_pressed {
            return;
        }
        self.is_pressed = false;
        self.phase = TiltPhase::Releasing;

        self.rotate_to(0.0, 0.0, config.release_duration, config.release_easing, out);
        self.depth = 0.0;
        out.push(animate(TiltProperty::Depth, 0.0, config.release_duration, config.release_easing));
        out.push(TiltCommand::ScheduleTeardown { after: config.teardown_delay() });
    }

    fn teardown(&mut self, out: &mut TiltCommands) {
        // A press that arrived in the meantime owns the wrapper now.
        if self.phase != TiltPhase::Releasing {
            return;
        }
        out.push(TiltCommand::Unwrap);
        *self = TiltSession::default();
    }

    fn rotate_to(&mut self, rx: f32, ry: f32, duration: Duration, easing: Easing, out: &mut TiltCommands) {
        self.rotation_x = rx;
        self.rotation_y = ry;
        out.push(animate(TiltProperty::RotationY, ry, duration, easing));
        out.push(animate(TiltProperty::RotationX, rx, duration, easing));
    }
}

#[inline]
fn animate(property: TiltProperty, to: f32, duration: Duration, easing: Easing) -> TiltCommand {
    TiltCommand::Animate(PropertyAnimation { property, to, duration, easing })
}
