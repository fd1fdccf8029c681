use std::time::Instant;

use relief_engine::coords::{Rect, Vec2};
use relief_engine::input::InputEvent;
use relief_engine::tilt::{PointerEvent, TiltCommands, TiltConfig, TiltController, TiltPhase, TiltPose};

use crate::event::TiltResponse;
use crate::strategy::{PlanInput, StrategyPlan, TiltStrategy};

/// Attaches a tilt to one element.
///
/// Window-space engine input is translated into the element's local space
/// and fed to a [`TiltController`]. The element's rect is passed on every
/// call so the behaviour never caches layout.
///
/// # Example
/// ```rust,ignore
/// let mut tilt = TiltBehavior::new(TiltConfig::default(), Instant::now());
///
/// // For every engine input event:
/// let response = tilt.on_event(&event, element_rect, Instant::now());
/// for cmd in &response.commands {
///     presenter.apply(cmd);
/// }
///
/// // Every frame while `tilt.needs_frames(now)`:
/// for cmd in tilt.poll(now) { presenter.apply(&cmd); }
/// presenter.set_pose(tilt.pose(now));
/// ```
#[derive(Debug, Clone)]
pub struct TiltBehavior {
    controller: TiltController,
    plan: StrategyPlan,
}

impl TiltBehavior {
    /// Plain tilt with no shadow handling.
    pub fn new(config: TiltConfig, now: Instant) -> Self {
        let plan = StrategyPlan::new(TiltStrategy::NoShadow, &PlanInput::default(), &config);
        Self::with_plan(plan, now)
    }

    pub fn with_plan(plan: StrategyPlan, now: Instant) -> Self {
        Self {
            controller: TiltController::new(plan.config.clone(), now),
            plan,
        }
    }

    pub fn plan(&self) -> &StrategyPlan {
        &self.plan
    }

    pub fn controller(&self) -> &TiltController {
        &self.controller
    }

    pub fn phase(&self) -> TiltPhase {
        self.controller.phase()
    }

    pub fn pose(&self, now: Instant) -> TiltPose {
        self.controller.pose(now)
    }

    pub fn needs_frames(&self, now: Instant) -> bool {
        self.controller.needs_frames(now)
    }

    /// Fires the pending teardown once it is due.
    pub fn poll(&mut self, now: Instant) -> TiltCommands {
        self.controller.poll(now)
    }

    /// Routes one window-space input event. `rect` is the element's current
    /// layout rect in the same space.
    ///
    /// Presses are hit-tested against `rect` once it has a usable size. Before
    /// layout has produced one (zero, negative or non-finite extents), any
    /// primary press is forwarded and the controller wraps without rotating.
    pub fn on_event(&mut self, event: &InputEvent, rect: Rect, now: Instant) -> TiltResponse {
        let rect = self.effective_rect(rect);
        let Some(pointer) = self.translate(event, rect) else {
            return TiltResponse { commands: self.controller.poll(now) };
        };
        TiltResponse { commands: self.controller.handle(pointer, now) }
    }

    /// Pinned strategies keep their size regardless of later layout.
    fn effective_rect(&self, rect: Rect) -> Rect {
        match self.plan.pinned_size {
            Some(size) => Rect::from_origin_size(rect.origin, size),
            None => rect,
        }
    }

    fn translate(&self, event: &InputEvent, rect: Rect) -> Option<PointerEvent> {
        let local = |p: Vec2| p - rect.origin;
        let pressed = self.controller.session().is_pressed;

        match event {
            InputEvent::PointerButton(b) if b.is_primary_press() => {
                let down = PointerEvent::down(local(b.pos()), rect.size);
                (!down.has_size() || rect.contains_closed(b.pos())).then_some(down)
            }
            InputEvent::PointerButton(b) if b.is_primary_release() => {
                pressed.then(|| PointerEvent::up(local(b.pos()), rect.size))
            }
            InputEvent::PointerMoved(m) if pressed => {
                if rect.contains_closed(m.pos()) {
                    Some(PointerEvent::moved(local(m.pos()), rect.size))
                } else {
                    Some(PointerEvent::leave(rect.size))
                }
            }
            InputEvent::PointerLeft | InputEvent::Focused(false) if pressed => {
                Some(PointerEvent::leave(rect.size))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use relief_engine::input::{Modifiers, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
    use relief_engine::tilt::{TiltCommand, TiltPhase};

    use super::*;
    use crate::strategy::ElementTraits;

    const RECT: Rect = Rect::new(50.0, 20.0, 200.0, 100.0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn press(x: f32, y: f32) -> InputEvent {
        button(MouseButtonState::Pressed, x, y)
    }

    fn release(x: f32, y: f32) -> InputEvent {
        button(MouseButtonState::Released, x, y)
    }

    fn behavior(t0: Instant) -> TiltBehavior {
        let config = TiltConfig::default()
            .tilt_factor(10.0)
            .press(ms(100), relief_engine::anim::Easing::Linear);
        TiltBehavior::new(config, t0)
    }

    // ── routing ──────────────────────────────────────────────────────────

    #[test]
    fn press_is_translated_to_local_space() {
        let t0 = Instant::now();
        let mut b = behavior(t0);

        // (200, 45) window space is (150, 25) in the element.
        let r = b.on_event(&press(200.0, 45.0), RECT, t0);
        assert!(r.result().is_consumed());
        assert_eq!(r.commands[0], TiltCommand::Wrap);
        assert_eq!(b.phase(), TiltPhase::WrappedTilted);

        let pose = b.pose(t0 + ms(100));
        assert!((pose.rotation_y - 5.0).abs() < 1e-4);
        assert!((pose.rotation_x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn press_outside_is_ignored() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        let r = b.on_event(&press(10.0, 10.0), RECT, t0);
        assert!(!r.result().is_consumed());
        assert_eq!(b.phase(), TiltPhase::Idle);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
            x: 100.0,
            y: 50.0,
            modifiers: Modifiers::default(),
        });
        assert!(b.on_event(&ev, RECT, t0).commands.is_empty());
    }

    #[test]
    fn dragging_out_releases() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        b.on_event(&press(100.0, 50.0), RECT, t0);

        let r = b.on_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 400.0, y: 50.0 }), RECT, t0 + ms(20));
        assert!(r.result().is_consumed());
        assert_eq!(b.phase(), TiltPhase::Releasing);

        // The later button release has nothing left to do.
        assert!(b.on_event(&release(400.0, 50.0), RECT, t0 + ms(30)).commands.is_empty());
    }

    #[test]
    fn focus_loss_releases() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        b.on_event(&press(100.0, 50.0), RECT, t0);
        b.on_event(&InputEvent::Focused(false), RECT, t0 + ms(5));
        assert_eq!(b.phase(), TiltPhase::Releasing);
    }

    #[test]
    fn unrelated_events_still_drive_teardown() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        b.on_event(&press(100.0, 50.0), RECT, t0);
        b.on_event(&release(100.0, 50.0), RECT, t0 + ms(10));

        // Release takes 300 ms plus a 10 ms grace.
        let r = b.on_event(&InputEvent::Focused(true), RECT, t0 + ms(400));
        assert_eq!(r.commands.as_slice(), &[TiltCommand::Unwrap]);
        assert_eq!(b.phase(), TiltPhase::Idle);
    }

    #[test]
    fn quick_repress_keeps_wrapper() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        b.on_event(&press(100.0, 50.0), RECT, t0);
        b.on_event(&release(100.0, 50.0), RECT, t0 + ms(10));

        let r = b.on_event(&press(100.0, 50.0), RECT, t0 + ms(50));
        assert_eq!(r.commands[0], TiltCommand::CancelTeardown);
        assert!(!r.commands.contains(&TiltCommand::Wrap));
        assert!(!r.commands.contains(&TiltCommand::Unwrap));
        assert!(b.poll(t0 + ms(1000)).is_empty());
    }

    #[test]
    fn unmeasured_rect_wraps_without_rotation() {
        let t0 = Instant::now();
        let mut b = behavior(t0);
        let rect = Rect::new(50.0, 20.0, 0.0, 0.0);

        let r = b.on_event(&press(120.0, 70.0), rect, t0);
        assert_eq!(r.commands[0], TiltCommand::Wrap);
        assert_eq!(b.phase(), TiltPhase::WrappedResting);

        let pose = b.pose(t0 + ms(100));
        assert_eq!(pose.rotation_x, 0.0);
        assert_eq!(pose.rotation_y, 0.0);
        assert!((pose.depth - 5.0).abs() < 1e-4);
    }

    // ── strategies ───────────────────────────────────────────────────────

    #[test]
    fn pinned_size_overrides_layout() {
        let t0 = Instant::now();
        let traits = ElementTraits { has_fixed_size: true, ..ElementTraits::default() };
        let input = PlanInput { traits, ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::Auto, &input, &TiltConfig::default());
        assert_eq!(plan.strategy, TiltStrategy::FixedSize);

        let mut b = TiltBehavior::with_plan(plan, t0);
        // Layout reports a zero-sized rect; the pinned 100x40 is used instead.
        let rect = Rect::new(50.0, 20.0, 0.0, 0.0);
        b.on_event(&press(150.0, 60.0), rect, t0);
        assert_eq!(b.phase(), TiltPhase::WrappedTilted);

        let pose = b.pose(t0 + ms(100));
        assert!((pose.rotation_y - 10.0).abs() < 1e-4);
        assert!((pose.rotation_x + 10.0).abs() < 1e-4);
        assert_eq!(pose.depth, 0.0);
    }
}
