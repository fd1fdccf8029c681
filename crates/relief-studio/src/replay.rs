use std::time::{Duration, Instant};

use relief_engine::coords::{Rect, Vec2};
use relief_engine::input::{InputEvent, InputState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
use relief_engine::tilt::{TiltCommand, TiltPhase, TiltPose};
use relief_engine::time::FrameClock;
use relief_ui::TiltBehavior;

use crate::script::{Action, Step};

/// Frame interval used between scripted steps.
pub const FRAME: Duration = Duration::from_millis(16);

/// Longest stretch simulated after the last step while waiting to settle.
const SETTLE_LIMIT: Duration = Duration::from_secs(10);

/// Something that produced commands, stamped with replay time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayEntry {
    pub at: Duration,
    /// Script action, or `"frame"` for a timer-driven teardown.
    pub source: String,
    pub commands: Vec<TiltCommand>,
    pub pose: TiltPose,
    pub phase: TiltPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub entries: Vec<ReplayEntry>,
    pub frames: u64,
    pub final_phase: TiltPhase,
    pub final_pose: TiltPose,
}

/// Drives `behavior` through `steps` on an element of `size` placed at the
/// origin. Between steps the behaviour is polled once per [`FRAME`] while it
/// still needs frames; after the last step it runs until it settles.
pub fn replay(behavior: &mut TiltBehavior, steps: &[Step], size: Vec2, t0: Instant) -> ReplayReport {
    let rect = Rect::from_origin_size(Vec2::zero(), size);
    let mut clock = FrameClock::starting_at(t0);
    let mut now = t0;
    let mut input = InputState::default();
    let mut entries = Vec::new();

    for step in steps {
        let at = t0 + step.at;
        run_frames(behavior, &mut clock, &mut now, at, t0, &mut entries);

        let event = match step.action {
            Action::Down(p) => Some(button(MouseButtonState::Pressed, p)),
            Action::Move(p) => Some(InputEvent::PointerMoved(PointerMoveEvent { x: p.x, y: p.y })),
            Action::Up(p) => {
                let p = p.or(input.pointer_pos).unwrap_or(size * 0.5);
                Some(button(MouseButtonState::Released, p))
            }
            Action::Leave => Some(InputEvent::PointerLeft),
            Action::Tick => None,
        };
        if let Some(ev) = &event {
            input.apply_event(ev);
        }

        clock.tick_at(at);
        now = at;

        let commands = match &event {
            Some(ev) => behavior.on_event(ev, rect, at).commands,
            None => behavior.poll(at),
        };

        let entry = ReplayEntry {
            at: step.at,
            source: describe(step.action),
            commands: commands.into_vec(),
            pose: behavior.pose(at),
            phase: behavior.phase(),
        };
        log::info!(
            "{:>6} ms  {:<14} {:?} -> rx {:.2} ry {:.2} depth {:.2}",
            entry.at.as_millis(),
            entry.source,
            entry.commands,
            entry.pose.rotation_x,
            entry.pose.rotation_y,
            entry.pose.depth,
        );
        entries.push(entry);
    }

    let settle_until = now + SETTLE_LIMIT;
    run_frames(behavior, &mut clock, &mut now, settle_until, t0, &mut entries);

    ReplayReport {
        entries,
        frames: clock.frame_index(),
        final_phase: behavior.phase(),
        final_pose: behavior.pose(now),
    }
}

/// Advances in whole frames strictly before `until`, recording any teardown.
fn run_frames(
    behavior: &mut TiltBehavior,
    clock: &mut FrameClock,
    now: &mut Instant,
    until: Instant,
    t0: Instant,
    entries: &mut Vec<ReplayEntry>,
) {
    while behavior.needs_frames(*now) {
        let next = *now + FRAME;
        if next >= until {
            break;
        }

        let ft = clock.tick_at(next);
        *now = ft.now;

        let commands = behavior.poll(ft.now);
        let pose = behavior.pose(ft.now);
        log::trace!(
            "frame {} dt {:.3}: rx {:.2} ry {:.2} depth {:.2}",
            ft.frame_index,
            ft.dt,
            pose.rotation_x,
            pose.rotation_y,
            pose.depth,
        );

        if !commands.is_empty() {
            let at = ft.now.saturating_duration_since(t0);
            log::info!("{:>6} ms  frame          {:?}", at.as_millis(), commands);
            entries.push(ReplayEntry {
                at,
                source: "frame".to_string(),
                commands: commands.into_vec(),
                pose,
                phase: behavior.phase(),
            });
        }
    }
}

fn button(state: MouseButtonState, p: Vec2) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state,
        x: p.x,
        y: p.y,
        modifiers: Modifiers::default(),
    })
}

fn describe(action: Action) -> String {
    match action {
        Action::Down(p) => format!("down {} {}", p.x, p.y),
        Action::Move(p) => format!("move {} {}", p.x, p.y),
        Action::Up(Some(p)) => format!("up {} {}", p.x, p.y),
        Action::Up(None) => "up".to_string(),
        Action::Leave => "leave".to_string(),
        Action::Tick => "tick".to_string(),
    }
}
