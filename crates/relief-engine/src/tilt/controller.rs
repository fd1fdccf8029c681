use std::time::Instant;

use super::animator::{TiltAnimator, TiltPose};
use super::config::TiltConfig;
use super::event::PointerEvent;
use super::session::{TiltCommand, TiltCommands, TiltInput, TiltPhase, TiltSession};
use super::timer::TeardownTimer;

/// Per-element tilt controller.
///
/// Feed it pointer events with [`handle`](Self::handle) and call
/// [`poll`](Self::poll) from the frame loop so the deferred teardown can fire.
/// Both return the commands the presentation layer must apply, in order.
#[derive(Debug, Clone)]
pub struct TiltController {
    config: TiltConfig,
    session: TiltSession,
    timer: TeardownTimer,
    animator: TiltAnimator,
}

impl TiltController {
    pub fn new(config: TiltConfig, now: Instant) -> Self {
        Self {
            config,
            session: TiltSession::new(),
            timer: TeardownTimer::new(),
            animator: TiltAnimator::new(now),
        }
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next event; nothing
    /// in flight is touched.
    pub fn set_config(&mut self, config: TiltConfig) {
        self.config = config;
    }

    #[inline]
    pub fn session(&self) -> &TiltSession {
        &self.session
    }

    #[inline]
    pub fn phase(&self) -> TiltPhase {
        self.session.phase
    }

    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.session.is_wrapped_3d
    }

    #[inline]
    pub fn timer(&self) -> &TeardownTimer {
        &self.timer
    }

    /// Animated values at `now`.
    pub fn pose(&self, now: Instant) -> TiltPose {
        self.animator.sample(now)
    }

    /// True while wrapped or while any property is still moving.
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.session.is_wrapped_3d || !self.animator.is_settled(now)
    }

    /// Handles one pointer event. An overdue teardown is applied first so a
    /// late press starts a fresh wrap cycle.
    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> TiltCommands {
        let mut out = self.poll(now);
        out.extend(self.run(TiltInput::Pointer(event), now));
        out
    }

    /// Fires the teardown timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> TiltCommands {
        if self.timer.poll(now) {
            log::debug!("tilt teardown elapsed (cycle {})", self.timer.cycle());
            self.run(TiltInput::TeardownElapsed, now)
        } else {
            TiltCommands::new()
        }
    }

    fn run(&mut self, input: TiltInput, now: Instant) -> TiltCommands {
        let before = self.session.phase;
        let (next, cmds) = self.session.transition(input, &self.config);
        self.session = next;

        for cmd in &cmds {
            match *cmd {
                TiltCommand::ScheduleTeardown { after } => {
                    let cycle = self.timer.arm(now, after);
                    log::trace!("tilt teardown armed in {:?} (cycle {})", after, cycle);
                }
                TiltCommand::CancelTeardown => {
                    if self.timer.cancel() {
                        log::trace!("tilt teardown cancelled (cycle {})", self.timer.cycle());
                    }
                }
                _ => self.animator.apply(cmd, now),
            }
        }

        if before != self.session.phase {
            log::debug!("tilt {:?} -> {:?}", before, self.session.phase);
        }
        cmds
    }
}
