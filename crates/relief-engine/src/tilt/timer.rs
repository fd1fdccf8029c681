use std::time::{Duration, Instant};

/// Upper bound on how far out a teardown may be scheduled.
pub const MAX_TEARDOWN_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Single-shot deferred teardown.
///
/// Arming starts a new cycle; a cycle fires at most once, and cancelling
/// disarms it exactly once.
#[derive(Debug, Clone, Default)]
pub struct TeardownTimer {
    deadline: Option<Instant>,
    cycle: u64,
}

impl TeardownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the timer to go off `after` from `now`, capped at
    /// [`MAX_TEARDOWN_DELAY`]. Returns the cycle number.
    pub fn arm(&mut self, now: Instant, after: Duration) -> u64 {
        self.cycle = self.cycle.wrapping_add(1);
        let after = after.min(MAX_TEARDOWN_DELAY);
        self.deadline = Some(now.checked_add(after).unwrap_or(now));
        self.cycle
    }

    /// Returns `true` if a pending teardown was disarmed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
