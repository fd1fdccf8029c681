use std::time::{Duration, Instant};

use super::Easing;

/// A single eased transition of one `f32` property.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self { from, to, start, duration, easing }
    }

    /// A finished transition resting at `value`.
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, Easing::Linear)
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `0..=1`. Instants before `start` read as 0.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Replaces this transition with one heading to `to`, starting from
    /// wherever the current one is at `now`.
    pub fn retarget(&mut self, now: Instant, to: f32, duration: Duration, easing: Easing) {
        let from = self.value_at(now);
        *self = Self::new(from, to, now, duration, easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn linear_midpoint() {
        let t0 = Instant::now();
        let tr = Transition::new(0.0, 10.0, t0, ms(100), Easing::Linear);
        assert!((tr.value_at(t0 + ms(50)) - 5.0).abs() < 1e-4);
        assert!(!tr.is_finished(t0 + ms(50)));
        assert_eq!(tr.value_at(t0 + ms(100)), 10.0);
        assert!(tr.is_finished(t0 + ms(150)));
    }

    #[test]
    fn before_start_reads_from() {
        let t0 = Instant::now();
        let tr = Transition::new(3.0, 10.0, t0 + ms(10), ms(100), Easing::CubicOut);
        assert_eq!(tr.value_at(t0), 3.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let t0 = Instant::now();
        let tr = Transition::new(0.0, 4.0, t0, Duration::ZERO, Easing::CircularOut);
        assert_eq!(tr.value_at(t0), 4.0);
        assert!(tr.is_finished(t0));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut tr = Transition::new(0.0, 10.0, t0, ms(100), Easing::Linear);
        tr.retarget(t0 + ms(50), 0.0, ms(100), Easing::Linear);

        let mid = t0 + ms(50);
        assert!((tr.value_at(mid) - 5.0).abs() < 1e-4);
        assert_eq!(tr.target(), 0.0);
        assert!((tr.value_at(mid + ms(50)) - 2.5).abs() < 1e-4);
        assert_eq!(tr.value_at(mid + ms(100)), 0.0);
    }
}
