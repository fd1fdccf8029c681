use std::time::Duration;

use crate::anim::Easing;
use crate::coords::clamp_non_negative;

/// Per-element tilt configuration.
///
/// Defaults match the classic press-tilt look: 7° at the edges, a 5 px push
/// into the screen, 300 ms circular-out transitions and a short grace period
/// before the 3D wrapper is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    pub enabled: bool,
    /// Maximum rotation in degrees, reached at the element's edges.
    pub tilt_factor: f32,
    /// Push-in distance applied while pressed.
    pub depth: f32,
    pub press_duration: Duration,
    pub press_easing: Easing,
    pub release_duration: Duration,
    pub release_easing: Easing,
    /// Extra delay after the release transition before unwrapping.
    pub teardown_grace: Duration,
    /// Keep retargeting rotation on pointer moves while pressed.
    pub follow_pointer: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tilt_factor: 7.0,
            depth: 5.0,
            press_duration: Duration::from_millis(300),
            press_easing: Easing::CircularOut,
            release_duration: Duration::from_millis(300),
            release_easing: Easing::CircularOut,
            teardown_grace: Duration::from_millis(10),
            follow_pointer: false,
        }
    }
}

impl TiltConfig {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn tilt_factor(mut self, degrees: f32) -> Self {
        self.tilt_factor = degrees;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn press(mut self, duration: Duration, easing: Easing) -> Self {
        self.press_duration = duration;
        self.press_easing = easing;
        self
    }

    pub fn release(mut self, duration: Duration, easing: Easing) -> Self {
        self.release_duration = duration;
        self.release_easing = easing;
        self
    }

    pub fn teardown_grace(mut self, grace: Duration) -> Self {
        self.teardown_grace = grace;
        self
    }

    pub fn follow_pointer(mut self, follow: bool) -> Self {
        self.follow_pointer = follow;
        self
    }

    /// Tilt factor with malformed values (NaN, negative, infinite) read as 0.
    #[inline]
    pub fn effective_tilt_factor(&self) -> f32 {
        clamp_non_negative(self.tilt_factor)
    }

    #[inline]
    pub fn effective_depth(&self) -> f32 {
        clamp_non_negative(self.depth)
    }

    /// Delay between a release and the unwrap.
    #[inline]
    pub fn teardown_delay(&self) -> Duration {
        self.release_duration.saturating_add(self.teardown_grace)
    }
}
