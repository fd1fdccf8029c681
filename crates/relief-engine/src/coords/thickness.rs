use super::clamp_non_negative;

/// Border insets on all four sides (logical pixels).
///
/// Only half of each side takes part in corner-radius compensation: a border
/// is stroked centred on the shape outline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn uniform(v: f32) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Half of each side, with unusable values clamped to zero.
    #[inline]
    pub fn half(self) -> Self {
        Self {
            left: clamp_non_negative(self.left * 0.5),
            top: clamp_non_negative(self.top * 0.5),
            right: clamp_non_negative(self.right * 0.5),
            bottom: clamp_non_negative(self.bottom * 0.5),
        }
    }
}
