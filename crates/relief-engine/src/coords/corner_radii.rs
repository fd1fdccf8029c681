use super::clamp_non_negative;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Use [`CornerRadii::normalized`] before doing geometry with user input.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Square corners for anything that is not a usable radius
    /// (NaN, infinite, negative, or below the smallest positive `f32`).
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            top_left: clamp_non_negative(self.top_left),
            top_right: clamp_non_negative(self.top_right),
            bottom_right: clamp_non_negative(self.bottom_right),
            bottom_left: clamp_non_negative(self.bottom_left),
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        let n = self.normalized();
        n.top_left == 0.0 && n.top_right == 0.0 && n.bottom_right == 0.0 && n.bottom_left == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_zeroes_unusable_components() {
        let n = CornerRadii::new(f32::NAN, -3.0, f32::from_bits(0), 4.0).normalized();
        assert_eq!(n, CornerRadii::new(0.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn smallest_positive_radius_survives() {
        let tiny = f32::from_bits(1);
        assert_eq!(CornerRadii::all(tiny).normalized().top_left, tiny);
    }

    #[test]
    fn is_zero_ignores_garbage() {
        assert!(CornerRadii::all(-1.0).is_zero());
        assert!(!CornerRadii::new(0.0, 0.0, 1.0, 0.0).is_zero());
    }
}
