/// Straight-alpha RGBA color, components in `0..=1`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Same color with alpha multiplied by `opacity` (clamped to `0..=1`).
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        Self { a: self.a * o, ..self }
    }
}
