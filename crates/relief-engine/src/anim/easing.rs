/// Easing curve applied to normalized progress.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Easing {
    Linear,
    CubicIn,
    #[default]
    CubicOut,
    CubicInOut,
    CircularIn,
    CircularOut,
}

impl Easing {
    /// Maps progress `t` to eased progress. `t` is clamped to `0..=1`;
    /// every curve maps 0 to 0 and 1 to 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::CircularIn => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Easing::CircularOut => {
                let u = t - 1.0;
                (1.0 - u * u).max(0.0).sqrt()
            }
        }
    }
}
