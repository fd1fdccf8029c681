//! Picks how an element gets its tilt presentation.
//!
//! Tilting an element that carries a drop shadow rotates the shadow with it,
//! and a blurred shadow also shifts the visual centre. The strategies trade
//! those artefacts off against each other; `Auto` picks one from what the
//! element declares about itself.

use std::time::Duration;

use relief_engine::anim::Easing;
use relief_engine::coords::Vec2;
use relief_engine::tilt::TiltConfig;

use crate::drop_shadow::ShadowSpec;

/// More children than this counts as complex content.
const COMPLEX_CONTENT_CHILDREN: usize = 3;

const FIXED_SIZE_FALLBACK: Vec2 = Vec2::new(100.0, 40.0);
const FIXED_SIZE_TILT_FACTOR: f32 = 10.0;
const FIXED_SIZE_TRANSITION: Duration = Duration::from_millis(100);

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TiltStrategy {
    #[default]
    Auto,
    /// Pin the element to its current size and tilt it in its own viewport.
    FixedSize,
    /// Move the shadow to a flat layer behind the element; tilt only the content.
    LayeredShadow,
    /// Tilt element and shadow together around a blur-compensated origin.
    CompensatedPlanerator,
    /// Nothing to preserve; plain tilt.
    NoShadow,
}

/// What an element declares about itself for strategy selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ElementTraits {
    pub has_fixed_size: bool,
    pub has_drop_shadow: bool,
    /// Keep the shadow looking flat while tilting.
    pub preserve_shadow: bool,
    pub is_button: bool,
    /// Element is a generated item container inside a list-like host.
    pub in_items_control: bool,
    pub child_count: usize,
}

impl Default for ElementTraits {
    fn default() -> Self {
        Self {
            has_fixed_size: false,
            has_drop_shadow: false,
            preserve_shadow: true,
            is_button: false,
            in_items_control: false,
            child_count: 0,
        }
    }
}

impl ElementTraits {
    #[inline]
    pub fn has_complex_content(&self) -> bool {
        self.child_count > COMPLEX_CONTENT_CHILDREN
    }
}

impl TiltStrategy {
    /// Resolves `Auto` against `traits`; any other strategy is returned as is.
    pub fn resolve(self, traits: &ElementTraits) -> TiltStrategy {
        if self != TiltStrategy::Auto {
            return self;
        }

        if traits.has_fixed_size && !traits.has_complex_content() {
            TiltStrategy::FixedSize
        } else if traits.has_drop_shadow && traits.preserve_shadow {
            if traits.is_button && !traits.in_items_control {
                TiltStrategy::LayeredShadow
            } else if traits.has_complex_content() {
                TiltStrategy::CompensatedPlanerator
            } else {
                TiltStrategy::LayeredShadow
            }
        } else if !traits.has_drop_shadow {
            TiltStrategy::NoShadow
        } else {
            TiltStrategy::LayeredShadow
        }
    }
}

/// Shadow put on the flat layer when the element brings none of its own.
pub fn default_layer_shadow() -> ShadowSpec {
    ShadowSpec::default()
        .blur_radius(15.0)
        .depth(5.0)
        .direction(270.0)
        .opacity(0.3)
}

/// Element state a plan is computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanInput<'a> {
    pub traits: ElementTraits,
    /// Current measured size; zero when layout has not run.
    pub size: Vec2,
    pub shadow: Option<&'a ShadowSpec>,
    /// Explicit tilt factor; `None` keeps the strategy's default.
    pub tilt_factor: Option<f32>,
}

/// Concrete parameters for one element under a resolved strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyPlan {
    /// Never `Auto`.
    pub strategy: TiltStrategy,
    pub config: TiltConfig,
    /// Rotation origin in unit coordinates; `(0.5, 0.5)` is the centre.
    pub rotation_origin: Vec2,
    /// Shadow drawn on a separate layer that does not tilt.
    pub shadow_layer: Option<ShadowSpec>,
    /// Size the element is pinned to for the lifetime of the tilt.
    pub pinned_size: Option<Vec2>,
}

impl StrategyPlan {
    pub fn new(strategy: TiltStrategy, input: &PlanInput<'_>, base: &TiltConfig) -> Self {
        let strategy = strategy.resolve(&input.traits);

        let mut plan = StrategyPlan {
            strategy,
            config: base.clone(),
            rotation_origin: Vec2::splat(0.5),
            shadow_layer: None,
            pinned_size: None,
        };
        if let Some(f) = input.tilt_factor {
            plan.config.tilt_factor = f;
        }

        match strategy {
            TiltStrategy::FixedSize => {
                plan.config = plan
                    .config
                    .tilt_factor(input.tilt_factor.unwrap_or(FIXED_SIZE_TILT_FACTOR))
                    .depth(0.0)
                    .press(FIXED_SIZE_TRANSITION, Easing::CubicOut)
                    .release(FIXED_SIZE_TRANSITION, Easing::CubicOut);
                plan.pinned_size = Some(pinned_size(input.size));
            }
            TiltStrategy::LayeredShadow => {
                plan.shadow_layer = Some(input.shadow.cloned().unwrap_or_else(default_layer_shadow));
            }
            TiltStrategy::CompensatedPlanerator => {
                if let Some(shadow) = input.shadow {
                    plan.rotation_origin = compensated_origin(shadow.blur_radius, input.size);
                }
            }
            TiltStrategy::NoShadow | TiltStrategy::Auto => {}
        }

        log::debug!("tilt strategy {:?} (origin {:?})", plan.strategy, plan.rotation_origin);
        plan
    }
}

/// Shifts the origin up-left by half the blur so the rotation centre sits on
/// the content rather than on content plus shadow.
pub fn compensated_origin(blur_radius: f32, size: Vec2) -> Vec2 {
    let half_blur = relief_engine::coords::clamp_non_negative(blur_radius) / 2.0;
    let axis = |extent: f32| {
        if extent.is_finite() && extent > 0.0 {
            0.5 - half_blur / extent
        } else {
            0.5
        }
    };
    Vec2::new(axis(size.x), axis(size.y))
}

fn pinned_size(size: Vec2) -> Vec2 {
    let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
    Vec2::new(pick(size.x, FIXED_SIZE_FALLBACK.x), pick(size.y, FIXED_SIZE_FALLBACK.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits() -> ElementTraits {
        ElementTraits::default()
    }

    // ── resolve ──────────────────────────────────────────────────────────

    #[test]
    fn explicit_strategy_is_kept() {
        let t = ElementTraits { has_fixed_size: true, ..traits() };
        assert_eq!(TiltStrategy::NoShadow.resolve(&t), TiltStrategy::NoShadow);
        assert_eq!(TiltStrategy::CompensatedPlanerator.resolve(&t), TiltStrategy::CompensatedPlanerator);
    }

    #[test]
    fn fixed_size_simple_content() {
        let t = ElementTraits { has_fixed_size: true, has_drop_shadow: true, child_count: 3, ..traits() };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::FixedSize);
    }

    #[test]
    fn fixed_size_complex_content_falls_through() {
        let t = ElementTraits { has_fixed_size: true, child_count: 4, ..traits() };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::NoShadow);
    }

    #[test]
    fn shadowed_standalone_button_is_layered() {
        let t = ElementTraits { has_drop_shadow: true, is_button: true, child_count: 10, ..traits() };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::LayeredShadow);
    }

    #[test]
    fn shadowed_complex_content_is_compensated() {
        let t = ElementTraits {
            has_drop_shadow: true,
            is_button: true,
            in_items_control: true,
            child_count: 5,
            ..traits()
        };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::CompensatedPlanerator);
    }

    #[test]
    fn shadowed_simple_content_defaults_to_layered() {
        let t = ElementTraits { has_drop_shadow: true, child_count: 1, ..traits() };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::LayeredShadow);

        let t = ElementTraits { has_drop_shadow: true, preserve_shadow: false, child_count: 9, ..traits() };
        assert_eq!(TiltStrategy::Auto.resolve(&t), TiltStrategy::LayeredShadow);
    }

    #[test]
    fn no_shadow() {
        assert_eq!(TiltStrategy::Auto.resolve(&traits()), TiltStrategy::NoShadow);
    }

    // ── plans ────────────────────────────────────────────────────────────

    #[test]
    fn fixed_size_plan() {
        let input = PlanInput { size: Vec2::new(0.0, 32.0), ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::FixedSize, &input, &TiltConfig::default());
        assert_eq!(plan.pinned_size, Some(Vec2::new(100.0, 32.0)));
        assert_eq!(plan.config.tilt_factor, 10.0);
        assert_eq!(plan.config.press_duration, Duration::from_millis(100));
        assert_eq!(plan.config.release_easing, Easing::CubicOut);
        assert_eq!(plan.config.depth, 0.0);

        let input = PlanInput { tilt_factor: Some(4.0), ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::FixedSize, &input, &TiltConfig::default());
        assert_eq!(plan.config.tilt_factor, 4.0);
        assert_eq!(plan.pinned_size, Some(Vec2::new(100.0, 40.0)));
    }

    #[test]
    fn layered_plan_supplies_default_shadow() {
        let plan = StrategyPlan::new(TiltStrategy::LayeredShadow, &PlanInput::default(), &TiltConfig::default());
        let s = plan.shadow_layer.expect("layer shadow");
        assert_eq!(s.blur_radius, 15.0);
        assert_eq!(s.depth, 5.0);
        assert_eq!(s.direction, 270.0);
        assert_eq!(s.opacity, 0.3);
    }

    #[test]
    fn layered_plan_moves_existing_shadow() {
        let own = ShadowSpec::default().blur_radius(7.0);
        let input = PlanInput { shadow: Some(&own), ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::LayeredShadow, &input, &TiltConfig::default());
        assert_eq!(plan.shadow_layer, Some(own));
    }

    #[test]
    fn compensated_origin_shifts_by_half_blur() {
        let shadow = ShadowSpec::default().blur_radius(20.0);
        let input = PlanInput { size: Vec2::new(200.0, 100.0), shadow: Some(&shadow), ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::CompensatedPlanerator, &input, &TiltConfig::default());
        assert!(plan.rotation_origin.approx_eq(Vec2::new(0.45, 0.4), 1e-6));
        assert_eq!(plan.shadow_layer, None);
    }

    #[test]
    fn compensated_origin_ignores_unmeasured_axes() {
        assert_eq!(compensated_origin(20.0, Vec2::zero()), Vec2::splat(0.5));
    }

    #[test]
    fn explicit_tilt_factor_applies_everywhere() {
        let input = PlanInput { tilt_factor: Some(12.0), ..PlanInput::default() };
        let plan = StrategyPlan::new(TiltStrategy::Auto, &input, &TiltConfig::default());
        assert_eq!(plan.strategy, TiltStrategy::NoShadow);
        assert_eq!(plan.config.tilt_factor, 12.0);
    }
}
