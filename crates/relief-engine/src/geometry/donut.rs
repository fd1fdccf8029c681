use crate::coords::{clamp_non_negative, CornerRadii, Rect, Thickness, Vec2};

use super::path::RoundedRectPath;
use super::rounded_rect::{build_rounded_rect, is_degenerate};

/// Boolean operator combining two outlines.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CombineMode {
    /// First minus second.
    Exclude,
}

/// Outer outline minus inner outline.
///
/// Used as the clip of an "outer" drop shadow so the blur stays outside the
/// element instead of showing through its rounded edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutRegion {
    outer: RoundedRectPath,
    inner: RoundedRectPath,
    mode: CombineMode,
}

impl DonutRegion {
    #[inline]
    pub fn outer(&self) -> &RoundedRectPath {
        &self.outer
    }

    #[inline]
    pub fn inner(&self) -> &RoundedRectPath {
        &self.inner
    }

    #[inline]
    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    pub fn contains(&self, p: Vec2) -> bool {
        match self.mode {
            CombineMode::Exclude => self.outer.contains(p) && !self.inner.contains(p),
        }
    }

    /// Area of the ring. The inner outline always lies inside the outer one
    /// (same radii, outer grown by a non-negative blur), so this is exact.
    pub fn area(&self) -> f32 {
        (self.outer.area() - self.inner.area()).max(0.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty() || self.area() <= 0.0
    }

    /// Both subpaths, meant to be filled with the even-odd rule.
    pub fn to_svg_path_data(&self) -> String {
        match (self.outer.is_empty(), self.inner.is_empty()) {
            (true, _) => String::new(),
            (false, true) => self.outer.to_svg_path_data(),
            (false, false) => format!(
                "{} {}",
                self.outer.to_svg_path_data(),
                self.inner.to_svg_path_data()
            ),
        }
    }
}

/// Builds the shadow clip: `rect` grown by `blur_radius` on every side, minus
/// `rect` itself, both rounded with the same insets and radii.
///
/// A negative or NaN blur counts as zero, in which case both outlines coincide
/// and the ring has no area.
pub fn build_donut(
    rect: Rect,
    thickness: Thickness,
    radii: CornerRadii,
    blur_radius: f32,
) -> DonutRegion {
    if is_degenerate(rect) {
        log::trace!("donut clip skipped: degenerate {:?}", rect);
        return DonutRegion {
            outer: RoundedRectPath::empty(),
            inner: RoundedRectPath::empty(),
            mode: CombineMode::Exclude,
        };
    }

    let blur = clamp_non_negative(blur_radius);
    let inner_rect = rect;
    let outer_rect = inner_rect.inflate(blur);

    log::trace!("donut clip: blur {} around {:?}", blur, inner_rect);

    DonutRegion {
        outer: build_rounded_rect(outer_rect, thickness, radii),
        inner: build_rounded_rect(inner_rect, thickness, radii),
        mode: CombineMode::Exclude,
    }
}
