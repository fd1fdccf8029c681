use relief_engine::coords::{clamp_non_negative, ColorRgba, CornerRadii, Rect, Thickness, Vec2};
use relief_engine::geometry::{build_donut, build_rounded_rect, DonutRegion, RoundedRectPath};

/// Where the shadow is drawn relative to the content.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShadowMode {
    /// Shadow follows the content; nothing is clipped.
    #[default]
    Content,
    /// Shadow stays inside the content bounds.
    Inner,
    /// Shadow only shows outside the content, through the donut clip.
    Outer,
}

/// Quality hint forwarded to whatever renders the blur.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RenderingBias {
    #[default]
    Performance,
    Quality,
}

/// Drop shadow parameters.
///
/// # Example
/// ```rust,ignore
/// let spec = ShadowSpec::default()
///     .mode(ShadowMode::Outer)
///     .corner_radius(CornerRadii::all(8.0))
///     .blur_radius(12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSpec {
    pub blur_radius: f32,
    pub color: ColorRgba,
    /// Degrees, counter-clockwise from +X. 315 puts the shadow bottom-right.
    pub direction: f32,
    pub opacity: f32,
    /// Distance the shadow is pushed along `direction`.
    pub depth: f32,
    pub mode: ShadowMode,
    pub bias: RenderingBias,
    pub corner_radius: CornerRadii,
    pub border_thickness: Thickness,
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self {
            blur_radius: 20.0,
            color: ColorRgba::black(),
            direction: 315.0,
            opacity: 0.8,
            depth: 0.0,
            mode: ShadowMode::Content,
            bias: RenderingBias::Performance,
            corner_radius: CornerRadii::zero(),
            border_thickness: Thickness::zero(),
        }
    }
}

impl ShadowSpec {
    pub fn blur_radius(mut self, r: f32) -> Self {
        self.blur_radius = r;
        self
    }

    pub fn color(mut self, color: ColorRgba) -> Self {
        self.color = color;
        self
    }

    pub fn direction(mut self, degrees: f32) -> Self {
        self.direction = degrees;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn mode(mut self, mode: ShadowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn bias(mut self, bias: RenderingBias) -> Self {
        self.bias = bias;
        self
    }

    pub fn corner_radius(mut self, radii: CornerRadii) -> Self {
        self.corner_radius = radii;
        self
    }

    pub fn border_thickness(mut self, thickness: Thickness) -> Self {
        self.border_thickness = thickness;
        self
    }

    /// Shadow color with `opacity` folded into alpha.
    pub fn effective_color(&self) -> ColorRgba {
        self.color.with_opacity(self.opacity)
    }
}

/// Clip applied to the shadow layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowClip {
    None,
    Donut(DonutRegion),
}

impl ShadowClip {
    pub fn donut(&self) -> Option<&DonutRegion> {
        match self {
            ShadowClip::Donut(d) => Some(d),
            ShadowClip::None => None,
        }
    }
}

/// Hosts one child and decorates it with a drop shadow.
///
/// The panel only computes geometry; the host draws the shadow with
/// [`ShadowSpec::effective_color`] inside [`shadow_bounds`](Self::shadow_bounds)
/// and applies the returned clips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropShadowPanel {
    spec: ShadowSpec,
}

impl DropShadowPanel {
    pub fn new(spec: ShadowSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &ShadowSpec {
        &self.spec
    }

    pub fn set_spec(&mut self, spec: ShadowSpec) {
        self.spec = spec;
    }

    /// Outer mode clips the shadow to the ring between the blurred bounds and
    /// the content outline; every other mode leaves it unclipped.
    pub fn shadow_clip(&self, size: Vec2) -> ShadowClip {
        match self.spec.mode {
            ShadowMode::Outer => ShadowClip::Donut(build_donut(
                content_rect(size),
                self.spec.border_thickness,
                self.spec.corner_radius,
                self.spec.blur_radius,
            )),
            ShadowMode::Content | ShadowMode::Inner => ShadowClip::None,
        }
    }

    /// Rounded outline the hosted child is clipped to.
    pub fn content_clip(&self, size: Vec2) -> RoundedRectPath {
        build_rounded_rect(content_rect(size), self.spec.border_thickness, self.spec.corner_radius)
    }

    pub fn shadow_offset(&self) -> Vec2 {
        let depth = clamp_non_negative(self.spec.depth);
        let theta = self.spec.direction.to_radians();
        if !theta.is_finite() {
            return Vec2::zero();
        }
        Vec2::new(depth * theta.cos(), -depth * theta.sin())
    }

    /// Area touched by the shadow: the content rect shifted by
    /// [`shadow_offset`](Self::shadow_offset) and grown by the blur radius.
    pub fn shadow_bounds(&self, size: Vec2) -> Rect {
        content_rect(size)
            .translate(self.shadow_offset())
            .inflate(clamp_non_negative(self.spec.blur_radius))
    }
}

#[inline]
fn content_rect(size: Vec2) -> Rect {
    Rect::from_size(clamp_non_negative(size.x), clamp_non_negative(size.y))
}
