use std::fmt;

use relief_engine::coords::{CornerRadii, Rect, Thickness, Vec2};
use relief_ui::drop_shadow::{DropShadowPanel, ShadowMode, ShadowSpec};

/// Resolved `clip` command input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub size: Vec2,
    pub radii: CornerRadii,
    pub thickness: Thickness,
    pub blur: f32,
    pub donut: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutput {
    pub bounds: Rect,
    pub path_data: String,
    pub area: f32,
    pub shadow_bounds: Rect,
    pub donut: Option<DonutOutput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutOutput {
    pub path_data: String,
    pub area: f32,
}

pub fn render_clip(req: &ClipRequest) -> ClipOutput {
    let mode = if req.donut { ShadowMode::Outer } else { ShadowMode::Content };
    let panel = DropShadowPanel::new(
        ShadowSpec::default()
            .blur_radius(req.blur)
            .corner_radius(req.radii)
            .border_thickness(req.thickness)
            .mode(mode),
    );

    let clip = panel.content_clip(req.size);
    let donut = panel.shadow_clip(req.size).donut().map(|d| DonutOutput {
        path_data: d.to_svg_path_data(),
        area: d.area(),
    });

    ClipOutput {
        bounds: clip.bounds(),
        path_data: clip.to_svg_path_data(),
        area: clip.area(),
        shadow_bounds: panel.shadow_bounds(req.size),
        donut,
    }
}

impl fmt::Display for ClipOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds;
        writeln!(f, "bounds  {} {} {} {}", b.left(), b.top(), b.width(), b.height())?;
        writeln!(f, "area    {:.3}", self.area)?;
        writeln!(f, "path    {}", if self.path_data.is_empty() { "(empty)" } else { &self.path_data })?;

        let s = self.shadow_bounds;
        writeln!(f, "shadow  {} {} {} {}", s.left(), s.top(), s.width(), s.height())?;

        if let Some(d) = &self.donut {
            writeln!(f, "donut   {:.3}", d.area)?;
            writeln!(f, "ring    {} (evenodd)", d.path_data)?;
        }
        Ok(())
    }
}
