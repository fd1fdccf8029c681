use std::f32::consts::FRAC_PI_4;
use std::fmt::Write as _;

use crate::coords::{Rect, Vec2};

use super::rounded_rect::CornerRects;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

/// One segment of an outline. Segments start where the previous one ended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    Line {
        to: Vec2,
    },
    /// Elliptical arc in SVG/XAML terms.
    Arc {
        to: Vec2,
        radii: Vec2,
        rotation_deg: f32,
        large_arc: bool,
        sweep: SweepDirection,
    },
}

impl PathSegment {
    #[inline]
    pub fn end(&self) -> Vec2 {
        match *self {
            PathSegment::Line { to } | PathSegment::Arc { to, .. } => to,
        }
    }
}

/// Closed outline of a rounded rectangle.
///
/// The figure starts at `start`, follows `segments` and closes implicitly
/// back to `start`. An empty path has no segments and covers no area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundedRectPath {
    start: Vec2,
    segments: Vec<PathSegment>,
    bounds: Rect,
    corners: CornerRects,
}

impl RoundedRectPath {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Rectangle the outline was built for.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resolved corner rects (each arc is inscribed in its rect).
    #[inline]
    pub fn corners(&self) -> &CornerRects {
        &self.corners
    }

    /// Start point followed by every segment end point.
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let head = (!self.is_empty()).then_some(self.start);
        head.into_iter().chain(self.segments.iter().map(PathSegment::end))
    }

    /// Exact point-in-shape test. Points on the outline count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        if self.is_empty() || !self.bounds.contains_closed(p) {
            return false;
        }

        self.corners
            .with_centers()
            .into_iter()
            .all(|(rect, center)| !in_corner(rect, p) || inside_ellipse(p, center, rect.size))
    }

    /// Enclosed area: the bounds minus what each quarter arc cuts away.
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let cut = 1.0 - FRAC_PI_4;
        let corners: f32 = self
            .corners
            .as_array()
            .iter()
            .map(|r| cut * r.area())
            .sum();
        (self.bounds.area() - corners).max(0.0)
    }

    /// SVG path data (`M … A … L … Z`) for the outline. Empty for an empty path.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        if self.is_empty() {
            return out;
        }

        let _ = write!(out, "M {} {}", self.start.x, self.start.y);
        for seg in &self.segments {
            match *seg {
                PathSegment::Line { to } => {
                    let _ = write!(out, " L {} {}", to.x, to.y);
                }
                PathSegment::Arc { to, radii, rotation_deg, large_arc, sweep } => {
                    let _ = write!(
                        out,
                        " A {} {} {} {} {} {} {}",
                        radii.x,
                        radii.y,
                        rotation_deg,
                        large_arc as u8,
                        (sweep == SweepDirection::Clockwise) as u8,
                        to.x,
                        to.y,
                    );
                }
            }
        }
        out.push_str(" Z");
        out
    }
}

#[inline]
fn in_corner(rect: Rect, p: Vec2) -> bool {
    !rect.is_empty() && rect.contains_closed(p)
}

#[inline]
fn inside_ellipse(p: Vec2, center: Vec2, radii: Vec2) -> bool {
    let dx = (p.x - center.x) / radii.x;
    let dy = (p.y - center.y) / radii.y;
    dx * dx + dy * dy <= 1.0 + 1e-5
}

/// Incremental outline builder; drops zero-length segments and turns arcs
/// with a collapsed radius into lines.
#[derive(Debug)]
pub(super) struct PathBuilder {
    start: Vec2,
    current: Vec2,
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub(super) fn begin(start: Vec2) -> Self {
        Self { start, current: start, segments: Vec::with_capacity(8) }
    }

    pub(super) fn line_to(&mut self, to: Vec2) {
        if to == self.current {
            return;
        }
        self.segments.push(PathSegment::Line { to });
        self.current = to;
    }

    /// Clockwise, small, unrotated quarter arc.
    pub(super) fn arc_to(&mut self, to: Vec2, radii: Vec2) {
        if to == self.current {
            return;
        }
        if radii.x <= 0.0 || radii.y <= 0.0 {
            self.line_to(to);
            return;
        }
        self.segments.push(PathSegment::Arc {
            to,
            radii,
            rotation_deg: 0.0,
            large_arc: false,
            sweep: SweepDirection::Clockwise,
        });
        self.current = to;
    }

    pub(super) fn finish(self, bounds: Rect, corners: CornerRects) -> RoundedRectPath {
        RoundedRectPath { start: self.start, segments: self.segments, bounds, corners }
    }
}
