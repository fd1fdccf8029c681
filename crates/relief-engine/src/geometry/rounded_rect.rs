use crate::coords::{clamp_non_negative, CornerRadii, Rect, Thickness, Vec2};

use super::path::{PathBuilder, RoundedRectPath};

/// Rects smaller than this on either axis produce no geometry.
const MIN_EXTENT: f32 = 1.0;

/// The four rects each corner arc is inscribed in.
///
/// After [`corner_rects`] returns, rects sharing an edge never overlap along
/// it and their combined span never exceeds that edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRects {
    pub top_left: Rect,
    pub top_right: Rect,
    pub bottom_right: Rect,
    pub bottom_left: Rect,
}

impl CornerRects {
    #[inline]
    pub fn as_array(&self) -> [Rect; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Each rect paired with the centre of the ellipse its arc belongs to
    /// (the rect corner pointing into the shape).
    pub(super) fn with_centers(&self) -> [(Rect, Vec2); 4] {
        [
            (self.top_left, self.top_left.bottom_right()),
            (self.top_right, self.top_right.bottom_left()),
            (self.bottom_right, self.bottom_right.top_left()),
            (self.bottom_left, self.bottom_left.top_right()),
        ]
    }
}

/// Resolves radii against half the border insets and against each other.
///
/// Each rect starts at `radius - adjacent half inset` per axis, anchored at its
/// corner of `rect`. Overlapping pairs are then shrunk proportionally, edge by
/// edge in the order top, right, bottom, left; every step may resize a rect the
/// next step looks at, so the order is part of the result.
pub fn corner_rects(rect: Rect, thickness: Thickness, radii: CornerRadii) -> CornerRects {
    // Negative extents clamp to zero rather than flipping the rect.
    let rect = Rect::from_origin_size(
        rect.origin,
        Vec2::new(clamp_non_negative(rect.size.x), clamp_non_negative(rect.size.y)),
    );
    let r = radii.normalized();
    let half = thickness.half();

    let (x, y) = (rect.left(), rect.top());
    let (w, h) = (rect.width(), rect.height());
    let (right, bottom) = (rect.right(), rect.bottom());

    let size = |radius: f32, horizontal_inset: f32, vertical_inset: f32| {
        Vec2::new((radius - horizontal_inset).max(0.0), (radius - vertical_inset).max(0.0))
    };

    let tl = size(r.top_left, half.left, half.top);
    let tr = size(r.top_right, half.right, half.top);
    let br = size(r.bottom_right, half.right, half.bottom);
    let bl = size(r.bottom_left, half.left, half.bottom);

    let mut top_left = Rect::new(x, y, tl.x, tl.y);
    let mut top_right = Rect::new(right - tr.x, y, tr.x, tr.y);
    let mut bottom_right = Rect::new(right - br.x, bottom - br.y, br.x, br.y);
    let mut bottom_left = Rect::new(x, bottom - bl.y, bl.x, bl.y);

    // Top edge.
    if top_left.right() > top_right.left() {
        let v = split(top_left.width(), top_right.width(), w);
        top_left.size.x = v;
        top_right = Rect::new(x + v, top_right.top(), (w - v).max(0.0), top_right.height());
    }

    // Right edge.
    if top_right.bottom() > bottom_right.top() {
        let v = split(top_right.height(), bottom_right.height(), h);
        top_right.size.y = v;
        bottom_right = Rect::new(bottom_right.left(), y + v, bottom_right.width(), (h - v).max(0.0));
    }

    // Bottom edge.
    if bottom_right.left() < bottom_left.right() {
        let v = split(bottom_left.width(), bottom_right.width(), w);
        bottom_left.size.x = v;
        bottom_right = Rect::new(x + v, bottom_right.top(), (w - v).max(0.0), bottom_right.height());
    }

    // Left edge.
    if bottom_left.top() < top_left.bottom() {
        let v = split(top_left.height(), bottom_left.height(), h);
        top_left.size.y = v;
        bottom_left = Rect::new(bottom_left.left(), y + v, bottom_left.width(), (h - v).max(0.0));
    }

    CornerRects { top_left, top_right, bottom_right, bottom_left }
}

/// Share of `span` owed to `a` when `a` and `b` compete for it.
#[inline]
fn split(a: f32, b: f32, span: f32) -> f32 {
    let total = a + b;
    if total > 0.0 { a / total * span } else { 0.0 }
}

/// Non-finite, negative or sub-pixel extents.
#[inline]
pub(super) fn is_degenerate(rect: Rect) -> bool {
    !rect.is_finite() || rect.size.x < MIN_EXTENT || rect.size.y < MIN_EXTENT
}

/// Builds the closed outline of `rect` with rounded corners.
///
/// The figure starts at the bottom of the top-left arc and runs clockwise:
/// top-left arc, top edge, top-right arc, right edge, bottom-right arc,
/// bottom edge, bottom-left arc, left edge (implicit close).
///
/// Returns an empty path when `rect` is narrower or shorter than one pixel.
/// Negative extents count as zero, not as a flipped rect.
pub fn build_rounded_rect(rect: Rect, thickness: Thickness, radii: CornerRadii) -> RoundedRectPath {
    if is_degenerate(rect) {
        log::trace!("rounded rect skipped: degenerate {:?}", rect);
        return RoundedRectPath::empty();
    }

    let c = corner_rects(rect, thickness, radii);

    let mut b = PathBuilder::begin(c.top_left.bottom_left());
    b.arc_to(c.top_left.top_right(), c.top_left.size);
    b.line_to(c.top_right.top_left());
    b.arc_to(c.top_right.bottom_right(), c.top_right.size);
    b.line_to(c.bottom_right.top_right());
    b.arc_to(c.bottom_right.bottom_left(), c.bottom_right.size);
    b.line_to(c.bottom_left.bottom_right());
    b.arc_to(c.bottom_left.top_left(), c.bottom_left.size);

    let path = b.finish(rect, c);
    log::trace!("rounded rect built: {} segments for {:?}", path.segments().len(), rect);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PathSegment, SweepDirection};

    const EPS: f32 = 1e-3;

    fn assert_no_overlap(rect: Rect, c: &CornerRects) {
        // Top edge.
        assert!(c.top_left.right() <= c.top_right.left() + EPS, "top overlap: {c:?}");
        assert!(c.top_left.width() + c.top_right.width() <= rect.width() + EPS);
        // Right edge.
        assert!(c.top_right.bottom() <= c.bottom_right.top() + EPS, "right overlap: {c:?}");
        assert!(c.top_right.height() + c.bottom_right.height() <= rect.height() + EPS);
        // Bottom edge.
        assert!(c.bottom_left.right() <= c.bottom_right.left() + EPS, "bottom overlap: {c:?}");
        assert!(c.bottom_left.width() + c.bottom_right.width() <= rect.width() + EPS);
        // Left edge.
        assert!(c.top_left.bottom() <= c.bottom_left.top() + EPS, "left overlap: {c:?}");
        assert!(c.top_left.height() + c.bottom_left.height() <= rect.height() + EPS);
    }

    // ── corner rects ──────────────────────────────────────────────────────

    #[test]
    fn corner_rects_anchor_to_their_corners() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let c = corner_rects(rect, Thickness::zero(), CornerRadii::new(4.0, 6.0, 8.0, 10.0));
        assert_eq!(c.top_left, Rect::new(10.0, 20.0, 4.0, 4.0));
        assert_eq!(c.top_right, Rect::new(104.0, 20.0, 6.0, 6.0));
        assert_eq!(c.bottom_right, Rect::new(102.0, 62.0, 8.0, 8.0));
        assert_eq!(c.bottom_left, Rect::new(10.0, 60.0, 10.0, 10.0));
    }

    #[test]
    fn half_insets_shrink_the_adjacent_axis() {
        let rect = Rect::from_size(100.0, 100.0);
        let t = Thickness::new(2.0, 4.0, 6.0, 8.0);
        let c = corner_rects(rect, t, CornerRadii::all(10.0));
        assert_eq!(c.top_left.size, Vec2::new(9.0, 8.0));
        assert_eq!(c.top_right.size, Vec2::new(7.0, 8.0));
        assert_eq!(c.bottom_right.size, Vec2::new(7.0, 6.0));
        assert_eq!(c.bottom_left.size, Vec2::new(9.0, 6.0));
    }

    #[test]
    fn negative_width_clamps_instead_of_flipping() {
        let c = corner_rects(Rect::new(0.0, 0.0, -50.0, 20.0), Thickness::zero(), CornerRadii::all(4.0));
        for r in c.as_array() {
            assert_eq!(r.width(), 0.0, "{c:?}");
            assert!(r.left() >= 0.0, "{c:?}");
        }
    }

    #[test]
    fn inset_larger_than_radius_collapses_corner() {
        let c = corner_rects(Rect::from_size(50.0, 50.0), Thickness::uniform(30.0), CornerRadii::all(10.0));
        for r in c.as_array() {
            assert_eq!(r.size, Vec2::zero());
        }
    }

    #[test]
    fn conflicting_top_corners_split_proportionally() {
        let rect = Rect::from_size(100.0, 400.0);
        let c = corner_rects(rect, Thickness::zero(), CornerRadii::new(90.0, 30.0, 0.0, 0.0));
        assert!((c.top_left.width() - 75.0).abs() < EPS);
        assert!((c.top_right.left() - 75.0).abs() < EPS);
        assert!((c.top_right.width() - 25.0).abs() < EPS);
        // Heights are untouched by a top-edge conflict.
        assert_eq!(c.top_left.height(), 90.0);
        assert_eq!(c.top_right.height(), 30.0);
    }

    #[test]
    fn conflicting_left_corners_split_proportionally() {
        let rect = Rect::from_size(400.0, 100.0);
        let c = corner_rects(rect, Thickness::zero(), CornerRadii::new(60.0, 0.0, 0.0, 60.0));
        assert!((c.top_left.height() - 50.0).abs() < EPS);
        assert!((c.bottom_left.top() - 50.0).abs() < EPS);
        assert!((c.bottom_left.height() - 50.0).abs() < EPS);
    }

    #[test]
    fn corner_rects_never_overlap() {
        let rects = [
            Rect::from_size(1.0, 1.0),
            Rect::from_size(37.0, 11.0),
            Rect::new(-5.0, 3.0, 200.0, 100.0),
            Rect::from_size(10.0, 300.0),
        ];
        let radii = [
            CornerRadii::zero(),
            CornerRadii::all(5.0),
            CornerRadii::all(500.0),
            CornerRadii::new(80.0, 1.0, 250.0, 13.0),
            CornerRadii::new(0.0, 400.0, 0.0, 400.0),
            CornerRadii::new(f32::NAN, -10.0, 75.0, f32::INFINITY),
        ];
        let thicknesses = [
            Thickness::zero(),
            Thickness::uniform(3.0),
            Thickness::new(40.0, 0.0, 1.0, 90.0),
            Thickness::new(-4.0, f32::NAN, 2.0, 2.0),
        ];

        for rect in rects {
            for r in radii {
                for t in thicknesses {
                    let c = corner_rects(rect, t, r);
                    assert_no_overlap(rect, &c);
                    for cr in c.as_array() {
                        assert!(cr.width() >= 0.0 && cr.height() >= 0.0);
                        assert!(cr.is_finite());
                    }
                }
            }
        }
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn zero_radii_degenerate_to_plain_box() {
        let rect = Rect::new(5.0, 5.0, 40.0, 20.0);
        let path = build_rounded_rect(rect, Thickness::zero(), CornerRadii::zero());

        let points: Vec<Vec2> = path.vertices().collect();
        assert_eq!(
            points,
            vec![rect.top_left(), rect.top_right(), rect.bottom_right(), rect.bottom_left()]
        );
        assert!(path.segments().iter().all(|s| matches!(s, PathSegment::Line { .. })));
        assert_eq!(path.area(), 800.0);
    }

    #[test]
    fn sub_pixel_rect_is_empty_for_any_input() {
        let rects = [
            Rect::from_size(0.5, 100.0),
            Rect::from_size(100.0, 0.99),
            Rect::from_size(0.0, 0.0),
            Rect::new(0.0, 0.0, -50.0, 20.0),
            Rect::new(10.0, 10.0, 80.0, -40.0),
        ];
        for rect in rects {
            for r in [CornerRadii::zero(), CornerRadii::all(20.0)] {
                for t in [Thickness::zero(), Thickness::uniform(4.0)] {
                    assert!(build_rounded_rect(rect, t, r).is_empty());
                }
            }
        }
    }

    #[test]
    fn non_finite_rect_is_empty() {
        let rect = Rect::new(0.0, 0.0, f32::INFINITY, 10.0);
        assert!(build_rounded_rect(rect, Thickness::zero(), CornerRadii::all(2.0)).is_empty());
    }

    #[test]
    fn uniform_radius_walks_clockwise_from_top_left_arc() {
        let rect = Rect::from_size(100.0, 50.0);
        let path = build_rounded_rect(rect, Thickness::zero(), CornerRadii::all(10.0));

        assert_eq!(path.start(), Vec2::new(0.0, 10.0));
        let ends: Vec<Vec2> = path.segments().iter().map(PathSegment::end).collect();
        assert_eq!(
            ends,
            vec![
                Vec2::new(10.0, 0.0),
                Vec2::new(90.0, 0.0),
                Vec2::new(100.0, 10.0),
                Vec2::new(100.0, 40.0),
                Vec2::new(90.0, 50.0),
                Vec2::new(10.0, 50.0),
                Vec2::new(0.0, 40.0),
            ]
        );

        for seg in path.segments().iter().step_by(2) {
            let PathSegment::Arc { radii, rotation_deg, large_arc, sweep, .. } = *seg else {
                panic!("expected arc, got {seg:?}");
            };
            assert_eq!(radii, Vec2::splat(10.0));
            assert_eq!(rotation_deg, 0.0);
            assert!(!large_arc);
            assert_eq!(sweep, SweepDirection::Clockwise);
        }
    }

    #[test]
    fn svg_path_data_round_corners() {
        let path = build_rounded_rect(Rect::from_size(20.0, 20.0), Thickness::zero(), CornerRadii::all(10.0));
        assert_eq!(
            path.to_svg_path_data(),
            "M 0 10 A 10 10 0 0 1 10 0 A 10 10 0 0 1 20 10 A 10 10 0 0 1 10 20 A 10 10 0 0 1 0 10 Z"
        );
    }

    // ── hit testing / area ────────────────────────────────────────────────

    #[test]
    fn contains_excludes_cut_corners() {
        let path = build_rounded_rect(Rect::from_size(100.0, 100.0), Thickness::zero(), CornerRadii::all(20.0));
        assert!(path.contains(Vec2::new(50.0, 50.0)));
        assert!(path.contains(Vec2::new(0.0, 50.0)));
        assert!(!path.contains(Vec2::new(1.0, 1.0)));
        assert!(!path.contains(Vec2::new(99.0, 99.0)));
        assert!(!path.contains(Vec2::new(150.0, 50.0)));
        // On the arc itself.
        let d = 20.0 - 20.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(path.contains(Vec2::new(d + 0.01, d + 0.01)));
    }

    #[test]
    fn area_subtracts_quarter_circle_remainders() {
        let path = build_rounded_rect(Rect::from_size(100.0, 100.0), Thickness::zero(), CornerRadii::all(10.0));
        let expected = 100.0 * 100.0 - 4.0 * (100.0 - std::f32::consts::PI * 100.0 / 4.0);
        assert!((path.area() - expected).abs() < 0.01);
    }
}
