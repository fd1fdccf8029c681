//! Coordinate and geometry value types shared by the geometry engine,
//! the tilt controller and the UI decorations.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod corner_radii;
mod rect;
mod thickness;
mod vec2;

pub use color::ColorRgba;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use thickness::Thickness;
pub use vec2::Vec2;

/// Smallest positive `f32`. Anything below it (including NaN and negatives)
/// counts as "effectively zero" for radii and insets.
pub const EPSILON: f32 = f32::from_bits(1);

/// Maps NaN, infinite, negative and sub-[`EPSILON`] values to exactly `0.0`.
#[inline]
pub fn clamp_non_negative(v: f32) -> f32 {
    if v.is_finite() && v >= EPSILON { v } else { 0.0 }
}
