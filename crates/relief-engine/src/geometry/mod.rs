//! Rounded-rectangle geometry.
//!
//! Responsibilities:
//! - resolve per-corner radii against border insets and each other
//! - emit a closed clockwise outline made of lines and quarter arcs
//! - compose two outlines into an outer-minus-inner clip region
//!
//! Everything here is a pure function of its inputs and is cheap enough to
//! call on every layout pass.

mod donut;
mod path;
mod rounded_rect;

pub use donut::{build_donut, CombineMode, DonutRegion};
pub use path::{PathSegment, RoundedRectPath, SweepDirection};
pub use rounded_rect::{build_rounded_rect, corner_rects, CornerRects};
