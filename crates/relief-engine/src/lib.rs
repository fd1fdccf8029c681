//! Relief engine crate.
//!
//! This crate owns the platform-agnostic pieces used by higher layers:
//! rounded-rect clip geometry, eased transitions and the pointer tilt
//! controller. Nothing here touches a window system or a GPU.

pub mod coords;
pub mod geometry;
pub mod anim;
pub mod tilt;

pub mod input;
pub mod time;
pub mod logging;
