//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per loop, started at the loop's first instant
//! - call `tick_at(now)` once per frame with the instant the caller owns

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
