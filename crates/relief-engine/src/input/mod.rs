//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window-system
//! events into `InputEvent`s; `InputState` folds them into "what is held and
//! where is the pointer" for hit testing.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
