use relief_engine::tilt::TiltCommands;

/// Whether an input event was handled by a decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// What a tilt behaviour did with one input event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TiltResponse {
    /// Commands to apply to the presentation, in order.
    pub commands: TiltCommands,
}

impl TiltResponse {
    #[inline]
    pub fn result(&self) -> EventResult {
        if self.commands.is_empty() {
            EventResult::Ignored
        } else {
            EventResult::Consumed
        }
    }
}
