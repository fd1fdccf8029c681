use crate::coords::{Rect, Vec2};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Leave,
}

/// Pointer notification in the element's local coordinates, carrying the
/// element's measured size at the time of the event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl PointerEvent {
    #[inline]
    pub fn new(kind: PointerEventKind, pos: Vec2, size: Vec2) -> Self {
        Self { kind, pos, size }
    }

    #[inline]
    pub fn down(pos: Vec2, size: Vec2) -> Self {
        Self::new(PointerEventKind::Down, pos, size)
    }

    #[inline]
    pub fn moved(pos: Vec2, size: Vec2) -> Self {
        Self::new(PointerEventKind::Move, pos, size)
    }

    #[inline]
    pub fn up(pos: Vec2, size: Vec2) -> Self {
        Self::new(PointerEventKind::Up, pos, size)
    }

    #[inline]
    pub fn leave(size: Vec2) -> Self {
        Self::new(PointerEventKind::Leave, Vec2::zero(), size)
    }

    /// False when layout has not produced a usable size yet.
    #[inline]
    pub fn has_size(&self) -> bool {
        self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Closed bounds test against the measured size.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.has_size() && Rect::from_origin_size(Vec2::zero(), self.size).contains_closed(self.pos)
    }
}
