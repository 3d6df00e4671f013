use crate::coords::Vec2;

/// Touch lifecycle phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// Touch event in logical pixels.
///
/// `id` is stable for the lifetime of one finger contact and is used to tell
/// the primary touch apart from additional fingers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub id: u64,
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    #[inline]
    pub const fn new(id: u64, phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { id, phase, x, y }
    }

    /// Location in logical pixels.
    #[inline]
    pub const fn location(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub const fn began(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, TouchPhase::Began, x, y)
    }

    #[inline]
    pub const fn moved(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, TouchPhase::Moved, x, y)
    }

    #[inline]
    pub const fn ended(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, TouchPhase::Ended, x, y)
    }
}
