use crate::coords::Vec2;

use super::types::{TouchEvent, TouchPhase};

/// Tracks the primary touch for a single surface.
///
/// The first finger to go down owns the triangle until it lifts; other
/// fingers are ignored.
#[derive(Debug, Default)]
pub struct TouchState {
    /// Id of the finger currently driving the scene.
    pub primary: Option<u64>,

    /// Last reported location of the primary touch.
    pub location: Option<Vec2>,
}

impl TouchState {
    /// Applies an event and returns the new primary location, if it moved.
    pub fn apply(&mut self, ev: &TouchEvent) -> Option<Vec2> {
        match ev.phase {
            TouchPhase::Began => {
                if self.primary.is_some_and(|id| id != ev.id) {
                    return None;
                }
                self.primary = Some(ev.id);
            }
            TouchPhase::Moved => {
                if self.primary != Some(ev.id) {
                    return None;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.primary == Some(ev.id) {
                    self.primary = None;
                }
                return None;
            }
        }

        let pos = ev.location();
        self.location = Some(pos);
        Some(pos)
    }

    pub fn is_touching(&self) -> bool {
        self.primary.is_some()
    }
}
