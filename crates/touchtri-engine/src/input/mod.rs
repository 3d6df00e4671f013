//! Input subsystem.
//!
//! Public API is platform-agnostic. Host code translates its native touch
//! callbacks into `TouchEvent`s and feeds them to the scene.

mod state;
mod types;

pub use state::TouchState;
pub use types::{TouchEvent, TouchPhase};
