//! Touch-driven triangle engine crate.
//!
//! Owns the math used to place geometry and the CPU-side scene state that a
//! renderer uploads each frame. Windowing and GPU work stay in the host.

pub mod coords;
pub mod input;
pub mod logging;
pub mod math;
pub mod scene;
