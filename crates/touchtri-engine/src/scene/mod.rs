//! CPU side of the "move triangle" scene.
//!
//! Responsibilities:
//! - build the orthographic projection from the viewport once (and on resize)
//! - rebuild the model translation from the primary touch
//! - expose everything a renderer uploads as plain bytes
//!
//! No GPU objects live here; a renderer copies `frame_uniforms()` into its
//! uniform buffer after the scene has been updated for the frame.

mod config;
mod triangle;
mod uniform;

pub use config::SceneConfig;
pub use triangle::TriangleScene;
pub use uniform::{FrameUniforms, TriangleVertex};
