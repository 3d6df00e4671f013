use crate::coords::{Vec2, Viewport};
use crate::input::{TouchEvent, TouchPhase, TouchState};
use crate::math::Mat4;

use super::{FrameUniforms, SceneConfig, TriangleVertex};

/// A single filled triangle that follows the primary touch.
#[derive(Debug)]
pub struct TriangleScene {
    config: SceneConfig,
    viewport: Viewport,
    projection: [f32; 16],
    model: Mat4,
    vertices: [TriangleVertex; 3],
    touch: TouchState,
}

impl TriangleScene {
    /// Creates the scene with the triangle centered in `viewport`.
    ///
    /// An invalid viewport still produces a scene; its projection will hold
    /// non-finite values until the first valid `resize`.
    pub fn new(viewport: Viewport, config: SceneConfig) -> Self {
        if !viewport.is_valid() {
            log::warn!("scene created with invalid viewport {viewport:?}");
        }

        let h = config.half_extent;
        let center = viewport.center();

        let scene = Self {
            config,
            viewport,
            projection: viewport.ortho_projection(config.near, config.far),
            model: Mat4::translate(center.x, center.y, config.model_z),
            vertices: [
                TriangleVertex::new(0.0, h),
                TriangleVertex::new(-h, -h),
                TriangleVertex::new(h, -h),
            ],
            touch: TouchState::default(),
        };

        log::debug!(
            "triangle scene: viewport {}x{}, start at ({}, {})",
            viewport.width,
            viewport.height,
            center.x,
            center.y
        );

        scene
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn model(&self) -> &Mat4 {
        &self.model
    }

    #[inline]
    pub fn projection(&self) -> &[f32; 16] {
        &self.projection
    }

    #[inline]
    pub fn vertices(&self) -> &[TriangleVertex; 3] {
        &self.vertices
    }

    /// Current model origin in logical pixels.
    pub fn triangle_position(&self) -> Vec2 {
        let row = self.model.row3();
        Vec2::new(row[0], row[1])
    }

    /// Recomputes the projection for a new drawable size.
    ///
    /// Returns `false` and keeps the previous projection when `viewport`
    /// is not valid. The triangle keeps its position.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_valid() {
            log::warn!("ignoring resize to invalid viewport {viewport:?}");
            return false;
        }

        self.viewport = viewport;
        self.projection = viewport.ortho_projection(self.config.near, self.config.far);
        log::debug!("projection rebuilt for {}x{}", viewport.width, viewport.height);
        true
    }

    /// Feeds a touch event. Returns `true` when the triangle moved.
    ///
    /// Lift events always reach the touch state, whatever their location,
    /// so the primary slot is released.
    pub fn apply_touch(&mut self, ev: &TouchEvent) -> bool {
        let lifting = matches!(ev.phase, TouchPhase::Ended | TouchPhase::Cancelled);
        if !lifting && !ev.location().is_finite() {
            log::warn!("dropping touch with non-finite location ({}, {})", ev.x, ev.y);
            return false;
        }

        let Some(pos) = self.touch.apply(ev) else {
            return false;
        };

        self.model = Mat4::translate(pos.x, pos.y, self.config.model_z);
        log::trace!("touch {:?} -> triangle at ({}, {})", ev.phase, pos.x, pos.y);
        true
    }

    /// Snapshot of the uniforms for the current frame.
    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            projection: self.projection,
            model: self.model.array(),
        }
    }

    #[inline]
    pub fn model_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.model)
    }

    #[inline]
    pub fn projection_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.projection)
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
