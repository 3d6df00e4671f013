use bytemuck::{Pod, Zeroable};

/// Per-frame uniform block: projection at binding 0, model at binding 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub projection: [f32; 16],
    pub model: [f32; 16],
}

/// Homogeneous vertex position in model space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TriangleVertex {
    pub pos: [f32; 4],
}

impl TriangleVertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y, 0.0, 1.0] }
    }
}
