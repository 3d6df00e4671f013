use super::Vec2;
use crate::math::Mat4;

/// Drawable size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Orthographic projection with the top-left origin and +Y down.
    pub fn ortho_projection(self, near: f64, far: f64) -> [f32; 16] {
        Mat4::superbible7_ortho_matrix(
            0.0,
            f64::from(self.width),
            f64::from(self.height),
            0.0,
            near,
            far,
        )
    }
}
