//! Projection builders.
//!
//! Both return the 16 floats ready to be copied into a uniform buffer. Frame
//! coordinates arrive as `f64` (platform logical pixels); each term is
//! evaluated in `f64` and narrowed to `f32` at the end.
//!
//! Degenerate planes (`left == right`, `bottom == top`, `near == far`) are a
//! caller error and produce infinities/NaNs rather than a failure.

use super::Mat4;

impl Mat4 {
    /// Off-center frustum projection looking down -Z.
    pub fn perspective_matrix(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> [f32; 16] {
        let a = ((2.0 * near) / (right - left)) as f32;
        let b = ((2.0 * near) / (top - bottom)) as f32;

        let c = ((left + right) / (right - left)) as f32;
        let d = ((bottom + top) / (top - bottom)) as f32;
        let e = ((near + far) / (near - far)) as f32;

        let f = ((2.0 * near * far) / (near - far)) as f32;

        [
            a, 0.0, 0.0, 0.0,
            0.0, b, 0.0, 0.0,
            c, d, e, -1.0,
            0.0, 0.0, f, 1.0,
        ]
    }

    /// Orthographic projection for pixel-space content.
    ///
    /// Geometry must sit at positive coordinates, or be placed with a
    /// translation carrying a positive Z, to land inside the clip volume.
    pub fn superbible7_ortho_matrix(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> [f32; 16] {
        let a = 2.0 / (right - left) as f32;
        let b = 2.0 / (top - bottom) as f32;
        let c = 2.0 / (near - far) as f32;

        let d = ((right + left) / (left - right)) as f32;
        let e = ((top + bottom) / (bottom - top)) as f32;
        let f = ((far + near) / (far - near)) as f32;

        [
            a, 0.0, 0.0, 0.0,
            0.0, b, 0.0, 0.0,
            0.0, 0.0, c, 0.0,
            d, e, f, 1.0,
        ]
    }
}
