//! Small linear-algebra kit used to place geometry each frame.
//!
//! Conventions:
//! - `Mat4` is row-major (`index = row * 4 + col`)
//! - points are row vectors (`p * M`), translation lives in row 3
//! - no checks on division: zero lengths and degenerate frusta yield IEEE
//!   infinities/NaNs
//!
//! Only the operations the scene needs are provided; this is not a general
//! purpose math library.

mod error;
mod mat4;
mod projection;
mod vec3;
mod vec4;

pub use error::MatrixLenError;
pub use mat4::Mat4;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Converts whole degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: i32) -> f32 {
    degrees as f32 * core::f32::consts::PI / 180.0
}
