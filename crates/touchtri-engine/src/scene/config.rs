use crate::coords::ColorRgba;

/// Scene tunables.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneConfig {
    /// Half the triangle's width/height, in logical pixels.
    pub half_extent: f32,
    /// Z carried by the model translation. Must be positive for the
    /// orthographic projection to keep the triangle inside the clip volume.
    pub model_z: f32,
    pub near: f64,
    pub far: f64,
    pub clear_color: ColorRgba,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            half_extent: 25.0,
            model_z: 1.0,
            near: 0.1,
            far: 100.0,
            clear_color: ColorRgba::cyan(),
        }
    }
}
