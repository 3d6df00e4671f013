use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

/// Four-component vector (homogeneous point or RGBA-style payload).
///
/// Same arithmetic as [`Vec3`](super::Vec3) minus the cross product, plus an
/// ordered `[x, y, z, w]` array view for bulk interop.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }

    #[inline]
    pub fn add(self, other: Vec4) -> Vec4 {
        Vec4::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }

    #[inline]
    pub fn subtract(self, other: Vec4) -> Vec4 {
        Vec4::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }

    #[inline]
    pub fn multiply(self, scalar: f32) -> Vec4 {
        Vec4::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }

    #[inline]
    pub fn divide(self, scalar: f32) -> Vec4 {
        Vec4::new(self.x / scalar, self.y / scalar, self.z / scalar, self.w / scalar)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// The zero vector normalizes to all-NaN.
    #[inline]
    pub fn normalized(self) -> Vec4 {
        let l = self.length();
        Vec4::new(self.x / l, self.y / l, self.z / l, self.w / l)
    }

    #[inline]
    pub fn dot(self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub fn array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Overwrites all four components from `a`.
    #[inline]
    pub fn set_array(&mut self, a: [f32; 4]) {
        *self = Vec4::from(a);
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Vec4::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.array()
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    #[inline]
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4::add(self, rhs)
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    #[inline]
    fn sub(self, rhs: Vec4) -> Vec4 {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: f32) -> Vec4 {
        self.multiply(rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn div(self, rhs: f32) -> Vec4 {
        self.divide(rhs)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;
    #[inline]
    fn neg(self) -> Vec4 {
        Vec4::new(-self.x, -self.y, -self.z, -self.w)
    }
}
