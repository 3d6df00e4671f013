use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

/// Three-component vector.
///
/// Division by zero is not guarded: it yields IEEE infinities/NaNs, which
/// callers are expected to detect downstream if they care.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// All three components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    #[inline]
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn subtract(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn multiply(self, scalar: f32) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub fn divide(self, scalar: f32) -> Vec3 {
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Divides every component by `length()`.
    ///
    /// The zero vector normalizes to all-NaN (0/0).
    #[inline]
    pub fn normalized(self) -> Vec3 {
        let l = self.length();
        Vec3::new(self.x / l, self.y / l, self.z / l)
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        self.multiply(rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        self.divide(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-6
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_zero_is_identity() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(v.add(Vec3::zero()), v);
        assert_eq!(v + Vec3::default(), v);
    }

    #[test]
    fn subtract_self_is_zero() {
        let v = Vec3::new(1.5, -2.0, 3.25);
        assert_eq!(v.subtract(v), Vec3::zero());
        assert_eq!(v - v, Vec3::zero());
    }

    #[test]
    fn multiply_and_divide_scale_componentwise() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.multiply(2.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v.divide(2.0), Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(v * 2.0, v.multiply(2.0));
        assert_eq!(-v, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn divide_by_zero_propagates_infinity_and_nan() {
        let v = Vec3::new(1.0, -1.0, 0.0).divide(0.0);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn splat_sets_every_component() {
        assert_eq!(Vec3::splat(4.0), Vec3::new(4.0, 4.0, 4.0));
    }

    // ── length / normalized ───────────────────────────────────────────────

    #[test]
    fn length_of_zero_is_exactly_zero() {
        assert_eq!(Vec3::zero().length(), 0.0);
    }

    #[test]
    fn length_pythagorean() {
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -7.5),
            Vec3::new(1e-3, 0.0, 0.0),
        ] {
            assert!(approx(v.normalized().length(), 1.0), "{v:?}");
        }
    }

    #[test]
    fn normalized_zero_is_nan() {
        let n = Vec3::zero().normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(!n.is_finite());
    }

    // ── dot / cross ───────────────────────────────────────────────────────

    #[test]
    fn dot_sums_pairwise_products() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn cross_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(approx(c.dot(a), 0.0));
        assert!(approx(c.dot(b), 0.0));
    }

    #[test]
    fn array_conversions() {
        let v: Vec3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
