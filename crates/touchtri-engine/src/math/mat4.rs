use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{MatrixLenError, Vec4};

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// 4x4 matrix stored as 16 floats, row-major (`index = row * 4 + col`).
///
/// Points are treated as row vectors (`p * M`), so translation lives in row 3.
/// Rows and columns are read and written by index into the single backing
/// array; there is no cached view that could go stale.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self { m: IDENTITY }
    }

    #[inline]
    pub const fn new(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Builds a matrix from a row-major slice.
    ///
    /// # Panics
    ///
    /// Panics unless `m.len() == 16`. A wrongly sized source is a
    /// configuration bug, not something to recover from; use
    /// `Mat4::try_from` when the length is not known statically.
    pub fn from_slice(m: &[f32]) -> Self {
        match Self::try_from(m) {
            Ok(mat) => mat,
            Err(err) => panic!("{err}"),
        }
    }

    /// The 16 elements in row-major order.
    #[inline]
    pub fn array(&self) -> [f32; 16] {
        self.m
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.m
    }

    /// Element count; always 16.
    #[inline]
    pub fn count(&self) -> usize {
        self.m.len()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        self.m[index(row, col)] = v;
    }

    #[inline]
    pub fn row(&self, i: usize) -> [f32; 4] {
        [self.get(i, 0), self.get(i, 1), self.get(i, 2), self.get(i, 3)]
    }

    #[inline]
    pub fn set_row(&mut self, i: usize, r: [f32; 4]) {
        for (col, v) in r.into_iter().enumerate() {
            self.set(i, col, v);
        }
    }

    /// Gathers elements `j, j+4, j+8, j+12`.
    #[inline]
    pub fn column(&self, j: usize) -> [f32; 4] {
        [self.get(0, j), self.get(1, j), self.get(2, j), self.get(3, j)]
    }

    #[inline]
    pub fn set_column(&mut self, j: usize, c: [f32; 4]) {
        for (row, v) in c.into_iter().enumerate() {
            self.set(row, j, v);
        }
    }

    pub fn row0(&self) -> [f32; 4] { self.row(0) }
    pub fn row1(&self) -> [f32; 4] { self.row(1) }
    pub fn row2(&self) -> [f32; 4] { self.row(2) }
    pub fn row3(&self) -> [f32; 4] { self.row(3) }

    pub fn set_row0(&mut self, r: [f32; 4]) { self.set_row(0, r) }
    pub fn set_row1(&mut self, r: [f32; 4]) { self.set_row(1, r) }
    pub fn set_row2(&mut self, r: [f32; 4]) { self.set_row(2, r) }
    pub fn set_row3(&mut self, r: [f32; 4]) { self.set_row(3, r) }

    pub fn column0(&self) -> [f32; 4] { self.column(0) }
    pub fn column1(&self) -> [f32; 4] { self.column(1) }
    pub fn column2(&self) -> [f32; 4] { self.column(2) }
    pub fn column3(&self) -> [f32; 4] { self.column(3) }

    pub fn set_column0(&mut self, c: [f32; 4]) { self.set_column(0, c) }
    pub fn set_column1(&mut self, c: [f32; 4]) { self.set_column(1, c) }
    pub fn set_column2(&mut self, c: [f32; 4]) { self.set_column(2, c) }
    pub fn set_column3(&mut self, c: [f32; 4]) { self.set_column(3, c) }

    // ── builders ──────────────────────────────────────────────────────────

    /// Identity with row 3 = `[x, y, z, 1]`.
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.set_row3([x, y, z, 1.0]);
        m
    }

    /// Identity with the first three diagonal entries replaced.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.m[0] = x;
        m.m[5] = y;
        m.m[10] = z;
        m
    }

    pub fn z_rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.set_row0([c, s, 0.0, 0.0]);
        m.set_row1([-s, c, 0.0, 0.0]);
        m
    }

    pub fn y_rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.set_row0([c, 0.0, -s, 0.0]);
        m.set_row2([s, 0.0, c, 0.0]);
        m
    }

    /// Note the `-sin` in both rows; this does not mirror `y_rotate`/`z_rotate`
    /// and is kept as-is because existing content depends on it.
    pub fn x_rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::identity();
        m.set_row1([0.0, c, -s, 0.0]);
        m.set_row2([0.0, -s, c, 0.0]);
        m
    }

    /// `result[r][c] = dot(m1.row(r), m2.column(c))`.
    pub fn multiply(m1: &Mat4, m2: &Mat4) -> Mat4 {
        let mut out = Mat4::identity();
        for r in 0..4 {
            let row = m1.row(r);
            for c in 0..4 {
                out.set(r, c, dot4(row, m2.column(c)));
            }
        }
        out
    }

    /// Row vector times matrix (`v * self`).
    pub fn transform_row(&self, v: Vec4) -> Vec4 {
        let a = v.array();
        Vec4::new(
            dot4(a, self.column(0)),
            dot4(a, self.column(1)),
            dot4(a, self.column(2)),
            dot4(a, self.column(3)),
        )
    }
}

#[inline]
fn index(row: usize, col: usize) -> usize {
    assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
    row * 4 + col
}

#[inline]
fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MatrixLenError;

    fn try_from(m: &[f32]) -> Result<Self, Self::Error> {
        let m: [f32; 16] = m.try_into().map_err(|_| MatrixLenError { len: m.len() })?;
        Ok(Self { m })
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::new(m)
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn sample() -> Mat4 {
        Mat4::new(core::array::from_fn(|i| i as f32 + 1.0))
    }

    fn assert_close(a: Mat4, b: Mat4) {
        for (x, y) in a.array().iter().zip(b.array().iter()) {
            assert!((x - y).abs() <= 1e-6, "{a:?} != {b:?}");
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::identity());
        assert_eq!(Mat4::identity().array(), IDENTITY);
        assert_eq!(Mat4::identity().count(), 16);
    }

    #[test]
    fn from_slice_accepts_sixteen() {
        let v: Vec<f32> = (0..16).map(|i| i as f32).collect();
        assert_eq!(Mat4::from_slice(&v).as_slice(), v.as_slice());
    }

    #[test]
    #[should_panic(expected = "matrix must be of length 16")]
    fn from_slice_rejects_fifteen() {
        Mat4::from_slice(&[0.0; 15]);
    }

    #[test]
    #[should_panic(expected = "matrix must be of length 16")]
    fn from_slice_rejects_seventeen() {
        Mat4::from_slice(&[0.0; 17]);
    }

    #[test]
    fn try_from_reports_length() {
        let err = Mat4::try_from(&[1.0f32; 3][..]).unwrap_err();
        assert_eq!(err, MatrixLenError { len: 3 });
        assert_eq!(err.to_string(), "matrix must be of length 16, got 3");
    }

    #[test]
    fn copies_are_independent() {
        let a = Mat4::identity();
        let mut b = a;
        b.set(0, 0, 9.0);
        assert_eq!(a.get(0, 0), 1.0);
        assert_eq!(b.get(0, 0), 9.0);
    }

    // ── row / column views ────────────────────────────────────────────────

    #[test]
    fn rows_and_columns_index_row_major() {
        let m = sample();
        assert_eq!(m.row1(), [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(m.column2(), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(m.get(3, 0), 13.0);
    }

    #[test]
    fn row_write_is_visible_in_array() {
        let mut m = Mat4::identity();
        m.set_row0([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(&m.array()[0..4], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.column0(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.column3(), [4.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn column_write_is_visible_in_rows() {
        let mut m = Mat4::identity();
        m.set_column1([9.0, 8.0, 7.0, 6.0]);
        assert_eq!(m.row2(), [0.0, 7.0, 1.0, 0.0]);
        assert_eq!(m.array()[13], 6.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn row_index_out_of_range_panics() {
        Mat4::identity().row(4);
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn translate_sets_last_row_only() {
        let m = Mat4::translate(5.0, 7.0, 2.0);
        assert_eq!(m.row3(), [5.0, 7.0, 2.0, 1.0]);
        for i in 0..3 {
            assert_eq!(m.row(i), Mat4::identity().row(i));
        }
    }

    #[test]
    fn translate_moves_points() {
        let p = Mat4::translate(5.0, 7.0, 2.0).transform_row(Vec4::new(1.0, 1.0, 0.0, 1.0));
        assert_eq!(p, Vec4::new(6.0, 8.0, 2.0, 1.0));
    }

    #[test]
    fn scale_applied_to_ones() {
        let m = Mat4::scale(2.0, 3.0, 4.0);
        assert_eq!(m.array()[15], 1.0);
        assert_eq!(m.transform_row(Vec4::splat(1.0)), Vec4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn rotations_by_zero_are_identity() {
        assert_eq!(Mat4::z_rotate(0.0), Mat4::identity());
        assert_eq!(Mat4::y_rotate(0.0), Mat4::identity());
        assert_eq!(Mat4::x_rotate(0.0), Mat4::identity());
    }

    #[test]
    fn rotation_sign_conventions() {
        let z = Mat4::z_rotate(FRAC_PI_2);
        assert_close(z, Mat4::new([
            0.0, 1.0, 0.0, 0.0,
            -1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]));

        let y = Mat4::y_rotate(FRAC_PI_2);
        assert_close(y, Mat4::new([
            0.0, 0.0, -1.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]));

        let x = Mat4::x_rotate(FRAC_PI_2);
        assert_close(x, Mat4::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]));
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert_eq!(Mat4::multiply(&Mat4::identity(), &m), m);
        assert_eq!(Mat4::multiply(&m, &Mat4::identity()), m);
    }

    #[test]
    fn multiply_row_by_column() {
        let a = sample();
        let b = Mat4::scale(2.0, 1.0, 1.0);
        let p = a * b;
        assert_eq!(p.column0(), [2.0, 10.0, 18.0, 26.0]);
        assert_eq!(p.column1(), a.column1());
    }

    #[test]
    fn multiply_composes_in_row_vector_order() {
        // Scale first, then translate.
        let m = Mat4::scale(2.0, 2.0, 2.0) * Mat4::translate(10.0, 0.0, 0.0);
        let p = m.transform_row(Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(12.0, 2.0, 2.0, 1.0));
    }
}
