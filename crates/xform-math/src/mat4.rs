//! 4x4 transform matrix.
//!
//! [`Mat4`] holds 16 `f32` values in **column-major** order, exactly the
//! layout `glUniformMatrix4fv(.., transpose = false, ..)` and WGSL/GLSL
//! `mat4x4<f32>` uniforms expect. Points are column vectors:
//!
//! ```text
//! | n11 n12 n13 n14 |   | x |
//! | n21 n22 n23 n24 | * | y |
//! | n31 n32 n33 n34 |   | z |
//! | n41 n42 n43 n44 |   | w |
//! ```
//!
//! Element `(row, col)` lives at `elements[col * 4 + row]`; see
//! [`xform_core::offset`].
//!
//! # Destinations
//!
//! Operations that produce a matrix write into an explicit destination
//! (`*_into(.., &mut dst)`) so a render loop can reuse the same storage
//! every frame. Allocating convenience wrappers return a fresh value.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat4, Vec3};
//!
//! let mut model = Mat4::IDENTITY;
//! model.compose(
//!     Vec3::new(1.0, 2.0, 3.0),
//!     Vec3::new(0.0, 0.5, 0.0),
//!     Vec3::splat(2.0),
//! );
//!
//! let mut normal = Mat4::IDENTITY;
//! Mat4::normal_matrix_into(&model, &mut normal).unwrap();
//!
//! // Upload-ready column-major floats
//! let floats: &[f32; 16] = model.as_array();
//! assert_eq!(floats[12..15], [1.0, 2.0, 3.0]);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use xform_core::{offset, Error, Result, MAT4_DIM, MAT4_LEN};

use crate::euler::{self, EulerOrder};
use crate::Vec3;

/// Significant digits in the debug text form.
const DISPLAY_PRECISION: usize = 5;

/// Field width of one entry in the debug text form.
const DISPLAY_WIDTH: usize = 12;

/// A 4x4 `f32` matrix stored column-major.
///
/// # Example
///
/// ```rust
/// use xform_math::Mat4;
///
/// let m = Mat4::new(
///     1.0, 2.0, 3.0, 4.0,
///     5.0, 6.0, 7.0, 8.0,
///     9.0, 10.0, 11.0, 12.0,
///     13.0, 14.0, 15.0, 16.0,
/// );
/// // Arguments are row-major, storage is column-major
/// assert_eq!(m.elements[0..4], [1.0, 5.0, 9.0, 13.0]);
/// assert_eq!(m.get(0, 3), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// Matrix entries, column-major.
    pub elements: [f32; MAT4_LEN],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        elements: [0.0; MAT4_LEN],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols_array([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Creates a matrix from 16 entries given in row-major order
    /// (`n11, n12, n13, n14, n21, ...`).
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        n11: f32, n12: f32, n13: f32, n14: f32,
        n21: f32, n22: f32, n23: f32, n24: f32,
        n31: f32, n32: f32, n33: f32, n34: f32,
        n41: f32, n42: f32, n43: f32, n44: f32,
    ) -> Self {
        Self::from_cols_array([
            n11, n21, n31, n41,
            n12, n22, n32, n42,
            n13, n23, n33, n43,
            n14, n24, n34, n44,
        ])
    }

    /// Creates a matrix from the leading entries of a row-major sequence.
    ///
    /// Entries not supplied keep their identity value (1 on the diagonal,
    /// 0 elsewhere), so an empty slice yields [`Mat4::IDENTITY`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if more than 16 values are given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Mat4;
    ///
    /// let m = Mat4::from_row_major_prefix(&[2.0, 0.0, 0.0, 5.0]).unwrap();
    /// assert_eq!(m.get(0, 0), 2.0);
    /// assert_eq!(m.get(0, 3), 5.0);
    /// assert_eq!(m.get(1, 1), 1.0);
    /// ```
    pub fn from_row_major_prefix(values: &[f32]) -> Result<Self> {
        if values.len() > MAT4_LEN {
            return Err(Error::invalid_argument(format!(
                "expected at most {} values, got {}",
                MAT4_LEN,
                values.len()
            )));
        }
        let mut m = Self::IDENTITY;
        for (i, &v) in values.iter().enumerate() {
            m.elements[offset(i / MAT4_DIM, i % MAT4_DIM)] = v;
        }
        Ok(m)
    }

    /// Creates a matrix from a column-major array (the storage layout).
    #[inline]
    pub const fn from_cols_array(elements: [f32; MAT4_LEN]) -> Self {
        Self { elements }
    }

    /// Returns a copy of the column-major entries.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; MAT4_LEN] {
        self.elements
    }

    /// Column-major entries, ready for a uniform upload.
    #[inline]
    pub fn as_array(&self) -> &[f32; MAT4_LEN] {
        &self.elements
    }

    /// Column-major entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Raw bytes of the column-major entries (native endian), for
    /// buffer writes that take `&[u8]`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Entry at `(row, col)`, zero-based.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.elements[offset(row, col)]
    }

    /// Overwrites the entry at `(row, col)`.
    #[inline]
    pub fn set_element(&mut self, row: usize, col: usize, value: f32) -> &mut Self {
        self.elements[offset(row, col)] = value;
        self
    }

    /// Overwrites all 16 entries, given in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        n11: f32, n12: f32, n13: f32, n14: f32,
        n21: f32, n22: f32, n23: f32, n24: f32,
        n31: f32, n32: f32, n33: f32, n34: f32,
        n41: f32, n42: f32, n43: f32, n44: f32,
    ) -> &mut Self {
        *self = Self::new(
            n11, n12, n13, n14,
            n21, n22, n23, n24,
            n31, n32, n33, n34,
            n41, n42, n43, n44,
        );
        self
    }

    /// Builds `translate * rotate * scale` in place, with the rotation given
    /// as Euler angles (radians) applied in [`EulerOrder::Xyz`].
    ///
    /// Column `i` of the rotation block is scaled by the `i`-th scale
    /// component; the translation goes in the last column and the bottom
    /// row is `(0, 0, 0, 1)`. Non-uniform scale leaves the upper block
    /// non-orthonormal, nothing renormalizes it.
    #[inline]
    pub fn compose(&mut self, position: Vec3, rotation: Vec3, scale: Vec3) -> &mut Self {
        self.compose_with_order(position, rotation, scale, EulerOrder::Xyz)
    }

    /// [`Mat4::compose`] with an explicit Euler order.
    pub fn compose_with_order(
        &mut self,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
        order: EulerOrder,
    ) -> &mut Self {
        let r = euler::rotation_block(euler::quaternion(rotation, order));
        let s = scale.to_array();

        let e = &mut self.elements;
        for (row, r_row) in r.iter().enumerate() {
            for col in 0..3 {
                e[offset(row, col)] = r_row[col] * s[col];
            }
            e[offset(3, row)] = 0.0;
        }
        e[offset(0, 3)] = position.x;
        e[offset(1, 3)] = position.y;
        e[offset(2, 3)] = position.z;
        e[offset(3, 3)] = 1.0;
        self
    }

    /// Allocating form of [`Mat4::compose`].
    #[inline]
    pub fn from_transform(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.compose(position, rotation, scale);
        m
    }

    /// Matrix product `a * b` written into `dst`.
    ///
    /// All 32 source entries are read before any destination entry is
    /// written.
    #[inline]
    pub fn multiply_into<'a>(a: &Self, b: &Self, dst: &'a mut Self) -> &'a mut Self {
        dst.elements = product(&a.elements, &b.elements);
        dst
    }

    /// Matrix product `a * b`.
    #[inline]
    pub fn multiply(a: &Self, b: &Self) -> Self {
        Self::from_cols_array(product(&a.elements, &b.elements))
    }

    /// `self = self * rhs`.
    #[inline]
    pub fn multiply_assign(&mut self, rhs: &Self) -> &mut Self {
        self.elements = product(&self.elements, &rhs.elements);
        self
    }

    /// `self = lhs * self`.
    #[inline]
    pub fn premultiply(&mut self, lhs: &Self) -> &mut Self {
        self.elements = product(&lhs.elements, &self.elements);
        self
    }

    /// Every entry of `m` multiplied by `s`, written into `dst`.
    ///
    /// `m` itself is never modified; use [`Mat4::scale_in_place`] to scale
    /// a matrix where it stands.
    #[inline]
    pub fn multiply_scalar_into<'a>(m: &Self, s: f32, dst: &'a mut Self) -> &'a mut Self {
        for (d, &v) in dst.elements.iter_mut().zip(m.elements.iter()) {
            *d = v * s;
        }
        dst
    }

    /// Every entry of `m` multiplied by `s`.
    #[inline]
    pub fn multiply_scalar(m: &Self, s: f32) -> Self {
        let mut dst = Self::ZERO;
        Self::multiply_scalar_into(m, s, &mut dst);
        dst
    }

    /// Multiplies every entry by `s` in place.
    #[inline]
    pub fn scale_in_place(&mut self, s: f32) -> &mut Self {
        for v in &mut self.elements {
            *v *= s;
        }
        self
    }

    /// Transposes in place (six off-diagonal swaps).
    pub fn transpose(&mut self) -> &mut Self {
        let e = &mut self.elements;
        e.swap(1, 4);
        e.swap(2, 8);
        e.swap(6, 9);
        e.swap(3, 12);
        e.swap(7, 13);
        e.swap(11, 14);
        self
    }

    /// Returns the transpose.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut t = *self;
        t.transpose();
        t
    }

    /// Adjugate (transpose of the cofactor matrix), by full cofactor expansion.
    pub fn adjugate(&self) -> Self {
        Self::from_cols_array(adjugate(&self.elements))
    }

    /// Determinant, expanded along the first column.
    pub fn determinant(&self) -> f32 {
        determinant(&self.elements, &adjugate(&self.elements))
    }

    /// Inverse of `m` written into `dst`.
    ///
    /// Computes the adjugate, takes the determinant from its first column,
    /// then scales the adjugate by `1 / det`. There is no pivoting: only an
    /// exactly zero determinant is detected, near-singular input produces
    /// large or non-finite entries.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the determinant is exactly `0.0`.
    /// `dst` is left untouched in that case.
    pub fn inverse_into(m: &Self, dst: &mut Self) -> Result<()> {
        let adj = adjugate(&m.elements);
        let det = determinant(&m.elements, &adj);
        if det == 0.0 {
            return Err(Error::singular_matrix(det));
        }

        let inv_det = 1.0 / det;
        for (d, v) in dst.elements.iter_mut().zip(adj) {
            *d = v * inv_det;
        }
        Ok(())
    }

    /// Returns the inverse.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the determinant is exactly `0.0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::Mat4;
    ///
    /// assert!(Mat4::ZERO.inverse().is_err());
    /// assert_eq!(Mat4::IDENTITY.inverse().unwrap(), Mat4::IDENTITY);
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Self> {
        let mut dst = Self::IDENTITY;
        Self::inverse_into(self, &mut dst)?;
        Ok(dst)
    }

    /// Inverts in place. On error `self` is unchanged.
    #[inline]
    pub fn invert(&mut self) -> Result<&mut Self> {
        let m = *self;
        Self::inverse_into(&m, self)?;
        Ok(self)
    }

    /// Normal matrix `transpose(inverse(model))` written into `dst`.
    ///
    /// Transforms surface normals consistently under non-uniform scale.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if `model` is singular (e.g. a zero scale axis).
    #[inline]
    pub fn normal_matrix_into(model: &Self, dst: &mut Self) -> Result<()> {
        Self::inverse_into(model, dst)?;
        dst.transpose();
        Ok(())
    }

    /// Returns `transpose(inverse(self))`.
    #[inline]
    pub fn normal_matrix(&self) -> Result<Self> {
        let mut dst = Self::IDENTITY;
        Self::normal_matrix_into(self, &mut dst)?;
        Ok(dst)
    }

    /// Multiplies a homogeneous column vector.
    #[inline]
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let e = &self.elements;
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = e[offset(row, 0)] * v[0]
                + e[offset(row, 1)] * v[1]
                + e[offset(row, 2)] * v[2]
                + e[offset(row, 3)] * v[3];
        }
        out
    }

    /// Transforms a point (`w = 1`), ignoring the resulting `w`.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a direction (`w = 0`): translation does not apply.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([v.x, v.y, v.z, 0.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a point and applies the perspective divide.
    ///
    /// A resulting `w` of zero yields non-finite components.
    #[inline]
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x / w, y / w, z / w)
    }

    /// Returns true if all entries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|v| v.is_finite())
    }

    /// Converts to glam Mat4 (same column-major layout).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.elements)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

/// Column-major product with every source entry cached up front.
#[inline]
fn product(a: &[f32; MAT4_LEN], b: &[f32; MAT4_LEN]) -> [f32; MAT4_LEN] {
    let a = *a;
    let b = *b;
    let mut r = [0.0; MAT4_LEN];
    for col in 0..MAT4_DIM {
        for row in 0..MAT4_DIM {
            r[offset(row, col)] = a[offset(row, 0)] * b[offset(0, col)]
                + a[offset(row, 1)] * b[offset(1, col)]
                + a[offset(row, 2)] * b[offset(2, col)]
                + a[offset(row, 3)] * b[offset(3, col)];
        }
    }
    r
}

/// Column-major adjugate via the 4x4 cofactor expansion.
#[rustfmt::skip]
fn adjugate(m: &[f32; MAT4_LEN]) -> [f32; MAT4_LEN] {
    let (a11, a12, a13, a14) = (m[0], m[4], m[8], m[12]);
    let (a21, a22, a23, a24) = (m[1], m[5], m[9], m[13]);
    let (a31, a32, a33, a34) = (m[2], m[6], m[10], m[14]);
    let (a41, a42, a43, a44) = (m[3], m[7], m[11], m[15]);

    let mut r = [0.0; MAT4_LEN];
    r[0]  = a23*a34*a42 - a24*a33*a42 + a24*a32*a43 - a22*a34*a43 - a23*a32*a44 + a22*a33*a44;
    r[4]  = a14*a33*a42 - a13*a34*a42 - a14*a32*a43 + a12*a34*a43 + a13*a32*a44 - a12*a33*a44;
    r[8]  = a13*a24*a42 - a14*a23*a42 + a14*a22*a43 - a12*a24*a43 - a13*a22*a44 + a12*a23*a44;
    r[12] = a14*a23*a32 - a13*a24*a32 - a14*a22*a33 + a12*a24*a33 + a13*a22*a34 - a12*a23*a34;
    r[1]  = a24*a33*a41 - a23*a34*a41 - a24*a31*a43 + a21*a34*a43 + a23*a31*a44 - a21*a33*a44;
    r[5]  = a13*a34*a41 - a14*a33*a41 + a14*a31*a43 - a11*a34*a43 - a13*a31*a44 + a11*a33*a44;
    r[9]  = a14*a23*a41 - a13*a24*a41 - a14*a21*a43 + a11*a24*a43 + a13*a21*a44 - a11*a23*a44;
    r[13] = a13*a24*a31 - a14*a23*a31 + a14*a21*a33 - a11*a24*a33 - a13*a21*a34 + a11*a23*a34;
    r[2]  = a22*a34*a41 - a24*a32*a41 + a24*a31*a42 - a21*a34*a42 - a22*a31*a44 + a21*a32*a44;
    r[6]  = a14*a32*a41 - a12*a34*a41 - a14*a31*a42 + a11*a34*a42 + a12*a31*a44 - a11*a32*a44;
    r[10] = a12*a24*a41 - a14*a22*a41 + a14*a21*a42 - a11*a24*a42 - a12*a21*a44 + a11*a22*a44;
    r[14] = a14*a22*a31 - a12*a24*a31 - a14*a21*a32 + a11*a24*a32 + a12*a21*a34 - a11*a22*a34;
    r[3]  = a23*a32*a41 - a22*a33*a41 - a23*a31*a42 + a21*a33*a42 + a22*a31*a43 - a21*a32*a43;
    r[7]  = a12*a33*a41 - a13*a32*a41 + a13*a31*a42 - a11*a33*a42 - a12*a31*a43 + a11*a32*a43;
    r[11] = a13*a22*a41 - a12*a23*a41 - a13*a21*a42 + a11*a23*a42 + a12*a21*a43 - a11*a22*a43;
    r[15] = a12*a23*a31 - a13*a22*a31 + a13*a21*a32 - a11*a23*a32 - a12*a21*a33 + a11*a22*a33;
    r
}

/// First-column expansion reusing the adjugate's first row of cofactors.
#[inline]
fn determinant(m: &[f32; MAT4_LEN], adj: &[f32; MAT4_LEN]) -> f32 {
    m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

/// Enough significant digits to print any `f32` exactly.
const EXACT_DIGITS: usize = 120;

/// Formats like JavaScript's `Number.prototype.toPrecision(5)`.
///
/// Rounding works on the exact decimal expansion of the value and breaks
/// ties away from zero; `std` formatting would round them to even.
fn to_precision(value: f32) -> String {
    let v = f64::from(value);
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return format!("{:.*}", DISPLAY_PRECISION - 1, 0.0);
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, v.abs());
    let (mantissa, exp) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exp: i32 = exp.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut digits = all[..DISPLAY_PRECISION].to_vec();
    if all[DISPLAY_PRECISION] >= b'5' {
        let mut i = DISPLAY_PRECISION;
        loop {
            if i == 0 {
                // 99999.5 -> 1.0000e+5
                digits.insert(0, b'1');
                digits.truncate(DISPLAY_PRECISION);
                exp += 1;
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let digits: String = digits.into_iter().map(char::from).collect();
    let sign = if v < 0.0 { "-" } else { "" };
    let p = DISPLAY_PRECISION as i32;

    if exp < -6 || exp >= p {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{sign}{}.{}e{exp_sign}{}", &digits[..1], &digits[1..], exp.abs())
    } else if exp >= 0 {
        let int_len = exp as usize + 1;
        if int_len == DISPLAY_PRECISION {
            format!("{sign}{digits}")
        } else {
            format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Four rows of four right-aligned 12-character fields, each row preceded
/// by a newline. Diagnostic only, not meant to be parsed.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..MAT4_DIM {
            writeln!(f)?;
            for col in 0..MAT4_DIM {
                let s = to_precision(self.get(row, col));
                if s.len() > DISPLAY_WIDTH {
                    f.write_str(&s[s.len() - DISPLAY_WIDTH..])?;
                } else {
                    write!(f, "{:>width$}", s, width = DISPLAY_WIDTH)?;
                }
            }
        }
        Ok(())
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Mat4::multiply(&self, &rhs)
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply_assign(&rhs);
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Mat4::multiply_scalar(&self, rhs)
    }
}

impl MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_in_place(rhs);
    }
}

// Mat4 * [x, y, z, w]
impl Mul<[f32; 4]> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn mul(self, rhs: [f32; 4]) -> [f32; 4] {
        self.transform_vec4(rhs)
    }
}

/// `m[(row, col)]`
impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.elements[offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.elements[offset(row, col)]
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl From<Mat4> for [f32; MAT4_LEN] {
    #[inline]
    fn from(m: Mat4) -> [f32; MAT4_LEN] {
        m.elements
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
