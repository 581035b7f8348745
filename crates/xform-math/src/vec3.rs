//! 3-component vector for positions, directions, Euler angles and scales.
//!
//! Every binary operation comes in two forms:
//!
//! - `*_into(a, b, &mut dst)` writes into a caller-owned destination and
//!   returns it, so per-frame updates never allocate;
//! - a plain form (`Vec3::add`, `+`, ...) that returns a fresh value.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::Vec3;
//!
//! let mut position = Vec3::new(0.0, 1.0, 0.0);
//! let velocity = Vec3::new(0.5, 0.0, 0.0);
//!
//! // In-place integration step
//! let p = position;
//! Vec3::add_into(p, velocity, &mut position);
//! assert_eq!(position, Vec3::new(0.5, 1.0, 0.0));
//! ```

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// A 3D vector of `f32` components.
///
/// Plain value type: `Copy`, no hidden state, no invariant beyond holding
/// three floats. Non-finite components propagate through all operations.
///
/// # Example
///
/// ```rust
/// use xform_math::Vec3;
///
/// let up = Vec3::Y;
/// let right = Vec3::X;
/// assert_eq!(right.cross(up), Vec3::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise sum written into `dst`.
    #[inline]
    pub fn add_into(a: Self, b: Self, dst: &mut Self) -> &mut Self {
        dst.x = a.x + b.x;
        dst.y = a.y + b.y;
        dst.z = a.z + b.z;
        dst
    }

    /// Component-wise difference `a - b` written into `dst`.
    #[inline]
    pub fn subtract_into(a: Self, b: Self, dst: &mut Self) -> &mut Self {
        dst.x = a.x - b.x;
        dst.y = a.y - b.y;
        dst.z = a.z - b.z;
        dst
    }

    /// Component-wise (Hadamard) product written into `dst`.
    #[inline]
    pub fn multiply_into(a: Self, b: Self, dst: &mut Self) -> &mut Self {
        dst.x = a.x * b.x;
        dst.y = a.y * b.y;
        dst.z = a.z * b.z;
        dst
    }

    /// Every component of `v` scaled by `s`, written into `dst`.
    #[inline]
    pub fn multiply_scalar_into(v: Self, s: f32, dst: &mut Self) -> &mut Self {
        dst.x = v.x * s;
        dst.y = v.y * s;
        dst.z = v.z * s;
        dst
    }

    /// Right-handed cross product `a x b` written into `dst`.
    #[inline]
    pub fn cross_into(a: Self, b: Self, dst: &mut Self) -> &mut Self {
        // Read everything first: `dst` may hold a copy of `a` or `b`.
        let (ax, ay, az) = (a.x, a.y, a.z);
        let (bx, by, bz) = (b.x, b.y, b.z);
        dst.x = ay * bz - az * by;
        dst.y = az * bx - ax * bz;
        dst.z = ax * by - ay * bx;
        dst
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(a: Self, b: Self) -> Self {
        let mut dst = Self::ZERO;
        Self::add_into(a, b, &mut dst);
        dst
    }

    /// Component-wise difference `a - b`.
    #[inline]
    pub fn subtract(a: Self, b: Self) -> Self {
        let mut dst = Self::ZERO;
        Self::subtract_into(a, b, &mut dst);
        dst
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(a: Self, b: Self) -> Self {
        let mut dst = Self::ZERO;
        Self::multiply_into(a, b, &mut dst);
        dst
    }

    /// Scales every component by `s`.
    #[inline]
    pub fn multiply_scalar(v: Self, s: f32) -> Self {
        let mut dst = Self::ZERO;
        Self::multiply_scalar_into(v, s, &mut dst);
        dst
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product:
    /// `(ay*bz - az*by, az*bx - ax*bz, ax*by - ay*bx)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let mut dst = Self::ZERO;
        Self::cross_into(self, other, &mut dst);
        dst
    }

    /// Euclidean length `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Divides each component by the length, in place.
    ///
    /// A zero-length vector becomes `(NaN, NaN, NaN)`: there is no guard.
    /// Callers building bases from possibly degenerate geometry must check
    /// the length first, as `Mat4::look_at` does.
    ///
    /// ```rust
    /// use xform_math::Vec3;
    ///
    /// let mut v = Vec3::new(3.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec3::new(0.6, 0.0, 0.8));
    ///
    /// let mut zero = Vec3::ZERO;
    /// zero.normalize();
    /// assert!(zero.x.is_nan());
    /// ```
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    /// Returns a normalized copy. Same zero-length behavior as [`Vec3::normalize`].
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec3::add(self, rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        let lhs = *self;
        Vec3::add_into(lhs, rhs, self);
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec3::subtract(self, rhs)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        let lhs = *self;
        Vec3::subtract_into(lhs, rhs, self);
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Vec3::multiply(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Vec3::multiply_scalar(self, rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::multiply_scalar(rhs, self)
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        let v = *self;
        Vec3::multiply_scalar_into(v, rhs, self);
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
