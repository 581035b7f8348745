//! SIMD paths for batch transform work.
//!
//! Uses the `wide` crate for portable 4-lane SIMD on stable Rust. A 4x4
//! column-major matrix maps naturally onto four `f32x4` columns:
//!
//! ```text
//! M * v = col0 * v.x + col1 * v.y + col2 * v.z + col3 * v.w
//! ```
//!
//! Results agree with the scalar paths in [`Mat4`] within float
//! tolerance; summation order differs, so they are not bit-identical.
//!
//! # Example
//!
//! ```rust
//! use xform_math::{simd, Mat4, Vec3};
//!
//! let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
//! let points = [Vec3::ZERO, Vec3::ONE];
//! let mut out = [Vec3::ZERO; 2];
//! simd::transform_points(&m, &points, &mut out);
//! assert_eq!(out[1], Vec3::new(2.0, 3.0, 4.0));
//! ```

use wide::f32x4;

use crate::{Mat4, Vec3};

#[inline]
fn columns(m: &Mat4) -> [f32x4; 4] {
    let e = &m.elements;
    [
        f32x4::from([e[0], e[1], e[2], e[3]]),
        f32x4::from([e[4], e[5], e[6], e[7]]),
        f32x4::from([e[8], e[9], e[10], e[11]]),
        f32x4::from([e[12], e[13], e[14], e[15]]),
    ]
}

#[inline]
fn apply(cols: &[f32x4; 4], v: [f32; 4]) -> f32x4 {
    cols[0] * f32x4::splat(v[0])
        + cols[1] * f32x4::splat(v[1])
        + cols[2] * f32x4::splat(v[2])
        + cols[3] * f32x4::splat(v[3])
}

/// Matrix product `a * b`, one SIMD column at a time.
pub fn multiply_x4(a: &Mat4, b: &Mat4) -> Mat4 {
    let cols = columns(a);
    let be = &b.elements;
    let mut out = Mat4::ZERO;
    for c in 0..4 {
        let col = apply(&cols, [be[c * 4], be[c * 4 + 1], be[c * 4 + 2], be[c * 4 + 3]]);
        out.elements[c * 4..c * 4 + 4].copy_from_slice(&col.to_array());
    }
    out
}

/// Multiplies a homogeneous vector.
#[inline]
pub fn transform_vec4_x4(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
    apply(&columns(m), v).to_array()
}

/// Transforms `points` (`w = 1`) into `out`, element by element.
///
/// Processes `min(points.len(), out.len())` points.
pub fn transform_points(m: &Mat4, points: &[Vec3], out: &mut [Vec3]) {
    let cols = columns(m);
    for (p, o) in points.iter().zip(out.iter_mut()) {
        let [x, y, z, _] = apply(&cols, [p.x, p.y, p.z, 1.0]).to_array();
        *o = Vec3::new(x, y, z);
    }
}

/// Transforms `vectors` (`w = 0`) into `out`; translation is ignored.
pub fn transform_vectors(m: &Mat4, vectors: &[Vec3], out: &mut [Vec3]) {
    let cols = columns(m);
    for (v, o) in vectors.iter().zip(out.iter_mut()) {
        let [x, y, z, _] = apply(&cols, [v.x, v.y, v.z, 0.0]).to_array();
        *o = Vec3::new(x, y, z);
    }
}
