//! Factory functions for common transforms.
//!
//! Each factory has a destination form (`*_into`) that overwrites all 16
//! entries of an existing matrix and returns it, plus an allocating form.
//!
//! Conventions: right-handed, column vectors, OpenGL clip space
//! (`z` in `[-w, w]`, `w = -z_eye`). Rotation angles are radians;
//! [`Mat4::perspective`] takes its field of view in **degrees**.
//!
//! ```rust
//! use xform_math::{Mat4, Vec3};
//!
//! let mut view = Mat4::IDENTITY;
//! let mut proj = Mat4::IDENTITY;
//!
//! // Once per frame, no allocation
//! Mat4::look_at_into(Vec3::new(0.0, 30.0, 30.0), Vec3::ZERO, Vec3::Y, &mut view);
//! Mat4::perspective_into(70.0, 16.0 / 9.0, 0.1, 1000.0, &mut proj);
//!
//! let clip_from_world = proj * view;
//! assert!(clip_from_world.is_finite());
//! ```

use xform_core::half_fov_rad;

use crate::{Mat4, Vec3};

/// Nudge applied to the forward axis when `up` is parallel to it.
const LOOK_AT_NUDGE: f32 = 0.0001;

impl Mat4 {
    /// Translation by `position`, written into `dst`.
    #[rustfmt::skip]
    pub fn translation_into(position: Vec3, dst: &mut Mat4) -> &mut Mat4 {
        let Vec3 { x, y, z } = position;
        dst.set(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Translation by `position`.
    #[inline]
    pub fn translation(position: Vec3) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::translation_into(position, &mut m);
        m
    }

    /// Rotation of `theta` radians about the X axis, written into `dst`.
    #[rustfmt::skip]
    pub fn rotation_x_into(theta: f32, dst: &mut Mat4) -> &mut Mat4 {
        let (s, c) = theta.sin_cos();
        dst.set(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,  -s, 0.0,
            0.0,   s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `theta` radians about the X axis.
    #[inline]
    pub fn rotation_x(theta: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::rotation_x_into(theta, &mut m);
        m
    }

    /// Rotation of `theta` radians about the Y axis, written into `dst`.
    #[rustfmt::skip]
    pub fn rotation_y_into(theta: f32, dst: &mut Mat4) -> &mut Mat4 {
        let (s, c) = theta.sin_cos();
        dst.set(
              c, 0.0,   s, 0.0,
            0.0, 1.0, 0.0, 0.0,
             -s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `theta` radians about the Y axis.
    #[inline]
    pub fn rotation_y(theta: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::rotation_y_into(theta, &mut m);
        m
    }

    /// Rotation of `theta` radians about the Z axis, written into `dst`.
    #[rustfmt::skip]
    pub fn rotation_z_into(theta: f32, dst: &mut Mat4) -> &mut Mat4 {
        let (s, c) = theta.sin_cos();
        dst.set(
              c,  -s, 0.0, 0.0,
              s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `theta` radians about the Z axis.
    #[inline]
    pub fn rotation_z(theta: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::rotation_z_into(theta, &mut m);
        m
    }

    /// Non-uniform scale, written into `dst`.
    #[rustfmt::skip]
    pub fn scale_into(x: f32, y: f32, z: f32, dst: &mut Mat4) -> &mut Mat4 {
        dst.set(
              x, 0.0, 0.0, 0.0,
            0.0,   y, 0.0, 0.0,
            0.0, 0.0,   z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Non-uniform scale.
    #[inline]
    pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::scale_into(x, y, z, &mut m);
        m
    }

    /// Off-center perspective frustum, written into `dst`.
    ///
    /// `near` and `far` are positive distances along -Z. The bottom row is
    /// `(0, 0, -1, 0)`. Degenerate bounds (`left == right`, ...) divide by
    /// zero and yield non-finite entries.
    #[rustfmt::skip]
    pub fn frustum_into(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
        dst: &mut Mat4,
    ) -> &mut Mat4 {
        let x = 2.0 * near / (right - left);
        let y = 2.0 * near / (top - bottom);

        let a = (right + left) / (right - left);
        let b = (top + bottom) / (top - bottom);
        let c = -(far + near) / (far - near);
        let d = -2.0 * far * near / (far - near);

        dst.set(
              x, 0.0,    a, 0.0,
            0.0,   y,    b, 0.0,
            0.0, 0.0,    c,   d,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Off-center perspective frustum.
    #[inline]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::frustum_into(left, right, bottom, top, near, far, &mut m);
        m
    }

    /// Symmetric perspective projection, written into `dst`.
    ///
    /// `fov_degrees` is the full vertical field of view in **degrees**
    /// (unlike every rotation angle in this crate). Bounds are
    /// `ymax = near * tan(fov * PI / 360)`, `xmax = ymax * aspect`.
    pub fn perspective_into(
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
        dst: &mut Mat4,
    ) -> &mut Mat4 {
        let ymax = near * half_fov_rad(fov_degrees).tan();
        let ymin = -ymax;
        let xmin = ymin * aspect;
        let xmax = ymax * aspect;

        Self::frustum_into(xmin, xmax, ymin, ymax, near, far, dst)
    }

    /// Symmetric perspective projection; field of view in degrees.
    #[inline]
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::perspective_into(fov_degrees, aspect, near, far, &mut m);
        m
    }

    /// Orthographic projection, written into `dst`.
    #[rustfmt::skip]
    pub fn orthographic_into(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
        dst: &mut Mat4,
    ) -> &mut Mat4 {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        let p = 1.0 / (far - near);

        dst.set(
            2.0 * w,     0.0,      0.0, -(right + left) * w,
                0.0, 2.0 * h,      0.0, -(top + bottom) * h,
                0.0,     0.0, -2.0 * p,   -(far + near) * p,
                0.0,     0.0,      0.0,                 1.0,
        )
    }

    /// Orthographic projection.
    #[inline]
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::orthographic_into(left, right, bottom, top, near, far, &mut m);
        m
    }

    /// View matrix for a camera at `eye` looking at `target`, written into `dst`.
    ///
    /// Builds the basis `z = normalize(eye - target)`,
    /// `x = normalize(up x z)`, `y = z x x` and stores it as the first three
    /// *rows*, with translation `-dot(axis, eye)` per axis: the result is
    /// already the inverse of the camera's world placement.
    ///
    /// Degenerate input is patched rather than reported: `eye == target`
    /// uses `z = (0, 0, 1)`, and `up` parallel to `z` nudges `z.z` by
    /// `0.0001` before retrying the cross product (without renormalizing).
    pub fn look_at_into(eye: Vec3, target: Vec3, up: Vec3, dst: &mut Mat4) -> &mut Mat4 {
        let mut z = eye - target;
        if z.length() == 0.0 {
            z.z = 1.0;
        }
        z.normalize();

        let mut x = up.cross(z);
        if x.length() == 0.0 {
            z.z += LOOK_AT_NUDGE;
            x = up.cross(z);
        }
        x.normalize();

        let y = z.cross(x);

        dst.set(
            x.x, x.y, x.z, -x.dot(eye),
            y.x, y.y, y.z, -y.dot(eye),
            z.x, z.y, z.z, -z.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// View matrix for a camera at `eye` looking at `target`.
    #[inline]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        Self::look_at_into(eye, target, up, &mut m);
        m
    }
}
