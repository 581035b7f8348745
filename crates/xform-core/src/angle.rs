//! Angle unit helpers.
//!
//! All rotation inputs are radians. The one exception is the vertical
//! field of view passed to `Mat4::perspective`, which is in **degrees**
//! to match the camera conventions of the render loops this kernel feeds.

use std::f32::consts::PI;

/// Converts degrees to radians.
///
/// ```rust
/// use xform_core::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Half of a field-of-view angle given in degrees, in radians.
///
/// Equivalent to `fov * PI / 360`, the expression perspective
/// projection uses for `tan(fov / 2)`.
#[inline]
pub fn half_fov_rad(fov_degrees: f32) -> f32 {
    fov_degrees * PI / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_rad_roundtrip() {
        for d in [-270.0f32, -45.0, 0.0, 30.0, 90.0, 360.0] {
            assert!((rad_to_deg(deg_to_rad(d)) - d).abs() < 1e-3);
        }
    }

    #[test]
    fn test_half_fov() {
        assert!((half_fov_rad(90.0) - PI / 4.0).abs() < 1e-6);
        assert!((half_fov_rad(70.0) - deg_to_rad(70.0) / 2.0).abs() < 1e-7);
    }
}
